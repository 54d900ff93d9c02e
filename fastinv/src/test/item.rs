use serde_json::json;

use super::{compound, item, stack_of, string};
use crate::{error::Error, Compound, ConvertOptions, Converter, ItemStack, MetaType, Value};

#[test]
fn single_item_has_no_amount() {
    let stack = stack_of(&Converter::default(), &item("minecraft:diamond", 1, None));
    assert_eq!(
        serde_json::to_value(&stack).unwrap(),
        json!({"==": "org.bukkit.inventory.ItemStack", "v": 3465, "type": "DIAMOND"})
    );
    assert_eq!(stack.count(), 1);
}

#[test]
fn other_counts_are_emitted() {
    let conv = Converter::default();
    for count in [5, 0, 64] {
        let stack = stack_of(&conv, &item("minecraft:dirt", count, None));
        let json = serde_json::to_value(&stack).unwrap();
        assert_eq!(json["amount"], count as i64);
    }
}

#[test]
fn meta_only_with_tag() {
    let conv = Converter::default();
    let bare = stack_of(&conv, &item("minecraft:written_book", 1, None));
    assert!(bare.meta.is_none());

    let tagged = stack_of(
        &conv,
        &item(
            "minecraft:written_book",
            1,
            Some(compound([("title", string("Log"))])),
        ),
    );
    assert_eq!(tagged.meta.unwrap().meta_type, MetaType::BookSigned);
}

#[test]
fn data_version_comes_from_options() {
    let conv = Converter::new(ConvertOptions {
        data_version: 3700,
        ..Default::default()
    });
    let stack = stack_of(&conv, &item("minecraft:stone", 2, None));
    assert_eq!(stack.v, 3700);
}

#[test]
fn air() {
    assert_eq!(
        serde_json::to_value(ItemStack::air(3465)).unwrap(),
        json!({"==": "org.bukkit.inventory.ItemStack", "v": 3465, "type": "AIR", "amount": 0})
    );
}

#[test]
fn count_is_required() {
    let v = compound([("id", string("minecraft:stone"))]);
    let err = Converter::default()
        .item_stack(Compound::new(&v).unwrap())
        .unwrap_err();
    assert!(matches!(err, Error::MissingField(f) if f == "Count"));
}

#[test]
fn id_must_be_a_string() {
    let v = compound([("id", Value::Int(1)), ("Count", Value::Byte(1))]);
    let err = Converter::default()
        .item_stack(Compound::new(&v).unwrap())
        .unwrap_err();
    assert!(matches!(err, Error::WrongType { .. }));
}
