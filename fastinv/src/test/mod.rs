use crate::{Compound, Converter, ItemMeta, ItemStack, Value};

mod item;
mod player;

/// A compound with children in the given order.
pub fn compound<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Compound(
        entries
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect(),
    )
}

pub fn list<const N: usize>(items: [Value; N]) -> Value {
    Value::List(items.into())
}

pub fn string(s: &str) -> Value {
    Value::String(s.to_owned())
}

/// An item compound as found in an inventory list, without a slot.
pub fn item(id: &str, count: i8, tag: Option<Value>) -> Value {
    let mut entries = vec![
        ("id".to_owned(), string(id)),
        ("Count".to_owned(), Value::Byte(count)),
    ];
    if let Some(tag) = tag {
        entries.push(("tag".to_owned(), tag));
    }
    Value::Compound(entries.into_iter().collect())
}

pub fn meta_of(conv: &Converter, item_type: &str, tag: &Value) -> ItemMeta {
    conv.item_meta(item_type, Compound::new(tag).unwrap())
        .unwrap()
}

/// The JSON a default converter produces for `tag` on `item_type`.
pub fn meta_json(item_type: &str, tag: &Value) -> serde_json::Value {
    serde_json::to_value(meta_of(&Converter::default(), item_type, tag)).unwrap()
}

pub fn stack_of(conv: &Converter, item: &Value) -> ItemStack {
    conv.item_stack(Compound::new(item).unwrap()).unwrap()
}
