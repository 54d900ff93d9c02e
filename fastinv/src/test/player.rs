use fastnbt::Tag;
use serde_json::json;

use super::builder::Builder;
use crate::{
    error::Error,
    last_known_name,
    options::{ConvertOptions, SchemaProfile, SlotPolicy},
    Converter, GameMode, Value,
};

/// The fields every player document needs, minus the inventories.
fn base(b: Builder, game_mode: i32) -> Builder {
    b.int("playerGameType", game_mode)
        .string("Dimension", "minecraft:the_nether")
        .start_list("Pos", Tag::Double, 3)
        .double_payload(1.5)
        .double_payload(64.0)
        .double_payload(-2.25)
        .start_list("Rotation", Tag::Float, 2)
        .float_payload(90.0)
        .float_payload(-15.5)
        .float("foodExhaustionLevel", 0.5)
        .int("foodLevel", 20)
        .int("XpLevel", 7)
        .float("XpP", 0.25)
        .float("Health", 20.0)
        .int("XpTotal", 120)
        .float("FallDistance", 0.0)
        .short("Fire", -20)
        .float("foodSaturationLevel", 5.0)
        .short("Air", 300)
}

fn bukkit(b: Builder) -> Builder {
    b.start_compound("bukkit")
        .string("lastKnownName", "Steve")
        .end_compound()
}

fn spawn(b: Builder) -> Builder {
    b.int("SpawnX", 10)
        .int("SpawnY", 70)
        .int("SpawnZ", -5)
        .float("SpawnAngle", 45.0)
        .string("SpawnDimension", "minecraft:overworld")
}

fn player() -> Value {
    let b = Builder::new().start_compound("");
    let b = spawn(bukkit(base(b, 0)));
    let input = b
        .start_list("Inventory", Tag::Compound, 4)
        .slot_item(0, "minecraft:diamond_sword", 1)
        .slot_item(9, "minecraft:torch", 32)
        .slot_item(103, "minecraft:iron_helmet", 1)
        .slot_item(-106, "minecraft:shield", 1)
        .start_list("EnderItems", Tag::Compound, 1)
        .slot_item(26, "minecraft:ender_pearl", 16)
        .start_list("ActiveEffects", Tag::Compound, 1)
        .start_anon_compound()
        .byte("Id", 1)
        .int("Duration", 600)
        .byte("Amplifier", 0)
        .byte("Ambient", 0)
        .byte("ShowParticles", 1)
        .byte("ShowIcon", 1)
        .end_anon_compound()
        .end_compound()
        .build();

    fastnbt::from_bytes(&input).unwrap()
}

fn convert(root: &Value, options: ConvertOptions) -> serde_json::Value {
    let snapshot = Converter::new(options).player(root, "world").unwrap();
    serde_json::to_value(snapshot).unwrap()
}

#[test]
fn keyed_by_game_mode() {
    let json = convert(&player(), ConvertOptions::default());
    let modes: Vec<_> = json.as_object().unwrap().keys().collect();
    assert_eq!(modes, ["SURVIVAL"]);
}

#[test]
fn slots_are_routed() {
    let json = convert(&player(), ConvertOptions::default());
    let profile = &json["SURVIVAL"];

    assert_eq!(profile["inventoryContents"]["0"]["type"], "DIAMOND_SWORD");
    assert_eq!(profile["inventoryContents"]["9"]["amount"], 32);
    assert_eq!(profile["armorContents"]["3"]["type"], "IRON_HELMET");
    assert_eq!(profile["offHandItem"]["type"], "SHIELD");
    assert!(profile["offHandItem"].get("amount").is_none());
    assert_eq!(profile["enderChestContents"]["26"]["type"], "ENDER_PEARL");

    assert_eq!(profile["inventoryContents"].as_object().unwrap().len(), 2);
    assert_eq!(profile["armorContents"].as_object().unwrap().len(), 1);
}

#[test]
fn locations() {
    let json = convert(&player(), ConvertOptions::default());
    let profile = &json["SURVIVAL"];

    assert_eq!(
        profile["lastLocation"],
        json!({
            "==": "org.bukkit.Location",
            "world": "world_nether",
            "x": 1.5,
            "y": 64.0,
            "z": -2.25,
            "pitch": -15.5,
            "yaw": 90.0,
        })
    );
    assert_eq!(
        profile["bedSpawnLocation"],
        json!({
            "==": "org.bukkit.Location",
            "world": "world",
            "x": 10.0,
            "y": 70.0,
            "z": -5.0,
            "pitch": 0.0,
            "yaw": 45.0,
        })
    );
}

#[test]
fn legacy_spawn_uses_player_dimension() {
    let options = ConvertOptions {
        schema: SchemaProfile::legacy(),
        ..Default::default()
    };
    let json = convert(&player(), options);
    assert_eq!(json["SURVIVAL"]["bedSpawnLocation"]["world"], "world_nether");
}

#[test]
fn legacy_rotation_is_pitch_first() {
    let options = ConvertOptions {
        schema: SchemaProfile::legacy(),
        ..Default::default()
    };
    let json = convert(&player(), options);
    let location = &json["SURVIVAL"]["lastLocation"];
    assert_eq!(location["pitch"], 90.0);
    assert_eq!(location["yaw"], -15.5);
    assert_eq!(json["SURVIVAL"]["bedSpawnLocation"]["yaw"], 45.0);
}

#[test]
fn stats_are_strings() {
    let json = convert(&player(), ConvertOptions::default());
    assert_eq!(
        json["SURVIVAL"]["stats"],
        json!({
            "ex": "0.5",
            "ma": "300",
            "fl": "20",
            "el": "7",
            "xp": "0.25",
            "hp": "20.0",
            "txp": "120",
            "fd": "0.0",
            "ft": "-20",
            "sa": "5.0",
            "ra": "300",
        })
    );
}

#[test]
fn potions() {
    let json = convert(&player(), ConvertOptions::default());
    assert_eq!(json["SURVIVAL"]["potions"][0]["effect"], 1);
    assert_eq!(json["SURVIVAL"]["potions"][0]["duration"], 600);
}

fn minimal(inventory: impl FnOnce(Builder) -> Builder) -> Value {
    let b = base(Builder::new().start_compound(""), 1);
    let input = inventory(b).end_compound().build();
    fastnbt::from_bytes(&input).unwrap()
}

#[test]
fn missing_lists_and_spawn() {
    let root = minimal(|b| b);
    let snapshot = Converter::default().player(&root, "world").unwrap();

    assert_eq!(snapshot.game_mode, GameMode::Creative);
    let profile = &snapshot.profile;
    assert!(profile.inventory_contents.is_empty());
    assert!(profile.ender_chest_contents.is_empty());
    assert!(profile.potions.is_empty());
    assert!(profile.bed_spawn_location.is_none());
    assert_eq!(profile.off_hand_item.item_type, "AIR");
    assert_eq!(profile.off_hand_item.amount, Some(0));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json["CREATIVE"].get("bedSpawnLocation").is_none());
}

fn with_broken_slot(b: Builder) -> Builder {
    b.start_list("Inventory", Tag::Compound, 2)
        .slot_item(0, "minecraft:stone", 1)
        .start_anon_compound()
        .byte("Slot", 1)
        .string("id", "minecraft:dirt")
        .end_anon_compound()
}

#[test]
fn broken_slot_aborts_by_default() {
    let root = minimal(with_broken_slot);
    let err = Converter::default().player(&root, "world").unwrap_err();
    assert!(matches!(err, Error::MissingField(f) if f == "Count"));
}

#[test]
fn broken_slot_can_be_skipped() {
    let root = minimal(with_broken_slot);
    let options = ConvertOptions {
        slot_policy: SlotPolicy::Skip,
        ..Default::default()
    };
    let snapshot = Converter::new(options).player(&root, "world").unwrap();

    let slots: Vec<_> = snapshot.profile.inventory_contents.keys().copied().collect();
    assert_eq!(slots, [0]);
}

#[test]
fn unknown_dimension() {
    let input = Builder::new()
        .start_compound("")
        .int("playerGameType", 0)
        .string("Dimension", "mymod:moon")
        .end_compound()
        .build();
    let root: Value = fastnbt::from_bytes(&input).unwrap();

    let err = Converter::default().player(&root, "world").unwrap_err();
    assert!(matches!(err, Error::UnknownDimension(d) if d == "mymod:moon"));
}

#[test]
fn bad_game_mode() {
    let input = Builder::new()
        .start_compound("")
        .int("playerGameType", 7)
        .end_compound()
        .build();
    let root: Value = fastnbt::from_bytes(&input).unwrap();

    let err = Converter::default().player(&root, "world").unwrap_err();
    assert!(matches!(err, Error::OutOfRange { index: 7, .. }));
}

#[test]
fn player_name() {
    let root = player();
    assert_eq!(last_known_name(&root).unwrap(), Some("Steve"));
    assert_eq!(last_known_name(&minimal(|b| b)).unwrap(), None);
}
