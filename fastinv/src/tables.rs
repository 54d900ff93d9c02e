//! Static lookup tables shared by the encoders.

use crate::{
    error::{Error, Result},
    options::FlagOrder,
};

/// Namespaced enchantment ids whose Bukkit name differs from the id itself.
/// Anything not listed is simply uppercased.
const ENCHANTMENT_NAMES: [(&str, &str); 20] = [
    ("protection", "PROTECTION_ENVIRONMENTAL"),
    ("fire_protection", "PROTECTION_FIRE"),
    ("feather_falling", "PROTECTION_FALL"),
    ("blast_protection", "PROTECTION_EXPLOSIONS"),
    ("projectile_protection", "PROTECTION_PROJECTILE"),
    ("respiration", "OXYGEN"),
    ("aqua_affinity", "WATER_WORKER"),
    ("sharpness", "DAMAGE_ALL"),
    ("smite", "DAMAGE_UNDEAD"),
    ("bane_of_arthropods", "DAMAGE_ARTHROPODS"),
    ("looting", "LOOT_BONUS_MOBS"),
    ("sweeping", "SWEEPING_EDGE"),
    ("efficiency", "DIG_SPEED"),
    ("unbreaking", "DURABILITY"),
    ("fortune", "LOOT_BONUS_BLOCKS"),
    ("power", "ARROW_DAMAGE"),
    ("punch", "ARROW_KNOCKBACK"),
    ("flame", "ARROW_FIRE"),
    ("infinity", "ARROW_INFINITE"),
    ("luck_of_the_sea", "LUCK"),
];

/// Dye colours by their NBT index.
pub const DYE_COLORS: [&str; 16] = [
    "WHITE",
    "ORANGE",
    "MAGENTA",
    "LIGHT_BLUE",
    "YELLOW",
    "LIME",
    "PINK",
    "GRAY",
    "LIGHT_GRAY",
    "CYAN",
    "PURPLE",
    "BLUE",
    "BROWN",
    "GREEN",
    "RED",
    "BLACK",
];

/// Item flags indexed by their bit position in `HideFlags`.
pub const HIDE_FLAGS: [&str; 8] = [
    "HIDE_ENCHANTS",
    "HIDE_ATTRIBUTES",
    "HIDE_UNBREAKABLE",
    "HIDE_DESTROYS",
    "HIDE_PLACED_ON",
    "HIDE_POTION_EFFECTS",
    "HIDE_DYE",
    "HIDE_ARMOR_TRIM",
];

/// Firework explosion shapes. Order matters, the NBT stores the index.
pub const EXPLOSION_TYPES: [&str; 5] = ["BALL", "BALL_LARGE", "STAR", "CREEPER", "BURST"];

const DIMENSION_SUFFIXES: [(&str, &str); 3] = [
    ("minecraft:overworld", ""),
    ("minecraft:the_nether", "_nether"),
    ("minecraft:the_end", "_the_end"),
];

/// `minecraft:diamond_sword` -> `diamond_sword`. Ids without a namespace
/// are returned unchanged.
pub fn strip_namespace(id: &str) -> &str {
    id.split_once(':').map_or(id, |(_, path)| path)
}

/// `minecraft:diamond_sword` -> `DIAMOND_SWORD`.
pub fn item_type_name(id: &str) -> String {
    strip_namespace(id).to_ascii_uppercase()
}

pub fn enchantment_name(id: &str) -> String {
    let id = strip_namespace(id);
    ENCHANTMENT_NAMES
        .iter()
        .find(|(from, _)| *from == id)
        .map_or_else(|| id.to_ascii_uppercase(), |(_, to)| (*to).to_owned())
}

pub fn dye_color(index: i64) -> Result<&'static str> {
    lookup(&DYE_COLORS, "dye colour", index)
}

pub fn explosion_type(index: i64) -> Result<&'static str> {
    lookup(&EXPLOSION_TYPES, "firework explosion type", index)
}

/// Decode the low eight bits of `HideFlags` into flag names. Only set bits
/// produce an entry.
pub fn hide_flags(value: i64, order: FlagOrder) -> Vec<&'static str> {
    let bits = (value & 0xff) as u8;
    let set = |bit: &usize| bits & (1 << bit) != 0;

    match order {
        FlagOrder::HighBitFirst => (0..8).rev().filter(set).map(|b| HIDE_FLAGS[b]).collect(),
        FlagOrder::LowBitFirst => (0..8).filter(set).map(|b| HIDE_FLAGS[b]).collect(),
    }
}

/// Multiverse world-name suffix for a dimension id.
pub fn dimension_suffix(dimension: &str) -> Result<&'static str> {
    DIMENSION_SUFFIXES
        .iter()
        .find(|(id, _)| *id == dimension)
        .map(|(_, suffix)| *suffix)
        .ok_or_else(|| Error::UnknownDimension(dimension.to_owned()))
}

fn lookup<const N: usize>(
    table: &[&'static str; N],
    name: &'static str,
    index: i64,
) -> Result<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .ok_or_else(|| Error::out_of_range(name, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renamed_enchantment() {
        assert_eq!(enchantment_name("minecraft:sharpness"), "DAMAGE_ALL");
        assert_eq!(enchantment_name("minecraft:luck_of_the_sea"), "LUCK");
    }

    #[test]
    fn unknown_enchantment_is_uppercased() {
        assert_eq!(enchantment_name("minecraft:made_up"), "MADE_UP");
        assert_eq!(enchantment_name("mending"), "MENDING");
    }

    #[test]
    fn hide_flags_high_bit_first() {
        assert_eq!(
            hide_flags(0b0000_0101, FlagOrder::HighBitFirst),
            ["HIDE_UNBREAKABLE", "HIDE_ENCHANTS"]
        );
    }

    #[test]
    fn hide_flags_low_bit_first() {
        assert_eq!(
            hide_flags(0b0000_0101, FlagOrder::LowBitFirst),
            ["HIDE_ENCHANTS", "HIDE_UNBREAKABLE"]
        );
    }

    #[test]
    fn hide_flags_zero_and_all() {
        assert!(hide_flags(0, FlagOrder::HighBitFirst).is_empty());
        assert_eq!(hide_flags(0xff, FlagOrder::HighBitFirst).len(), 8);
        // only the low byte is meaningful
        assert_eq!(hide_flags(0x100, FlagOrder::HighBitFirst).len(), 0);
    }

    #[test]
    fn table_indices_are_checked() {
        assert_eq!(dye_color(0).unwrap(), "WHITE");
        assert_eq!(dye_color(15).unwrap(), "BLACK");
        assert!(matches!(dye_color(16), Err(Error::OutOfRange { index: 16, .. })));
        assert!(matches!(dye_color(-1), Err(Error::OutOfRange { .. })));
        assert_eq!(explosion_type(4).unwrap(), "BURST");
        assert!(explosion_type(5).is_err());
    }

    #[test]
    fn dimensions() {
        assert_eq!(dimension_suffix("minecraft:overworld").unwrap(), "");
        assert_eq!(dimension_suffix("minecraft:the_nether").unwrap(), "_nether");
        assert!(matches!(
            dimension_suffix("mymod:moon"),
            Err(Error::UnknownDimension(_))
        ));
    }

    #[test]
    fn item_types() {
        assert_eq!(item_type_name("minecraft:diamond_sword"), "DIAMOND_SWORD");
        assert_eq!(item_type_name("stone"), "STONE");
    }
}
