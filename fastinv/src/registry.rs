//! Item type to meta type dispatch.
//!
//! The registry is a flat, ordered table of item families. Each concrete
//! item type appears in at most one family. Resolution is total: anything
//! not listed resolves to [`MetaType::Unspecific`]. Should a type ever be
//! listed twice, the family declared first wins.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::meta::MetaType;

/// A set of item types sharing one meta serializer.
#[derive(Debug, Clone, Copy)]
pub struct Family {
    pub meta_type: MetaType,
    pub items: &'static [&'static str],
}

const fn family(meta_type: MetaType, items: &'static [&'static str]) -> Family {
    Family { meta_type, items }
}

pub static FAMILIES: &[Family] = &[
    family(MetaType::BookSigned, &["WRITTEN_BOOK"]),
    family(MetaType::Book, &["WRITABLE_BOOK"]),
    family(
        MetaType::Skull,
        &[
            "CREEPER_HEAD",
            "CREEPER_WALL_HEAD",
            "DRAGON_HEAD",
            "DRAGON_WALL_HEAD",
            "PIGLIN_HEAD",
            "PIGLIN_WALL_HEAD",
            "PLAYER_HEAD",
            "PLAYER_WALL_HEAD",
            "SKELETON_SKULL",
            "SKELETON_WALL_SKULL",
            "WITHER_SKELETON_SKULL",
            "WITHER_SKELETON_WALL_SKULL",
            "ZOMBIE_HEAD",
            "ZOMBIE_WALL_HEAD",
        ],
    ),
    family(
        MetaType::Armor,
        &[
            "CHAINMAIL_HELMET",
            "CHAINMAIL_CHESTPLATE",
            "CHAINMAIL_LEGGINGS",
            "CHAINMAIL_BOOTS",
            "DIAMOND_HELMET",
            "DIAMOND_CHESTPLATE",
            "DIAMOND_LEGGINGS",
            "DIAMOND_BOOTS",
            "GOLDEN_HELMET",
            "GOLDEN_CHESTPLATE",
            "GOLDEN_LEGGINGS",
            "GOLDEN_BOOTS",
            "IRON_HELMET",
            "IRON_CHESTPLATE",
            "IRON_LEGGINGS",
            "IRON_BOOTS",
            "NETHERITE_HELMET",
            "NETHERITE_CHESTPLATE",
            "NETHERITE_LEGGINGS",
            "NETHERITE_BOOTS",
            "TURTLE_HELMET",
        ],
    ),
    family(
        MetaType::ColorableArmor,
        &[
            "LEATHER_HELMET",
            "LEATHER_CHESTPLATE",
            "LEATHER_LEGGINGS",
            "LEATHER_BOOTS",
        ],
    ),
    family(MetaType::LeatherArmor, &["LEATHER_HORSE_ARMOR"]),
    family(
        MetaType::Potion,
        &["POTION", "SPLASH_POTION", "LINGERING_POTION", "TIPPED_ARROW"],
    ),
    family(MetaType::Map, &["FILLED_MAP"]),
    family(MetaType::Firework, &["FIREWORK_ROCKET"]),
    family(MetaType::FireworkEffect, &["FIREWORK_STAR"]),
    family(MetaType::Enchanted, &["ENCHANTED_BOOK"]),
    family(
        MetaType::Banner,
        &[
            "BLACK_BANNER",
            "BLACK_WALL_BANNER",
            "BLUE_BANNER",
            "BLUE_WALL_BANNER",
            "BROWN_BANNER",
            "BROWN_WALL_BANNER",
            "CYAN_BANNER",
            "CYAN_WALL_BANNER",
            "GRAY_BANNER",
            "GRAY_WALL_BANNER",
            "GREEN_BANNER",
            "GREEN_WALL_BANNER",
            "LIGHT_BLUE_BANNER",
            "LIGHT_BLUE_WALL_BANNER",
            "LIGHT_GRAY_BANNER",
            "LIGHT_GRAY_WALL_BANNER",
            "LIME_BANNER",
            "LIME_WALL_BANNER",
            "MAGENTA_BANNER",
            "MAGENTA_WALL_BANNER",
            "ORANGE_BANNER",
            "ORANGE_WALL_BANNER",
            "PINK_BANNER",
            "PINK_WALL_BANNER",
            "PURPLE_BANNER",
            "PURPLE_WALL_BANNER",
            "RED_BANNER",
            "RED_WALL_BANNER",
            "WHITE_BANNER",
            "WHITE_WALL_BANNER",
            "YELLOW_BANNER",
            "YELLOW_WALL_BANNER",
        ],
    ),
    family(
        MetaType::SpawnEgg,
        &[
            "ALLAY_SPAWN_EGG",
            "AXOLOTL_SPAWN_EGG",
            "BAT_SPAWN_EGG",
            "BEE_SPAWN_EGG",
            "BLAZE_SPAWN_EGG",
            "BREEZE_SPAWN_EGG",
            "CAT_SPAWN_EGG",
            "CAMEL_SPAWN_EGG",
            "CAVE_SPIDER_SPAWN_EGG",
            "CHICKEN_SPAWN_EGG",
            "COD_SPAWN_EGG",
            "COW_SPAWN_EGG",
            "CREEPER_SPAWN_EGG",
            "DOLPHIN_SPAWN_EGG",
            "DONKEY_SPAWN_EGG",
            "DROWNED_SPAWN_EGG",
            "ELDER_GUARDIAN_SPAWN_EGG",
            "ENDER_DRAGON_SPAWN_EGG",
            "ENDERMAN_SPAWN_EGG",
            "ENDERMITE_SPAWN_EGG",
            "EVOKER_SPAWN_EGG",
            "FOX_SPAWN_EGG",
            "FROG_SPAWN_EGG",
            "GHAST_SPAWN_EGG",
            "GLOW_SQUID_SPAWN_EGG",
            "GOAT_SPAWN_EGG",
            "GUARDIAN_SPAWN_EGG",
            "HOGLIN_SPAWN_EGG",
            "HORSE_SPAWN_EGG",
            "HUSK_SPAWN_EGG",
            "IRON_GOLEM_SPAWN_EGG",
            "LLAMA_SPAWN_EGG",
            "MAGMA_CUBE_SPAWN_EGG",
            "MOOSHROOM_SPAWN_EGG",
            "MULE_SPAWN_EGG",
            "OCELOT_SPAWN_EGG",
            "PANDA_SPAWN_EGG",
            "PARROT_SPAWN_EGG",
            "PHANTOM_SPAWN_EGG",
            "PIGLIN_BRUTE_SPAWN_EGG",
            "PIGLIN_SPAWN_EGG",
            "PIG_SPAWN_EGG",
            "PILLAGER_SPAWN_EGG",
            "POLAR_BEAR_SPAWN_EGG",
            "PUFFERFISH_SPAWN_EGG",
            "RABBIT_SPAWN_EGG",
            "RAVAGER_SPAWN_EGG",
            "SALMON_SPAWN_EGG",
            "SHEEP_SPAWN_EGG",
            "SHULKER_SPAWN_EGG",
            "SILVERFISH_SPAWN_EGG",
            "SKELETON_HORSE_SPAWN_EGG",
            "SKELETON_SPAWN_EGG",
            "SLIME_SPAWN_EGG",
            "SNIFFER_SPAWN_EGG",
            "SNOW_GOLEM_SPAWN_EGG",
            "SPIDER_SPAWN_EGG",
            "SQUID_SPAWN_EGG",
            "STRAY_SPAWN_EGG",
            "STRIDER_SPAWN_EGG",
            "TADPOLE_SPAWN_EGG",
            "TRADER_LLAMA_SPAWN_EGG",
            "TROPICAL_FISH_SPAWN_EGG",
            "TURTLE_SPAWN_EGG",
            "VEX_SPAWN_EGG",
            "VILLAGER_SPAWN_EGG",
            "VINDICATOR_SPAWN_EGG",
            "WANDERING_TRADER_SPAWN_EGG",
            "WARDEN_SPAWN_EGG",
            "WITCH_SPAWN_EGG",
            "WITHER_SKELETON_SPAWN_EGG",
            "WITHER_SPAWN_EGG",
            "WOLF_SPAWN_EGG",
            "ZOGLIN_SPAWN_EGG",
            "ZOMBIE_HORSE_SPAWN_EGG",
            "ZOMBIE_SPAWN_EGG",
            "ZOMBIE_VILLAGER_SPAWN_EGG",
            "ZOMBIFIED_PIGLIN_SPAWN_EGG",
        ],
    ),
    family(MetaType::ArmorStand, &["ARMOR_STAND"]),
    family(MetaType::KnowledgeBook, &["KNOWLEDGE_BOOK"]),
    family(
        MetaType::TileEntity,
        &[
            "FURNACE",
            "CHEST",
            "TRAPPED_CHEST",
            "JUKEBOX",
            "DISPENSER",
            "DROPPER",
            "ACACIA_HANGING_SIGN",
            "ACACIA_SIGN",
            "ACACIA_WALL_HANGING_SIGN",
            "ACACIA_WALL_SIGN",
            "BAMBOO_HANGING_SIGN",
            "BAMBOO_SIGN",
            "BAMBOO_WALL_HANGING_SIGN",
            "BAMBOO_WALL_SIGN",
            "BIRCH_HANGING_SIGN",
            "BIRCH_SIGN",
            "BIRCH_WALL_HANGING_SIGN",
            "BIRCH_WALL_SIGN",
            "CHERRY_HANGING_SIGN",
            "CHERRY_SIGN",
            "CHERRY_WALL_HANGING_SIGN",
            "CHERRY_WALL_SIGN",
            "CRIMSON_HANGING_SIGN",
            "CRIMSON_SIGN",
            "CRIMSON_WALL_HANGING_SIGN",
            "CRIMSON_WALL_SIGN",
            "DARK_OAK_HANGING_SIGN",
            "DARK_OAK_SIGN",
            "DARK_OAK_WALL_HANGING_SIGN",
            "DARK_OAK_WALL_SIGN",
            "JUNGLE_HANGING_SIGN",
            "JUNGLE_SIGN",
            "JUNGLE_WALL_HANGING_SIGN",
            "JUNGLE_WALL_SIGN",
            "MANGROVE_HANGING_SIGN",
            "MANGROVE_SIGN",
            "MANGROVE_WALL_HANGING_SIGN",
            "MANGROVE_WALL_SIGN",
            "OAK_HANGING_SIGN",
            "OAK_SIGN",
            "OAK_WALL_HANGING_SIGN",
            "OAK_WALL_SIGN",
            "SPRUCE_HANGING_SIGN",
            "SPRUCE_SIGN",
            "SPRUCE_WALL_HANGING_SIGN",
            "SPRUCE_WALL_SIGN",
            "WARPED_HANGING_SIGN",
            "WARPED_SIGN",
            "WARPED_WALL_HANGING_SIGN",
            "WARPED_WALL_SIGN",
            "SPAWNER",
            "BREWING_STAND",
            "ENCHANTING_TABLE",
            "COMMAND_BLOCK",
            "REPEATING_COMMAND_BLOCK",
            "CHAIN_COMMAND_BLOCK",
            "BEACON",
            "DAYLIGHT_DETECTOR",
            "HOPPER",
            "COMPARATOR",
            "SHIELD",
            "STRUCTURE_BLOCK",
            "SHULKER_BOX",
            "WHITE_SHULKER_BOX",
            "ORANGE_SHULKER_BOX",
            "MAGENTA_SHULKER_BOX",
            "LIGHT_BLUE_SHULKER_BOX",
            "YELLOW_SHULKER_BOX",
            "LIME_SHULKER_BOX",
            "PINK_SHULKER_BOX",
            "GRAY_SHULKER_BOX",
            "LIGHT_GRAY_SHULKER_BOX",
            "CYAN_SHULKER_BOX",
            "PURPLE_SHULKER_BOX",
            "BLUE_SHULKER_BOX",
            "BROWN_SHULKER_BOX",
            "GREEN_SHULKER_BOX",
            "RED_SHULKER_BOX",
            "BLACK_SHULKER_BOX",
            "ENDER_CHEST",
            "BARREL",
            "BELL",
            "BLAST_FURNACE",
            "CAMPFIRE",
            "SOUL_CAMPFIRE",
            "JIGSAW",
            "LECTERN",
            "SMOKER",
            "BEEHIVE",
            "BEE_NEST",
            "SCULK_CATALYST",
            "SCULK_SHRIEKER",
            "SCULK_SENSOR",
            "CALIBRATED_SCULK_SENSOR",
            "CHISELED_BOOKSHELF",
            "DECORATED_POT",
            "SUSPICIOUS_SAND",
            "SUSPICIOUS_GRAVEL",
            "CRAFTER",
            "TRIAL_SPAWNER",
        ],
    ),
    family(MetaType::TropicalFishBucket, &["TROPICAL_FISH_BUCKET"]),
    family(MetaType::AxolotlBucket, &["AXOLOTL_BUCKET"]),
    family(MetaType::Crossbow, &["CROSSBOW"]),
    family(MetaType::SuspiciousStew, &["SUSPICIOUS_STEW"]),
    family(
        MetaType::EntityTag,
        &[
            "COD_BUCKET",
            "PUFFERFISH_BUCKET",
            "SALMON_BUCKET",
            "ITEM_FRAME",
            "GLOW_ITEM_FRAME",
            "PAINTING",
        ],
    ),
    family(MetaType::Compass, &["COMPASS"]),
    family(MetaType::Bundle, &["BUNDLE"]),
    family(MetaType::MusicInstrument, &["GOAT_HORN"]),
];

// Built once from FAMILIES. Earlier families keep their entry when a type is
// listed twice, matching a linear first-match scan.
static INDEX: Lazy<HashMap<&'static str, MetaType>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for family in FAMILIES {
        for &item in family.items {
            index.entry(item).or_insert(family.meta_type);
        }
    }
    index
});

/// The meta type for a normalized item type, e.g. `WRITTEN_BOOK`.
pub fn resolve(item_type: &str) -> MetaType {
    INDEX
        .get(item_type)
        .copied()
        .unwrap_or(MetaType::Unspecific)
}

/// Item types listed in more than one family. Empty for a well-formed table.
pub fn duplicates() -> Vec<&'static str> {
    let mut seen = HashMap::new();
    let mut dups = Vec::new();
    for family in FAMILIES {
        for &item in family.items {
            if seen.insert(item, family.meta_type).is_some() {
                dups.push(item);
            }
        }
    }
    dups
}
