//! Item meta records.
//!
//! An [`ItemMeta`] is the common field set every item can carry
//! ([`BaseMeta`]), a `meta-type` chosen by the [registry][crate::registry],
//! optionally a block of type-specific fields ([`MetaExtra`]), and the
//! `internal` blob holding everything not modelled.

mod kinds;

use log::debug;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    compound::{strings, Compound},
    encode::{self, Color, Enchantments, FireworkEffect, Pattern, PotionEffect},
    error::Result,
    options::FireworkPowerKey,
    registry,
    residue::Residue,
    value::Value,
    tables, Converter, ItemStack,
};

pub use kinds::MetaSerializer;

/// Longest page a signed book may carry, in characters.
pub const MAX_PAGE_LENGTH: usize = 320;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetaType {
    Unspecific,
    Armor,
    ColorableArmor,
    LeatherArmor,
    ArmorStand,
    Banner,
    TileEntity,
    Book,
    BookSigned,
    Skull,
    Map,
    Potion,
    SpawnEgg,
    Enchanted,
    Firework,
    FireworkEffect,
    KnowledgeBook,
    TropicalFishBucket,
    AxolotlBucket,
    Crossbow,
    SuspiciousStew,
    EntityTag,
    Compass,
    Bundle,
    MusicInstrument,
}

impl MetaType {
    pub const ALL: [MetaType; 25] = [
        MetaType::Unspecific,
        MetaType::Armor,
        MetaType::ColorableArmor,
        MetaType::LeatherArmor,
        MetaType::ArmorStand,
        MetaType::Banner,
        MetaType::TileEntity,
        MetaType::Book,
        MetaType::BookSigned,
        MetaType::Skull,
        MetaType::Map,
        MetaType::Potion,
        MetaType::SpawnEgg,
        MetaType::Enchanted,
        MetaType::Firework,
        MetaType::FireworkEffect,
        MetaType::KnowledgeBook,
        MetaType::TropicalFishBucket,
        MetaType::AxolotlBucket,
        MetaType::Crossbow,
        MetaType::SuspiciousStew,
        MetaType::EntityTag,
        MetaType::Compass,
        MetaType::Bundle,
        MetaType::MusicInstrument,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemMeta {
    #[serde(rename = "==")]
    schema: &'static str,
    #[serde(rename = "meta-type")]
    pub meta_type: MetaType,
    #[serde(flatten)]
    pub base: BaseMeta,
    #[serde(flatten)]
    pub extra: Option<MetaExtra>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal: Option<String>,
}

impl ItemMeta {
    pub const SCHEMA: &'static str = "ItemMeta";

    fn with(mut self, extra: MetaExtra) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// Fields common to every meta kind. Each is emitted only when present in
/// the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BaseMeta {
    #[serde(rename = "display-name", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "loc-name", skip_serializing_if = "Option::is_none")]
    pub loc_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lore: Option<Vec<String>>,
    #[serde(rename = "custom-model-data", skip_serializing_if = "Option::is_none")]
    pub custom_model_data: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enchants: Option<Enchantments>,
    #[serde(rename = "attribute-modifiers", skip_serializing_if = "Option::is_none")]
    pub attribute_modifiers: Option<AttributeModifiers>,
    #[serde(rename = "repair-cost", skip_serializing_if = "Option::is_none")]
    pub repair_cost: Option<i64>,
    #[serde(rename = "ItemFlags", skip_serializing_if = "Option::is_none")]
    pub item_flags: Option<Vec<&'static str>>,
    #[serde(rename = "Unbreakable", skip_serializing_if = "Option::is_none")]
    pub unbreakable: Option<bool>,
    #[serde(rename = "Damage", skip_serializing_if = "Option::is_none")]
    pub damage: Option<i64>,
}

/// Attribute modifiers are not decoded. A non-empty source list yields this
/// empty map; the modifiers themselves are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeModifiers {}

/// Type-specific fields layered on top of [`BaseMeta`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetaExtra {
    Armor(ArmorMeta),
    Colored(ColoredMeta),
    Book(BookMeta),
    Skull(SkullMeta),
    Map(MapMeta),
    Potion(PotionMeta),
    Firework(FireworkMeta),
    Charge(ChargeMeta),
    EnchantedBook(EnchantedBookMeta),
    Banner(BannerMeta),
    TileEntity(TileEntityMeta),
    KnowledgeBook(KnowledgeBookMeta),
    TropicalFish(TropicalFishMeta),
    Axolotl(AxolotlMeta),
    Crossbow(CrossbowMeta),
    Stew(StewMeta),
    Compass(CompassMeta),
    Bundle(BundleMeta),
    Instrument(InstrumentMeta),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trim {
    pub material: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArmorMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<Trim>,
}

/// Leather armour and other dyeable items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColoredMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkullMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_block_sound: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MapMeta {
    #[serde(rename = "map-id", skip_serializing_if = "Option::is_none")]
    pub map_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling: Option<bool>,
    #[serde(rename = "display-map-color", skip_serializing_if = "Option::is_none")]
    pub display_map_color: Option<Color>,
}

/// Potions, splash and lingering potions, and tipped arrows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PotionMeta {
    #[serde(rename = "potion-type", skip_serializing_if = "Option::is_none")]
    pub potion_type: Option<String>,
    #[serde(rename = "custom-color", skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<Color>,
    #[serde(rename = "custom-effects", skip_serializing_if = "Option::is_none")]
    pub custom_effects: Option<Vec<PotionEffect>>,
}

/// Firework rocket. The flight duration's field name depends on the schema
/// profile, so serialization is written out by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireworkMeta {
    pub power: Option<i64>,
    pub effects: Option<Vec<FireworkEffect>>,
    pub power_key: FireworkPowerKey,
}

impl Serialize for FireworkMeta {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(power) = self.power {
            map.serialize_entry(self.power_key.field_name(), &power)?;
        }
        if let Some(effects) = &self.effects {
            map.serialize_entry("firework-effects", effects)?;
        }
        map.end()
    }
}

/// Firework star.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChargeMeta {
    #[serde(rename = "firework-effect", skip_serializing_if = "Option::is_none")]
    pub effect: Option<FireworkEffect>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnchantedBookMeta {
    #[serde(rename = "stored-enchants")]
    pub stored_enchants: Enchantments,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BannerMeta {
    #[serde(rename = "base-color", skip_serializing_if = "Option::is_none")]
    pub base_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<Pattern>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TileEntityMeta {
    #[serde(rename = "blockMaterial")]
    pub block_material: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KnowledgeBookMeta {
    #[serde(rename = "Recipes", skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TropicalFishMeta {
    #[serde(rename = "fish-variant", skip_serializing_if = "Option::is_none")]
    pub fish_variant: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AxolotlMeta {
    #[serde(rename = "axolotl-variant", skip_serializing_if = "Option::is_none")]
    pub axolotl_variant: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrossbowMeta {
    pub charged: bool,
    #[serde(rename = "charged-projectiles", skip_serializing_if = "Option::is_none")]
    pub charged_projectiles: Option<Vec<ItemStack>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StewMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<PotionEffect>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompassMeta {
    #[serde(rename = "LodestonePosWorld", skip_serializing_if = "Option::is_none")]
    pub lodestone_world: Option<String>,
    #[serde(rename = "LodestonePosX", skip_serializing_if = "Option::is_none")]
    pub lodestone_x: Option<i64>,
    #[serde(rename = "LodestonePosY", skip_serializing_if = "Option::is_none")]
    pub lodestone_y: Option<i64>,
    #[serde(rename = "LodestonePosZ", skip_serializing_if = "Option::is_none")]
    pub lodestone_z: Option<i64>,
    #[serde(rename = "LodestoneTracked", skip_serializing_if = "Option::is_none")]
    pub lodestone_tracked: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BundleMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemStack>>,
}

/// Goat horns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstrumentMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
}

impl Converter {
    /// Serialize an item's `tag` compound with the serializer registered for
    /// its normalized type (`DIAMOND_SWORD`, not `minecraft:diamond_sword`).
    pub fn item_meta(&self, item_type: &str, tag: Compound) -> Result<ItemMeta> {
        let meta_type = registry::resolve(item_type);
        debug!("{} resolved to {:?}", item_type, meta_type);

        match meta_type.serializer() {
            MetaSerializer::Plain(serialize) => serialize(self, tag),
            MetaSerializer::BlockState(serialize) => serialize(self, tag, item_type),
        }
    }

    /// The common field set plus the `internal` blob. `embedded` is a named
    /// compound kept opaque by the caller, appended to the residue.
    pub fn generic_meta<'a>(
        &self,
        tag: Compound<'a>,
        meta_type: MetaType,
        embedded: Option<(&'a str, &'a Value)>,
    ) -> Result<ItemMeta> {
        let base = self.base_meta(tag)?;

        let mut residue = Residue::collect(tag);
        if let Some((name, value)) = embedded {
            residue = residue.with(name, value);
        }

        // PublicBukkitValues (plugin custom tags) is deliberately not
        // converted: Bukkit keeps it in its own wrapper, not in `internal`.

        Ok(ItemMeta {
            schema: ItemMeta::SCHEMA,
            meta_type,
            base,
            extra: None,
            internal: residue.encode()?,
        })
    }

    fn base_meta(&self, tag: Compound) -> Result<BaseMeta> {
        let mut base = BaseMeta::default();

        if let Some(display) = tag.compound("display")? {
            base.display_name = display.string("Name")?.map(str::to_owned);
            base.loc_name = display.string("LocName")?.map(str::to_owned);
            base.lore = match display.list("Lore")? {
                Some(lore) if !lore.is_empty() => Some(strings(lore, "Lore")?),
                _ => None,
            };
        }

        base.custom_model_data = tag.int("CustomModelData")?;

        // BlockStateTag is left alone: Bukkit keeps it as SNBT text, which
        // this converter does not produce.

        base.enchants = match tag.list("Enchantments")? {
            Some(list) if !list.is_empty() => Some(encode::enchantments(list, "Enchantments")?),
            _ => None,
        };

        base.attribute_modifiers = match tag.list("AttributeModifiers")? {
            Some(list) if !list.is_empty() => Some(AttributeModifiers::default()),
            _ => None,
        };

        base.repair_cost = tag.int("RepairCost")?.filter(|&cost| cost > 0);

        base.item_flags = tag
            .int("HideFlags")?
            .map(|flags| tables::hide_flags(flags, self.schema().hide_flag_order));

        base.unbreakable = tag.flag("Unbreakable")?;
        base.damage = tag.int("Damage")?.filter(|&damage| damage > 0);

        Ok(base)
    }
}
