//! Unknown-field round trip.
//!
//! Whatever a meta serializer does not model is collected into a
//! [`Residue`], re-encoded as a standalone gzipped NBT document and stored
//! base64 encoded in the meta's `internal` field. This is the same shape
//! Bukkit writes, so the plugin can load it back without loss.
//!
//! The residue borrows from the source tree. A fresh compound is only built
//! at encode time.

use std::io::{Read, Write};

use base64::{engine::general_purpose::STANDARD, Engine};
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use log::debug;

use crate::{compound::Compound, error::Result, value::Value};

/// Tag names understood by at least one meta serializer. The set is shared
/// by every meta kind.
pub const HANDLED_TAGS: &[&str] = &[
    "display",
    "CustomModelData",
    "BlockStateTag",
    "RepairCost",
    "Enchantments",
    "HideFlags",
    "Unbreakable",
    "Damage",
    "PublicBukkitValues",
    "AttributeModifiers",
    "AttributeName",
    "Name",
    "Amount",
    "UUIDMost",
    "UUIDLeast",
    "Slot",
    // armor
    "Trim",
    "material",
    "pattern",
    // map
    "map_is_scaling",
    "MapColor",
    "map",
    // potion
    "custom_potion_effects",
    "Potion",
    "CustomPotionColor",
    // skull
    "SkullOwner",
    "SkullProfile",
    // spawn egg and other entity holders
    "EntityTag",
    // block state
    "BlockEntityTag",
    // book
    "title",
    "author",
    "pages",
    "resolved",
    "generation",
    // firework
    "Fireworks",
    "StoredEnchantments",
    "Explosion",
    "Recipes",
    // buckets
    "BucketVariantTag",
    "Variant",
    // crossbow
    "Charged",
    "ChargedProjectiles",
    // suspicious stew
    "effects",
    // compass
    "LodestoneDimension",
    "LodestonePos",
    "LodestoneTracked",
    // bundle
    "Items",
    "instrument",
];

pub fn is_handled(name: &str) -> bool {
    HANDLED_TAGS.contains(&name)
}

/// The direct children of a meta compound that no serializer models, plus
/// any embedded entity compound a serializer chose to keep opaque.
#[derive(Debug, Clone, Default)]
pub struct Residue<'a> {
    entries: Vec<(&'a str, &'a Value)>,
}

impl<'a> Residue<'a> {
    /// Unhandled children of `tag`, in source order.
    pub fn collect(tag: Compound<'a>) -> Self {
        Self {
            entries: tag.iter().filter(|(name, _)| !is_handled(name)).collect(),
        }
    }

    /// Append an embedded compound under its own name.
    pub fn with(mut self, name: &'a str, value: &'a Value) -> Self {
        self.entries.push((name, value));
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Materialise the residue as an owned root compound.
    pub fn to_value(&self) -> Value {
        Value::Compound(
            self.entries
                .iter()
                .map(|(name, value)| ((*name).to_owned(), (*value).clone()))
                .collect(),
        )
    }

    /// Base64 of the gzipped NBT document, or `None` for an empty residue.
    pub fn encode(&self) -> Result<Option<String>> {
        if self.is_empty() {
            return Ok(None);
        }

        let nbt = fastnbt::to_bytes(&self.to_value())?;
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(&nbt)?;
        let gz = enc.finish()?;

        debug!(
            "residue: {} tags, {} bytes nbt, {} bytes gzipped",
            self.len(),
            nbt.len(),
            gz.len()
        );
        Ok(Some(STANDARD.encode(gz)))
    }
}

/// Inverse of [`Residue::encode`]: decode an `internal` blob back into its
/// root compound.
pub fn decode_internal(blob: &str) -> Result<Value> {
    let gz = STANDARD.decode(blob)?;
    let mut nbt = Vec::new();
    GzDecoder::new(gz.as_slice()).read_to_end(&mut nbt)?;
    Ok(fastnbt::from_bytes(&nbt)?)
}
