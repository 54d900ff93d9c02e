//! Converts a Minecraft player's NBT into the JSON Multiverse-Inventories
//! stores for a player.
//!
//! The interesting part is items. Each item's `tag` compound is dispatched on
//! the item type (see [`registry`]) to a meta serializer that pulls out the
//! fields Bukkit models. Everything else is kept in the meta's `internal`
//! field as a gzipped, base64 encoded NBT document (see [`residue`]), so no
//! data is dropped along the way.
//!
//! The NBT itself is read with [`fastnbt`] into a [`Value`] tree that keeps
//! compound children in document order. The converter only ever borrows it.
//!
//! ```no_run
//! # use fastinv::{Converter, ConvertOptions, SchemaProfile};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let root: fastinv::Value = fastnbt::from_bytes(&[])?;
//! let options = ConvertOptions {
//!     schema: SchemaProfile::legacy(),
//!     ..Default::default()
//! };
//! let snapshot = Converter::new(options).player(&root, "world")?;
//! # Ok(())
//! # }
//! ```

pub mod compound;
pub mod encode;
pub mod meta;
pub mod options;
pub mod registry;
pub mod residue;
pub mod tables;
pub mod value;

mod converter;
mod error;
mod item;
mod player;

pub use compound::Compound;
pub use converter::*;
pub use error::*;
pub use item::*;
pub use meta::{ItemMeta, MetaType};
pub use options::*;
pub use player::*;
pub use residue::decode_internal;
pub use value::Value;

#[cfg(test)]
mod test;
