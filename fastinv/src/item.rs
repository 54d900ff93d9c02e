use serde::Serialize;

use crate::{compound::Compound, error::Result, meta::ItemMeta, tables, Converter};

/// One slot's contents, `org.bukkit.inventory.ItemStack`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemStack {
    #[serde(rename = "==")]
    schema: &'static str,
    pub v: i32,
    #[serde(rename = "type")]
    pub item_type: String,
    /// Omitted when the count is 1; readers treat a missing amount as 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ItemMeta>,
}

impl ItemStack {
    pub const SCHEMA: &'static str = "org.bukkit.inventory.ItemStack";

    pub fn new(version: i32, item_type: impl Into<String>, count: i64) -> Self {
        Self {
            schema: Self::SCHEMA,
            v: version,
            item_type: item_type.into(),
            amount: (count != 1).then_some(count),
            meta: None,
        }
    }

    /// The empty stack Multiverse expects in an unused off-hand.
    pub fn air(version: i32) -> Self {
        Self::new(version, "AIR", 0)
    }

    pub fn count(&self) -> i64 {
        self.amount.unwrap_or(1)
    }
}

impl Converter {
    /// Serialize an item compound (`id`, `Count`, optional `tag`). Bundles
    /// and crossbows call back into this for the items they hold.
    pub fn item_stack(&self, item: Compound) -> Result<ItemStack> {
        let item_type = tables::item_type_name(item.require_str("id")?);
        let count = item.require_int("Count")?;

        let meta = match item.compound("tag")? {
            Some(tag) => Some(self.item_meta(&item_type, tag)?),
            None => None,
        };

        Ok(ItemStack {
            meta,
            ..ItemStack::new(self.options().data_version, item_type, count)
        })
    }
}
