//! Conversion options.
//!
//! The two observed revisions of the Multiverse inventory schema disagree on
//! a handful of details. Rather than pick one, each disagreement is a field
//! of [`SchemaProfile`], with [`SchemaProfile::current`] as the default and
//! [`SchemaProfile::legacy`] as the alternative preset.

use serde::{Deserialize, Serialize};

/// Data version written into every item stack's `v` field.
pub const DEFAULT_DATA_VERSION: i32 = 3465;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub data_version: i32,
    pub schema: SchemaProfile,
    pub slot_policy: SlotPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            data_version: DEFAULT_DATA_VERSION,
            schema: SchemaProfile::current(),
            slot_policy: SlotPolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaProfile {
    pub hide_flag_order: FlagOrder,
    pub firework_power_key: FireworkPowerKey,
    /// Whether banner patterns carry the `==: Pattern` discriminator.
    pub pattern_schema_tag: bool,
    pub spawn_world: SpawnWorld,
    pub rotation_order: RotationOrder,
    /// Clamp plain-text pages of signed books to [`MAX_PAGE_LENGTH`].
    ///
    /// [`MAX_PAGE_LENGTH`]: crate::meta::MAX_PAGE_LENGTH
    pub clamp_signed_pages: bool,
}

impl SchemaProfile {
    pub fn current() -> Self {
        Self {
            hide_flag_order: FlagOrder::HighBitFirst,
            firework_power_key: FireworkPowerKey::Power,
            pattern_schema_tag: true,
            spawn_world: SpawnWorld::SpawnDimension,
            rotation_order: RotationOrder::YawPitch,
            clamp_signed_pages: true,
        }
    }

    pub fn legacy() -> Self {
        Self {
            hide_flag_order: FlagOrder::LowBitFirst,
            firework_power_key: FireworkPowerKey::Flight,
            pattern_schema_tag: false,
            spawn_world: SpawnWorld::PlayerDimension,
            rotation_order: RotationOrder::PitchYaw,
            clamp_signed_pages: true,
        }
    }
}

impl Default for SchemaProfile {
    fn default() -> Self {
        Self::current()
    }
}

/// Order in which decoded `ItemFlags` are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagOrder {
    /// Bit 7 (`HIDE_ARMOR_TRIM`) first, down to bit 0 (`HIDE_ENCHANTS`).
    HighBitFirst,
    /// Bit 0 first.
    LowBitFirst,
}

/// Output field name for a firework rocket's flight duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireworkPowerKey {
    Power,
    Flight,
}

impl FireworkPowerKey {
    pub fn field_name(self) -> &'static str {
        match self {
            FireworkPowerKey::Power => "power",
            FireworkPowerKey::Flight => "flight",
        }
    }
}

/// Which dimension tag names the world of the bed spawn location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnWorld {
    /// The player's `SpawnDimension`.
    SpawnDimension,
    /// The player's current `Dimension`.
    PlayerDimension,
}

/// How the two floats of a player's `Rotation` list are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationOrder {
    /// `[yaw, pitch]`, as the game writes it.
    YawPitch,
    /// `[pitch, yaw]`.
    PitchYaw,
}

impl RotationOrder {
    /// `(yaw, pitch)` out of a `Rotation` list.
    pub fn yaw_pitch(self, [first, second]: [f64; 2]) -> (f64, f64) {
        match self {
            RotationOrder::YawPitch => (first, second),
            RotationOrder::PitchYaw => (second, first),
        }
    }
}

/// What the player assembler does when a single slot fails to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPolicy {
    /// Fail the whole conversion.
    Abort,
    /// Log a warning and leave the slot out.
    Skip,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_config_keeps_defaults() {
        let opts: ConvertOptions =
            serde_json::from_str(r#"{"schema": {"hide_flag_order": "low_bit_first"}}"#).unwrap();

        assert_eq!(opts.data_version, DEFAULT_DATA_VERSION);
        assert_eq!(opts.slot_policy, SlotPolicy::Abort);
        assert_eq!(opts.schema.hide_flag_order, FlagOrder::LowBitFirst);
        assert_eq!(opts.schema.firework_power_key, FireworkPowerKey::Power);
        assert!(opts.schema.pattern_schema_tag);
        assert_eq!(opts.schema.rotation_order, RotationOrder::YawPitch);
    }

    #[test]
    fn legacy_differs_from_current() {
        let legacy = SchemaProfile::legacy();
        let current = SchemaProfile::current();
        assert_ne!(legacy, current);
        assert_eq!(current, SchemaProfile::default());
        assert_eq!(legacy.firework_power_key.field_name(), "flight");
    }

    #[test]
    fn rotation_orders() {
        assert_eq!(RotationOrder::YawPitch.yaw_pitch([90.0, -15.0]), (90.0, -15.0));
        assert_eq!(RotationOrder::PitchYaw.yaw_pitch([90.0, -15.0]), (-15.0, 90.0));
    }
}
