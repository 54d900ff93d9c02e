//! Small schema objects built from fixed NBT shapes: colours, potion
//! effects, firework explosions, banner patterns and enchantment maps.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    compound::{compounds, Compound},
    error::Result,
    tables,
    value::Value,
};

/// Enchantment name to level.
pub type Enchantments = BTreeMap<String, i64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    #[serde(rename = "==")]
    schema: &'static str,
    #[serde(rename = "ALPHA")]
    pub alpha: u8,
    #[serde(rename = "RED")]
    pub red: u8,
    #[serde(rename = "BLUE")]
    pub blue: u8,
    #[serde(rename = "GREEN")]
    pub green: u8,
}

impl Color {
    pub const SCHEMA: &'static str = "Color";

    pub fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self {
            schema: Self::SCHEMA,
            alpha,
            red,
            blue,
            green,
        }
    }

    /// Unpack `0xRRGGBB`. Any alpha bits are ignored and the colour is
    /// fully opaque.
    pub fn from_rgb(packed: i64) -> Self {
        let mut color = Self::from_argb(packed);
        color.alpha = 255;
        color
    }

    /// Unpack `0xAARRGGBB`.
    pub fn from_argb(packed: i64) -> Self {
        let channel = |shift: u32| (packed >> shift & 0xff) as u8;
        Self::new(channel(24), channel(16), channel(8), channel(0))
    }

    pub fn argb(&self) -> u32 {
        u32::from_be_bytes([self.alpha, self.red, self.green, self.blue])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PotionEffect {
    #[serde(rename = "==")]
    schema: &'static str,
    pub effect: i64,
    pub duration: i64,
    pub amplifier: i64,
    pub ambient: bool,
    #[serde(rename = "has-particles")]
    pub has_particles: bool,
    #[serde(rename = "has-icon")]
    pub has_icon: bool,
}

impl PotionEffect {
    pub const SCHEMA: &'static str = "PotionEffect";

    /// Every field is required; a partial effect is malformed input.
    pub fn from_nbt(effect: Compound) -> Result<Self> {
        Ok(Self {
            schema: Self::SCHEMA,
            effect: effect.require_int("Id")?,
            duration: effect.require_int("Duration")?,
            amplifier: effect.require_int("Amplifier")?,
            ambient: effect.require_flag("Ambient")?,
            has_particles: effect.require_flag("ShowParticles")?,
            has_icon: effect.require_flag("ShowIcon")?,
        })
    }

    pub fn from_list(effects: &[Value], field: &str) -> Result<Vec<Self>> {
        compounds(effects, field)?
            .into_iter()
            .map(Self::from_nbt)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FireworkEffect {
    #[serde(rename = "==")]
    schema: &'static str,
    pub flicker: bool,
    pub trail: bool,
    pub colors: Vec<Color>,
    #[serde(rename = "fade-colors")]
    pub fade_colors: Vec<Color>,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FireworkEffect {
    pub const SCHEMA: &'static str = "Firework";

    pub fn from_nbt(explosion: Compound) -> Result<Self> {
        let colors = |ints: Vec<i64>| ints.into_iter().map(Color::from_rgb).collect::<Vec<_>>();

        Ok(Self {
            schema: Self::SCHEMA,
            flicker: explosion.flag("Flicker")?.unwrap_or(false),
            trail: explosion.flag("Trail")?.unwrap_or(false),
            colors: colors(explosion.require_ints("Colors")?),
            fade_colors: colors(explosion.ints("FadeColors")?.unwrap_or_default()),
            kind: tables::explosion_type(explosion.require_int("Type")?)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    #[serde(rename = "==", skip_serializing_if = "Option::is_none")]
    schema: Option<&'static str>,
    pub color: &'static str,
    pub pattern: String,
}

impl Pattern {
    pub const SCHEMA: &'static str = "Pattern";

    pub fn from_nbt(pattern: Compound, tagged: bool) -> Result<Self> {
        Ok(Self {
            schema: tagged.then_some(Self::SCHEMA),
            color: tables::dye_color(pattern.require_int("Color")?)?,
            pattern: pattern.require_str("Pattern")?.to_owned(),
        })
    }

    pub fn is_tagged(&self) -> bool {
        self.schema.is_some()
    }
}

/// Map each `{id, lvl}` entry to its Bukkit enchantment name.
pub fn enchantments(list: &[Value], field: &str) -> Result<Enchantments> {
    compounds(list, field)?
        .into_iter()
        .map(|e| {
            let name = tables::enchantment_name(e.require_str("id")?);
            Ok((name, e.require_int("lvl")?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        test::compound,
    };
    use fastnbt::IntArray;
    use serde_json::json;

    #[test]
    fn rgb_is_opaque() {
        let c = Color::from_rgb(0x12_34_56);
        assert_eq!((c.alpha, c.red, c.green, c.blue), (255, 0x12, 0x34, 0x56));
        assert_eq!(c.argb(), 0xff12_3456);
    }

    #[test]
    fn argb_keeps_alpha() {
        let c = Color::from_argb(0x80_12_34_56);
        assert_eq!(c.alpha, 0x80);
        assert_eq!(Color::from_argb(c.argb() as i64), c);
    }

    #[test]
    fn color_json() {
        let c = Color::from_rgb(0xff_00_00);
        assert_eq!(
            serde_json::to_value(c).unwrap(),
            json!({"==": "Color", "ALPHA": 255, "RED": 255, "BLUE": 0, "GREEN": 0})
        );
    }

    fn effect_entries() -> [(&'static str, Value); 6] {
        [
            ("Id", Value::Byte(1)),
            ("Duration", Value::Int(3600)),
            ("Amplifier", Value::Byte(0)),
            ("Ambient", Value::Byte(0)),
            ("ShowParticles", Value::Byte(1)),
            ("ShowIcon", Value::Byte(1)),
        ]
    }

    fn effect_nbt() -> Value {
        compound(effect_entries())
    }

    #[test]
    fn potion_effect() {
        let v = effect_nbt();
        let effect = PotionEffect::from_nbt(Compound::new(&v).unwrap()).unwrap();
        assert_eq!(
            serde_json::to_value(effect).unwrap(),
            json!({
                "==": "PotionEffect",
                "effect": 1,
                "duration": 3600,
                "amplifier": 0,
                "ambient": false,
                "has-particles": true,
                "has-icon": true,
            })
        );
    }

    #[test]
    fn potion_effect_missing_field() {
        let v = Value::Compound(
            effect_entries()
                .into_iter()
                .filter(|(name, _)| *name != "ShowIcon")
                .map(|(name, v)| (name.to_owned(), v))
                .collect(),
        );
        match PotionEffect::from_nbt(Compound::new(&v).unwrap()) {
            Err(Error::MissingField(f)) => assert_eq!(f, "ShowIcon"),
            other => panic!("expected missing field, got {:?}", other),
        }
    }

    #[test]
    fn firework_effect_defaults() {
        let v = compound([
            ("Type", Value::Byte(2)),
            ("Colors", Value::IntArray(IntArray::new(vec![0x00_ff_00]))),
        ]);
        let effect = FireworkEffect::from_nbt(Compound::new(&v).unwrap()).unwrap();

        assert_eq!(effect.kind, "STAR");
        assert!(!effect.flicker);
        assert!(!effect.trail);
        assert_eq!(effect.colors, [Color::from_rgb(0x00_ff_00)]);
        assert!(effect.fade_colors.is_empty());
    }

    #[test]
    fn firework_effect_needs_colors() {
        let v = compound([("Type", Value::Byte(0))]);
        assert!(matches!(
            FireworkEffect::from_nbt(Compound::new(&v).unwrap()),
            Err(Error::MissingField(_))
        ));
    }

    #[test]
    fn firework_effect_bad_type() {
        let v = compound([
            ("Type", Value::Byte(7)),
            ("Colors", Value::IntArray(IntArray::new(vec![]))),
        ]);
        assert!(matches!(
            FireworkEffect::from_nbt(Compound::new(&v).unwrap()),
            Err(Error::OutOfRange { index: 7, .. })
        ));
    }

    #[test]
    fn pattern_tag_is_optional() {
        let v = compound([
            ("Color", Value::Int(14)),
            ("Pattern", Value::String("cre".into())),
        ]);
        let tagged = Pattern::from_nbt(Compound::new(&v).unwrap(), true).unwrap();
        let bare = Pattern::from_nbt(Compound::new(&v).unwrap(), false).unwrap();

        assert_eq!(
            serde_json::to_value(tagged).unwrap(),
            json!({"==": "Pattern", "color": "RED", "pattern": "cre"})
        );
        assert_eq!(
            serde_json::to_value(bare).unwrap(),
            json!({"color": "RED", "pattern": "cre"})
        );
    }

    #[test]
    fn enchantment_map() {
        let items = vec![
            compound([
                ("id", Value::String("minecraft:sharpness".into())),
                ("lvl", Value::Short(3)),
            ]),
            compound([
                ("id", Value::String("minecraft:made_up".into())),
                ("lvl", Value::Short(1)),
            ]),
        ];
        let map = enchantments(&items, "Enchantments").unwrap();
        assert_eq!(
            serde_json::to_value(map).unwrap(),
            json!({"DAMAGE_ALL": 3, "MADE_UP": 1})
        );
    }
}
