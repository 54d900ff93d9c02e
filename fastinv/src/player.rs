//! Player snapshot assembly.
//!
//! Walks a player document's inventories and stats and produces the
//! per-game-mode record Multiverse-Inventories stores for a player.

use std::collections::BTreeMap;

use log::{trace, warn};
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    compound::{as_float, compounds, Compound},
    encode::PotionEffect,
    error::{Error, Result},
    options::{SlotPolicy, SpawnWorld},
    tables,
    value::Value,
    Converter, ItemStack,
};

/// Off-hand slot index in the player's `Inventory` list.
pub const OFF_HAND_SLOT: i64 = -106;

/// Inventory slots from this index up are armour.
pub const ARMOR_SLOT_BASE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    pub fn from_id(id: i64) -> Result<Self> {
        match id {
            0 => Ok(GameMode::Survival),
            1 => Ok(GameMode::Creative),
            2 => Ok(GameMode::Adventure),
            3 => Ok(GameMode::Spectator),
            _ => Err(Error::out_of_range("game mode", id)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameMode::Survival => "SURVIVAL",
            GameMode::Creative => "CREATIVE",
            GameMode::Adventure => "ADVENTURE",
            GameMode::Spectator => "SPECTATOR",
        }
    }
}

/// A converted player: one [`Profile`] under the player's game mode.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub game_mode: GameMode,
    pub profile: Profile,
}

impl Serialize for PlayerSnapshot {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.game_mode.name(), &self.profile)?;
        map.end()
    }
}

/// Slot index to stack. Keys serialize as decimal strings.
pub type Slots = BTreeMap<i64, ItemStack>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub inventory_contents: Slots,
    pub off_hand_item: ItemStack,
    pub potions: Vec<PotionEffect>,
    pub ender_chest_contents: Slots,
    pub armor_contents: Slots,
    pub last_location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bed_spawn_location: Option<Location>,
    pub stats: Stats,
}

/// `org.bukkit.Location`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    #[serde(rename = "==")]
    schema: &'static str,
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Location {
    pub const SCHEMA: &'static str = "org.bukkit.Location";

    pub fn new(world: String, [x, y, z]: [f64; 3], pitch: f64, yaw: f64) -> Self {
        Self {
            schema: Self::SCHEMA,
            world,
            x,
            y,
            z,
            pitch,
            yaw,
        }
    }
}

/// Player stats. Multiverse stores every value as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Food exhaustion.
    pub ex: String,
    /// Maximum air, always 300.
    pub ma: String,
    /// Food level.
    pub fl: String,
    /// Experience level.
    pub el: String,
    /// Progress towards the next level.
    pub xp: String,
    pub hp: String,
    /// Total experience.
    pub txp: String,
    /// Fall distance.
    pub fd: String,
    /// Fire ticks.
    pub ft: String,
    /// Food saturation.
    pub sa: String,
    /// Remaining air.
    pub ra: String,
}

pub const MAX_AIR: &str = "300";

impl Stats {
    fn from_nbt(player: Compound) -> Result<Self> {
        let stat = |name: &str| -> Result<String> {
            player
                .get(name)
                .map(|v| stat_string(v, name))
                .unwrap_or_else(|| Err(Error::missing(name)))
        };

        Ok(Stats {
            ex: stat("foodExhaustionLevel")?,
            ma: MAX_AIR.to_owned(),
            fl: stat("foodLevel")?,
            el: stat("XpLevel")?,
            xp: stat("XpP")?,
            hp: stat("Health")?,
            txp: stat("XpTotal")?,
            fd: stat("FallDistance")?,
            ft: stat("Fire")?,
            sa: stat("foodSaturationLevel")?,
            ra: stat("Air")?,
        })
    }
}

/// Decimal form of a numeric tag. Floats use their shortest round-trip
/// form, keeping a trailing `.0` on integral values.
fn stat_string(value: &Value, field: &str) -> Result<String> {
    match *value {
        Value::Byte(v) => Ok(v.to_string()),
        Value::Short(v) => Ok(v.to_string()),
        Value::Int(v) => Ok(v.to_string()),
        Value::Long(v) => Ok(v.to_string()),
        Value::Float(v) => Ok(format!("{:?}", v)),
        Value::Double(v) => Ok(format!("{:?}", v)),
        _ => Err(Error::wrong_type(field, "a number")),
    }
}

/// The player's name as Bukkit last saw it, if recorded.
pub fn last_known_name(root: &Value) -> Result<Option<&str>> {
    let player = Compound::of(root, "player")?;
    match player.compound("bukkit")? {
        Some(bukkit) => bukkit.string("lastKnownName"),
        None => Ok(None),
    }
}

fn floats<const N: usize>(player: Compound, name: &str) -> Result<[f64; N]> {
    let list = player.require_list(name)?;
    if list.len() < N {
        return Err(Error::wrong_type(name, "a list of enough numbers"));
    }

    let mut out = [0.0; N];
    for (slot, value) in out.iter_mut().zip(list) {
        *slot = as_float(value, name)?;
    }
    Ok(out)
}

impl Converter {
    /// Convert a whole player document. `world` is the Multiverse world
    /// name that dimension suffixes are appended to.
    pub fn player(&self, root: &Value, world: &str) -> Result<PlayerSnapshot> {
        let player = Compound::of(root, "player")?;
        let game_mode = GameMode::from_id(player.require_int("playerGameType")?)?;
        let version = self.options().data_version;

        let mut inventory = Slots::new();
        let mut armor = Slots::new();
        let mut off_hand = None;

        for (slot, stack) in self.slots(player, "Inventory")? {
            if slot >= ARMOR_SLOT_BASE {
                armor.insert(slot - ARMOR_SLOT_BASE, stack);
            } else if slot == OFF_HAND_SLOT {
                off_hand = Some(stack);
            } else {
                inventory.insert(slot, stack);
            }
        }

        let ender_chest: Slots = self.slots(player, "EnderItems")?.into_iter().collect();

        let potions = match player.list("ActiveEffects")? {
            Some(effects) => PotionEffect::from_list(effects, "ActiveEffects")?,
            None => vec![],
        };

        let dimension = player.require_str("Dimension")?;
        let last_world = format!("{}{}", world, tables::dimension_suffix(dimension)?);
        let rotation = floats(player, "Rotation")?;
        let (yaw, pitch) = self.schema().rotation_order.yaw_pitch(rotation);
        let last_location = Location::new(last_world, floats(player, "Pos")?, pitch, yaw);

        let bed_spawn_location = self.spawn_location(player, world, dimension)?;

        Ok(PlayerSnapshot {
            game_mode,
            profile: Profile {
                inventory_contents: inventory,
                off_hand_item: off_hand.unwrap_or_else(|| ItemStack::air(version)),
                potions,
                ender_chest_contents: ender_chest,
                armor_contents: armor,
                last_location,
                bed_spawn_location,
                stats: Stats::from_nbt(player)?,
            },
        })
    }

    /// Convert every entry of an item list, keyed by its `Slot`. Under
    /// [`SlotPolicy::Skip`] entries that fail are logged and dropped.
    fn slots(&self, player: Compound, name: &str) -> Result<Vec<(i64, ItemStack)>> {
        let items = match player.list(name)? {
            Some(items) => items,
            None => return Ok(vec![]),
        };

        let mut slots = Vec::with_capacity(items.len());
        for (i, item) in compounds(items, name)?.into_iter().enumerate() {
            let converted = item
                .require_int("Slot")
                .and_then(|slot| Ok((slot, self.item_stack(item)?)));

            match converted {
                Ok((slot, stack)) => {
                    trace!("{}[{}]: slot {} is {}", name, i, slot, stack.item_type);
                    slots.push((slot, stack));
                }
                Err(e) if self.options().slot_policy == SlotPolicy::Skip => {
                    warn!("{}[{}]: skipping item: {}", name, i, e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(slots)
    }

    fn spawn_location(
        &self,
        player: Compound,
        world: &str,
        dimension: &str,
    ) -> Result<Option<Location>> {
        let x = match player.int("SpawnX")? {
            Some(x) => x,
            None => return Ok(None),
        };

        let spawn_dimension = match self.schema().spawn_world {
            SpawnWorld::SpawnDimension => player.string("SpawnDimension")?.unwrap_or(dimension),
            SpawnWorld::PlayerDimension => dimension,
        };

        Ok(Some(Location::new(
            format!("{}{}", world, tables::dimension_suffix(spawn_dimension)?),
            [
                x as f64,
                player.require_int("SpawnY")? as f64,
                player.require_int("SpawnZ")? as f64,
            ],
            0.0,
            player.float("SpawnAngle")?.unwrap_or(0.0),
        )))
    }
}
