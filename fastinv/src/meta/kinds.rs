use super::*;
use crate::compound::compounds;

const ENTITY_TAG: &str = "EntityTag";
const BLOCK_ENTITY_TAG: &str = "BlockEntityTag";

/// How a [`MetaType`] is serialized. Block state metas additionally need the
/// item type, which they stamp into `blockMaterial`.
#[derive(Clone, Copy)]
pub enum MetaSerializer {
    Plain(fn(&Converter, Compound) -> Result<ItemMeta>),
    BlockState(fn(&Converter, Compound, &str) -> Result<ItemMeta>),
}

impl MetaType {
    pub fn serializer(self) -> MetaSerializer {
        use MetaSerializer::*;

        match self {
            MetaType::Unspecific => Plain(unspecific),
            MetaType::Armor => Plain(armor),
            MetaType::ColorableArmor => Plain(colorable_armor),
            MetaType::LeatherArmor => Plain(leather_armor),
            MetaType::ArmorStand => Plain(armor_stand),
            MetaType::Banner => Plain(banner),
            MetaType::TileEntity => BlockState(block_state),
            MetaType::Book => Plain(book),
            MetaType::BookSigned => Plain(signed_book),
            MetaType::Skull => Plain(skull),
            MetaType::Map => Plain(map),
            MetaType::Potion => Plain(potion),
            MetaType::SpawnEgg => Plain(spawn_egg),
            MetaType::Enchanted => Plain(enchanted_book),
            MetaType::Firework => Plain(firework),
            MetaType::FireworkEffect => Plain(firework_charge),
            MetaType::KnowledgeBook => Plain(knowledge_book),
            MetaType::TropicalFishBucket => Plain(tropical_fish_bucket),
            MetaType::AxolotlBucket => Plain(axolotl_bucket),
            MetaType::Crossbow => Plain(crossbow),
            MetaType::SuspiciousStew => Plain(suspicious_stew),
            MetaType::EntityTag => Plain(entity_tag),
            MetaType::Compass => Plain(compass),
            MetaType::Bundle => Plain(bundle),
            MetaType::MusicInstrument => Plain(music_instrument),
        }
    }
}

/// The item's `EntityTag`, if it has a non-empty one.
fn embedded_entity<'a>(tag: Compound<'a>) -> Result<Option<(&'a str, &'a Value)>> {
    Ok(tag
        .compound(ENTITY_TAG)?
        .filter(|entity| !entity.is_empty())
        .map(|entity| (ENTITY_TAG, entity.value())))
}

/// Metas whose entity state is carried opaquely in `internal`.
fn entity_holder(conv: &Converter, tag: Compound, meta_type: MetaType) -> Result<ItemMeta> {
    conv.generic_meta(tag, meta_type, embedded_entity(tag)?)
}

fn display_color(tag: Compound, name: &str) -> Result<Option<Color>> {
    Ok(match tag.compound("display")? {
        Some(display) => display.int(name)?.map(Color::from_rgb),
        None => None,
    })
}

fn owned(s: Option<&str>) -> Option<String> {
    s.map(str::to_owned)
}

fn non_empty<'a>(tag: Compound<'a>, name: &str) -> Result<Option<&'a [Value]>> {
    Ok(tag.list(name)?.filter(|list| !list.is_empty()))
}

fn item_stacks(conv: &Converter, items: &[Value], field: &str) -> Result<Vec<ItemStack>> {
    compounds(items, field)?
        .into_iter()
        .map(|item| conv.item_stack(item))
        .collect()
}

fn unspecific(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    conv.generic_meta(tag, MetaType::Unspecific, None)
}

fn armor(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Armor, None)?;

    let trim = match tag.compound("Trim")? {
        Some(trim) => match (trim.string("material")?, trim.string("pattern")?) {
            (Some(material), Some(pattern)) => Some(Trim {
                material: material.to_owned(),
                pattern: pattern.to_owned(),
            }),
            _ => None,
        },
        None => None,
    };

    Ok(meta.with(MetaExtra::Armor(ArmorMeta { trim })))
}

fn colorable_armor(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::ColorableArmor, None)?;
    let color = display_color(tag, "color")?;
    Ok(meta.with(MetaExtra::Colored(ColoredMeta { color })))
}

fn leather_armor(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::LeatherArmor, None)?;
    let color = display_color(tag, "color")?;
    Ok(meta.with(MetaExtra::Colored(ColoredMeta { color })))
}

fn armor_stand(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    entity_holder(conv, tag, MetaType::ArmorStand)
}

fn spawn_egg(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    entity_holder(conv, tag, MetaType::SpawnEgg)
}

/// Item frames, paintings and fish buckets without a variant.
fn entity_tag(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    entity_holder(conv, tag, MetaType::EntityTag)
}

fn tropical_fish_bucket(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = entity_holder(conv, tag, MetaType::TropicalFishBucket)?;
    let fish_variant = tag.int("BucketVariantTag")?;
    Ok(meta.with(MetaExtra::TropicalFish(TropicalFishMeta { fish_variant })))
}

fn axolotl_bucket(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = entity_holder(conv, tag, MetaType::AxolotlBucket)?;
    let axolotl_variant = tag.int("Variant")?;
    Ok(meta.with(MetaExtra::Axolotl(AxolotlMeta { axolotl_variant })))
}

fn banner(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Banner, None)?;
    let entity = match tag.compound(BLOCK_ENTITY_TAG)? {
        Some(entity) => entity,
        None => return Ok(meta),
    };

    let base_color = entity.int("Base")?.map(tables::dye_color).transpose()?;
    let tagged = conv.schema().pattern_schema_tag;
    let patterns = match non_empty(entity, "Patterns")? {
        Some(list) => Some(
            compounds(list, "Patterns")?
                .into_iter()
                .map(|p| Pattern::from_nbt(p, tagged))
                .collect::<Result<Vec<_>>>()?,
        ),
        None => None,
    };

    Ok(meta.with(MetaExtra::Banner(BannerMeta {
        base_color,
        patterns,
    })))
}

/// Chests, signs, shulker boxes and the like. The block entity is kept whole
/// in `internal`, even when empty.
fn block_state(conv: &Converter, tag: Compound, item_type: &str) -> Result<ItemMeta> {
    let embedded = tag
        .get(BLOCK_ENTITY_TAG)
        .map(|entity| (BLOCK_ENTITY_TAG, entity));
    let meta = conv.generic_meta(tag, MetaType::TileEntity, embedded)?;

    Ok(meta.with(MetaExtra::TileEntity(TileEntityMeta {
        block_material: item_type.to_owned(),
    })))
}

fn book_meta(tag: Compound, pages: Option<Vec<String>>) -> Result<BookMeta> {
    Ok(BookMeta {
        title: owned(tag.string("title")?),
        author: owned(tag.string("author")?),
        pages,
        resolved: tag.flag("resolved")?,
        generation: tag.int("generation")?,
    })
}

fn book(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Book, None)?;
    // TODO: clamp writable book pages to MAX_PAGE_LENGTH once it is known
    // whether the plugin rejects or truncates long unsigned pages.
    let pages = match tag.list("pages")? {
        Some(pages) => Some(strings(pages, "pages")?),
        None => None,
    };
    Ok(meta.with(MetaExtra::Book(book_meta(tag, pages)?)))
}

fn signed_book(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::BookSigned, None)?;
    let clamp = conv.schema().clamp_signed_pages;
    let pages = match tag.list("pages")? {
        Some(pages) => Some(
            strings(pages, "pages")?
                .into_iter()
                .map(|page| if clamp { clamp_page(page) } else { page })
                .collect(),
        ),
        None => None,
    };
    Ok(meta.with(MetaExtra::Book(book_meta(tag, pages)?)))
}

/// Plain-text pages are cut to [`MAX_PAGE_LENGTH`] characters. JSON text
/// components are passed through, their length is not checked.
fn clamp_page(page: String) -> String {
    let json = page.starts_with('{') || page.starts_with('[') || page.starts_with('"');
    if json || page.chars().count() <= MAX_PAGE_LENGTH {
        page
    } else {
        page.chars().take(MAX_PAGE_LENGTH).collect()
    }
}

fn skull(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Skull, None)?;

    // SkullOwner is not converted: resolving it needs a player profile
    // lookup, so skull owners are dropped.

    let note_block_sound = match tag.compound(BLOCK_ENTITY_TAG)? {
        Some(entity) => owned(entity.string("note_block_sound")?),
        None => None,
    };
    Ok(meta.with(MetaExtra::Skull(SkullMeta { note_block_sound })))
}

fn map(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Map, None)?;
    Ok(meta.with(MetaExtra::Map(MapMeta {
        map_id: tag.int("map")?,
        scaling: tag.flag("map_is_scaling")?,
        display_map_color: display_color(tag, "MapColor")?,
    })))
}

fn potion(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Potion, None)?;

    let potion_type = tag
        .string("Potion")?
        .filter(|potion| tables::strip_namespace(potion) != "empty");
    let custom_effects = match tag.list("custom_potion_effects")? {
        Some(effects) => Some(PotionEffect::from_list(effects, "custom_potion_effects")?),
        None => None,
    };

    Ok(meta.with(MetaExtra::Potion(PotionMeta {
        potion_type: owned(potion_type),
        custom_color: tag.int("CustomPotionColor")?.map(Color::from_rgb),
        custom_effects,
    })))
}

fn enchanted_book(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Enchanted, None)?;
    let stored = tag.require_list("StoredEnchantments")?;
    Ok(meta.with(MetaExtra::EnchantedBook(EnchantedBookMeta {
        stored_enchants: encode::enchantments(stored, "StoredEnchantments")?,
    })))
}

fn firework(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Firework, None)?;
    let power_key = conv.schema().firework_power_key;

    let fireworks = match tag.compound("Fireworks")? {
        Some(fireworks) => fireworks,
        None => {
            return Ok(meta.with(MetaExtra::Firework(FireworkMeta {
                power: None,
                effects: None,
                power_key,
            })))
        }
    };

    let effects = match fireworks.list("Explosions")? {
        Some(list) => Some(
            compounds(list, "Explosions")?
                .into_iter()
                .map(FireworkEffect::from_nbt)
                .collect::<Result<Vec<_>>>()?,
        ),
        None => None,
    };

    Ok(meta.with(MetaExtra::Firework(FireworkMeta {
        power: Some(fireworks.require_int("Flight")?),
        effects,
        power_key,
    })))
}

fn firework_charge(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::FireworkEffect, None)?;
    let effect = tag
        .compound("Explosion")?
        .map(FireworkEffect::from_nbt)
        .transpose()?;
    Ok(meta.with(MetaExtra::Charge(ChargeMeta { effect })))
}

fn knowledge_book(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::KnowledgeBook, None)?;
    let recipes = non_empty(tag, "Recipes")?
        .map(|list| strings(list, "Recipes"))
        .transpose()?;
    Ok(meta.with(MetaExtra::KnowledgeBook(KnowledgeBookMeta { recipes })))
}

fn crossbow(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Crossbow, None)?;
    let charged_projectiles = non_empty(tag, "ChargedProjectiles")?
        .map(|items| item_stacks(conv, items, "ChargedProjectiles"))
        .transpose()?;

    Ok(meta.with(MetaExtra::Crossbow(CrossbowMeta {
        charged: tag.flag("Charged")?.unwrap_or(false),
        charged_projectiles,
    })))
}

fn suspicious_stew(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::SuspiciousStew, None)?;
    let effects = tag
        .list("effects")?
        .map(|effects| PotionEffect::from_list(effects, "effects"))
        .transpose()?;
    Ok(meta.with(MetaExtra::Stew(StewMeta { effects })))
}

fn compass(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Compass, None)?;
    let mut compass = CompassMeta::default();

    if let (Some(world), Some(pos)) = (
        tag.string("LodestoneDimension")?,
        tag.compound("LodestonePos")?,
    ) {
        compass.lodestone_world = Some(world.to_owned());
        compass.lodestone_x = Some(pos.require_int("X")?);
        compass.lodestone_y = Some(pos.require_int("Y")?);
        compass.lodestone_z = Some(pos.require_int("Z")?);
    }
    compass.lodestone_tracked = tag.flag("LodestoneTracked")?;

    Ok(meta.with(MetaExtra::Compass(compass)))
}

fn bundle(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::Bundle, None)?;
    let items = non_empty(tag, "Items")?
        .map(|items| item_stacks(conv, items, "Items"))
        .transpose()?;
    Ok(meta.with(MetaExtra::Bundle(BundleMeta { items })))
}

fn music_instrument(conv: &Converter, tag: Compound) -> Result<ItemMeta> {
    let meta = conv.generic_meta(tag, MetaType::MusicInstrument, None)?;
    let instrument = owned(tag.string("instrument")?);
    Ok(meta.with(MetaExtra::Instrument(InstrumentMeta { instrument })))
}
