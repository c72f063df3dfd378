//! Raw slot records read from a decoded inventory.
//!
//! A slot compound holds `id`, `Count`, `Damage` and an optional `tag`
//! compound. Empty slots are empty compounds and come back with `id: None`.

use crate::error::DecodeError;
use crate::tag::Tag;

/// One slot as stored, before any classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RawItem {
    /// Numeric item id; `None` for an empty slot.
    pub id: Option<i16>,
    /// Damage value, which doubles as the item variant.
    pub damage: i16,
    /// Stack size.
    pub count: i8,
    /// The `tag` compound, if present.
    pub tag: Option<Tag>,
}

impl RawItem {
    /// Read a slot compound. Anything that is not a compound is an empty slot.
    pub fn from_slot(slot: &Tag) -> Self {
        let number = |key: &str| slot.get(key).and_then(Tag::as_i64);
        Self {
            id: number("id").and_then(|value| i16::try_from(value).ok()),
            damage: number("Damage")
                .and_then(|value| i16::try_from(value).ok())
                .unwrap_or_default(),
            count: number("Count")
                .and_then(|value| i8::try_from(value).ok())
                .unwrap_or_default(),
            tag: slot.get("tag").filter(|tag| tag.as_compound().is_some()).cloned(),
        }
    }

    /// Whether the slot holds nothing.
    pub const fn is_empty(&self) -> bool {
        self.id.is_none()
    }

    /// The `tag.ExtraAttributes` compound.
    pub fn extra_attributes(&self) -> Option<&Tag> {
        self.tag.as_ref()?.get("ExtraAttributes")
    }

    /// A string field of `ExtraAttributes`.
    pub fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra_attributes()?.get(key)?.as_str()
    }

    /// An integral field of `ExtraAttributes`.
    pub fn extra_i64(&self, key: &str) -> Option<i64> {
        self.extra_attributes()?.get(key)?.as_i64()
    }

    /// The display name, formatting codes included.
    pub fn display_name(&self) -> Option<&str> {
        self.tag.as_ref()?.path(&["display", "Name"])?.as_str()
    }

    /// Lore lines, formatting codes included. Non-string entries are skipped.
    pub fn lore(&self) -> Vec<String> {
        self.tag
            .as_ref()
            .and_then(|tag| tag.path(&["display", "Lore"]))
            .and_then(Tag::as_list)
            .map(|lines| {
                lines
                    .iter()
                    .filter_map(Tag::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Leather dye colour, `display.color`.
    pub fn dye_color(&self) -> Option<i64> {
        self.tag.as_ref()?.path(&["display", "color"])?.as_i64()
    }

    /// Skull texture value, `SkullOwner.Properties.textures[0].Value`.
    pub fn skull_texture(&self) -> Option<&str> {
        self.tag
            .as_ref()?
            .path(&["SkullOwner", "Properties", "textures"])?
            .as_list()?
            .first()?
            .get("Value")?
            .as_str()
    }
}

/// Read every slot of the list at `i` in a decoded root.
pub fn read_item_list(root: &Tag) -> Result<Vec<RawItem>, DecodeError> {
    let slots = root
        .get("i")
        .and_then(Tag::as_list)
        .ok_or(DecodeError::MissingItemList)?;
    Ok(slots.iter().map(RawItem::from_slot).collect())
}

/// Remove `§x` formatting pairs. A trailing lone `§` is dropped too.
pub fn strip_formatting(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{a7}' {
            chars.next();
        } else {
            out.push(ch);
        }
    }
    out
}
