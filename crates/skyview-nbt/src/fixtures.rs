//! Tag writer and inventory builders for tests.
//!
//! Enabled for this crate's own tests and, through the `fixtures` feature,
//! for downstream test suites that need realistic encoded inventories.

use std::collections::BTreeMap;
use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::write::GzEncoder;

use crate::tag::{Tag, id};

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Encode `root` as an unnamed root compound, uncompressed.
pub fn write_root(root: &Tag) -> Vec<u8> {
    let mut out = vec![id::COMPOUND];
    write_string(&mut out, "");
    write_payload(&mut out, root);
    out
}

/// Encode and gzip `root`.
pub fn gzip(root: &Tag) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&write_root(root))?;
    encoder.finish()
}

/// Encode, gzip and base64 `root`, the shape profile documents carry.
pub fn encode_base64(root: &Tag) -> io::Result<String> {
    Ok(STANDARD.encode(gzip(root)?))
}

fn write_len(out: &mut Vec<u8>, len: usize) {
    let len = i32::try_from(len).unwrap_or(i32::MAX);
    out.extend_from_slice(&len.to_be_bytes());
}

fn write_string(out: &mut Vec<u8>, text: &str) {
    let bytes = text.as_bytes();
    let len = u16::try_from(bytes.len()).unwrap_or(u16::MAX);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend(bytes.iter().take(usize::from(len)));
}

fn write_payload(out: &mut Vec<u8>, tag: &Tag) {
    match tag {
        Tag::End => {}
        Tag::Byte(value) => out.extend_from_slice(&value.to_be_bytes()),
        Tag::Short(value) => out.extend_from_slice(&value.to_be_bytes()),
        Tag::Int(value) => out.extend_from_slice(&value.to_be_bytes()),
        Tag::Long(value) => out.extend_from_slice(&value.to_be_bytes()),
        Tag::Float(value) => out.extend_from_slice(&value.to_be_bytes()),
        Tag::Double(value) => out.extend_from_slice(&value.to_be_bytes()),
        Tag::ByteArray(bytes) => {
            write_len(out, bytes.len());
            out.extend_from_slice(bytes);
        }
        Tag::String(text) => write_string(out, text),
        Tag::List(items) => {
            out.push(items.first().map_or(id::END, Tag::id));
            write_len(out, items.len());
            for item in items {
                write_payload(out, item);
            }
        }
        Tag::Compound(children) => {
            for (name, child) in children {
                out.push(child.id());
                write_string(out, name);
                write_payload(out, child);
            }
            out.push(id::END);
        }
        Tag::IntArray(values) => {
            write_len(out, values.len());
            for value in values {
                out.extend_from_slice(&value.to_be_bytes());
            }
        }
        Tag::LongArray(values) => {
            write_len(out, values.len());
            for value in values {
                out.extend_from_slice(&value.to_be_bytes());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// A root compound holding `slots` under `i`.
pub fn inventory(slots: Vec<Tag>) -> Tag {
    compound([("i", Tag::List(slots))])
}

/// An empty slot.
pub fn empty_slot() -> Tag {
    Tag::Compound(BTreeMap::new())
}

/// A string tag.
pub fn string(text: &str) -> Tag {
    Tag::String(text.to_owned())
}

/// A compound from `(key, tag)` pairs.
pub fn compound<const N: usize>(entries: [(&str, Tag); N]) -> Tag {
    Tag::Compound(
        entries
            .into_iter()
            .map(|(key, tag)| (key.to_owned(), tag))
            .collect(),
    )
}

/// Builds one slot compound.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    id: i16,
    count: i8,
    damage: i16,
    display: BTreeMap<String, Tag>,
    extra: BTreeMap<String, Tag>,
    tag: BTreeMap<String, Tag>,
}

impl ItemBuilder {
    /// Start a slot with numeric item `id`, a stack of one.
    pub const fn new(id: i16) -> Self {
        Self {
            id,
            count: 1,
            damage: 0,
            display: BTreeMap::new(),
            extra: BTreeMap::new(),
            tag: BTreeMap::new(),
        }
    }

    /// Stack size.
    #[must_use]
    pub const fn count(mut self, count: i8) -> Self {
        self.count = count;
        self
    }

    /// Damage value.
    #[must_use]
    pub const fn damage(mut self, damage: i16) -> Self {
        self.damage = damage;
        self
    }

    /// Display name.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.display.insert("Name".to_owned(), string(name));
        self
    }

    /// Lore lines.
    #[must_use]
    pub fn lore(mut self, lines: &[&str]) -> Self {
        let lines = lines.iter().map(|line| string(line)).collect();
        self.display.insert("Lore".to_owned(), Tag::List(lines));
        self
    }

    /// Leather dye colour.
    #[must_use]
    pub fn color(mut self, rgb: i32) -> Self {
        self.display.insert("color".to_owned(), Tag::Int(rgb));
        self
    }

    /// `ExtraAttributes.id`.
    #[must_use]
    pub fn skyblock_id(self, skyblock_id: &str) -> Self {
        self.extra("id", string(skyblock_id))
    }

    /// Any `ExtraAttributes` field.
    #[must_use]
    pub fn extra(mut self, key: &str, value: Tag) -> Self {
        self.extra.insert(key.to_owned(), value);
        self
    }

    /// Skull texture value.
    #[must_use]
    pub fn skull_texture(mut self, value: &str) -> Self {
        let texture = compound([("Value", string(value))]);
        let properties = compound([("textures", Tag::List(vec![texture]))]);
        self.tag.insert(
            "SkullOwner".to_owned(),
            compound([("Properties", properties)]),
        );
        self
    }

    /// Nest `contents` as a gzip-compressed container payload under `key`.
    pub fn contents(self, key: &str, contents: Vec<Tag>) -> io::Result<Self> {
        let payload = gzip(&inventory(contents))?;
        Ok(self.extra(key, Tag::ByteArray(payload)))
    }

    /// Finish the slot compound.
    pub fn build(self) -> Tag {
        let mut tag = self.tag;
        if !self.display.is_empty() {
            tag.insert("display".to_owned(), Tag::Compound(self.display));
        }
        if !self.extra.is_empty() {
            tag.insert("ExtraAttributes".to_owned(), Tag::Compound(self.extra));
        }

        let mut slot = BTreeMap::new();
        slot.insert("id".to_owned(), Tag::Short(self.id));
        slot.insert("Count".to_owned(), Tag::Byte(self.count));
        slot.insert("Damage".to_owned(), Tag::Short(self.damage));
        if !tag.is_empty() {
            slot.insert("tag".to_owned(), Tag::Compound(tag));
        }
        Tag::Compound(slot)
    }
}
