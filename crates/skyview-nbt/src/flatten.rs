//! Container flattening.
//!
//! Backpacks and cake bags store their contents as a compressed tag tree in
//! a byte array. Flattening decodes those payloads and appends the contents
//! to the end of the list, so the whole section becomes one arena indexed
//! by position. Children record their parent; parents list their children.
//!
//! The walk is iterative: appended children are scanned by the same loop,
//! so nesting depth never grows the stack.

use tracing::warn;

use crate::error::DecodeError;
use crate::item::{RawItem, read_item_list, strip_formatting};
use crate::reader::decode_bytes;
use crate::tag::Tag;

/// Display-name suffixes of items whose payload is a nested container.
const CONTAINER_SUFFIXES: [&str; 2] = ["Backpack", "New Year Cake Bag"];

/// One entry of the flattened arena.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatItem {
    /// The slot as stored.
    pub raw: RawItem,
    /// Slot path: `"3"` at the top level, `"3/0"` inside slot 3.
    pub slot: String,
    /// Position of the containing item, for nested entries.
    pub parent: Option<usize>,
    /// Positions of the entries this item contains, in slot order.
    pub children: Vec<usize>,
}

impl FlatItem {
    /// Whether this entry came out of a nested container.
    pub const fn is_nested(&self) -> bool {
        self.parent.is_some()
    }
}

/// A nested payload that could not be decoded.
#[derive(Debug)]
pub struct NestedFailure {
    /// Position of the container whose payload failed.
    pub position: usize,
    /// Why it failed.
    pub error: DecodeError,
}

/// Result of flattening one section.
#[derive(Debug, Default)]
pub struct Flattened {
    /// Every slot, top level first, nested contents appended.
    pub items: Vec<FlatItem>,
    /// Nested payloads that were skipped.
    pub failures: Vec<NestedFailure>,
}

/// Whether `item` is a container whose contents are stored inline.
pub fn is_container(item: &RawItem) -> bool {
    item.display_name().is_some_and(|name| {
        let name = strip_formatting(name);
        CONTAINER_SUFFIXES
            .iter()
            .any(|suffix| name.trim_end().ends_with(suffix))
    })
}

/// The byte array holding a container's contents.
fn container_payload(item: &RawItem) -> Option<&[u8]> {
    item.extra_attributes()?
        .as_compound()?
        .iter()
        .find(|(key, _)| key.ends_with("backpack_data") || key.as_str() == "new_year_cake_bag_data")
        .and_then(|(_, value)| value.as_bytes())
}

fn decode_contents(payload: &[u8]) -> Result<Vec<RawItem>, DecodeError> {
    let root: Tag = decode_bytes(payload)?;
    read_item_list(&root)
}

/// Flatten a section's top-level slots.
pub fn flatten(top_level: Vec<RawItem>) -> Flattened {
    let mut items: Vec<FlatItem> = top_level
        .into_iter()
        .enumerate()
        .map(|(index, raw)| FlatItem {
            raw,
            slot: index.to_string(),
            parent: None,
            children: Vec::new(),
        })
        .collect();
    let mut failures = Vec::new();

    let mut cursor = 0;
    while let Some(item) = items.get(cursor) {
        let position = cursor;
        cursor = cursor.saturating_add(1);

        if !is_container(&item.raw) {
            continue;
        }
        let Some(payload) = container_payload(&item.raw) else {
            continue;
        };

        match decode_contents(payload) {
            Ok(contents) => {
                let parent_slot = item.slot.clone();
                let appended = contents
                    .into_iter()
                    .enumerate()
                    .map(|(index, raw)| FlatItem {
                        raw,
                        slot: format!("{parent_slot}/{index}"),
                        parent: Some(position),
                        children: Vec::new(),
                    })
                    .collect::<Vec<_>>();
                items.extend(appended);
            }
            Err(error) => {
                warn!(position, error = %error, "skipping undecodable container payload");
                failures.push(NestedFailure { position, error });
            }
        }
    }

    group_children(&mut items);
    Flattened { items, failures }
}

/// Fill every parent's `children` from the back-references.
fn group_children(items: &mut [FlatItem]) {
    let links: Vec<(usize, usize)> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| item.parent.map(|parent| (parent, index)))
        .collect();
    for (parent, child) in links {
        if let Some(container) = items.get_mut(parent) {
            container.children.push(child);
        }
    }
}
