//! Binary tag decoding for Skyview inventories.
//!
//! Inventory sections arrive as base64 text wrapping a gzip-compressed tag
//! tree. This crate turns that text into raw slot records and flattens
//! nested containers into a single arena.
//!
//! # Modules
//!
//! - [`error`] -- [`DecodeError`] for malformed input
//! - [`tag`] -- The decoded [`Tag`] tree
//! - [`reader`] -- Base64, gzip and big-endian tag parsing
//! - [`item`] -- Raw slot records and text helpers
//! - [`flatten`] -- Nested container expansion
//! - `fixtures` -- Tag writer for tests (feature `fixtures`)

pub mod error;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod flatten;
pub mod item;
pub mod reader;
pub mod tag;

pub use error::DecodeError;
pub use flatten::{FlatItem, Flattened, NestedFailure, flatten};
pub use item::{RawItem, read_item_list, strip_formatting};
pub use reader::{MAX_DEPTH, decode_base64, decode_bytes};
pub use tag::Tag;
