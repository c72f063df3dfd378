//! The decoded tag tree.
//!
//! Compounds keep every key, including ones nothing downstream reads, so
//! later stages can ignore what they do not understand.

use std::collections::BTreeMap;

/// Wire ids of the supported tag kinds.
pub mod id {
    /// End of a compound.
    pub const END: u8 = 0;
    /// Signed 8-bit integer.
    pub const BYTE: u8 = 1;
    /// Signed 16-bit integer.
    pub const SHORT: u8 = 2;
    /// Signed 32-bit integer.
    pub const INT: u8 = 3;
    /// Signed 64-bit integer.
    pub const LONG: u8 = 4;
    /// 32-bit float.
    pub const FLOAT: u8 = 5;
    /// 64-bit float.
    pub const DOUBLE: u8 = 6;
    /// Length-prefixed bytes.
    pub const BYTE_ARRAY: u8 = 7;
    /// Length-prefixed modified UTF-8.
    pub const STRING: u8 = 8;
    /// Homogeneous list.
    pub const LIST: u8 = 9;
    /// Named children.
    pub const COMPOUND: u8 = 10;
    /// Length-prefixed 32-bit integers.
    pub const INT_ARRAY: u8 = 11;
    /// Length-prefixed 64-bit integers.
    pub const LONG_ARRAY: u8 = 12;
}

/// One decoded tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// Terminator; only appears as the element kind of empty lists.
    End,
    /// 8-bit integer.
    Byte(i8),
    /// 16-bit integer.
    Short(i16),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// Raw bytes; nested containers store compressed trees here.
    ByteArray(Vec<u8>),
    /// Text, decoded lossily.
    String(String),
    /// Ordered elements of one kind.
    List(Vec<Tag>),
    /// Named children.
    Compound(BTreeMap<String, Tag>),
    /// 32-bit integers.
    IntArray(Vec<i32>),
    /// 64-bit integers.
    LongArray(Vec<i64>),
}

impl Tag {
    /// The wire id of this tag.
    pub const fn id(&self) -> u8 {
        match self {
            Self::End => id::END,
            Self::Byte(_) => id::BYTE,
            Self::Short(_) => id::SHORT,
            Self::Int(_) => id::INT,
            Self::Long(_) => id::LONG,
            Self::Float(_) => id::FLOAT,
            Self::Double(_) => id::DOUBLE,
            Self::ByteArray(_) => id::BYTE_ARRAY,
            Self::String(_) => id::STRING,
            Self::List(_) => id::LIST,
            Self::Compound(_) => id::COMPOUND,
            Self::IntArray(_) => id::INT_ARRAY,
            Self::LongArray(_) => id::LONG_ARRAY,
        }
    }

    /// Child of a compound.
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_compound()?.get(key)
    }

    /// Follow a path of compound keys.
    pub fn path(&self, keys: &[&str]) -> Option<&Self> {
        keys.iter().try_fold(self, |tag, key| tag.get(key))
    }

    /// Children of a compound.
    pub const fn as_compound(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Compound(map) => Some(map),
            _ => None,
        }
    }

    /// Elements of a list.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Text of a string tag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Bytes of a byte array.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::ByteArray(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Any integral tag widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Byte(value) => Some(i64::from(*value)),
            Self::Short(value) => Some(i64::from(*value)),
            Self::Int(value) => Some(i64::from(*value)),
            Self::Long(value) => Some(*value),
            _ => None,
        }
    }

    /// Any integral tag that fits in `i32`.
    pub fn as_i32(&self) -> Option<i32> {
        self.as_i64().and_then(|value| i32::try_from(value).ok())
    }

    /// Any numeric tag as `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(f64::from(*value)),
            Self::Double(value) => Some(*value),
            other => other.as_i64().map(|value| value as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tag {
        let mut extra = BTreeMap::new();
        extra.insert("id".to_owned(), Tag::String("ASPECT_OF_THE_END".to_owned()));
        extra.insert("anvil_uses".to_owned(), Tag::Byte(3));

        let mut root = BTreeMap::new();
        root.insert("ExtraAttributes".to_owned(), Tag::Compound(extra));
        Tag::Compound(root)
    }

    #[test]
    fn path_walks_nested_compounds() {
        let tag = sample();
        let id = tag.path(&["ExtraAttributes", "id"]).and_then(Tag::as_str);
        assert_eq!(id, Some("ASPECT_OF_THE_END"));
        assert!(tag.path(&["ExtraAttributes", "missing"]).is_none());
        assert!(tag.path(&["ExtraAttributes", "id", "deeper"]).is_none());
    }

    #[test]
    fn integers_widen() {
        let tag = sample();
        let uses = tag.path(&["ExtraAttributes", "anvil_uses"]);
        assert_eq!(uses.and_then(Tag::as_i64), Some(3));
        assert_eq!(uses.and_then(Tag::as_i32), Some(3));
        assert_eq!(Tag::Long(i64::MAX).as_i32(), None);
    }
}
