//! Binary tag reader.
//!
//! Reads one named root compound from big-endian bytes, inflating gzip
//! payloads first. Lengths are checked against the remaining input before
//! anything is allocated, and nesting is capped at [`MAX_DEPTH`].

use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use byteorder::{BigEndian, ReadBytesExt};
use flate2::read::GzDecoder;

use crate::error::DecodeError;
use crate::tag::{Tag, id};

/// Deepest list/compound nesting the reader accepts.
pub const MAX_DEPTH: usize = 512;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Decode base64 text holding a (usually gzip-compressed) tag tree.
pub fn decode_base64(text: &str) -> Result<Tag, DecodeError> {
    let bytes = STANDARD.decode(text.trim())?;
    decode_bytes(&bytes)
}

/// Decode a tag tree, inflating it first when it carries the gzip magic.
pub fn decode_bytes(bytes: &[u8]) -> Result<Tag, DecodeError> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut inflated = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut inflated)
            .map_err(|source| DecodeError::Gzip { source })?;
        read_root(&inflated)
    } else {
        read_root(bytes)
    }
}

fn read_root(bytes: &[u8]) -> Result<Tag, DecodeError> {
    let mut reader = TagReader::new(bytes);
    if reader.u8()? != id::COMPOUND {
        return Err(DecodeError::RootNotCompound);
    }
    // Root name is always empty in inventory payloads.
    let _name = reader.string()?;
    reader.payload(id::COMPOUND, 0)
}

// ---------------------------------------------------------------------------
// Reader
// ---------------------------------------------------------------------------

struct TagReader<'a> {
    cursor: Cursor<&'a [u8]>,
    len: u64,
}

impl<'a> TagReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            len: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            cursor: Cursor::new(bytes),
        }
    }

    fn offset(&self) -> u64 {
        self.cursor.position()
    }

    fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.offset())
    }

    fn truncated(&self) -> DecodeError {
        DecodeError::Truncated {
            offset: self.offset(),
        }
    }

    fn u8(&mut self) -> Result<u8, DecodeError> {
        self.cursor.read_u8().map_err(|_eof| self.truncated())
    }

    fn i8(&mut self) -> Result<i8, DecodeError> {
        self.cursor.read_i8().map_err(|_eof| self.truncated())
    }

    fn i16(&mut self) -> Result<i16, DecodeError> {
        self.cursor
            .read_i16::<BigEndian>()
            .map_err(|_eof| self.truncated())
    }

    fn i32(&mut self) -> Result<i32, DecodeError> {
        self.cursor
            .read_i32::<BigEndian>()
            .map_err(|_eof| self.truncated())
    }

    fn i64(&mut self) -> Result<i64, DecodeError> {
        self.cursor
            .read_i64::<BigEndian>()
            .map_err(|_eof| self.truncated())
    }

    fn f32(&mut self) -> Result<f32, DecodeError> {
        self.cursor
            .read_f32::<BigEndian>()
            .map_err(|_eof| self.truncated())
    }

    fn f64(&mut self) -> Result<f64, DecodeError> {
        self.cursor
            .read_f64::<BigEndian>()
            .map_err(|_eof| self.truncated())
    }

    /// Read a signed 32-bit element count and check that `count *
    /// element_size` bytes are still available.
    fn length(&mut self, element_size: u64) -> Result<usize, DecodeError> {
        let offset = self.offset();
        let raw = self.i32()?;
        let count = u64::try_from(raw).map_err(|_negative| DecodeError::BadLength {
            length: i64::from(raw),
            offset,
        })?;
        if count.saturating_mul(element_size) > self.remaining() {
            return Err(self.truncated());
        }
        usize::try_from(count).map_err(|_overflow| DecodeError::BadLength {
            length: i64::from(raw),
            offset,
        })
    }

    fn bytes(&mut self, count: usize) -> Result<Vec<u8>, DecodeError> {
        let mut buffer = vec![0; count];
        self.cursor
            .read_exact(&mut buffer)
            .map_err(|_eof| self.truncated())?;
        Ok(buffer)
    }

    /// Length-prefixed modified UTF-8, decoded lossily.
    fn string(&mut self) -> Result<String, DecodeError> {
        let count = self
            .cursor
            .read_u16::<BigEndian>()
            .map_err(|_eof| self.truncated())?;
        let raw = self.bytes(usize::from(count))?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    fn payload(&mut self, kind: u8, depth: usize) -> Result<Tag, DecodeError> {
        let tag = match kind {
            id::END => Tag::End,
            id::BYTE => Tag::Byte(self.i8()?),
            id::SHORT => Tag::Short(self.i16()?),
            id::INT => Tag::Int(self.i32()?),
            id::LONG => Tag::Long(self.i64()?),
            id::FLOAT => Tag::Float(self.f32()?),
            id::DOUBLE => Tag::Double(self.f64()?),
            id::BYTE_ARRAY => {
                let count = self.length(1)?;
                Tag::ByteArray(self.bytes(count)?)
            }
            id::STRING => Tag::String(self.string()?),
            id::LIST => self.list(depth)?,
            id::COMPOUND => self.compound(depth)?,
            id::INT_ARRAY => {
                let count = self.length(4)?;
                let values = (0..count).map(|_| self.i32()).collect::<Result<_, _>>()?;
                Tag::IntArray(values)
            }
            id::LONG_ARRAY => {
                let count = self.length(8)?;
                let values = (0..count).map(|_| self.i64()).collect::<Result<_, _>>()?;
                Tag::LongArray(values)
            }
            unknown => {
                return Err(DecodeError::UnknownTag {
                    id: unknown,
                    offset: self.offset().saturating_sub(1),
                });
            }
        };
        Ok(tag)
    }

    fn enter(depth: usize) -> Result<usize, DecodeError> {
        let next = depth.saturating_add(1);
        if next > MAX_DEPTH {
            return Err(DecodeError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(next)
    }

    fn list(&mut self, depth: usize) -> Result<Tag, DecodeError> {
        let depth = Self::enter(depth)?;
        let offset = self.offset();
        let kind = self.u8()?;
        if kind > id::LONG_ARRAY {
            return Err(DecodeError::UnknownTag { id: kind, offset });
        }
        // Every element needs at least one byte, except END elements which
        // only appear in empty lists.
        let count = self.length(u64::from(kind != id::END))?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(self.payload(kind, depth)?);
        }
        Ok(Tag::List(items))
    }

    fn compound(&mut self, depth: usize) -> Result<Tag, DecodeError> {
        let depth = Self::enter(depth)?;
        let mut children = BTreeMap::new();
        loop {
            let kind = self.u8()?;
            if kind == id::END {
                break;
            }
            let name = self.string()?;
            let value = self.payload(kind, depth)?;
            children.insert(name, value);
        }
        Ok(Tag::Compound(children))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures::{self, ItemBuilder};

    #[test]
    fn decodes_gzip_base64_inventory() {
        let root = fixtures::inventory(vec![
            ItemBuilder::new(276).count(1).skyblock_id("ASPECT_OF_THE_END").build(),
            fixtures::empty_slot(),
        ]);
        let text = fixtures::encode_base64(&root).unwrap();

        let decoded = decode_base64(&text).unwrap();
        assert_eq!(decoded, root);
    }

    #[test]
    fn accepts_uncompressed_payloads() {
        let root = fixtures::inventory(vec![fixtures::empty_slot()]);
        let raw = fixtures::write_root(&root);

        assert_eq!(decode_bytes(&raw).unwrap(), root);
    }

    #[test]
    fn truncated_input_is_an_error() {
        let root = fixtures::inventory(vec![ItemBuilder::new(1).build()]);
        let raw = fixtures::write_root(&root);
        let cut = raw.get(..raw.len().saturating_sub(3)).unwrap();

        assert!(matches!(
            decode_bytes(cut),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn unknown_tag_id_is_an_error() {
        // Root compound with one child of kind 42.
        let raw = [id::COMPOUND, 0, 0, 42, 0, 1, b'x'];
        assert!(matches!(
            decode_bytes(&raw),
            Err(DecodeError::UnknownTag { id: 42, .. })
        ));
    }

    #[test]
    fn negative_length_is_an_error() {
        // Root compound with a byte array claiming -1 elements.
        let raw = [
            id::COMPOUND, 0, 0, id::BYTE_ARRAY, 0, 1, b'b', 0xff, 0xff, 0xff, 0xff,
        ];
        assert!(matches!(
            decode_bytes(&raw),
            Err(DecodeError::BadLength { length: -1, .. })
        ));
    }

    #[test]
    fn oversized_length_does_not_allocate() {
        // A byte array claiming two billion elements with none present.
        let raw = [
            id::COMPOUND, 0, 0, id::BYTE_ARRAY, 0, 1, b'b', 0x7f, 0xff, 0xff, 0xff,
        ];
        assert!(matches!(
            decode_bytes(&raw),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn deep_nesting_is_rejected() {
        // Lists of lists, one level past the limit.
        let mut raw = vec![id::COMPOUND, 0, 0, id::LIST, 0, 1, b'l'];
        for _ in 0..MAX_DEPTH {
            raw.extend_from_slice(&[id::LIST, 0, 0, 0, 1]);
        }
        raw.extend_from_slice(&[id::END, 0, 0, 0, 0, id::END]);

        assert!(matches!(
            decode_bytes(&raw),
            Err(DecodeError::TooDeep { .. })
        ));
    }

    #[test]
    fn corrupt_gzip_is_an_error() {
        let raw = [0x1f, 0x8b, 0x08, 0x00, 0xde, 0xad];
        assert!(matches!(decode_bytes(&raw), Err(DecodeError::Gzip { .. })));
    }

    #[test]
    fn invalid_base64_is_an_error() {
        assert!(matches!(
            decode_base64("not base64!!"),
            Err(DecodeError::Base64 { .. })
        ));
    }

    #[test]
    fn root_must_be_a_compound() {
        let raw = [id::STRING, 0, 0, 0, 0];
        assert!(matches!(
            decode_bytes(&raw),
            Err(DecodeError::RootNotCompound)
        ));
    }
}
