//! Error types for the skyview-nbt crate.
//!
//! Every malformed input surfaces as a [`DecodeError`]; the decoder never
//! panics on hostile bytes.

/// Errors that can occur while decoding an encoded tag tree.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The outer text is not valid base64.
    #[error("invalid base64: {source}")]
    Base64 {
        /// Underlying decoder error.
        #[from]
        source: base64::DecodeError,
    },

    /// The payload carries the gzip magic but does not inflate.
    #[error("gzip stream is corrupt: {source}")]
    Gzip {
        /// Underlying I/O error from the inflater.
        source: std::io::Error,
    },

    /// Input ended in the middle of a tag.
    #[error("unexpected end of input at byte {offset}")]
    Truncated {
        /// Byte offset where reading stopped.
        offset: u64,
    },

    /// A tag id outside the supported set.
    #[error("unknown tag id {id} at byte {offset}")]
    UnknownTag {
        /// The offending id.
        id: u8,
        /// Byte offset of the id.
        offset: u64,
    },

    /// A negative array, list or string length.
    #[error("invalid length {length} at byte {offset}")]
    BadLength {
        /// The declared length.
        length: i64,
        /// Byte offset of the length field.
        offset: u64,
    },

    /// Nesting exceeded the decoder limit.
    #[error("tags nested deeper than {limit}")]
    TooDeep {
        /// The nesting limit.
        limit: usize,
    },

    /// The root tag is not a compound.
    #[error("root tag is not a compound")]
    RootNotCompound,

    /// The root compound has no item list at `i`.
    #[error("missing item list")]
    MissingItemList,
}
