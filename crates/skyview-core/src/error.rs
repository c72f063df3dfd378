//! Error types for the profile engine.
//!
//! Only failures that make the whole report meaningless surface here.
//! Recoverable problems (unclassifiable items, missing reference entries,
//! failed lookups) are recorded on the report or logged instead.

use skyview_nbt::DecodeError;

/// Errors that can occur while processing a profile.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A top-level inventory section could not be decoded.
    #[error("inventory decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// The requested player is not a member of the profile.
    #[error("player {uuid} is not a member of profile {profile_id}")]
    UnknownMember {
        /// The requested player.
        uuid: String,
        /// The profile searched.
        profile_id: String,
    },
}
