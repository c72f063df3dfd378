//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Identifiers here are UUID v5 values derived from stable inputs, never
//! random, so that processing the same profile twice serializes to the
//! same bytes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::enums::Section;

/// Namespace for item identifiers.
const ITEM_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_93b7_5d10_8e42_c7a9_0b35_d618);

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

define_id! {
    /// Deterministic identifier of one item in a processed profile.
    ItemUid
}

impl ItemUid {
    /// Derive the identifier for the item at `slot` of `section`, scoped to
    /// the profile member `scope` (usually the member uuid).
    ///
    /// Nested items use the slot path of their parent joined with `/`.
    pub fn derive(scope: &str, section: Section, slot: &str) -> Self {
        let name = format!("{scope}:{}:{slot}", section.key());
        Self(Uuid::new_v5(&ITEM_NAMESPACE, name.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_stable() {
        let first = ItemUid::derive("member", Section::Inventory, "3");
        let second = ItemUid::derive("member", Section::Inventory, "3");
        assert_eq!(first, second);
    }

    #[test]
    fn section_and_slot_change_the_id() {
        let base = ItemUid::derive("member", Section::Inventory, "3");
        assert_ne!(base, ItemUid::derive("member", Section::EnderChest, "3"));
        assert_ne!(base, ItemUid::derive("member", Section::Inventory, "3/0"));
        assert_ne!(base, ItemUid::derive("other", Section::Inventory, "3"));
    }
}
