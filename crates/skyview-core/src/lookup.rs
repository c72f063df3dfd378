//! Document-store lookups.
//!
//! Display names of coop members and metadata of pet held items live in an
//! external document store. They are fetched once per profile, before the
//! synchronous pipeline runs, and handed to it as an [`Enrichment`].
//!
//! Every lookup runs concurrently under its own deadline. A failed or late
//! lookup is logged at `warn` and leaves a gap; the engine then falls back
//! to the uuid for names and to the item id for held items.

use std::collections::{BTreeMap, BTreeSet};
use std::future::{Future, ready};
use std::time::Duration;

use futures::future::join_all;
use skyview_types::{ItemMetadata, ProfileInput};
use tokio::time::timeout;
use tracing::{debug, warn};

/// A lookup that did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupFailure {
    /// The store reported an error.
    #[error("store error: {0}")]
    Store(String),

    /// The lookup missed its deadline.
    #[error("lookup exceeded {timeout_ms}ms")]
    Timeout {
        /// The deadline.
        timeout_ms: u64,
    },
}

/// The document store as seen by the engine.
///
/// `Ok(None)` means the store answered but has no entry.
pub trait LookupStore: Sync {
    /// Display name of a player.
    fn display_name(
        &self,
        uuid: &str,
    ) -> impl Future<Output = Result<Option<String>, LookupFailure>> + Send;

    /// Display metadata of an item id.
    fn item_metadata(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<ItemMetadata>, LookupFailure>> + Send;
}

/// In-memory store, for tests and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticLookupStore {
    names: BTreeMap<String, String>,
    items: BTreeMap<String, ItemMetadata>,
}

impl StaticLookupStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a display name.
    #[must_use]
    pub fn with_name(mut self, uuid: &str, name: &str) -> Self {
        self.names.insert(uuid.to_owned(), name.to_owned());
        self
    }

    /// Add item metadata.
    #[must_use]
    pub fn with_item(mut self, id: &str, metadata: ItemMetadata) -> Self {
        self.items.insert(id.to_owned(), metadata);
        self
    }
}

impl LookupStore for StaticLookupStore {
    fn display_name(
        &self,
        uuid: &str,
    ) -> impl Future<Output = Result<Option<String>, LookupFailure>> + Send {
        ready(Ok(self.names.get(uuid).cloned()))
    }

    fn item_metadata(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<ItemMetadata>, LookupFailure>> + Send {
        ready(Ok(self.items.get(id).cloned()))
    }
}

/// Lookup results handed to the synchronous engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrichment {
    /// Display names by member uuid.
    pub display_names: BTreeMap<String, String>,
    /// Item metadata by item id.
    pub item_metadata: BTreeMap<String, ItemMetadata>,
}

impl Enrichment {
    /// Display name of `uuid`, or the uuid itself.
    pub fn display_name(&self, uuid: &str) -> String {
        self.display_names
            .get(uuid)
            .cloned()
            .unwrap_or_else(|| uuid.to_owned())
    }
}

/// Fetch names for every profile member and metadata for every pet held
/// item of the requested player.
pub async fn enrich<S: LookupStore>(store: &S, input: &ProfileInput, limit: Duration) -> Enrichment {
    let uuids: Vec<&str> = input.profile.members.keys().map(String::as_str).collect();
    let held_items: BTreeSet<&str> = input
        .member()
        .into_iter()
        .flat_map(|member| &member.pets)
        .filter_map(|pet| pet.held_item.as_deref())
        .collect();

    let names = join_all(uuids.iter().map(|uuid| async move {
        (*uuid, bounded(limit, store.display_name(uuid)).await)
    }));
    let items = join_all(held_items.iter().map(|id| async move {
        (*id, bounded(limit, store.item_metadata(id)).await)
    }));
    let (names, items) = futures::join!(names, items);

    let mut enrichment = Enrichment::default();
    for (uuid, result) in names {
        if let Some(name) = settle("display_name", uuid, result) {
            enrichment.display_names.insert(uuid.to_owned(), name);
        }
    }
    for (id, result) in items {
        if let Some(metadata) = settle("item_metadata", id, result) {
            enrichment.item_metadata.insert(id.to_owned(), metadata);
        }
    }

    debug!(
        names = enrichment.display_names.len(),
        items = enrichment.item_metadata.len(),
        "lookups joined"
    );
    enrichment
}

async fn bounded<T, F>(limit: Duration, lookup: F) -> Result<Option<T>, LookupFailure>
where
    F: Future<Output = Result<Option<T>, LookupFailure>>,
{
    match timeout(limit, lookup).await {
        Ok(result) => result,
        Err(_elapsed) => Err(LookupFailure::Timeout {
            timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}

fn settle<T>(kind: &str, key: &str, result: Result<Option<T>, LookupFailure>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(error) => {
            warn!(kind, key, error = %error, "lookup failed, using placeholder");
            None
        }
    }
}
