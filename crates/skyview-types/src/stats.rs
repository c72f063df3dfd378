//! Fixed-size stat record.
//!
//! [`StatMap`] stores one `f64` per [`StatName`] in declaration order. It
//! serializes as a `snake_case` name-to-value map, and deserializes from a
//! partial map where missing stats read as zero.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::enums::StatName;

/// One value per aggregate stat.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatMap {
    values: [f64; StatName::COUNT],
}

impl StatMap {
    /// All stats at zero.
    pub const fn zero() -> Self {
        Self {
            values: [0.0; StatName::COUNT],
        }
    }

    /// Build from `(stat, value)` pairs; later pairs for the same stat add up.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (StatName, f64)>,
    {
        let mut map = Self::zero();
        for (stat, value) in pairs {
            map.add(stat, value);
        }
        map
    }

    /// Read one stat.
    pub fn get(&self, stat: StatName) -> f64 {
        self.values.get(stat.index()).copied().unwrap_or(0.0)
    }

    /// Overwrite one stat.
    pub fn set(&mut self, stat: StatName, value: f64) {
        if let Some(slot) = self.values.get_mut(stat.index()) {
            *slot = value;
        }
    }

    /// Add to one stat.
    pub fn add(&mut self, stat: StatName, value: f64) {
        if let Some(slot) = self.values.get_mut(stat.index()) {
            *slot += value;
        }
    }

    /// Builder form of [`StatMap::set`].
    #[must_use]
    pub fn with(mut self, stat: StatName, value: f64) -> Self {
        self.set(stat, value);
        self
    }

    /// Add every stat of `other` into `self`.
    pub fn add_all(&mut self, other: &Self) {
        for (slot, value) in self.values.iter_mut().zip(other.values) {
            *slot += value;
        }
    }

    /// Multiply every stat by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for slot in &mut self.values {
            *slot *= factor;
        }
    }

    /// Floor every stat and clamp negatives (and non-finite values) to zero.
    pub fn floor_non_negative(&mut self) {
        for slot in &mut self.values {
            let floored = slot.floor();
            *slot = if floored.is_finite() && floored > 0.0 {
                floored
            } else {
                0.0
            };
        }
    }

    /// Whether every stat is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|value| *value == 0.0)
    }

    /// Iterate `(stat, value)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (StatName, f64)> + '_ {
        StatName::ALL.into_iter().zip(self.values.iter().copied())
    }

    /// Iterate only the stats that are not zero.
    pub fn non_zero(&self) -> impl Iterator<Item = (StatName, f64)> + '_ {
        self.iter().filter(|(_, value)| *value != 0.0)
    }
}

impl Serialize for StatMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(StatName::COUNT))?;
        for (stat, value) in self.iter() {
            map.serialize_entry(stat.key(), &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StatMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StatMapVisitor)
    }
}

struct StatMapVisitor;

impl<'de> Visitor<'de> for StatMapVisitor {
    type Value = StatMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of stat names to numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = StatMap::zero();
        while let Some((stat, value)) = access.next_entry::<StatName, f64>()? {
            map.add(stat, value);
        }
        Ok(map)
    }
}

impl From<StatMap> for BTreeMap<String, f64> {
    fn from(map: StatMap) -> Self {
        map.iter()
            .map(|(stat, value)| (stat.key().to_owned(), value))
            .collect()
    }
}
