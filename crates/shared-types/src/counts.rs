//! Payload of the recent-counts endpoint
//!
//! `{"dates": ["..."], "counts": {"car": [3, ...], "bus": [1, ...]}}`

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Counts for one camera over the recent window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountsResponse {
    pub dates: Vec<String>,
    pub counts: CategoryCounts,
}

/// One category's counts, parallel to `CountsResponse::dates`
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub category: String,
    pub values: Vec<Option<f64>>,
}

/// Per-category series in the order the payload lists them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryCounts(Vec<CategorySeries>);

impl CategoryCounts {
    pub fn new(series: Vec<CategorySeries>) -> Self {
        Self(series)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategorySeries> {
        self.0.iter()
    }

    pub fn get(&self, category: &str) -> Option<&[Option<f64>]> {
        self.0
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.values.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategoryCounts {
    type Item = &'a CategorySeries;
    type IntoIter = std::slice::Iter<'a, CategorySeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|s| (&s.category, &s.values)))
    }
}

// Visits the map directly so key order survives; a later duplicate key
// replaces the earlier series in place, as assignment to a JS object does.
impl<'de> Deserialize<'de> for CategoryCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = CategoryCounts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to arrays of counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut series: Vec<CategorySeries> = Vec::with_capacity(map.size_hint().unwrap_or(5));
                while let Some((category, values)) = map.next_entry::<String, Vec<Option<f64>>>()? {
                    match series.iter_mut().find(|s| s.category == category) {
                        Some(existing) => existing.values = values,
                        None => series.push(CategorySeries { category, values }),
                    }
                }
                Ok(CategoryCounts(series))
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}
