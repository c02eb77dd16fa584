// File: crates/pointplot-core/src/series.rs
// Summary: Series kinds and the registry of drawn series used for replay.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::options::DrawOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Scatter,
}

/// A series as it was drawn: its data (sorted by x for lines), the resolved
/// options snapshot, and its kind.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisteredSeries {
    pub data: Vec<Point>,
    pub options: DrawOptions,
    pub kind: SeriesKind,
}

/// Append-only store keyed by insertion order.
#[derive(Clone, Debug, Default)]
pub struct SeriesRegistry {
    entries: Vec<RegisteredSeries>,
}

impl SeriesRegistry {
    pub fn new() -> Self { Self::default() }

    /// Append and return the entry's key.
    pub fn register(&mut self, series: RegisteredSeries) -> usize {
        self.entries.push(series);
        self.entries.len() - 1
    }

    pub fn clear(&mut self) { self.entries.clear(); }

    pub fn get(&self, key: usize) -> Option<&RegisteredSeries> { self.entries.get(key) }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Entries with their keys, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &RegisteredSeries)> {
        self.entries.iter().enumerate()
    }

    pub fn kinds(&self) -> Vec<SeriesKind> {
        self.entries.iter().map(|s| s.kind).collect()
    }
}
