//! Breakpoint tables and viewport dimensions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A snapshot of the viewport size for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Creates a dimensions snapshot.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The threshold at which a named breakpoint starts to apply.
///
/// Most themes use plain minimum widths. A breakpoint may also require a
/// minimum height, which lets themes distinguish orientations:
///
/// ```yaml
/// breakpoints:
///   phone: 0
///   tablet: 768
///   landscape: { width: 700, height: 300 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Breakpoint {
    /// Applies when the viewport is at least this wide.
    Width(f64),
    /// Applies when the viewport is at least this wide and this tall.
    Size { width: f64, height: f64 },
}

impl Breakpoint {
    /// The minimum width, used to order breakpoints.
    pub fn min_width(&self) -> f64 {
        match *self {
            Breakpoint::Width(width) => width,
            Breakpoint::Size { width, .. } => width,
        }
    }

    /// Returns `true` if the viewport satisfies this breakpoint.
    pub fn matches(&self, dimensions: Dimensions) -> bool {
        match *self {
            Breakpoint::Width(width) => dimensions.width >= width,
            Breakpoint::Size { width, height } => {
                dimensions.width >= width && dimensions.height >= height
            }
        }
    }
}

impl From<f64> for Breakpoint {
    fn from(width: f64) -> Self {
        Breakpoint::Width(width)
    }
}

/// A theme's breakpoint table, kept sorted ascending by minimum width.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Breakpoint>",
    into = "BTreeMap<String, Breakpoint>"
)]
pub struct Breakpoints {
    entries: Vec<(String, Breakpoint)>,
}

impl Breakpoints {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a breakpoint, keeping the table sorted.
    pub fn insert(&mut self, name: impl Into<String>, breakpoint: Breakpoint) {
        let name = name.into();
        self.entries.retain(|(existing, _)| *existing != name);
        let idx = self
            .entries
            .partition_point(|(_, bp)| bp.min_width() <= breakpoint.min_width());
        self.entries.insert(idx, (name, breakpoint));
    }

    /// Looks up a breakpoint by name.
    pub fn get(&self, name: &str) -> Option<&Breakpoint> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, bp)| bp)
    }

    /// Returns `true` if a breakpoint with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates breakpoints from the smallest to the largest minimum width.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Breakpoint)> {
        self.entries.iter().map(|(name, bp)| (name.as_str(), bp))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, Breakpoint>> for Breakpoints {
    fn from(map: BTreeMap<String, Breakpoint>) -> Self {
        let mut entries: Vec<_> = map.into_iter().collect();
        entries.sort_by(|(_, a), (_, b)| a.min_width().total_cmp(&b.min_width()));
        Self { entries }
    }
}

impl From<Breakpoints> for BTreeMap<String, Breakpoint> {
    fn from(breakpoints: Breakpoints) -> Self {
        breakpoints.entries.into_iter().collect()
    }
}
