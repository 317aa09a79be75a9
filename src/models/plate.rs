use serde::{Deserialize, Serialize};

/// Plates of a single denomination loaded on ONE side of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateCount {
    pub weight: f64,
    pub count: u32,
}

impl PlateCount {
    pub fn new(weight: f64, count: u32) -> Self {
        Self { weight, count }
    }
}

/// Everything loaded on one side of the bar.
///
/// Holds at most one entry per denomination and never a zero-count entry.
/// A loadout is never edited in place; adjustments build a fresh value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loadout {
    entries: Vec<PlateCount>,
}

impl Loadout {
    /// Build a loadout from raw entries, dropping zero counts.
    pub fn new(entries: Vec<PlateCount>) -> Self {
        Self {
            entries: entries.into_iter().filter(|p| p.count > 0).collect(),
        }
    }

    pub fn entries(&self) -> &[PlateCount] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plates of the given denomination on one side (0 when absent).
    pub fn count_of(&self, weight: f64) -> u32 {
        self.entries
            .iter()
            .find(|p| p.weight == weight)
            .map(|p| p.count)
            .unwrap_or(0)
    }

    /// Combined plate weight on ONE side of the bar.
    pub fn side_weight(&self) -> f64 {
        self.entries
            .iter()
            .map(|p| p.weight * f64::from(p.count))
            .sum()
    }

    /// Expand counts into one weight per physical plate, in entry order.
    pub fn flatten(&self) -> Vec<f64> {
        self.entries
            .iter()
            .flat_map(|p| std::iter::repeat(p.weight).take(p.count as usize))
            .collect()
    }
}
