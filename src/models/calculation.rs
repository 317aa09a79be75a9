use serde::{Deserialize, Serialize};

use crate::models::Loadout;
use crate::solver::constants::BARBELL_WEIGHT;

/// Outcome of solving for a target weight.
///
/// Derived on every solve or manual edit, never stored. Both sides of the
/// bar carry an identical loadout, so `total_weight` is the bar plus twice
/// the per-side plate weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Plates on one side of the bar.
    pub loadout: Loadout,

    /// Weight actually achievable with the chosen plates.
    pub total_weight: f64,

    /// Weight the user asked for.
    pub target_weight: f64,

    /// `target_weight - total_weight`; nonzero when the target is not a
    /// multiple of the finest 2.5 lb increment.
    pub difference: f64,
}

impl CalculationResult {
    /// Fallback result for input that never parsed to a usable weight:
    /// a bare bar, with target and difference both zeroed.
    pub fn bar_only() -> Self {
        Self {
            loadout: Loadout::default(),
            total_weight: BARBELL_WEIGHT,
            target_weight: 0.0,
            difference: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::calculate_plates;

    #[test]
    fn test_bar_only_is_a_bare_bar() {
        let fallback = CalculationResult::bar_only();
        assert!(fallback.loadout.is_empty());
        assert!((fallback.total_weight - 45.0).abs() < 0.001);
        assert!((fallback.target_weight - 0.0).abs() < 0.001);
        assert!((fallback.difference - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_bar_only_matches_sub_bar_solve_except_zeroed_fields() {
        // Same bar and loadout as solving a sub-bar target, but the
        // fallback zeroes the target and difference instead of carrying
        // the 45 lb shortfall.
        let fallback = CalculationResult::bar_only();
        let solved = calculate_plates(0.0);

        assert_eq!(fallback.loadout, solved.loadout);
        assert!((fallback.total_weight - solved.total_weight).abs() < 0.001);

        assert!((solved.difference - 45.0).abs() < 0.001);
        assert!((fallback.difference - 0.0).abs() < 0.001);
    }
}
