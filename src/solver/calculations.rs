use crate::models::{CalculationResult, Loadout, PlateCount};
use crate::solver::constants::{BARBELL_WEIGHT, PLATE_WEIGHTS};

/// Compute the plate configuration for a target total weight.
///
/// Greedy largest-first over the fixed denominations: take as many of the
/// heaviest plate as fit the remaining per-side weight, then move to the
/// next lighter one. Any residual finer than 2.5 lb is unreachable and shows
/// up only in `difference`.
///
/// Total over every `f64` input: targets below the bar weight (including
/// negatives) produce an empty loadout and a bare bar. No ceiling applies
/// here; capping lives with the caller.
pub fn calculate_plates(target_weight: f64) -> CalculationResult {
    if target_weight < BARBELL_WEIGHT {
        return CalculationResult {
            loadout: Loadout::default(),
            total_weight: BARBELL_WEIGHT,
            target_weight,
            difference: BARBELL_WEIGHT - target_weight,
        };
    }

    let weight_per_side = (target_weight - BARBELL_WEIGHT) / 2.0;

    let mut remaining = weight_per_side;
    let mut entries = Vec::new();

    for plate_weight in PLATE_WEIGHTS {
        let count = (remaining / plate_weight).floor() as u32;
        if count > 0 {
            entries.push(PlateCount::new(plate_weight, count));
            remaining -= f64::from(count) * plate_weight;
        }
    }

    let loadout = Loadout::new(entries);
    let total_weight = weight_from_plates(&loadout);

    CalculationResult {
        difference: target_weight - total_weight,
        loadout,
        total_weight,
        target_weight,
    }
}

/// Total bar weight for an arbitrary per-side plate arrangement.
///
/// Defined for any loadout, canonical or not; the adjustment surface uses it
/// to probe speculative arrangements before committing them.
pub fn weight_from_plates(loadout: &Loadout) -> f64 {
    BARBELL_WEIGHT + 2.0 * loadout.side_weight()
}
