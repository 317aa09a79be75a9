use crate::models::{Loadout, PlateCount};
use crate::solver::calculations::weight_from_plates;
use crate::solver::constants::{MAX_PLATES_PER_TYPE, MAX_WEIGHT, PLATE_WEIGHTS};

/// Apply a manual +/- edit to one denomination.
///
/// Clamps the new count into 0..=MAX_PLATES_PER_TYPE, then rejects the edit
/// when nothing would change or when the resulting bar would exceed
/// MAX_WEIGHT. The ceiling is a policy of this surface; the solver itself
/// stays unbounded.
pub fn adjust_plate(loadout: &Loadout, weight: f64, delta: i32) -> Option<Loadout> {
    let current = loadout.count_of(weight);
    let new_count =
        (i64::from(current) + i64::from(delta)).clamp(0, i64::from(MAX_PLATES_PER_TYPE)) as u32;

    if new_count == current {
        return None;
    }

    let updated = rebuild(loadout, weight, new_count);
    if weight_from_plates(&updated) > MAX_WEIGHT {
        return None;
    }

    Some(updated)
}

/// Whether one more plate of this denomination fits under both the
/// per-denomination cap and the total-weight ceiling.
pub fn can_add(loadout: &Loadout, weight: f64) -> bool {
    let current = loadout.count_of(weight);
    if current >= MAX_PLATES_PER_TYPE {
        return false;
    }

    let speculative = rebuild(loadout, weight, current + 1);
    weight_from_plates(&speculative) <= MAX_WEIGHT
}

/// Fresh loadout with one denomination's count replaced, rebuilt in
/// canonical heaviest-first order with zero counts pruned.
fn rebuild(loadout: &Loadout, weight: f64, count: u32) -> Loadout {
    Loadout::new(
        PLATE_WEIGHTS
            .iter()
            .map(|&w| {
                let c = if w == weight { count } else { loadout.count_of(w) };
                PlateCount::new(w, c)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_one_plate() {
        let loadout = Loadout::default();
        let updated = adjust_plate(&loadout, 45.0, 1).unwrap();
        assert_eq!(updated.count_of(45.0), 1);
        assert!((weight_from_plates(&updated) - 135.0).abs() < 0.001);
    }

    #[test]
    fn test_remove_from_empty_is_noop() {
        let loadout = Loadout::default();
        assert!(adjust_plate(&loadout, 45.0, -1).is_none());
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let loadout = Loadout::new(vec![PlateCount::new(45.0, 2)]);
        assert!(adjust_plate(&loadout, 45.0, 0).is_none());
    }

    #[test]
    fn test_clamped_at_per_type_cap() {
        let loadout = Loadout::new(vec![PlateCount::new(10.0, MAX_PLATES_PER_TYPE)]);
        assert!(adjust_plate(&loadout, 10.0, 1).is_none());
        // A large negative delta clamps to zero rather than underflowing.
        let cleared = adjust_plate(&loadout, 10.0, -100).unwrap();
        assert_eq!(cleared.count_of(10.0), 0);
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_rejects_edit_over_ceiling() {
        // 45 + 2 x (10x45 + 7x35) = 1435; one more 35 would hit 1505.
        let loadout = Loadout::new(vec![
            PlateCount::new(45.0, 10),
            PlateCount::new(35.0, 7),
        ]);
        assert!((weight_from_plates(&loadout) - 1435.0).abs() < 0.001);
        assert!(adjust_plate(&loadout, 35.0, 1).is_none());
        // A lighter plate still fits under 1500.
        let updated = adjust_plate(&loadout, 25.0, 1).unwrap();
        assert!((weight_from_plates(&updated) - 1485.0).abs() < 0.001);
    }

    #[test]
    fn test_can_add_probes_without_committing() {
        let loadout = Loadout::new(vec![
            PlateCount::new(45.0, 10),
            PlateCount::new(35.0, 7),
        ]);
        assert!(!can_add(&loadout, 35.0));
        assert!(!can_add(&loadout, 45.0)); // at the per-type cap
        assert!(can_add(&loadout, 25.0));
        assert!(can_add(&loadout, 2.5));
        // Probing never changed the input.
        assert_eq!(loadout.count_of(35.0), 7);
    }

    #[test]
    fn test_rebuild_keeps_canonical_order() {
        let loadout = Loadout::new(vec![PlateCount::new(2.5, 1)]);
        let updated = adjust_plate(&loadout, 45.0, 1).unwrap();
        let weights: Vec<f64> = updated.entries().iter().map(|p| p.weight).collect();
        assert_eq!(weights, vec![45.0, 2.5]);
    }
}
