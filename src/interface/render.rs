use crate::models::{CalculationResult, Loadout, PlateCount};
use crate::solver::constants::{
    color_name, plate_color, plate_size, plate_thickness, BARBELL_WEIGHT, PLATE_WEIGHTS,
};

/// Minimum difference worth calling out to the user.
const DIFFERENCE_DISPLAY_THRESHOLD: f64 = 0.001;

/// Format a denomination without a trailing ".0" (45, 35, ... but 2.5).
pub fn fmt_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{weight}")
    }
}

/// Display a full calculation: summary, the loaded bar, and a plate legend.
pub fn display_calculation(result: &CalculationResult) {
    println!();
    println!("=== Barbell ===");
    println!();
    println!("Target weight: {:>7.1} lb", result.target_weight);
    println!("Actual weight: {:>7.1} lb", result.total_weight);

    if result.difference.abs() > DIFFERENCE_DISPLAY_THRESHOLD {
        println!(
            "Difference:    {:>7.1} lb (finest increment is 2.5 lb per side)",
            result.difference
        );
    }

    println!();
    display_bar(&result.loadout);
    display_legend(&result.loadout);
    println!();
}

/// Draw the loaded bar with mirrored sides.
pub fn display_bar(loadout: &Loadout) {
    if loadout.is_empty() {
        println!(
            "  =====[ {} lb bar ]=====",
            fmt_weight(BARBELL_WEIGHT)
        );
        println!("  (no plates)");
        return;
    }

    // Entries come out of the solve heaviest-first; reversing the left side
    // puts the big plates against the collar on both sides.
    let right = loadout.flatten();
    let left: Vec<f64> = right.iter().rev().copied().collect();

    let left_str: String = left.iter().map(|&w| format!("[{}]", fmt_weight(w))).collect();
    let right_str: String = right
        .iter()
        .map(|&w| format!("[{}]", fmt_weight(w)))
        .collect();

    println!(
        "  ={}|==[ {} lb bar ]==|{}=",
        left_str,
        fmt_weight(BARBELL_WEIGHT),
        right_str
    );

    let breakdown = loadout
        .entries()
        .iter()
        .map(|p| format!("{}x{}", p.count, fmt_weight(p.weight)))
        .collect::<Vec<_>>()
        .join(", ");

    println!();
    println!("Per side: {breakdown}");
}

/// Per-denomination legend for the plates in use, scaled by plate size.
fn display_legend(loadout: &Loadout) {
    if loadout.is_empty() {
        return;
    }

    println!();
    for plate in loadout.entries() {
        println!("{}", legend_line(plate));
    }
}

/// One legend row: weight, color label, diameter bar, per-side count.
fn legend_line(plate: &PlateCount) -> String {
    let diameter = "#".repeat((plate_size(plate.weight) / 10) as usize);
    format!(
        "  {:>4} lb  {:<6}  {:<10}  x{}",
        fmt_weight(plate.weight),
        color_name(plate.weight),
        diameter,
        plate.count
    )
}

/// Table of the fixed plate denominations.
pub fn display_plate_classes() {
    println!();
    println!("=== Available plates ===");
    println!();
    println!(
        "  {:>6}  {:<9}  {:>4}  {:>9}",
        "weight", "color", "size", "thickness"
    );

    for weight in PLATE_WEIGHTS {
        println!(
            "  {:>6}  {:<9}  {:>4}  {:>9}",
            fmt_weight(weight),
            plate_color(weight),
            plate_size(weight),
            plate_thickness(weight)
        );
    }

    println!();
    println!("Bar weight: {} lb", fmt_weight(BARBELL_WEIGHT));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_weight() {
        assert_eq!(fmt_weight(45.0), "45");
        assert_eq!(fmt_weight(2.5), "2.5");
        assert_eq!(fmt_weight(10.0), "10");
    }

    #[test]
    fn test_legend_uses_readable_color_labels() {
        // Same labels the adjustment menu shows, not the render tokens.
        let line = legend_line(&PlateCount::new(45.0, 2));
        assert!(line.contains("Red"));
        assert!(line.contains("x2"));

        let line = legend_line(&PlateCount::new(2.5, 1));
        assert!(line.contains("Gray"));
        assert!(!line.contains("dark-gray"));
    }
}
