/// Weight of the bar itself, present even with zero plates.
pub const BARBELL_WEIGHT: f64 = 45.0;

/// Plate denominations, heaviest first. The greedy solve walks this list in
/// order; because 2.5 divides every entry, greedy selection already
/// minimizes the leftover weight, so neither the values nor the ordering
/// may be changed without re-checking that property.
pub const PLATE_WEIGHTS: [f64; 6] = [45.0, 35.0, 25.0, 10.0, 5.0, 2.5];

/// Hard ceiling on total bar weight. Enforced by the manual-adjustment
/// surface, not by the solver.
pub const MAX_WEIGHT: f64 = 1500.0;

/// Most plates of one denomination allowed per side when adjusting manually.
pub const MAX_PLATES_PER_TYPE: u32 = 10;

/// Color token for a plate denomination.
pub fn plate_color(weight: f64) -> &'static str {
    if weight == 45.0 {
        "red"
    } else if weight == 35.0 {
        "blue"
    } else if weight == 25.0 {
        "yellow"
    } else if weight == 10.0 {
        "green"
    } else if weight == 5.0 || weight == 2.5 {
        "dark-gray"
    } else {
        "gray"
    }
}

/// Human-readable color label for the adjustment legend.
pub fn color_name(weight: f64) -> &'static str {
    if weight == 45.0 {
        "Red"
    } else if weight == 35.0 {
        "Blue"
    } else if weight == 25.0 {
        "Yellow"
    } else if weight == 10.0 {
        "Green"
    } else if weight == 5.0 || weight == 2.5 {
        "Gray"
    } else {
        ""
    }
}

/// Relative diameter for rendering, decreasing with denomination.
pub fn plate_size(weight: f64) -> u32 {
    if weight == 45.0 {
        100
    } else if weight == 35.0 {
        85
    } else if weight == 25.0 {
        75
    } else if weight == 10.0 {
        60
    } else if weight == 5.0 {
        50
    } else if weight == 2.5 {
        40
    } else {
        50
    }
}

/// Relative thickness for rendering.
pub fn plate_thickness(weight: f64) -> u32 {
    if weight == 45.0 {
        20
    } else if weight == 35.0 {
        18
    } else if weight == 25.0 {
        16
    } else if weight == 10.0 {
        12
    } else if weight == 5.0 || weight == 2.5 {
        6
    } else {
        8
    }
}
