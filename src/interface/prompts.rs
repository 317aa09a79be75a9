use dialoguer::{Input, Select};

use crate::error::Result;
use crate::interface::controls::can_add;
use crate::interface::render::fmt_weight;
use crate::models::Loadout;
use crate::solver::constants::{color_name, PLATE_WEIGHTS};

/// Parse free-text into a usable target weight.
///
/// Anything that is not a finite number greater than zero is unusable; the
/// caller falls back to a bare-bar result instead of erroring.
pub fn parse_target(input: &str) -> Option<f64> {
    let weight: f64 = input.trim().parse().ok()?;
    if weight.is_finite() && weight > 0.0 {
        Some(weight)
    } else {
        None
    }
}

/// Prompt for a target weight. `None` means the input was unusable.
pub fn prompt_target_weight() -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt("Target weight (lb)")
        .allow_empty(true)
        .interact_text()?;

    Ok(parse_target(&input))
}

/// One choice from the manual-adjustment menu.
pub enum AdjustAction {
    Add(f64),
    Remove(f64),
    Back,
    Done,
}

/// Show the adjustment menu for the current loadout and read one action.
pub fn prompt_adjustment(loadout: &Loadout) -> Result<AdjustAction> {
    let mut items: Vec<String> = PLATE_WEIGHTS
        .iter()
        .map(|&weight| {
            let full = if can_add(loadout, weight) { "" } else { "  (full)" };
            format!(
                "{:>4} lb  {:<6}  x{} per side{}",
                fmt_weight(weight),
                color_name(weight),
                loadout.count_of(weight),
                full
            )
        })
        .collect();
    items.push("Done".to_string());

    let selection = Select::new()
        .with_prompt("Pick a denomination to adjust")
        .items(&items)
        .default(0)
        .interact()?;

    if selection >= PLATE_WEIGHTS.len() {
        return Ok(AdjustAction::Done);
    }

    let weight = PLATE_WEIGHTS[selection];
    let actions = vec!["Add one", "Remove one", "Back"];

    let action = Select::new()
        .with_prompt(format!("{} lb plates", fmt_weight(weight)))
        .items(&actions)
        .default(0)
        .interact()?;

    Ok(match action {
        0 => AdjustAction::Add(weight),
        1 => AdjustAction::Remove(weight),
        _ => AdjustAction::Back,
    })
}
