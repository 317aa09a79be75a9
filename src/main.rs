use clap::Parser;

use barbell_visualizer_rs::cli::{Cli, Command};
use barbell_visualizer_rs::error::Result;
use barbell_visualizer_rs::interface::{
    adjust_plate, display_calculation, display_plate_classes, prompt_adjustment,
    prompt_target_weight, AdjustAction,
};
use barbell_visualizer_rs::models::{CalculationResult, Loadout};
use barbell_visualizer_rs::solver::{
    calculate_plates, weight_from_plates, MAX_PLATES_PER_TYPE, MAX_WEIGHT,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Solve { target, json } => cmd_solve(target, json),
        Command::Adjust { target } => cmd_adjust(target),
        Command::Plates => {
            display_plate_classes();
            Ok(())
        }
    }
}

/// Compute the plate configuration for a target weight.
fn cmd_solve(target: Option<f64>, json: bool) -> Result<()> {
    let calculation = resolve_calculation(target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
    } else {
        display_calculation(&calculation);
    }

    Ok(())
}

/// Solve for a target, then apply manual per-denomination edits.
fn cmd_adjust(target: Option<f64>) -> Result<()> {
    let mut calculation = resolve_calculation(target)?;
    display_calculation(&calculation);

    loop {
        match prompt_adjustment(&calculation.loadout)? {
            AdjustAction::Add(weight) => {
                match adjust_plate(&calculation.loadout, weight, 1) {
                    Some(loadout) => {
                        calculation = recompute(loadout, calculation.target_weight);
                        display_calculation(&calculation);
                    }
                    None => println!(
                        "Cannot add: at most {} per denomination and {} lb total.",
                        MAX_PLATES_PER_TYPE, MAX_WEIGHT
                    ),
                }
            }
            AdjustAction::Remove(weight) => {
                match adjust_plate(&calculation.loadout, weight, -1) {
                    Some(loadout) => {
                        calculation = recompute(loadout, calculation.target_weight);
                        display_calculation(&calculation);
                    }
                    None => println!("Nothing to remove."),
                }
            }
            AdjustAction::Back => {}
            AdjustAction::Done => break,
        }
    }

    Ok(())
}

/// Resolve a target from the CLI argument or a prompt, falling back to the
/// bare bar when nothing usable comes in.
fn resolve_calculation(target: Option<f64>) -> Result<CalculationResult> {
    let target = match target {
        Some(t) if t.is_finite() && t > 0.0 => Some(t),
        Some(_) => None,
        None => prompt_target_weight()?,
    };

    Ok(match target {
        Some(weight) => calculate_plates(weight),
        None => {
            println!("No usable target weight; showing the empty bar.");
            CalculationResult::bar_only()
        }
    })
}

/// Rebuild the result after a manual edit. The target stays what the user
/// asked for, so the difference keeps tracking the edits.
fn recompute(loadout: Loadout, target_weight: f64) -> CalculationResult {
    let total_weight = weight_from_plates(&loadout);
    CalculationResult {
        difference: target_weight - total_weight,
        loadout,
        total_weight,
        target_weight,
    }
}
