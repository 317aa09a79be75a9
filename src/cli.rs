use clap::{Parser, Subcommand};

/// BarbellVisualizer — a plate loading CLI that turns a target weight into a
/// per-side plate configuration and draws the loaded bar.
#[derive(Parser, Debug)]
#[command(name = "barbell_visualizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the plate configuration for a target weight and render it.
    Solve {
        /// Target total weight in lb. Prompted for if omitted.
        target: Option<f64>,

        /// Emit the calculation as JSON instead of rendering it.
        #[arg(long)]
        json: bool,
    },

    /// Solve for a target, then adjust plates manually one at a time.
    Adjust {
        /// Starting target weight in lb. Prompted for if omitted.
        target: Option<f64>,
    },

    /// List the available plate denominations.
    Plates,
}

impl Default for Command {
    fn default() -> Self {
        Command::Solve {
            target: None,
            json: false,
        }
    }
}
