pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod solver;

pub use error::{BarbellError, Result};
pub use models::{CalculationResult, Loadout, PlateCount};
