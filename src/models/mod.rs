pub mod calculation;
pub mod plate;

pub use calculation::CalculationResult;
pub use plate::{Loadout, PlateCount};
