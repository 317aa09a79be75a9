pub mod calculations;
pub mod constants;

pub use calculations::{calculate_plates, weight_from_plates};
pub use constants::*;
