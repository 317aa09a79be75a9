pub mod controls;
pub mod prompts;
pub mod render;

pub use controls::{adjust_plate, can_add};
pub use prompts::{parse_target, prompt_adjustment, prompt_target_weight, AdjustAction};
pub use render::{display_bar, display_calculation, display_plate_classes, fmt_weight};
