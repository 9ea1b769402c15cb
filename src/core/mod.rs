pub mod input;
pub mod render;

pub use input::{is_valid_input, parse_input, INVALID_INPUT_MESSAGE};
pub use render::{render_breakdown, render_tier_table};
