pub mod constants;
pub mod synth;

pub use constants::*;
pub use synth::{generate_food_data, generate_seeded};
