pub mod button_handler;
pub mod led_matrix;

pub use button_handler::Button;
pub use led_matrix::{DiceDisplay, LedPort};
