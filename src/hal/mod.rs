pub mod gpio;
pub mod power;
#[cfg(feature = "debug")]
pub mod soft_uart;
pub mod timer;

// Re-export commonly used types
pub use gpio::{enable_button_wake, Input, LedLines, Output, Pin, PortB};
pub use power::Power;
#[cfg(feature = "debug")]
pub use soft_uart::SoftTx;
pub use timer::{Stopwatch, Timer0};
