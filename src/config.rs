//! Configuration constants for the ATtiny13A dice firmware

/// CPU frequency in Hz (9.6MHz internal RC, CKDIV8 fuse)
pub const CPU_FREQ_HZ: u32 = 1_200_000;

/// Timer0 clock divider
pub const TIMER0_PRESCALE: u32 = 64;

/// Timer0 count rate in Hz
pub const TIMER0_HZ: u32 = CPU_FREQ_HZ / TIMER0_PRESCALE;

/// Number of faces shown while a roll spins down
pub const ROLL_STEPS: u8 = 16;

/// Delay growth per roll step in milliseconds
pub const ROLL_STEP_MS: u16 = 16;

/// Button debounce time in milliseconds
pub const BUTTON_DEBOUNCE_MS: u16 = 10;

/// Debug console baud rate (TX on PB5)
pub const CONSOLE_BAUD: u32 = 1200;

/// PORTB bit of the button input
pub const BUTTON_PIN: u8 = 4;

/// PORTB bit of the debug console
pub const CONSOLE_PIN: u8 = 5;

/// Whether the core sleeps between rolls or busy-polls the button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerMode {
    /// Idle sleep, woken by the button pin-change or a timer overflow
    Sleep,
    /// Tight polling loop, CPU always running
    Spin,
}

#[cfg(feature = "power-save")]
pub const POWER_MODE: PowerMode = PowerMode::Sleep;

#[cfg(not(feature = "power-save"))]
pub const POWER_MODE: PowerMode = PowerMode::Spin;
