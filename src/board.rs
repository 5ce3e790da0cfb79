//! Boot-time register values for the dice board
//!
//! Kept apart from `hal` so the exact bits can be checked off-target.

use crate::config::{PowerMode, BUTTON_PIN, CONSOLE_BAUD, TIMER0_HZ};
use crate::dice::FACES;

/// Timer0 clock select (CS02:CS00)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

/// Sleep mode select bits, already shifted into MCUCR position (SM1:SM0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum SleepMode {
    Idle = 0b00 << 3,
    AdcNoiseReduction = 0b01 << 3,
    PowerDown = 0b10 << 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootRegisters {
    pub ddrb: u8,
    pub portb: u8,
    pub tccr0a: u8,
    pub tccr0b: u8,
    pub timsk0: u8,
    /// Pin change wake, only armed when sleeping
    pub gimsk: u8,
    pub pcmsk: u8,
    pub acsr: u8,
    pub prr: u8,
    pub sleep_mode: Option<SleepMode>,
}

const TOIE0: u8 = 1 << 1;
const PCIE: u8 = 1 << 5;
const ACD: u8 = 1 << 7;
const PRADC: u8 = 1 << 0;

/// PB4/PB5 pull-ups, LEDs dark
const PULL_UPS: u8 = 0b0011_0000;

impl BootRegisters {
    pub const fn for_mode(mode: PowerMode) -> Self {
        let sleeping = matches!(mode, PowerMode::Sleep);
        Self {
            ddrb: 0b0000_1111,
            // The centre LED marks a sleeping dice as ready
            portb: if sleeping { FACES[0] } else { PULL_UPS },
            tccr0a: 0,
            tccr0b: Prescaler::Div64 as u8,
            timsk0: TOIE0,
            gimsk: if sleeping { PCIE } else { 0 },
            pcmsk: if sleeping { 1 << BUTTON_PIN } else { 0 },
            acsr: if sleeping { ACD } else { 0 },
            prr: if sleeping { PRADC } else { 0 },
            sleep_mode: if sleeping {
                Some(SleepMode::Idle)
            } else {
                None
            },
        }
    }
}

/// Timer0 ticks to wait for at least `ms` milliseconds.
///
/// Rounds up, plus one tick because a wait starts partway through a tick.
pub const fn ms_to_ticks(ms: u16) -> u32 {
    if ms == 0 {
        return 0;
    }
    (ms as u32 * TIMER0_HZ + 999) / 1000 + 1
}

/// Timer0 tick at which console bit `n` of a frame ends.
pub const fn bit_end_ticks(n: u8) -> u32 {
    n as u32 * TIMER0_HZ / CONSOLE_BAUD
}
