//! Application layer for the dice firmware
//! This module contains the button state machine that drives the rolls

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;
use ufmt::uWrite;

use crate::config::{PowerMode, BUTTON_DEBOUNCE_MS};
use crate::dice::{PipCounter, Pips};
use crate::drivers::{Button, DiceDisplay, LedPort};
use crate::logger::EventLog;
use crate::roll::roll;

/// How the main loop waits while nothing is happening.
pub trait Standby {
    const MODE: PowerMode;

    /// Block until some interrupt has fired, or return straight away.
    fn standby(&mut self);
}

/// Busy polling, for boards without a usable sleep mode.
pub struct Spin;

impl Standby for Spin {
    const MODE: PowerMode = PowerMode::Spin;

    #[inline(always)]
    fn standby(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    /// Asleep until an interrupt, then check the button
    Idle,
    /// Polling the button
    WaitingForPress,
    Rolling,
    WaitingForRelease,
    Debouncing,
}

impl TriggerState {
    /// State waiting for the next press
    pub const fn armed(mode: PowerMode) -> Self {
        match mode {
            PowerMode::Sleep => TriggerState::Idle,
            PowerMode::Spin => TriggerState::WaitingForPress,
        }
    }
}

/// Main application state and logic
pub struct Application<'a, B, L, D, S, W> {
    state: TriggerState,
    pips: &'a PipCounter,
    button: Button<B>,
    display: DiceDisplay<L>,
    delay: D,
    standby: S,
    log: EventLog<W>,
    last_roll: Option<Pips>,
}

impl<'a, B, L, D, S, W> Application<'a, B, L, D, S, W>
where
    B: InputPin,
    L: LedPort,
    D: DelayMs<u16>,
    S: Standby,
    W: uWrite,
{
    pub fn new(
        pips: &'a PipCounter,
        button: Button<B>,
        display: DiceDisplay<L>,
        delay: D,
        standby: S,
        log: EventLog<W>,
    ) -> Self {
        Self {
            state: TriggerState::armed(S::MODE),
            pips,
            button,
            display,
            delay,
            standby,
            log,
            last_roll: None,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Face shown by the most recent roll
    pub fn last_roll(&self) -> Option<Pips> {
        self.last_roll
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self) -> Result<TriggerState, B::Error> {
        self.state = match self.state {
            TriggerState::Idle => {
                self.standby.standby();
                // Most wakes are timer overflows, not the button
                if self.button.is_pressed()? {
                    TriggerState::Rolling
                } else {
                    TriggerState::Idle
                }
            }
            TriggerState::WaitingForPress => {
                if self.button.is_pressed()? {
                    TriggerState::Rolling
                } else {
                    TriggerState::WaitingForPress
                }
            }
            TriggerState::Rolling => {
                self.log.roll_started();
                let face = roll(&mut self.delay, &mut self.display, self.pips);
                self.log.settled(face);
                self.last_roll = Some(face);
                TriggerState::WaitingForRelease
            }
            TriggerState::WaitingForRelease => {
                if self.button.is_released()? {
                    self.log.released();
                    TriggerState::Debouncing
                } else {
                    TriggerState::WaitingForRelease
                }
            }
            TriggerState::Debouncing => {
                self.delay.delay_ms(BUTTON_DEBOUNCE_MS);
                TriggerState::armed(S::MODE)
            }
        };
        Ok(self.state)
    }

    /// Run forever. Only returns if reading the button fails.
    pub fn run(&mut self) -> Result<Infallible, B::Error> {
        self.log.booted(S::MODE);
        loop {
            self.step()?;
        }
    }
}
