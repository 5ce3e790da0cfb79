//! Electronic dice firmware for the ATtiny13A
//!
//! Timer0 overflows cycle a pip counter through the six faces. A button press
//! shows the live counter sixteen times with growing pauses and leaves the
//! last face lit. Everything except `hal` builds on the host for testing.

#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod board;
pub mod config;
pub mod dice;
pub mod drivers;
#[cfg(target_arch = "avr")]
pub mod hal;
pub mod logger;
pub mod roll;

pub use application::{Application, Spin, Standby, TriggerState};
pub use dice::{PipCounter, Pips, PIPS};
