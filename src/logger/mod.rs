//! Event logging for the dice firmware
//!
//! Messages are formatted with `ufmt`; `core::fmt` does not fit in 1KiB of
//! flash. The default sink is [`NullConsole`], which compiles to nothing.

use core::convert::Infallible;

use ufmt::{uWrite, uwriteln};

use crate::config::PowerMode;
use crate::dice::Pips;

/// Sink that drops everything.
pub struct NullConsole;

impl uWrite for NullConsole {
    type Error = Infallible;

    #[inline(always)]
    fn write_str(&mut self, _s: &str) -> Result<(), Infallible> {
        Ok(())
    }
}

pub struct EventLog<W> {
    out: W,
}

impl<W: uWrite> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn booted(&mut self, mode: PowerMode) {
        let mode = match mode {
            PowerMode::Sleep => "sleep",
            PowerMode::Spin => "spin",
        };
        uwriteln!(&mut self.out, "tiny dice ready ({})", mode).ok();
    }

    pub fn roll_started(&mut self) {
        uwriteln!(&mut self.out, "rolling").ok();
    }

    pub fn settled(&mut self, pips: Pips) {
        uwriteln!(&mut self.out, "face {}", pips.face()).ok();
    }

    pub fn released(&mut self) {
        uwriteln!(&mut self.out, "released").ok();
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    #[derive(Default)]
    struct Capture(String);

    impl uWrite for Capture {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn events_are_one_line_each() {
        let mut log = EventLog::new(Capture::default());
        log.booted(PowerMode::Sleep);
        log.roll_started();
        log.settled(Pips::new(3).unwrap());
        log.released();

        assert_eq!(
            log.into_inner().0,
            "tiny dice ready (sleep)\nrolling\nface 4\nreleased\n"
        );
    }

    #[test]
    fn spin_mode_is_named() {
        let mut log = EventLog::new(Capture::default());
        log.booted(PowerMode::Spin);
        assert_eq!(log.into_inner().0, "tiny dice ready (spin)\n");
    }

    #[test]
    fn null_console_is_zero_sized_and_never_fails() {
        assert_eq!(core::mem::size_of::<NullConsole>(), 0);

        let mut log = EventLog::new(NullConsole);
        log.booted(PowerMode::Spin);
        log.settled(Pips::new(5).unwrap());
        let mut sink = log.into_inner();
        assert_eq!(sink.write_str("face 6\n"), Ok(()));
    }
}
