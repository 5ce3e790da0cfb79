//! Roll sequencer
//!
//! A roll shows the live counter sixteen times with a pause that grows by
//! [`ROLL_STEP_MS`] each step, so the flicker slows down like a die coming
//! to rest. The last face written stays on the port until the next roll.

use embedded_hal::blocking::delay::DelayMs;

use crate::config::{ROLL_STEPS, ROLL_STEP_MS};
use crate::dice::{PipCounter, Pips};
use crate::drivers::{DiceDisplay, LedPort};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollStep {
    pub index: u8,
    pub delay_ms: u16,
}

/// The fixed pause schedule of one roll: `index * ROLL_STEP_MS` for each step.
#[derive(Clone, Debug)]
pub struct RollSchedule {
    next: u8,
}

impl RollSchedule {
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    pub const fn delay_for(index: u8) -> u16 {
        index as u16 * ROLL_STEP_MS
    }
}

impl Default for RollSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for RollSchedule {
    type Item = RollStep;

    fn next(&mut self) -> Option<RollStep> {
        if self.next >= ROLL_STEPS {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(RollStep {
            index,
            delay_ms: Self::delay_for(index),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (ROLL_STEPS - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RollSchedule {}

/// Run one roll and return the face left on the display.
pub fn roll<D, P>(delay: &mut D, display: &mut DiceDisplay<P>, pips: &PipCounter) -> Pips
where
    D: DelayMs<u16>,
    P: LedPort,
{
    let mut shown = pips.current();
    for step in RollSchedule::new() {
        delay.delay_ms(step.delay_ms);
        shown = pips.current();
        display.show(shown);
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct Port(Vec<u8>);

    impl LedPort for &mut Port {
        fn write(&mut self, pattern: u8) {
            self.0.push(pattern);
        }
    }

    /// Records every pause and lets the counter tick in between, the way
    /// the overflow interrupt would during a real roll.
    struct TickingDelay<'a> {
        pips: &'a PipCounter,
        ticks_per_call: usize,
        calls: Vec<u16>,
    }

    impl DelayMs<u16> for TickingDelay<'_> {
        fn delay_ms(&mut self, ms: u16) {
            self.calls.push(ms);
            for _ in 0..self.ticks_per_call {
                self.pips.advance();
            }
        }
    }

    #[test]
    fn schedule_has_sixteen_growing_steps() {
        let steps: Vec<RollStep> = RollSchedule::new().collect();
        assert_eq!(steps.len(), 16);
        assert_eq!(steps[0].delay_ms, 0);
        assert_eq!(steps[15].delay_ms, 240);
        for pair in steps.windows(2) {
            assert!(pair[1].delay_ms > pair[0].delay_ms);
            assert_eq!(pair[1].delay_ms - pair[0].delay_ms, 16);
        }
        assert_eq!(RollSchedule::new().len(), 16);
    }

    #[test]
    fn schedule_total_wait() {
        let total: u32 = RollSchedule::new().map(|s| s.delay_ms as u32).sum();
        assert_eq!(total, 1920);
    }

    #[test]
    fn roll_writes_sixteen_faces_after_each_pause() {
        let pips = PipCounter::new();
        let mut port = Port::default();
        let mut delay = TickingDelay {
            pips: &pips,
            ticks_per_call: 1,
            calls: Vec::new(),
        };

        roll(&mut delay, &mut DiceDisplay::new(&mut port), &pips);

        assert_eq!(port.0.len(), 16);
        let expected: Vec<u16> = RollSchedule::new().map(|s| s.delay_ms).collect();
        assert_eq!(delay.calls, expected);
    }

    #[test]
    fn final_face_is_the_counter_at_the_last_step() {
        let pips = PipCounter::new();
        let mut port = Port::default();
        // 16 pauses of 3 ticks each: 48 ticks, 48 % 6 == 0
        let mut delay = TickingDelay {
            pips: &pips,
            ticks_per_call: 3,
            calls: Vec::new(),
        };

        let settled = roll(&mut delay, &mut DiceDisplay::new(&mut port), &pips);

        assert_eq!(settled, pips.current());
        assert_eq!(settled.index(), 0);
        assert_eq!(port.0.last().copied(), Some(settled.pattern()));
    }

    #[test]
    fn counter_at_three_shows_face_four() {
        let pips = PipCounter::new();
        for _ in 0..3 {
            pips.advance();
        }
        let mut port = Port::default();
        let mut delay = TickingDelay {
            pips: &pips,
            ticks_per_call: 0,
            calls: Vec::new(),
        };

        let settled = roll(&mut delay, &mut DiceDisplay::new(&mut port), &pips);

        assert_eq!(settled.face(), 4);
        assert_eq!(port.0.last().copied(), Some(0b0011_0110));
    }

    #[test]
    fn faces_follow_the_moving_counter() {
        let pips = PipCounter::new();
        let mut port = Port::default();
        let mut delay = TickingDelay {
            pips: &pips,
            ticks_per_call: 1,
            calls: Vec::new(),
        };

        roll(&mut delay, &mut DiceDisplay::new(&mut port), &pips);

        let expected: Vec<u8> = (1..=16u8)
            .map(|n| Pips::new(n % 6).unwrap().pattern())
            .collect();
        assert_eq!(port.0, expected);
    }
}
