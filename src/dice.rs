//! Pip counter and face patterns
//!
//! The counter is advanced from the Timer0 overflow interrupt and read by the
//! main loop whenever a face is shown. Nothing orders the two: the moment the
//! user presses the button relative to the ~73Hz wrap is what makes the
//! result random, so the counter is a plain relaxed atomic and never locked.

use core::sync::atomic::{AtomicU8, Ordering};

/// Output patterns for faces 1 to 6, indexed by [`Pips`].
///
/// The low nibble drives PB0-PB3. Bits 4 and 5 keep the PB4/PB5 pull-ups on
/// because the whole port is written at once.
///
/// ```text
/// PB0: LED7 (centre)   PB1: LED3 + LED6
/// PB2: LED1 + LED4     PB3: LED2 + LED5
/// ```
pub const FACES: [u8; 6] = [
    0b0011_0001, // 1
    0b0011_0100, // 2
    0b0011_0011, // 3
    0b0011_0110, // 4
    0b0011_0111, // 5
    0b0011_1110, // 6
];

/// Face index in `0..=5`, i.e. the face value minus one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pips(u8);

impl Pips {
    pub const MAX: u8 = 5;

    pub const fn new(index: u8) -> Option<Self> {
        if index <= Self::MAX {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Out of range values can only come from a corrupted counter.
    #[inline]
    fn from_raw(raw: u8) -> Self {
        debug_assert!(raw <= Self::MAX, "pip counter out of range");
        Self(if raw > Self::MAX { Self::MAX } else { raw })
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Face value in `1..=6`
    #[inline]
    pub const fn face(self) -> u8 {
        self.0 + 1
    }

    #[inline]
    pub const fn next(self) -> Self {
        if self.0 >= Self::MAX {
            Self(0)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Port pattern lighting this face
    #[inline]
    pub const fn pattern(self) -> u8 {
        FACES[self.0 as usize]
    }
}

/// Free running face counter shared between the timer interrupt and the main loop.
pub struct PipCounter {
    value: AtomicU8,
}

impl PipCounter {
    pub const fn new() -> Self {
        Self {
            value: AtomicU8::new(0),
        }
    }

    /// Step to the next face, wrapping after six.
    ///
    /// Load and store are separate: only the overflow interrupt calls this,
    /// so there is no second writer to race with.
    #[inline]
    pub fn advance(&self) {
        let next = Pips::from_raw(self.value.load(Ordering::Relaxed)).next();
        self.value.store(next.index(), Ordering::Relaxed);
    }

    /// Snapshot of the face currently selected
    #[inline]
    pub fn current(&self) -> Pips {
        Pips::from_raw(self.value.load(Ordering::Relaxed))
    }
}

impl Default for PipCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// The counter advanced by `TIM0_OVF`.
pub static PIPS: PipCounter = PipCounter::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_face_one() {
        let counter = PipCounter::new();
        assert_eq!(counter.current().index(), 0);
        assert_eq!(counter.current().face(), 1);
    }

    #[test]
    fn advancing_n_times_gives_n_mod_six() {
        let counter = PipCounter::new();
        for n in 1..=40u8 {
            counter.advance();
            assert_eq!(counter.current().index(), n % 6);
        }
    }

    #[test]
    fn six_advances_wrap_to_zero() {
        let counter = PipCounter::new();
        for _ in 0..6 {
            counter.advance();
        }
        assert_eq!(counter.current(), Pips::default());
    }

    #[test]
    fn pips_rejects_out_of_range() {
        assert!(Pips::new(5).is_some());
        assert!(Pips::new(6).is_none());
        assert!(Pips::new(u8::MAX).is_none());
    }

    #[test]
    fn face_patterns_are_fixed() {
        let expected = [
            0b0011_0001,
            0b0011_0100,
            0b0011_0011,
            0b0011_0110,
            0b0011_0111,
            0b0011_1110,
        ];
        assert_eq!(FACES.len(), 6);
        for (index, &pattern) in expected.iter().enumerate() {
            let pips = Pips::new(index as u8).unwrap();
            assert_eq!(pips.pattern(), pattern);
            // Same answer every time
            assert_eq!(pips.pattern(), pips.pattern());
        }
    }

    #[test]
    fn every_face_keeps_the_pull_ups_on() {
        for pattern in FACES {
            assert_eq!(pattern & 0b0011_0000, 0b0011_0000);
            assert_eq!(pattern & 0b1100_0000, 0);
        }
    }

    #[test]
    fn face_four_pattern() {
        assert_eq!(Pips::new(3).unwrap().pattern(), 0b0011_0110);
        assert_eq!(Pips::new(3).unwrap().face(), 4);
    }

    #[test]
    fn lit_line_count_matches_face() {
        // PB0 lights one LED, PB1-PB3 light two each
        for index in 0..=Pips::MAX {
            let pips = Pips::new(index).unwrap();
            let pattern = pips.pattern();
            let leds = (pattern & 1) + 2 * ((pattern >> 1) & 0b111).count_ones() as u8;
            assert_eq!(leds, pips.face());
        }
    }
}
