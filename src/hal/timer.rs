use avr_device::attiny13a::TC0;
use embedded_hal::blocking::delay::DelayMs;

use crate::board::{ms_to_ticks, BootRegisters};

/// Timer0 free running in normal mode. Its overflow interrupt advances the
/// pip counter, so TCNT0 is only ever read after setup.
pub struct Timer0 {
    _tc0: TC0,
}

impl Timer0 {
    pub fn new(tc0: TC0, boot: &BootRegisters) -> Self {
        tc0.tccr0a.write(|w| unsafe { w.bits(boot.tccr0a) });
        tc0.tcnt0.write(|w| unsafe { w.bits(0) });
        tc0.tccr0b.write(|w| unsafe { w.bits(boot.tccr0b) });
        tc0.timsk0.write(|w| unsafe { w.bits(boot.timsk0) });
        Self { _tc0: tc0 }
    }
}

#[inline(always)]
fn counter() -> u8 {
    unsafe { (*TC0::ptr()).tcnt0.read().bits() }
}

/// Counts elapsed Timer0 ticks across overflows without touching the timer.
///
/// Must be polled at least once per 256 ticks (~13ms) or wraps are lost.
pub struct Stopwatch {
    last: u8,
    elapsed: u32,
}

impl Stopwatch {
    #[inline]
    pub fn start() -> Self {
        Self {
            last: counter(),
            elapsed: 0,
        }
    }

    #[inline]
    pub fn elapsed_ticks(&mut self) -> u32 {
        let now = counter();
        self.elapsed += now.wrapping_sub(self.last) as u32;
        self.last = now;
        self.elapsed
    }

    #[inline]
    pub fn wait_until(&mut self, ticks: u32) {
        while self.elapsed_ticks() < ticks {}
    }
}

impl DelayMs<u16> for Timer0 {
    fn delay_ms(&mut self, ms: u16) {
        Stopwatch::start().wait_until(ms_to_ticks(ms));
    }
}

impl DelayMs<u8> for Timer0 {
    fn delay_ms(&mut self, ms: u8) {
        self.delay_ms(ms as u16);
    }
}
