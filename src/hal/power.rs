use avr_device::attiny13a::{AC, CPU};

use crate::application::Standby;
use crate::board::{BootRegisters, SleepMode};
use crate::config::PowerMode;

const SLEEP_ENABLE: u8 = 1 << 5;
const SLEEP_MODE_MASK: u8 = 0b11 << 3;

pub struct Power {
    cpu: CPU,
}

impl Power {
    pub fn new(cpu: CPU) -> Self {
        Self { cpu }
    }

    /// Switch off the analog blocks and pick the sleep mode.
    pub fn configure(&mut self, ac: &AC, boot: &BootRegisters) {
        ac.acsr.write(|w| unsafe { w.bits(boot.acsr) });
        self.cpu.prr.write(|w| unsafe { w.bits(boot.prr) });
        if let Some(mode) = boot.sleep_mode {
            self.set_sleep_mode(mode);
        }
    }

    #[inline]
    pub fn set_sleep_mode(&mut self, mode: SleepMode) {
        self.cpu
            .mcucr
            .modify(|r, w| unsafe { w.bits((r.bits() & !SLEEP_MODE_MASK) | mode as u8) });
    }

    #[inline]
    pub fn enable_sleep(&mut self) {
        self.cpu
            .mcucr
            .modify(|r, w| unsafe { w.bits(r.bits() | SLEEP_ENABLE) });
    }

    #[inline]
    pub fn disable_sleep(&mut self) {
        self.cpu
            .mcucr
            .modify(|r, w| unsafe { w.bits(r.bits() & !SLEEP_ENABLE) });
    }
}

impl Standby for Power {
    const MODE: PowerMode = PowerMode::Sleep;

    /// Idle sleep. Any enabled interrupt wakes the core, the timer overflow
    /// included.
    fn standby(&mut self) {
        self.enable_sleep();
        avr_device::asm::sleep();
        self.disable_sleep();
    }
}
