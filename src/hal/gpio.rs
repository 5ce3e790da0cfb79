use avr_device::attiny13a::{portb, EXINT, PORTB};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::InputPin;

use crate::board::BootRegisters;
use crate::config::{BUTTON_PIN, CONSOLE_PIN};
use crate::drivers::LedPort;

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// One PORTB line. The ATtiny13A has no other port.
#[derive(Debug)]
pub struct Pin<const P: u8, MODE> {
    _mode: PhantomData<MODE>,
}

#[inline(always)]
fn regs() -> &'static portb::RegisterBlock {
    unsafe { &*PORTB::ptr() }
}

impl<const P: u8, MODE: PinMode> Pin<P, MODE> {
    pub fn into_output(self) -> Pin<P, Output> {
        regs()
            .ddrb
            .modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
        Pin { _mode: PhantomData }
    }
}

impl<const P: u8> Pin<P, Output> {
    #[inline]
    pub fn set_high(&mut self) {
        regs()
            .portb
            .modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
    }

    #[inline]
    pub fn set_low(&mut self) {
        regs()
            .portb
            .modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
    }
}

impl<const P: u8> InputPin for Pin<P, Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(regs().pinb.read().bits() & (1 << P) != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

/// PB0-PB3, written as a whole port so a face changes in one store.
pub struct LedLines {
    _private: (),
}

impl LedPort for LedLines {
    #[inline]
    fn write(&mut self, pattern: u8) {
        regs().portb.write(|w| unsafe { w.bits(pattern) });
    }
}

pub struct Parts {
    pub leds: LedLines,
    pub button: Pin<{ BUTTON_PIN }, Input>,
    pub console: Pin<{ CONSOLE_PIN }, Input>,
}

pub struct PortB {
    _port: PORTB,
}

impl PortB {
    /// Set line directions and the initial levels in one go.
    pub fn new(port: PORTB, boot: &BootRegisters) -> Self {
        port.ddrb.write(|w| unsafe { w.bits(boot.ddrb) });
        port.portb.write(|w| unsafe { w.bits(boot.portb) });
        Self { _port: port }
    }

    pub fn split(self) -> Parts {
        Parts {
            leds: LedLines { _private: () },
            button: Pin { _mode: PhantomData },
            console: Pin { _mode: PhantomData },
        }
    }
}

/// Arm the pin change interrupt on the button so it can end idle sleep.
pub fn enable_button_wake(exint: &EXINT, boot: &BootRegisters) {
    exint.pcmsk.write(|w| unsafe { w.bits(boot.pcmsk) });
    exint.gimsk.write(|w| unsafe { w.bits(boot.gimsk) });
}
