//! Transmit-only software UART on PB5, 8N1 at `CONSOLE_BAUD`.
//!
//! PB5 is the reset pin, so this only works with RSTDISBL programmed.

use core::convert::Infallible;
use ufmt::uWrite;

use super::gpio::{Input, Output, Pin};
use super::timer::Stopwatch;
use crate::board::bit_end_ticks;
use crate::config::CONSOLE_PIN;

pub struct SoftTx {
    pin: Pin<{ CONSOLE_PIN }, Output>,
}

impl SoftTx {
    pub fn new(pin: Pin<{ CONSOLE_PIN }, Input>) -> Self {
        // The pull-up already holds the line at idle
        let mut pin = pin.into_output();
        pin.set_high();
        Self { pin }
    }

    pub fn write_byte(&mut self, byte: u8) {
        // start bit, data LSB first, stop bit
        let frame = (1u16 << 9) | ((byte as u16) << 1);
        let mut watch = Stopwatch::start();
        for bit in 0..10u8 {
            if frame & (1 << bit) != 0 {
                self.pin.set_high();
            } else {
                self.pin.set_low();
            }
            watch.wait_until(bit_end_ticks(bit + 1));
        }
    }
}

impl uWrite for SoftTx {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.write_byte(b'\r');
            }
            self.write_byte(byte);
        }
        Ok(())
    }
}
