use embedded_hal::digital::v2::InputPin;

/// Push button wired to ground with the internal pull-up enabled.
pub struct Button<P> {
    pin: P,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Buttons are active low
    #[inline]
    pub fn is_pressed(&self) -> Result<bool, P::Error> {
        self.pin.is_low()
    }

    #[inline]
    pub fn is_released(&self) -> Result<bool, P::Error> {
        self.pin.is_high()
    }
}
