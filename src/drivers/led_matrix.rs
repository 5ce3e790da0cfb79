use crate::dice::Pips;

/// Whole-port write to the LED lines.
///
/// The seven LEDs hang off four shared lines, so faces are written as one
/// byte rather than pin by pin.
pub trait LedPort {
    fn write(&mut self, pattern: u8);
}

pub struct DiceDisplay<P> {
    port: P,
}

impl<P: LedPort> DiceDisplay<P> {
    pub fn new(port: P) -> Self {
        DiceDisplay { port }
    }

    pub fn show(&mut self, pips: Pips) {
        self.port.write(pips.pattern());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    struct Recorder(Vec<u8>);

    impl LedPort for &mut Recorder {
        fn write(&mut self, pattern: u8) {
            self.0.push(pattern);
        }
    }

    #[test]
    fn show_writes_the_face_pattern() {
        let mut recorder = Recorder(Vec::new());
        let mut display = DiceDisplay::new(&mut recorder);
        display.show(Pips::new(0).unwrap());
        display.show(Pips::new(5).unwrap());
        drop(display);
        assert_eq!(recorder.0, [0b0011_0001, 0b0011_1110]);
    }
}
