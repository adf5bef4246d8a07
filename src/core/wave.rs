use super::constants::{HUE_AMPLITUDE, HUE_FREQUENCY, HUE_OFFSET};
use rand::Rng;
use std::f64::consts::TAU;

/// Phase-accumulating sine generator.
///
/// Each [`Wave::update`] advances `phase` by `frequency` and returns
/// `offset + amplitude * sin(phase)`, so the output always stays inside
/// `[offset - amplitude, offset + amplitude]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Wave {
    pub phase: f64,
    pub offset: f64,
    pub frequency: f64,
    pub amplitude: f64,
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            phase: 0.0,
            offset: 0.0,
            frequency: 0.001,
            amplitude: 1.0,
        }
    }
}

impl Wave {
    pub fn new(phase: f64, offset: f64, frequency: f64, amplitude: f64) -> Self {
        Self {
            phase,
            offset,
            frequency,
            amplitude,
        }
    }

    /// Hue cycle used by the stroke color, starting at a random phase.
    pub fn hue<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(0.0..TAU),
            HUE_OFFSET,
            HUE_FREQUENCY,
            HUE_AMPLITUDE,
        )
    }

    pub fn update(&mut self) -> f64 {
        self.phase += self.frequency;
        self.value()
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.offset + self.phase.sin() * self.amplitude
    }
}
