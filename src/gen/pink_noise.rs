//! Pink noise generator using the Voss-McCartney algorithm
//!
//! Pink noise has a power spectral density that decreases with frequency (1/f).
//! Nine octave slots each hold a random value; slot `k` is redrawn once every
//! `2^k` samples, picked by the trailing zero count of an 8-bit sample counter.
//! The output is half of a running sum of all slots, updated incrementally so each
//! sample costs one draw regardless of the octave count.

use super::msweyl::MiddleSquareWeyl;

/// Number of octave slots summed into the output
pub const OCTAVES: usize = 9;

/// Trailing zero count of every 8-bit counter value.
///
/// Index 0 has no set bit and maps to the sentinel 8, the slowest slot, which
/// therefore refreshes once per 256-sample counter cycle.
pub const TRAILING_ZEROS: [u8; 256] = build_trailing_zeros();

const fn build_trailing_zeros() -> [u8; 256] {
    let mut table = [0u8; 256];
    table[0] = OCTAVES as u8 - 1;
    let mut i = 1;
    while i < 256 {
        table[i] = (i as u8).trailing_zeros() as u8;
        i += 1;
    }
    table
}

/// Octave slot refreshed when the counter holds `counter`
#[inline]
pub fn octave_for(counter: u8) -> usize {
    TRAILING_ZEROS[counter as usize] as usize
}

/// Pink noise generator with ~1/f frequency spectrum
///
/// Fully deterministic: every freshly initialized generator produces the same
/// sequence. No allocation, no locking; each voice should own its own instance.
#[derive(Clone, Debug)]
pub struct PinkNoise {
    rand: MiddleSquareWeyl,

    /// Running sum of every slot's current contribution
    out: f32,

    /// Last drawn, scaled value per octave
    octave_hold_vals: [f32; OCTAVES],

    /// Cyclic phase index (period 256) that schedules slot refreshes
    counter: u8,
}

impl PinkNoise {
    /// Create an initialized pink noise generator
    pub fn new() -> Self {
        Self {
            rand: MiddleSquareWeyl::new(),
            out: 0.0,
            octave_hold_vals: [0.0; OCTAVES],
            counter: 0,
        }
    }

    /// Reset to silence at epoch zero, identical to a fresh generator
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Generate the next pink noise sample (bounded to roughly -0.97..0.97)
    #[inline]
    pub fn tick(&mut self) -> f32 {
        let octave = octave_for(self.counter);

        self.out -= self.octave_hold_vals[octave];

        let mut held = self.rand.next_int() as f32 / i32::MAX as f32;
        // Slower octaves are attenuated: slot k is divided by k + 2
        held /= (octave + 2) as f32;
        self.octave_hold_vals[octave] = held;

        self.out += held;
        self.counter = self.counter.wrapping_add(1);

        self.out / 2.0
    }

    /// Fill a buffer with consecutive samples
    pub fn fill(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.tick();
        }
    }

    /// Counter value that will schedule the next refresh
    pub fn counter(&self) -> u8 {
        self.counter
    }

    /// Current scaled hold value of every octave slot
    pub fn octave_hold_vals(&self) -> &[f32; OCTAVES] {
        &self.octave_hold_vals
    }
}

impl Default for PinkNoise {
    fn default() -> Self {
        Self::new()
    }
}
