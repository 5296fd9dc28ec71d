//! Middle-square Weyl sequence random source
//!
//! Squares the working value, adds a Weyl sequence to break the short cycles plain
//! middle-square suffers from, then swaps the 32-bit halves. Deterministic: the same
//! number of draws always yields the same integers, which the pink noise golden
//! tests and cross-implementation parity rely on.

/// Odd Weyl increment. Fixed; the noise spectrum is tuned against this sequence.
pub const WEYL_INCREMENT: u64 = 0x2252_E7CD_9884_6FDD;

/// 32-bit pseudo-random integer source with a 64-bit state triple
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MiddleSquareWeyl {
    /// Weyl increment, never changes after construction
    s: u64,
    /// Squared and folded working value
    x: u64,
    /// Weyl accumulator
    w: u64,
}

impl MiddleSquareWeyl {
    /// Create a source at draw zero
    pub const fn new() -> Self {
        Self {
            s: WEYL_INCREMENT,
            x: 0,
            w: 0,
        }
    }

    /// Draw the next value over the full signed 32-bit range
    #[inline]
    pub fn next_int(&mut self) -> i32 {
        self.x = self.x.wrapping_mul(self.x);
        self.w = self.w.wrapping_add(self.s);
        self.x = self.x.wrapping_add(self.w);
        self.x = self.x.rotate_left(32);
        // Truncation keeps the low half of the folded value
        self.x as i32
    }
}

impl Default for MiddleSquareWeyl {
    fn default() -> Self {
        Self::new()
    }
}
