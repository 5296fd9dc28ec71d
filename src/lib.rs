//! Real-time pink noise generation
//!
//! A Voss-McCartney octave-summation generator driven by a middle-square Weyl
//! random source. Output is bit-for-bit reproducible from a fresh generator.
//!
//! ```
//! use pinknoise::PinkNoise;
//!
//! let mut noise = PinkNoise::new();
//! let sample = noise.tick();
//! assert!(sample.abs() <= 1.0);
//! ```

pub mod gen;

// C bindings for host sound engines
pub mod ffi;

// Platform abstraction layer
pub mod platform;

#[cfg(feature = "bounce")]
pub mod bounce;

#[cfg(feature = "analysis")]
pub mod analysis;

#[cfg(feature = "cli")]
pub mod utils;

pub use gen::{MiddleSquareWeyl, PinkNoise, OCTAVES};
