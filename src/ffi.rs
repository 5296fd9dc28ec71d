//! C FFI bindings for the pink noise generator
//!
//! The consuming sound engine allocates one generator per noise voice, calls
//! `pink_noise_init` when the voice is (re)started and `pink_noise_next` or
//! `pink_noise_render` from its audio thread. A generator must only be used from
//! one thread at a time.

use crate::gen::{PinkNoise, OCTAVES};
use std::slice;

// =============================================================================
// Generator lifecycle
// =============================================================================

/// Create a new, initialized pink noise generator
///
/// # Returns
/// Pointer to a new PinkNoise instance. Must be freed with `pink_noise_free`.
#[no_mangle]
pub extern "C" fn pink_noise_new() -> *mut PinkNoise {
    Box::into_raw(Box::new(PinkNoise::new()))
}

/// Free a pink noise generator
///
/// # Safety
/// `noise` must be a valid pointer returned by `pink_noise_new`, or null.
/// After calling this function, the pointer is invalid and must not be used.
#[no_mangle]
pub unsafe extern "C" fn pink_noise_free(noise: *mut PinkNoise) {
    if !noise.is_null() {
        drop(Box::from_raw(noise));
    }
}

/// Reset a generator to silence at epoch zero
///
/// # Safety
/// `noise` must be a valid pointer returned by `pink_noise_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn pink_noise_init(noise: *mut PinkNoise) {
    if let Some(noise) = noise.as_mut() {
        noise.reset();
    }
}

// =============================================================================
// Sample generation
// =============================================================================

/// Produce the next sample. Returns 0.0 for a null generator.
///
/// # Safety
/// `noise` must be a valid pointer returned by `pink_noise_new`, or null.
#[no_mangle]
pub unsafe extern "C" fn pink_noise_next(noise: *mut PinkNoise) -> f32 {
    match noise.as_mut() {
        Some(noise) => noise.tick(),
        None => 0.0,
    }
}

/// Render consecutive samples into the provided buffer
///
/// # Arguments
/// * `noise` - Pointer to a PinkNoise
/// * `buffer` - Pointer to a buffer of floats to fill with audio
/// * `frames` - Number of frames (samples) to render
///
/// # Safety
/// - `noise` must be a valid pointer returned by `pink_noise_new`
/// - `buffer` must point to at least `frames` floats of allocated memory
#[no_mangle]
pub unsafe extern "C" fn pink_noise_render(noise: *mut PinkNoise, buffer: *mut f32, frames: u32) {
    if noise.is_null() || buffer.is_null() {
        return;
    }

    let noise = &mut *noise;
    let buffer = slice::from_raw_parts_mut(buffer, frames as usize);
    noise.fill(buffer);
}

/// Get the number of octave slots summed per sample
#[no_mangle]
pub extern "C" fn pink_noise_octave_count() -> u32 {
    OCTAVES as u32
}
