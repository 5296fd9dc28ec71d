//! Platform abstraction for audio output
//! Plays a pink noise voice through a live device. The voice itself is platform
//! independent; only `CpalOutput` needs the `native` feature.

use crate::gen::PinkNoise;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Trait for platform-specific audio output implementations
pub trait AudioOutput {
    /// Initialize the audio output with the given sample rate
    fn initialize(&mut self, sample_rate: f32) -> Result<(), anyhow::Error>;

    /// Start the audio stream
    fn start(&mut self) -> Result<(), anyhow::Error>;

    /// Stop the audio stream
    fn stop(&mut self) -> Result<(), anyhow::Error>;

    /// Get the current sample rate
    fn sample_rate(&self) -> f32;

    /// Check if the audio output is active
    fn is_active(&self) -> bool;
}

/// A pink noise generator with output gain and mute
#[derive(Clone, Debug)]
pub struct NoiseVoice {
    noise: PinkNoise,
    gain: f32,
    muted: bool,
}

impl NoiseVoice {
    pub fn new(gain: f32) -> Self {
        Self {
            noise: PinkNoise::new(),
            gain: gain.clamp(0.0, 1.0),
            muted: false,
        }
    }

    /// Next output sample. A muted voice keeps advancing its generator.
    #[inline]
    pub fn tick(&mut self) -> f32 {
        let sample = self.noise.tick();
        if self.muted {
            0.0
        } else {
            sample * self.gain
        }
    }

    /// Restart the noise sequence from epoch zero
    pub fn reset(&mut self) {
        self.noise.reset();
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain.clamp(0.0, 1.0);
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl Default for NoiseVoice {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Connects a noise voice to platform-specific audio output
pub struct AudioEngine {
    voice: Arc<Mutex<NoiseVoice>>,
    sample_rate: f32,
}

impl AudioEngine {
    /// Create a new audio engine with the given sample rate
    pub fn new(sample_rate: f32) -> Self {
        Self {
            voice: Arc::new(Mutex::new(NoiseVoice::default())),
            sample_rate,
        }
    }

    /// Shared handle for the audio callback
    pub fn voice(&self) -> Arc<Mutex<NoiseVoice>> {
        self.voice.clone()
    }

    /// Get the current sample rate
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Modify the voice (for configuration)
    pub fn with_voice<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut NoiseVoice) -> R,
    {
        let mut voice = lock_voice(&self.voice);
        f(&mut voice)
    }
}

/// Lock a shared voice, recovering from a poisoned lock. A panic elsewhere leaves
/// the numeric state valid, so the audio thread keeps playing.
pub(crate) fn lock_voice(voice: &Mutex<NoiseVoice>) -> MutexGuard<'_, NoiseVoice> {
    voice.lock().unwrap_or_else(PoisonError::into_inner)
}

// Platform-specific implementations
#[cfg(feature = "native")]
pub mod cpal_output;

// Re-export platform-specific types
#[cfg(feature = "native")]
pub use self::cpal_output::CpalOutput;
