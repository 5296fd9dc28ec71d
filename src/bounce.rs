//! Offline render of pink noise to a 16-bit mono PCM WAV file

use crate::gen::PinkNoise;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

/// Settings for an offline render
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BounceConfig {
    pub sample_rate: u32,   // Output rate in Hz (8000-192000)
    pub duration_secs: f32, // Render length (0-600 seconds)
    pub gain: f32,          // Linear output gain (0.0-1.0)
}

impl BounceConfig {
    pub fn new(sample_rate: u32, duration_secs: f32, gain: f32) -> Self {
        Self {
            sample_rate: sample_rate.clamp(8_000, 192_000),
            duration_secs: duration_secs.clamp(0.0, 600.0),
            gain: gain.clamp(0.0, 1.0),
        }
    }

    /// One second at 22050 Hz, full scale
    pub fn default() -> Self {
        Self::new(22_050, 1.0, 1.0)
    }

    pub fn cd_quality() -> Self {
        Self::new(44_100, 5.0, 0.8)
    }

    /// Number of frames the render will produce
    pub fn frame_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration_secs as f64).round() as usize
    }

    fn wav_spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        }
    }
}

/// Quantize a sample to signed 16-bit PCM
#[inline]
fn to_pcm16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}

/// Render a fresh generator into any seekable writer, returning frames written
pub fn render_to_writer<W>(writer: W, config: &BounceConfig) -> Result<usize>
where
    W: Write + Seek,
{
    let mut wav = hound::WavWriter::new(writer, config.wav_spec())
        .context("Failed to write WAV header")?;
    let mut noise = PinkNoise::new();
    let frames = config.frame_count();

    for _ in 0..frames {
        wav.write_sample(to_pcm16(noise.tick() * config.gain))?;
    }

    wav.finalize().context("Failed to finalize WAV data")?;
    Ok(frames)
}

/// Render to a WAV file at `path`, replacing any existing file
pub fn render_to_wav(path: impl AsRef<Path>, config: &BounceConfig) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    let frames = render_to_writer(BufWriter::new(file), config)
        .with_context(|| format!("Failed to render pink noise to {}", path.display()))?;

    log::info!(
        "Bounced {} frames ({:.2}s @ {} Hz, gain {:.2}) to {}",
        frames,
        config.duration_secs,
        config.sample_rate,
        config.gain,
        path.display()
    );
    Ok(frames)
}
