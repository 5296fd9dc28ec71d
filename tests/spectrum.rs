#![cfg(feature = "analysis")]
//! Spectral shape of the generator output

use pinknoise::analysis::SpectrumAnalyzer;
use pinknoise::PinkNoise;

const FFT_SIZE: usize = 4096;
const SAMPLE_RATE: f32 = 44100.0;

fn analyzed_noise(frames: usize) -> SpectrumAnalyzer {
    let mut noise = PinkNoise::new();
    let mut samples = vec![0.0f32; FFT_SIZE * frames];
    noise.fill(&mut samples);

    let mut analyzer = SpectrumAnalyzer::new(FFT_SIZE, SAMPLE_RATE);
    analyzer.analyze(&samples);
    analyzer
}

#[test]
fn test_spectrum_tilts_down() {
    let analyzer = analyzed_noise(40);
    assert_eq!(analyzer.frames_analyzed(), 40);

    let slope = analyzer.spectral_slope_db_per_octave().unwrap();
    assert!(
        slope < -1.0 && slope > -4.0,
        "Expected roughly -2 dB/octave, got {:.2}",
        slope
    );
}

#[test]
fn test_low_band_dominates_high_band() {
    let analyzer = analyzed_noise(40);
    let spectrum = analyzer.power_spectrum();

    let low = spectrum[1..FFT_SIZE / 64].iter().sum::<f32>() / (FFT_SIZE / 64 - 1) as f32;
    let high = spectrum[FFT_SIZE / 4..FFT_SIZE / 2].iter().sum::<f32>() / (FFT_SIZE / 4) as f32;

    assert!(low > 10.0 * high, "low {} vs high {}", low, high);
}

#[test]
fn test_octave_levels_rise_toward_low_frequencies() {
    let analyzer = analyzed_noise(40);
    let bands = analyzer.octave_bands();
    assert_eq!(bands.len(), 10);

    // Highest band is quietest, lowest band loudest
    let top = bands.first().unwrap().level_db;
    let bottom = bands.last().unwrap().level_db;
    assert!(bottom - top > 10.0, "top {:.2} dB, bottom {:.2} dB", top, bottom);
}
