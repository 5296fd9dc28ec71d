#![cfg(feature = "bounce")]
//! Offline WAV render read back through hound

use pinknoise::bounce::{render_to_wav, BounceConfig};
use pinknoise::PinkNoise;

#[test]
fn test_bounce_writes_readable_wav() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pink.wav");
    let config = BounceConfig::default();

    let frames = render_to_wav(&path, &config).unwrap();
    assert_eq!(frames, 22_050);

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 22_050);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples.len(), frames);

    // Samples are the generator output quantized to 16 bits
    let mut noise = PinkNoise::new();
    for (i, &pcm) in samples.iter().enumerate().take(256) {
        let expected = (noise.tick() * i16::MAX as f32) as i16;
        assert_eq!(pcm, expected, "frame {}", i);
    }
}

#[test]
fn test_gain_scales_output() {
    let dir = tempfile::tempdir().unwrap();
    let full = dir.path().join("full.wav");
    let quiet = dir.path().join("quiet.wav");

    render_to_wav(&full, &BounceConfig::new(8_000, 0.5, 1.0)).unwrap();
    render_to_wav(&quiet, &BounceConfig::new(8_000, 0.5, 0.25)).unwrap();

    let peak = |path: &std::path::Path| -> i32 {
        hound::WavReader::open(path)
            .unwrap()
            .samples::<i16>()
            .map(|s| (s.unwrap() as i32).abs())
            .max()
            .unwrap()
    };

    let (full_peak, quiet_peak) = (peak(&full), peak(&quiet));
    assert!(quiet_peak > 0);
    assert!(quiet_peak * 3 < full_peak, "{} vs {}", quiet_peak, full_peak);
}

#[test]
fn test_bounce_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("pink.wav");

    let err = render_to_wav(&path, &BounceConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Failed to create output file"));
}
