//! Tests for the C ABI surface

use pinknoise::ffi::*;
use pinknoise::PinkNoise;

#[test]
fn test_render_matches_rust_api() {
    unsafe {
        let noise = pink_noise_new();
        let mut buffer = vec![0.0f32; 1024];
        pink_noise_render(noise, buffer.as_mut_ptr(), 1024);

        let mut reference = PinkNoise::new();
        for (i, &sample) in buffer.iter().enumerate() {
            assert_eq!(sample.to_bits(), reference.tick().to_bits(), "sample {}", i);
        }

        // Rendering and single-sample calls share one sequence
        assert_eq!(pink_noise_next(noise).to_bits(), reference.tick().to_bits());

        pink_noise_free(noise);
    }
}

#[test]
fn test_init_restarts_sequence() {
    unsafe {
        let noise = pink_noise_new();
        let first: Vec<f32> = (0..8).map(|_| pink_noise_next(noise)).collect();

        pink_noise_init(noise);
        let again: Vec<f32> = (0..8).map(|_| pink_noise_next(noise)).collect();
        assert_eq!(first, again);

        pink_noise_free(noise);
    }
}

#[test]
fn test_null_pointers_are_ignored() {
    unsafe {
        assert_eq!(pink_noise_next(std::ptr::null_mut()), 0.0);
        pink_noise_init(std::ptr::null_mut());
        pink_noise_free(std::ptr::null_mut());

        let noise = pink_noise_new();
        pink_noise_render(noise, std::ptr::null_mut(), 64);
        let mut scratch = [0.0f32; 4];
        pink_noise_render(std::ptr::null_mut(), scratch.as_mut_ptr(), 4);
        assert_eq!(scratch, [0.0; 4]);

        // The null render must not have advanced the generator
        let mut reference = PinkNoise::new();
        assert_eq!(pink_noise_next(noise), reference.tick());
        pink_noise_free(noise);
    }
}

#[test]
fn test_octave_count() {
    assert_eq!(pink_noise_octave_count(), 9);
}
