//! Averaged power spectrum and per-octave levels, used to check the 1/f tilt

use rustfft::{num_complex::Complex, FftPlanner};

/// Mean spectral level of one octave band
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctaveBand {
    pub low_hz: f32,
    pub high_hz: f32,
    pub level_db: f32,
}

/// Welch-style spectrum analyzer: Hann windowed, non-overlapping frames
pub struct SpectrumAnalyzer {
    fft_size: usize,
    sample_rate: f32,
    planner: FftPlanner<f32>,
    // Summed |X|^2 over all analyzed frames, first half of the spectrum
    power_sum: Vec<f32>,
    frames: usize,
}

impl SpectrumAnalyzer {
    /// `fft_size` is rounded up to a power of two, at least 16
    pub fn new(fft_size: usize, sample_rate: f32) -> Self {
        let fft_size = fft_size.max(16).next_power_of_two();
        Self {
            fft_size,
            sample_rate,
            planner: FftPlanner::new(),
            power_sum: vec![0.0; fft_size / 2],
            frames: 0,
        }
    }

    /// Accumulate every complete frame in `samples`; a trailing partial frame is ignored
    pub fn analyze(&mut self, samples: &[f32]) {
        let fft = self.planner.plan_fft_forward(self.fft_size);
        let size = self.fft_size as f32;

        for chunk in samples.chunks_exact(self.fft_size) {
            // Apply Hanning window to reduce spectral leakage
            let mut buffer: Vec<Complex<f32>> = chunk
                .iter()
                .enumerate()
                .map(|(i, &sample)| {
                    let window = 0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / size).cos());
                    Complex::new(sample * window, 0.0)
                })
                .collect();

            fft.process(&mut buffer);

            for (acc, bin) in self.power_sum.iter_mut().zip(buffer.iter()) {
                *acc += bin.norm_sqr();
            }
            self.frames += 1;
        }
    }

    pub fn frames_analyzed(&self) -> usize {
        self.frames
    }

    /// Mean power per bin, `fft_size / 2` bins from DC upward
    pub fn power_spectrum(&self) -> Vec<f32> {
        let frames = self.frames.max(1) as f32;
        self.power_sum.iter().map(|p| p / frames).collect()
    }

    /// Get the frequency for a given bin index
    pub fn bin_to_frequency(&self, bin: usize) -> f32 {
        bin as f32 * self.sample_rate / self.fft_size as f32
    }

    /// Octave bands from Nyquist downward; band j covers bins `[N/2^(j+1), N/2^j)`
    pub fn octave_bands(&self) -> Vec<OctaveBand> {
        let spectrum = self.power_spectrum();
        let mut bands = Vec::new();
        let mut high = self.fft_size / 2;

        while high / 2 >= 2 {
            let low = high / 2;
            let mean = spectrum[low..high].iter().sum::<f32>() / (high - low) as f32;
            bands.push(OctaveBand {
                low_hz: self.bin_to_frequency(low),
                high_hz: self.bin_to_frequency(high),
                level_db: 10.0 * (mean + 1e-20).log10(),
            });
            high = low;
        }

        bands
    }

    /// Least-squares slope of band level per octave of ascending frequency
    pub fn spectral_slope_db_per_octave(&self) -> Option<f32> {
        if self.frames == 0 {
            return None;
        }

        // Bands come out highest first; position i sits i octaves below Nyquist
        let points: Vec<(f32, f32)> = self
            .octave_bands()
            .iter()
            .enumerate()
            .map(|(i, band)| (-(i as f32), band.level_db))
            .collect();
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f32;
        let mean_x = points.iter().map(|p| p.0).sum::<f32>() / n;
        let mean_y = points.iter().map(|p| p.1).sum::<f32>() / n;
        let covariance: f32 = points.iter().map(|p| (p.0 - mean_x) * (p.1 - mean_y)).sum();
        let variance: f32 = points.iter().map(|p| (p.0 - mean_x).powi(2)).sum();

        Some(covariance / variance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fft_size_rounding() {
        assert_eq!(SpectrumAnalyzer::new(1000, 44100.0).power_spectrum().len(), 512);
        assert_eq!(SpectrumAnalyzer::new(4, 44100.0).power_spectrum().len(), 8);
    }

    #[test]
    fn test_partial_frames_ignored() {
        let mut analyzer = SpectrumAnalyzer::new(256, 44100.0);
        analyzer.analyze(&vec![0.1; 256 * 3 + 100]);
        assert_eq!(analyzer.frames_analyzed(), 3);
    }

    #[test]
    fn test_no_slope_without_data() {
        let analyzer = SpectrumAnalyzer::new(1024, 44100.0);
        assert_eq!(analyzer.spectral_slope_db_per_octave(), None);
    }

    #[test]
    fn test_band_layout() {
        let analyzer = SpectrumAnalyzer::new(64, 6400.0);
        let bands = analyzer.octave_bands();

        // Bins [16,32), [8,16), [4,8), [2,4)
        assert_eq!(bands.len(), 4);
        assert_eq!(bands[0].low_hz, 1600.0);
        assert_eq!(bands[0].high_hz, 3200.0);
        assert_eq!(bands[3].low_hz, 200.0);
    }

    #[test]
    fn test_sine_peaks_in_its_bin() {
        let sample_rate = 8192.0;
        let mut analyzer = SpectrumAnalyzer::new(1024, sample_rate);
        let samples: Vec<f32> = (0..4096)
            .map(|i| (2.0 * std::f32::consts::PI * 1024.0 * i as f32 / sample_rate).sin())
            .collect();
        analyzer.analyze(&samples);

        let spectrum = analyzer.power_spectrum();
        let peak = spectrum
            .iter()
            .enumerate()
            .fold((0, 0.0f32), |best, (i, &p)| if p > best.1 { (i, p) } else { best })
            .0;
        assert_eq!(analyzer.bin_to_frequency(peak), 1024.0);
    }
}
