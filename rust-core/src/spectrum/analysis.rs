//! High-level spectrum engine
//!
//! Combines chunk extraction, windowing and the transform into a single
//! frame-to-spectrum pipeline producing display-ready decibel data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::config::{DspConfig, TransformKind};
use super::dft::{DirectDft, SpectralTransform};
use super::fft::FftEngine;
use super::windowing::{apply_window, extract_chunk};
use crate::error::{DspError, Result};
use crate::signal::TimeSignal;

/// Smallest magnitude converted to dB; keeps silence at -200 dB instead of -inf
pub const MAGNITUDE_FLOOR: f64 = 1e-10;

/// Magnitude in dB: 20*log10(max(mag, 1e-10))
pub fn magnitude_to_db(magnitude: f64) -> f64 {
    20.0 * magnitude.max(MAGNITUDE_FLOOR).log10()
}

/// Immutable frequency-domain record
///
/// Built only by `SpectrumEngine`; serializable for renderers but not
/// deserializable, so the two sequences always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumData {
    /// Bin frequencies in Hz, strictly increasing from 0
    frequencies: Vec<f64>,

    /// Magnitude per bin in dB, index-aligned with `frequencies`
    magnitudes_db: Vec<f64>,

    /// Bin spacing (sample_rate / fft_size)
    bin_width_hz: f64,

    created_at: DateTime<Utc>,
}

/// Strongest bin of a spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    pub bin: usize,
    pub frequency_hz: f64,
    pub magnitude_db: f64,
}

impl SpectrumData {
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn magnitudes_db(&self) -> &[f64] {
        &self.magnitudes_db
    }

    pub fn bin_width_hz(&self) -> f64 {
        self.bin_width_hz
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Bin with the highest dB value (first one on ties)
    pub fn peak(&self) -> Option<SpectralPeak> {
        let (bin, &magnitude_db) = self
            .magnitudes_db
            .iter()
            .enumerate()
            .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })?;

        Some(SpectralPeak {
            bin,
            frequency_hz: *self.frequencies.get(bin)?,
            magnitude_db,
        })
    }
}

/// Single-frame spectrum engine
///
/// Holds an immutable configuration; `process_signal` takes `&self` and keeps
/// no per-call state, so one engine can serve several threads.
pub struct SpectrumEngine {
    config: DspConfig,
    transform: Box<dyn SpectralTransform>,
}

impl SpectrumEngine {
    /// Create new spectrum engine, rejecting invalid configurations
    pub fn new(config: DspConfig) -> Result<Self> {
        config.validate()?;

        if config.averaging_count > 1 {
            log::warn!(
                "averaging_count = {} is not implemented; spectra are computed from a single frame",
                config.averaging_count
            );
        }

        let transform: Box<dyn SpectralTransform> = match config.transform {
            TransformKind::Direct => Box::new(DirectDft::new(config.fft_size)),
            TransformKind::Fast => Box::new(FftEngine::new(config.fft_size)),
        };

        log::debug!(
            "Spectrum engine ready: fft_size={}, window={}, transform={:?}",
            config.fft_size,
            config.window_type,
            config.transform
        );

        Ok(Self { config, transform })
    }

    /// Get current configuration
    pub fn config(&self) -> &DspConfig {
        &self.config
    }

    /// Get number of frequency bins (fft_size / 2)
    pub fn num_bins(&self) -> usize {
        self.config.num_bins()
    }

    /// Bin spacing in Hz for a given sample rate
    pub fn bin_width_hz(&self, sample_rate: f64) -> f64 {
        sample_rate / self.config.fft_size as f64
    }

    /// Bin-center frequencies in Hz: k * sample_rate / fft_size
    pub fn frequency_axis(&self, sample_rate: f64) -> Vec<f64> {
        let fft_size = self.config.fft_size as f64;
        (0..self.num_bins())
            .map(|k| k as f64 * sample_rate / fft_size)
            .collect()
    }

    /// Linear magnitude |X[k]| of the first windowed frame
    ///
    /// The frame is the first `fft_size` samples, zero-padded on the right
    /// when the signal is shorter.
    pub fn magnitude_spectrum(&self, signal: &TimeSignal) -> Result<Vec<f64>> {
        let chunk = extract_chunk(signal.samples(), self.config.fft_size);
        let windowed = apply_window(&chunk, self.config.window_type);
        let bins = self.transform.forward(&windowed)?;

        Ok(bins.iter().map(|c| c.norm()).collect())
    }

    /// Analyze a signal and return its dB spectrum with matching frequency axis
    ///
    /// Fails with `DspError::InvalidSignal` when the signal's sample rate is
    /// not a positive finite number (for example an empty signal generated
    /// at 0 Hz), since no strictly increasing frequency axis exists for it.
    /// Short and empty signals at a valid rate are zero-padded instead.
    pub fn process_signal(&self, signal: &TimeSignal) -> Result<SpectrumData> {
        let sample_rate = signal.sample_rate();
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(DspError::InvalidSignal(format!(
                "sample rate must be positive, got {}",
                sample_rate
            )));
        }

        let magnitudes_db: Vec<f64> = self
            .magnitude_spectrum(signal)?
            .into_iter()
            .map(magnitude_to_db)
            .collect();

        log::trace!(
            "Processed frame: {} of {} samples used, {} bins",
            signal.len().min(self.config.fft_size),
            signal.len(),
            magnitudes_db.len()
        );

        Ok(SpectrumData {
            frequencies: self.frequency_axis(sample_rate),
            magnitudes_db,
            bin_width_hz: self.bin_width_hz(sample_rate),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{create_sine_wave, create_white_noise};
    use crate::windows::WindowType;

    #[test]
    fn test_engine_basic() {
        let engine = SpectrumEngine::new(DspConfig::new(1024, WindowType::Hamming)).unwrap();

        let signal = create_sine_wave(1000.0, 1.0, 0.1, 48000.0);
        let spectrum = engine.process_signal(&signal).unwrap();

        assert_eq!(spectrum.len(), 512);
        assert_eq!(spectrum.magnitudes_db().len(), 512);

        let peak = spectrum.peak().unwrap();
        assert!((peak.frequency_hz - 1000.0).abs() < spectrum.bin_width_hz());
    }

    #[test]
    fn test_invalid_config_rejected() {
        for size in [0, 1] {
            let result = SpectrumEngine::new(DspConfig::new(size, WindowType::Hanning));
            assert!(matches!(result, Err(DspError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_frequency_axis() {
        let engine = SpectrumEngine::new(DspConfig::new(8, WindowType::Rectangular)).unwrap();
        let freqs = engine.frequency_axis(8000.0);

        assert_eq!(freqs, vec![0.0, 1000.0, 2000.0, 3000.0]);
        assert_eq!(engine.bin_width_hz(8000.0), 1000.0);
        // Last bin stays below Nyquist
        assert!(freqs[3] < 4000.0);
    }

    #[test]
    fn test_silence_is_finite() {
        let engine = SpectrumEngine::new(DspConfig::new(256, WindowType::Hanning)).unwrap();
        let silence = TimeSignal::new(vec![0.0; 256], 8000.0);
        let spectrum = engine.process_signal(&silence).unwrap();

        assert!(spectrum
            .magnitudes_db()
            .iter()
            .all(|&db| (db + 200.0).abs() < 1e-9));
    }

    #[test]
    fn test_empty_signal_zero_padded() {
        let engine = SpectrumEngine::new(DspConfig::new(64, WindowType::Hamming)).unwrap();
        let empty = TimeSignal::new(Vec::new(), 1000.0);
        let spectrum = engine.process_signal(&empty).unwrap();

        assert_eq!(spectrum.len(), 32);
        assert!(spectrum.magnitudes_db().iter().all(|db| db.is_finite()));
    }

    #[test]
    fn test_long_signal_uses_first_frame_only() {
        let engine = SpectrumEngine::new(DspConfig::new(128, WindowType::Hanning)).unwrap();

        let tone = create_sine_wave(500.0, 1.0, 0.05, 8000.0).into_samples();
        let head = TimeSignal::new(tone[..128].to_vec(), 8000.0);
        let mut samples = tone[..128].to_vec();
        samples.extend(create_white_noise(5.0, 0.5, 8000.0).samples());
        let long = TimeSignal::new(samples, 8000.0);

        assert_eq!(
            engine.magnitude_spectrum(&head).unwrap(),
            engine.magnitude_spectrum(&long).unwrap()
        );
    }

    #[test]
    fn test_rejects_non_positive_sample_rate() {
        let engine = SpectrumEngine::new(DspConfig::new(16, WindowType::Hanning)).unwrap();
        let signal = TimeSignal::new(vec![0.5; 16], 0.0);
        assert!(matches!(
            engine.process_signal(&signal),
            Err(DspError::InvalidSignal(_))
        ));

        // Generators accept a zero rate and hand back an empty signal
        let generated = create_sine_wave(440.0, 1.0, 1.0, 0.0);
        assert!(generated.is_empty());
        assert!(matches!(
            engine.process_signal(&generated),
            Err(DspError::InvalidSignal(_))
        ));
    }

    #[test]
    fn test_direct_and_fast_agree() {
        let signal = create_sine_wave(1234.5, 0.8, 0.05, 22050.0);

        for window_type in WindowType::ALL {
            let direct = SpectrumEngine::new(DspConfig::new(512, window_type)).unwrap();
            let fast = SpectrumEngine::new(
                DspConfig::new(512, window_type).with_transform(TransformKind::Fast),
            )
            .unwrap();

            let a = direct.magnitude_spectrum(&signal).unwrap();
            let b = fast.magnitude_spectrum(&signal).unwrap();
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn test_averaging_count_has_no_effect() {
        let signal = create_sine_wave(700.0, 1.0, 0.1, 8000.0);
        let single = SpectrumEngine::new(DspConfig::new(256, WindowType::Hanning)).unwrap();
        let averaged = SpectrumEngine::new(
            DspConfig::new(256, WindowType::Hanning).with_averaging_count(8),
        )
        .unwrap();

        assert_eq!(
            single.process_signal(&signal).unwrap().magnitudes_db(),
            averaged.process_signal(&signal).unwrap().magnitudes_db()
        );
    }

    #[test]
    fn test_peak_on_mismatched_lengths() {
        let spectrum = SpectrumData {
            frequencies: vec![0.0],
            magnitudes_db: vec![-10.0, 5.0],
            bin_width_hz: 1.0,
            created_at: Utc::now(),
        };
        assert_eq!(spectrum.peak(), None);

        let empty = SpectrumData {
            frequencies: Vec::new(),
            magnitudes_db: Vec::new(),
            bin_width_hz: 1.0,
            created_at: Utc::now(),
        };
        assert_eq!(empty.peak(), None);
    }

    #[test]
    fn test_magnitude_to_db() {
        assert_eq!(magnitude_to_db(1.0), 0.0);
        assert!((magnitude_to_db(10.0) - 20.0).abs() < 1e-12);
        assert!((magnitude_to_db(0.0) + 200.0).abs() < 1e-9);
        assert_eq!(magnitude_to_db(1e-12), magnitude_to_db(0.0));
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpectrumEngine>();
    }
}
