//! Processing configuration for the spectrum engine

use serde::{Deserialize, Serialize};

use crate::error::{DspError, Result};
use crate::windows::WindowType;

/// Transform backend used to compute the complex bins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    /// Direct O(N²) summation
    #[default]
    Direct,

    /// Real-input FFT (realfft), O(N log N)
    Fast,
}

/// Spectrum engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DspConfig {
    /// FFT size (number of samples per frame, at least 2)
    pub fft_size: usize,

    /// Window type applied to each frame
    pub window_type: WindowType,

    /// Number of frames to average.
    ///
    /// Reserved: the engine processes a single frame and this value has no
    /// effect on the output. Values above 1 are accepted and logged.
    pub averaging_count: usize,

    /// Transform backend
    pub transform: TransformKind,
}

impl Default for DspConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            window_type: WindowType::Hanning,
            averaging_count: 1,
            transform: TransformKind::Direct,
        }
    }
}

impl DspConfig {
    /// Configuration with the given frame size and window, other fields default
    pub fn new(fft_size: usize, window_type: WindowType) -> Self {
        Self {
            fft_size,
            window_type,
            ..Default::default()
        }
    }

    pub fn with_transform(mut self, transform: TransformKind) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_averaging_count(mut self, averaging_count: usize) -> Self {
        self.averaging_count = averaging_count;
        self
    }

    /// Number of retained bins (`fft_size / 2`)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2
    }

    /// Reject configurations that would leave no output bins
    pub fn validate(&self) -> Result<()> {
        if self.fft_size < 2 {
            return Err(DspError::InvalidConfig(format!(
                "fft_size must be at least 2, got {}",
                self.fft_size
            )));
        }
        Ok(())
    }
}

/// Convert a host-supplied FFT size to `usize`
///
/// Rejects non-integer, non-finite and non-positive values.
pub fn fft_size_from_f64(value: f64) -> Result<usize> {
    if !value.is_finite() || value.fract() != 0.0 || value <= 0.0 || value > usize::MAX as f64 {
        return Err(DspError::InvalidConfig(format!(
            "fft_size must be a positive integer, got {}",
            value
        )));
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DspConfig::default();
        assert_eq!(config.fft_size, 2048);
        assert_eq!(config.window_type, WindowType::Hanning);
        assert_eq!(config.averaging_count, 1);
        assert_eq!(config.transform, TransformKind::Direct);
        assert_eq!(config.num_bins(), 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_sizes() {
        for size in [0, 1] {
            let config = DspConfig::new(size, WindowType::Hamming);
            assert!(matches!(config.validate(), Err(DspError::InvalidConfig(_))));
        }
        assert!(DspConfig::new(2, WindowType::Hamming).validate().is_ok());
        assert!(DspConfig::new(1000, WindowType::Hamming).validate().is_ok());
    }

    #[test]
    fn test_fft_size_from_f64() {
        assert_eq!(fft_size_from_f64(1024.0), Ok(1024));
        for bad in [0.0, -256.0, 1024.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(fft_size_from_f64(bad), Err(DspError::InvalidConfig(_))),
                "{bad}"
            );
        }

        // Integral but too small still fails once validated
        let config = DspConfig::new(fft_size_from_f64(1.0).unwrap(), WindowType::Hanning);
        assert!(matches!(config.validate(), Err(DspError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_serde() {
        let json = r#"{"fft_size": 1024, "window_type": "hamming", "averaging_count": 4}"#;
        let config: DspConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.fft_size, 1024);
        assert_eq!(config.window_type, WindowType::Hamming);
        assert_eq!(config.averaging_count, 4);
        assert_eq!(config.transform, TransformKind::Direct);

        let out = serde_json::to_string(&config.clone().with_transform(TransformKind::Fast)).unwrap();
        assert!(out.contains(r#""window_type":"hamming""#));
        assert!(out.contains(r#""transform":"fast""#));

        let bad = r#"{"fft_size": 1024, "window_type": "flattop"}"#;
        let err = serde_json::from_str::<DspConfig>(bad).unwrap_err();
        assert!(err.to_string().contains("Unsupported window kind: flattop"));

        let fractional = r#"{"fft_size": 1024.5}"#;
        assert!(serde_json::from_str::<DspConfig>(fractional).is_err());
    }
}
