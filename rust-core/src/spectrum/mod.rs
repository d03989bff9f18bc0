//! Spectral analysis: windowing, transform and dB conversion

pub mod config;
pub mod windowing;
pub mod dft;
pub mod fft;
pub mod analysis;

pub use config::{DspConfig, TransformKind};
pub use windowing::{apply_window, apply_window_named};
pub use dft::{DirectDft, SpectralTransform};
pub use fft::FftEngine;
pub use analysis::{magnitude_to_db, SpectralPeak, SpectrumData, SpectrumEngine};
