//! Spectrum Lab - Test Signal and Spectrum Analysis Core
//!
//! Synthesizes test signals and turns time-domain frames into dB magnitude
//! spectra ready for display, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod windows;
pub mod signal;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{DspError, Result};
pub use windows::{generate_window, WindowType};
pub use signal::{SignalKind, SignalParams, TimeSignal};
pub use spectrum::{DspConfig, SpectrumData, SpectrumEngine, TransformKind};
