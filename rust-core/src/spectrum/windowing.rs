//! Windowing functions for spectral analysis
//!
//! Applies windows to time-domain chunks before the transform to reduce spectral leakage

use crate::error::Result;
use crate::windows::{generate_window, WindowType};

/// Apply window to signal
///
/// # Arguments
/// * `signal` - Input signal (left untouched)
/// * `window_type` - Type of window to apply
///
/// # Returns
/// Windowed copy of the signal, `output[i] = signal[i] * w[i]`
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    let window = generate_window(window_type, signal.len());

    signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}

/// Apply a window selected by its configuration name
///
/// Fails with `DspError::UnsupportedWindowKind` for anything other than
/// `rectangular`, `hanning` or `hamming`; there is no fallback window.
pub fn apply_window_named(signal: &[f64], window_name: &str) -> Result<Vec<f64>> {
    let window_type = window_name.parse::<WindowType>()?;
    Ok(apply_window(signal, window_type))
}

/// Take the first `size` samples of `signal`, zero-padding on the right
/// when the signal is shorter.
pub fn extract_chunk(signal: &[f64], size: usize) -> Vec<f64> {
    let copy_len = signal.len().min(size);
    let mut chunk = vec![0.0; size];
    chunk[..copy_len].copy_from_slice(&signal[..copy_len]);
    chunk
}
