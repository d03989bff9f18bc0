//! Window functions for spectral analysis
//!
//! Coefficient sequences used to taper a signal chunk before the transform

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::DspError;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WindowType {
    /// Rectangular window (no windowing)
    Rectangular,

    /// Hann window: w[n] = 0.5*(1 - cos(2πn/(N-1)))
    /// Sidelobe attenuation: ~31 dB (first sidelobe)
    #[default]
    Hanning,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(N-1))
    /// Sidelobe attenuation: ~43 dB (first sidelobe)
    Hamming,
}

impl WindowType {
    /// All recognized window kinds
    pub const ALL: [WindowType; 3] = [
        WindowType::Rectangular,
        WindowType::Hanning,
        WindowType::Hamming,
    ];

    /// Wire name used by configuration layers
    pub fn name(&self) -> &'static str {
        match self {
            WindowType::Rectangular => "rectangular",
            WindowType::Hanning => "hanning",
            WindowType::Hamming => "hamming",
        }
    }
}

impl fmt::Display for WindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowType {
    type Err = DspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowType::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DspError::UnsupportedWindowKind(s.to_string()))
    }
}

impl TryFrom<String> for WindowType {
    type Error = DspError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WindowType> for String {
    fn from(kind: WindowType) -> Self {
        kind.name().to_string()
    }
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (N)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..N-1.
/// Windows of length 0 or 1 are all ones (empty or `[1.0]`), since the
/// tapered formulas divide by N-1.
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    if length <= 1 {
        return vec![1.0; length];
    }

    let denom = (length - 1) as f64;

    match window_type {
        WindowType::Rectangular => vec![1.0; length],

        WindowType::Hanning => (0..length)
            .map(|n| {
                let angle = 2.0 * PI * n as f64 / denom;
                0.5 * (1.0 - angle.cos())
            })
            .collect(),

        WindowType::Hamming => (0..length)
            .map(|n| {
                let angle = 2.0 * PI * n as f64 / denom;
                0.54 - 0.46 * angle.cos()
            })
            .collect(),
    }
}

/// Mean window coefficient (coherent gain)
///
/// A full-scale tone analysed through this window peaks at roughly
/// `coherent_gain * N / 2` in linear magnitude. Returns 0.0 for an empty window.
pub fn coherent_gain(window_type: WindowType, length: usize) -> f64 {
    if length == 0 {
        return 0.0;
    }
    generate_window(window_type, length).iter().sum::<f64>() / length as f64
}
