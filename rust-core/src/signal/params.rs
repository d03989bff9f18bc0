//! Signal parameters collected by a host UI
//!
//! One immutable value per generation request, dispatched to the matching generator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::generator::{
    create_chirp, create_multi_tone, create_sine_wave, create_white_noise, TimeSignal,
};
use crate::error::{DspError, Result};

/// Signal kinds offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SignalKind {
    #[default]
    Sine,
    MultiTone,
    Noise,
    Chirp,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Sine,
        SignalKind::MultiTone,
        SignalKind::Noise,
        SignalKind::Chirp,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SignalKind::Sine => "sine",
            SignalKind::MultiTone => "multitone",
            SignalKind::Noise => "noise",
            SignalKind::Chirp => "chirp",
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignalKind {
    type Err = DspError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SignalKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DspError::UnsupportedSignalKind(s.to_string()))
    }
}

impl TryFrom<String> for SignalKind {
    type Error = DspError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SignalKind> for String {
    fn from(kind: SignalKind) -> Self {
        kind.name().to_string()
    }
}

/// Generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalParams {
    /// Waveform to synthesize
    pub kind: SignalKind,

    /// Base frequency in Hz (start frequency for a chirp)
    pub frequency: f64,

    /// Peak amplitude (unitless, not clamped)
    pub amplitude: f64,

    /// Duration in seconds
    pub duration_seconds: f64,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Multi-tone component frequencies; empty means a single tone at `frequency`
    pub tone_frequencies: Vec<f64>,

    /// Multi-tone component amplitudes, matched to `tone_frequencies` by position
    pub tone_amplitudes: Vec<f64>,

    /// Chirp end frequency in Hz
    pub end_frequency: Option<f64>,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            kind: SignalKind::Sine,
            frequency: 1000.0,
            amplitude: 1.0,
            duration_seconds: 1.0,
            sample_rate: 44100.0,
            tone_frequencies: Vec::new(),
            tone_amplitudes: Vec::new(),
            end_frequency: None,
        }
    }
}

impl SignalParams {
    /// Check the host-facing ranges: duration ≥ 0, sample rate ≥ 0,
    /// base frequency > 0 for tonal kinds, multi-tone components with
    /// positive frequencies and finite amplitudes, and a chirp end frequency.
    pub fn validate(&self) -> Result<()> {
        if !self.duration_seconds.is_finite() || self.duration_seconds < 0.0 {
            return Err(DspError::InvalidSignal(format!(
                "duration must be a non-negative number of seconds, got {}",
                self.duration_seconds
            )));
        }
        if !self.sample_rate.is_finite() || self.sample_rate < 0.0 {
            return Err(DspError::InvalidSignal(format!(
                "sample rate must be non-negative, got {}",
                self.sample_rate
            )));
        }
        if !self.amplitude.is_finite() {
            return Err(DspError::InvalidSignal(format!(
                "amplitude must be finite, got {}",
                self.amplitude
            )));
        }

        let uses_base_frequency = match self.kind {
            SignalKind::Sine | SignalKind::Chirp => true,
            SignalKind::MultiTone => self.tone_frequencies.is_empty(),
            SignalKind::Noise => false,
        };
        if uses_base_frequency && !(self.frequency > 0.0 && self.frequency.is_finite()) {
            return Err(DspError::InvalidSignal(format!(
                "frequency must be positive, got {}",
                self.frequency
            )));
        }

        if self.kind == SignalKind::MultiTone {
            if let Some(f) = self
                .tone_frequencies
                .iter()
                .find(|f| !(**f > 0.0 && f.is_finite()))
            {
                return Err(DspError::InvalidSignal(format!(
                    "tone frequencies must be positive, got {}",
                    f
                )));
            }
            if let Some(a) = self.tone_amplitudes.iter().find(|a| !a.is_finite()) {
                return Err(DspError::InvalidSignal(format!(
                    "tone amplitudes must be finite, got {}",
                    a
                )));
            }
        }

        if self.kind == SignalKind::Chirp {
            match self.end_frequency {
                Some(f) if f.is_finite() => {}
                other => {
                    return Err(DspError::InvalidSignal(format!(
                        "chirp needs a finite end frequency, got {:?}",
                        other
                    )))
                }
            }
        }

        Ok(())
    }
}

/// Synthesize the signal described by `params`
pub fn generate(params: &SignalParams) -> Result<TimeSignal> {
    params.validate()?;

    let signal = match params.kind {
        SignalKind::Sine => create_sine_wave(
            params.frequency,
            params.amplitude,
            params.duration_seconds,
            params.sample_rate,
        ),
        SignalKind::MultiTone => {
            if params.tone_frequencies.is_empty() {
                create_multi_tone(
                    &[params.frequency],
                    &[params.amplitude],
                    params.duration_seconds,
                    params.sample_rate,
                )
            } else {
                create_multi_tone(
                    &params.tone_frequencies,
                    &params.tone_amplitudes,
                    params.duration_seconds,
                    params.sample_rate,
                )
            }
        }
        SignalKind::Noise => create_white_noise(
            params.amplitude,
            params.duration_seconds,
            params.sample_rate,
        ),
        SignalKind::Chirp => create_chirp(
            params.frequency,
            params.end_frequency.unwrap_or(params.frequency),
            params.duration_seconds,
            params.sample_rate,
        ),
    };

    log::debug!(
        "Generated {} signal: {} samples at {} Hz",
        params.kind,
        signal.len(),
        params.sample_rate
    );

    Ok(signal)
}
