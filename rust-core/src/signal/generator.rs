//! Waveform generators producing time-domain buffers
//!
//! Every generator yields `floor(duration * sample_rate)` samples; a zero
//! duration or zero sample rate gives an empty (but valid) signal.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Immutable time-domain record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSignal {
    /// Sample amplitudes
    samples: Vec<f64>,

    /// Sample rate in Hz
    sample_rate: f64,

    /// Duration in seconds (as requested at generation time)
    duration_seconds: f64,

    /// Capture timestamp, informational only
    created_at: DateTime<Utc>,
}

impl TimeSignal {
    /// Wrap an existing buffer, deriving the duration from its length
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Self {
        let duration_seconds = if sample_rate > 0.0 {
            samples.len() as f64 / sample_rate
        } else {
            0.0
        };
        Self::with_duration(samples, sample_rate, duration_seconds)
    }

    fn with_duration(samples: Vec<f64>, sample_rate: f64, duration_seconds: f64) -> Self {
        Self {
            samples,
            sample_rate,
            duration_seconds,
            created_at: Utc::now(),
        }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consume the record and return its sample buffer
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

/// Number of samples for a duration: `floor(duration * sample_rate)`, never negative
pub(crate) fn sample_count(duration_seconds: f64, sample_rate: f64) -> usize {
    let n = (duration_seconds * sample_rate).floor();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Build a signal by evaluating `f(t)` at `t = i / sample_rate`
fn synthesize<F>(duration_seconds: f64, sample_rate: f64, f: F) -> TimeSignal
where
    F: Fn(f64) -> f64,
{
    let num_samples = sample_count(duration_seconds, sample_rate);
    let samples = (0..num_samples)
        .map(|i| f(i as f64 / sample_rate))
        .collect();

    TimeSignal::with_duration(samples, sample_rate, duration_seconds)
}

/// Single tone: `amplitude * sin(2π f t)`
pub fn create_sine_wave(
    frequency: f64,
    amplitude: f64,
    duration_seconds: f64,
    sample_rate: f64,
) -> TimeSignal {
    synthesize(duration_seconds, sample_rate, |t| {
        amplitude * (2.0 * PI * frequency * t).sin()
    })
}

/// Sum of sine tones
///
/// Amplitudes pair with frequencies by position; missing amplitudes default
/// to 1.0 and surplus amplitudes are ignored. The sum is not normalized and
/// may leave [-1, 1].
pub fn create_multi_tone(
    frequencies: &[f64],
    amplitudes: &[f64],
    duration_seconds: f64,
    sample_rate: f64,
) -> TimeSignal {
    let tones: Vec<(f64, f64)> = frequencies
        .iter()
        .enumerate()
        .map(|(i, &f)| (f, amplitudes.get(i).copied().unwrap_or(1.0)))
        .collect();

    synthesize(duration_seconds, sample_rate, |t| {
        tones
            .iter()
            .map(|&(f, a)| a * (2.0 * PI * f * t).sin())
            .sum()
    })
}

/// Uniform white noise in `[-amplitude, amplitude]`, drawn from the thread RNG
pub fn create_white_noise(amplitude: f64, duration_seconds: f64, sample_rate: f64) -> TimeSignal {
    create_white_noise_with(&mut rand::thread_rng(), amplitude, duration_seconds, sample_rate)
}

/// Uniform white noise drawn from a caller-supplied RNG
pub fn create_white_noise_with<R: Rng>(
    rng: &mut R,
    amplitude: f64,
    duration_seconds: f64,
    sample_rate: f64,
) -> TimeSignal {
    let num_samples = sample_count(duration_seconds, sample_rate);
    let samples = (0..num_samples)
        .map(|_| amplitude * rng.gen_range(-1.0..=1.0))
        .collect();

    TimeSignal::with_duration(samples, sample_rate, duration_seconds)
}

/// Instantaneous frequency of a linear sweep at time `t`
///
/// `start + (end - start) * t / duration`; a zero-length sweep stays at `start`.
pub fn chirp_instantaneous_frequency(
    start_freq: f64,
    end_freq: f64,
    duration_seconds: f64,
    t: f64,
) -> f64 {
    if duration_seconds == 0.0 {
        return start_freq;
    }
    start_freq + (end_freq - start_freq) * (t / duration_seconds)
}

/// Linear chirp: `sin(2π · f_inst(t) · t)`
///
/// The phase is the instantaneous frequency times t, not its integral, so
/// the perceived sweep runs faster than `f_inst` suggests.
pub fn create_chirp(
    start_freq: f64,
    end_freq: f64,
    duration_seconds: f64,
    sample_rate: f64,
) -> TimeSignal {
    synthesize(duration_seconds, sample_rate, |t| {
        let inst_freq = chirp_instantaneous_frequency(start_freq, end_freq, duration_seconds, t);
        (2.0 * PI * inst_freq * t).sin()
    })
}
