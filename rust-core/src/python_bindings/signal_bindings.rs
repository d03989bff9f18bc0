//! Python bindings for test signal synthesis

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::signal::{self, SignalKind, SignalParams, TimeSignal};

fn to_numpy<'py>(py: Python<'py>, signal: TimeSignal) -> &'py PyArray1<f64> {
    PyArray1::from_vec(py, signal.into_samples())
}

/// Signal generator exposed to Python
#[pyclass(name = "SignalGenerator")]
pub struct PySignalGenerator {}

#[pymethods]
impl PySignalGenerator {
    /// Single sine tone
    ///
    /// Args:
    ///     frequency: Tone frequency in Hz
    ///     amplitude: Peak amplitude
    ///     duration: Duration in seconds
    ///     sample_rate: Sample rate in Hz
    ///
    /// Returns:
    ///     Samples as numpy array
    #[staticmethod]
    #[pyo3(signature = (frequency, amplitude=1.0, duration=1.0, sample_rate=44100.0))]
    fn sine<'py>(
        py: Python<'py>,
        frequency: f64,
        amplitude: f64,
        duration: f64,
        sample_rate: f64,
    ) -> &'py PyArray1<f64> {
        to_numpy(py, signal::create_sine_wave(frequency, amplitude, duration, sample_rate))
    }

    /// Sum of sine tones; missing amplitudes default to 1.0
    #[staticmethod]
    #[pyo3(signature = (frequencies, amplitudes=Vec::new(), duration=1.0, sample_rate=44100.0))]
    fn multitone<'py>(
        py: Python<'py>,
        frequencies: Vec<f64>,
        amplitudes: Vec<f64>,
        duration: f64,
        sample_rate: f64,
    ) -> &'py PyArray1<f64> {
        to_numpy(
            py,
            signal::create_multi_tone(&frequencies, &amplitudes, duration, sample_rate),
        )
    }

    /// Uniform white noise in [-amplitude, amplitude]
    #[staticmethod]
    #[pyo3(signature = (amplitude=1.0, duration=1.0, sample_rate=44100.0))]
    fn noise<'py>(
        py: Python<'py>,
        amplitude: f64,
        duration: f64,
        sample_rate: f64,
    ) -> &'py PyArray1<f64> {
        to_numpy(py, signal::create_white_noise(amplitude, duration, sample_rate))
    }

    /// Linear chirp from start_frequency to end_frequency
    #[staticmethod]
    #[pyo3(signature = (start_frequency, end_frequency, duration=1.0, sample_rate=44100.0))]
    fn chirp<'py>(
        py: Python<'py>,
        start_frequency: f64,
        end_frequency: f64,
        duration: f64,
        sample_rate: f64,
    ) -> &'py PyArray1<f64> {
        to_numpy(
            py,
            signal::create_chirp(start_frequency, end_frequency, duration, sample_rate),
        )
    }

    /// Generate by kind name ("sine", "multitone", "noise", "chirp")
    ///
    /// Raises:
    ///     ValueError: Unknown kind or out-of-range parameters
    #[staticmethod]
    #[pyo3(signature = (
        kind,
        frequency=1000.0,
        amplitude=1.0,
        duration=1.0,
        sample_rate=44100.0,
        tone_frequencies=Vec::new(),
        tone_amplitudes=Vec::new(),
        end_frequency=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn generate<'py>(
        py: Python<'py>,
        kind: &str,
        frequency: f64,
        amplitude: f64,
        duration: f64,
        sample_rate: f64,
        tone_frequencies: Vec<f64>,
        tone_amplitudes: Vec<f64>,
        end_frequency: Option<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let params = SignalParams {
            kind: kind.parse::<SignalKind>()?,
            frequency,
            amplitude,
            duration_seconds: duration,
            sample_rate,
            tone_frequencies,
            tone_amplitudes,
            end_frequency,
        };

        Ok(to_numpy(py, signal::generate(&params)?))
    }
}
