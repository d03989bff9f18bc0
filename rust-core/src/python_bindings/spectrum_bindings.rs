//! Python bindings for spectrum analysis

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::signal::TimeSignal;
use crate::spectrum::config::fft_size_from_f64;
use crate::spectrum::{self, DspConfig, SpectrumEngine, TransformKind};
use crate::windows::WindowType;

/// Window type enum exposed to Python
#[pyclass(name = "WindowType")]
#[derive(Clone)]
pub enum PyWindowType {
    Rectangular,
    Hanning,
    Hamming,
}

impl From<PyWindowType> for WindowType {
    fn from(py_win: PyWindowType) -> Self {
        match py_win {
            PyWindowType::Rectangular => WindowType::Rectangular,
            PyWindowType::Hanning => WindowType::Hanning,
            PyWindowType::Hamming => WindowType::Hamming,
        }
    }
}

/// Apply a window by name ("rectangular", "hanning", "hamming")
///
/// Raises:
///     ValueError: Unsupported window kind
#[pyfunction]
pub fn apply_window<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    window_type: &str,
) -> PyResult<&'py PyArray1<f64>> {
    let samples = signal.as_array().to_vec();
    let windowed = spectrum::apply_window_named(&samples, window_type)?;
    Ok(PyArray1::from_vec(py, windowed))
}

/// Spectrum engine exposed to Python
#[pyclass(name = "SpectrumEngine")]
pub struct PySpectrumEngine {
    engine: SpectrumEngine,
}

#[pymethods]
impl PySpectrumEngine {
    /// Create a new spectrum engine
    ///
    /// Args:
    ///     fft_size: Frame length (at least 2)
    ///     window_type: Window type for analysis
    ///     averaging_count: Reserved, has no effect
    ///     fast: Use the FFT backend instead of the direct transform
    ///
    /// Raises:
    ///     ValueError: fft_size is not an integer of at least 2
    #[new]
    #[pyo3(signature = (fft_size=2048, window_type=PyWindowType::Hanning, averaging_count=1, fast=false))]
    fn new(
        fft_size: f64,
        window_type: PyWindowType,
        averaging_count: usize,
        fast: bool,
    ) -> PyResult<Self> {
        let fft_size = fft_size_from_f64(fft_size)?;

        let transform = if fast {
            TransformKind::Fast
        } else {
            TransformKind::Direct
        };
        let config = DspConfig::new(fft_size, window_type.into())
            .with_averaging_count(averaging_count)
            .with_transform(transform);

        Ok(Self {
            engine: SpectrumEngine::new(config)?,
        })
    }

    /// Analyze a signal
    ///
    /// Args:
    ///     signal: Input samples as numpy array
    ///     sample_rate: Sample rate in Hz
    ///
    /// Returns:
    ///     (frequencies, magnitudes_db, bin_width_hz)
    fn process<'py>(
        &self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
        sample_rate: f64,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>, f64)> {
        let signal = TimeSignal::new(signal.as_array().to_vec(), sample_rate);
        let spectrum = self.engine.process_signal(&signal)?;

        Ok((
            PyArray1::from_slice(py, spectrum.frequencies()),
            PyArray1::from_slice(py, spectrum.magnitudes_db()),
            spectrum.bin_width_hz(),
        ))
    }

    /// Get number of frequency bins
    fn num_bins(&self) -> usize {
        self.engine.num_bins()
    }

    /// Get current FFT size
    fn get_fft_size(&self) -> usize {
        self.engine.config().fft_size
    }

    /// Get current window name
    fn get_window_type(&self) -> String {
        self.engine.config().window_type.to_string()
    }
}
