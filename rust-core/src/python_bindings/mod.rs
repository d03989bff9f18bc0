//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::DspError;

mod signal_bindings;
mod spectrum_bindings;

impl From<DspError> for PyErr {
    fn from(err: DspError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn spectrum_lab(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<signal_bindings::PySignalGenerator>()?;
    m.add_class::<spectrum_bindings::PySpectrumEngine>()?;

    // Add WindowType enum
    m.add_class::<spectrum_bindings::PyWindowType>()?;

    m.add_function(wrap_pyfunction!(spectrum_bindings::apply_window, m)?)?;

    Ok(())
}
