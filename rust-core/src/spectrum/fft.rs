//! FFT engine using realfft for real-valued signals
//!
//! Drop-in replacement for the direct transform when throughput matters

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

use super::dft::{check_frame_len, SpectralTransform};
use crate::error::{DspError, Result};

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor (planned once, shared across calls)
    r2c: Arc<dyn RealToComplex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples)
    pub fn new(fft_size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        Self { fft_size, r2c }
    }
}

impl SpectralTransform for FftEngine {
    fn size(&self) -> usize {
        self.fft_size
    }

    fn forward(&self, frame: &[f64]) -> Result<Vec<Complex<f64>>> {
        check_frame_len(frame, self.fft_size)?;

        // realfft scrambles its input, so work on per-call buffers
        let mut input = self.r2c.make_input_vec();
        input.copy_from_slice(frame);
        let mut output = self.r2c.make_output_vec();

        self.r2c
            .process(&mut input, &mut output)
            .map_err(|e| DspError::Transform(e.to_string()))?;

        // Drop the Nyquist bin (and anything past N/2)
        output.truncate(self.fft_size / 2);
        Ok(output)
    }
}
