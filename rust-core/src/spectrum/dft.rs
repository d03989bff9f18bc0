//! Direct discrete Fourier transform and the transform backend trait

use num_complex::Complex;
use std::f64::consts::PI;

use crate::error::{DspError, Result};

/// Forward transform of a real frame, keeping only the first half of the bins
pub trait SpectralTransform: Send + Sync {
    /// Frame length N
    fn size(&self) -> usize;

    /// Complex bins X[k] for k = 0..N/2, with X[k] = Σ x[n]·e^(-2πikn/N)
    fn forward(&self, frame: &[f64]) -> Result<Vec<Complex<f64>>>;
}

/// O(N²) direct summation
pub struct DirectDft {
    size: usize,
}

impl DirectDft {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

pub(crate) fn check_frame_len(frame: &[f64], size: usize) -> Result<()> {
    if frame.len() != size {
        return Err(DspError::Transform(format!(
            "frame has {} samples, expected {}",
            frame.len(),
            size
        )));
    }
    Ok(())
}

impl SpectralTransform for DirectDft {
    fn size(&self) -> usize {
        self.size
    }

    fn forward(&self, frame: &[f64]) -> Result<Vec<Complex<f64>>> {
        check_frame_len(frame, self.size)?;

        let n_total = self.size as f64;
        let bins = (0..self.size / 2)
            .map(|k| {
                frame
                    .iter()
                    .enumerate()
                    .fold(Complex::new(0.0, 0.0), |acc, (n, &x)| {
                        // k·n mod N keeps the angle in [0, 2π)
                        let angle = -2.0 * PI * ((k * n) % self.size) as f64 / n_total;
                        acc + Complex::new(x * angle.cos(), x * angle.sin())
                    })
            })
            .collect();

        Ok(bins)
    }
}
