//! FFT and convolution on split real/imaginary slices.

use nc_core::Result;
use nc_math::{signal as sig, Vector};

/// Forward DFT of `real + i·imag`; returns `(real, imag)` of the spectrum.
pub fn fft(real: &[f64], imag: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    let (re, im) = sig::fft(&Vector::from_slice(real), &Vector::from_slice(imag))?;
    Ok((re.into_vec(), im.into_vec()))
}

/// Inverse DFT with `1/n` scaling.
pub fn ifft(real: &[f64], imag: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    let (re, im) = sig::ifft(&Vector::from_slice(real), &Vector::from_slice(imag))?;
    Ok((re.into_vec(), im.into_vec()))
}

/// Full linear convolution of `signal` with `kernel`.
pub fn convolve(signal: &[f64], kernel: &[f64]) -> Result<Vec<f64>> {
    sig::convolve(&Vector::from_slice(signal), &Vector::from_slice(kernel)).map(Vec::from)
}
