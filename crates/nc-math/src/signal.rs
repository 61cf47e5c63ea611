//! Discrete Fourier transform and linear convolution.
//!
//! The transform works on split real/imaginary vectors. Power-of-two lengths
//! run an iterative radix-2 Cooley-Tukey pass; every other length goes
//! through Bluestein's chirp-z reformulation, which evaluates the exact
//! length-`n` DFT through a power-of-two convolution. The forward transform
//! is unscaled, the inverse carries the `1/n` factor.

use crate::complex::Complex;
use crate::vector::Vector;
use nc_core::{ensure, errors::Result, Real};
use num_complex::Complex64;
use std::f64::consts::PI;

// ── Internal helpers ──────────────────────────────────────────────────────────

/// In-place bit-reversal permutation.
fn bit_reverse_permutation(buf: &mut [Complex64]) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    let bits = n.trailing_zeros();
    if bits == 0 {
        return;
    }
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            buf.swap(i, j);
        }
    }
}

/// In-place forward radix-2 DIT FFT; `buf.len()` must be a power of two.
fn fft_radix2(buf: &mut [Complex64]) {
    let n = buf.len();
    if n <= 1 {
        return;
    }
    bit_reverse_permutation(buf);

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let step = -PI / half as Real;
        for start in (0..n).step_by(len) {
            for k in 0..half {
                let w = Complex64::from_polar(1.0, step * k as Real);
                let even = start + k;
                let odd = even + half;
                let t = w * buf[odd];
                buf[odd] = buf[even] - t;
                buf[even] += t;
            }
        }
        len *= 2;
    }
}

/// Forward DFT of arbitrary length via Bluestein's algorithm.
fn fft_bluestein(buf: &mut [Complex64]) {
    let n = buf.len();
    let m = (2 * n - 1).next_power_of_two();

    // chirp w_k = exp(-iπk²/n); k² is reduced mod 2n to keep the angle small
    let modulus = 2 * n as u128;
    let chirp: Vec<Complex64> = (0..n)
        .map(|k| {
            let k2 = (k as u128 * k as u128) % modulus;
            Complex64::from_polar(1.0, -PI * k2 as Real / n as Real)
        })
        .collect();

    let mut a = vec![Complex64::new(0.0, 0.0); m];
    for (dst, (x, w)) in a.iter_mut().zip(buf.iter().zip(&chirp)) {
        *dst = x * w;
    }
    let mut b = vec![Complex64::new(0.0, 0.0); m];
    b[0] = chirp[0].conj();
    for k in 1..n {
        let c = chirp[k].conj();
        b[k] = c;
        b[m - k] = c;
    }

    fft_radix2(&mut a);
    fft_radix2(&mut b);
    for (x, y) in a.iter_mut().zip(&b) {
        *x *= y;
    }
    inverse_in_place(&mut a);

    for (dst, (conv, w)) in buf.iter_mut().zip(a.iter().zip(&chirp)) {
        *dst = conv * w;
    }
}

/// Forward DFT in place, any length.
fn forward_in_place(buf: &mut [Complex64]) {
    let n = buf.len();
    if n <= 1 {
        return;
    }
    if n.is_power_of_two() {
        fft_radix2(buf);
    } else {
        log::trace!("fft length {n} is not a power of two, using Bluestein");
        fft_bluestein(buf);
    }
}

/// Inverse DFT in place with `1/n` scaling: `conj(F(conj(x))) / n`.
fn inverse_in_place(buf: &mut [Complex64]) {
    let n = buf.len();
    if n == 0 {
        return;
    }
    buf.iter_mut().for_each(|z| *z = z.conj());
    forward_in_place(buf);
    let scale = 1.0 / n as Real;
    buf.iter_mut().for_each(|z| *z = z.conj() * scale);
}

fn pack(real: &Vector, imag: &Vector) -> Result<Vec<Complex64>> {
    ensure!(
        real.len() == imag.len(),
        DimensionMismatch,
        "real part has length {} but imaginary part has length {}",
        real.len(),
        imag.len()
    );
    Ok(real
        .iter()
        .zip(imag.iter())
        .map(|(&re, &im)| Complex64::new(re, im))
        .collect())
}

fn unpack(buf: &[Complex64]) -> (Vector, Vector) {
    (
        buf.iter().map(|z| z.re).collect(),
        buf.iter().map(|z| z.im).collect(),
    )
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Forward discrete Fourier transform
/// `X_k = Σ_j x_j · e^{-2πi·jk/n}` of the complex signal `real + i·imag`.
///
/// Returns the real and imaginary parts of the spectrum, each of the input
/// length. Fails with
/// [`Error::DimensionMismatch`](nc_core::Error::DimensionMismatch) when the
/// two parts differ in length; an empty signal gives an empty spectrum.
pub fn fft(real: &Vector, imag: &Vector) -> Result<(Vector, Vector)> {
    let mut buf = pack(real, imag)?;
    forward_in_place(&mut buf);
    Ok(unpack(&buf))
}

/// Inverse transform with `1/n` scaling, so that `ifft(fft(x)) ≈ x`.
pub fn ifft(real: &Vector, imag: &Vector) -> Result<(Vector, Vector)> {
    let mut buf = pack(real, imag)?;
    inverse_in_place(&mut buf);
    Ok(unpack(&buf))
}

/// Forward transform of a slice of [`Complex`] values.
pub fn fft_complex(signal: &[Complex]) -> Vec<Complex> {
    let mut buf: Vec<Complex64> = signal.iter().map(|&z| z.into()).collect();
    forward_in_place(&mut buf);
    buf.into_iter().map(Complex::from).collect()
}

/// Full linear convolution `(a ∗ b)_k = Σ_i a_i · b_{k−i}` of length
/// `a.len() + b.len() − 1`.
///
/// Computed directly in `O(n·m)`. Fails with
/// [`Error::EmptyInput`](nc_core::Error::EmptyInput) if either input is
/// empty.
pub fn convolve(a: &Vector, b: &Vector) -> Result<Vector> {
    ensure!(
        !a.is_empty() && !b.is_empty(),
        EmptyInput,
        "convolution needs two non-empty signals, got lengths {} and {}",
        a.len(),
        b.len()
    );
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    Ok(Vector::new(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nc_core::Error;

    fn naive_dft(re: &[Real], im: &[Real]) -> (Vec<Real>, Vec<Real>) {
        let n = re.len();
        let mut out_re = vec![0.0; n];
        let mut out_im = vec![0.0; n];
        for k in 0..n {
            for j in 0..n {
                let angle = -2.0 * PI * (j * k) as Real / n as Real;
                let (s, c) = angle.sin_cos();
                out_re[k] += re[j] * c - im[j] * s;
                out_im[k] += re[j] * s + im[j] * c;
            }
        }
        (out_re, out_im)
    }

    fn v(data: &[Real]) -> Vector {
        Vector::from_slice(data)
    }

    #[test]
    fn impulse_has_flat_spectrum() {
        let (re, im) = fft(&v(&[1.0, 0.0, 0.0, 0.0]), &Vector::zeros(4)).unwrap();
        for k in 0..4 {
            assert_abs_diff_eq!(re[k], 1.0, epsilon = 1e-15);
            assert_abs_diff_eq!(im[k], 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn four_point_transform() {
        // [1, 2, 3, 4] -> [10, -2+2i, -2, -2-2i]
        let (re, im) = fft(&v(&[1.0, 2.0, 3.0, 4.0]), &Vector::zeros(4)).unwrap();
        let expected = [(10.0, 0.0), (-2.0, 2.0), (-2.0, 0.0), (-2.0, -2.0)];
        for (k, (er, ei)) in expected.iter().enumerate() {
            assert_abs_diff_eq!(re[k], *er, epsilon = 1e-12);
            assert_abs_diff_eq!(im[k], *ei, epsilon = 1e-12);
        }
    }

    #[test]
    fn arbitrary_lengths_match_naive_dft() {
        for n in [2usize, 3, 5, 6, 7, 12, 16, 31] {
            let re: Vec<Real> = (0..n).map(|i| (i as Real * 0.7).sin() + 0.1 * i as Real).collect();
            let im: Vec<Real> = (0..n).map(|i| (i as Real * 1.3).cos()).collect();
            let (got_re, got_im) = fft(&v(&re), &v(&im)).unwrap();
            let (exp_re, exp_im) = naive_dft(&re, &im);
            for k in 0..n {
                assert_abs_diff_eq!(got_re[k], exp_re[k], epsilon = 1e-9);
                assert_abs_diff_eq!(got_im[k], exp_im[k], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn inverse_round_trip() {
        for n in [1usize, 5, 8, 9] {
            let re: Vec<Real> = (0..n).map(|i| i as Real - 2.0).collect();
            let im: Vec<Real> = (0..n).map(|i| 0.5 * i as Real).collect();
            let (fr, fi) = fft(&v(&re), &v(&im)).unwrap();
            let (br, bi) = ifft(&fr, &fi).unwrap();
            for k in 0..n {
                assert_abs_diff_eq!(br[k], re[k], epsilon = 1e-10);
                assert_abs_diff_eq!(bi[k], im[k], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn degenerate_lengths() {
        let (re, im) = fft(&Vector::zeros(0), &Vector::zeros(0)).unwrap();
        assert!(re.is_empty() && im.is_empty());
        let (re, im) = fft(&v(&[3.5]), &v(&[-1.0])).unwrap();
        assert_eq!((re[0], im[0]), (3.5, -1.0));
        assert!(matches!(
            fft(&Vector::zeros(3), &Vector::zeros(2)),
            Err(Error::DimensionMismatch(_))
        ));
        assert!(matches!(
            ifft(&Vector::zeros(1), &Vector::zeros(2)),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn complex_slice_transform() {
        let out = fft_complex(&[Complex::new(1.0, 0.0), Complex::new(0.0, 1.0)]);
        assert_abs_diff_eq!(out[0].re(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(out[0].im(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(out[1].re(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(out[1].im(), -1.0, epsilon = 1e-15);
    }

    #[test]
    fn convolution() {
        let c = convolve(&v(&[1.0, 2.0, 3.0]), &v(&[0.0, 1.0, 0.5])).unwrap();
        assert_eq!(c.to_vec(), vec![0.0, 1.0, 2.5, 4.0, 1.5]);
        let c = convolve(&v(&[2.0]), &v(&[1.0, -1.0])).unwrap();
        assert_eq!(c.to_vec(), vec![2.0, -2.0]);
        assert!(matches!(
            convolve(&Vector::zeros(0), &v(&[1.0])),
            Err(Error::EmptyInput(_))
        ));
    }
}
