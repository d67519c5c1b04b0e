/*
 * // Copyright (c) Radzivon Bartoshyk 12/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::err::{OndetError, try_vec};
use crate::sample::Sample;
use num_complex::Complex;
use num_traits::{AsPrimitive, One, Zero};

/// One-dimensional FFT over complex sequences of any length.
///
/// Power-of-two lengths run through an in-place decimation-in-time
/// Cooley–Tukey pass; every other length is reduced to a power-of-two
/// convolution with Bluestein's chirp-z algorithm. The forward transform is
/// unnormalized, the inverse carries the `1/N` factor.
///
/// The engine is stateless and freely shareable between threads.
#[derive(Debug, Copy, Clone, Default)]
pub struct FftEngine {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum FftDirection {
    Forward,
    Inverse,
}

impl FftEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// Forward DFT of a complex sequence. Unnormalized.
    ///
    /// An empty input yields an empty spectrum; a single sample is returned
    /// as a copy.
    pub fn forward<T: Sample>(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, OndetError>
    where
        usize: AsPrimitive<T>,
    {
        self.run(input, FftDirection::Forward)
    }

    /// Inverse DFT of a complex spectrum, scaled by `1/N`.
    pub fn inverse<T: Sample>(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, OndetError>
    where
        usize: AsPrimitive<T>,
    {
        self.run(input, FftDirection::Inverse)
    }

    /// Forward DFT of a real signal, returned as the interleaved layout
    /// `[re0, im0, re1, im1, ...]` of length `2N`.
    pub fn forward_real<T: Sample>(&self, input: &[T]) -> Result<Vec<T>, OndetError>
    where
        usize: AsPrimitive<T>,
    {
        let mut buffer = try_vec![Complex::<T>::zero(); input.len()];
        for (dst, &src) in buffer.iter_mut().zip(input.iter()) {
            *dst = Complex::new(src, T::zero());
        }
        let spectrum = self.run(&buffer, FftDirection::Forward)?;
        let mut out = try_vec![T::zero(); 2 * input.len()];
        for (dst, src) in out.chunks_exact_mut(2).zip(spectrum.iter()) {
            dst[0] = src.re;
            dst[1] = src.im;
        }
        Ok(out)
    }

    /// Reconstructs a real signal from an interleaved spectrum produced by
    /// [`forward_real`](Self::forward_real). The interleaved length must be
    /// even.
    pub fn inverse_real<T: Sample>(&self, interleaved: &[T]) -> Result<Vec<T>, OndetError>
    where
        usize: AsPrimitive<T>,
    {
        if interleaved.len() % 2 != 0 {
            return Err(OndetError::InvalidArgument(format!(
                "FftEngine::inverse_real expects an even interleaved length but it was {}",
                interleaved.len()
            )));
        }
        let mut buffer = try_vec![Complex::<T>::zero(); interleaved.len() / 2];
        for (dst, src) in buffer.iter_mut().zip(interleaved.chunks_exact(2)) {
            *dst = Complex::new(src[0], src[1]);
        }
        let time = self.run(&buffer, FftDirection::Inverse)?;
        let mut out = try_vec![T::zero(); time.len()];
        for (dst, src) in out.iter_mut().zip(time.iter()) {
            *dst = src.re;
        }
        Ok(out)
    }

    fn run<T: Sample>(
        &self,
        input: &[Complex<T>],
        direction: FftDirection,
    ) -> Result<Vec<Complex<T>>, OndetError>
    where
        usize: AsPrimitive<T>,
    {
        let n = input.len();
        if n == 0 {
            return Ok(Vec::new());
        }
        let mut out = if n.is_power_of_two() {
            let mut data = try_vec![Complex::<T>::zero(); n];
            data.copy_from_slice(input);
            cooley_tukey(&mut data, direction);
            data
        } else {
            bluestein(input, direction)?
        };
        if direction == FftDirection::Inverse {
            let scale = T::one() / n.as_();
            for v in out.iter_mut() {
                *v = *v * scale;
            }
        }
        Ok(out)
    }
}

/// In-place radix-2 decimation-in-time pass. Unnormalized in both directions.
fn cooley_tukey<T: Sample>(data: &mut [Complex<T>], direction: FftDirection)
where
    usize: AsPrimitive<T>,
{
    let n = data.len();
    if n <= 1 {
        return;
    }
    // Bit-reversal permutation; the reversal width comes from the
    // leading-zero count of n.
    let shift = n.leading_zeros() + 1;
    for k in 0..n {
        let rev = k.reverse_bits() >> shift;
        if rev > k {
            data.swap(k, rev);
        }
    }
    let mut m = 2usize;
    while m <= n {
        let step = T::TWO_PI / m.as_();
        let angle = match direction {
            FftDirection::Forward => -step,
            FftDirection::Inverse => step,
        };
        let (sin, cos) = angle.sincos();
        let w_m = Complex::new(cos, sin);
        let half = m / 2;
        for chunk in data.chunks_exact_mut(m) {
            let mut w = Complex::new(T::one(), T::zero());
            for j in 0..half {
                let t = w * chunk[j + half];
                let u = chunk[j];
                chunk[j] = u + t;
                chunk[j + half] = u - t;
                w = w * w_m;
            }
        }
        m <<= 1;
    }
}

/// Bluestein's chirp-z reduction of an arbitrary-length DFT to a
/// power-of-two circular convolution.
fn bluestein<T: Sample>(
    input: &[Complex<T>],
    direction: FftDirection,
) -> Result<Vec<Complex<T>>, OndetError>
where
    usize: AsPrimitive<T>,
{
    let n = input.len();
    let m = (2 * n - 1).next_power_of_two();

    // chirp[k] = exp(+-i*pi*k^2/n); the exponent has period 2n, so k^2 is
    // reduced mod 2n in integer arithmetic before the sine evaluation.
    let mut chirp = try_vec![Complex::<T>::zero(); n];
    let modulus = 2 * n as u128;
    for (k, dst) in chirp.iter_mut().enumerate() {
        let sq = ((k as u128 * k as u128) % modulus) as usize;
        let base = T::PI * sq.as_() / n.as_();
        let angle = match direction {
            FftDirection::Forward => -base,
            FftDirection::Inverse => base,
        };
        let (sin, cos) = angle.sincos();
        *dst = Complex::new(cos, sin);
    }

    let mut a = try_vec![Complex::<T>::zero(); m];
    for (dst, (&x, &c)) in a.iter_mut().zip(input.iter().zip(chirp.iter())) {
        *dst = x * c;
    }
    let mut b = try_vec![Complex::<T>::zero(); m];
    b[0] = chirp[0].conj();
    for k in 1..n {
        let c = chirp[k].conj();
        b[k] = c;
        b[m - k] = c;
    }

    cooley_tukey(&mut a, FftDirection::Forward);
    cooley_tukey(&mut b, FftDirection::Forward);
    for (va, &vb) in a.iter_mut().zip(b.iter()) {
        *va = *va * vb;
    }
    cooley_tukey(&mut a, FftDirection::Inverse);

    // The internal passes are unnormalized; one 1/m covers them all.
    let scale = T::one() / m.as_();
    let mut out = try_vec![Complex::<T>::zero(); n];
    for (dst, (&v, &c)) in out.iter_mut().zip(a.iter().zip(chirp.iter())) {
        *dst = v * c * scale;
    }
    Ok(out)
}
