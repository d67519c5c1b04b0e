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
use crate::sample::Sample;
use crate::wavelet::{ContinuousWavelet, admissibility_by_quadrature};
use num_complex::Complex;
use num_traits::{AsPrimitive, One, Zero};

/// The **Mexican hat** (Ricker) wavelet, the negated second derivative of a
/// Gaussian. Real-valued and symmetric.
#[derive(Debug, Copy, Clone)]
pub struct MexicanHat<T> {
    norm_time: T,
    norm_freq: T,
}

impl<T: Sample> MexicanHat<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new() -> Self {
        // 2 / (sqrt(3) * pi^(1/4)) puts the time form at unit energy.
        let norm_time: T =
            2.0f64.as_() / (3.0f64.as_().sqrt() * T::PI.pow(0.25f64.as_()));
        let norm_freq = T::TWO_PI.sqrt() * norm_time;
        Self {
            norm_time,
            norm_freq,
        }
    }
}

impl<T: Sample> Default for MexicanHat<T>
where
    f64: AsPrimitive<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> ContinuousWavelet<T> for MexicanHat<T>
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
{
    fn psi(&self, t: T, scale: T, translation: T) -> Complex<T> {
        let u = (t - translation) / scale;
        let half: T = 0.5f64.as_();
        let u2 = u * u;
        let amplitude =
            self.norm_time * (T::one() - u2) * (-u2 * half).exp() / scale.sqrt();
        Complex::new(amplitude, T::zero())
    }

    fn psi_hat(&self, omega: T, scale: T, translation: T) -> Complex<T> {
        let sw = scale * omega;
        let half: T = 0.5f64.as_();
        let sw2 = sw * sw;
        let magnitude = self.norm_freq * scale.sqrt() * sw2 * (-sw2 * half).exp();
        let (sin, cos) = (-(omega * translation)).sincos();
        Complex::new(magnitude * cos, magnitude * sin)
    }

    fn effective_support(&self) -> (T, T) {
        ((-5.0f64).as_(), 5.0f64.as_())
    }

    fn center_frequency(&self) -> T {
        // sqrt(m + 1/2) / (2*pi) for the second-derivative-of-Gaussian family.
        2.5f64.as_().sqrt() * T::FRAC_1_PI * 0.5f64.as_()
    }

    fn admissibility_constant(&self) -> T {
        admissibility_by_quadrature(self, 16.0f64.as_(), 4096)
    }

    fn name(&self) -> &'static str {
        "mexican_hat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_form_is_real_and_peaks_at_origin() {
        let w: MexicanHat<f64> = MexicanHat::new();
        let center = w.psi(0.0, 1.0, 0.0);
        assert_eq!(center.im, 0.0);
        assert!(center.re > w.psi(1.5, 1.0, 0.0).re);
        // Zero crossings at |u| = 1.
        assert!(w.psi(1.0, 1.0, 0.0).re.abs() < 1e-12);
    }

    #[test]
    fn admissibility_is_positive_and_finite() {
        let w: MexicanHat<f64> = MexicanHat::new();
        let c = w.admissibility_constant();
        assert!(c.is_finite());
        assert!(c > 0.0);
    }
}
