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
use num_traits::{AsPrimitive, Zero};

/// The analytic **Morlet wavelet**, a complex sinusoid under a Gaussian
/// envelope.
///
/// The frequency form suppresses non-positive frequencies, which keeps the
/// transform coefficients analytic for real input. Both forms carry the
/// energy normalization (`1/sqrt(scale)` in time, `sqrt(scale)` in
/// frequency) so direct and spectral convolution agree.
#[derive(Debug, Copy, Clone)]
pub struct Morlet<T> {
    /// The center angular frequency (omega_0) of the complex exponential.
    omega0: T,
    norm_time: T,
    norm_freq: T,
}

impl<T: Sample> Morlet<T>
where
    f64: AsPrimitive<T>,
{
    /// Creates a Morlet wavelet with the given center angular frequency.
    ///
    /// The constructor pre-calculates the `pi^(-1/4)` time normalization and
    /// its `sqrt(2*pi)`-scaled frequency companion.
    pub fn new(omega0: T) -> Self {
        let norm_time = T::FRAC_1_PI.pow(0.25f64.as_());
        let norm_freq = T::TWO_PI.sqrt() * norm_time;
        Self {
            omega0,
            norm_time,
            norm_freq,
        }
    }
}

impl<T: Sample> Default for Morlet<T>
where
    f64: AsPrimitive<T>,
{
    /// The conventional center frequency of 6, which keeps the correction
    /// term for the zero-mean condition below double-precision noise.
    fn default() -> Self {
        Self::new(6.0f64.as_())
    }
}

impl<T: Sample> ContinuousWavelet<T> for Morlet<T>
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
{
    fn psi(&self, t: T, scale: T, translation: T) -> Complex<T> {
        let u = (t - translation) / scale;
        let half: T = 0.5f64.as_();
        let envelope = self.norm_time * (-(u * u) * half).exp() / scale.sqrt();
        let (sin, cos) = (self.omega0 * u).sincos();
        Complex::new(envelope * cos, envelope * sin)
    }

    fn psi_hat(&self, omega: T, scale: T, translation: T) -> Complex<T> {
        let sw = scale * omega;
        if sw <= T::zero() {
            return Complex::new(T::zero(), T::zero());
        }
        let half: T = 0.5f64.as_();
        let d = sw - self.omega0;
        let magnitude = self.norm_freq * scale.sqrt() * (-(d * d) * half).exp();
        let (sin, cos) = (-(omega * translation)).sincos();
        Complex::new(magnitude * cos, magnitude * sin)
    }

    fn effective_support(&self) -> (T, T) {
        ((-5.0f64).as_(), 5.0f64.as_())
    }

    fn center_frequency(&self) -> T {
        self.omega0 * T::FRAC_1_PI * 0.5f64.as_()
    }

    fn admissibility_constant(&self) -> T {
        admissibility_by_quadrature(self, self.omega0 + 10.0f64.as_(), 4096)
    }

    fn name(&self) -> &'static str {
        "morlet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_envelope_peaks_at_center() {
        let w: Morlet<f64> = Morlet::default();
        let peak = w.psi_hat(6.0, 1.0, 0.0).re;
        assert!(peak > w.psi_hat(5.0, 1.0, 0.0).re);
        assert!(peak > w.psi_hat(7.0, 1.0, 0.0).re);
        assert_eq!(w.psi_hat(-1.0, 1.0, 0.0).re, 0.0);
    }

    #[test]
    fn admissibility_is_positive_and_finite() {
        let w: Morlet<f64> = Morlet::default();
        let c = w.admissibility_constant();
        assert!(c.is_finite());
        assert!(c > 0.0);
    }

    #[test]
    fn time_form_is_unit_energy() {
        let w: Morlet<f64> = Morlet::default();
        let dt = 1e-3;
        let mut energy = 0.0;
        let mut t = -10.0;
        while t < 10.0 {
            let v = w.psi(t, 1.0, 0.0);
            energy += (v.re * v.re + v.im * v.im) * dt;
            t += dt;
        }
        assert!((energy - 1.0).abs() < 1e-3, "energy {energy}");
    }
}
