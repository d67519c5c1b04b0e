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

/// The **Paul wavelet** of integer order `m`, an analytic wavelet with
/// polynomial time decay and sharp time localization.
#[derive(Debug, Copy, Clone)]
pub struct Paul<T> {
    order: usize,
    norm_time: T,
    norm_freq: T,
}

fn factorial(n: usize) -> f64 {
    (1..=n).map(|v| v as f64).product()
}

impl<T: Sample> Paul<T>
where
    f64: AsPrimitive<T>,
{
    /// Creates a Paul wavelet of the given order (`m >= 1`). Order 4 is the
    /// conventional analysis default.
    pub fn new(order: usize) -> Self {
        let order = order.max(1);
        let m = order as f64;
        let two_pow_m = (2.0f64).powi(order as i32);
        let norm_time = two_pow_m * factorial(order)
            / (std::f64::consts::PI * factorial(2 * order)).sqrt();
        let norm_freq =
            two_pow_m / (m * factorial(2 * order - 1)).sqrt() * std::f64::consts::TAU.sqrt();
        Self {
            order,
            norm_time: norm_time.as_(),
            norm_freq: norm_freq.as_(),
        }
    }
}

impl<T: Sample> Default for Paul<T>
where
    f64: AsPrimitive<T>,
{
    fn default() -> Self {
        Self::new(4)
    }
}

impl<T: Sample> ContinuousWavelet<T> for Paul<T>
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
{
    fn psi(&self, t: T, scale: T, translation: T) -> Complex<T> {
        let u = (t - translation) / scale;
        // i^m * (1 - iu)^-(m+1) in polar form.
        let r = T::one().hypot(u);
        let theta = (-u).atan2(T::one());
        let mp1: T = (self.order + 1).as_();
        let magnitude = self.norm_time * r.pow(-mp1) / scale.sqrt();
        let half_pi = T::PI * 0.5f64.as_();
        let phase = half_pi * self.order.as_() - mp1 * theta;
        let (sin, cos) = phase.sincos();
        Complex::new(magnitude * cos, magnitude * sin)
    }

    fn psi_hat(&self, omega: T, scale: T, translation: T) -> Complex<T> {
        let sw = scale * omega;
        if sw <= T::zero() {
            return Complex::new(T::zero(), T::zero());
        }
        let m: T = self.order.as_();
        let magnitude = self.norm_freq * scale.sqrt() * sw.pow(m) * (-sw).exp();
        let (sin, cos) = (-(omega * translation)).sincos();
        Complex::new(magnitude * cos, magnitude * sin)
    }

    fn effective_support(&self) -> (T, T) {
        ((-10.0f64).as_(), 10.0f64.as_())
    }

    fn center_frequency(&self) -> T {
        // (2m + 1) / (4*pi)
        (2 * self.order + 1).as_() * T::FRAC_1_PI * 0.25f64.as_()
    }

    fn admissibility_constant(&self) -> T {
        admissibility_by_quadrature(self, 48.0f64.as_(), 8192)
    }

    fn name(&self) -> &'static str {
        "paul"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_form_is_analytic() {
        let w: Paul<f64> = Paul::default();
        assert_eq!(w.psi_hat(-2.0, 1.0, 0.0).re, 0.0);
        assert!(w.psi_hat(4.0, 1.0, 0.0).re > 0.0);
    }

    #[test]
    fn time_decay_is_polynomial() {
        let w: Paul<f64> = Paul::default();
        let near = w.psi(0.0, 1.0, 0.0);
        let far = w.psi(10.0, 1.0, 0.0);
        let near_mag = near.re.hypot(near.im);
        let far_mag = far.re.hypot(far.im);
        assert!(near_mag > 100.0 * far_mag);
    }

    #[test]
    fn admissibility_is_positive_and_finite() {
        let w: Paul<f64> = Paul::default();
        let c = w.admissibility_constant();
        assert!(c.is_finite());
        assert!(c > 0.0);
    }
}
