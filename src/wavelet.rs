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
use num_complex::Complex;
use num_traits::{AsPrimitive, One, Zero};

/// Filter-bank description of a discrete wavelet as consumed by the MODWT
/// engine.
///
/// Implementors expose the DWT-style decomposition and reconstruction
/// filters; the MODWT engine only reads the decomposition pair and rescales
/// it internally. Filters must have length >= 2.
pub trait DiscreteWavelet<T> {
    /// Low-pass (scaling) decomposition filter.
    fn scaling_dec(&self) -> &[T];
    /// High-pass (wavelet) decomposition filter.
    fn wavelet_dec(&self) -> &[T];
    /// Low-pass reconstruction filter.
    fn scaling_rec(&self) -> &[T];
    /// High-pass reconstruction filter.
    fn wavelet_rec(&self) -> &[T];
    /// Smallest power of two for which the orthogonal forward step is
    /// defined. Wavelet-packet collaborators key off this; MODWT does not.
    fn transform_wavelength(&self) -> usize;
    fn name(&self) -> &'static str;
}

/// Analytic description of a continuous wavelet as consumed by the CWT
/// engine.
pub trait ContinuousWavelet<T> {
    /// Time-domain wavelet `psi((t - translation) / scale)` including the
    /// `1/sqrt(scale)` energy normalization.
    fn psi(&self, t: T, scale: T, translation: T) -> Complex<T>;
    /// Frequency-domain wavelet evaluated at angular frequency `omega` for
    /// the given scale, including the `sqrt(scale)` factor and the
    /// translation phase ramp.
    fn psi_hat(&self, omega: T, scale: T, translation: T) -> Complex<T>;
    /// Interval outside which `|psi|` at unit scale is negligible; direct
    /// convolutions truncate their windows to it.
    fn effective_support(&self) -> (T, T);
    /// Center frequency in cycles per unit time at unit scale.
    fn center_frequency(&self) -> T;
    /// The admissibility integral over the positive half-axis; positive and
    /// finite for any wavelet that admits a reconstruction formula.
    fn admissibility_constant(&self) -> T;
    fn name(&self) -> &'static str;
}

/// Trapezoid quadrature of the admissibility integral at unit scale,
/// `int |psi_hat(w)|^2 / w dw` over `w > 0`.
///
/// The grid stops at `upper`, which implementors choose past the decay of
/// their frequency envelope.
pub(crate) fn admissibility_by_quadrature<T: Sample, W: ContinuousWavelet<T> + ?Sized>(
    wavelet: &W,
    upper: T,
    steps: usize,
) -> T
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
{
    let lower: T = 1e-6f64.as_();
    let dw = (upper - lower) / steps.as_();
    let half: T = 0.5f64.as_();
    let integrand = |w: T| {
        let v = wavelet.psi_hat(w, T::one(), T::zero());
        (v.re * v.re + v.im * v.im) / w
    };
    let mut acc = (integrand(lower) + integrand(upper)) * half;
    for i in 1..steps {
        acc += integrand(lower + dw * i.as_());
    }
    acc * dw
}
