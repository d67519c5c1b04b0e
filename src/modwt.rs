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
use crate::fft::FftEngine;
use crate::filter_bank::FilterBank;
use crate::mla::fmla;
use crate::sample::Sample;
use crate::wavelet::DiscreteWavelet;
use num_complex::Complex;
use num_traits::{AsPrimitive, Zero};
use std::sync::Arc;

/// Deepest decomposition level any signal length may request.
pub const MAX_SUPPORTED_LEVEL: usize = 13;

const DEFAULT_FFT_THRESHOLD: usize = 4096;

/// How the engine evaluates its circular convolutions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConvolutionMethod {
    /// Switch to the spectral path once `signal_len * filter_len` passes the
    /// engine's threshold.
    Auto,
    /// Always sum the circular convolution directly.
    Direct,
    /// Always convolve through the FFT.
    Fft,
}

/// Maximal Overlap Discrete Wavelet Transform over real signals.
///
/// The decomposition is redundant and shift-invariant: every level emits a
/// full-length coefficient row on the input's time axis, and
/// `inverse(forward(x))` reconstructs `x` to within double-precision noise.
/// Upsampled per-level filters are derived once and cached; both the
/// decomposition and the adjoint-based reconstruction can run either as
/// direct summation or as an FFT convolution, with [`ConvolutionMethod`]
/// selecting the strategy.
///
/// The engine is pure: concurrent `forward`/`inverse` calls on a shared
/// instance are safe as long as the wavelet and configuration are not
/// swapped at the same time.
pub struct ModwtEngine<T> {
    wavelet: Arc<dyn DiscreteWavelet<T> + Send + Sync>,
    fft: FftEngine,
    filters: FilterBank<T>,
    method: ConvolutionMethod,
    fft_threshold: usize,
}

impl<T: Sample> ModwtEngine<T>
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
{
    pub fn new(wavelet: Arc<dyn DiscreteWavelet<T> + Send + Sync>) -> Self {
        Self {
            wavelet,
            fft: FftEngine::new(),
            filters: FilterBank::new(),
            method: ConvolutionMethod::Auto,
            fft_threshold: DEFAULT_FFT_THRESHOLD,
        }
    }

    pub fn with_convolution_method(
        wavelet: Arc<dyn DiscreteWavelet<T> + Send + Sync>,
        method: ConvolutionMethod,
    ) -> Self {
        let mut engine = Self::new(wavelet);
        engine.method = method;
        engine
    }

    pub fn convolution_method(&self) -> ConvolutionMethod {
        self.method
    }

    pub fn set_convolution_method(&mut self, method: ConvolutionMethod) {
        self.method = method;
    }

    pub fn fft_threshold(&self) -> usize {
        self.fft_threshold
    }

    /// Sets the `signal_len * filter_len` product beyond which [`ConvolutionMethod::Auto`]
    /// prefers the FFT path. Must be positive.
    pub fn set_fft_threshold(&mut self, threshold: usize) -> Result<(), OndetError> {
        if threshold == 0 {
            return Err(OndetError::InvalidArgument(
                "ModwtEngine::set_fft_threshold requires a positive threshold but it was 0"
                    .to_string(),
            ));
        }
        self.fft_threshold = threshold;
        Ok(())
    }

    pub fn max_supported_level(&self) -> usize {
        MAX_SUPPORTED_LEVEL
    }

    /// Swaps the wavelet; the filter cache is invalidated in the same call so
    /// the next transform re-derives everything from the new descriptor.
    pub fn set_wavelet(&mut self, wavelet: Arc<dyn DiscreteWavelet<T> + Send + Sync>) {
        self.wavelet = wavelet;
        self.filters.clear();
    }

    /// Builds every upsampled filter pair up to `max_level` ahead of the
    /// first transform.
    pub fn precompute_filters(&self, max_level: usize) -> Result<(), OndetError> {
        if max_level < 1 || max_level > MAX_SUPPORTED_LEVEL {
            return Err(OndetError::InvalidLevel(format!(
                "ModwtEngine::precompute_filters requires 1 <= max_level <= {MAX_SUPPORTED_LEVEL} but max_level was {max_level}"
            )));
        }
        for level in 1..=max_level {
            self.filters.level(self.wavelet.as_ref(), level)?;
        }
        Ok(())
    }

    /// Drops every cached filter. The next operation re-derives the base
    /// pair and repopulates lazily; its output is identical to a fresh
    /// engine's.
    pub fn clear_filter_cache(&self) {
        self.filters.clear();
    }

    /// Multi-level forward decomposition.
    ///
    /// Returns `max_level + 1` rows of the input's length: rows
    /// `0..max_level` hold the detail coefficients `W_1..W_J`, the last row
    /// the approximation `V_J`. An empty signal yields an empty grid.
    pub fn forward(&self, signal: &[T], max_level: usize) -> Result<Vec<Vec<T>>, OndetError> {
        if signal.is_empty() {
            return Ok(Vec::new());
        }
        validate_level("ModwtEngine::forward", max_level, signal.len())?;
        let mut rows: Vec<Vec<T>> = try_vec![Vec::new(); max_level + 1];
        let mut approx = try_vec![T::zero(); signal.len()];
        approx.copy_from_slice(signal);
        for level in 1..=max_level {
            let filters = self.filters.level(self.wavelet.as_ref(), level)?;
            let detail = self.convolve(&approx, &filters.wavelet, false)?;
            let next = self.convolve(&approx, &filters.scaling, false)?;
            rows[level - 1] = detail;
            approx = next;
        }
        rows[max_level] = approx;
        Ok(rows)
    }

    /// Perfect reconstruction from a coefficient grid produced by
    /// [`forward`](Self::forward).
    pub fn inverse(&self, coeffs: &[Vec<T>]) -> Result<Vec<T>, OndetError> {
        if coeffs.is_empty() {
            return Ok(Vec::new());
        }
        let max_level = coeffs.len() - 1;
        if max_level < 1 {
            return Err(OndetError::InvalidArgument(
                "ModwtEngine::inverse requires at least one detail row plus the approximation but received 1 row"
                    .to_string(),
            ));
        }
        let n = coeffs[0].len();
        for (index, row) in coeffs.iter().enumerate() {
            if row.len() != n {
                return Err(OndetError::InvalidArgument(format!(
                    "ModwtEngine::inverse requires equally long rows but row {index} has length {} while row 0 has {n}",
                    row.len()
                )));
            }
        }
        if n == 0 {
            return Ok(Vec::new());
        }
        validate_level("ModwtEngine::inverse", max_level, n)?;
        let mut approx = try_vec![T::zero(); n];
        approx.copy_from_slice(&coeffs[max_level]);
        for level in (1..=max_level).rev() {
            let filters = self.filters.level(self.wavelet.as_ref(), level)?;
            let smooth = self.convolve(&approx, &filters.scaling, true)?;
            let detail = self.convolve(&coeffs[level - 1], &filters.wavelet, true)?;
            for (dst, (&a, &d)) in approx.iter_mut().zip(smooth.iter().zip(detail.iter())) {
                *dst = a + d;
            }
        }
        Ok(approx)
    }

    /// Row-major flattened decomposition `[W_1 | W_2 | ... | W_J | V_J]`.
    /// The signal length must be a power of two.
    pub fn forward_flat(&self, signal: &[T], level: usize) -> Result<Vec<T>, OndetError> {
        if signal.is_empty() {
            return Ok(Vec::new());
        }
        if !signal.len().is_power_of_two() {
            return Err(OndetError::InvalidLength(format!(
                "ModwtEngine::forward_flat requires a power-of-two signal length but it was {}",
                signal.len()
            )));
        }
        let rows = self.forward(signal, level)?;
        let mut out = try_vec![T::zero(); signal.len() * (level + 1)];
        for (dst, row) in out.chunks_exact_mut(signal.len()).zip(rows.iter()) {
            dst.copy_from_slice(row);
        }
        Ok(out)
    }

    /// Inverse of [`forward_flat`](Self::forward_flat).
    pub fn inverse_flat(&self, flat: &[T], level: usize) -> Result<Vec<T>, OndetError> {
        if flat.is_empty() {
            return Ok(Vec::new());
        }
        let rows = level + 1;
        if !flat.len().is_multiple_of(rows) {
            return Err(OndetError::InvalidArgument(format!(
                "ModwtEngine::inverse_flat requires a length divisible by level + 1 = {rows} but it was {}",
                flat.len()
            )));
        }
        let n = flat.len() / rows;
        if !n.is_power_of_two() {
            return Err(OndetError::InvalidLength(format!(
                "ModwtEngine::inverse_flat requires a power-of-two row length but it was {n}"
            )));
        }
        let mut coeffs: Vec<Vec<T>> = try_vec![Vec::new(); rows];
        for (dst, src) in coeffs.iter_mut().zip(flat.chunks_exact(n)) {
            let mut row = try_vec![T::zero(); n];
            row.copy_from_slice(src);
            *dst = row;
        }
        self.inverse(&coeffs)
    }

    fn convolve(&self, signal: &[T], filter: &[T], adjoint: bool) -> Result<Vec<T>, OndetError> {
        let use_fft = match self.method {
            ConvolutionMethod::Direct => false,
            ConvolutionMethod::Fft => true,
            ConvolutionMethod::Auto => {
                signal.len().saturating_mul(filter.len()) > self.fft_threshold
            }
        };
        if use_fft {
            self.fft_convolve(signal, filter, adjoint)
        } else if adjoint {
            circular_convolve_adjoint(signal, filter)
        } else {
            circular_convolve(signal, filter)
        }
    }

    /// Spectral circular convolution: the filter is wrapped onto the
    /// signal's ring by accumulation, the adjoint takes the conjugate
    /// spectrum instead of a time reversal.
    fn fft_convolve(
        &self,
        signal: &[T],
        filter: &[T],
        adjoint: bool,
    ) -> Result<Vec<T>, OndetError> {
        let n = signal.len();
        let mut wrapped = try_vec![T::zero(); n];
        for (i, &tap) in filter.iter().enumerate() {
            wrapped[i % n] += tap;
        }
        let mut signal_c = try_vec![Complex::<T>::zero(); n];
        for (dst, &src) in signal_c.iter_mut().zip(signal.iter()) {
            *dst = Complex::new(src, T::zero());
        }
        let mut filter_c = try_vec![Complex::<T>::zero(); n];
        for (dst, &src) in filter_c.iter_mut().zip(wrapped.iter()) {
            *dst = Complex::new(src, T::zero());
        }
        let signal_spec = self.fft.forward(&signal_c)?;
        let filter_spec = self.fft.forward(&filter_c)?;
        let mut product = try_vec![Complex::<T>::zero(); n];
        for (dst, (&s, &f)) in product
            .iter_mut()
            .zip(signal_spec.iter().zip(filter_spec.iter()))
        {
            *dst = if adjoint { s * f.conj() } else { s * f };
        }
        let time = self.fft.inverse(&product)?;
        let mut out = try_vec![T::zero(); n];
        for (dst, src) in out.iter_mut().zip(time.iter()) {
            *dst = src.re;
        }
        Ok(out)
    }
}

/// `out[t] = sum_m signal[(t - m) mod n] * filter[m]`.
fn circular_convolve<T: Sample>(signal: &[T], filter: &[T]) -> Result<Vec<T>, OndetError> {
    let n = signal.len() as isize;
    let mut out = try_vec![T::zero(); signal.len()];
    for (t, dst) in out.iter_mut().enumerate() {
        let mut acc = T::zero();
        for (m, &tap) in filter.iter().enumerate() {
            let idx = (t as isize - m as isize).rem_euclid(n) as usize;
            acc = fmla(signal[idx], tap, acc);
        }
        *dst = acc;
    }
    Ok(out)
}

/// The transpose of [`circular_convolve`]'s operator:
/// `out[t] = sum_m signal[(t + m) mod n] * filter[m]`.
fn circular_convolve_adjoint<T: Sample>(signal: &[T], filter: &[T]) -> Result<Vec<T>, OndetError> {
    let n = signal.len();
    let mut out = try_vec![T::zero(); n];
    for (t, dst) in out.iter_mut().enumerate() {
        let mut acc = T::zero();
        for (m, &tap) in filter.iter().enumerate() {
            acc = fmla(signal[(t + m) % n], tap, acc);
        }
        *dst = acc;
    }
    Ok(out)
}

fn validate_level(method: &str, level: usize, n: usize) -> Result<(), OndetError> {
    if level < 1 || level > MAX_SUPPORTED_LEVEL {
        return Err(OndetError::InvalidLevel(format!(
            "{method} requires 1 <= max_level <= {MAX_SUPPORTED_LEVEL} but max_level was {level}"
        )));
    }
    let admissible = floor_log2(n);
    if level > admissible {
        return Err(OndetError::InvalidLevel(format!(
            "{method} requires max_level <= log2 of the signal length {n} = {admissible} but max_level was {level}"
        )));
    }
    Ok(())
}

/// Floor of the base-two logarithm, from the leading-zero count. `n >= 1`.
pub(crate) fn floor_log2(n: usize) -> usize {
    (usize::BITS - 1 - n.leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavelets::{Coiflet, Daubechies, Haar, Symlet};
    use rand::prelude::*;

    fn haar_engine() -> ModwtEngine<f64> {
        ModwtEngine::new(Arc::new(Haar::new()))
    }

    fn random_signal(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|_| rng.r#gen::<f64>() - 0.5).collect()
    }

    fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max)
    }

    #[test]
    fn haar_roundtrip_on_the_ramp() {
        let engine = haar_engine();
        let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let coeffs = engine.forward(&signal, 3).unwrap();
        assert_eq!(coeffs.len(), 4);
        for row in &coeffs {
            assert_eq!(row.len(), 8);
        }
        // First detail: circular first difference halved, with the wrap at t = 0.
        assert!((coeffs[0][0] + 3.5).abs() < 1e-12);
        for t in 1..8 {
            assert!((coeffs[0][t] - 0.5).abs() < 1e-12);
        }
        // Depth-3 Haar smooth is the global mean on every sample.
        for t in 0..8 {
            assert!((coeffs[3][t] - 4.5).abs() < 1e-12);
        }
        let back = engine.inverse(&coeffs).unwrap();
        assert!(max_abs_diff(&back, &signal) < 1e-10);
    }

    #[test]
    fn roundtrip_across_families() {
        let wavelets: Vec<Arc<dyn DiscreteWavelet<f64> + Send + Sync>> = vec![
            Arc::new(Daubechies::new(2).unwrap()),
            Arc::new(Daubechies::new(4).unwrap()),
            Arc::new(Symlet::new(4).unwrap()),
            Arc::new(Coiflet::new(1).unwrap()),
        ];
        let signal = random_signal(64, 3);
        for wavelet in wavelets {
            let name = wavelet.name();
            let engine = ModwtEngine::new(wavelet);
            let coeffs = engine.forward(&signal, 3).unwrap();
            let back = engine.inverse(&coeffs).unwrap();
            assert!(max_abs_diff(&back, &signal) < 1e-10, "wavelet {name}");
        }
    }

    #[test]
    fn direct_fft_and_auto_strategies_agree() {
        let signal = random_signal(256, 17);
        let wavelet: Arc<dyn DiscreteWavelet<f64> + Send + Sync> =
            Arc::new(Daubechies::new(4).unwrap());
        let direct =
            ModwtEngine::with_convolution_method(wavelet.clone(), ConvolutionMethod::Direct);
        let fft = ModwtEngine::with_convolution_method(wavelet.clone(), ConvolutionMethod::Fft);
        let auto = ModwtEngine::with_convolution_method(wavelet, ConvolutionMethod::Auto);
        let a = direct.forward(&signal, 4).unwrap();
        let b = fft.forward(&signal, 4).unwrap();
        let c = auto.forward(&signal, 4).unwrap();
        for level in 0..a.len() {
            assert!(max_abs_diff(&a[level], &b[level]) < 1e-8, "row {level}");
            assert!(max_abs_diff(&a[level], &c[level]) < 1e-8, "row {level}");
        }
        let back = fft.inverse(&b).unwrap();
        assert!(max_abs_diff(&back, &signal) < 1e-8);
    }

    #[test]
    fn decomposition_is_shift_invariant() {
        let engine = ModwtEngine::new(Arc::new(Daubechies::<f64>::new(2).unwrap()));
        let n = 64;
        let shift = 5;
        let signal = random_signal(n, 23);
        let shifted: Vec<f64> = (0..n).map(|t| signal[(t + n - shift) % n]).collect();
        let plain = engine.forward(&signal, 3).unwrap();
        let moved = engine.forward(&shifted, 3).unwrap();
        for level in 0..plain.len() {
            for t in 0..n {
                let expected = plain[level][(t + n - shift) % n];
                assert!(
                    (moved[level][t] - expected).abs() < 1e-10,
                    "row {level} index {t}"
                );
            }
        }
    }

    #[test]
    fn energy_is_conserved_across_rows() {
        let engine = ModwtEngine::new(Arc::new(Daubechies::<f64>::new(2).unwrap()));
        let signal = random_signal(128, 29);
        let coeffs = engine.forward(&signal, 3).unwrap();
        let input_energy: f64 = signal.iter().map(|x| x * x).sum();
        let rows_energy: f64 = coeffs
            .iter()
            .map(|row| row.iter().map(|x| x * x).sum::<f64>())
            .sum();
        assert!((input_energy - rows_energy).abs() < 1e-8 * input_energy);
    }

    #[test]
    fn level_bounds_are_enforced() {
        let engine = haar_engine();
        let signal = random_signal(64, 31);
        assert!(matches!(
            engine.forward(&signal, 0),
            Err(OndetError::InvalidLevel(_))
        ));
        assert!(matches!(
            engine.forward(&signal, MAX_SUPPORTED_LEVEL + 1),
            Err(OndetError::InvalidLevel(_))
        ));
        // log2(64) = 6, so 7 is one too deep.
        assert!(matches!(
            engine.forward(&signal, 7),
            Err(OndetError::InvalidLevel(_))
        ));
        // A single sample admits no level at all.
        assert!(matches!(
            engine.forward(&[1.0], 1),
            Err(OndetError::InvalidLevel(_))
        ));
    }

    #[test]
    fn empty_signal_passes_through() {
        let engine = haar_engine();
        assert!(engine.forward(&[], 3).unwrap().is_empty());
        assert!(engine.inverse(&[]).unwrap().is_empty());
    }

    #[test]
    fn mismatched_inverse_rows_are_rejected() {
        let engine = haar_engine();
        let rows = vec![vec![0.0; 8], vec![0.0; 4]];
        assert!(matches!(
            engine.inverse(&rows),
            Err(OndetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn cache_clearing_matches_a_fresh_engine() {
        let engine = haar_engine();
        let signal = random_signal(32, 37);
        let first = engine.forward(&signal, 3).unwrap();
        engine.clear_filter_cache();
        let second = engine.forward(&signal, 3).unwrap();
        let fresh = haar_engine().forward(&signal, 3).unwrap();
        for level in 0..first.len() {
            assert_eq!(first[level], second[level]);
            assert_eq!(first[level], fresh[level]);
        }
    }

    #[test]
    fn precomputing_filters_changes_nothing() {
        let engine = haar_engine();
        engine.precompute_filters(3).unwrap();
        let signal = random_signal(32, 41);
        let warm = engine.forward(&signal, 3).unwrap();
        let lazy = haar_engine().forward(&signal, 3).unwrap();
        assert_eq!(warm, lazy);
        assert!(matches!(
            engine.precompute_filters(MAX_SUPPORTED_LEVEL + 1),
            Err(OndetError::InvalidLevel(_))
        ));
    }

    #[test]
    fn swapping_the_wavelet_resets_the_cache() {
        let signal = random_signal(64, 43);
        let mut engine = haar_engine();
        let _ = engine.forward(&signal, 3).unwrap();
        let db2: Arc<dyn DiscreteWavelet<f64> + Send + Sync> =
            Arc::new(Daubechies::new(2).unwrap());
        engine.set_wavelet(db2.clone());
        let swapped = engine.forward(&signal, 3).unwrap();
        let fresh = ModwtEngine::new(db2).forward(&signal, 3).unwrap();
        assert_eq!(swapped, fresh);
    }

    #[test]
    fn flat_layout_is_row_major() {
        let engine = haar_engine();
        let signal = random_signal(16, 47);
        let rows = engine.forward(&signal, 2).unwrap();
        let flat = engine.forward_flat(&signal, 2).unwrap();
        assert_eq!(flat.len(), 16 * 3);
        for (level, row) in rows.iter().enumerate() {
            assert_eq!(&flat[level * 16..(level + 1) * 16], row.as_slice());
        }
        let back = engine.inverse_flat(&flat, 2).unwrap();
        assert!(max_abs_diff(&back, &signal) < 1e-10);
    }

    #[test]
    fn flat_facade_requires_power_of_two() {
        let engine = haar_engine();
        let signal = random_signal(12, 53);
        assert!(matches!(
            engine.forward_flat(&signal, 2),
            Err(OndetError::InvalidLength(_))
        ));
        assert!(matches!(
            engine.inverse_flat(&vec![0.0; 36], 2),
            Err(OndetError::InvalidLength(_))
        ));
    }
}
