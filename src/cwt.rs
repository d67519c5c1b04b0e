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
use crate::cwt_result::CwtResult;
use crate::err::{OndetError, try_vec};
use crate::fft::FftEngine;
use crate::sample::Sample;
use crate::scales;
use crate::wavelet::ContinuousWavelet;
use num_complex::Complex;
use num_traits::{AsPrimitive, One, Zero};
use rayon::prelude::*;
use std::sync::Arc;

/// Extension policy for the spectral path, applied while padding the signal
/// up to the next power of two.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    /// Zeros beyond the signal.
    Zero,
    /// Whole-point reflection about the last sample.
    Symmetric,
    /// Periodic continuation of the signal.
    Periodic,
    /// The last sample held constant.
    Constant,
}

/// Where the parallel entry points draw their workers from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Parallelism {
    /// The process-wide rayon pool.
    Global,
    /// A dedicated pool of the given width, owned by the engine and joined
    /// when the engine drops.
    Fixed(usize),
    /// No parallelism; the parallel entry points run sequentially.
    Off,
}

/// Time-axis tile processed as one task by [`CwtEngine::transform_parallel`],
/// sized for cache locality.
const TIME_BLOCK: usize = 64;

/// Scales handled by one leaf task when a custom pool splits the scale range.
const SCALE_GRAIN: usize = 4;

/// Continuous Wavelet Transform over a caller-supplied scale list.
///
/// Two convolution strategies are available: a direct summation truncated
/// to the wavelet's effective support, and a per-scale spectral pass that
/// reuses one forward FFT of the padded signal. Each has a parallel variant;
/// all partitions write disjoint regions, so parallel output is identical to
/// sequential output.
pub struct CwtEngine<T> {
    wavelet: Arc<dyn ContinuousWavelet<T> + Send + Sync>,
    fft: FftEngine,
    padding: PaddingMode,
    parallelism: Parallelism,
    pool: Option<rayon::ThreadPool>,
}

impl<T: Sample> CwtEngine<T>
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
    isize: AsPrimitive<T>,
{
    pub fn new(wavelet: Arc<dyn ContinuousWavelet<T> + Send + Sync>) -> Self {
        Self {
            wavelet,
            fft: FftEngine::new(),
            padding: PaddingMode::Zero,
            parallelism: Parallelism::Global,
            pool: None,
        }
    }

    /// Creates an engine with the given worker source. `Fixed(n)` builds a
    /// dedicated work-stealing pool whose lifetime is tied to the engine.
    pub fn with_parallelism(
        wavelet: Arc<dyn ContinuousWavelet<T> + Send + Sync>,
        parallelism: Parallelism,
    ) -> Result<Self, OndetError> {
        let pool = match parallelism {
            Parallelism::Fixed(threads) => Some(build_pool("CwtEngine::with_parallelism", threads)?),
            _ => None,
        };
        Ok(Self {
            wavelet,
            fft: FftEngine::new(),
            padding: PaddingMode::Zero,
            parallelism,
            pool,
        })
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub fn set_padding(&mut self, mode: PaddingMode) {
        self.padding = mode;
    }

    /// See [`scales::generate_log_scales`].
    pub fn generate_log_scales(
        min_scale: T,
        max_scale: T,
        count: usize,
    ) -> Result<Vec<T>, OndetError> {
        scales::generate_log_scales(min_scale, max_scale, count)
    }

    /// See [`scales::generate_linear_scales`].
    pub fn generate_linear_scales(
        min_scale: T,
        max_scale: T,
        count: usize,
    ) -> Result<Vec<T>, OndetError> {
        scales::generate_linear_scales(min_scale, max_scale, count)
    }

    /// Direct-convolution CWT, sequential over scales and time.
    pub fn transform(
        &self,
        signal: &[T],
        scales: &[T],
        sampling_rate: T,
    ) -> Result<CwtResult<T>, OndetError> {
        validate("CwtEngine::transform", scales, sampling_rate)?;
        let dt = T::one() / sampling_rate;
        let mut rows: Vec<Vec<Complex<T>>> = try_vec![Vec::new(); scales.len()];
        for (dst, &scale) in rows.iter_mut().zip(scales.iter()) {
            *dst = self.direct_row(signal, scale, dt)?;
        }
        self.finish(rows, scales, signal.len(), sampling_rate)
    }

    /// Spectral CWT: one forward FFT of the padded signal, then a conjugate
    /// multiply and inverse per scale. The first `N` output samples are kept.
    pub fn transform_fft(
        &self,
        signal: &[T],
        scales: &[T],
        sampling_rate: T,
    ) -> Result<CwtResult<T>, OndetError> {
        validate("CwtEngine::transform_fft", scales, sampling_rate)?;
        if signal.is_empty() {
            let rows: Vec<Vec<Complex<T>>> = try_vec![Vec::new(); scales.len()];
            return self.finish(rows, scales, 0, sampling_rate);
        }
        let (spectrum, omegas) = self.padded_spectrum(signal, sampling_rate)?;
        let mut rows: Vec<Vec<Complex<T>>> = try_vec![Vec::new(); scales.len()];
        for (dst, &scale) in rows.iter_mut().zip(scales.iter()) {
            *dst = self.fft_row(&spectrum, &omegas, scale, signal.len())?;
        }
        self.finish(rows, scales, signal.len(), sampling_rate)
    }

    /// Direct-convolution CWT tiled into [`TIME_BLOCK`]-sample blocks that
    /// run in parallel, scales iterated inside each block.
    pub fn transform_parallel(
        &self,
        signal: &[T],
        scales: &[T],
        sampling_rate: T,
    ) -> Result<CwtResult<T>, OndetError> {
        validate("CwtEngine::transform_parallel", scales, sampling_rate)?;
        if !self.should_parallelize(signal.len(), scales.len()) {
            return self.transform(signal, scales, sampling_rate);
        }
        let dt = T::one() / sampling_rate;
        let n = signal.len();
        let ranges: Vec<(usize, usize)> = (0..n.div_ceil(TIME_BLOCK))
            .map(|b| (b * TIME_BLOCK, ((b + 1) * TIME_BLOCK).min(n)))
            .collect();
        let blocks: Result<Vec<Vec<Vec<Complex<T>>>>, OndetError> = self.install(|| {
            ranges
                .par_iter()
                .map(|&(start, end)| self.direct_block(signal, scales, dt, start, end))
                .collect()
        });
        let blocks = blocks?;
        let mut rows: Vec<Vec<Complex<T>>> = try_vec![Vec::new(); scales.len()];
        for dst in rows.iter_mut() {
            *dst = try_vec![Complex::<T>::zero(); n];
        }
        for (&(start, end), block) in ranges.iter().zip(blocks.iter()) {
            for (dst, src) in rows.iter_mut().zip(block.iter()) {
                dst[start..end].copy_from_slice(src);
            }
        }
        self.finish(rows, scales, n, sampling_rate)
    }

    /// Spectral CWT with the outer scale loop in parallel; every scale is an
    /// independent multiply/inverse pass over the shared spectrum.
    pub fn transform_fft_parallel(
        &self,
        signal: &[T],
        scales: &[T],
        sampling_rate: T,
    ) -> Result<CwtResult<T>, OndetError> {
        validate("CwtEngine::transform_fft_parallel", scales, sampling_rate)?;
        if !self.should_parallelize(signal.len(), scales.len()) {
            return self.transform_fft(signal, scales, sampling_rate);
        }
        let (spectrum, omegas) = self.padded_spectrum(signal, sampling_rate)?;
        let rows: Result<Vec<Vec<Complex<T>>>, OndetError> = self.install(|| {
            scales
                .par_iter()
                .map(|&scale| self.fft_row(&spectrum, &omegas, scale, signal.len()))
                .collect()
        });
        self.finish(rows?, scales, signal.len(), sampling_rate)
    }

    /// Direct-convolution CWT on a dedicated pool of the given width. The
    /// scale range splits down to [`SCALE_GRAIN`]-sized leaf tasks.
    pub fn transform_parallel_custom(
        &self,
        signal: &[T],
        scales: &[T],
        sampling_rate: T,
        parallelism: usize,
    ) -> Result<CwtResult<T>, OndetError> {
        validate("CwtEngine::transform_parallel_custom", scales, sampling_rate)?;
        if !self.should_parallelize(signal.len(), scales.len()) {
            return self.transform(signal, scales, sampling_rate);
        }
        let pool = build_pool("CwtEngine::transform_parallel_custom", parallelism)?;
        let dt = T::one() / sampling_rate;
        let nested: Result<Vec<Vec<Vec<Complex<T>>>>, OndetError> = pool.install(|| {
            scales
                .par_chunks(SCALE_GRAIN)
                .map(|chunk| {
                    chunk
                        .iter()
                        .map(|&scale| self.direct_row(signal, scale, dt))
                        .collect::<Result<Vec<_>, OndetError>>()
                })
                .collect()
        });
        let rows: Vec<Vec<Complex<T>>> = nested?.into_iter().flatten().collect();
        self.finish(rows, scales, signal.len(), sampling_rate)
    }

    /// One coefficient of the direct path: the summation window comes from
    /// the wavelet's effective support scaled by `scale`, clipped to the
    /// signal.
    fn direct_coefficient(&self, signal: &[T], scale: T, dt: T, t: usize) -> Complex<T> {
        let n = signal.len();
        let (support_lo, support_hi) = self.wavelet.effective_support();
        let lo = (support_lo * scale / dt).floor().max(-(t.as_()));
        let hi = (support_hi * scale / dt).ceil().min((n - 1 - t).as_());
        if hi < lo {
            return Complex::new(T::zero(), T::zero());
        }
        let lo: isize = lo.as_();
        let hi: isize = hi.as_();
        let mut acc = Complex::new(T::zero(), T::zero());
        for offset in lo..=hi {
            let index = (t as isize + offset) as usize;
            let tau: T = offset.as_() * dt;
            let w = self.wavelet.psi(tau, scale, T::zero());
            let x = signal[index];
            acc = acc + Complex::new(x * w.re, -(x * w.im));
        }
        acc * dt
    }

    fn direct_row(&self, signal: &[T], scale: T, dt: T) -> Result<Vec<Complex<T>>, OndetError> {
        let mut row = try_vec![Complex::<T>::zero(); signal.len()];
        for (t, dst) in row.iter_mut().enumerate() {
            *dst = self.direct_coefficient(signal, scale, dt, t);
        }
        Ok(row)
    }

    fn direct_block(
        &self,
        signal: &[T],
        scales: &[T],
        dt: T,
        start: usize,
        end: usize,
    ) -> Result<Vec<Vec<Complex<T>>>, OndetError> {
        let mut block: Vec<Vec<Complex<T>>> = try_vec![Vec::new(); scales.len()];
        for (dst, &scale) in block.iter_mut().zip(scales.iter()) {
            let mut strip = try_vec![Complex::<T>::zero(); end - start];
            for (offset, cell) in strip.iter_mut().enumerate() {
                *cell = self.direct_coefficient(signal, scale, dt, start + offset);
            }
            *dst = strip;
        }
        Ok(block)
    }

    /// Pads to the next power of two, transforms once, and lays out the
    /// angular frequency grid in standard FFT order (positive frequencies
    /// first, negative in the upper half).
    fn padded_spectrum(
        &self,
        signal: &[T],
        sampling_rate: T,
    ) -> Result<(Vec<Complex<T>>, Vec<T>), OndetError> {
        let dt = T::one() / sampling_rate;
        let padded_len = signal.len().next_power_of_two();
        let padded = pad_signal(signal, padded_len, self.padding)?;
        let spectrum = self.fft.forward(&padded)?;
        let mut omegas = try_vec![T::zero(); padded_len];
        let step = T::TWO_PI / (padded_len.as_() * dt);
        for (k, dst) in omegas.iter_mut().enumerate() {
            *dst = if k <= padded_len / 2 {
                k.as_() * step
            } else {
                -((padded_len - k).as_() * step)
            };
        }
        Ok((spectrum, omegas))
    }

    fn fft_row(
        &self,
        spectrum: &[Complex<T>],
        omegas: &[T],
        scale: T,
        n: usize,
    ) -> Result<Vec<Complex<T>>, OndetError> {
        let mut product = try_vec![Complex::<T>::zero(); spectrum.len()];
        for (dst, (&s, &omega)) in product.iter_mut().zip(spectrum.iter().zip(omegas.iter())) {
            let w = self.wavelet.psi_hat(omega, scale, T::zero());
            *dst = s * w.conj();
        }
        let time = self.fft.inverse(&product)?;
        let mut row = try_vec![Complex::<T>::zero(); n];
        row.copy_from_slice(&time[..n]);
        Ok(row)
    }

    /// Parallel pay-off heuristic; short signals or thin scale lists stay
    /// sequential.
    fn should_parallelize(&self, n: usize, n_scales: usize) -> bool {
        if matches!(self.parallelism, Parallelism::Off) {
            return false;
        }
        if n < 64 {
            return false;
        }
        if n < 256 { n_scales >= 16 } else { n_scales >= 8 }
    }

    fn install<R: Send>(&self, task: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(task),
            None => task(),
        }
    }

    fn finish(
        &self,
        rows: Vec<Vec<Complex<T>>>,
        scales: &[T],
        n: usize,
        sampling_rate: T,
    ) -> Result<CwtResult<T>, OndetError> {
        let dt = T::one() / sampling_rate;
        let mut time_axis = try_vec![T::zero(); n];
        for (i, dst) in time_axis.iter_mut().enumerate() {
            *dst = i.as_() * dt;
        }
        let mut owned_scales = try_vec![T::zero(); scales.len()];
        owned_scales.copy_from_slice(scales);
        Ok(CwtResult::new(
            rows,
            owned_scales,
            time_axis,
            sampling_rate,
            self.wavelet.name().to_string(),
        ))
    }
}

fn validate<T: Sample>(method: &str, scales: &[T], sampling_rate: T) -> Result<(), OndetError> {
    if scales.is_empty() {
        return Err(OndetError::InvalidArgument(format!(
            "{method} requires at least one scale but the scale list was empty"
        )));
    }
    for &scale in scales.iter() {
        if !(scale > T::zero()) {
            return Err(OndetError::InvalidArgument(format!(
                "{method} requires positive scales but found {scale}"
            )));
        }
    }
    if !(sampling_rate > T::zero()) {
        return Err(OndetError::InvalidArgument(format!(
            "{method} requires a positive sampling rate but it was {sampling_rate}"
        )));
    }
    Ok(())
}

fn build_pool(method: &str, threads: usize) -> Result<rayon::ThreadPool, OndetError> {
    if threads == 0 {
        return Err(OndetError::InvalidArgument(format!(
            "{method} requires a positive parallelism degree but it was 0"
        )));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| OndetError::InvalidArgument(format!("{method} could not build a pool: {e}")))
}

fn pad_signal<T: Sample>(
    signal: &[T],
    target: usize,
    mode: PaddingMode,
) -> Result<Vec<Complex<T>>, OndetError> {
    let n = signal.len();
    let mut out = try_vec![Complex::<T>::zero(); target];
    for (dst, &src) in out.iter_mut().zip(signal.iter()) {
        *dst = Complex::new(src, T::zero());
    }
    for i in n..target {
        let value = match mode {
            PaddingMode::Zero => T::zero(),
            PaddingMode::Constant => signal[n - 1],
            PaddingMode::Periodic => signal[i % n],
            PaddingMode::Symmetric => {
                if n == 1 {
                    signal[0]
                } else {
                    // Whole-point reflection with period 2n - 2.
                    let p = i % (2 * n - 2);
                    if p < n { signal[p] } else { signal[2 * n - 2 - p] }
                }
            }
        };
        out[i] = Complex::new(value, T::zero());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavelets::Morlet;

    fn engine() -> CwtEngine<f64> {
        CwtEngine::new(Arc::new(Morlet::default()))
    }

    /// 32 cycles over 256 samples at unit rate; the Morlet with omega0 = 6
    /// resonates near scale 6 / (2 pi / 8) = 7.64.
    fn test_signal(n: usize) -> Vec<f64> {
        (0..n)
            .map(|t| (2.0 * std::f64::consts::PI * t as f64 / 8.0).cos())
            .collect()
    }

    fn grid_max_diff(a: &CwtResult<f64>, b: &CwtResult<f64>, lo: usize, hi: usize) -> f64 {
        let am = a.magnitude();
        let bm = b.magnitude();
        let mut worst = 0.0f64;
        for (ra, rb) in am.iter().zip(bm.iter()) {
            for t in lo..hi {
                worst = worst.max((ra[t] - rb[t]).abs());
            }
        }
        worst
    }

    #[test]
    fn direct_and_fft_paths_agree_on_band_limited_input() {
        let mut engine = engine();
        engine.set_padding(PaddingMode::Periodic);
        let signal = test_signal(256);
        let scales = CwtEngine::generate_log_scales(4.0, 12.0, 8).unwrap();
        let direct = engine.transform(&signal, &scales, 1.0).unwrap();
        let spectral = engine.transform_fft(&signal, &scales, 1.0).unwrap();

        let dm = direct.magnitude();
        let sm = spectral.magnitude();
        let mut total = 0.0f64;
        let mut cells = 0usize;
        for (rd, rs) in dm.iter().zip(sm.iter()) {
            for (a, b) in rd.iter().zip(rs.iter()) {
                total += (a - b).abs();
                cells += 1;
            }
        }
        assert!(total / (cells as f64) < 0.1, "avg {}", total / cells as f64);
        // Away from the boundary windows both paths see the full support.
        assert!(grid_max_diff(&direct, &spectral, 64, 192) < 0.05);
    }

    #[test]
    fn scalogram_peaks_at_the_resonant_scale() {
        let engine = engine();
        let signal = test_signal(256);
        let scales = CwtEngine::generate_log_scales(4.0, 12.0, 8).unwrap();
        let result = engine.transform_fft(&signal, &scales, 1.0).unwrap();
        let scalogram = result.scalogram();
        let peak = scalogram
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        let expected = scales
            .iter()
            .enumerate()
            .min_by(|a, b| {
                (a.1 - 7.64).abs().partial_cmp(&(b.1 - 7.64).abs()).unwrap()
            })
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, expected);
    }

    #[test]
    fn parallel_block_path_matches_sequential() {
        let engine = engine();
        let signal = test_signal(256);
        let scales = CwtEngine::generate_log_scales(4.0, 12.0, 8).unwrap();
        let sequential = engine.transform(&signal, &scales, 1.0).unwrap();
        let parallel = engine.transform_parallel(&signal, &scales, 1.0).unwrap();
        assert!(grid_max_diff(&sequential, &parallel, 0, 256) < 1e-12);
    }

    #[test]
    fn parallel_fft_path_matches_sequential() {
        let engine = engine();
        let signal = test_signal(256);
        let scales = CwtEngine::generate_log_scales(4.0, 12.0, 8).unwrap();
        let sequential = engine.transform_fft(&signal, &scales, 1.0).unwrap();
        let parallel = engine
            .transform_fft_parallel(&signal, &scales, 1.0)
            .unwrap();
        assert!(grid_max_diff(&sequential, &parallel, 0, 256) < 1e-12);
    }

    #[test]
    fn custom_pool_matches_sequential() {
        let engine = engine();
        let signal = test_signal(256);
        let scales = CwtEngine::generate_log_scales(4.0, 12.0, 8).unwrap();
        let sequential = engine.transform(&signal, &scales, 1.0).unwrap();
        let custom = engine
            .transform_parallel_custom(&signal, &scales, 1.0, 2)
            .unwrap();
        assert!(grid_max_diff(&sequential, &custom, 0, 256) < 1e-12);
        assert!(matches!(
            engine.transform_parallel_custom(&signal, &scales, 1.0, 0),
            Err(OndetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn short_inputs_fall_back_to_sequential() {
        let engine = engine();
        let signal = test_signal(32);
        let scales = CwtEngine::generate_log_scales(2.0, 8.0, 20).unwrap();
        let sequential = engine.transform(&signal, &scales, 1.0).unwrap();
        let parallel = engine.transform_parallel(&signal, &scales, 1.0).unwrap();
        assert!(grid_max_diff(&sequential, &parallel, 0, 32) < 1e-15);
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        let engine = engine();
        let signal = test_signal(64);
        assert!(matches!(
            engine.transform(&signal, &[], 1.0),
            Err(OndetError::InvalidArgument(_))
        ));
        assert!(matches!(
            engine.transform(&signal, &[1.0, -2.0], 1.0),
            Err(OndetError::InvalidArgument(_))
        ));
        assert!(matches!(
            engine.transform(&signal, &[1.0, 2.0], 0.0),
            Err(OndetError::InvalidArgument(_))
        ));
        assert!(matches!(
            CwtEngine::<f64>::with_parallelism(
                Arc::new(Morlet::default()),
                Parallelism::Fixed(0)
            ),
            Err(OndetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn empty_signal_yields_an_empty_grid() {
        let engine = engine();
        let scales = [2.0, 4.0];
        let result = engine.transform(&[], &scales, 1.0).unwrap();
        assert_eq!(result.number_of_scales(), 2);
        assert_eq!(result.number_of_time_points(), 0);
        let spectral = engine.transform_fft(&[], &scales, 1.0).unwrap();
        assert_eq!(spectral.number_of_time_points(), 0);
    }

    #[test]
    fn phase_stays_in_principal_branch_for_noise() {
        use rand::prelude::*;
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(13);
        let signal: Vec<f64> = (0..128).map(|_| rng.r#gen::<f64>() - 0.5).collect();
        let scales = CwtEngine::generate_log_scales(2.0, 16.0, 6).unwrap();
        let result = engine.transform_fft(&signal, &scales, 1.0).unwrap();
        for row in result.phase() {
            for &phi in &row {
                assert!(phi > -std::f64::consts::PI && phi <= std::f64::consts::PI);
            }
        }
    }

    #[test]
    fn padding_modes_produce_full_grids() {
        let signal = test_signal(100);
        let scales = [4.0, 8.0];
        for mode in [
            PaddingMode::Zero,
            PaddingMode::Symmetric,
            PaddingMode::Periodic,
            PaddingMode::Constant,
        ] {
            let mut engine = engine();
            engine.set_padding(mode);
            let result = engine.transform_fft(&signal, &scales, 1.0).unwrap();
            assert_eq!(result.number_of_scales(), 2);
            assert_eq!(result.number_of_time_points(), 100);
            for row in result.magnitude() {
                for value in row {
                    assert!(value.is_finite());
                }
            }
        }
    }

    #[test]
    fn result_carries_the_analysis_context() {
        let engine = engine();
        let signal = test_signal(64);
        let scales = [2.0, 4.0, 8.0];
        let result = engine.transform(&signal, &scales, 4.0).unwrap();
        assert_eq!(result.scales(), &scales);
        assert_eq!(result.sampling_rate(), 4.0);
        assert_eq!(result.wavelet_name(), "morlet");
        assert_eq!(result.time_axis().len(), 64);
        assert!((result.time_axis()[1] - 0.25).abs() < 1e-12);
    }
}
