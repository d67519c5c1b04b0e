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
use crate::cwt::CwtEngine;
use crate::err::OndetError;
use crate::fft::FftEngine;
use crate::modwt::{MAX_SUPPORTED_LEVEL, ModwtEngine, floor_log2};
use crate::sample::Sample;
use num_traits::AsPrimitive;

/// Uniform flattened-array surface over the transform engines.
///
/// `forward`/`reverse` map a flat `Vec<T>` onto whatever layout the engine
/// produces: the FFT engine uses the interleaved complex layout, the MODWT
/// engine its row-major coefficient rows. Engines that need more context
/// than a flat array (the CWT and its scale list) reject every entry point
/// with [`OndetError::UnsupportedOperation`].
pub trait Transform<T> {
    fn forward(&self, input: &[T]) -> Result<Vec<T>, OndetError>;
    fn reverse(&self, input: &[T]) -> Result<Vec<T>, OndetError>;
    /// Levelled variant for engines with a decomposition depth.
    fn forward_levels(&self, input: &[T], level: usize) -> Result<Vec<T>, OndetError>;
    fn reverse_levels(&self, input: &[T], level: usize) -> Result<Vec<T>, OndetError>;
}

impl<T: Sample> Transform<T> for FftEngine
where
    usize: AsPrimitive<T>,
{
    fn forward(&self, input: &[T]) -> Result<Vec<T>, OndetError> {
        self.forward_real(input)
    }

    fn reverse(&self, input: &[T]) -> Result<Vec<T>, OndetError> {
        self.inverse_real(input)
    }

    fn forward_levels(&self, _input: &[T], _level: usize) -> Result<Vec<T>, OndetError> {
        Err(OndetError::UnsupportedOperation(
            "FftEngine::forward_levels does not accept a decomposition level".to_string(),
        ))
    }

    fn reverse_levels(&self, _input: &[T], _level: usize) -> Result<Vec<T>, OndetError> {
        Err(OndetError::UnsupportedOperation(
            "FftEngine::reverse_levels does not accept a decomposition level".to_string(),
        ))
    }
}

impl<T: Sample> Transform<T> for ModwtEngine<T>
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
{
    /// Decomposes to the deepest admissible level,
    /// `min(log2(N), MAX_SUPPORTED_LEVEL)`.
    fn forward(&self, input: &[T]) -> Result<Vec<T>, OndetError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        let level = floor_log2(input.len()).min(MAX_SUPPORTED_LEVEL);
        self.forward_flat(input, level)
    }

    /// Reconstructs a default-level flat decomposition. The signal length is
    /// recovered from the total length: `n * (level + 1)` is strictly
    /// monotonic over power-of-two `n`, so the split is unambiguous.
    fn reverse(&self, input: &[T]) -> Result<Vec<T>, OndetError> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        for exponent in 1..usize::BITS as usize - 1 {
            let n = 1usize << exponent;
            let level = exponent.min(MAX_SUPPORTED_LEVEL);
            match n.checked_mul(level + 1) {
                Some(total) if total == input.len() => {
                    return self.inverse_flat(input, level);
                }
                Some(total) if total > input.len() && n > input.len() => break,
                _ => {}
            }
        }
        Err(OndetError::InvalidArgument(format!(
            "ModwtEngine::reverse cannot split a flat array of length {} into default-level rows; use reverse_levels",
            input.len()
        )))
    }

    fn forward_levels(&self, input: &[T], level: usize) -> Result<Vec<T>, OndetError> {
        self.forward_flat(input, level)
    }

    fn reverse_levels(&self, input: &[T], level: usize) -> Result<Vec<T>, OndetError> {
        self.inverse_flat(input, level)
    }
}

impl<T: Sample> Transform<T> for CwtEngine<T>
where
    f64: AsPrimitive<T>,
    usize: AsPrimitive<T>,
    isize: AsPrimitive<T>,
{
    fn forward(&self, _input: &[T]) -> Result<Vec<T>, OndetError> {
        Err(cwt_needs_scales("forward"))
    }

    fn reverse(&self, _input: &[T]) -> Result<Vec<T>, OndetError> {
        Err(cwt_needs_scales("reverse"))
    }

    fn forward_levels(&self, _input: &[T], _level: usize) -> Result<Vec<T>, OndetError> {
        Err(cwt_needs_scales("forward_levels"))
    }

    fn reverse_levels(&self, _input: &[T], _level: usize) -> Result<Vec<T>, OndetError> {
        Err(cwt_needs_scales("reverse_levels"))
    }
}

fn cwt_needs_scales(method: &str) -> OndetError {
    OndetError::UnsupportedOperation(format!(
        "CwtEngine::{method} requires an explicit scale list; use transform or transform_fft"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavelets::{Haar, Morlet};
    use rand::prelude::*;
    use std::sync::Arc;

    fn random_signal(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|_| rng.r#gen::<f64>() - 0.5).collect()
    }

    #[test]
    fn fft_facade_roundtrips_interleaved_spectra() {
        let engine = FftEngine::new();
        let signal = random_signal(32, 61);
        let spectrum = Transform::forward(&engine, &signal).unwrap();
        assert_eq!(spectrum.len(), 64);
        let back = Transform::reverse(&engine, &spectrum).unwrap();
        for (a, b) in signal.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-10);
        }
    }

    #[test]
    fn fft_facade_rejects_levels() {
        let engine = FftEngine::new();
        assert!(matches!(
            Transform::forward_levels(&engine, &[1.0f64, 2.0], 1),
            Err(OndetError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            Transform::reverse_levels(&engine, &[1.0f64, 2.0], 1),
            Err(OndetError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn modwt_facade_defaults_to_the_deepest_level() {
        let engine = ModwtEngine::new(Arc::new(Haar::new()));
        let signal = random_signal(16, 67);
        let flat = Transform::forward(&engine, &signal).unwrap();
        // log2(16) = 4 levels, so 5 rows of 16.
        assert_eq!(flat.len(), 16 * 5);
        let back = Transform::reverse(&engine, &flat).unwrap();
        for (a, b) in signal.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-10);
        }
    }

    #[test]
    fn modwt_facade_rejects_unsplittable_lengths() {
        let engine = ModwtEngine::<f64>::new(Arc::new(Haar::new()));
        assert!(matches!(
            Transform::reverse(&engine, &vec![0.0; 7]),
            Err(OndetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn cwt_facade_requires_scales() {
        let engine = CwtEngine::<f64>::new(Arc::new(Morlet::default()));
        assert!(matches!(
            Transform::forward(&engine, &[1.0, 2.0]),
            Err(OndetError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            Transform::reverse(&engine, &[1.0, 2.0]),
            Err(OndetError::UnsupportedOperation(_))
        ));
    }
}
