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
use crate::wavelet::DiscreteWavelet;
use num_traits::{AsPrimitive, Zero};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Base MODWT filter pair: the wavelet's decomposition filters rescaled to
/// unit L2 norm and divided by sqrt(2).
#[derive(Debug, Clone)]
pub(crate) struct BaseFilters<T> {
    pub(crate) scaling: Vec<T>,
    pub(crate) wavelet: Vec<T>,
}

/// Per-level filter pair with `2^(level-1) - 1` zeros between taps.
#[derive(Debug, Clone)]
pub(crate) struct LevelFilters<T> {
    pub(crate) scaling: Vec<T>,
    pub(crate) wavelet: Vec<T>,
}

/// Lazily populated cache of upsampled MODWT filters, keyed by level.
///
/// Lookups take the read lock; a miss re-checks under the write lock and
/// computes the entry while holding it, so every `(level, filter)` pair is
/// built at most once and readers only ever observe finished entries.
/// `clear` empties the base pair and the level map in one critical section;
/// the base filters re-derive on the next use. Lock order is always base
/// before levels.
pub(crate) struct FilterBank<T> {
    base: RwLock<Option<Arc<BaseFilters<T>>>>,
    levels: RwLock<HashMap<usize, Arc<LevelFilters<T>>>>,
}

impl<T: Sample> FilterBank<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn new() -> Self {
        Self {
            base: RwLock::new(None),
            levels: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn base(
        &self,
        wavelet: &dyn DiscreteWavelet<T>,
    ) -> Result<Arc<BaseFilters<T>>, OndetError> {
        if let Some(base) = self.base.read().as_ref() {
            return Ok(base.clone());
        }
        let mut slot = self.base.write();
        if let Some(base) = slot.as_ref() {
            return Ok(base.clone());
        }
        let base = Arc::new(derive_base(wavelet)?);
        *slot = Some(base.clone());
        Ok(base)
    }

    pub(crate) fn level(
        &self,
        wavelet: &dyn DiscreteWavelet<T>,
        level: usize,
    ) -> Result<Arc<LevelFilters<T>>, OndetError> {
        if let Some(entry) = self.levels.read().get(&level) {
            return Ok(entry.clone());
        }
        let base = self.base(wavelet)?;
        let mut levels = self.levels.write();
        if let Some(entry) = levels.get(&level) {
            return Ok(entry.clone());
        }
        let entry = Arc::new(LevelFilters {
            scaling: upsample(&base.scaling, level)?,
            wavelet: upsample(&base.wavelet, level)?,
        });
        levels.insert(level, entry.clone());
        Ok(entry)
    }

    pub(crate) fn clear(&self) {
        let mut base = self.base.write();
        let mut levels = self.levels.write();
        *base = None;
        levels.clear();
    }
}

fn derive_base<T: Sample>(wavelet: &dyn DiscreteWavelet<T>) -> Result<BaseFilters<T>, OndetError>
where
    f64: AsPrimitive<T>,
{
    Ok(BaseFilters {
        scaling: rescale(wavelet.scaling_dec(), wavelet.name(), "scaling_dec")?,
        wavelet: rescale(wavelet.wavelet_dec(), wavelet.name(), "wavelet_dec")?,
    })
}

/// Unit L2 norm, then the MODWT 1/sqrt(2) rescale, in one factor.
fn rescale<T: Sample>(filter: &[T], wavelet: &str, kind: &str) -> Result<Vec<T>, OndetError>
where
    f64: AsPrimitive<T>,
{
    if filter.len() < 2 {
        return Err(OndetError::InvalidArgument(format!(
            "Wavelet {wavelet} filter {kind} must have at least 2 taps but it was {}",
            filter.len()
        )));
    }
    let mut energy = T::zero();
    for &x in filter.iter() {
        energy += x * x;
    }
    let scale = (energy + energy).rsqrt();
    let mut out = try_vec![T::zero(); filter.len()];
    for (dst, &src) in out.iter_mut().zip(filter.iter()) {
        *dst = src * scale;
    }
    Ok(out)
}

/// Inserts `2^(level-1) - 1` zeros between consecutive taps.
fn upsample<T: Sample>(filter: &[T], level: usize) -> Result<Vec<T>, OndetError> {
    let stride = 1usize
        .checked_shl(level as u32 - 1)
        .ok_or(OndetError::IndexOverflow(level))?;
    let up_len = (filter.len() - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(1))
        .filter(|&v| v <= isize::MAX as usize)
        .ok_or(OndetError::IndexOverflow(level))?;
    let mut out = try_vec![T::zero(); up_len];
    for (i, &tap) in filter.iter().enumerate() {
        out[i * stride] = tap;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavelets::Haar;

    #[test]
    fn base_filters_carry_the_modwt_rescale() {
        let bank: FilterBank<f64> = FilterBank::new();
        let haar = Haar::new();
        let base = bank.base(&haar).unwrap();
        assert_eq!(base.scaling.len(), 2);
        assert!((base.scaling[0] - 0.5).abs() < 1e-12);
        assert!((base.scaling[1] - 0.5).abs() < 1e-12);
        assert!((base.wavelet[0] - 0.5).abs() < 1e-12);
        assert!((base.wavelet[1] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn upsampled_levels_interleave_zeros() {
        let bank: FilterBank<f64> = FilterBank::new();
        let haar = Haar::new();
        let level3 = bank.level(&haar, 3).unwrap();
        // Gap of 2^2 - 1 = 3 zeros between the two Haar taps.
        assert_eq!(level3.scaling.len(), 5);
        assert!((level3.scaling[0] - 0.5).abs() < 1e-12);
        assert_eq!(level3.scaling[1], 0.0);
        assert_eq!(level3.scaling[2], 0.0);
        assert_eq!(level3.scaling[3], 0.0);
        assert!((level3.scaling[4] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn clear_rebuilds_identical_entries() {
        let bank: FilterBank<f64> = FilterBank::new();
        let haar = Haar::new();
        let before = bank.level(&haar, 2).unwrap();
        bank.clear();
        let after = bank.level(&haar, 2).unwrap();
        assert_eq!(before.scaling, after.scaling);
        assert_eq!(before.wavelet, after.wavelet);
    }
}
