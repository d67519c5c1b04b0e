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
mod coiflet;
mod daubechies;
mod haar;
mod mexican_hat;
mod morlet;
mod paul;
mod symlet;

pub use coiflet::Coiflet;
pub use daubechies::Daubechies;
pub use haar::Haar;
pub use mexican_hat::MexicanHat;
pub use morlet::Morlet;
pub use paul::Paul;
pub use symlet::Symlet;

use crate::sample::Sample;
use num_traits::AsPrimitive;

/// Quadrature-mirror filter bank shared by the orthogonal discrete
/// families. Built from a low-pass decomposition table; the high-pass
/// companion alternates signs and reverses, reconstruction filters are the
/// time-reversed decomposition pair.
#[derive(Debug, Clone)]
pub(crate) struct QmfBank<T> {
    pub(crate) lo_d: Vec<T>,
    pub(crate) hi_d: Vec<T>,
    pub(crate) lo_r: Vec<T>,
    pub(crate) hi_r: Vec<T>,
}

impl<T: Sample> QmfBank<T>
where
    f64: AsPrimitive<T>,
{
    pub(crate) fn from_lowpass(table: &[f64]) -> Self {
        let lo_d: Vec<T> = table.iter().map(|&x| x.as_()).collect();
        let hi_d: Vec<T> = lo_d
            .iter()
            .enumerate()
            .map(|(i, &x)| if i % 2 == 0 { -x } else { x })
            .rev()
            .collect();
        let lo_r: Vec<T> = lo_d.iter().rev().copied().collect();
        let hi_r: Vec<T> = hi_d.iter().rev().copied().collect();
        Self {
            lo_d,
            hi_d,
            lo_r,
            hi_r,
        }
    }
}
