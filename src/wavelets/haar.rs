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
use super::QmfBank;
use crate::DiscreteWavelet;
use crate::sample::Sample;
use num_traits::AsPrimitive;

const HAAR_LO: [f64; 2] = [0.7071067811865476, 0.7071067811865476];

/// The Haar wavelet, the two-tap member of the Daubechies family.
#[derive(Debug, Clone)]
pub struct Haar<T> {
    bank: QmfBank<T>,
}

impl<T: Sample> Haar<T>
where
    f64: AsPrimitive<T>,
{
    pub fn new() -> Self {
        Self {
            bank: QmfBank::from_lowpass(&HAAR_LO),
        }
    }
}

impl<T: Sample> Default for Haar<T>
where
    f64: AsPrimitive<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> DiscreteWavelet<T> for Haar<T> {
    fn scaling_dec(&self) -> &[T] {
        &self.bank.lo_d
    }

    fn wavelet_dec(&self) -> &[T] {
        &self.bank.hi_d
    }

    fn scaling_rec(&self) -> &[T] {
        &self.bank.lo_r
    }

    fn wavelet_rec(&self) -> &[T] {
        &self.bank.hi_r
    }

    fn transform_wavelength(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "haar"
    }
}
