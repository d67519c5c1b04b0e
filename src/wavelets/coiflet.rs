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
use crate::err::OndetError;
use crate::sample::Sample;
use crate::wavelet::DiscreteWavelet;
use num_traits::AsPrimitive;

const COIF1_LO: [f64; 6] = [
    -0.0156557285289848,
    -0.0727326213410511,
    0.3848648565381134,
    0.8525720416423900,
    0.3378976709511590,
    -0.0727322757411889,
];

const COIF2_LO: [f64; 12] = [
    0.0011945726958388,
    -0.0016290733601404,
    -0.0189155298252868,
    0.0211018340249299,
    0.0997835515523118,
    -0.0975016055873225,
    -0.2262646939654400,
    0.3152503517091982,
    0.7511339080210959,
    0.4946238903984533,
    0.1115407433501095,
    -0.0315820393174862,
];

/// Coiflet wavelets, near-symmetric with vanishing scaling moments.
#[derive(Debug, Clone)]
pub struct Coiflet<T> {
    bank: QmfBank<T>,
    name: &'static str,
}

impl<T: Sample> Coiflet<T>
where
    f64: AsPrimitive<T>,
{
    /// Builds the Coiflet wavelet of the given order. Orders 1 and 2 carry
    /// coefficient tables; anything else is rejected.
    pub fn new(order: usize) -> Result<Self, OndetError> {
        let (table, name): (&[f64], _) = match order {
            1 => (&COIF1_LO, "coif1"),
            2 => (&COIF2_LO, "coif2"),
            _ => {
                return Err(OndetError::InvalidArgument(format!(
                    "Coiflet::new supports orders 1 and 2 but order was {order}"
                )));
            }
        };
        Ok(Self {
            bank: QmfBank::from_lowpass(table),
            name,
        })
    }
}

impl<T: Sample> DiscreteWavelet<T> for Coiflet<T> {
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
        self.bank.lo_d.len().next_power_of_two()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
