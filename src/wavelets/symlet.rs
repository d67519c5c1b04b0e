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

const SYM4_LO: [f64; 8] = [
    -0.0757657147893407,
    -0.0296355276459541,
    0.4976186676324578,
    0.8037387518052163,
    0.2978577956055422,
    -0.0992195435769354,
    -0.0126039672622612,
    0.0322231006040713,
];

const SYM8_LO: [f64; 16] = [
    -0.0033824159513594,
    -0.0005421323316355,
    0.0316950878103452,
    0.0076074873252848,
    -0.1432942383510542,
    -0.0612733590679088,
    0.4813596512592012,
    0.7771857516997478,
    0.3644418948359564,
    -0.0519458381078751,
    -0.0272190299168137,
    0.0491371796734768,
    0.0038087520140601,
    -0.0149522583367926,
    -0.0003029205145516,
    0.0018899503329007,
];

/// Symlet wavelets, the least-asymmetric Daubechies variants.
#[derive(Debug, Clone)]
pub struct Symlet<T> {
    bank: QmfBank<T>,
    name: &'static str,
}

impl<T: Sample> Symlet<T>
where
    f64: AsPrimitive<T>,
{
    /// Builds the Symlet wavelet of the given order. Orders 4 and 8 carry
    /// coefficient tables; anything else is rejected.
    pub fn new(order: usize) -> Result<Self, OndetError> {
        let (table, name): (&[f64], _) = match order {
            4 => (&SYM4_LO, "sym4"),
            8 => (&SYM8_LO, "sym8"),
            _ => {
                return Err(OndetError::InvalidArgument(format!(
                    "Symlet::new supports orders 4 and 8 but order was {order}"
                )));
            }
        };
        Ok(Self {
            bank: QmfBank::from_lowpass(table),
            name,
        })
    }
}

impl<T: Sample> DiscreteWavelet<T> for Symlet<T> {
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
