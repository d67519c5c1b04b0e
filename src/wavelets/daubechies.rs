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

const DB2_LO: [f64; 4] = [
    0.4829629131445341,
    0.8365163037378079,
    0.2241438680420134,
    -0.1294095225512604,
];

const DB3_LO: [f64; 6] = [
    0.3326705529500826,
    0.8068915093110925,
    0.4598775021184915,
    -0.1350110200102546,
    -0.0854412738820267,
    0.0352262918857095,
];

const DB4_LO: [f64; 8] = [
    0.2303778133088965,
    0.7148465705529156,
    0.6308807679298589,
    -0.0279837694168599,
    -0.1870348117190930,
    0.0308413818355607,
    0.0328830116668852,
    -0.0105974017850690,
];

/// Daubechies orthogonal wavelets with `2 * order` filter taps.
#[derive(Debug, Clone)]
pub struct Daubechies<T> {
    bank: QmfBank<T>,
    name: &'static str,
}

impl<T: Sample> Daubechies<T>
where
    f64: AsPrimitive<T>,
{
    /// Builds the Daubechies wavelet of the given order. Orders 2, 3 and 4
    /// carry coefficient tables; anything else is rejected.
    pub fn new(order: usize) -> Result<Self, OndetError> {
        let (table, name): (&[f64], _) = match order {
            2 => (&DB2_LO, "db2"),
            3 => (&DB3_LO, "db3"),
            4 => (&DB4_LO, "db4"),
            _ => {
                return Err(OndetError::InvalidArgument(format!(
                    "Daubechies::new supports orders 2..=4 but order was {order}"
                )));
            }
        };
        Ok(Self {
            bank: QmfBank::from_lowpass(table),
            name,
        })
    }
}

impl<T: Sample> DiscreteWavelet<T> for Daubechies<T> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_are_orthonormal() {
        for order in 2..=4 {
            let w: Daubechies<f64> = Daubechies::new(order).unwrap();
            let lo = w.scaling_dec();
            let energy: f64 = lo.iter().map(|x| x * x).sum();
            assert!((energy - 1.0).abs() < 1e-12, "order {order}");
            let sum: f64 = lo.iter().sum();
            assert!((sum - std::f64::consts::SQRT_2).abs() < 1e-10, "order {order}");
        }
    }

    #[test]
    fn unsupported_order_is_rejected() {
        assert!(Daubechies::<f64>::new(9).is_err());
    }
}
