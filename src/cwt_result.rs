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
use num_complex::Complex;
use num_traits::Zero;

/// Principal argument in (-pi, pi]. `atan2` alone lands on -pi for inputs
/// like `(-1, -0.0)`; that branch folds onto +pi here.
#[inline]
pub(crate) fn principal_arg<T: Sample>(value: Complex<T>) -> T {
    let phase = value.im.atan2(value.re);
    if phase == -T::PI { T::PI } else { phase }
}

/// Scale-time grid of CWT coefficients with its analysis context.
///
/// The grid is `number_of_scales` rows by `number_of_time_points` columns,
/// one row per scale in the order the scales were supplied. Every derived
/// view is a pure function of the grid.
#[derive(Debug, Clone)]
pub struct CwtResult<T> {
    coeffs: Vec<Vec<Complex<T>>>,
    scales: Vec<T>,
    time_axis: Vec<T>,
    sampling_rate: T,
    wavelet_name: String,
}

impl<T: Sample> CwtResult<T> {
    pub(crate) fn new(
        coeffs: Vec<Vec<Complex<T>>>,
        scales: Vec<T>,
        time_axis: Vec<T>,
        sampling_rate: T,
        wavelet_name: String,
    ) -> Self {
        Self {
            coeffs,
            scales,
            time_axis,
            sampling_rate,
            wavelet_name,
        }
    }

    pub fn coefficients(&self) -> &[Vec<Complex<T>>] {
        &self.coeffs
    }

    pub fn scales(&self) -> &[T] {
        &self.scales
    }

    pub fn time_axis(&self) -> &[T] {
        &self.time_axis
    }

    pub fn sampling_rate(&self) -> T {
        self.sampling_rate
    }

    pub fn wavelet_name(&self) -> &str {
        &self.wavelet_name
    }

    pub fn number_of_scales(&self) -> usize {
        self.coeffs.len()
    }

    pub fn number_of_time_points(&self) -> usize {
        self.coeffs.first().map_or(0, |row| row.len())
    }

    /// `|W(s, t)|` per cell.
    pub fn magnitude(&self) -> Vec<Vec<T>> {
        self.map_cells(|c| c.re.hypot(c.im))
    }

    /// Phase per cell, always inside (-pi, pi].
    pub fn phase(&self) -> Vec<Vec<T>> {
        self.map_cells(principal_arg)
    }

    pub fn real(&self) -> Vec<Vec<T>> {
        self.map_cells(|c| c.re)
    }

    pub fn imaginary(&self) -> Vec<Vec<T>> {
        self.map_cells(|c| c.im)
    }

    /// Energy per scale: the squared magnitudes summed along time.
    pub fn scalogram(&self) -> Vec<T> {
        self.coeffs
            .iter()
            .map(|row| {
                let mut acc = T::zero();
                for c in row.iter() {
                    acc += c.re * c.re + c.im * c.im;
                }
                acc
            })
            .collect()
    }

    /// Coefficient row of one scale.
    pub fn coefficients_at_scale(&self, index: usize) -> Result<&[Complex<T>], OndetError> {
        self.coeffs
            .get(index)
            .map(|row| row.as_slice())
            .ok_or(OndetError::OutOfBounds(index, self.coeffs.len()))
    }

    /// Coefficient column of one time instant, across all scales.
    pub fn coefficients_at_time(&self, index: usize) -> Result<Vec<Complex<T>>, OndetError> {
        let width = self.number_of_time_points();
        if index >= width {
            return Err(OndetError::OutOfBounds(index, width));
        }
        let mut out = try_vec![Complex::<T>::zero(); self.coeffs.len()];
        for (dst, row) in out.iter_mut().zip(self.coeffs.iter()) {
            *dst = row[index];
        }
        Ok(out)
    }

    /// Converts each scale to its pseudo-frequency,
    /// `center_frequency * sampling_rate / scale`.
    pub fn scale_to_frequency(&self, center_frequency: T) -> Vec<T> {
        self.scales
            .iter()
            .map(|&s| center_frequency * self.sampling_rate / s)
            .collect()
    }

    fn map_cells<F: Fn(Complex<T>) -> T>(&self, f: F) -> Vec<Vec<T>> {
        self.coeffs
            .iter()
            .map(|row| row.iter().map(|&c| f(c)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> CwtResult<f64> {
        let row = vec![
            Complex::new(1.0, 0.0),
            Complex::new(0.0, 1.0),
            Complex::new(1.0, 1.0),
        ];
        CwtResult::new(
            vec![row],
            vec![1.0],
            vec![0.0, 0.1, 0.2],
            10.0,
            "morlet".to_string(),
        )
    }

    #[test]
    fn magnitude_and_phase_derivations() {
        let result = sample_result();
        let magnitude = result.magnitude();
        assert!((magnitude[0][0] - 1.0).abs() < 1e-12);
        assert!((magnitude[0][1] - 1.0).abs() < 1e-12);
        assert!((magnitude[0][2] - 2.0f64.sqrt()).abs() < 1e-12);
        let phase = result.phase();
        assert!(phase[0][0].abs() < 1e-12);
        assert!((phase[0][1] - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((phase[0][2] - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn phase_stays_in_the_principal_branch() {
        assert!((principal_arg(Complex::new(-1.0f64, 0.0)) - std::f64::consts::PI).abs() < 1e-12);
        assert!(
            (principal_arg(Complex::new(0.0f64, -1.0)) + std::f64::consts::FRAC_PI_2).abs()
                < 1e-12
        );
        // Exactly -pi folds onto +pi.
        assert_eq!(
            principal_arg(Complex::new(-1.0f64, -0.0)),
            std::f64::consts::PI
        );
    }

    #[test]
    fn scale_to_frequency_is_reciprocal_in_scale() {
        let result = CwtResult::new(
            vec![vec![Complex::new(0.0f64, 0.0)], vec![Complex::new(0.0, 0.0)]],
            vec![1.0, 2.0],
            vec![0.0],
            10.0,
            "morlet".to_string(),
        );
        let freqs = result.scale_to_frequency(1.0);
        assert!((freqs[0] - 10.0).abs() < 1e-12);
        assert!((freqs[1] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn scalogram_sums_squared_magnitudes() {
        let result = sample_result();
        let scalogram = result.scalogram();
        assert_eq!(scalogram.len(), 1);
        assert!((scalogram[0] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_bounds_accessors_fail() {
        let result = sample_result();
        assert!(result.coefficients_at_scale(0).is_ok());
        assert!(matches!(
            result.coefficients_at_scale(1),
            Err(OndetError::OutOfBounds(1, 1))
        ));
        assert!(result.coefficients_at_time(2).is_ok());
        assert!(matches!(
            result.coefficients_at_time(3),
            Err(OndetError::OutOfBounds(3, 3))
        ));
    }
}
