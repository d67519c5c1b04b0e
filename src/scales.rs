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
use crate::mla::fmla;
use crate::sample::Sample;
use num_traits::{AsPrimitive, Zero};

fn validate_range<T: Sample>(
    method: &str,
    min_scale: T,
    max_scale: T,
    count: usize,
) -> Result<(), OndetError> {
    if !(min_scale > T::zero()) {
        return Err(OndetError::InvalidArgument(format!(
            "{method} requires a positive minimum scale but it was {min_scale}"
        )));
    }
    if !(max_scale > min_scale) {
        return Err(OndetError::InvalidArgument(format!(
            "{method} requires min < max but the range was [{min_scale}, {max_scale}]"
        )));
    }
    if count < 2 {
        return Err(OndetError::InvalidArgument(format!(
            "{method} requires at least 2 scales but count was {count}"
        )));
    }
    Ok(())
}

/// Geometrically spaced scales: `count` values from `min_scale` to
/// `max_scale` inclusive, evenly spread in log2.
pub fn generate_log_scales<T: Sample>(
    min_scale: T,
    max_scale: T,
    count: usize,
) -> Result<Vec<T>, OndetError>
where
    usize: AsPrimitive<T>,
{
    validate_range("generate_log_scales", min_scale, max_scale, count)?;
    let lo = min_scale.log2();
    let step = (max_scale.log2() - lo) / (count - 1).as_();
    let mut out = try_vec![T::zero(); count];
    for (i, dst) in out.iter_mut().enumerate() {
        *dst = if i == count - 1 {
            max_scale
        } else {
            fmla(i.as_(), step, lo).exp2()
        };
    }
    Ok(out)
}

/// Uniformly spaced scales from `min_scale` to `max_scale` inclusive.
pub fn generate_linear_scales<T: Sample>(
    min_scale: T,
    max_scale: T,
    count: usize,
) -> Result<Vec<T>, OndetError>
where
    usize: AsPrimitive<T>,
{
    validate_range("generate_linear_scales", min_scale, max_scale, count)?;
    let step = (max_scale - min_scale) / (count - 1).as_();
    let mut out = try_vec![T::zero(); count];
    for (i, dst) in out.iter_mut().enumerate() {
        *dst = if i == count - 1 {
            max_scale
        } else {
            fmla(i.as_(), step, min_scale)
        };
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_scales_hit_octaves() {
        let scales: Vec<f64> = generate_log_scales(1.0, 8.0, 4).unwrap();
        let expected = [1.0, 2.0, 4.0, 8.0];
        for (a, b) in scales.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn linear_scales_are_uniform() {
        let scales: Vec<f64> = generate_linear_scales(2.0, 10.0, 5).unwrap();
        let expected = [2.0, 4.0, 6.0, 8.0, 10.0];
        for (a, b) in scales.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        assert!(matches!(
            generate_log_scales(0.0f64, 8.0, 4),
            Err(OndetError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_log_scales(8.0f64, 1.0, 4),
            Err(OndetError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_linear_scales(1.0f64, 8.0, 1),
            Err(OndetError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_linear_scales(-2.0f64, 8.0, 4),
            Err(OndetError::InvalidArgument(_))
        ));
    }
}
