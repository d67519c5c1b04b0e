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
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Errors surfaced by the transform engines.
///
/// Every variant carries enough context to name the offending method,
/// parameter and bound; the engines never partially mutate output on failure.
#[derive(Debug)]
pub enum OndetError {
    /// Indicates a failure to allocate the memory required for the resulting vector.
    /// The associated value is the requested size (`usize`) of the allocation.
    Allocation(usize),
    /// Null/empty input where not allowed, mismatched dimensions, non-positive
    /// scales, reversed scale ranges, or an odd-length interleaved spectrum.
    InvalidArgument(String),
    /// Decomposition level below 1, above the supported maximum, or above
    /// what the signal length admits.
    InvalidLevel(String),
    /// Length is not a power of two where the operation requires one.
    InvalidLength(String),
    /// The operation does not exist for this engine (e.g. a levelled FFT,
    /// or a CWT without explicit scales).
    UnsupportedOperation(String),
    /// Scale or time index outside the coefficient grid: `(index, bound)`.
    OutOfBounds(usize, usize),
    /// An upsampled filter length would exceed addressable capacity.
    IndexOverflow(usize),
}

impl Display for OndetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OndetError::Allocation(size) => {
                f.write_fmt(format_args!("Failed to allocate buffer with size {size}"))
            }
            OndetError::InvalidArgument(msg) => f.write_str(msg),
            OndetError::InvalidLevel(msg) => f.write_str(msg),
            OndetError::InvalidLength(msg) => f.write_str(msg),
            OndetError::UnsupportedOperation(msg) => f.write_str(msg),
            OndetError::OutOfBounds(index, bound) => f.write_fmt(format_args!(
                "Index {index} is outside the coefficient grid of size {bound}"
            )),
            OndetError::IndexOverflow(level) => f.write_fmt(format_args!(
                "Upsampled filter length at level {level} exceeds addressable capacity"
            )),
        }
    }
}

impl Error for OndetError {}

macro_rules! try_vec {
    () => {
        Vec::new()
    };
    ($elem:expr; $n:expr) => {{
        let mut v = Vec::new();
        v.try_reserve_exact($n)
            .map_err(|_| crate::err::OndetError::Allocation($n))?;
        v.resize($n, $elem);
        v
    }};
}

pub(crate) use try_vec;
