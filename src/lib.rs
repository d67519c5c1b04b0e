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
//! Time-frequency transforms over real signals: an arbitrary-length FFT,
//! a shift-invariant multi-level MODWT with perfect reconstruction, and a
//! CWT over caller-supplied scales with direct and spectral convolution
//! paths plus parallel scheduling.
#![allow(clippy::excessive_precision)]

mod cwt;
mod cwt_result;
mod err;
mod fft;
mod filter_bank;
mod mla;
mod modwt;
mod sample;
mod scales;
mod transform;
mod wavelet;
mod wavelets;

pub use cwt::{CwtEngine, PaddingMode, Parallelism};
pub use cwt_result::CwtResult;
pub use err::OndetError;
pub use fft::FftEngine;
pub use modwt::{ConvolutionMethod, MAX_SUPPORTED_LEVEL, ModwtEngine};
pub use sample::Sample;
pub use scales::{generate_linear_scales, generate_log_scales};
pub use transform::Transform;
pub use wavelet::{ContinuousWavelet, DiscreteWavelet};
pub use wavelets::{Coiflet, Daubechies, Haar, MexicanHat, Morlet, Paul, Symlet};
