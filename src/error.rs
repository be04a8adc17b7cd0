// MIT License

// Copyright (c) 2026 the updateable-sampler contributors

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use thiserror::Error;

/// Errors produced by the sampler types in this crate.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SamplerError {
    /// A constructor or mutator was given an argument that violates its
    /// preconditions: a negative weight, a zero/zero coin, or a weight sum
    /// that overflows `u64`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index was outside `[0, len)`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length the index was checked against.
        len: usize,
    },

    /// `sample` was called while the total weight of the structure is zero.
    #[error("cannot sample: total weight is zero")]
    ZeroWeight,

    /// A `Pool` was asked to remove an index it does not contain. This can
    /// only happen if an invariant has already been broken elsewhere in the
    /// crate; it is never reachable through correct use of `UpdateableSampler`
    /// or `TreeBasedSampler`.
    #[error("index {0} not present in pool")]
    NotFound(usize),
}
