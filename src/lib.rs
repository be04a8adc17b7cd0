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

//! # Updateable Sampler
//! A library for mutable weighted random sampling from an indexed collection
//! of non-negative integer weights of arbitrary magnitude, supporting point
//! updates, appends, and removals while drawing index samples with
//! probability proportional to weight.
//!
//! The sampler is a three-layer composition:
//!
//! 1. [`CoinSampler`] — a biased coin over integer odds, sampled using only
//!    fair bits via halves-and-subtract refinement (a single-Bernoulli
//!    analogue of Knuth-Yao).
//! 2. [`Pool`] — an unordered multiset of entries sharing a bit-length,
//!    sampled by uniform pick plus bitwise rejection.
//! 3. [`TreeBasedSampler`] — an implicit-heap-shaped weighted index using a
//!    [`CoinSampler`] at every internal node.
//!
//! [`UpdateableSampler`] composes all three: one [`Pool`] per distinct
//! bit-length present among the current weights, and a [`TreeBasedSampler`]
//! whose leaves hold per-pool totals. This achieves `O(log n)` update cost
//! and `O(log W)` expected sampling work from arbitrarily large integer
//! weights, using only unbiased coin flips and bounded uniform draws.
//!
//! ### Citation
//! This crate is an independent re-implementation of the sampling scheme
//! used by David R. MacIver's `updateable-sampler` (Python), which is itself
//! related to the weighted-choice machinery used internally by the
//! Hypothesis property-based testing library.

mod coin;
mod error;
mod pool;
mod random;
mod sampler;
mod tree;

pub use coin::CoinSampler;
pub use error::SamplerError;
pub use pool::Pool;
pub use random::RandomSource;
pub use sampler::UpdateableSampler;
pub use tree::TreeBasedSampler;

#[cfg(feature = "rand")]
pub use random::rand;

/// Position of the most significant set bit, plus one; `bit_length(0) == 0`.
pub(crate) fn bit_length(w: u64) -> u32 {
    u64::BITS - w.leading_zeros()
}
