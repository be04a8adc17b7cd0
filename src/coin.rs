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

use crate::error::SamplerError;
use crate::random::RandomSource;

/// A biased coin over integer odds `(false_weight, true_weight)`, sampled
/// using only fair bits via halves-and-subtract refinement (the
/// single-Bernoulli analogue of Knuth-Yao).
///
/// The coin draws `true` with probability `true_weight / (false_weight +
/// true_weight)`. Each call to [`CoinSampler::sample`] may refine and grow an
/// internal cache of "residual odds" pairs; the cache is never shrunk, so
/// repeated draws amortize the work of previous ones.
#[derive(Clone, Debug)]
pub struct CoinSampler {
    // choice_weights[k] == (f_k, t_k), materialized lazily as `sample` walks
    // deeper. choice_weights[0] is always the constructor's (false, true).
    choice_weights: Vec<(u64, u64)>,
}

impl CoinSampler {
    /// Construct a coin with the given odds. Fails with
    /// [`SamplerError::InvalidArgument`] unless at least one of the weights is
    /// positive.
    pub fn new(false_weight: u64, true_weight: u64) -> Result<Self, SamplerError> {
        if false_weight == 0 && true_weight == 0 {
            return Err(SamplerError::InvalidArgument(
                "CoinSampler requires at least one of false_weight, true_weight to be positive"
                    .to_string(),
            ));
        }
        Ok(Self {
            choice_weights: vec![(false_weight, true_weight)],
        })
    }

    /// Draw a biased boolean, consuming fair bits from `rand` and refining
    /// the internal cache as needed.
    pub fn sample(&mut self, rand: &mut impl RandomSource) -> bool {
        let mut i = 0;
        loop {
            debug_assert!(i <= self.choice_weights.len());
            if i == self.choice_weights.len() {
                let (f, t) = self.choice_weights[i - 1];
                debug_assert_ne!(f, t);
                if t > f {
                    self.choice_weights.push((f, t - f));
                } else {
                    self.choice_weights.push((f - t, t));
                }
            }
            let (f, t) = self.choice_weights[i];
            if f == 0 {
                debug_assert!(t > 0);
                return true;
            } else if t == 0 {
                debug_assert!(f > 0);
                return false;
            } else if f == t {
                return rand.next_bit();
            } else if rand.next_bit() {
                return t > f;
            } else {
                i += 1;
            }
        }
    }
}
