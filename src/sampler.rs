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

use std::collections::HashMap;

use crate::error::SamplerError;
use crate::pool::Pool;
use crate::random::RandomSource;
use crate::tree::TreeBasedSampler;

/// Mutable weighted random sampling over an indexed collection of
/// non-negative integer weights of arbitrary magnitude.
///
/// Combines a [`TreeBasedSampler`] whose leaves hold per-bit-length pool
/// totals with one [`Pool`] per distinct bit-length seen among the weights.
/// Sampling first picks a pool by total weight, then an index within that
/// pool — reducing the arbitrary-magnitude problem to sampling among `O(log
/// max_weight)` pools plus a cheap within-pool rejection sampler.
#[derive(Clone, Debug, Default)]
pub struct UpdateableSampler {
    weights: Vec<u64>,
    tree: TreeBasedSampler,
    pools: Vec<Pool>,
    bit_length_index: HashMap<u32, usize>,
}

impl UpdateableSampler {
    /// An empty sampler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sampler from initial weights. Fails with
    /// [`SamplerError::InvalidArgument`] if any weight is negative.
    pub fn from_weights(weights: &[i64]) -> Result<Self, SamplerError> {
        let mut sampler = Self::new();
        for &w in weights {
            sampler.append(w)?;
        }
        Ok(sampler)
    }

    /// Number of weights currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the sampler currently holds no weights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all stored weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.tree.total_weight()
    }

    /// The weight currently stored at `i`.
    pub fn get(&self, i: usize) -> Result<u64, SamplerError> {
        self.weights
            .get(i)
            .copied()
            .ok_or(SamplerError::OutOfRange {
                index: i,
                len: self.len(),
            })
    }

    /// Append a new weight at the end of the sequence. Fails with
    /// [`SamplerError::InvalidArgument`] if `weight` is negative.
    pub fn append(&mut self, weight: i64) -> Result<(), SamplerError> {
        let i = self.len();
        self.weights.push(0);
        if let Err(e) = self.set(i, weight) {
            self.weights.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove and return the last weight.
    pub fn pop(&mut self) -> Result<u64, SamplerError> {
        if self.is_empty() {
            return Err(SamplerError::OutOfRange { index: 0, len: 0 });
        }
        let last = self.len() - 1;
        let result = self.weights[last];
        self.set(last, 0)?;
        self.weights.pop();
        Ok(result)
    }

    /// Remove the weight at `i`, shifting every weight at a higher index down
    /// by one. `O(n log n)`: each shifted slot is reassigned via the same
    /// path as [`Self::set`].
    pub fn delete(&mut self, i: usize) -> Result<(), SamplerError> {
        if i >= self.len() {
            return Err(SamplerError::OutOfRange {
                index: i,
                len: self.len(),
            });
        }
        for j in i..self.len() - 1 {
            let next = self.weights[j + 1];
            self.set_u64(j, next)?;
        }
        self.pop()?;
        Ok(())
    }

    /// Set the weight at `i` to `v`. A no-op with respect to all observable
    /// state if `v` already equals the stored weight. Fails with
    /// [`SamplerError::InvalidArgument`] if `v` is negative, or
    /// [`SamplerError::OutOfRange`] if `i` is out of bounds.
    pub fn set(&mut self, i: usize, v: i64) -> Result<(), SamplerError> {
        if i >= self.len() {
            return Err(SamplerError::OutOfRange {
                index: i,
                len: self.len(),
            });
        }
        if v < 0 {
            return Err(SamplerError::InvalidArgument(format!(
                "weight {v} is negative"
            )));
        }
        self.set_u64(i, v as u64)
    }

    /// Core of `set`, operating directly on the internal `u64` representation
    /// so that shifting already-stored weights (in `delete`) never needs a
    /// lossy `i64` round-trip. `i` must already be in range.
    fn set_u64(&mut self, i: usize, v: u64) -> Result<(), SamplerError> {
        let prev = self.weights[i];
        self.weights[i] = v;
        if prev == v {
            return Ok(());
        }

        let bv = crate::bit_length(v);
        let bi = match self.bit_length_index.get(&bv) {
            Some(&bi) => bi,
            None => {
                let bi = self.tree.len();
                self.tree.append(0);
                self.pools.push(Pool::new(bv));
                self.bit_length_index.insert(bv, bi);
                bi
            }
        };

        let bp = crate::bit_length(prev);
        if bp != bv {
            if prev > 0 {
                let prev_bi = self.bit_length_index[&bp];
                self.pools[prev_bi]
                    .remove(i)
                    .expect("pool invariant violated: index missing from its bit-length pool");
                let new_total = self.tree.get(prev_bi)? - prev;
                self.tree.set(prev_bi, new_total)?;
            }
            if v > 0 {
                let new_total = self.tree.get(bi)? + v;
                self.tree.set(bi, new_total)?;
                self.pools[bi].insert_or_update(i, v);
            }
        } else {
            // same positive bit-length (bp == bv == 0 would mean prev == v == 0,
            // already handled above): adjust the pool total in place.
            let new_total = (self.tree.get(bi)? + v) - prev;
            self.tree.set(bi, new_total)?;
            self.pools[bi].insert_or_update(i, v);
        }
        Ok(())
    }

    /// Sample an index with probability proportional to its weight. Fails
    /// with [`SamplerError::ZeroWeight`] if the total weight is zero.
    pub fn sample(&mut self, rand: &mut impl RandomSource) -> Result<usize, SamplerError> {
        if self.total_weight() == 0 {
            return Err(SamplerError::ZeroWeight);
        }
        let bi = self.tree.sample(rand)?;
        Ok(self.pools[bi].sample(rand))
    }
}
