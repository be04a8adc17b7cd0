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

use crate::coin::CoinSampler;
use crate::error::SamplerError;
use crate::random::RandomSource;

/// A dynamic weighted index over a sequence of `n` non-negative integer
/// weights, laid out as an implicit binary heap (children of `i` are `2i+1`
/// and `2i+2`). Supports `O(log n)` point update and `O(log n)` expected
/// sampling without floating-point cumulative sums: each internal node holds
/// a lazily materialized [`CoinSampler`] deciding self-vs-children, and
/// another deciding left-child-vs-right-child.
#[derive(Clone, Debug, Default)]
pub struct TreeBasedSampler {
    weight: Vec<u64>,
    child_weight: Vec<u64>,
    self_coin: Vec<Option<CoinSampler>>,
    left_coin: Vec<Option<CoinSampler>>,
}

impl TreeBasedSampler {
    /// An empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from initial weights. Fails with
    /// [`SamplerError::InvalidArgument`] if any weight is negative.
    pub fn from_weights(weights: &[i64]) -> Result<Self, SamplerError> {
        let mut tree = Self::new();
        for &w in weights {
            if w < 0 {
                return Err(SamplerError::InvalidArgument(format!(
                    "weight {w} is negative"
                )));
            }
            tree.append(w as u64);
        }
        Ok(tree)
    }

    /// Number of leaves currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weight.len()
    }

    /// Whether the tree currently holds no leaves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weight.is_empty()
    }

    /// The weight stored at leaf `i`.
    pub fn get(&self, i: usize) -> Result<u64, SamplerError> {
        self.weight.get(i).copied().ok_or(SamplerError::OutOfRange {
            index: i,
            len: self.len(),
        })
    }

    /// Sum of all weights in the structure: `total(0)`.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.total(0)
    }

    fn total(&self, i: usize) -> u64 {
        if i >= self.len() {
            0
        } else {
            self.weight[i] + self.child_weight[i]
        }
    }

    /// Append a new leaf with the given weight.
    pub fn append(&mut self, v: u64) {
        self.weight.push(0);
        self.child_weight.push(0);
        self.self_coin.push(None);
        self.left_coin.push(None);
        let last = self.len() - 1;
        // weight[last] == 0 already, so set() will short-circuit unless v != 0.
        self.set(last, v).expect("just-pushed index is in range");
    }

    /// Remove and return the weight of the last leaf.
    pub fn pop(&mut self) -> Result<u64, SamplerError> {
        if self.is_empty() {
            return Err(SamplerError::OutOfRange { index: 0, len: 0 });
        }
        let last = self.len() - 1;
        let result = self.weight[last];
        // Zero the weight first so ancestor sums are restored before removal.
        self.set(last, 0).expect("last index is in range");
        self.weight.pop();
        self.child_weight.pop();
        self.self_coin.pop();
        self.left_coin.pop();
        Ok(result)
    }

    /// Point-update the weight at `i`, restoring invariants along the path to
    /// the root. A no-op (including with respect to the sampling
    /// distribution under any fixed `rand` prefix) if `v` equals the current
    /// value.
    pub fn set(&mut self, i: usize, v: u64) -> Result<(), SamplerError> {
        if i >= self.len() {
            return Err(SamplerError::OutOfRange {
                index: i,
                len: self.len(),
            });
        }
        if self.weight[i] == v {
            return Ok(());
        }
        self.weight[i] = v;
        self.self_coin[i] = None;
        let mut a = i;
        while a > 0 {
            a = (a - 1) / 2;
            self.self_coin[a] = None;
            self.left_coin[a] = None;
            let (j1, j2) = (2 * a + 1, 2 * a + 2);
            self.child_weight[a] = self.total(j1) + self.total(j2);
        }
        Ok(())
    }

    /// Sample an index with probability proportional to its weight.
    /// Undefined (panics) if `total_weight() == 0`; callers must check first.
    pub fn sample(&mut self, rand: &mut impl RandomSource) -> Result<usize, SamplerError> {
        if self.total_weight() == 0 {
            return Err(SamplerError::ZeroWeight);
        }
        let mut i = 0;
        loop {
            let j1 = 2 * i + 1;
            let j2 = 2 * i + 2;
            if j1 >= self.len() {
                return Ok(i);
            }
            if self.self_coin[i].is_none() {
                self.self_coin[i] = Some(
                    CoinSampler::new(self.child_weight[i], self.weight[i])
                        .expect("total(i) > 0 while descending to i"),
                );
            }
            if self.self_coin[i].as_mut().unwrap().sample(rand) {
                return Ok(i);
            }
            if j2 >= self.len() {
                return Ok(j1);
            }
            if self.left_coin[i].is_none() {
                let (tj1, tj2) = (self.total(j1), self.total(j2));
                self.left_coin[i] =
                    Some(CoinSampler::new(tj2, tj1).expect("total(j1) + total(j2) > 0 here"));
            }
            if self.left_coin[i].as_mut().unwrap().sample(rand) {
                i = j1;
            } else {
                i = j2;
            }
        }
    }
}
