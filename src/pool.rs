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
use crate::random::RandomSource;

/// An unordered multiset of `(index, weight)` pairs all sharing the same
/// bit-length `b`, i.e. every weight lies in `[2^(b-1), 2^b)`. Exploits that
/// factor-of-two range to sample proportionally to weight using a uniform
/// pick plus bitwise rejection, without needing per-item coins.
#[derive(Clone, Debug)]
pub struct Pool {
    bit_length: u32,
    // Bit masks to test, most significant bit first: 1 << (bit_length - 1) .. 1.
    tests: Vec<u64>,
    index: HashMap<usize, usize>,
    items: Vec<(usize, u64)>,
}

impl Pool {
    /// Create an empty pool for weights of bit-length `b`.
    #[must_use]
    pub fn new(bit_length: u32) -> Self {
        let tests = (0..bit_length).rev().map(|k| 1u64 << k).collect();
        Self {
            bit_length,
            tests,
            index: HashMap::new(),
            items: Vec::new(),
        }
    }

    /// The bit-length shared by every member of this pool.
    #[must_use]
    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }

    /// Number of entries currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool currently holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a new entry, or update the weight of an existing one.
    /// # Panics
    /// Panics in debug builds if `weight` is zero or its bit-length does not
    /// match this pool's; callers (`UpdateableSampler`) guarantee this.
    pub fn insert_or_update(&mut self, value: usize, weight: u64) {
        debug_assert!(weight > 0);
        debug_assert_eq!(crate::bit_length(weight), self.bit_length);
        if let Some(&i) = self.index.get(&value) {
            self.items[i].1 = weight;
        } else {
            let i = self.items.len();
            self.index.insert(value, i);
            self.items.push((value, weight));
        }
    }

    /// Remove an entry by swap-with-last. Fails with
    /// [`SamplerError::NotFound`] if `value` is not present — this is
    /// unreachable through correct top-level use and indicates a broken
    /// invariant elsewhere in the crate.
    pub fn remove(&mut self, value: usize) -> Result<(), SamplerError> {
        let i = self
            .index
            .remove(&value)
            .ok_or(SamplerError::NotFound(value))?;
        debug_assert_eq!(self.items[i].0, value);
        let replacer = self.items.pop();
        if let Some(replacer) = replacer {
            if i < self.items.len() {
                self.index.insert(replacer.0, i);
                self.items[i] = replacer;
            }
        }
        Ok(())
    }

    /// Sample an index with probability proportional to its weight among
    /// current members.
    /// # Panics
    /// Panics if the pool is empty; the top layer (`UpdateableSampler`) only
    /// ever samples a pool whose total weight — and hence membership — is
    /// known to be positive.
    pub fn sample(&self, rand: &mut impl RandomSource) -> usize {
        assert!(!self.items.is_empty(), "Pool::sample called on empty pool");
        loop {
            let i = rand.next_below(self.items.len());
            let (value, weight) = self.items[i];
            debug_assert!(weight > 0);
            let mut decided = false;
            let mut accept = false;
            for &mask in &self.tests {
                let bit = rand.next_bit();
                let test_set = weight & mask != 0;
                if bit && !test_set {
                    // reject: restart from the uniform pick
                    decided = true;
                    break;
                }
                if !bit && test_set {
                    decided = true;
                    accept = true;
                    break;
                }
            }
            if !decided {
                // every bit matched exactly: the drawn b-bit number equals weight
                return value;
            }
            if accept {
                return value;
            }
        }
    }
}
