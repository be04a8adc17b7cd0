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

/// Capability required of a random source by every sampler in this crate:
/// a fair coin flip, and a uniform pick below a bound. Implementations are
/// free to buffer bits, cache state, or wrap any underlying generator; the
/// samplers only ever call these two methods.
///
/// NOTE: both methods take `&mut self` because implementations will likely
/// need to mutate internal state (e.g. a bit buffer) to produce new output.
pub trait RandomSource {
    /// Returns `true` or `false` with equal probability.
    fn next_bit(&mut self) -> bool;

    /// Returns a uniformly distributed integer in `[0, bound)`.
    /// # Panics
    /// May panic if `bound == 0`; callers never invoke it that way.
    fn next_below(&mut self, bound: usize) -> usize;
}

#[cfg(feature = "rand")]
pub mod rand {
    use rand::{rngs::ThreadRng, Rng};

    /// Helper type that adapts any `rand::Rng` to the [`super::RandomSource`]
    /// capability. Fetches random bits from the RNG in blocks of 64 bits and
    /// returns them one at a time, amortizing the cost of each `next_u64`
    /// call across many coin flips.
    pub struct RngSource<R: Rng> {
        rng: R,
        random_bits: u64,
        bits_read: u32,
    }

    impl<R: Rng> RngSource<R> {
        /// Create a new `RngSource` instance with the given RNG and prime its
        /// bit buffer with a fresh `u64`.
        #[must_use]
        pub fn new(mut rng: R) -> Self {
            let random_bits = rng.next_u64();
            Self {
                rng,
                random_bits,
                bits_read: 0,
            }
        }
    }

    /// Create a new `RngSource` and default to using the local `ThreadRng` instance RNG.
    impl Default for RngSource<ThreadRng> {
        fn default() -> Self {
            RngSource::new(ThreadRng::default())
        }
    }

    impl<R: Rng> super::RandomSource for RngSource<R> {
        fn next_bit(&mut self) -> bool {
            // If we have read the entire `u64` of random bits, then we need to generate a new block.
            if self.bits_read == u64::BITS {
                self.random_bits = self.rng.next_u64();
                self.bits_read = 0;
            }

            // Grab the right-most bit and increment the number of bits read.
            let b = self.random_bits & 1 > 0;
            self.bits_read += 1;

            // Shift the random bits to the right by one and return the result bit.
            self.random_bits >>= 1;
            b
        }

        fn next_below(&mut self, bound: usize) -> usize {
            self.rng.gen_range(0..bound)
        }
    }
}
