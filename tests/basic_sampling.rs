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

//! Ports of the scenarios in `original_source/tests/test_basic_sampling.py`,
//! run against both `UpdateableSampler` and `TreeBasedSampler`.

use updateable_sampler::{RandomSource, TreeBasedSampler, UpdateableSampler};

struct StdRand(rand::rngs::StdRng);

impl StdRand {
    fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for StdRand {
    fn next_bit(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }

    fn next_below(&mut self, bound: usize) -> usize {
        use rand::Rng;
        self.0.gen_range(0..bound)
    }
}

#[test]
fn tree_sampling_from_single_element() {
    let mut sampler = TreeBasedSampler::from_weights(&[1]).unwrap();
    let mut rand = StdRand::seeded(1);
    assert_eq!(sampler.sample(&mut rand).unwrap(), 0);
    assert_eq!(sampler.get(0).unwrap(), 1);
}

#[test]
fn updateable_sampling_from_single_element() {
    let mut sampler = UpdateableSampler::from_weights(&[1]).unwrap();
    let mut rand = StdRand::seeded(1);
    assert_eq!(sampler.sample(&mut rand).unwrap(), 0);
    assert_eq!(sampler.get(0).unwrap(), 1);
}

#[test]
fn tree_sampling_correct_element() {
    let mut sampler = TreeBasedSampler::from_weights(&[0, 1]).unwrap();
    let mut rand = StdRand::seeded(2);
    for _ in 0..100 {
        assert_eq!(sampler.sample(&mut rand).unwrap(), 1);
    }
}

#[test]
fn updateable_sampling_correct_element() {
    let mut sampler = UpdateableSampler::from_weights(&[0, 1]).unwrap();
    let mut rand = StdRand::seeded(2);
    for _ in 0..100 {
        assert_eq!(sampler.sample(&mut rand).unwrap(), 1);
    }
}

#[test]
fn empty_collection_has_zero_weight() {
    assert_eq!(TreeBasedSampler::new().total_weight(), 0);
    assert_eq!(UpdateableSampler::new().total_weight(), 0);
}

#[test]
fn has_correct_total_weight() {
    let weights = [0i64, 0, 0, 0, 0, 0, 1];
    let sum: u64 = weights.iter().map(|&w| w as u64).sum();
    assert_eq!(
        TreeBasedSampler::from_weights(&weights).unwrap().total_weight(),
        sum
    );
    assert_eq!(
        UpdateableSampler::from_weights(&weights)
            .unwrap()
            .total_weight(),
        sum
    );

    let weights2 = [3i64, 0, 17, 5, 0, 9];
    let sum2: u64 = weights2.iter().map(|&w| w as u64).sum();
    assert_eq!(
        TreeBasedSampler::from_weights(&weights2)
            .unwrap()
            .total_weight(),
        sum2
    );
    assert_eq!(
        UpdateableSampler::from_weights(&weights2)
            .unwrap()
            .total_weight(),
        sum2
    );
}

#[test]
fn pops_last_element() {
    let weights = [1i64, 1];
    let mut tree = TreeBasedSampler::from_weights(&weights).unwrap();
    assert_eq!(tree.pop().unwrap(), 1);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.total_weight(), 1);

    let mut updateable = UpdateableSampler::from_weights(&weights).unwrap();
    assert_eq!(updateable.pop().unwrap(), 1);
    assert_eq!(updateable.len(), 1);
    assert_eq!(updateable.total_weight(), 1);
}

#[test]
fn always_true_coin_sampler() {
    let mut cs = updateable_sampler::CoinSampler::new(0, 1).unwrap();
    let mut rand = StdRand::seeded(3);
    for _ in 0..100 {
        assert!(cs.sample(&mut rand));
    }
}

#[test]
fn always_false_coin_sampler() {
    let mut cs = updateable_sampler::CoinSampler::new(1, 0).unwrap();
    let mut rand = StdRand::seeded(4);
    for _ in 0..100 {
        assert!(!cs.sample(&mut rand));
    }
}

#[test]
fn balanced_coin_sampler() {
    let mut cs = updateable_sampler::CoinSampler::new(1, 1).unwrap();
    let mut rand = StdRand::seeded(5);
    let n: usize = (0..1000).filter(|_| cs.sample(&mut rand)).count();
    assert!((200..=800).contains(&n));
}

#[test]
fn boosting_increases_chances() {
    let weights = [3i64, 5, 7];
    let mut sampler = UpdateableSampler::from_weights(&weights).unwrap();
    let total = sampler.total_weight();
    sampler.set(1, 10 * total as i64).unwrap();

    let mut rand = StdRand::seeded(6);
    let n = (0..100)
        .filter(|_| sampler.sample(&mut rand).unwrap() == 1)
        .count();
    assert!(n >= 20, "expected boosted index to dominate, got {n}/100");
}

#[test]
fn balanced_indices_both_occur() {
    let mut sampler = UpdateableSampler::from_weights(&[1, 1]).unwrap();
    let mut rand = StdRand::seeded(7);
    let mut counts = [0usize; 2];
    for _ in 0..1000 {
        counts[sampler.sample(&mut rand).unwrap()] += 1;
    }
    assert!((200..=800).contains(&counts[0]));
    assert!((200..=800).contains(&counts[1]));
}

#[test]
fn appends_then_pops_reverse_order() {
    let weights: Vec<i64> = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let mut sampler = UpdateableSampler::new();
    for &w in &weights {
        sampler.append(w).unwrap();
    }
    let mut popped = Vec::new();
    for _ in 0..weights.len() {
        popped.push(sampler.pop().unwrap() as i64);
    }
    let mut expected = weights.clone();
    expected.reverse();
    assert_eq!(popped, expected);
    assert_eq!(sampler.total_weight(), 0);
    assert_eq!(sampler.len(), 0);
}

#[test]
fn negative_weight_is_invalid_argument() {
    assert!(UpdateableSampler::from_weights(&[-1]).is_err());
    assert!(TreeBasedSampler::from_weights(&[-1]).is_err());
}

#[test]
fn sampling_all_zero_fails_with_zero_weight() {
    let mut sampler = UpdateableSampler::from_weights(&[0, 0, 0]).unwrap();
    let mut rand = StdRand::seeded(8);
    assert_eq!(
        sampler.sample(&mut rand),
        Err(updateable_sampler::SamplerError::ZeroWeight)
    );
}
