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

use clap::Parser;
use updateable_sampler::rand::RngSource;
use updateable_sampler::UpdateableSampler;

const DEFAULT_DISTRIBUTION: [i64; 5] = [0, 1, 2, 3, 4];
const DEFAULT_ROLL_COUNT: usize = 100_000;

// Use macro and crate `clap` to parse command line arguments.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    /// The number of independent samples to take from the distribution.
    #[arg(short, long, default_value_t = DEFAULT_ROLL_COUNT)]
    roll_count: usize,

    /// Print the result of each sample on its own line.
    #[arg(short, long)]
    verbose: bool,

    /// Silence the default behavior of printing the histogram after sampling.
    #[arg(short, long)]
    silence_histogram: bool,

    /// The initial distribution to sample from.
    #[arg(short, long, value_parser, num_args = 1..)]
    distribution: Option<Vec<i64>>,

    /// Boost the weight at this index to ten times the total weight halfway
    /// through the run, to demonstrate updating a live sampler.
    #[arg(short, long)]
    boost_index: Option<usize>,
}

fn main() {
    // Parse command line arguments.
    let args = Arguments::parse();

    // Setup simple PRNG for coin flips and pool picks.
    let mut rand = RngSource::default();

    // Setup parameters of the test sampling.
    let distribution = args.distribution.unwrap_or_else(|| DEFAULT_DISTRIBUTION.to_vec());
    let mut sampler =
        UpdateableSampler::from_weights(&distribution).expect("distribution must be non-negative");
    let mut histogram = vec![0usize; distribution.len()];
    let roll_count = args.roll_count;
    let verbose = args.verbose;
    let print_histogram = !args.silence_histogram;

    // Let 'er roll!
    for roll in 0..roll_count {
        if let Some(boost_index) = args.boost_index {
            if roll == roll_count / 2 {
                let total = sampler.total_weight();
                sampler
                    .set(boost_index, 10 * total as i64)
                    .expect("boost_index must be in range");
            }
        }
        let s = sampler
            .sample(&mut rand)
            .expect("distribution has positive total weight");
        if verbose {
            println!("{s}");
        }
        histogram[s] += 1;
    }

    // Print the results of the repeated sampling as a histogram.
    if print_histogram {
        println!(
            "Total rolls: {roll_count}\nInitial distribution: {:?}\nHistogram results: {:?}",
            distribution, histogram
        );
    }
}
