use std::time::{Duration, Instant};

use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use twosum_core::two_sum;

/// Time `find` on a seeded random sequence.
#[derive(Parser, Debug)]
#[clap(name = "bench")]
struct Opts {
    /// Length of the generated sequence
    #[clap(long, default_value = "100000")]
    len: usize,
    /// Number of timed calls
    #[clap(long, default_value = "100")]
    iterations: u64,
    /// RNG seed
    #[clap(long, default_value = "0")]
    seed: u64,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();
    debug!("options: {:?}", opts);

    let mut rng = ChaCha20Rng::seed_from_u64(opts.seed);
    // Values spread over twice the length, so most have no partner.
    let bound = opts.len.max(1) as i64;
    let nums: Vec<i64> = (0..opts.len).map(|_| rng.gen_range(-bound..bound)).collect();
    // Near the end, so a call scans most of the sequence.
    let target = match nums.len() {
        0 | 1 => 0,
        n => nums[n - 2] + nums[n - 1],
    };

    let start = Instant::now();
    let mut found = 0usize;
    for _ in 0..opts.iterations {
        if let Some(pair) = two_sum::find(&nums, target) {
            found = found.wrapping_add(pair.second);
        }
    }
    let elapsed = start.elapsed();
    info!(
        "{} calls over {} entries: {:?} total, {:?} per call (checksum {})",
        opts.iterations,
        opts.len,
        elapsed,
        per_call(elapsed, opts.iterations),
        found
    );
}

/// Mean time per call. Zero iterations report the whole elapsed time.
fn per_call(elapsed: Duration, iterations: u64) -> Duration {
    elapsed.div_f64(iterations.max(1) as f64)
}
