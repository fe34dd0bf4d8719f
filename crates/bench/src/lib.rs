use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const BENCH_SIZES: [usize; 4] = [4096, 65536, 1 << 20, 9_000_000];

const SAMPLE_SIZE: usize = 10;
const WARM_UP_MS: u64 = 80;
const MEASURE_MS_SMALL: u64 = 120;
const MEASURE_MS_LARGE: u64 = 300;
const MEASURE_MS_XL: u64 = 2000;
const RNG_SEED: u64 = 0x5EED_2026;

#[derive(Clone, Copy, Debug)]
pub enum DataShape {
    RandomUniform,
    NearlySorted1pctSwaps,
}

impl DataShape {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }

    fn salt(self) -> u64 {
        match self {
            Self::RandomUniform => 11,
            Self::NearlySorted1pctSwaps => 12,
        }
    }
}

pub const DATA_SHAPES: [DataShape; 2] = [
    DataShape::RandomUniform,
    DataShape::NearlySorted1pctSwaps,
];

/// Sample count, warm-up and measurement time scaled to the input size.
pub fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(WARM_UP_MS));
    if size <= 16384 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(MEASURE_MS_SMALL));
    } else if size <= 65536 {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_LARGE));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(MEASURE_MS_XL));
    }
}

pub fn seeded_rng(shape: DataShape, size: usize, salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(
        RNG_SEED ^ (shape.salt() << 48) ^ (size as u64) ^ salt,
    ))
}

/// Keys drawn uniformly over the whole domain of `K`. The nearly-sorted shape
/// sorts them and then swaps 1% of random pairs.
pub fn generate_keys<K>(shape: DataShape, size: usize, salt: u64) -> Vec<K>
where
    K: Ord,
    StandardUniform: Distribution<K>,
{
    let mut rng = seeded_rng(shape, size, salt);
    let mut data = (0..size).map(|_| rng.random::<K>()).collect::<Vec<_>>();

    if let DataShape::NearlySorted1pctSwaps = shape {
        data.sort_unstable();
        if size > 0 {
            let swaps = (size / 100).max(1);
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
        }
    }

    data
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
