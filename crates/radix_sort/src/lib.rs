//! Byte-wise LSD radix sort for fixed-width keys.
//!
//! Each pass is a stable 256-bucket counting sort on one byte of the key, from
//! the least significant byte up. Two equally sized buffers alternate as source
//! and destination, so a `K`-byte key costs exactly `K` passes over the data.
//!
//! - [`counting_sort`] is the single-pass primitive.
//! - [`radix_sort_by`], [`radix_sort`] and [`radix_sort_by_key`] drive the passes
//!   over caller-provided buffers and never allocate.
//! - [`sort`] and [`sort_with_ctx`] manage the scratch buffer through a
//!   [`SortContext`].
//! - [`verify`] checks the postconditions of a sort.

mod counting;
mod driver;
mod key;
pub mod verify;

use log::debug;

pub use counting::{BUCKETS, RADIX_BITS, counting_sort};
pub use driver::{BufferRole, PassSummary, radix_sort, radix_sort_by, radix_sort_by_key};
pub use key::{RadixKey, digit_extractor};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RadixParams {
    /// Skip byte positions where every key carries the same digit. Such a pass
    /// would be the identity permutation.
    pub skip_uniform_digits: bool,
}

pub const DEFAULT_PARAMS: RadixParams = RadixParams {
    skip_uniform_digits: false,
};

impl Default for RadixParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

/// Reusable scratch storage for repeated sorts of `T`.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    pub params: RadixParams,
    scratch: Vec<T>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self::with_params(DEFAULT_PARAMS)
    }
}

impl<T> SortContext<T> {
    pub fn with_params(params: RadixParams) -> Self {
        Self {
            params,
            scratch: Vec::new(),
        }
    }

    pub fn scratch_capacity(&self) -> usize {
        self.scratch.len()
    }
}

impl<T: Copy + Default> SortContext<T> {
    #[inline]
    pub(crate) fn ensure_scratch(&mut self, len: usize) -> &mut [T] {
        if self.scratch.len() < len {
            self.scratch.resize(len, T::default());
        }
        &mut self.scratch[..len]
    }
}

pub fn sort<K: RadixKey + Default>(data: &mut [K]) {
    let mut ctx = SortContext::default();
    sort_with_ctx(data, &mut ctx);
}

pub fn sort_with_ctx<K: RadixKey + Default>(
    data: &mut [K],
    ctx: &mut SortContext<K>,
) -> PassSummary {
    let skip_uniform_digits = ctx.params.skip_uniform_digits;
    let scratch = ctx.ensure_scratch(data.len());
    let summary = driver::run_key_passes(data, scratch, skip_uniform_digits);
    debug!(
        "radix sort of {} elements: {} passes, {} skipped",
        data.len(),
        summary.executed,
        summary.skipped
    );
    summary
}

pub fn sort_by_key<T, K, F>(data: &mut [T], key_fn: F)
where
    T: Copy + Default,
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    let mut ctx = SortContext::default();
    sort_by_key_with_ctx(data, &mut ctx, key_fn);
}

pub fn sort_by_key_with_ctx<T, K, F>(
    data: &mut [T],
    ctx: &mut SortContext<T>,
    mut key_fn: F,
) -> PassSummary
where
    T: Copy + Default,
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    let skip_uniform_digits = ctx.params.skip_uniform_digits;
    let scratch = ctx.ensure_scratch(data.len());
    let summary = driver::run_passes(
        data,
        scratch,
        K::WIDTH,
        &mut |x: &T, position: usize| key_fn(x).byte_at(position),
        skip_uniform_digits,
    );
    debug!(
        "radix sort by key of {} elements: {} passes, {} skipped",
        data.len(),
        summary.executed,
        summary.skipped
    );
    summary
}
