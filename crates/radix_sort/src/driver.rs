use log::trace;

use crate::counting::{self, counting_sort};
use crate::key::RadixKey;

/// Which of the two buffers currently holds the authoritative data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BufferRole {
    Sequence,
    Scratch,
}

impl BufferRole {
    #[inline]
    fn flip(self) -> Self {
        match self {
            Self::Sequence => Self::Scratch,
            Self::Scratch => Self::Sequence,
        }
    }
}

/// What a driver run did. `authoritative` is the buffer that held the result
/// after the last pass, before any copy back into the sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PassSummary {
    pub executed: usize,
    pub skipped: usize,
    pub authoritative: BufferRole,
}

impl Default for PassSummary {
    fn default() -> Self {
        Self {
            executed: 0,
            skipped: 0,
            authoritative: BufferRole::Sequence,
        }
    }
}

/// LSD radix sort of `data` over `key_width` byte positions.
///
/// `digit_at(x, i)` must return byte `i` of `x`'s key, position 0 being the
/// least significant. Runs exactly `key_width` stable counting-sort passes,
/// ping-ponging between `data` and `scratch`; `data` holds the result on return.
///
/// # Panics
///
/// Panics if `scratch.len() != data.len()`.
pub fn radix_sort_by<T, F>(data: &mut [T], scratch: &mut [T], key_width: usize, mut digit_at: F)
where
    T: Copy,
    F: FnMut(&T, usize) -> u8,
{
    run_passes(data, scratch, key_width, &mut digit_at, false);
}

/// Sorts `data` ascending by the unsigned byte pattern of its keys, stably.
pub fn radix_sort<K: RadixKey>(data: &mut [K], scratch: &mut [K]) {
    radix_sort_by(data, scratch, K::WIDTH, |&k, position| k.byte_at(position));
}

/// Sorts `data` stably by a radix key projected from each element.
pub fn radix_sort_by_key<T, K, F>(data: &mut [T], scratch: &mut [T], mut key_fn: F)
where
    T: Copy,
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    radix_sort_by(data, scratch, K::WIDTH, |x, position| {
        key_fn(x).byte_at(position)
    });
}

pub(crate) fn run_key_passes<K: RadixKey>(
    data: &mut [K],
    scratch: &mut [K],
    skip_uniform_digits: bool,
) -> PassSummary {
    run_passes(
        data,
        scratch,
        K::WIDTH,
        &mut |k: &K, position: usize| k.byte_at(position),
        skip_uniform_digits,
    )
}

pub(crate) fn run_passes<T, F>(
    data: &mut [T],
    scratch: &mut [T],
    key_width: usize,
    digit_at: &mut F,
    skip_uniform_digits: bool,
) -> PassSummary
where
    T: Copy,
    F: FnMut(&T, usize) -> u8,
{
    assert_eq!(
        data.len(),
        scratch.len(),
        "scratch buffer must match the sequence length"
    );

    let mut summary = PassSummary::default();
    let len = data.len();
    if len < 2 {
        return summary;
    }

    let mut role = BufferRole::Sequence;
    for position in 0..key_width {
        let (src, dst) = split_roles(role, data, scratch);
        let mut digit = |x: &T| digit_at(x, position);

        if skip_uniform_digits {
            let mut offsets = counting::histogram(src, &mut digit);
            if offsets.contains(&len) {
                trace!("radix pass {position}: uniform digit, skipped");
                summary.skipped += 1;
                continue;
            }
            counting::exclusive_prefix_sum(&mut offsets);
            counting::scatter(src, dst, &mut offsets, &mut digit);
        } else {
            counting_sort(src, dst, digit);
        }

        trace!("radix pass {position}: scattered {len} elements");
        summary.executed += 1;
        role = role.flip();
    }

    summary.authoritative = role;
    if role == BufferRole::Scratch {
        data.copy_from_slice(scratch);
    }
    summary
}

#[inline]
fn split_roles<'a, T>(
    role: BufferRole,
    data: &'a mut [T],
    scratch: &'a mut [T],
) -> (&'a [T], &'a mut [T]) {
    match role {
        BufferRole::Sequence => (data, scratch),
        BufferRole::Scratch => (scratch, data),
    }
}
