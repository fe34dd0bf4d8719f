//! Postcondition checks for sorted output: ordering, permutation, stability.

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Violation {
    #[error("output has {output} elements, input had {input}")]
    LengthMismatch { input: usize, output: usize },
    #[error("elements at {index} and {} are out of order", .index + 1)]
    OutOfOrder { index: usize },
    #[error("output is not a permutation of the input")]
    NotPermutation,
    #[error("equal keys reordered at output index {index}")]
    Unstable { index: usize },
}

/// Checks that `data` is non-decreasing by `key`.
pub fn check_sorted_by_key<T, K, F>(data: &[T], mut key: F) -> Result<(), Violation>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    match data.windows(2).position(|w| key(&w[0]) > key(&w[1])) {
        Some(index) => Err(Violation::OutOfOrder { index }),
        None => Ok(()),
    }
}

/// Checks that `output` holds exactly the multiset of `input`.
pub fn check_permutation<T: Ord + Clone>(input: &[T], output: &[T]) -> Result<(), Violation> {
    check_lengths(input, output)?;

    let mut lhs = input.to_vec();
    let mut rhs = output.to_vec();
    lhs.sort_unstable();
    rhs.sort_unstable();
    if lhs == rhs {
        Ok(())
    } else {
        Err(Violation::NotPermutation)
    }
}

/// Checks every postcondition of a stable sort of `input` by `key`.
///
/// Once order and permutation hold, the only stable result is the one the std
/// stable sort produces, so the first divergence from it is a reordering of
/// equal keys.
pub fn check_stable_sort<T, K, F>(input: &[T], output: &[T], mut key: F) -> Result<(), Violation>
where
    T: Ord + Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    check_lengths(input, output)?;
    check_sorted_by_key(output, &mut key)?;
    check_permutation(input, output)?;

    let mut expected = input.to_vec();
    expected.sort_by_key(&mut key);
    match expected.iter().zip(output).position(|(e, o)| e != o) {
        Some(index) => Err(Violation::Unstable { index }),
        None => Ok(()),
    }
}

fn check_lengths<T>(input: &[T], output: &[T]) -> Result<(), Violation> {
    if input.len() == output.len() {
        Ok(())
    } else {
        Err(Violation::LengthMismatch {
            input: input.len(),
            output: output.len(),
        })
    }
}
