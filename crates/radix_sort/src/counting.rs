pub const RADIX_BITS: usize = 8;
pub const BUCKETS: usize = 1 << RADIX_BITS;

/// Stable counting sort of `input` into `output` by a byte-wide digit.
///
/// Elements land in `output[..input.len()]` ordered by ascending digit; elements
/// sharing a digit keep their relative input order. `output` may be longer than
/// `input`, the tail is left untouched.
///
/// # Panics
///
/// Panics if `output` is shorter than `input`.
pub fn counting_sort<T, F>(input: &[T], output: &mut [T], mut digit: F)
where
    T: Copy,
    F: FnMut(&T) -> u8,
{
    debug_assert!(
        output.len() >= input.len(),
        "output holds {} elements, input has {}",
        output.len(),
        input.len()
    );
    let output = &mut output[..input.len()];

    let mut offsets = histogram(input, &mut digit);
    exclusive_prefix_sum(&mut offsets);
    scatter(input, output, &mut offsets, &mut digit);
}

#[inline]
pub(crate) fn histogram<T, F>(src: &[T], digit: &mut F) -> [usize; BUCKETS]
where
    F: FnMut(&T) -> u8,
{
    let mut counts = [0usize; BUCKETS];
    for x in src {
        counts[digit(x) as usize] += 1;
    }
    counts
}

#[inline]
pub(crate) fn exclusive_prefix_sum(counts: &mut [usize; BUCKETS]) {
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        let old = *c;
        *c = sum;
        sum += old;
    }
}

/// Places every element of `src` at the running offset of its digit.
/// `offsets` must come from `exclusive_prefix_sum` over the same `src`.
#[inline]
pub(crate) fn scatter<T, F>(
    src: &[T],
    dst: &mut [T],
    offsets: &mut [usize; BUCKETS],
    digit: &mut F,
)
where
    T: Copy,
    F: FnMut(&T) -> u8,
{
    debug_assert_eq!(src.len(), dst.len());
    for &x in src {
        let d = digit(&x) as usize;
        let pos = offsets[d];
        dst[pos] = x;
        offsets[d] = pos + 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn tagged_digits_keep_input_order() {
        let input = [2_u8, 0, 2, 1, 0]
            .into_iter()
            .enumerate()
            .map(|(i, d)| (d, i))
            .collect::<Vec<_>>();
        let mut output = vec![(0_u8, 0_usize); input.len()];

        counting_sort(&input, &mut output, |&(d, _)| d);

        let digits = output.iter().map(|&(d, _)| d).collect::<Vec<_>>();
        let tags = output.iter().map(|&(_, i)| i).collect::<Vec<_>>();
        assert_eq!(digits, vec![0, 0, 1, 2, 2]);
        assert_eq!(tags, vec![1, 4, 3, 0, 2]);
    }

    #[test]
    fn prefix_sum_is_exclusive() {
        let mut counts = [0usize; BUCKETS];
        counts[0] = 2;
        counts[1] = 1;
        counts[3] = 4;
        counts[255] = 5;
        exclusive_prefix_sum(&mut counts);
        assert_eq!(counts[0], 0);
        assert_eq!(counts[1], 2);
        assert_eq!(counts[2], 3);
        assert_eq!(counts[3], 3);
        assert_eq!(counts[4], 7);
        assert_eq!(counts[254], 7);
        assert_eq!(counts[255], 7);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let input: [u32; 0] = [];
        let mut output = [9_u32; 3];
        counting_sort(&input, &mut output, |&x| x as u8);
        assert_eq!(output, [9, 9, 9]);
    }

    #[test]
    fn longer_output_keeps_its_tail() {
        let input = [3_u16, 1, 2];
        let mut output = [0_u16, 0, 0, 77, 78];
        counting_sort(&input, &mut output, |&x| x as u8);
        assert_eq!(output, [1, 2, 3, 77, 78]);
    }

    #[test]
    #[should_panic]
    fn short_output_panics() {
        let input = [3_u16, 1, 2];
        let mut output = [0_u16; 2];
        counting_sort(&input, &mut output, |&x| x as u8);
    }

    #[test]
    fn matches_std_stable_sort_on_one_byte() {
        let mut rng = StdRng::seed_from_u64(0xC0DE_2026);
        for &size in &[1_usize, 2, 17, 256, 1000, 4096] {
            let input = (0..size)
                .map(|i| (rng.random::<u32>(), i))
                .collect::<Vec<_>>();
            for shift in [0_u32, 8, 16, 24] {
                let digit = |&(k, _): &(u32, usize)| (k >> shift) as u8;
                let mut output = vec![(0_u32, 0_usize); size];
                counting_sort(&input, &mut output, digit);

                let mut expected = input.clone();
                expected.sort_by_key(digit);
                assert_eq!(output, expected, "size={size} shift={shift}");
            }
        }
    }
}
