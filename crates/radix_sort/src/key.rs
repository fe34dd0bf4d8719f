/// A fixed-width key that can be split into byte-sized digits.
///
/// - Digit positions run over `0..WIDTH`, position 0 being the least significant byte.
/// - `byte_at(i)` isolates bits `[8i, 8i + 8)` of the key's unsigned bit pattern.
/// - Signed integers are ordered by their two's-complement pattern read as unsigned,
///   so negative values sort after all non-negative ones.
pub trait RadixKey: Copy {
    /// Key width in bytes, i.e. the number of counting-sort passes.
    const WIDTH: usize;

    fn byte_at(self, position: usize) -> u8;
}

macro_rules! impl_radix_key_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl RadixKey for $t {
                const WIDTH: usize = size_of::<$t>();

                #[inline(always)]
                fn byte_at(self, position: usize) -> u8 {
                    debug_assert!(position < Self::WIDTH);
                    (self >> (position * 8)) as u8
                }
            }
        )*
    };
}

macro_rules! impl_radix_key_signed {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl RadixKey for $t {
                const WIDTH: usize = size_of::<$t>();

                #[inline(always)]
                fn byte_at(self, position: usize) -> u8 {
                    (self as $u).byte_at(position)
                }
            }
        )*
    };
}

impl_radix_key_unsigned!(u8, u16, u32, u64, u128, usize);
impl_radix_key_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

/// Big-endian byte strings: position 0 is the last byte, so the radix order
/// is the lexicographic order of the arrays.
impl<const N: usize> RadixKey for [u8; N] {
    const WIDTH: usize = N;

    #[inline(always)]
    fn byte_at(self, position: usize) -> u8 {
        self[N - 1 - position]
    }
}

/// Returns the digit extractor for one byte position of `K`.
///
/// Panics if `position >= K::WIDTH`.
pub fn digit_extractor<K: RadixKey>(position: usize) -> impl Fn(&K) -> u8 {
    assert!(
        position < K::WIDTH,
        "byte position {position} out of range for a {}-byte key",
        K::WIDTH
    );
    move |key: &K| key.byte_at(position)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn widths_match_type_sizes() {
        assert_eq!(<u8 as RadixKey>::WIDTH, 1);
        assert_eq!(<u16 as RadixKey>::WIDTH, 2);
        assert_eq!(<u32 as RadixKey>::WIDTH, 4);
        assert_eq!(<i64 as RadixKey>::WIDTH, 8);
        assert_eq!(<u128 as RadixKey>::WIDTH, 16);
        assert_eq!(<[u8; 11] as RadixKey>::WIDTH, 11);
    }

    #[test]
    fn byte_at_matches_shift_and_mask() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for _ in 0..256 {
            let v = rng.random::<u128>();
            for i in 0..16 {
                assert_eq!(v.byte_at(i), ((v >> (8 * i)) & 0xFF) as u8);
            }
            let w = v as u32;
            for i in 0..4 {
                assert_eq!(w.byte_at(i), ((w >> (8 * i)) & 0xFF) as u8);
            }
        }
    }

    #[test]
    fn signed_keys_use_bit_pattern() {
        assert_eq!((-1_i32).byte_at(3), 0xFF);
        assert_eq!((-2_i16).byte_at(0), 0xFE);
        assert_eq!(i64::MIN.byte_at(7), 0x80);
        assert_eq!(i64::MIN.byte_at(0), 0x00);
    }

    #[test]
    fn byte_arrays_are_big_endian() {
        let key = [0x01_u8, 0x02, 0x03];
        assert_eq!(key.byte_at(0), 0x03);
        assert_eq!(key.byte_at(1), 0x02);
        assert_eq!(key.byte_at(2), 0x01);
        assert_eq!(
            u32::from_be_bytes([0xAA, 0xBB, 0xCC, 0xDD]).byte_at(1),
            [0xAA_u8, 0xBB, 0xCC, 0xDD].byte_at(1)
        );
    }

    #[test]
    fn extractor_family_covers_every_position() {
        let v = 0x0807_0605_0403_0201_u64;
        let digits = (0..<u64 as RadixKey>::WIDTH)
            .map(|i| digit_extractor::<u64>(i)(&v))
            .collect::<Vec<_>>();
        assert_eq!(digits, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn extractor_rejects_position_past_width() {
        let _ = digit_extractor::<u32>(4);
    }
}
