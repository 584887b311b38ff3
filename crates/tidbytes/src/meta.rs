//! Meta operations: length reporting and logical iteration.

use crate::bits;
use crate::region::Region;

/// Number of logical bits in the region.
pub fn meta_op_bit_length(mem: &Region) -> usize {
    mem.bit_length()
}

/// Number of cells necessary to contain the region's bits.
pub fn meta_op_byte_length(mem: &Region) -> usize {
    (mem.bit_length() + 7) / 8
}

/// Iterates the logical bits in identity order, ignoring padding. Yields
/// exactly `meta_op_bit_length(mem)` values, each 0 or 1.
pub fn iterate_logical_bits(mem: &Region) -> impl Iterator<Item = u8> + '_ {
    (0..mem.bit_length()).map(|i| bits::bit_at(mem.cells(), i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::from_bit_list;

    #[test]
    fn test_bit_length() {
        let mem = from_bit_list(&[1, 0, 1], None).unwrap();
        assert_eq!(meta_op_bit_length(&mem), 3);
        assert_eq!(meta_op_bit_length(&Region::default()), 0);
    }

    #[test]
    fn test_byte_length_rounds_up() {
        assert_eq!(meta_op_byte_length(&Region::default()), 0);

        // 1 bit, 8 bits, and the ninth bit crossing into a second cell.
        for (bits, expect) in [(1, 1), (8, 1), (9, 2), (17, 3)] {
            let mem = from_bit_list(&vec![0; bits], None).unwrap();
            assert_eq!(meta_op_byte_length(&mem), expect, "{} bits", bits);
        }
    }

    #[test]
    fn test_iterate_skips_padding() {
        let mem = from_bit_list(&[1, 0, 1], None).unwrap();
        assert_eq!(iterate_logical_bits(&mem).collect::<Vec<_>>(), vec![1, 0, 1]);
        assert_eq!(iterate_logical_bits(&Region::default()).count(), 0);
    }
}
