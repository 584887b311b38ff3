//! Pure, length-preserving transform operations.
//!
//! All four operations map a region to a region of the same bit length.
//! `op_reverse` is the canonical full reversal of the logical bit sequence;
//! it equals `op_reverse_bits` composed with `op_reverse_bytes` only when
//! the length is a whole number of cells.

use crate::bits;
use crate::meta::{iterate_logical_bits, meta_op_byte_length};
use crate::region::Region;

/// Returns a structurally independent copy of the region.
pub fn op_identity(mem: &Region) -> Region {
    mem.clone()
}

/// Reverses the populated bit slots within each cell, preserving cell order.
///
/// A partial final cell reverses only its populated prefix; padding keeps
/// its suffix position. Bits never cross cell boundaries.
pub fn op_reverse_bits(mem: &Region) -> Region {
    let bit_length = mem.bit_length();
    if bit_length == 0 {
        return Region::default();
    }

    let mut cells = mem.cells().to_vec();
    let last = cells.len() - 1;
    let tail = bit_length - last * 8; // populated slots in the final cell, 1..=8

    for cell in &mut cells[..last] {
        *cell = cell.reverse_bits();
    }

    let prefix = (cells[last] >> (8 - tail)) as u64;
    cells[last] = (bits::reverse_bits_n(prefix, tail) as u8) << (8 - tail);

    Region::from_raw_parts(cells, bit_length)
}

/// Reverses the region at byte granularity.
///
/// The logical bit sequence is split into groups of 8 (the last group
/// possibly short), the group order is reversed, and the result is re-packed
/// left-aligned so padding stays in the final cell.
pub fn op_reverse_bytes(mem: &Region) -> Region {
    let bit_length = mem.bit_length();
    let mut reordered = Vec::with_capacity(bit_length);

    for group in (0..meta_op_byte_length(mem)).rev() {
        let start = group * 8;
        let stop = (start + 8).min(bit_length);
        for position in start..stop {
            reordered.push(bits::bit_at(mem.cells(), position));
        }
    }

    Region::from_raw_parts(bits::pack_bits(&reordered), bit_length)
}

/// Reverses the full logical bit sequence.
pub fn op_reverse(mem: &Region) -> Region {
    let mut reversed: Vec<u8> = iterate_logical_bits(mem).collect();
    reversed.reverse();

    Region::from_raw_parts(bits::pack_bits(&reversed), mem.bit_length())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_bit_list, from_byte_list, into_bit_list};

    fn bits_of(mem: &Region) -> Vec<u8> {
        into_bit_list(mem)
    }

    #[test]
    fn test_identity_is_a_unit() {
        let mem = from_bit_list(&[1, 1, 0], None).unwrap();
        assert_eq!(op_identity(&mem), mem);
        assert_eq!(op_identity(&Region::default()), Region::default());
    }

    #[test]
    fn test_reverse_partial_cell() {
        let mem = from_bit_list(&[1, 1, 0], None).unwrap();
        assert_eq!(bits_of(&op_reverse(&mem)), vec![0, 1, 1]);
    }

    #[test]
    fn test_reverse_bits_partial_cell_stays_left_packed() {
        let mem = from_bit_list(&[1, 1, 0], None).unwrap();
        let out = op_reverse_bits(&mem);
        assert_eq!(bits_of(&out), vec![0, 1, 1]);
        assert_eq!(out.cells(), &[0b0110_0000]);
    }

    #[test]
    fn test_reverse_bits_full_cells() {
        let mem = from_byte_list(&[0x34, 0x12], 16);
        assert_eq!(op_reverse_bits(&mem).cells(), &[0x2C, 0x48]);
    }

    #[test]
    fn test_reverse_bytes_swaps_cells() {
        let mem = from_byte_list(&[0x12, 0x34], 16);
        assert_eq!(op_reverse_bytes(&mem).cells(), &[0x34, 0x12]);
    }

    #[test]
    fn test_reverse_bytes_partial_length_repacks() {
        // 10 bits: groups 11000000 and 00; reversing the group order packs
        // the short group first.
        let mem = from_bit_list(&[1, 1, 0, 0, 0, 0, 0, 0, 0, 0], None).unwrap();
        let out = op_reverse_bytes(&mem);
        assert_eq!(out.cells(), &[0b0011_0000, 0b0000_0000]);
        assert_eq!(out.bit_length(), 10);
    }

    #[test]
    fn test_length_homomorphism() {
        for n in [0usize, 1, 7, 8, 9, 16] {
            let mem = from_bit_list(&vec![1; n], None).unwrap();
            assert_eq!(op_identity(&mem).bit_length(), n);
            assert_eq!(op_reverse(&mem).bit_length(), n);
            assert_eq!(op_reverse_bits(&mem).bit_length(), n);
            assert_eq!(op_reverse_bytes(&mem).bit_length(), n);
        }
    }

    #[test]
    fn test_reverse_involutions() {
        let mem = from_bit_list(&[1, 0, 1, 1, 0, 1, 0, 0, 1], None).unwrap();
        assert_eq!(op_reverse(&op_reverse(&mem)), mem);
        assert_eq!(op_reverse_bits(&op_reverse_bits(&mem)), mem);

        // Byte reversal is only an involution at byte-multiple lengths.
        let whole = from_byte_list(&[0x12, 0x34, 0x56], 24);
        assert_eq!(op_reverse_bytes(&op_reverse_bytes(&whole)), whole);
    }

    #[test]
    fn test_byte_multiple_decomposition() {
        let mem = from_byte_list(&[0x12, 0x34], 16);
        assert_eq!(op_reverse(&mem), op_reverse_bits(&op_reverse_bytes(&mem)));
        assert_eq!(op_reverse(&mem).cells(), &[0x2C, 0x48]);
    }
}
