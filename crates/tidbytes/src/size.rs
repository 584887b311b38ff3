//! Size operations: truncation, extension, and concatenation.

use crate::bits;
use crate::errors::MemoryError;
use crate::meta::iterate_logical_bits;
use crate::region::Region;

/// Drops logical bits beyond `new_length`. Truncation never extends:
/// `new_length` above the current length signals `BoundsError`.
pub fn op_truncate(mem: &Region, new_length: usize) -> Result<Region, MemoryError> {
    if new_length > mem.bit_length() {
        return Err(MemoryError::BoundsError);
    }

    Ok(truncate_to(mem, new_length))
}

/// Appends `fill_bit` until the length equals `new_length`. Extension never
/// shrinks: `new_length` below the current length signals `BoundsError`.
pub fn op_extend(mem: &Region, new_length: usize, fill_bit: bool) -> Result<Region, MemoryError> {
    if new_length < mem.bit_length() {
        return Err(MemoryError::BoundsError);
    }

    Ok(extend_to(mem, new_length, fill_bit))
}

/// Truncates or extends as needed so the length equals `new_length`.
pub fn op_ensure_bit_length(mem: &Region, new_length: usize, fill_bit: bool) -> Region {
    if new_length < mem.bit_length() {
        truncate_to(mem, new_length)
    } else {
        extend_to(mem, new_length, fill_bit)
    }
}

/// Byte-granular variant: the target length is `new_byte_length` whole cells.
pub fn op_ensure_byte_length(mem: &Region, new_byte_length: usize, fill_bit: bool) -> Region {
    op_ensure_bit_length(mem, new_byte_length * 8, fill_bit)
}

/// Returns a region holding `a`'s bits followed by `b`'s, re-packed so
/// padding remains only in the final cell.
pub fn op_concatenate(a: &Region, b: &Region) -> Region {
    let joined: Vec<u8> = iterate_logical_bits(a).chain(iterate_logical_bits(b)).collect();

    Region::from_raw_parts(bits::pack_bits(&joined), a.bit_length() + b.bit_length())
}

fn truncate_to(mem: &Region, new_length: usize) -> Region {
    let n_cells = (new_length + 7) / 8;
    let mut cells = mem.cells()[..n_cells].to_vec();

    if new_length % 8 != 0 {
        // Clear the slots that just became padding.
        cells[n_cells - 1] &= !(0xFFu8 >> (new_length % 8));
    }

    Region::from_raw_parts(cells, new_length)
}

fn extend_to(mem: &Region, new_length: usize, fill_bit: bool) -> Region {
    let n_cells = (new_length + 7) / 8;
    let mut cells = mem.cells().to_vec();
    cells.resize(n_cells, 0);

    if fill_bit {
        for position in mem.bit_length()..new_length {
            bits::set_bit_at(&mut cells, position, 1);
        }
    }

    Region::from_raw_parts(cells, new_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_bit_list, into_bit_list};

    #[test]
    fn test_truncate_clears_padding() {
        let mem = from_bit_list(&[1, 1, 1, 1, 1, 1, 1, 1], None).unwrap();
        let out = op_truncate(&mem, 4).unwrap();
        assert_eq!(out.bit_length(), 4);
        assert_eq!(out.cells(), &[0b1111_0000]);
        assert!(out.validate().is_ok());
    }

    #[test]
    fn test_truncate_to_zero_is_empty() {
        let mem = from_bit_list(&[1, 0, 1], None).unwrap();
        assert_eq!(op_truncate(&mem, 0).unwrap(), Region::default());
    }

    #[test]
    fn test_truncate_does_not_extend() {
        let mem = from_bit_list(&[1, 0, 1], None).unwrap();
        assert_eq!(op_truncate(&mem, 4), Err(MemoryError::BoundsError));
    }

    #[test]
    fn test_extend_with_ones_crossing_cells() {
        let mem = from_bit_list(&[1, 0, 1], None).unwrap();
        let out = op_extend(&mem, 10, true).unwrap();
        assert_eq!(into_bit_list(&out), vec![1, 0, 1, 1, 1, 1, 1, 1, 1, 1]);
        assert!(out.validate().is_ok());
    }

    #[test]
    fn test_extend_does_not_shrink() {
        let mem = from_bit_list(&[1, 0, 1], None).unwrap();
        assert_eq!(op_extend(&mem, 2, false), Err(MemoryError::BoundsError));
    }

    #[test]
    fn test_ensure_bit_length_round_trip() {
        let mem = from_bit_list(&[1, 0, 1], None).unwrap();
        let grown = op_ensure_bit_length(&mem, 9, false);
        assert_eq!(op_ensure_bit_length(&grown, 3, false), mem);
    }

    #[test]
    fn test_ensure_byte_length() {
        let mem = from_bit_list(&[1, 0, 1], None).unwrap();
        let out = op_ensure_byte_length(&mem, 2, false);
        assert_eq!(out.bit_length(), 16);
        assert_eq!(out.cells(), &[0b1010_0000, 0x00]);
    }

    #[test]
    fn test_concatenate() {
        let mem = from_bit_list(&[1, 0, 1], None).unwrap();
        let out = op_concatenate(&mem, &mem);
        assert_eq!(into_bit_list(&out), vec![1, 0, 1, 1, 0, 1]);
        assert_eq!(out.cells(), &[0b1011_0100]);
    }

    #[test]
    fn test_concatenate_additivity() {
        let a = from_bit_list(&vec![1; 9], None).unwrap();
        let b = from_bit_list(&vec![0; 7], None).unwrap();
        assert_eq!(op_concatenate(&a, &b).bit_length(), 16);
        assert_eq!(op_concatenate(&a, &Region::default()), a);
        assert_eq!(
            op_concatenate(&Region::default(), &Region::default()),
            Region::default()
        );
    }
}
