//! Read and write operations over the identity-ordered logical sequence.
//!
//! Reads extract a fresh region; writes return a fresh region equal to the
//! destination with a range overwritten. The destination is never extended:
//! a payload that does not fit signals `BoundsError`. Byte-granular variants
//! additionally require whole-byte positions and payloads.

use crate::bits;
use crate::errors::MemoryError;
use crate::meta::{iterate_logical_bits, meta_op_byte_length};
use crate::region::Region;

/// Extracts the half-open range `[start, stop)` of logical bits.
pub fn op_get_bits(mem: &Region, start: usize, stop: usize) -> Result<Region, MemoryError> {
    if start > stop || stop > mem.bit_length() {
        return Err(MemoryError::BoundsError);
    }

    let extracted: Vec<u8> = (start..stop).map(|i| bits::bit_at(mem.cells(), i)).collect();
    Ok(Region::from_raw_parts(bits::pack_bits(&extracted), stop - start))
}

/// Extracts the single bit at `index` as a length-1 region.
pub fn op_get_bit(mem: &Region, index: usize) -> Result<Region, MemoryError> {
    let stop = index.checked_add(1).ok_or(MemoryError::BoundsError)?;
    op_get_bits(mem, index, stop)
}

/// Extracts the `index`-th group of 8 bits, which must lie wholly within the
/// region: reading a partial final cell signals `ByteAlignmentError`.
pub fn op_get_byte(mem: &Region, index: usize) -> Result<Region, MemoryError> {
    let start = index.checked_mul(8).ok_or(MemoryError::BoundsError)?;
    if start >= mem.bit_length() {
        return Err(MemoryError::BoundsError);
    }
    if start + 8 > mem.bit_length() {
        return Err(MemoryError::ByteAlignmentError);
    }

    op_get_bits(mem, start, start + 8)
}

/// Extracts `stop - start` whole cells starting at cell `start`.
pub fn op_get_bytes(mem: &Region, start: usize, stop: usize) -> Result<Region, MemoryError> {
    if start > stop || stop > meta_op_byte_length(mem) {
        return Err(MemoryError::BoundsError);
    }
    let stop_bit = stop.checked_mul(8).ok_or(MemoryError::BoundsError)?;
    if stop_bit > mem.bit_length() {
        // The range reaches into the partial final cell.
        return Err(MemoryError::ByteAlignmentError);
    }

    op_get_bits(mem, start * 8, stop_bit)
}

/// Returns a copy of `mem` with the logical bits
/// `[offset, offset + bit_length(payload))` overwritten by `payload`.
pub fn op_set_bits(mem: &Region, offset: usize, payload: &Region) -> Result<Region, MemoryError> {
    let end = offset
        .checked_add(payload.bit_length())
        .ok_or(MemoryError::BoundsError)?;
    if end > mem.bit_length() {
        return Err(MemoryError::BoundsError);
    }

    let mut cells = mem.cells().to_vec();
    for (i, bit) in iterate_logical_bits(payload).enumerate() {
        bits::set_bit_at(&mut cells, offset + i, bit);
    }

    Ok(Region::from_raw_parts(cells, mem.bit_length()))
}

/// Overwrites the single bit at `offset`. The payload must be exactly one
/// bit long.
pub fn op_set_bit(mem: &Region, offset: usize, payload: &Region) -> Result<Region, MemoryError> {
    if payload.bit_length() != 1 {
        return Err(MemoryError::BoundsError);
    }

    op_set_bits(mem, offset, payload)
}

/// Overwrites the `offset`-th cell. The payload must be exactly 8 bits long.
pub fn op_set_byte(mem: &Region, offset: usize, payload: &Region) -> Result<Region, MemoryError> {
    if payload.bit_length() != 8 {
        return Err(MemoryError::ByteAlignmentError);
    }
    let start = offset.checked_mul(8).ok_or(MemoryError::BoundsError)?;

    op_set_bits(mem, start, payload)
}

/// Overwrites whole cells starting at cell `offset`. The payload must be a
/// whole number of bytes long.
pub fn op_set_bytes(mem: &Region, offset: usize, payload: &Region) -> Result<Region, MemoryError> {
    if payload.bit_length() % 8 != 0 {
        return Err(MemoryError::ByteAlignmentError);
    }
    let start = offset.checked_mul(8).ok_or(MemoryError::BoundsError)?;

    op_set_bits(mem, start, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_bit_list, from_byte_list, into_bit_list};

    fn zeros(n: usize) -> Region {
        from_bit_list(&vec![0; n], None).unwrap()
    }

    #[test]
    fn test_get_bits_range() {
        let mem = from_bit_list(&[1, 0, 1, 1, 0, 1], None).unwrap();
        let out = op_get_bits(&mem, 0, 3).unwrap();
        assert_eq!(into_bit_list(&out), vec![1, 0, 1]);

        // Empty slice anywhere in range, including at the very end.
        assert_eq!(op_get_bits(&mem, 6, 6).unwrap(), Region::default());
        assert_eq!(op_get_bits(&mem, 2, 7), Err(MemoryError::BoundsError));
        assert_eq!(op_get_bits(&mem, 4, 2), Err(MemoryError::BoundsError));
    }

    #[test]
    fn test_get_bit() {
        let mem = from_bit_list(&[0, 1, 0], None).unwrap();
        assert_eq!(into_bit_list(&op_get_bit(&mem, 1).unwrap()), vec![1]);
        assert_eq!(op_get_bit(&mem, 3), Err(MemoryError::BoundsError));
    }

    #[test]
    fn test_get_byte_requires_whole_group() {
        let mem = from_byte_list(&[0x12, 0x34], 16);
        assert_eq!(op_get_byte(&mem, 1).unwrap().cells(), &[0x34]);
        assert_eq!(op_get_byte(&mem, 2), Err(MemoryError::BoundsError));

        let partial = zeros(12);
        assert_eq!(op_get_byte(&partial, 0).unwrap().cells(), &[0x00]);
        assert_eq!(op_get_byte(&partial, 1), Err(MemoryError::ByteAlignmentError));
    }

    #[test]
    fn test_get_bytes_spans_whole_cells() {
        let mem = from_byte_list(&[0x01, 0x02, 0x03], 24);
        assert_eq!(op_get_bytes(&mem, 1, 3).unwrap().cells(), &[0x02, 0x03]);
        assert_eq!(op_get_bytes(&mem, 0, 4), Err(MemoryError::BoundsError));

        let partial = zeros(12);
        assert_eq!(op_get_bytes(&partial, 0, 2), Err(MemoryError::ByteAlignmentError));
    }

    #[test]
    fn test_set_bits_overwrites_range() {
        let payload = from_bit_list(&[1, 0, 1], None).unwrap();
        let out = op_set_bits(&zeros(8), 2, &payload).unwrap();
        assert_eq!(into_bit_list(&out), vec![0, 0, 1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_set_bits_does_not_extend() {
        let payload = from_bit_list(&[1, 1, 1], None).unwrap();
        assert_eq!(op_set_bits(&zeros(4), 2, &payload), Err(MemoryError::BoundsError));
    }

    #[test]
    fn test_set_bits_crossing_cell_boundary() {
        let payload = from_bit_list(&[1, 1, 1], None).unwrap();
        let out = op_set_bits(&zeros(12), 7, &payload).unwrap();
        assert_eq!(out.cells(), &[0b0000_0001, 0b1100_0000]);
    }

    #[test]
    fn test_get_set_inversion() {
        let payload = from_bit_list(&[1, 0, 1, 1], None).unwrap();
        let written = op_set_bits(&zeros(16), 5, &payload).unwrap();
        assert_eq!(op_get_bits(&written, 5, 9).unwrap(), payload);
    }

    #[test]
    fn test_set_bit_payload_must_be_single() {
        let mem = zeros(3);
        let bit = from_bit_list(&[1], None).unwrap();
        let wide = from_bit_list(&[1, 1], None).unwrap();

        assert_eq!(into_bit_list(&op_set_bit(&mem, 1, &bit).unwrap()), vec![0, 1, 0]);
        assert_eq!(op_set_bit(&mem, 1, &wide), Err(MemoryError::BoundsError));
    }

    #[test]
    fn test_set_byte_alignment() {
        let mem = zeros(16);
        let byte = from_byte_list(&[0xFF], 8);
        let narrow = from_bit_list(&[1, 1, 1], None).unwrap();

        assert_eq!(op_set_byte(&mem, 1, &byte).unwrap().cells(), &[0x00, 0xFF]);
        assert_eq!(op_set_byte(&mem, 1, &narrow), Err(MemoryError::ByteAlignmentError));
        assert_eq!(op_set_byte(&mem, 2, &byte), Err(MemoryError::BoundsError));
    }

    #[test]
    fn test_set_bytes_alignment() {
        let mem = zeros(24);
        let word = from_byte_list(&[0xAB, 0xCD], 16);
        let narrow = from_bit_list(&[1], None).unwrap();

        assert_eq!(
            op_set_bytes(&mem, 1, &word).unwrap().cells(),
            &[0x00, 0xAB, 0xCD]
        );
        assert_eq!(op_set_bytes(&mem, 1, &narrow), Err(MemoryError::ByteAlignmentError));
        assert_eq!(op_set_bytes(&mem, 2, &word), Err(MemoryError::BoundsError));
    }

    #[test]
    fn test_zero_length_inputs() {
        let empty = Region::default();
        assert_eq!(op_get_bits(&empty, 0, 0).unwrap(), empty);
        assert_eq!(op_set_bits(&empty, 0, &empty).unwrap(), empty);
    }
}
