//! Codecs bridging host primitives and regions.
//!
//! A codec is a named (never `op_`-prefixed) conversion under an explicit
//! orientation. *Numeric* codecs treat the value as a binary numeral: the
//! region's logical bit sequence is the value as written, most significant
//! bit first, two's-complement encoded when signed. *Natural* codecs treat
//! the value as raw memory: the little-endian byte image loaded left to
//! right with bits least significant first within each byte, which is
//! already identity order. The answer to "what is the second bit?" differs
//! between the two, and that difference is the whole reason both families
//! exist.
//!
//! Out-of-range numeric values are rejected with `NumericRangeError`; raw
//! memory views may be truncated freely because truncating memory, unlike
//! truncating a number, means something.

use num_bigint::{BigInt, BigUint};

use crate::bits;
use crate::errors::MemoryError;
use crate::meta::{iterate_logical_bits, meta_op_byte_length};
use crate::orient::{check_orientation, op_transform, Order};
use crate::region::Region;
use crate::size::op_ensure_bit_length;

// ---------------------------------------------------------------------------
// Raw bit and byte codecs
// ---------------------------------------------------------------------------

/// Builds a region from a flat list of 0/1 values. A value outside {0, 1}
/// signals `InvalidMemoryRegion`. When `bit_length` is given, the result is
/// truncated or zero-extended to that length.
pub fn from_bit_list(value: &[u8], bit_length: Option<usize>) -> Result<Region, MemoryError> {
    if value.iter().any(|&bit| bit > 1) {
        return Err(MemoryError::InvalidMemoryRegion);
    }

    let region = Region::from_raw_parts(bits::pack_bits(value), value.len());
    Ok(match bit_length {
        Some(n) => op_ensure_bit_length(&region, n, false),
        None => region,
    })
}

/// The logical bits as a flat list of 0/1 values.
pub fn into_bit_list(mem: &Region) -> Vec<u8> {
    iterate_logical_bits(mem).collect()
}

/// Builds a region from whole-byte values, loaded left to right, then
/// truncated or zero-extended to `bit_length`.
pub fn from_byte_list(value: &[u8], bit_length: usize) -> Region {
    let region = Region::from_raw_parts(value.to_vec(), value.len() * 8);
    op_ensure_bit_length(&region, bit_length, false)
}

/// The backing cells; a partial final cell keeps its padding zeroed.
pub fn into_byte_list(mem: &Region) -> Vec<u8> {
    mem.cells().to_vec()
}

/// A host byte sequence is already identity-ordered; the bit length is the
/// full `8 * value.len()`.
pub fn from_bytes(value: &[u8]) -> Region {
    Region::from_raw_parts(value.to_vec(), value.len() * 8)
}

pub fn into_bytes(mem: &Region) -> Vec<u8> {
    into_byte_list(mem)
}

/// Builds a region from bytes declared in a foreign universe, applying the
/// declared bit and byte order to reach identity order. A numeric
/// (right-to-left) bit order combined with a right-to-left byte order and a
/// partial byte signals `OrientationError`.
pub fn from_foreign_bytes(
    value: &[u8],
    bit_length: usize,
    bit_order: Order,
    byte_order: Order,
) -> Result<Region, MemoryError> {
    if bit_length > value.len() * 8 {
        return Err(MemoryError::BoundsError);
    }
    check_orientation(bit_order, byte_order, bit_length)?;

    Ok(op_transform(&from_byte_list(value, bit_length), bit_order, byte_order))
}

/// Serializes a region back into a foreign universe; the same table maps
/// identity order out as mapped it in.
pub fn into_foreign_bytes(
    mem: &Region,
    bit_order: Order,
    byte_order: Order,
) -> Result<Vec<u8>, MemoryError> {
    check_orientation(bit_order, byte_order, mem.bit_length())?;

    Ok(op_transform(mem, bit_order, byte_order).cells().to_vec())
}

// ---------------------------------------------------------------------------
// Textual codecs
// ---------------------------------------------------------------------------

/// Emits the ASCII code-unit byte sequence in identity order. Non-ASCII
/// input signals `NumericRangeError`.
pub fn from_ascii(text: &str) -> Result<Region, MemoryError> {
    if !text.is_ascii() {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(from_bytes(text.as_bytes()))
}

/// Decodes a whole-byte region as ASCII text.
pub fn into_ascii(mem: &Region) -> Result<String, MemoryError> {
    if mem.bit_length() % 8 != 0 {
        return Err(MemoryError::ByteAlignmentError);
    }
    if mem.cells().iter().any(|&byte| byte > 0x7F) {
        return Err(MemoryError::NumericRangeError);
    }

    String::from_utf8(mem.cells().to_vec()).map_err(|_| MemoryError::NumericRangeError)
}

/// Emits the UTF-8 code-unit byte sequence in identity order.
pub fn from_utf8(text: &str) -> Region {
    from_bytes(text.as_bytes())
}

/// Decodes a whole-byte region as UTF-8 text. Invalid sequences signal
/// `NumericRangeError`.
pub fn into_utf8(mem: &Region) -> Result<String, MemoryError> {
    if mem.bit_length() % 8 != 0 {
        return Err(MemoryError::ByteAlignmentError);
    }

    String::from_utf8(mem.cells().to_vec()).map_err(|_| MemoryError::NumericRangeError)
}

// ---------------------------------------------------------------------------
// Boolean codec
// ---------------------------------------------------------------------------

/// Converts a boolean to a single leading bit, zero-extended to
/// `bit_length` when given.
pub fn from_bool(value: bool, bit_length: Option<usize>) -> Region {
    let bit_length = bit_length.unwrap_or(1);
    if bit_length == 0 {
        return Region::default();
    }

    let single = Region::from_raw_parts(vec![(value as u8) << 7], 1);
    op_ensure_bit_length(&single, bit_length, false)
}

/// Truthiness of a region: true when any logical bit is set.
pub fn into_bool(mem: &Region) -> bool {
    iterate_logical_bits(mem).any(|bit| bit == 1)
}

// ---------------------------------------------------------------------------
// Fixed-width numeric codecs (value as written, MSB first)
// ---------------------------------------------------------------------------

/// Loads a u8 as numeric data. `0b0001_0011` becomes `[00010011]` — the
/// bits appear exactly as written because the value is a number, not a
/// memory slice (compare [`from_natural_u8`]).
pub fn from_numeric_u8(value: u8, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    numeric_unsigned(u64::from(value), 8, bit_length)
}

pub fn from_numeric_u16(value: u16, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    numeric_unsigned(u64::from(value), 16, bit_length)
}

pub fn from_numeric_u32(value: u32, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    numeric_unsigned(u64::from(value), 32, bit_length)
}

pub fn from_numeric_u64(value: u64, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    numeric_unsigned(value, 64, bit_length)
}

/// Loads an i8 as numeric data, two's-complement encoded: -1 becomes
/// `[11111111]`, -2 `[11111110]`, -10 `[11110110]`.
pub fn from_numeric_i8(value: i8, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    numeric_signed(i64::from(value), 8, bit_length)
}

pub fn from_numeric_i16(value: i16, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    numeric_signed(i64::from(value), 16, bit_length)
}

pub fn from_numeric_i32(value: i32, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    numeric_signed(i64::from(value), 32, bit_length)
}

pub fn from_numeric_i64(value: i64, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    numeric_signed(value, 64, bit_length)
}

/// Reads a region of at most 8 bits as an unsigned numeral.
pub fn into_numeric_u8(mem: &Region) -> Result<u8, MemoryError> {
    Ok(unsigned_numeral(mem, 8)? as u8)
}

pub fn into_numeric_u16(mem: &Region) -> Result<u16, MemoryError> {
    Ok(unsigned_numeral(mem, 16)? as u16)
}

pub fn into_numeric_u32(mem: &Region) -> Result<u32, MemoryError> {
    Ok(unsigned_numeral(mem, 32)? as u32)
}

pub fn into_numeric_u64(mem: &Region) -> Result<u64, MemoryError> {
    unsigned_numeral(mem, 64)
}

/// Reads a region of at most 8 bits as a two's-complement numeral,
/// sign-extending from the region's own length: `[1,0,1]` is -3.
pub fn into_numeric_i8(mem: &Region) -> Result<i8, MemoryError> {
    Ok(signed_numeral(mem, 8)? as i8)
}

pub fn into_numeric_i16(mem: &Region) -> Result<i16, MemoryError> {
    Ok(signed_numeral(mem, 16)? as i16)
}

pub fn into_numeric_i32(mem: &Region) -> Result<i32, MemoryError> {
    Ok(signed_numeral(mem, 32)? as i32)
}

pub fn into_numeric_i64(mem: &Region) -> Result<i64, MemoryError> {
    signed_numeral(mem, 64)
}

/// Loads the IEEE-754 image of an f32 as a numeral. Floats cannot be
/// truncated meaningfully, so `bit_length` below 32 signals
/// `NumericRangeError`; above it, the numeral is zero-padded on the left.
pub fn from_numeric_f32(value: f32, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    let bit_length = bit_length.unwrap_or(32);
    if bit_length == 0 {
        return Ok(Region::default());
    }
    if bit_length < 32 {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(region_from_unsigned(u64::from(value.to_bits()), bit_length))
}

pub fn from_numeric_f64(value: f64, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    let bit_length = bit_length.unwrap_or(64);
    if bit_length == 0 {
        return Ok(Region::default());
    }
    if bit_length < 64 {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(region_from_unsigned(value.to_bits(), bit_length))
}

/// Reads an exactly-32-bit region as an IEEE-754 single.
pub fn into_numeric_f32(mem: &Region) -> Result<f32, MemoryError> {
    if mem.bit_length() != 32 {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(f32::from_bits(numeral_value(mem) as u32))
}

/// Reads an exactly-64-bit region as an IEEE-754 double.
pub fn into_numeric_f64(mem: &Region) -> Result<f64, MemoryError> {
    if mem.bit_length() != 64 {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(f64::from_bits(numeral_value(mem)))
}

// ---------------------------------------------------------------------------
// Fixed-width natural codecs (value as raw memory)
// ---------------------------------------------------------------------------

/// Loads a u8 as a 1-byte memory slice rather than a number: bit order is
/// left to right, so `0b0001_0011` becomes `[11001000]` — exactly reversed
/// from how it is written. Truncating raw memory is well-defined, so any
/// `bit_length` is accepted.
pub fn from_natural_u8(value: u8, bit_length: Option<usize>) -> Region {
    natural_region(&value.to_le_bytes(), bit_length.unwrap_or(8))
}

/// Treats a u16 as a 2-byte memory slice; `0b1_00010011` becomes
/// `[11001000 10000000]`. Host endianness is irrelevant: the little-endian
/// image is read bit by bit from the least significant end.
pub fn from_natural_u16(value: u16, bit_length: Option<usize>) -> Region {
    natural_region(&value.to_le_bytes(), bit_length.unwrap_or(16))
}

pub fn from_natural_u32(value: u32, bit_length: Option<usize>) -> Region {
    natural_region(&value.to_le_bytes(), bit_length.unwrap_or(32))
}

pub fn from_natural_u64(value: u64, bit_length: Option<usize>) -> Region {
    natural_region(&value.to_le_bytes(), bit_length.unwrap_or(64))
}

pub fn from_natural_i8(value: i8, bit_length: Option<usize>) -> Region {
    natural_region(&value.to_le_bytes(), bit_length.unwrap_or(8))
}

pub fn from_natural_i16(value: i16, bit_length: Option<usize>) -> Region {
    natural_region(&value.to_le_bytes(), bit_length.unwrap_or(16))
}

pub fn from_natural_i32(value: i32, bit_length: Option<usize>) -> Region {
    natural_region(&value.to_le_bytes(), bit_length.unwrap_or(32))
}

pub fn from_natural_i64(value: i64, bit_length: Option<usize>) -> Region {
    natural_region(&value.to_le_bytes(), bit_length.unwrap_or(64))
}

/// Treats an f32 as a sequence of bytes. Padding is allowed but truncating
/// a float is a semantic error.
pub fn from_natural_f32(value: f32, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    let bit_length = bit_length.unwrap_or(32);
    if bit_length == 0 {
        return Ok(Region::default());
    }
    if bit_length < 32 {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(natural_region(&value.to_le_bytes(), bit_length))
}

pub fn from_natural_f64(value: f64, bit_length: Option<usize>) -> Result<Region, MemoryError> {
    let bit_length = bit_length.unwrap_or(64);
    if bit_length == 0 {
        return Ok(Region::default());
    }
    if bit_length < 64 {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(natural_region(&value.to_le_bytes(), bit_length))
}

// ---------------------------------------------------------------------------
// Big-integer codecs
// ---------------------------------------------------------------------------

/// Loads a big integer as numeric data. The signedness flag governs how
/// `bit_length` is range-validated: signed lengths reserve a sign bit and
/// encode two's complement, unsigned lengths reject negatives. Without an
/// explicit length, signed values take magnitude-bits-plus-one (room for
/// the sign) and unsigned values take exactly their magnitude bits.
pub fn from_numeric_big_integer(
    value: &BigInt,
    bit_length: Option<usize>,
    signed: bool,
) -> Result<Region, MemoryError> {
    let bit_length = resolve_big_integer_length(value, bit_length, signed)?;
    let image = twos_complement_image(value, bit_length);

    let numeral: Vec<u8> = (0..bit_length).rev().map(|i| image_bit(&image, i)).collect();
    Ok(Region::from_raw_parts(bits::pack_bits(&numeral), bit_length))
}

/// Interprets the region as a big integer, two's complement when `signed`.
pub fn into_numeric_big_integer(mem: &Region, signed: bool) -> BigInt {
    let mut magnitude = BigUint::from(0u8);
    for bit in iterate_logical_bits(mem) {
        magnitude = (magnitude << 1usize) + BigUint::from(bit);
    }

    let value = BigInt::from(magnitude);
    if signed && !mem.is_empty() && bits::bit_at(mem.cells(), 0) == 1 {
        value - (BigInt::from(1) << mem.bit_length())
    } else {
        value
    }
}

/// Loads a big integer as raw memory: logical bit `i` carries weight `2^i`,
/// the mirror image of the numeric layout.
pub fn from_natural_big_integer(
    value: &BigInt,
    bit_length: Option<usize>,
    signed: bool,
) -> Result<Region, MemoryError> {
    let bit_length = resolve_big_integer_length(value, bit_length, signed)?;
    let image = twos_complement_image(value, bit_length);

    let raw: Vec<u8> = (0..bit_length).map(|i| image_bit(&image, i)).collect();
    Ok(Region::from_raw_parts(bits::pack_bits(&raw), bit_length))
}

/// Reads the region as raw memory: an unsigned integer whose bit `i` is
/// logical bit `i`.
pub fn into_natural_big_integer(mem: &Region) -> BigUint {
    let mut image = vec![0u8; meta_op_byte_length(mem)];
    for (i, bit) in iterate_logical_bits(mem).enumerate() {
        image[i / 8] |= bit << (i % 8);
    }

    BigUint::from_bytes_le(&image)
}

/// Inclusive range representable by an unsigned numeral of `bit_length` bits.
pub fn range_unsigned(bit_length: usize) -> (BigInt, BigInt) {
    if bit_length == 0 {
        return (BigInt::from(0), BigInt::from(0));
    }

    (BigInt::from(0), (BigInt::from(1) << bit_length) - 1)
}

/// Inclusive range representable by a two's-complement numeral of
/// `bit_length` bits.
pub fn range_signed(bit_length: usize) -> (BigInt, BigInt) {
    if bit_length == 0 {
        return (BigInt::from(0), BigInt::from(0));
    }

    let half = BigInt::from(1) << (bit_length - 1);
    (-&half, half - 1)
}

pub fn is_in_range_unsigned(value: &BigInt, bit_length: usize) -> bool {
    let (lo, hi) = range_unsigned(bit_length);
    lo <= *value && *value <= hi
}

pub fn is_in_range_signed(value: &BigInt, bit_length: usize) -> bool {
    let (lo, hi) = range_signed(bit_length);
    lo <= *value && *value <= hi
}

// ---------------------------------------------------------------------------
// Shared numeral plumbing
// ---------------------------------------------------------------------------

fn numeric_unsigned(
    value: u64,
    width: usize,
    bit_length: Option<usize>,
) -> Result<Region, MemoryError> {
    let bit_length = bit_length.unwrap_or(width);
    if !fits_unsigned(value, bit_length) {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(region_from_unsigned(value, bit_length))
}

fn numeric_signed(
    value: i64,
    width: usize,
    bit_length: Option<usize>,
) -> Result<Region, MemoryError> {
    let bit_length = bit_length.unwrap_or(width);
    if !fits_signed(value, bit_length) {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(region_from_signed(value, bit_length))
}

fn fits_unsigned(value: u64, bit_length: usize) -> bool {
    if bit_length >= 64 {
        true
    } else {
        value >> bit_length == 0
    }
}

fn fits_signed(value: i64, bit_length: usize) -> bool {
    match bit_length {
        0 => value == 0,
        n if n >= 64 => true,
        n => {
            let lo = -(1i64 << (n - 1));
            let hi = (1i64 << (n - 1)) - 1;
            lo <= value && value <= hi
        }
    }
}

fn region_from_unsigned(value: u64, bit_length: usize) -> Region {
    let numeral: Vec<u8> = (0..bit_length)
        .rev()
        .map(|i| if i >= 64 { 0 } else { ((value >> i) & 1) as u8 })
        .collect();

    Region::from_raw_parts(bits::pack_bits(&numeral), bit_length)
}

fn region_from_signed(value: i64, bit_length: usize) -> Region {
    // Arithmetic shift keeps the sign; positions past 64 take the sign bit.
    let numeral: Vec<u8> = (0..bit_length)
        .rev()
        .map(|i| if i >= 64 { (value < 0) as u8 } else { ((value >> i) & 1) as u8 })
        .collect();

    Region::from_raw_parts(bits::pack_bits(&numeral), bit_length)
}

/// Folds at most 64 logical bits, MSB first. Callers check the length.
fn numeral_value(mem: &Region) -> u64 {
    let mut value = 0u64;
    for bit in iterate_logical_bits(mem) {
        value = (value << 1) | u64::from(bit);
    }

    value
}

fn unsigned_numeral(mem: &Region, width: usize) -> Result<u64, MemoryError> {
    if mem.bit_length() > width {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(numeral_value(mem))
}

fn signed_numeral(mem: &Region, width: usize) -> Result<i64, MemoryError> {
    if mem.bit_length() > width {
        return Err(MemoryError::NumericRangeError);
    }
    if mem.is_empty() {
        return Ok(0);
    }

    Ok(bits::sign_extend(numeral_value(mem), mem.bit_length()))
}

fn natural_region(le_bytes: &[u8], bit_length: usize) -> Region {
    let mut raw = Vec::with_capacity(le_bytes.len() * 8);
    for &byte in le_bytes {
        for i in 0..8 {
            raw.push((byte >> i) & 1);
        }
    }

    let full = Region::from_raw_parts(bits::pack_bits(&raw), raw.len());
    op_ensure_bit_length(&full, bit_length, false)
}

fn resolve_big_integer_length(
    value: &BigInt,
    bit_length: Option<usize>,
    signed: bool,
) -> Result<usize, MemoryError> {
    let bit_length = match bit_length {
        Some(n) => n,
        None if signed => value.bits() as usize + 1,
        None => value.bits() as usize,
    };

    let in_range = if signed {
        is_in_range_signed(value, bit_length)
    } else {
        is_in_range_unsigned(value, bit_length)
    };
    if !in_range {
        return Err(MemoryError::NumericRangeError);
    }

    Ok(bit_length)
}

/// Little-endian byte image of `value mod 2^bit_length`.
fn twos_complement_image(value: &BigInt, bit_length: usize) -> Vec<u8> {
    let modulus = BigInt::from(1) << bit_length;
    let encoded = ((value % &modulus) + &modulus) % &modulus;

    encoded.to_biguint().unwrap_or_default().to_bytes_le()
}

fn image_bit(le_bytes: &[u8], index: usize) -> u8 {
    le_bytes.get(index / 8).map_or(0, |byte| (byte >> (index % 8)) & 1)
}

#[test]
fn test_bit_list_codec() {
    let mem = from_bit_list(&[1, 0, 1], None).unwrap();
    assert_eq!(mem.cells(), &[0b1010_0000]);
    assert_eq!(into_bit_list(&mem), vec![1, 0, 1]);

    assert_eq!(from_bit_list(&[1, 2], None), Err(MemoryError::InvalidMemoryRegion));
    assert_eq!(from_bit_list(&[1, 0, 1], Some(2)).unwrap().cells(), &[0b1000_0000]);
    assert_eq!(from_bit_list(&[], Some(0)).unwrap(), Region::default());
}

#[test]
fn test_byte_list_codec() {
    let mem = from_byte_list(&[0x12, 0x34], 16);
    assert_eq!(mem.cells(), &[0x12, 0x34]);
    assert_eq!(into_byte_list(&mem), vec![0x12, 0x34]);

    // Truncation keeps the leftmost bits of the leftmost cells.
    assert_eq!(from_byte_list(&[0xFF, 0xFF], 12).cells(), &[0xFF, 0xF0]);
}

#[test]
fn test_bytes_round_trip() {
    let mem = from_bytes(&[0xDE, 0xAD]);
    assert_eq!(mem.bit_length(), 16);
    assert_eq!(into_bytes(&mem), vec![0xDE, 0xAD]);
}

#[test]
fn test_numeric_u8_is_written_order() {
    assert_eq!(from_numeric_u8(0b0001_0011, None).unwrap().cells(), &[0b0001_0011]);
    assert_eq!(into_bit_list(&from_numeric_u8(5, Some(3)).unwrap()), vec![1, 0, 1]);
    assert_eq!(from_numeric_u8(5, Some(2)), Err(MemoryError::NumericRangeError));
    assert_eq!(from_numeric_u8(0, Some(0)).unwrap(), Region::default());
    assert_eq!(from_numeric_u8(1, Some(0)), Err(MemoryError::NumericRangeError));
}

#[test]
fn test_natural_u8_is_memory_order() {
    // 0b00010011 as a memory slice appears backwards: [11001000].
    assert_eq!(from_natural_u8(0b0001_0011, None).cells(), &[0b1100_1000]);
    // Truncation of raw memory is allowed.
    assert_eq!(into_bit_list(&from_natural_u8(0b0001_0011, Some(4))), vec![1, 1, 0, 0]);
}

#[test]
fn test_natural_u16_little_endian_image() {
    // 0b1_00010011: [11001000 10000000].
    assert_eq!(from_natural_u16(0b1_0001_0011, None).cells(), &[0b1100_1000, 0b1000_0000]);
}

#[test]
fn test_numeric_u16_as_written() {
    // 0b1_00010011: [00000001 00010011].
    assert_eq!(from_numeric_u16(0b1_0001_0011, None).unwrap().cells(), &[0x01, 0x13]);
}

#[test]
fn test_numeric_i8_twos_complement() {
    assert_eq!(from_numeric_i8(-1, None).unwrap().cells(), &[0xFF]);
    assert_eq!(from_numeric_i8(-2, None).unwrap().cells(), &[0xFE]);
    assert_eq!(from_numeric_i8(-10, None).unwrap().cells(), &[0xF6]);
    assert_eq!(into_bit_list(&from_numeric_i8(-3, Some(3)).unwrap()), vec![1, 0, 1]);
    assert_eq!(from_numeric_i8(-5, Some(3)), Err(MemoryError::NumericRangeError));
}

#[test]
fn test_numeric_signed_widening_sign_extends() {
    assert_eq!(from_numeric_i8(-1, Some(16)).unwrap().cells(), &[0xFF, 0xFF]);
    assert_eq!(from_numeric_i8(3, Some(16)).unwrap().cells(), &[0x00, 0x03]);
}

#[test]
fn test_numeric_round_trips_at_extremes() {
    assert_eq!(into_numeric_u8(&from_numeric_u8(u8::MAX, None).unwrap()).unwrap(), u8::MAX);
    assert_eq!(into_numeric_u16(&from_numeric_u16(0x1234, None).unwrap()).unwrap(), 0x1234);
    assert_eq!(
        into_numeric_u32(&from_numeric_u32(u32::MAX, None).unwrap()).unwrap(),
        u32::MAX
    );
    assert_eq!(
        into_numeric_u64(&from_numeric_u64(u64::MAX, None).unwrap()).unwrap(),
        u64::MAX
    );
    assert_eq!(into_numeric_i8(&from_numeric_i8(i8::MIN, None).unwrap()).unwrap(), i8::MIN);
    assert_eq!(
        into_numeric_i16(&from_numeric_i16(i16::MIN, None).unwrap()).unwrap(),
        i16::MIN
    );
    assert_eq!(
        into_numeric_i32(&from_numeric_i32(-1, None).unwrap()).unwrap(),
        -1
    );
    assert_eq!(
        into_numeric_i64(&from_numeric_i64(i64::MIN, None).unwrap()).unwrap(),
        i64::MIN
    );
}

#[test]
fn test_into_numeric_checks_width() {
    let nine = from_bit_list(&[1, 0, 1, 0, 1, 0, 1, 0, 1], None).unwrap();
    assert_eq!(into_numeric_u8(&nine), Err(MemoryError::NumericRangeError));
    assert_eq!(into_numeric_i8(&nine), Err(MemoryError::NumericRangeError));

    assert_eq!(into_numeric_u8(&Region::default()).unwrap(), 0);
    assert_eq!(into_numeric_i8(&Region::default()).unwrap(), 0);
}

#[test]
fn test_into_numeric_signed_sign_extends_short_regions() {
    let mem = from_bit_list(&[1, 0, 1], None).unwrap();
    assert_eq!(into_numeric_i8(&mem).unwrap(), -3);
    assert_eq!(into_numeric_u8(&mem).unwrap(), 5);
}

#[test]
fn test_float_codecs() {
    let single = from_numeric_f32(3.5, None).unwrap();
    assert_eq!(single.cells(), &[0x40, 0x60, 0x00, 0x00]);
    assert_eq!(into_numeric_f32(&single).unwrap(), 3.5);

    let double = from_numeric_f64(-0.25, None).unwrap();
    assert_eq!(into_numeric_f64(&double).unwrap(), -0.25);

    assert_eq!(from_numeric_f32(1.0, Some(16)), Err(MemoryError::NumericRangeError));
    assert_eq!(from_numeric_f32(1.0, Some(0)).unwrap(), Region::default());
    assert_eq!(
        into_numeric_f32(&from_bit_list(&[1, 0, 1], None).unwrap()),
        Err(MemoryError::NumericRangeError)
    );

    // Natural floats hold the little-endian byte image.
    assert_eq!(from_natural_f32(3.5, None).unwrap().cells().len(), 4);
    assert_eq!(from_natural_f64(3.5, Some(32)), Err(MemoryError::NumericRangeError));
}

#[test]
fn test_big_integer_signed_reading() {
    let mem = from_bit_list(&[1, 0, 1], None).unwrap();
    assert_eq!(into_numeric_big_integer(&mem, true), BigInt::from(-3));
    assert_eq!(into_numeric_big_integer(&mem, false), BigInt::from(5));
    assert_eq!(into_numeric_big_integer(&Region::default(), true), BigInt::from(0));
}

#[test]
fn test_big_integer_default_lengths() {
    // Signed defaults reserve a sign bit; unsigned take the magnitude bits.
    let negative = from_numeric_big_integer(&BigInt::from(-3), None, true).unwrap();
    assert_eq!(into_bit_list(&negative), vec![1, 0, 1]);

    let unsigned = from_numeric_big_integer(&BigInt::from(5), None, false).unwrap();
    assert_eq!(into_bit_list(&unsigned), vec![1, 0, 1]);

    let signed = from_numeric_big_integer(&BigInt::from(5), None, true).unwrap();
    assert_eq!(into_bit_list(&signed), vec![0, 1, 0, 1]);

    assert_eq!(
        from_numeric_big_integer(&BigInt::from(0), None, false).unwrap(),
        Region::default()
    );
}

#[test]
fn test_big_integer_range_checks() {
    assert_eq!(
        from_numeric_big_integer(&BigInt::from(-1), Some(8), false),
        Err(MemoryError::NumericRangeError)
    );
    assert_eq!(
        from_numeric_big_integer(&BigInt::from(128), Some(8), true),
        Err(MemoryError::NumericRangeError)
    );
    assert!(from_numeric_big_integer(&BigInt::from(-128), Some(8), true).is_ok());
    assert!(from_numeric_big_integer(&BigInt::from(255), Some(8), false).is_ok());
}

#[test]
fn test_big_integer_round_trip_past_64_bits() {
    let value = (BigInt::from(1) << 100) - 7;
    let mem = from_numeric_big_integer(&value, None, true).unwrap();
    assert_eq!(into_numeric_big_integer(&mem, true), value);

    let negative: BigInt = -(BigInt::from(1) << 100u32);
    let mem = from_numeric_big_integer(&negative, None, true).unwrap();
    assert_eq!(into_numeric_big_integer(&mem, true), negative);
}

#[test]
fn test_natural_big_integer_round_trip() {
    let value = BigInt::from(7);
    let mem = from_natural_big_integer(&value, Some(16), false).unwrap();
    // Raw memory view: weight grows left to right.
    assert_eq!(into_bit_list(&mem)[..4], [1, 1, 1, 0]);
    assert_eq!(into_natural_big_integer(&mem), BigUint::from(7u8));
}

#[test]
fn test_range_helpers() {
    assert_eq!(range_signed(0), (BigInt::from(0), BigInt::from(0)));
    assert_eq!(range_unsigned(8), (BigInt::from(0), BigInt::from(255)));
    assert_eq!(range_signed(8), (BigInt::from(-128), BigInt::from(127)));
    assert!(is_in_range_unsigned(&BigInt::from(1), 8));
    assert!(is_in_range_signed(&BigInt::from(1), 8));
    assert!(!is_in_range_signed(&BigInt::from(128), 8));
}

#[test]
fn test_bool_codec() {
    assert_eq!(into_bit_list(&from_bool(true, None)), vec![1]);
    assert_eq!(from_bool(true, Some(8)).cells(), &[0x80]);
    assert_eq!(from_bool(false, Some(0)), Region::default());

    assert!(into_bool(&from_bool(true, Some(8))));
    assert!(!into_bool(&from_bool(false, None)));
    assert!(!into_bool(&Region::default()));
}

#[test]
fn test_text_codecs() {
    let mem = from_ascii("Hi").unwrap();
    assert_eq!(mem.cells(), &[0x48, 0x69]);
    assert_eq!(into_ascii(&mem).unwrap(), "Hi");

    assert_eq!(from_ascii("héllo"), Err(MemoryError::NumericRangeError));

    let snowman = from_utf8("☃");
    assert_eq!(into_utf8(&snowman).unwrap(), "☃");

    let ragged = from_bit_list(&[1, 0, 1], None).unwrap();
    assert_eq!(into_ascii(&ragged), Err(MemoryError::ByteAlignmentError));
    assert_eq!(into_utf8(&ragged), Err(MemoryError::ByteAlignmentError));
    assert_eq!(into_utf8(&from_bytes(&[0xFF])), Err(MemoryError::NumericRangeError));
}

#[test]
fn test_foreign_bytes_codec() {
    // Declared numeric bit order: each byte's bits flip to identity.
    let mem = from_foreign_bytes(&[0x34, 0x12], 16, Order::RightToLeft, Order::LeftToRight)
        .unwrap();
    assert_eq!(mem.cells(), &[0x2C, 0x48]);

    // The same declaration maps identity back out.
    let out = into_foreign_bytes(&mem, Order::RightToLeft, Order::LeftToRight).unwrap();
    assert_eq!(out, vec![0x34, 0x12]);

    assert_eq!(
        from_foreign_bytes(&[0xFF], 9, Order::LeftToRight, Order::LeftToRight),
        Err(MemoryError::BoundsError)
    );
    assert_eq!(
        from_foreign_bytes(&[0xF0, 0xF0], 12, Order::RightToLeft, Order::RightToLeft),
        Err(MemoryError::OrientationError)
    );
}
