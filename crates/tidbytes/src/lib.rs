//! # tidbytes
//!
//! Bit-addressed memory regions with explicit bit and byte order.
//!
//! The unit of reasoning here is the bit, not the byte. A
//! [`Region`](region::Region) is an immutable sequence of logical bits in
//! *identity order* (bit 0 is the leftmost bit of the leftmost cell); the
//! `op_*` functions form a closed algebra over regions, and the `from_*` /
//! `into_*` codecs bridge host primitives in and out under an explicit
//! orientation. Numeric data counts bits right to left, raw memory counts
//! left to right, and the [`orient`] adapter converts between universes so
//! the algebra itself never has to care.
//!
//! ## Example
//!
//! ```
//! use tidbytes::{access, codec, meta, size};
//!
//! let region = codec::from_bit_list(&[1, 0, 1], None).unwrap();
//! assert_eq!(meta::meta_op_bit_length(&region), 3);
//!
//! // The same three bits read as a 3-bit two's-complement number are -3.
//! assert_eq!(codec::into_numeric_i8(&region).unwrap(), -3);
//!
//! let doubled = size::op_concatenate(&region, &region);
//! assert_eq!(codec::into_bit_list(&doubled), vec![1, 0, 1, 1, 0, 1]);
//!
//! let middle = access::op_get_bits(&doubled, 2, 5).unwrap();
//! assert_eq!(codec::into_bit_list(&middle), vec![1, 1, 0]);
//! ```

pub mod access;
pub mod bits;
pub mod codec;
pub mod errors;
pub mod meta;
pub mod orient;
pub mod region;
pub mod size;
#[cfg(feature = "serde")]
pub mod suite;
pub mod transform;
