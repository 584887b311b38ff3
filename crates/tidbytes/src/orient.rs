//! The orientation adapter: maps a region between its declared foreign
//! universe and identity order.
//!
//! Applying a foreign region's own bit and byte order as a transformation
//! upon itself yields identity order, and the same table maps an identity
//! region back out. Numeric data declares right-to-left bit order; raw
//! memory declares left-to-right for both axes.

use crate::errors::MemoryError;
use crate::region::Region;
use crate::transform::{op_identity, op_reverse, op_reverse_bits, op_reverse_bytes};

/// Direction in which elements of an axis (bits or bytes) are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// First element is on the far left.
    LeftToRight,
    /// First element is on the far right.
    RightToLeft,
}

impl Default for Order {
    fn default() -> Self {
        Order::LeftToRight
    }
}

/// Applies a bit+byte order declaration as a transformation.
pub fn op_transform(mem: &Region, bit_order: Order, byte_order: Order) -> Region {
    match (bit_order, byte_order) {
        (Order::LeftToRight, Order::LeftToRight) => op_identity(mem),
        (Order::RightToLeft, Order::LeftToRight) => op_reverse_bits(mem),
        (Order::LeftToRight, Order::RightToLeft) => op_reverse_bytes(mem),
        (Order::RightToLeft, Order::RightToLeft) => op_reverse(mem),
    }
}

/// Rejects order declarations that leave the partial byte's position
/// ambiguous: numeric (right-to-left) bit order with a right-to-left byte
/// order only lines up when the length is a whole number of bytes.
pub fn check_orientation(
    bit_order: Order,
    byte_order: Order,
    bit_length: usize,
) -> Result<(), MemoryError> {
    if bit_order == Order::RightToLeft
        && byte_order == Order::RightToLeft
        && bit_length % 8 != 0
    {
        return Err(MemoryError::OrientationError);
    }

    Ok(())
}
