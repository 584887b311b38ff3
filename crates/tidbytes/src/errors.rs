/// Failure kinds surfaced by region operations and codecs.
///
/// Variant names are stable identifiers shared with the cross-language
/// conformance suite; see [`MemoryError::symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// A raw cell sequence failed region validation.
    InvalidMemoryRegion,
    /// An index, range, or target length violates a containment constraint.
    BoundsError,
    /// A byte-granular operation was given a bit position or length that is
    /// not a multiple of 8.
    ByteAlignmentError,
    /// A numeric codec cannot represent the value in the requested bit length.
    NumericRangeError,
    /// A codec was invoked with an inconsistent bit/byte-order declaration.
    OrientationError,
}

impl MemoryError {
    /// Stable string identity of this error kind.
    pub fn symbol(&self) -> &'static str {
        match self {
            MemoryError::InvalidMemoryRegion => "InvalidMemoryRegion",
            MemoryError::BoundsError => "BoundsError",
            MemoryError::ByteAlignmentError => "ByteAlignmentError",
            MemoryError::NumericRangeError => "NumericRangeError",
            MemoryError::OrientationError => "OrientationError",
        }
    }
}
