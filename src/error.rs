use std::error::Error;
use std::fmt;

/// An error related to array shape, resize specifications or the
/// resize capability of an array type.
#[derive(Clone, Debug)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error related to array shape or resizing.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug)]
pub enum ErrorKind {
    /// the parent chain of the array type never reaches a growable buffer
    NotResizable,
    /// resize specification or data does not agree with the array's extent
    IncompatibleShape,
    /// index or selector refers to slots beyond the extent
    OutOfBounds,
    /// the total element count overflows `usize`
    Overflow,
    /// the backing buffer could not grow its allocation
    AllocationFailure,
}

#[inline(always)]
pub(crate) fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError { repr: k }
}

impl PartialEq for ErrorKind {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        *self as u8 == *rhs as u8
    }
}

impl PartialEq for ShapeError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::NotResizable => "array type is not resizable",
            ErrorKind::IncompatibleShape => "incompatible shapes or resize specification",
            ErrorKind::OutOfBounds => "index or selector out of bounds",
            ErrorKind::Overflow => "arithmetic overflow in element count",
            ErrorKind::AllocationFailure => "backing buffer allocation failed",
        };
        write!(f, "ShapeError/{:?}: {}", self.kind(), description)
    }
}
