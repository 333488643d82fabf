use crate::error::{from_kind, ErrorKind, ShapeError};

/// The flat growable store at the root of a parent chain.
///
/// A `Buffer` is a contiguous run of element slots with a logical
/// length and an allocated capacity, capacity >= length at all times.
/// Shrinking the logical length drops the excess elements but retains
/// the allocation as a hint for future growth; capacity is never
/// released except by dropping or converting the buffer.
///
/// Allocation goes through `Vec::try_reserve`, so running out of
/// memory surfaces as [`ErrorKind::AllocationFailure`] instead of
/// aborting.
// Deliberately Vec-backed: every operation the resize passes need maps
// onto the Vec length/capacity contract.
#[derive(Clone, Debug, Default)]
pub struct Buffer<A> {
    data: Vec<A>,
}

impl<A> Buffer<A> {
    /// An empty buffer with no allocation.
    pub fn new() -> Buffer<A> {
        Buffer { data: Vec::new() }
    }

    pub fn from(v: Vec<A>) -> Buffer<A> {
        Buffer { data: v }
    }

    pub fn into_vec(self) -> Vec<A> {
        self.data
    }

    pub fn as_slice(&self) -> &[A] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [A] {
        &mut self.data
    }

    /// Logical length (number of live element slots).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocated capacity in element slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Grow the capacity to at least `min_capacity` slots.
    ///
    /// Never shrinks, never touches the logical length or any element.
    pub fn reserve_total(&mut self, min_capacity: usize) -> Result<(), ShapeError> {
        if min_capacity <= self.data.capacity() {
            return Ok(());
        }
        let additional = min_capacity - self.data.len();
        self.data
            .try_reserve(additional)
            .map_err(|_| from_kind(ErrorKind::AllocationFailure))
    }

    /// Extend the logical length to `new_len`, filling new slots with
    /// default values. No-op if the buffer is already at least that
    /// long.
    pub(crate) fn grow_with(&mut self, new_len: usize) -> Result<(), ShapeError>
    where
        A: Default,
    {
        if new_len <= self.data.len() {
            return Ok(());
        }
        self.reserve_total(new_len)?;
        self.data.resize_with(new_len, A::default);
        Ok(())
    }

    /// Shrink the logical length to `new_len`, dropping the excess
    /// elements. Capacity is retained.
    pub(crate) fn truncate(&mut self, new_len: usize) {
        self.data.truncate(new_len);
    }
}
