// Copyright 2021 bluss and rdarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The generic resize algorithms, written against the [`Resizable`]
//! contract.
//!
//! A call moves through validation, index mapping, storage mutation
//! and extent propagation, in that order. Validation is complete
//! before the first mutation, so a rejected request leaves the array
//! untouched. Mutation either happens on the owned root buffer or the
//! translated request is forwarded to the parent, recursing until a
//! buffer owner is reached.

use crate::axis::Axis;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::growth;
use crate::resize_spec::{AxisSpec, IntoResizeSpec, ResizeSpec};
use crate::resize_traits::{ParentMut, ParentRef, Resizable};

/// Resize `array` to the given per-axis specification.
///
/// Integers set a new length for their axis, `..` keeps an axis
/// unchanged, and index or boolean vectors select which slices along
/// the axis survive (in their original order). Elements whose index is
/// valid under both the old and the new extent are preserved; newly
/// exposed slots hold unspecified values.
///
/// ```
/// use rdarray::SimpleArray;
///
/// let mut a = SimpleArray::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
/// a.resize((2, 3)).unwrap();
/// assert_eq!(a.shape(), &[2, 3]);
/// assert_eq!(a[[1, 1]], 4);
/// ```
///
/// ***Errors*** with `NotResizable` if `A`'s parent chain does not
/// reach a growable buffer, and with a validation error if the
/// specification does not fit the current extent; in both cases the
/// array is unchanged.
pub fn resize<A, I>(array: &mut A, spec: I) -> Result<(), ShapeError>
where
    A: Resizable,
    A::Elem: Default,
    I: IntoResizeSpec,
{
    let spec = spec.into_resize_spec();
    apply_resize(array, &spec)
}

/// Resize a single axis of `array`.
///
/// `spec` follows the same conversions as the per-axis entries of
/// [`resize`]: an integer sets the new length, an index vector or a
/// boolean mask selects the surviving slices along `axis`.
///
/// ```
/// use rdarray::{Axis, SimpleArray};
///
/// let mut a = SimpleArray::from_shape_vec((4,), vec![1, 1, 0, 1]).unwrap();
/// a.resize_axis(Axis(0), [true, true, false, true]).unwrap();
/// assert_eq!(a.as_slice(), &[1, 1, 1]);
/// ```
pub fn resize_axis<A, S>(array: &mut A, axis: Axis, spec: S) -> Result<(), ShapeError>
where
    A: Resizable,
    A::Elem: Default,
    S: Into<AxisSpec>,
{
    let ndim = array.extent().ndim();
    if axis.index() >= ndim {
        return Err(from_kind(ErrorKind::IncompatibleShape));
    }
    let spec = ResizeSpec::single(ndim, axis, spec.into());
    apply_resize(array, &spec)
}

/// Grow the capacity of the root buffer behind `array` to at least
/// `min_capacity` element slots.
///
/// Purely a performance hint: the extent of `array` (and of everything
/// on its parent chain) is unchanged, and capacity is never given
/// back. A later resize whose element count fits in the reserved
/// capacity will not allocate.
///
/// ***Errors*** with `NotResizable` for types without the capability
/// and with `AllocationFailure` if the underlying buffer cannot grow.
pub fn reserve<A>(array: &mut A, min_capacity: usize) -> Result<(), ShapeError>
where
    A: Resizable,
{
    if !A::RESIZABLE {
        return Err(from_kind(ErrorKind::NotResizable));
    }
    match array.parent_mut() {
        ParentMut::Buffer(buf) => buf.reserve_total(min_capacity),
        ParentMut::Array(parent) => reserve(parent, min_capacity),
        ParentMut::None => Err(from_kind(ErrorKind::NotResizable)),
    }
}

/// One level of the resize recursion, on a normalized specification.
fn apply_resize<A>(array: &mut A, spec: &ResizeSpec) -> Result<(), ShapeError>
where
    A: Resizable,
    A::Elem: Default,
{
    if !A::RESIZABLE {
        return Err(from_kind(ErrorKind::NotResizable));
    }
    let old = array.extent();
    let new = spec.resolve(&old)?;

    // translate to the parent's coordinates while the borrow is shared
    let parent_spec = match array.parent() {
        ParentRef::Array(parent) => {
            let parent_ndim = parent.extent().ndim();
            let mut specs = vec![AxisSpec::Keep; parent_ndim];
            for ax in 0..spec.ndim() {
                let (pax, pspec) = array.map_axis_spec(Axis(ax), spec[ax].clone());
                if pax.index() >= parent_ndim {
                    return Err(from_kind(ErrorKind::IncompatibleShape));
                }
                specs[pax.index()] = pspec;
            }
            Some(ResizeSpec::new(specs))
        }
        ParentRef::Buffer(_) | ParentRef::None => None,
    };

    array.before_resize(spec);
    match array.parent_mut() {
        ParentMut::Buffer(buf) => growth::resize_buffer(buf, &old, spec, &new)?,
        ParentMut::Array(parent) => match parent_spec {
            Some(parent_spec) => apply_resize(parent, &parent_spec)?,
            // parent() and parent_mut() disagreed on the variant
            None => return Err(from_kind(ErrorKind::NotResizable)),
        },
        // RESIZABLE promised a buffer somewhere up the chain; a type
        // that breaks that promise gets an error, not a crash
        ParentMut::None => return Err(from_kind(ErrorKind::NotResizable)),
    }
    array.set_extent(&new);
    array.after_resize(spec);
    Ok(())
}
