// Copyright 2021 bluss and rdarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The capability contract for resizable arrays.
//!
//! An array type opts into the resize protocol by implementing
//! [`Resizable`]: naming its parent (the array or buffer its storage
//! delegates to), exposing its extent, and, where its coordinate
//! system differs from the parent's, overriding the index mapping.
//! Everything else has defaults. The generic algorithms in
//! [`crate::resize`] are written purely against this contract.

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::axis::Axis;
use crate::buffer::Buffer;
use crate::extent::{self, Extent, Ix};
use crate::resize_spec::{AxisSpec, ResizeSpec};

/// A shared reference to an array's parent storage.
pub enum ParentRef<'a, A, P> {
    /// The array owns the root buffer itself.
    Buffer(&'a Buffer<A>),
    /// Storage is delegated to another array.
    Array(&'a P),
    /// The array has no growable storage behind it.
    None,
}

/// A mutable reference to an array's parent storage.
pub enum ParentMut<'a, A, P> {
    /// The array owns the root buffer itself.
    Buffer(&'a mut Buffer<A>),
    /// Storage is delegated to another array.
    Array(&'a mut P),
    /// The array has no growable storage behind it.
    None,
}

/// Arrays that participate in the resize protocol.
///
/// The parent chain declared through [`Resizable::Parent`] must be
/// finite and acyclic, terminating either in a type that owns a
/// [`Buffer`] (`HAS_RESIZE_BUFFER`) or in one with no storage to grow
/// (see [`NoParent`]). Whether the chain reaches a buffer is a property
/// of the type, not of any instance, and is captured by
/// [`Resizable::RESIZABLE`].
pub trait Resizable {
    /// The element type.
    type Elem;

    /// The type this array delegates storage to. Buffer owners and
    /// terminal types use [`NoParent`].
    type Parent: Resizable<Elem = Self::Elem>;

    /// True iff this type itself owns the root buffer.
    const HAS_RESIZE_BUFFER: bool = false;

    /// True iff the parent chain reaches a root buffer. The default
    /// computes it from the declared parent; only terminal types need
    /// to state it explicitly.
    const RESIZABLE: bool =
        Self::HAS_RESIZE_BUFFER || <Self::Parent as Resizable>::RESIZABLE;

    /// The parent this array delegates storage to.
    ///
    /// Must agree with [`parent_mut`](Resizable::parent_mut) on the
    /// variant returned.
    fn parent(&self) -> ParentRef<'_, Self::Elem, Self::Parent>;

    /// Mutable access to the parent storage.
    fn parent_mut(&mut self) -> ParentMut<'_, Self::Elem, Self::Parent>;

    /// The current extent of this array.
    fn extent(&self) -> Extent;

    /// The current length of one axis.
    ///
    /// **Panics** if `axis` is out of bounds.
    fn extent_of(&self, axis: Axis) -> Ix {
        self.extent()[axis.index()]
    }

    /// True iff [`set_extent`](Resizable::set_extent) and
    /// [`set_extent_of`](Resizable::set_extent_of) actually mutate
    /// observable state.
    const HAS_OBSERVABLE_SIZE: bool = false;

    /// Store a new extent.
    ///
    /// The default does nothing, which is correct for types whose
    /// extent is derived (views recompute it from their parent). A
    /// type that materializes its extent (typically through a
    /// [`Size`](crate::Size) handle) overrides this and sets
    /// `HAS_OBSERVABLE_SIZE` to advertise it. Note that for a
    /// non-observable type the call succeeds silently without any
    /// effect; there is no status reporting for this case.
    fn set_extent(&mut self, _new: &Extent) {}

    /// Store a new length for one axis.
    ///
    /// Derived from [`set_extent`](Resizable::set_extent) by default;
    /// override where a single-axis write is cheaper.
    fn set_extent_of(&mut self, axis: Axis, n: Ix) {
        let mut new = self.extent();
        new[axis.index()] = n;
        self.set_extent(&new);
    }

    /// Map an index in this array's coordinates to the parent's.
    ///
    /// Identity by default; must be overridden (purely, with no side
    /// effects) whenever the coordinate systems differ. Invoked on
    /// every delegated element access.
    fn map_index(&self, index: &[Ix]) -> Extent {
        Extent::from(index)
    }

    /// Map one of this array's axes to the parent axis it stands for.
    fn map_axis(&self, axis: Axis) -> Axis {
        axis
    }

    /// Map a per-axis resize specification to the parent's coordinate
    /// system. The default reuses [`map_axis`](Resizable::map_axis)
    /// and passes the specification through unchanged, which covers
    /// axis reordering; views that merge or split axes must override
    /// this together with the other mapping methods.
    fn map_axis_spec(&self, axis: Axis, spec: AxisSpec) -> (Axis, AxisSpec) {
        (self.map_axis(axis), spec)
    }

    /// Hook invoked after validation, before any mutation, for every
    /// resize entry point. For instrumentation and derived-state
    /// maintenance; the default does nothing.
    fn before_resize(&mut self, _spec: &ResizeSpec) {}

    /// Hook invoked after the resize completed, including extent
    /// propagation. The default does nothing.
    fn after_resize(&mut self, _spec: &ResizeSpec) {}

    /// Read the element at `index`, routing through the parent chain.
    ///
    /// The default checks the index against this array's extent, maps
    /// it, and delegates; at a buffer owner it assumes the row-major
    /// layout of the owned buffer. Types with another layout override.
    fn get(&self, index: &[Ix]) -> Option<&Self::Elem> {
        let ext = self.extent();
        if index.len() != ext.ndim() {
            return None;
        }
        if index.iter().zip(ext.slice()).any(|(&i, &d)| i >= d) {
            return None;
        }
        let mapped = self.map_index(index);
        match self.parent() {
            ParentRef::Buffer(buf) => {
                let offset = extent::offset_of(&ext, mapped.slice())?;
                buf.as_slice().get(offset)
            }
            ParentRef::Array(parent) => parent.get(mapped.slice()),
            ParentRef::None => None,
        }
    }

    /// Read the element at `index` mutably; see
    /// [`get`](Resizable::get).
    fn get_mut(&mut self, index: &[Ix]) -> Option<&mut Self::Elem> {
        let ext = self.extent();
        if index.len() != ext.ndim() {
            return None;
        }
        if index.iter().zip(ext.slice()).any(|(&i, &d)| i >= d) {
            return None;
        }
        let mapped = self.map_index(index);
        match self.parent_mut() {
            ParentMut::Buffer(buf) => {
                let offset = extent::offset_of(&ext, mapped.slice())?;
                buf.as_mut_slice().get_mut(offset)
            }
            ParentMut::Array(parent) => parent.get_mut(mapped.slice()),
            ParentMut::None => None,
        }
    }
}

/// The terminal parent: an uninhabited type standing in for "nothing
/// further up the chain".
///
/// Buffer owners declare it as their `Parent` (their storage is the
/// buffer, not another array), and so do types with no growable
/// storage at all.
pub struct NoParent<A> {
    never: Infallible,
    marker: PhantomData<A>,
}

impl<A> Resizable for NoParent<A> {
    type Elem = A;
    type Parent = NoParent<A>;

    const HAS_RESIZE_BUFFER: bool = false;
    const RESIZABLE: bool = false;

    fn parent(&self) -> ParentRef<'_, A, NoParent<A>> {
        match self.never {}
    }

    fn parent_mut(&mut self) -> ParentMut<'_, A, NoParent<A>> {
        match self.never {}
    }

    fn extent(&self) -> Extent {
        match self.never {}
    }
}

/// Resizing through a mutable borrow: a `&mut A` is a view of `A` with
/// identity mapping, so short-lived views can wrap a borrowed parent
/// instead of taking it by value.
impl<P> Resizable for &mut P
where
    P: Resizable,
{
    type Elem = P::Elem;
    type Parent = P::Parent;

    const HAS_RESIZE_BUFFER: bool = P::HAS_RESIZE_BUFFER;
    const RESIZABLE: bool = P::RESIZABLE;
    const HAS_OBSERVABLE_SIZE: bool = P::HAS_OBSERVABLE_SIZE;

    fn parent(&self) -> ParentRef<'_, P::Elem, P::Parent> {
        (**self).parent()
    }

    fn parent_mut(&mut self) -> ParentMut<'_, P::Elem, P::Parent> {
        (**self).parent_mut()
    }

    fn extent(&self) -> Extent {
        (**self).extent()
    }

    fn extent_of(&self, axis: Axis) -> Ix {
        (**self).extent_of(axis)
    }

    fn set_extent(&mut self, new: &Extent) {
        (**self).set_extent(new)
    }

    fn set_extent_of(&mut self, axis: Axis, n: Ix) {
        (**self).set_extent_of(axis, n)
    }

    fn map_index(&self, index: &[Ix]) -> Extent {
        (**self).map_index(index)
    }

    fn map_axis(&self, axis: Axis) -> Axis {
        (**self).map_axis(axis)
    }

    fn map_axis_spec(&self, axis: Axis, spec: AxisSpec) -> (Axis, AxisSpec) {
        (**self).map_axis_spec(axis, spec)
    }

    fn before_resize(&mut self, spec: &ResizeSpec) {
        (**self).before_resize(spec)
    }

    fn after_resize(&mut self, spec: &ResizeSpec) {
        (**self).after_resize(spec)
    }

    fn get(&self, index: &[Ix]) -> Option<&P::Elem> {
        (**self).get(index)
    }

    fn get_mut(&mut self, index: &[Ix]) -> Option<&mut P::Elem> {
        (**self).get_mut(index)
    }
}
