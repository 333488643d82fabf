use std::fmt;
use std::ops::{Index, IndexMut};

use crate::axis::Axis;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::extent::{Extent, Ix};
use crate::resize_spec::{AxisSpec, IntoResizeSpec};
use crate::resize_traits::{ParentMut, ParentRef, Resizable};

/// An axis-permuted view over another resizable array.
///
/// `Permuted` reorders the coordinate system of its parent without
/// touching any element: axis `i` of the view is axis `perm[i]` of the
/// parent. Transposition is the special case of reversing all axes.
/// The view's extent is derived from the parent on every read, so a
/// resize issued through the view (or through any other view sharing
/// the same parent) is immediately visible everywhere.
///
/// The parent is held by value; pass a `&mut` reference to keep
/// ownership at the call site:
///
/// ```
/// use rdarray::{Axis, Permuted, Resizable, SimpleArray};
///
/// let mut a = SimpleArray::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
/// let mut t = Permuted::reversed(&mut a);
/// assert_eq!(t.extent().slice(), &[3, 2]);
/// assert_eq!(t[[2, 1]], 6);
///
/// // resizing the view's axis 0 resizes the parent's axis 1
/// t.resize_axis(Axis(0), 2).unwrap();
/// drop(t);
/// assert_eq!(a.shape(), &[2, 2]);
/// assert_eq!(a.as_slice(), &[1, 2, 4, 5]);
/// ```
pub struct Permuted<P> {
    parent: P,
    perm: Vec<Ix>,
}

impl<P> Permuted<P>
where
    P: Resizable,
{
    /// Create a view with the given axis permutation: axis `i` of the
    /// view is axis `perm[i]` of the parent.
    ///
    /// ***Errors*** unless `perm` is a permutation of the parent's
    /// axes.
    pub fn new(parent: P, perm: &[Ix]) -> Result<Permuted<P>, ShapeError> {
        let ndim = parent.extent().ndim();
        if perm.len() != ndim {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        let mut seen = vec![false; ndim];
        for &ax in perm {
            if ax >= ndim || seen[ax] {
                return Err(from_kind(ErrorKind::IncompatibleShape));
            }
            seen[ax] = true;
        }
        Ok(Permuted {
            parent,
            perm: perm.to_vec(),
        })
    }

    /// The transposed view: all axes in reverse order.
    pub fn reversed(parent: P) -> Permuted<P> {
        let ndim = parent.extent().ndim();
        Permuted {
            parent,
            perm: (0..ndim).rev().collect(),
        }
    }

    /// The axis permutation, view axis to parent axis.
    pub fn permutation(&self) -> &[Ix] {
        &self.perm
    }

    /// Give the parent back.
    pub fn into_inner(self) -> P {
        self.parent
    }

    /// Resize to the given per-axis specification, in the view's
    /// coordinates; see [`resize`](crate::resize()).
    pub fn resize<I>(&mut self, spec: I) -> Result<(), ShapeError>
    where
        P::Elem: Default,
        I: IntoResizeSpec,
    {
        crate::resize(self, spec)
    }

    /// Resize one of the view's axes; see
    /// [`resize_axis`](crate::resize_axis()).
    pub fn resize_axis<S>(&mut self, axis: Axis, spec: S) -> Result<(), ShapeError>
    where
        P::Elem: Default,
        S: Into<AxisSpec>,
    {
        crate::resize_axis(self, axis, spec)
    }

    /// Reserve buffer capacity; see [`reserve`](crate::reserve()).
    pub fn reserve(&mut self, min_capacity: usize) -> Result<(), ShapeError> {
        crate::reserve(self, min_capacity)
    }
}

impl<P> Resizable for Permuted<P>
where
    P: Resizable,
{
    type Elem = P::Elem;
    type Parent = P;

    fn parent(&self) -> ParentRef<'_, P::Elem, P> {
        ParentRef::Array(&self.parent)
    }

    fn parent_mut(&mut self) -> ParentMut<'_, P::Elem, P> {
        ParentMut::Array(&mut self.parent)
    }

    fn extent(&self) -> Extent {
        let parent = self.parent.extent();
        Extent::from(
            self.perm
                .iter()
                .map(|&ax| parent[ax])
                .collect::<Vec<Ix>>(),
        )
    }

    fn extent_of(&self, axis: Axis) -> Ix {
        self.parent.extent_of(Axis(self.perm[axis.index()]))
    }

    fn map_index(&self, index: &[Ix]) -> Extent {
        let mut mapped = vec![0; index.len()];
        for (i, &ax) in self.perm.iter().enumerate() {
            mapped[ax] = index[i];
        }
        Extent::from(mapped)
    }

    fn map_axis(&self, axis: Axis) -> Axis {
        Axis(self.perm[axis.index()])
    }
}

impl<P, const N: usize> Index<[Ix; N]> for Permuted<P>
where
    P: Resizable,
{
    type Output = P::Elem;

    fn index(&self, index: [Ix; N]) -> &P::Elem {
        self.get(&index).unwrap_or_else(|| {
            panic!("index {:?} out of bounds for extent {:?}", index, self.extent())
        })
    }
}

impl<P, const N: usize> IndexMut<[Ix; N]> for Permuted<P>
where
    P: Resizable,
{
    fn index_mut(&mut self, index: [Ix; N]) -> &mut P::Elem {
        let extent = self.extent();
        self.get_mut(&index)
            .unwrap_or_else(|| panic!("index {:?} out of bounds for extent {:?}", index, extent))
    }
}

impl<P> fmt::Debug for Permuted<P>
where
    P: Resizable + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Permuted")
            .field("perm", &self.perm)
            .field("parent", &self.parent)
            .finish()
    }
}
