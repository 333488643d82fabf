//! Per-axis resize specifications and their validation.

use std::ops::{Index, RangeFull};

use crate::axis::Axis;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::extent::{Extent, Ix};

/// How one axis changes under a resize.
///
/// A specification is either a plain new length, the full-range marker
/// that leaves the axis alone, or a selector that keeps a subsequence
/// of the existing slices along the axis and deletes the rest.
///
/// Most call sites build these through conversions: an integer becomes
/// [`Len`](AxisSpec::Len), `..` becomes [`Keep`](AxisSpec::Keep), and
/// index or boolean vectors become the selector variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxisSpec {
    /// Set the axis to this length, truncating slices at the end or
    /// exposing new slices with unspecified contents.
    Len(Ix),
    /// Leave the axis unchanged.
    Keep,
    /// Keep exactly the slices at these positions, in order. The
    /// positions must be strictly increasing and in bounds.
    Indices(Vec<Ix>),
    /// Keep the slices at the `true` positions. The mask length must
    /// equal the current length of the axis.
    Mask(Vec<bool>),
}

impl AxisSpec {
    /// Resolve the resulting axis length against the current one,
    /// validating the specification.
    pub fn resolve(&self, current: Ix) -> Result<Ix, ShapeError> {
        match self {
            AxisSpec::Len(n) => Ok(*n),
            AxisSpec::Keep => Ok(current),
            AxisSpec::Indices(ix) => {
                for w in ix.windows(2) {
                    if w[0] >= w[1] {
                        return Err(from_kind(ErrorKind::IncompatibleShape));
                    }
                }
                if let Some(&last) = ix.last() {
                    if last >= current {
                        return Err(from_kind(ErrorKind::OutOfBounds));
                    }
                }
                Ok(ix.len())
            }
            AxisSpec::Mask(mask) => {
                if mask.len() != current {
                    return Err(from_kind(ErrorKind::IncompatibleShape));
                }
                Ok(mask.iter().filter(|&&keep| keep).count())
            }
        }
    }

    /// The kept positions for the selector variants; `None` for plain
    /// length changes. Assumes the specification validated.
    pub(crate) fn selection(&self) -> Option<Vec<Ix>> {
        match self {
            AxisSpec::Len(_) | AxisSpec::Keep => None,
            AxisSpec::Indices(ix) => Some(ix.clone()),
            AxisSpec::Mask(mask) => Some(
                mask.iter()
                    .enumerate()
                    .filter_map(|(i, &keep)| keep.then_some(i))
                    .collect(),
            ),
        }
    }
}

impl From<Ix> for AxisSpec {
    fn from(n: Ix) -> AxisSpec {
        AxisSpec::Len(n)
    }
}

impl From<RangeFull> for AxisSpec {
    fn from(_: RangeFull) -> AxisSpec {
        AxisSpec::Keep
    }
}

impl From<Vec<Ix>> for AxisSpec {
    fn from(ix: Vec<Ix>) -> AxisSpec {
        AxisSpec::Indices(ix)
    }
}

impl From<&[Ix]> for AxisSpec {
    fn from(ix: &[Ix]) -> AxisSpec {
        AxisSpec::Indices(ix.to_vec())
    }
}

impl<const N: usize> From<[Ix; N]> for AxisSpec {
    fn from(ix: [Ix; N]) -> AxisSpec {
        AxisSpec::Indices(ix.to_vec())
    }
}

impl From<Vec<bool>> for AxisSpec {
    fn from(mask: Vec<bool>) -> AxisSpec {
        AxisSpec::Mask(mask)
    }
}

impl From<&[bool]> for AxisSpec {
    fn from(mask: &[bool]) -> AxisSpec {
        AxisSpec::Mask(mask.to_vec())
    }
}

impl<const N: usize> From<[bool; N]> for AxisSpec {
    fn from(mask: [bool; N]) -> AxisSpec {
        AxisSpec::Mask(mask.to_vec())
    }
}

/// A whole-array resize specification: one [`AxisSpec`] per axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizeSpec {
    specs: Vec<AxisSpec>,
}

impl ResizeSpec {
    /// Create from per-axis specifications.
    pub fn new(specs: Vec<AxisSpec>) -> ResizeSpec {
        ResizeSpec { specs }
    }

    /// A specification that changes `axis` and keeps all others.
    ///
    /// `axis` must be in bounds for `ndim`; callers check this first.
    pub(crate) fn single(ndim: usize, axis: Axis, spec: AxisSpec) -> ResizeSpec {
        debug_assert!(axis.index() < ndim);
        let mut specs = vec![AxisSpec::Keep; ndim];
        specs[axis.index()] = spec;
        ResizeSpec { specs }
    }

    /// Number of axes this specification addresses.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.specs.len()
    }

    /// Borrow the per-axis specifications.
    #[inline]
    pub fn specs(&self) -> &[AxisSpec] {
        &self.specs
    }

    /// Resolve the resulting extent against the current one.
    ///
    /// Validates everything the resize engine relies on: arity, each
    /// axis specification, and that the resulting element count does
    /// not overflow. No mutation happens before this succeeds.
    pub fn resolve(&self, current: &Extent) -> Result<Extent, ShapeError> {
        if self.specs.len() != current.ndim() {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        let mut lengths = Vec::with_capacity(self.specs.len());
        for (spec, &cur) in self.specs.iter().zip(current.slice()) {
            lengths.push(spec.resolve(cur)?);
        }
        let extent = Extent::from(lengths);
        extent
            .size_checked()
            .ok_or_else(|| from_kind(ErrorKind::Overflow))?;
        Ok(extent)
    }
}

impl Index<usize> for ResizeSpec {
    type Output = AxisSpec;
    #[inline]
    fn index(&self, index: usize) -> &AxisSpec {
        &self.specs[index]
    }
}

/// Argument conversion into a [`ResizeSpec`].
///
/// Implemented for tuples of per-axis specifications (up to six axes),
/// plain extents (every axis resized to the given length), vectors of
/// [`AxisSpec`] and `ResizeSpec` itself, so that call sites can write
/// the request directly:
///
/// ```
/// use rdarray::SimpleArray;
///
/// let mut a = SimpleArray::from_elem((2, 3), 0_i32);
/// a.resize((4, ..)).unwrap();
/// assert_eq!(a.shape(), &[4, 3]);
/// ```
pub trait IntoResizeSpec {
    fn into_resize_spec(self) -> ResizeSpec;
}

impl IntoResizeSpec for ResizeSpec {
    #[inline]
    fn into_resize_spec(self) -> ResizeSpec {
        self
    }
}

impl IntoResizeSpec for Vec<AxisSpec> {
    fn into_resize_spec(self) -> ResizeSpec {
        ResizeSpec::new(self)
    }
}

impl IntoResizeSpec for Extent {
    fn into_resize_spec(self) -> ResizeSpec {
        ResizeSpec::new(self.slice().iter().map(|&n| AxisSpec::Len(n)).collect())
    }
}

impl IntoResizeSpec for &Extent {
    fn into_resize_spec(self) -> ResizeSpec {
        ResizeSpec::new(self.slice().iter().map(|&n| AxisSpec::Len(n)).collect())
    }
}

impl IntoResizeSpec for Ix {
    fn into_resize_spec(self) -> ResizeSpec {
        ResizeSpec::new(vec![AxisSpec::Len(self)])
    }
}

macro_rules! tuple_into_resize_spec {
    ($($name:ident)*) => {
        impl<$($name),*> IntoResizeSpec for ($($name,)*)
        where
            $($name: Into<AxisSpec>,)*
        {
            #[allow(non_snake_case)]
            fn into_resize_spec(self) -> ResizeSpec {
                let ($($name,)*) = self;
                ResizeSpec::new(vec![$($name.into()),*])
            }
        }
    };
}

tuple_into_resize_spec! { A0 }
tuple_into_resize_spec! { A0 A1 }
tuple_into_resize_spec! { A0 A1 A2 }
tuple_into_resize_spec! { A0 A1 A2 A3 }
tuple_into_resize_spec! { A0 A1 A2 A3 A4 }
tuple_into_resize_spec! { A0 A1 A2 A3 A4 A5 }
