// Copyright 2021 bluss and rdarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::axis::Axis;
use crate::extent::{Extent, Ix};

/// A mutable handle on an array's extent.
///
/// An array type that opts into observable size mutation embeds a
/// `Size` and writes every extent change through it, so that the
/// stored extent and the storage layout can never disagree between
/// two reads. Types whose extent is derived (for example views that
/// compute it from their parent) do not need one.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Size {
    dims: Extent,
}

impl Size {
    /// Create a handle holding `extent`.
    pub fn new(extent: Extent) -> Size {
        Size { dims: extent }
    }

    /// Read the whole extent.
    #[inline]
    pub fn get(&self) -> &Extent {
        &self.dims
    }

    /// Read the length of one axis.
    ///
    /// **Panics** if `axis` is out of bounds.
    #[inline]
    pub fn get_of(&self, axis: Axis) -> Ix {
        self.dims[axis.index()]
    }

    /// Write the length of one axis in place.
    ///
    /// **Panics** if `axis` is out of bounds.
    #[inline]
    pub fn set_of(&mut self, axis: Axis, n: Ix) {
        self.dims[axis.index()] = n;
    }

    /// Replace the whole extent, returning the previous one.
    ///
    /// The new extent may have a different number of axes; keeping the
    /// dimensionality consistent with the array's storage is the
    /// owner's responsibility.
    pub fn replace(&mut self, new: Extent) -> Extent {
        std::mem::replace(&mut self.dims, new)
    }

    /// Number of axes of the stored extent.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dims.ndim()
    }
}

impl From<Extent> for Size {
    fn from(extent: Extent) -> Size {
        Size::new(extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_replace() {
        let mut size = Size::new(Extent::from([2, 3]));
        assert_eq!(size.get_of(Axis(1)), 3);
        size.set_of(Axis(0), 5);
        assert_eq!(size.get().slice(), &[5, 3]);
        let old = size.replace(Extent::from([1, 1, 1]));
        assert_eq!(old.slice(), &[5, 3]);
        assert_eq!(size.ndim(), 3);
    }
}
