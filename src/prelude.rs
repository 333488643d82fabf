// Copyright 2021 bluss and rdarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! rdarray prelude.
//!
//! This module contains the most used types, traits and functions that
//! you can import easily as a group.
//!
//! ```
//! use rdarray::prelude::*;
//! ```

#[doc(no_inline)]
pub use crate::{Axis, Extent, Permuted, SimpleArray};

#[doc(no_inline)]
pub use crate::{AxisSpec, IntoExtent, IntoResizeSpec, ResizeSpec};

#[doc(no_inline)]
pub use crate::{reserve, resize, resize_axis, Resizable};

#[doc(no_inline)]
pub use crate::{ErrorKind, ShapeError};
