//! Buffer growth passes: the storage side of a resize.
//!
//! Everything here operates on a row-major [`Buffer`] and an extent
//! describing how its slots are currently blocked. The resize engine
//! validates requests before calling in; these passes assume resolved,
//! in-bounds arguments.

use crate::buffer::Buffer;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::extent::{Extent, Ix};
use crate::resize_spec::{AxisSpec, ResizeSpec};

/// Apply a validated resize to the buffer backing an array of extent
/// `old`, producing the layout for `new`.
///
/// Capacity for the whole operation (including intermediate states) is
/// reserved once up front, so at most one reallocation happens and an
/// allocation failure leaves length and contents untouched. The axis
/// passes then run in a fixed order, outermost first, which makes
/// multi-axis selection deterministic.
pub(crate) fn resize_buffer<A>(
    buf: &mut Buffer<A>,
    old: &Extent,
    spec: &ResizeSpec,
    new: &Extent,
) -> Result<(), ShapeError>
where
    A: Default,
{
    debug_assert_eq!(old.ndim(), new.ndim());
    debug_assert_eq!(spec.ndim(), old.ndim());

    // peak logical length over the sequence of axis passes
    let mut peak = buf.len();
    let mut sim = old.clone();
    for ax in 0..sim.ndim() {
        sim[ax] = new[ax];
        peak = peak.max(
            sim.size_checked()
                .ok_or_else(|| from_kind(ErrorKind::Overflow))?,
        );
    }
    buf.reserve_total(peak)?;

    let mut cur = old.clone();
    for ax in 0..cur.ndim() {
        match &spec[ax] {
            AxisSpec::Keep => {}
            AxisSpec::Len(m) => set_axis_len(buf, &mut cur, ax, *m)?,
            selector => {
                if let Some(kept) = selector.selection() {
                    select_axis(buf, &mut cur, ax, &kept);
                }
            }
        }
    }
    debug_assert_eq!(cur.slice(), new.slice());
    Ok(())
}

/// Change the length of one axis, preserving the leading slices.
///
/// Growth relocates the old blocks towards the back and leaves the
/// freed and freshly appended slots with unspecified (but initialized)
/// values; shrinking compacts towards the front and truncates.
fn set_axis_len<A>(
    buf: &mut Buffer<A>,
    cur: &mut Extent,
    ax: usize,
    m: Ix,
) -> Result<(), ShapeError>
where
    A: Default,
{
    debug_assert_eq!(buf.len(), cur.size());
    let n = cur[ax];
    if m == n {
        return Ok(());
    }
    let inner: usize = cur.slice()[ax + 1..].iter().product();
    let outer: usize = cur.slice()[..ax].iter().product();
    let old_block = n * inner;
    let new_block = m * inner;

    if m > n {
        buf.grow_with(outer * new_block)?;
        let slots = buf.as_mut_slice();
        // back to front so no source is overwritten before it moves
        for o in (0..outer).rev() {
            for i in (0..old_block).rev() {
                slots.swap(o * old_block + i, o * new_block + i);
            }
        }
    } else {
        let slots = buf.as_mut_slice();
        for o in 1..outer {
            for i in 0..new_block {
                slots.swap(o * new_block + i, o * old_block + i);
            }
        }
        buf.truncate(outer * new_block);
    }
    cur[ax] = m;
    Ok(())
}

/// Keep only the slices of `ax` listed in `kept` (strictly increasing),
/// compacting the survivors towards the front in their original order.
fn select_axis<A>(buf: &mut Buffer<A>, cur: &mut Extent, ax: usize, kept: &[Ix]) {
    debug_assert_eq!(buf.len(), cur.size());
    let n = cur[ax];
    let m = kept.len();
    let inner: usize = cur.slice()[ax + 1..].iter().product();
    let outer: usize = cur.slice()[..ax].iter().product();

    let slots = buf.as_mut_slice();
    for o in 0..outer {
        for (jnew, &jold) in kept.iter().enumerate() {
            debug_assert!(jold < n);
            for t in 0..inner {
                slots.swap(
                    o * m * inner + jnew * inner + t,
                    o * n * inner + jold * inner + t,
                );
            }
        }
    }
    buf.truncate(outer * m * inner);
    cur[ax] = m;
}
