use defmac::defmac;
use itertools::Itertools;
use quickcheck::quickcheck;

use rdarray::prelude::*;
use rdarray::indices;

defmac!(seq33 => SimpleArray::from_shape_vec((3, 3), (1..=9).collect_vec()).unwrap());

#[test]
fn grow_both_axes() {
    let mut a = seq33!();
    a.resize((4, 4)).unwrap();
    assert_eq!(a.shape(), &[4, 4]);
    assert_eq!(a.len(), 16);

    // the old 3x3 block is preserved in place
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(a[[i, j]], (i * 3 + j + 1) as i32, "at [{}, {}]", i, j);
        }
    }
    // the new row and column are addressable
    let _ = a[[3, 3]];
}

#[test]
fn grow_then_shrink_one_axis() {
    let mut a = seq33!();
    a.resize((4, 4)).unwrap();
    a.resize_axis(Axis(1), 3).unwrap();
    assert_eq!(a.shape(), &[4, 3]);
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(a[[i, j]], (i * 3 + j + 1) as i32);
        }
    }
}

#[test]
fn mask_deletes_and_keeps_order() {
    let mut a = SimpleArray::from(vec![10, 20, 30, 40]);
    a.resize_axis(Axis(0), [true, true, false, true]).unwrap();
    assert_eq!(a.shape(), &[3]);
    assert_eq!(a.as_slice(), &[10, 20, 40]);
}

#[test]
fn index_selector_keeps_subsequence() {
    let mut a = seq33!();
    a.resize_axis(Axis(1), vec![0, 2]).unwrap();
    assert_eq!(a.shape(), &[3, 2]);
    assert_eq!(a.as_slice(), &[1, 3, 4, 6, 7, 9]);
}

#[test]
fn selector_through_full_resize() {
    let mut a = seq33!();
    a.resize((vec![true, false, true], 2)).unwrap();
    assert_eq!(a.shape(), &[2, 2]);
    assert_eq!(a.as_slice(), &[1, 2, 7, 8]);
}

#[test]
fn middle_axis_of_three() {
    let mut a = SimpleArray::from_shape_vec((2, 2, 2), (0..8).collect_vec()).unwrap();
    a.resize_axis(Axis(1), 3).unwrap();
    assert_eq!(a.shape(), &[2, 3, 2]);
    assert_eq!(a[[0, 0, 0]], 0);
    assert_eq!(a[[0, 1, 1]], 3);
    assert_eq!(a[[1, 0, 0]], 4);
    assert_eq!(a[[1, 1, 0]], 6);
}

#[test]
fn reserve_makes_growth_allocation_free() {
    let mut a = seq33!();
    a.reserve(100).unwrap();
    let cap = a.capacity();
    assert!(cap >= 100);
    // capacity only: the extent did not move
    assert_eq!(a.shape(), &[3, 3]);
    assert_eq!(a.len(), 9);

    a.resize((10, 10)).unwrap();
    assert_eq!(a.capacity(), cap);
    assert_eq!(a.shape(), &[10, 10]);
}

#[test]
fn shrink_retains_capacity() {
    let mut a = seq33!();
    let cap = a.capacity();
    a.resize((1, 1)).unwrap();
    assert_eq!(a.shape(), &[1, 1]);
    assert_eq!(a.as_slice(), &[1]);
    assert_eq!(a.capacity(), cap);
}

#[test]
fn resize_to_zero_and_back() {
    let mut a = SimpleArray::from_elem((2, 2), 7_u8);
    a.resize_axis(Axis(0), 0).unwrap();
    assert_eq!(a.shape(), &[0, 2]);
    assert_eq!(a.len(), 0);

    a.resize((2, 2)).unwrap();
    assert_eq!(a.shape(), &[2, 2]);
    let _ = a[[1, 1]];
}

#[test]
fn resize_to_own_extent_is_identity() {
    let mut a = seq33!();
    let before = a.clone();
    let extent = a.extent();
    a.resize(extent).unwrap();
    assert_eq!(a, before);
}

#[test]
fn invalid_specs_leave_array_unchanged() {
    let mut a = seq33!();
    let cap = a.capacity();
    let before = a.clone();

    // mask arity
    assert_eq!(
        a.resize_axis(Axis(0), vec![true, false]),
        Err(ShapeError::from_kind(ErrorKind::IncompatibleShape))
    );
    // selector must be strictly increasing
    assert_eq!(
        a.resize_axis(Axis(0), vec![2, 1]),
        Err(ShapeError::from_kind(ErrorKind::IncompatibleShape))
    );
    // selector out of range
    assert_eq!(
        a.resize_axis(Axis(0), vec![0, 5]),
        Err(ShapeError::from_kind(ErrorKind::OutOfBounds))
    );
    // wrong arity of the whole specification
    assert_eq!(
        a.resize((2, 2, 2)),
        Err(ShapeError::from_kind(ErrorKind::IncompatibleShape))
    );
    // axis out of bounds
    assert_eq!(
        a.resize_axis(Axis(5), 3),
        Err(ShapeError::from_kind(ErrorKind::IncompatibleShape))
    );
    // overflowing element count
    assert_eq!(
        a.resize((usize::MAX, usize::MAX)),
        Err(ShapeError::from_kind(ErrorKind::Overflow))
    );

    assert_eq!(a, before);
    assert_eq!(a.capacity(), cap);
}

#[test]
fn full_range_marker_keeps_axis() {
    let mut a = seq33!();
    a.resize((4, ..)).unwrap();
    assert_eq!(a.shape(), &[4, 3]);
    assert_eq!(&a.as_slice()[..9], &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn grow_from_empty() {
    let mut a = SimpleArray::<u32>::zeros((0, 3));
    a.resize_axis(Axis(0), 2).unwrap();
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a.len(), 6);
}

#[test]
fn one_dimensional_plain_length() {
    let mut a = SimpleArray::from(vec![1, 2, 3]);
    a.resize(5).unwrap();
    assert_eq!(a.shape(), &[5]);
    assert_eq!(&a.as_slice()[..3], &[1, 2, 3]);
}

quickcheck! {
    fn qc_resize_to_own_extent_is_identity(dims: Vec<u8>) -> bool {
        let extent = dims.iter().take(3).map(|&d| (d % 4) as usize).collect_vec();
        let mut a = SimpleArray::from_shape_fn(extent, |ix| ix.to_vec());
        let before = a.clone();
        let extent = a.extent();
        a.resize(extent).unwrap();
        a == before
    }

    fn qc_integer_resize_sets_shape_and_preserves_overlap(old: Vec<u8>, new: Vec<u8>) -> bool {
        let n = old.len().min(new.len()).min(3);
        let old = old[..n].iter().map(|&d| (d % 4) as usize).collect_vec();
        let new = new[..n].iter().map(|&d| (d % 4) as usize).collect_vec();

        let before = SimpleArray::from_shape_fn(old.clone(), |ix| ix.to_vec());
        let mut a = before.clone();
        a.resize(Extent::from(new.clone())).unwrap();

        if a.shape() != &new[..] {
            return false;
        }
        let common = old
            .iter()
            .zip(&new)
            .map(|(&o, &n)| o.min(n))
            .collect_vec();
        indices(common).all(|ix| a.get(ix.slice()) == before.get(ix.slice()))
    }

    fn qc_mask_keeps_survivors_in_order(values: Vec<u16>, mask: Vec<bool>) -> bool {
        let n = values.len().min(mask.len());
        let values = values[..n].to_vec();
        let mask = mask[..n].to_vec();

        let mut a = SimpleArray::from(values.clone());
        a.resize_axis(Axis(0), mask.clone()).unwrap();

        let expected = values
            .iter()
            .zip(&mask)
            .filter(|&(_, &keep)| keep)
            .map(|(&v, _)| v)
            .collect_vec();
        a.shape() == &[expected.len()][..] && a.as_slice() == expected
    }
}
