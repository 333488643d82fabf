use rdarray::prelude::*;
use rdarray::{NoParent, ParentMut, ParentRef};

#[test]
fn permuted_reads_match_parent() {
    let mut a = SimpleArray::from_shape_fn((2, 3), |ix| 10 * ix[0] + ix[1]);
    let t = Permuted::reversed(&mut a);
    assert_eq!(t.extent().slice(), &[3, 2]);
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(t[[j, i]], 10 * i + j);
        }
    }
}

#[test]
fn permuted_validates_permutation() {
    let mut a = SimpleArray::from_elem((2, 3), 0);
    assert!(Permuted::new(&mut a, &[1, 0]).is_ok());
    assert!(Permuted::new(&mut a, &[0, 0]).is_err());
    assert!(Permuted::new(&mut a, &[0]).is_err());
    assert!(Permuted::new(&mut a, &[0, 2]).is_err());
}

#[test]
fn resize_through_view_updates_parent() {
    let mut a = SimpleArray::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    {
        let mut t = Permuted::reversed(&mut a);
        // view axis 1 is parent axis 0: drop parent row 0
        t.resize_axis(Axis(1), [false, true]).unwrap();
        assert_eq!(t.extent().slice(), &[3, 1]);
        assert_eq!(t[[0, 0]], 4);
        assert_eq!(t[[2, 0]], 6);
    }
    assert_eq!(a.shape(), &[1, 3]);
    assert_eq!(a.as_slice(), &[4, 5, 6]);
}

#[test]
fn writes_through_view_alias_parent() {
    let mut a = SimpleArray::from_elem((2, 2), 0);
    {
        let mut t = Permuted::reversed(&mut a);
        t[[0, 1]] = 5;
    }
    assert_eq!(a[[1, 0]], 5);
}

#[test]
fn reserve_through_view_reaches_root_buffer() {
    let mut a = SimpleArray::from_elem((2, 2), 0_u8);
    {
        let mut t = Permuted::reversed(&mut a);
        t.reserve(50).unwrap();
        assert_eq!(t.extent().slice(), &[2, 2]);
    }
    assert!(a.capacity() >= 50);
    assert_eq!(a.shape(), &[2, 2]);
}

#[test]
fn resize_through_mutable_borrow() {
    let mut a = SimpleArray::from(vec![1, 2, 3]);
    let mut r = &mut a;
    resize_axis(&mut r, Axis(0), 2).unwrap();
    assert_eq!(a.as_slice(), &[1, 2]);
}

/// An instrumentation wrapper: an identity view that counts the resize
/// hooks it observes.
struct Counted<P> {
    inner: P,
    before: usize,
    after: usize,
}

impl<P> Counted<P> {
    fn new(inner: P) -> Self {
        Counted {
            inner,
            before: 0,
            after: 0,
        }
    }
}

impl<P> Resizable for Counted<P>
where
    P: Resizable,
{
    type Elem = P::Elem;
    type Parent = P;

    fn parent(&self) -> ParentRef<'_, P::Elem, P> {
        ParentRef::Array(&self.inner)
    }

    fn parent_mut(&mut self) -> ParentMut<'_, P::Elem, P> {
        ParentMut::Array(&mut self.inner)
    }

    fn extent(&self) -> Extent {
        self.inner.extent()
    }

    fn before_resize(&mut self, _spec: &ResizeSpec) {
        self.before += 1;
    }

    fn after_resize(&mut self, _spec: &ResizeSpec) {
        self.after += 1;
    }
}

#[test]
fn hooks_run_once_per_resize() {
    let mut c = Counted::new(SimpleArray::from(vec![1, 2, 3]));
    resize(&mut c, 5).unwrap();
    assert_eq!((c.before, c.after), (1, 1));
    assert_eq!(c.inner.shape(), &[5]);

    resize_axis(&mut c, Axis(0), 2).unwrap();
    assert_eq!((c.before, c.after), (2, 2));
}

#[test]
fn hooks_do_not_run_on_rejected_specs() {
    let mut c = Counted::new(SimpleArray::from(vec![1, 2, 3]));
    assert_eq!(
        resize(&mut c, (2, 2)),
        Err(ShapeError::from_kind(ErrorKind::IncompatibleShape))
    );
    assert_eq!((c.before, c.after), (0, 0));
}

#[test]
fn reserve_skips_hooks() {
    let mut c = Counted::new(SimpleArray::from(vec![1, 2, 3]));
    reserve(&mut c, 10).unwrap();
    assert_eq!((c.before, c.after), (0, 0));
    assert_eq!(c.extent().slice(), &[3]);
}

/// A type with storage that cannot grow: the parent chain ends in
/// nothing.
struct Pinned(Vec<f64>);

impl Resizable for Pinned {
    type Elem = f64;
    type Parent = NoParent<f64>;

    fn parent(&self) -> ParentRef<'_, f64, NoParent<f64>> {
        ParentRef::None
    }

    fn parent_mut(&mut self) -> ParentMut<'_, f64, NoParent<f64>> {
        ParentMut::None
    }

    fn extent(&self) -> Extent {
        Extent::from(vec![self.0.len()])
    }
}

#[test]
fn not_resizable_is_rejected_before_any_state_change() {
    let mut p = Pinned(vec![1.0, 2.0]);
    assert_eq!(
        resize(&mut p, 5),
        Err(ShapeError::from_kind(ErrorKind::NotResizable))
    );
    assert_eq!(
        resize_axis(&mut p, Axis(0), 5),
        Err(ShapeError::from_kind(ErrorKind::NotResizable))
    );
    assert_eq!(
        reserve(&mut p, 100),
        Err(ShapeError::from_kind(ErrorKind::NotResizable))
    );
    assert_eq!(p.0, vec![1.0, 2.0]);
}

#[test]
fn capability_gates_whole_parent_chains() {
    // a view over a non-resizable parent is itself not resizable
    let mut c = Counted::new(Pinned(vec![1.0, 2.0]));
    assert_eq!(
        resize(&mut c, 5),
        Err(ShapeError::from_kind(ErrorKind::NotResizable))
    );
    // rejected during validation: the hooks never ran
    assert_eq!((c.before, c.after), (0, 0));
}

#[test]
fn set_extent_is_a_silent_noop_without_observable_size() {
    let mut p = Pinned(vec![1.0, 2.0]);
    p.set_extent(&Extent::from(vec![9]));
    assert_eq!(p.extent().slice(), &[2]);
    assert!(!Pinned::HAS_OBSERVABLE_SIZE);
    assert!(SimpleArray::<f64>::HAS_OBSERVABLE_SIZE);
}
