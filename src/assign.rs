//! Assignment to arrays, spelled the same way as assignment to anything else.
//!
//! [`assign()`] takes a mutable reference to any type that implements
//! [`Assign`]. For a type that is not an array it returns the reference
//! unchanged, so `*assign(&mut x) = v` is just `x = v`. For an array it
//! returns an [`AssignTo`], which offers the assignments that `=` lacks:
//! from `{}` (the default value of each element), from an array of a
//! different element type, from a borrowed array, and from a list of
//! values. Every form returns the original mutable reference, so that
//! assignments compose as they would with `=`.
//!
//! ```
//! use array_support::{assign};
//!
//! let mut grid = [[0u64; 3]; 2];
//! let ones = [[1u8; 3]; 2];
//! assign(&mut grid).set_from(ones);
//! assert_eq!(grid, [[1; 3]; 2]);
//!
//! let mut x = 5i32;
//! *assign(&mut x) = 6;
//! assert_eq!(x, 6);
//! ```
//!
//! Elements are always assigned in ascending order of flat index.

use super::{
    COPYABLE_ARRAY, NonArray, Extents, ShapeError,
    AssignFrom, AssignableFrom, CopyAssignableFrom, MoveAssignable,
    EmptyListAssignable,
};

/// Implemented by types that [`assign()`] can assign to.
///
/// You shouldn't need to implement this. It is implemented for every
/// [`NonArray`] type and for arrays of any rank.
pub trait Assign {
    /// `&'a mut Self` for a `NonArray` type, or [`AssignTo<'a, Self>`] for an
    /// array.
    type Target<'a> where Self: 'a;

    fn assign_target(&mut self) -> Self::Target<'_>;
}

impl<T: NonArray> Assign for T {
    type Target<'a> = &'a mut T where Self: 'a;

    #[inline(always)]
    fn assign_target(&mut self) -> &mut T { self }
}

impl<T: Extents, const N: usize> Assign for [T; N] {
    type Target<'a> = AssignTo<'a, [T; N]> where Self: 'a;

    #[inline(always)]
    fn assign_target(&mut self) -> AssignTo<'_, [T; N]> { AssignTo(self) }
}

/// Prepare to assign to `l`.
///
/// The result must be used. For a [`NonArray`] type, assign to it with `=`.
/// For an array, call one of the methods of [`AssignTo`].
#[inline(always)]
pub fn assign<L: Assign>(l: &mut L) -> L::Target<'_> { l.assign_target() }

// ----------------------------------------------------------------------------

/// Borrows an array for the duration of one assignment.
///
/// Obtained from [`assign()`]. Each method consumes the `AssignTo` and
/// returns the array it borrowed.
#[must_use]
#[derive(Debug)]
pub struct AssignTo<'a, L>(&'a mut L);

impl<'a, L: Extents> AssignTo<'a, L> {
    /// Assign the [`Default`] value to every element. This is the equivalent
    /// of `= {}`.
    ///
    /// ```
    /// use array_support::{assign};
    /// let mut a = [[7u8; 2]; 2];
    /// assign(&mut a).set_default();
    /// assert_eq!(a, [[0; 2]; 2]);
    /// ```
    pub fn set_default(self) -> &'a mut L where L: EmptyListAssignable {
        self.0.assign_default();
        self.0
    }

    /// Assign a copy of each element of `r` to the corresponding element of
    /// the array, using [`Clone::clone_from()`] or another [`AssignFrom`]
    /// implementation. `r` must have the same shape.
    ///
    /// ```
    /// use array_support::{assign};
    /// let src = [["a".to_string(), "b".to_string()]];
    /// let mut dst = [[String::new(), String::new()]];
    /// assign(&mut dst).copy_from(&src);
    /// assert_eq!(dst, src);
    /// ```
    pub fn copy_from<R: Extents>(self, r: &R) -> &'a mut L where L: CopyAssignableFrom<R> {
        self.0.assign_flat_ref(r);
        self.0
    }

    /// Move each element of `r` into the corresponding element of the array,
    /// converting it with [`AssignFrom`]. `r` must have the same shape.
    pub fn set_from<R: Extents>(self, r: R) -> &'a mut L where L: AssignableFrom<R> {
        self.0.assign_flat(r);
        self.0
    }

    /// Assign `value`, which is an array of exactly the same type.
    ///
    /// When [`COPYABLE_ARRAY`] is `true` this is a native assignment of the
    /// whole array. Otherwise it moves each element separately.
    pub fn set(self, value: L) -> &'a mut L where L: MoveAssignable {
        if COPYABLE_ARRAY {
            *self.0 = value;
        } else {
            self.0.assign_flat(value);
        }
        self.0
    }

    /// Assign to each element of the outermost dimension the corresponding
    /// member of the tuple `e`. See [`assign_elements()`].
    pub fn elements<E: Elements<L>>(self, e: E) -> &'a mut L {
        e.assign_to(&mut *self.0);
        self.0
    }

    /// Assign a copy of each element of `r` to the corresponding flat element
    /// of the array.
    ///
    /// Fails, leaving the array unmodified, unless `r` has exactly
    /// `FLAT_SIZE` elements.
    ///
    /// ```
    /// use array_support::{assign, ShapeError};
    /// let data = vec![1i16, 2, 3, 4, 5, 6];
    /// let mut a = [[0i16; 3]; 2];
    /// assert!(assign(&mut a).try_copy_from_slice(&data).is_ok());
    /// assert_eq!(a, [[1, 2, 3], [4, 5, 6]]);
    /// let e = assign(&mut a).try_copy_from_slice(&data[1..]).unwrap_err();
    /// assert_eq!(e, ShapeError::TooFew {expected: 6, found: 5});
    /// ```
    pub fn try_copy_from_slice(self, r: &[L::Element]) -> Result<&'a mut L, ShapeError> where
        L::Element: Clone,
    {
        if let Err(e) = ShapeError::check(L::FLAT_SIZE, r.len()) {
            log::debug!("try_copy_from_slice: {}", e);
            return Err(e);
        }
        for (i, e) in r.iter().enumerate() {
            self.0.flat_index_mut(i).assign_from(e);
        }
        Ok(self.0)
    }

    /// Give up, and return the array unmodified.
    pub fn into_inner(self) -> &'a mut L { self.0 }
}

// ----------------------------------------------------------------------------

/// Implemented by a tuple of `N` values that can be assigned to the `N`
/// elements of the outermost dimension of `L`, i.e. `L` is `[T; N]` and each
/// member is [`AssignableFrom`] by `T`.
///
/// Tuples of up to 12 members are supported.
pub trait Elements<L> {
    /// Assign each member of `self` in turn, starting with the first.
    fn assign_to(self, dst: &mut L);
}

macro_rules! impl_elements {
    ($n:literal; $($idx:tt: $ty:ident $var:ident),+) => {
        impl<T: Extents, $($ty),+> Elements<[T; $n]> for ($($ty,)+) where
            $($ty: Extents, T: AssignableFrom<$ty>,)+
        {
            fn assign_to(self, dst: &mut [T; $n]) {
                let ($($var,)+) = self;
                $( <T as AssignableFrom<$ty>>::assign_flat(&mut dst[$idx], $var); )+
            }
        }
    };
}

impl_elements!(1; 0: A a);
impl_elements!(2; 0: A a, 1: B b);
impl_elements!(3; 0: A a, 1: B b, 2: C c);
impl_elements!(4; 0: A a, 1: B b, 2: C c, 3: D d);
impl_elements!(5; 0: A a, 1: B b, 2: C c, 3: D d, 4: E e);
impl_elements!(6; 0: A a, 1: B b, 2: C c, 3: D d, 4: E e, 5: F f);
impl_elements!(7; 0: A a, 1: B b, 2: C c, 3: D d, 4: E e, 5: F f, 6: G g);
impl_elements!(8; 0: A a, 1: B b, 2: C c, 3: D d, 4: E e, 5: F f, 6: G g, 7: H h);
impl_elements!(9; 0: A a, 1: B b, 2: C c, 3: D d, 4: E e, 5: F f, 6: G g, 7: H h, 8: I i);
impl_elements!(10; 0: A a, 1: B b, 2: C c, 3: D d, 4: E e, 5: F f, 6: G g, 7: H h, 8: I i, 9: J j);
impl_elements!(11; 0: A a, 1: B b, 2: C c, 3: D d, 4: E e, 5: F f, 6: G g, 7: H h, 8: I i, 9: J j, 10: K k);
impl_elements!(12; 0: A a, 1: B b, 2: C c, 3: D d, 4: E e, 5: F f, 6: G g, 7: H h, 8: I i, 9: J j, 10: K k, 11: L l);

/// Assign each member of the tuple `e` to the corresponding element of the
/// outermost dimension of `l`, in order, and return `l`.
///
/// The members can be of different types, and can themselves be arrays. This
/// avoids building a temporary array, which might be expensive or impossible.
/// The number of members must equal the outermost extent of `l`.
///
/// ```
/// use array_support::{assign_elements};
/// let mut rows: [[String; 2]; 3] = Default::default();
/// let middle = ["b".to_string(), "c".to_string()];
/// assign_elements(&mut rows, (["a".to_string(), "a".into()], middle, [String::new(), "d".into()]));
/// assert_eq!(rows, [["a", "a"], ["b", "c"], ["", "d"]]);
/// ```
pub fn assign_elements<L, E: Elements<L>>(l: &mut L, e: E) -> &mut L {
    e.assign_to(&mut *l);
    l
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::cell::{RefCell};

    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    use super::*;

    assert_type_eq_all!(<i32 as Assign>::Target<'static>, &'static mut i32);
    assert_type_eq_all!(<[[i32; 2]; 3] as Assign>::Target<'static>, AssignTo<'static, [[i32; 2]; 3]>);

    assert_impl_all!((i32, i32, i32): Elements<[i32; 3]>);
    assert_impl_all!(([String; 2], [String; 2]): Elements<[[String; 2]; 2]>);
    // Wrong number of members.
    assert_not_impl_any!((i32, i32): Elements<[i32; 3]>);
    assert_not_impl_any!((i32, i32, i32, i32): Elements<[i32; 3]>);
    // Members of the wrong shape.
    assert_not_impl_any!(([u8; 3], [u8; 3]): Elements<[[u8; 2]; 2]>);
    assert_not_impl_any!((u8, u8): Elements<[[u8; 2]; 2]>);

    /// Records the order in which elements are assigned.
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Logged(i32);
    impl NonArray for Logged {}

    thread_local! {
        static LOG: RefCell<Vec<i32>> = RefCell::new(Vec::new());
    }

    impl AssignFrom<i32> for Logged {
        fn assign_from(&mut self, r: i32) {
            LOG.with(|log| log.borrow_mut().push(r));
            self.0 = r;
        }
    }

    impl<'r> AssignFrom<&'r i32> for Logged {
        fn assign_from(&mut self, r: &'r i32) { self.assign_from(*r); }
    }

    fn take_log() -> Vec<i32> { LOG.with(|log| log.take()) }

    #[test]
    fn scalar() {
        let mut x = 5i32;
        *assign(&mut x) = 7;
        assert_eq!(x, 7);
        let mut s = String::from("a");
        assign(&mut s).push('b');
        assert_eq!(s, "ab");
    }

    #[test]
    fn std_types_pass_through() {
        let mut r: Result<u8, String> = Ok(1);
        *assign(&mut r) = Err("no".into());
        assert_eq!(r, Err(String::from("no")));
        let (x, y) = (1i32, 2i32);
        let mut refs = [&x, &x];
        assign(&mut refs).set_from([&y, &x]);
        assert_eq!(refs, [&2, &1]);
        let mut t = (1u8, 2u8, 3u8, 4u8);
        *assign(&mut t) = (5, 6, 7, 8);
        assert_eq!(t, (5, 6, 7, 8));
    }

    #[test]
    fn copy_from() {
        let b = [[1i32, 2, 3], [4, 5, 6]];
        let mut a = [[0i32; 3]; 2];
        let r = assign(&mut a).copy_from(&b);
        r[0][0] = 10;
        assert_eq!(a, [[10, 2, 3], [4, 5, 6]]);
        assert_eq!(b, [[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn returns_destination() {
        let mut a = [0u8; 4];
        let p: *const [u8; 4] = &a;
        let r = assign(&mut a).set([1u8, 2, 3, 4]);
        assert!(std::ptr::eq(r, p));
    }

    #[test]
    fn chaining() {
        let mut a = [0u8; 2];
        let mut b = [0u8; 2];
        assign(&mut a).copy_from(assign(&mut b).set([3u8, 4]));
        assert_eq!(a, [3, 4]);
        assert_eq!(b, [3, 4]);
    }

    #[test]
    fn set_default() {
        let mut a = [[String::from("x"), String::from("y")], [String::from("z"), String::new()]];
        assign(&mut a).set_default();
        assert!(a.iter().flatten().all(String::is_empty));
    }

    #[test]
    fn set_from_converts() {
        let mut a = [[Logged(0), Logged(0)], [Logged(0), Logged(0)]];
        take_log();
        assign(&mut a).set_from([[1i32, 2], [3, 4]]);
        assert_eq!(a, [[Logged(1), Logged(2)], [Logged(3), Logged(4)]]);
        assert_eq!(take_log(), [1, 2, 3, 4]);
    }

    #[test]
    fn copy_from_order() {
        let mut a: [[[Logged; 2]; 2]; 2] = Default::default();
        let b = [[[8i32, 7], [6, 5]], [[4, 3], [2, 1]]];
        take_log();
        assign(&mut a).copy_from(&b);
        assert_eq!(take_log(), [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn set_move_only() {
        let mut a: [[Vec<u8>; 2]; 2] = Default::default();
        assign(&mut a).set([[vec![1], vec![2]], [vec![3], vec![4, 4]]]);
        assert_eq!(a[1][1], vec![4u8, 4]);
    }

    #[test]
    fn empty_array() {
        let mut a: [[String; 0]; 3] = Default::default();
        assign(&mut a).set_default();
        let b: [[String; 0]; 3] = Default::default();
        assign(&mut a).copy_from(&b);
        assert!(assign(&mut a).try_copy_from_slice(&[]).is_ok());
    }

    #[test]
    fn try_copy_from_slice() {
        let mut a = [[0u8; 2]; 2];
        assert_eq!(
            assign(&mut a).try_copy_from_slice(&[1, 2, 3, 4, 5]).unwrap_err(),
            ShapeError::TooMany {expected: 4, found: 5},
        );
        assert_eq!(a, [[0; 2]; 2]);
        assign(&mut a).try_copy_from_slice(&[1, 2, 3, 4]).unwrap();
        assert_eq!(a, [[1, 2], [3, 4]]);
    }

    #[test]
    fn into_inner() {
        let mut a = [1u8, 2];
        assign(&mut a).into_inner()[0] = 3;
        assert_eq!(a, [3, 2]);
    }

    #[test]
    fn elements() {
        let mut a = [0i32; 3];
        assign_elements(&mut a, (1i32, 2i32, 3i32));
        assert_eq!(a, [1, 2, 3]);
        assign(&mut a).elements((4i32, 5i32, 6i32));
        assert_eq!(a, [4, 5, 6]);
    }

    #[test]
    fn elements_order() {
        let mut a: [[Logged; 2]; 3] = Default::default();
        take_log();
        assign_elements(&mut a, ([1i32, 2], [3i32, 4], [Logged(9), Logged(9)]));
        assert_eq!(take_log(), [1, 2, 3, 4]);
        assert_eq!(a[2], [Logged(9), Logged(9)]);
    }

    #[test]
    fn elements_nested_move_only() {
        let mut a: [[[Box<str>; 1]; 2]; 2] = Default::default();
        let row: [[Box<str>; 1]; 2] = [["a".into()], ["b".into()]];
        let next: [[Box<str>; 1]; 2] = [["c".into()], ["d".into()]];
        assign_elements(&mut a, (row, next));
        assert_eq!(&*a[1][0][0], "c");
        assert_eq!(&*a[0][1][0], "b");
    }
}
