//! Type-level introspection of nested fixed-size arrays.
//!
//! A type `[[[T; L]; M]; N]` has rank 3, extents `N`, `M` and `L`, and
//! element type `T`, provided that `T` is not itself an array. Every such
//! type implements [`Extents`], which answers questions about its shape and
//! gives access to its elements as if they were a one-dimensional sequence of
//! length `N * M * L`. This is called the "flat" view of the array, and the
//! position of an element in it is its "flat index".
//!
//! Types that are not arrays must say so by implementing [`NonArray`]. They
//! then implement `Extents` too, with rank 0 and exactly one element: the
//! value itself. This lets generic code treat scalars and arrays alike.
//!
//! Two types have the same shape if they have the same rank and the same
//! extent in every dimension. This is checked at compile time by comparing
//! the [`Extents::Shape`] types, and expressed by trait [`SameShape`].

use std::borrow::{Cow, ToOwned};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::marker::{PhantomData};
use std::ptr::{NonNull};
use std::rc::{Rc};
use std::sync::{Arc};
use std::time::{Duration, Instant};

use super::{ShapeError};

/// Implemented by types that are not fixed-size arrays.
///
/// A type that implements `NonArray` will automatically get an implementation
/// of [`Extents`], as will arrays of it, arrays of arrays of it, and so on.
///
/// ```
/// use array_support::{NonArray, Extents};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Celsius(f32);
/// impl NonArray for Celsius {}
///
/// assert_eq!(<[[Celsius; 7]; 52] as Extents>::FLAT_SIZE, 364);
/// ```
pub trait NonArray: Sized {}

impl NonArray for bool {}
impl NonArray for char {}

impl NonArray for i8 {}
impl NonArray for i16 {}
impl NonArray for i32 {}
impl NonArray for i64 {}
impl NonArray for i128 {}
impl NonArray for isize {}

impl NonArray for u8 {}
impl NonArray for u16 {}
impl NonArray for u32 {}
impl NonArray for u64 {}
impl NonArray for u128 {}
impl NonArray for usize {}

impl NonArray for f32 {}
impl NonArray for f64 {}

impl NonArray for () {}
impl NonArray for std::cmp::Ordering {}
impl NonArray for String {}
impl NonArray for Duration {}
impl NonArray for Instant {}

impl<T> NonArray for Option<T> {}
impl<T, E> NonArray for Result<T, E> {}
impl<T> NonArray for Vec<T> {}
impl<T> NonArray for VecDeque<T> {}
impl<T> NonArray for BTreeSet<T> {}
impl<K, V> NonArray for BTreeMap<K, V> {}
impl<T, S> NonArray for HashSet<T, S> {}
impl<K, V, S> NonArray for HashMap<K, V, S> {}
impl<T: ?Sized> NonArray for PhantomData<T> {}

// References and smart pointers are not arrays, even if they point to one.
impl<T: ?Sized> NonArray for &T {}
impl<T: ?Sized> NonArray for &mut T {}
impl<T: ?Sized> NonArray for Box<T> {}
impl<T: ?Sized> NonArray for Rc<T> {}
impl<T: ?Sized> NonArray for Arc<T> {}
impl<B: ?Sized + ToOwned> NonArray for Cow<'_, B> {}
impl<T: ?Sized> NonArray for *const T {}
impl<T: ?Sized> NonArray for *mut T {}
impl<T: ?Sized> NonArray for NonNull<T> {}

macro_rules! impl_non_array_fn {
    ($($a:ident),*) => {
        impl<R, $($a),*> NonArray for fn($($a),*) -> R {}
    };
}

impl_non_array_fn!();
impl_non_array_fn!(A);
impl_non_array_fn!(A, B);
impl_non_array_fn!(A, B, C);
impl_non_array_fn!(A, B, C, D);
impl_non_array_fn!(A, B, C, D, E);
impl_non_array_fn!(A, B, C, D, E, F);

macro_rules! impl_non_array_tuple {
    ($($a:ident),+) => {
        impl<$($a),+> NonArray for ($($a,)+) {}
    };
}

impl_non_array_tuple!(A);
impl_non_array_tuple!(A, B);
impl_non_array_tuple!(A, B, C);
impl_non_array_tuple!(A, B, C, D);
impl_non_array_tuple!(A, B, C, D, E);
impl_non_array_tuple!(A, B, C, D, E, F);
impl_non_array_tuple!(A, B, C, D, E, F, G);
impl_non_array_tuple!(A, B, C, D, E, F, G, H);
impl_non_array_tuple!(A, B, C, D, E, F, G, H, I);
impl_non_array_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_non_array_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_non_array_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

// ----------------------------------------------------------------------------

fn div_mod(index: usize, size: usize) -> (usize, usize) {
    (index / size, index % size)
}

/// Describes the shape of a possibly nested fixed-size array, and gives
/// access to its elements by flat index.
///
/// You probably shouldn't write any implementations of this trait. If you
/// want a type to implement `Extents`, it should implement [`NonArray`], and
/// take advantage of the blanket implementations.
///
/// Flat indices are in row-major order: the last dimension varies fastest.
/// Everything in this crate that visits several elements visits them in
/// ascending order of flat index.
pub trait Extents: Sized {
    /// The innermost non-array type, with all extents removed.
    type Element;

    /// `T` for `[T; N]`, or `Self` for a `NonArray` type.
    type Inner;

    /// A type that encodes the rank and every extent of `Self`, but not the
    /// element type. It is `()` for a `NonArray` type and `[T::Shape; N]` for
    /// `[T; N]`.
    type Shape: 'static;

    /// The return type of [`into_flat()`](Self::into_flat()).
    type IntoFlat: Iterator<Item=Self::Element>;

    /// The number of dimensions.
    const RANK: usize;

    /// The total number of `Element`s.
    const FLAT_SIZE: usize;

    /// Returns the element at flat index `index`.
    ///
    /// Panics if `index >= FLAT_SIZE`.
    fn flat_index(&self, index: usize) -> &Self::Element;

    /// Returns the element at flat index `index`.
    ///
    /// Panics if `index >= FLAT_SIZE`.
    fn flat_index_mut(&mut self, index: usize) -> &mut Self::Element;

    /// Consumes `self` and returns its elements in flat index order.
    fn into_flat(self) -> Self::IntoFlat;

    /// Constructs a `Self` by calling `f` for each flat index in
    /// `start..start + FLAT_SIZE`, in order.
    #[doc(hidden)]
    fn build<F: FnMut(usize) -> Self::Element>(start: usize, f: &mut F) -> Self;

    /// Like `build()` but gives up at the first `None`.
    #[doc(hidden)]
    fn try_build<F: FnMut(usize) -> Option<Self::Element>>(start: usize, f: &mut F) -> Option<Self>;

    /// Constructs a `Self` whose element at each flat index `i` is `f(i)`.
    ///
    /// `f` is called exactly once for each index, in ascending order. Unlike
    /// [`Default`] for arrays, this works for arrays of any size.
    ///
    /// ```
    /// use array_support::Extents;
    /// let a = <[[usize; 3]; 2]>::from_flat_fn(|i| i * 10);
    /// assert_eq!(a, [[0, 10, 20], [30, 40, 50]]);
    /// ```
    fn from_flat_fn(mut f: impl FnMut(usize) -> Self::Element) -> Self {
        Self::build(0, &mut f)
    }

    /// Constructs a `Self` from its elements in flat index order.
    ///
    /// Fails unless `items` yields exactly `FLAT_SIZE` elements. At most one
    /// element beyond `FLAT_SIZE` is taken from `items`.
    ///
    /// ```
    /// use array_support::{Extents, ShapeError};
    /// let a = <[[char; 2]; 2]>::try_from_flat("abcd".chars());
    /// assert_eq!(a, Ok([['a', 'b'], ['c', 'd']]));
    /// let b = <[[char; 2]; 2]>::try_from_flat("abc".chars());
    /// assert_eq!(b, Err(ShapeError::TooFew {expected: 4, found: 3}));
    /// ```
    fn try_from_flat(items: impl IntoIterator<Item=Self::Element>) -> Result<Self, ShapeError> {
        let mut items = items.into_iter();
        let mut found = 0;
        let array = Self::try_build(0, &mut |_| {
            let item = items.next();
            if item.is_some() { found += 1; }
            item
        });
        let expected = Self::FLAT_SIZE;
        let result = match array {
            None => Err(ShapeError::TooFew {expected, found}),
            Some(array) => match items.next() {
                None => Ok(array),
                Some(_) => {
                    // Don't drain `items`; it might not end.
                    let found = expected.saturating_add(1).saturating_add(items.size_hint().0);
                    Err(ShapeError::TooMany {expected, found})
                },
            },
        };
        if let Err(e) = &result {
            log::debug!("try_from_flat: {}", e);
        }
        result
    }
}

impl<T: NonArray> Extents for T {
    type Element = T;
    type Inner = T;
    type Shape = ();
    type IntoFlat = std::iter::Once<T>;

    const RANK: usize = 0;
    const FLAT_SIZE: usize = 1;

    #[inline(always)]
    fn flat_index(&self, index: usize) -> &T {
        assert!(index == 0, "Index {:?} is out of bounds for size 1", index);
        self
    }

    #[inline(always)]
    fn flat_index_mut(&mut self, index: usize) -> &mut T {
        assert!(index == 0, "Index {:?} is out of bounds for size 1", index);
        self
    }

    fn into_flat(self) -> Self::IntoFlat { std::iter::once(self) }

    fn build<F: FnMut(usize) -> T>(start: usize, f: &mut F) -> Self { f(start) }

    fn try_build<F: FnMut(usize) -> Option<T>>(start: usize, f: &mut F) -> Option<Self> { f(start) }
}

impl<T: Extents, const N: usize> Extents for [T; N] {
    type Element = T::Element;
    type Inner = T;
    type Shape = [T::Shape; N];
    type IntoFlat = std::iter::FlatMap<
        std::array::IntoIter<T, N>,
        T::IntoFlat,
        fn(T) -> T::IntoFlat,
    >;

    const RANK: usize = T::RANK + 1;
    const FLAT_SIZE: usize = N * T::FLAT_SIZE;

    fn flat_index(&self, index: usize) -> &T::Element {
        assert!(index < Self::FLAT_SIZE, "Index {:?} is out of bounds for size {:?}", index, Self::FLAT_SIZE);
        let (q, r) = div_mod(index, T::FLAT_SIZE);
        self[q].flat_index(r)
    }

    fn flat_index_mut(&mut self, index: usize) -> &mut T::Element {
        assert!(index < Self::FLAT_SIZE, "Index {:?} is out of bounds for size {:?}", index, Self::FLAT_SIZE);
        let (q, r) = div_mod(index, T::FLAT_SIZE);
        self[q].flat_index_mut(r)
    }

    fn into_flat(self) -> Self::IntoFlat {
        IntoIterator::into_iter(self).flat_map(T::into_flat as fn(T) -> T::IntoFlat)
    }

    fn build<F: FnMut(usize) -> T::Element>(start: usize, f: &mut F) -> Self {
        array_init::array_init(|i| T::build(start + i * T::FLAT_SIZE, &mut *f))
    }

    fn try_build<F: FnMut(usize) -> Option<T::Element>>(start: usize, f: &mut F) -> Option<Self> {
        array_init::try_array_init(|i| T::try_build(start + i * T::FLAT_SIZE, &mut *f).ok_or(())).ok()
    }
}

// ----------------------------------------------------------------------------

/// Implemented by `Self` if it has the same rank and extents as `R`.
///
/// The element types are not constrained. For example, `[[u8; 3]; 2]`
/// implements `SameShape<[[String; 3]; 2]>` but not `SameShape<[u8; 6]>` or
/// `SameShape<[[u8; 2]; 3]>`.
pub trait SameShape<R: Extents>: Extents {}

impl<L: Extents, R: Extents<Shape=L::Shape>> SameShape<R> for L {}

/// The element type of `A`, with all extents removed.
pub type AllExtentsRemoved<A> = <A as Extents>::Element;

/// The element type of `A`, with one extent removed.
pub type ExtentRemoved<A> = <A as Extents>::Inner;

/// The number of dimensions of `A`.
pub const fn rank<A: Extents>() -> usize { A::RANK }

/// The total number of [`AllExtentsRemoved<A>`]s in an `A`.
pub const fn flat_size<A: Extents>() -> usize { A::FLAT_SIZE }

/// `true` if `A` is a fixed-size array.
pub const fn is_array<A: Extents>() -> bool { A::RANK > 0 }

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all, const_assert_eq};

    use super::*;

    const_assert_eq!(rank::<i32>(), 0);
    const_assert_eq!(rank::<[[[i32; 4]; 3]; 2]>(), 3);
    const_assert_eq!(flat_size::<[[[i32; 4]; 3]; 2]>(), 24);
    const_assert_eq!(flat_size::<[[i32; 0]; 5]>(), 0);
    const_assert_eq!(flat_size::<(i32, [i32; 2])>(), 1);

    assert_type_eq_all!(AllExtentsRemoved<[[u8; 2]; 3]>, u8);
    assert_type_eq_all!(ExtentRemoved<[[u8; 2]; 3]>, [u8; 2]);
    assert_type_eq_all!(ExtentRemoved<u8>, u8);
    assert_type_eq_all!(<[[u8; 2]; 3] as Extents>::Shape, [[(); 2]; 3]);

    assert_impl_all!([[u8; 3]; 2]: SameShape<[[String; 3]; 2]>);
    assert_impl_all!(u8: SameShape<char>);
    assert_not_impl_any!([[u8; 3]; 2]: SameShape<[u8; 6]>, SameShape<[[u8; 2]; 3]>);
    assert_not_impl_any!([u8; 1]: SameShape<u8>);
    assert_not_impl_any!(u8: SameShape<[u8; 1]>);

    #[test]
    fn is_array_() {
        assert!(!is_array::<f64>());
        assert!(!is_array::<Vec<[u8; 2]>>());
        assert!(is_array::<[f64; 0]>());
        assert!(is_array::<[[f64; 1]; 1]>());
    }

    #[test]
    fn flat_index() {
        let a: [[[usize; 2]; 3]; 2] = [[[0, 1], [2, 3], [4, 5]], [[6, 7], [8, 9], [10, 11]]];
        for i in 0..12 {
            assert_eq!(*a.flat_index(i), i);
        }
        let x = 42i32;
        assert_eq!(*x.flat_index(0), 42);
    }

    #[test]
    fn flat_index_mut() {
        let mut a = [[0usize; 3]; 2];
        for i in 0..6 {
            *a.flat_index_mut(i) = 10 * i;
        }
        assert_eq!(a, [[0, 10, 20], [30, 40, 50]]);
    }

    #[test]
    #[should_panic]
    fn flat_index_out_of_bounds() {
        let a = [[0u8; 3]; 2];
        a.flat_index(6);
    }

    #[test]
    #[should_panic]
    fn scalar_index_out_of_bounds() {
        let x = 0u8;
        x.flat_index(1);
    }

    #[test]
    fn into_flat() {
        let a = [[String::from("a"), String::from("b")], [String::from("c"), String::from("d")]];
        let flat: Vec<String> = a.into_flat().collect();
        assert_eq!(flat, ["a", "b", "c", "d"]);
        assert_eq!(7i32.into_flat().collect::<Vec<_>>(), [7]);
    }

    #[test]
    fn from_flat_fn() {
        let mut calls = Vec::new();
        let a = <[[u32; 2]; 3]>::from_flat_fn(|i| { calls.push(i); i as u32 });
        assert_eq!(a, [[0, 1], [2, 3], [4, 5]]);
        assert_eq!(calls, [0, 1, 2, 3, 4, 5]);
        // Larger than the arrays that implement `Default`.
        let b = <[u8; 100]>::from_flat_fn(|_| 7);
        assert!(b.iter().all(|&x| x == 7));
    }

    #[test]
    fn try_from_flat() {
        assert_eq!(<[[i32; 2]; 2]>::try_from_flat([1, 2, 3, 4]), Ok([[1, 2], [3, 4]]));
        assert_eq!(
            <[[i32; 2]; 2]>::try_from_flat([1, 2]),
            Err(ShapeError::TooFew {expected: 4, found: 2}),
        );
        assert_eq!(
            <[[i32; 2]; 2]>::try_from_flat(0..7),
            Err(ShapeError::TooMany {expected: 4, found: 7}),
        );
        assert_eq!(<[i32; 0]>::try_from_flat([]), Ok([]));
    }

    #[test]
    fn try_from_flat_unbounded() {
        assert_eq!(
            <[[u8; 2]; 2]>::try_from_flat(std::iter::repeat(0u8)),
            Err(ShapeError::TooMany {expected: 4, found: usize::MAX}),
        );
        assert!(matches!(<[u8; 2]>::try_from_flat(0u8..), Err(ShapeError::TooMany {expected: 2, ..})));
        let mut items = 0..10;
        assert!(<[i32; 3]>::try_from_flat(&mut items).is_err());
        assert_eq!(items.next(), Some(4));
    }
}
