//! Comparison of arrays by content.
//!
//! For each comparison operator, this module defines a type that cannot be
//! instantiated and that implements [`Comparator`]. For example,
//! [`EqualTo`] corresponds to `==`. For values that are not arrays, each
//! `Comparator` does exactly what the operator does. Arrays are compared
//! element by element in flat index order, stopping at the first pair of
//! elements that differ.
//!
//! Arrays are only comparable with arrays of the same shape. Multi-dimensional
//! arrays compare as if they were flat.
//!
//! ```
//! use std::cmp::Ordering;
//! use array_support::{Comparator, CompareThreeWay, EqualTo, Less};
//!
//! let a = [[0i32, 1], [2, 3]];
//! let mut b = [[0i32, 1], [2, 3]];
//! assert_eq!(CompareThreeWay::call(&a, &b), Ordering::Equal);
//! b[1][1] = 2;
//! assert_eq!(CompareThreeWay::call(&a, &b), Ordering::Greater);
//! assert!(Less::call(&b, &a));
//! assert!(EqualTo::call(b"hello", b"hello"));
//! ```

use std::cmp::{Ordering};
use std::ops::{Deref, DerefMut};

use super::{Extents, SameShape, Category, ThreeWay};

/// Implemented by `Self` if its elements can be compared with those of `R`
/// using [`ThreeWay`], and if `Self` has the same shape as `R`.
pub trait ThreeWayComparableWith<R: Extents>: SameShape<R> {
    /// The type returned by [`CompareThreeWay`].
    type Result: Category;

    /// Compare two elements.
    fn three_way_elements(l: &Self::Element, r: &R::Element) -> Self::Result;
}

impl<L, R> ThreeWayComparableWith<R> for L where
    L: SameShape<R>,
    R: Extents,
    L::Element: ThreeWay<R::Element>,
{
    type Result = <L::Element as ThreeWay<R::Element>>::Result;

    #[inline(always)]
    fn three_way_elements(l: &L::Element, r: &R::Element) -> Self::Result { l.three_way(r) }
}

/// Implemented by `Self` if it implements [`ThreeWayComparableWith<Self>`].
pub trait ThreeWayComparable: Extents + ThreeWayComparableWith<Self> {}

impl<T: Extents + ThreeWayComparableWith<T>> ThreeWayComparable for T {}

/// The type returned by [`CompareThreeWay`] when comparing an `L` with an
/// `R`. This is the [`Category`] of the element comparison.
pub type CompareThreeWayResult<L, R = L> = <L as ThreeWayComparableWith<R>>::Result;

/// Implemented by `Self` if its elements implement [`PartialEq`] with those
/// of `R`, and if `Self` has the same shape as `R`.
pub trait EqualityComparableWith<R: Extents>: SameShape<R> {
    /// Compare two elements.
    fn eq_elements(l: &Self::Element, r: &R::Element) -> bool;
}

impl<L, R> EqualityComparableWith<R> for L where
    L: SameShape<R>,
    R: Extents,
    L::Element: PartialEq<R::Element>,
{
    #[inline(always)]
    fn eq_elements(l: &L::Element, r: &R::Element) -> bool { l == r }
}

/// Implemented by `Self` if it implements [`EqualityComparableWith<Self>`].
pub trait EqualityComparable: Extents + EqualityComparableWith<Self> {}

impl<T: Extents + EqualityComparableWith<T>> EqualityComparable for T {}

/// Implemented by `Self` if its elements implement [`PartialOrd`] with those
/// of `R`, and if `Self` has the same shape as `R`.
///
/// Like `<`, this does not guarantee that the order is total. Floating-point
/// elements qualify.
pub trait TotallyOrderedWith<R: Extents>: EqualityComparableWith<R> {
    /// Compare two elements.
    fn lt_elements(l: &Self::Element, r: &R::Element) -> bool;
}

impl<L, R> TotallyOrderedWith<R> for L where
    L: SameShape<R>,
    R: Extents,
    L::Element: PartialOrd<R::Element>,
{
    #[inline(always)]
    fn lt_elements(l: &L::Element, r: &R::Element) -> bool { l < r }
}

/// Implemented by `Self` if it implements [`TotallyOrderedWith<Self>`].
pub trait TotallyOrdered: Extents + TotallyOrderedWith<Self> {}

impl<T: Extents + TotallyOrderedWith<T>> TotallyOrdered for T {}

// ----------------------------------------------------------------------------

/// A function that compares `L` with `R`.
///
/// This trait has no methods that take `self`. It is implemented for types
/// that cannot be instantiated, which can be passed as a type parameter to
/// generic code. `call` can also be used directly as a function.
///
/// ```
/// use array_support::{Comparator, EqualTo};
/// let eq: fn(&[u8; 3], &[u8; 3]) -> bool = EqualTo::call;
/// assert!(eq(&[1, 2, 3], &[1, 2, 3]));
/// ```
pub trait Comparator<L, R = L> {
    type Output;

    fn call(l: &L, r: &R) -> Self::Output;
}

/// Three-way comparison. Returns the first result that is not equivalent,
/// or `EQUIVALENT` if all elements are equivalent.
pub enum CompareThreeWay {}

impl<L, R: Extents> Comparator<L, R> for CompareThreeWay where
    L: ThreeWayComparableWith<R>,
{
    type Output = CompareThreeWayResult<L, R>;

    fn call(l: &L, r: &R) -> Self::Output {
        for i in 0..L::FLAT_SIZE {
            let c = <L as ThreeWayComparableWith<R>>::three_way_elements(l.flat_index(i), r.flat_index(i));
            if !c.is_equivalent() { return c; }
        }
        <CompareThreeWayResult<L, R> as Category>::EQUIVALENT
    }
}

/// `==`. Returns `false` at the first pair of elements that differ.
pub enum EqualTo {}

impl<L, R: Extents> Comparator<L, R> for EqualTo where
    L: EqualityComparableWith<R>,
{
    type Output = bool;

    fn call(l: &L, r: &R) -> bool {
        (0..L::FLAT_SIZE).all(|i| <L as EqualityComparableWith<R>>::eq_elements(l.flat_index(i), r.flat_index(i)))
    }
}

/// `!=`. The negation of [`EqualTo`].
pub enum NotEqualTo {}

impl<L, R: Extents> Comparator<L, R> for NotEqualTo where
    L: EqualityComparableWith<R>,
{
    type Output = bool;

    fn call(l: &L, r: &R) -> bool { !EqualTo::call(l, r) }
}

/// `<`. At the first pair of elements that differ, returns whether the first
/// is less than the second. Returns `false` if there is no such pair.
pub enum Less {}

impl<L, R: Extents> Comparator<L, R> for Less where
    L: TotallyOrderedWith<R>,
{
    type Output = bool;

    fn call(l: &L, r: &R) -> bool {
        if L::RANK == 0 {
            return <L as TotallyOrderedWith<R>>::lt_elements(l.flat_index(0), r.flat_index(0));
        }
        for i in 0..L::FLAT_SIZE {
            let (x, y) = (l.flat_index(i), r.flat_index(i));
            if !<L as EqualityComparableWith<R>>::eq_elements(x, y) {
                return <L as TotallyOrderedWith<R>>::lt_elements(x, y);
            }
        }
        false
    }
}

/// `>`. Defined as [`Less`] with the arguments swapped.
pub enum Greater {}

impl<L: Extents, R> Comparator<L, R> for Greater where
    R: TotallyOrderedWith<L>,
{
    type Output = bool;

    fn call(l: &L, r: &R) -> bool { Less::call(r, l) }
}

/// `<=`. Defined as the negation of [`Greater`].
pub enum LessEqual {}

impl<L: Extents, R> Comparator<L, R> for LessEqual where
    R: TotallyOrderedWith<L>,
{
    type Output = bool;

    fn call(l: &L, r: &R) -> bool { !Less::call(r, l) }
}

/// `>=`. Defined as the negation of [`Less`].
pub enum GreaterEqual {}

impl<L, R: Extents> Comparator<L, R> for GreaterEqual where
    L: TotallyOrderedWith<R>,
{
    type Output = bool;

    fn call(l: &L, r: &R) -> bool { !Less::call(l, r) }
}

macro_rules! impl_same {
    ($($c:ident),*) => {
        $(
            impl $c {
                /// Like [`Comparator::call()`] but `r` must be the same type
                /// as `l`. This is convenient when `r` is an array literal,
                /// whose element type can then be inferred.
                #[inline(always)]
                pub fn same<A>(l: &A, r: &A) -> <Self as Comparator<A>>::Output where
                    Self: Comparator<A>,
                {
                    <Self as Comparator<A>>::call(l, r)
                }
            }
        )*
    };
}

impl_same!(CompareThreeWay, EqualTo, NotEqualTo, Less, Greater, LessEqual, GreaterEqual);

// ----------------------------------------------------------------------------

/// `Contents<T>` behaves like `T` but compares using the [`Comparator`]s of
/// this module.
///
/// It can be used as a key in an ordered collection whenever the elements of
/// `T` have a total order.
///
/// ```
/// use std::collections::{BTreeSet};
/// use array_support::{Contents};
/// let mut set = BTreeSet::new();
/// set.insert(Contents([[1u8, 2], [3, 4]]));
/// set.insert(Contents([[1u8, 2], [3, 0]]));
/// set.insert(Contents([[1u8, 2], [3, 4]]));
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.first(), Some(&Contents([[1u8, 2], [3, 0]])));
/// ```
#[derive(Debug, Default, Copy, Clone)]
#[repr(transparent)]
pub struct Contents<T>(pub T);

impl<T> Deref for Contents<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl<T> DerefMut for Contents<T> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

impl<T: EqualityComparable> PartialEq for Contents<T> {
    fn eq(&self, other: &Self) -> bool { EqualTo::call(&self.0, &other.0) }
}

impl<T> Eq for Contents<T> where
    T: EqualityComparable + ThreeWayComparableWith<T, Result=Ordering>,
{}

impl<T: EqualityComparable + ThreeWayComparable> PartialOrd for Contents<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        CompareThreeWay::call(&self.0, &other.0).partial()
    }
}

impl<T> Ord for Contents<T> where
    T: EqualityComparable + ThreeWayComparableWith<T, Result=Ordering>,
{
    fn cmp(&self, other: &Self) -> Ordering { CompareThreeWay::call(&self.0, &other.0) }
}

// ----------------------------------------------------------------------------
