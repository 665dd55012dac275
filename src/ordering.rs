//! Three-way comparison of individual (non-array) values.
//!
//! Rust has two kinds of three-way comparison: [`Ord::cmp()`], which returns
//! an [`Ordering`], and [`PartialOrd::partial_cmp()`], which returns an
//! `Option<Ordering>`. Trait [`ThreeWay`] abstracts over the two, so that
//! generic code can compare values without knowing in advance which kind of
//! ordering they have. The result type is called a [`Category`].
//!
//! Comparing arrays is done in [`compare`](super::compare), in terms of
//! `ThreeWay` comparison of their elements.

use std::borrow::{Cow, ToOwned};
use std::cmp::{Ordering};
use std::collections::{VecDeque};
use std::fmt::{Debug};
use std::ptr::{NonNull};
use std::rc::{Rc};
use std::sync::{Arc};
use std::time::{Duration, Instant};

use super::{Comparator, CompareThreeWay, ThreeWayComparable, ThreeWayComparableWith};

/// The result type of a three-way comparison.
pub trait Category: Debug + Copy + PartialEq + From<Ordering> {
    /// The result of comparing two equivalent values.
    const EQUIVALENT: Self;

    /// The category that can represent the results of both `Self` and `B`.
    /// It is `Ordering` only if both are `Ordering`.
    type Join<B: Category>: Category;

    /// Returns `true` if `self` is `EQUIVALENT`.
    fn is_equivalent(self) -> bool { self == Self::EQUIVALENT }

    /// Converts `self` to the most general category.
    fn partial(self) -> Option<Ordering>;

    /// Converts `self` to `Join<B>`.
    fn join_left<B: Category>(self) -> Self::Join<B>;

    /// Converts `b` to `Join<B>`.
    fn join_right<B: Category>(b: B) -> Self::Join<B>;
}

impl Category for Ordering {
    const EQUIVALENT: Self = Ordering::Equal;
    type Join<B: Category> = B;
    fn partial(self) -> Option<Ordering> { Some(self) }
    fn join_left<B: Category>(self) -> B { B::from(self) }
    fn join_right<B: Category>(b: B) -> B { b }
}

impl Category for Option<Ordering> {
    const EQUIVALENT: Self = Some(Ordering::Equal);
    type Join<B: Category> = Option<Ordering>;
    fn partial(self) -> Option<Ordering> { self }
    fn join_left<B: Category>(self) -> Option<Ordering> { self }
    fn join_right<B: Category>(b: B) -> Option<Ordering> { b.partial() }
}

/// The [`Category`] that can represent the results of both `A` and `B`.
pub type Common<A, B> = <A as Category>::Join<B>;

// ----------------------------------------------------------------------------

/// Three-way comparison of `Self` with `Rhs`.
///
/// This is implemented for the standard scalar types, and can be implemented
/// for other types using [`impl_three_way`](crate::impl_three_way). It should
/// agree with the type's [`PartialOrd`] implementation, if any.
///
/// Arrays don't implement `ThreeWay`; use [`CompareThreeWay`] instead.
/// Containers such as `Option`, `Vec` and tuples do, and compare their
/// contents with `CompareThreeWay`, so they may contain arrays.
pub trait ThreeWay<Rhs: ?Sized = Self> {
    type Result: Category;

    fn three_way(&self, other: &Rhs) -> Self::Result;
}

/// Implement [`ThreeWay`] for types that implement [`Ord`] (`total:`) or only
/// [`PartialOrd`] (`partial:`).
///
/// ```
/// use array_support::{NonArray, impl_three_way, CompareThreeWay, Comparator};
///
/// #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// struct Year(u16);
/// impl NonArray for Year {}
/// impl_three_way!(total: Year);
///
/// let a = [Year(1969), Year(2001)];
/// let b = [Year(1969), Year(2010)];
/// assert_eq!(CompareThreeWay::call(&a, &b), std::cmp::Ordering::Less);
/// ```
#[macro_export]
macro_rules! impl_three_way {
    (total: $($t:ty),+ $(,)?) => {
        $(
            impl $crate::ThreeWay for $t {
                type Result = ::std::cmp::Ordering;
                #[inline(always)]
                fn three_way(&self, other: &Self) -> Self::Result { ::std::cmp::Ord::cmp(self, other) }
            }
        )+
    };
    (partial: $($t:ty),+ $(,)?) => {
        $(
            impl $crate::ThreeWay for $t {
                type Result = ::std::option::Option<::std::cmp::Ordering>;
                #[inline(always)]
                fn three_way(&self, other: &Self) -> Self::Result { ::std::cmp::PartialOrd::partial_cmp(self, other) }
            }
        )+
    };
}

impl_three_way!(total: bool, char, (), Ordering, str, String, Duration, Instant);
impl_three_way!(total: i8, i16, i32, i64, i128, isize);
impl_three_way!(total: u8, u16, u32, u64, u128, usize);
impl_three_way!(partial: f32, f64);

// Raw pointers compare by address only, ignoring any metadata.

impl<T: ?Sized> ThreeWay for *const T {
    type Result = Ordering;
    fn three_way(&self, other: &Self) -> Ordering { self.cast::<()>().cmp(&other.cast::<()>()) }
}

impl<T: ?Sized> ThreeWay for *mut T {
    type Result = Ordering;
    fn three_way(&self, other: &Self) -> Ordering { self.cast::<()>().cmp(&other.cast::<()>()) }
}

impl<T: ?Sized> ThreeWay for NonNull<T> {
    type Result = Ordering;
    fn three_way(&self, other: &Self) -> Ordering {
        self.as_ptr().cast::<()>().cmp(&other.as_ptr().cast::<()>())
    }
}

// Pointer-like types compare their targets.

macro_rules! impl_three_way_deref {
    ($($p:ty),+) => {
        $(
            impl<T: ?Sized + ThreeWay> ThreeWay for $p {
                type Result = T::Result;
                #[inline(always)]
                fn three_way(&self, other: &Self) -> T::Result { (**self).three_way(&**other) }
            }
        )+
    };
}

impl_three_way_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<B: ?Sized + ToOwned + ThreeWay> ThreeWay for Cow<'_, B> {
    type Result = B::Result;
    fn three_way(&self, other: &Self) -> B::Result { (**self).three_way(&**other) }
}

// ----------------------------------------------------------------------------

// Containers compare their members with `CompareThreeWay`, so members may be
// arrays. Like `Ord`, `None < Some`, `Ok < Err`, and sequences compare
// lexicographically.

type ResultOf<A> = <A as ThreeWayComparableWith<A>>::Result;

impl<T: ThreeWayComparable> ThreeWay for Option<T> {
    type Result = ResultOf<T>;

    fn three_way(&self, other: &Self) -> Self::Result {
        match (self, other) {
            (Some(x), Some(y)) => CompareThreeWay::call(x, y),
            (None, None) => <Self::Result as Category>::EQUIVALENT,
            (None, Some(_)) => Ordering::Less.into(),
            (Some(_), None) => Ordering::Greater.into(),
        }
    }
}

impl<T: ThreeWayComparable, E: ThreeWayComparable> ThreeWay for Result<T, E> {
    type Result = Common<ResultOf<T>, ResultOf<E>>;

    fn three_way(&self, other: &Self) -> Self::Result {
        match (self, other) {
            (Ok(x), Ok(y)) => CompareThreeWay::call(x, y).join_left::<ResultOf<E>>(),
            (Err(x), Err(y)) => <ResultOf<T> as Category>::join_right(CompareThreeWay::call(x, y)),
            (Ok(_), Err(_)) => Ordering::Less.into(),
            (Err(_), Ok(_)) => Ordering::Greater.into(),
        }
    }
}

impl<T: ThreeWayComparable> ThreeWay for [T] {
    type Result = ResultOf<T>;

    fn three_way(&self, other: &Self) -> Self::Result {
        for (x, y) in self.iter().zip(other) {
            let c = CompareThreeWay::call(x, y);
            if !c.is_equivalent() { return c; }
        }
        self.len().cmp(&other.len()).into()
    }
}

impl<T: ThreeWayComparable> ThreeWay for Vec<T> {
    type Result = ResultOf<T>;

    fn three_way(&self, other: &Self) -> Self::Result { self.as_slice().three_way(other.as_slice()) }
}

impl<T: ThreeWayComparable> ThreeWay for VecDeque<T> {
    type Result = ResultOf<T>;

    fn three_way(&self, other: &Self) -> Self::Result {
        for (x, y) in self.iter().zip(other) {
            let c = CompareThreeWay::call(x, y);
            if !c.is_equivalent() { return c; }
        }
        self.len().cmp(&other.len()).into()
    }
}

// Tuples compare lexicographically. The result is `Ordering` only if every
// member's result is.

macro_rules! tuple_result {
    ($a:ident) => { ResultOf<$a> };
    ($a:ident, $($rest:ident),+) => { Common<ResultOf<$a>, tuple_result!($($rest),+)> };
}

macro_rules! tuple_three_way {
    ($l:ident, $r:ident; $i:tt: $a:ident) => {
        CompareThreeWay::call(&$l.$i, &$r.$i)
    };
    ($l:ident, $r:ident; $i:tt: $a:ident, $($j:tt: $rest:ident),+) => {{
        let c: ResultOf<$a> = CompareThreeWay::call(&$l.$i, &$r.$i);
        if c.is_equivalent() {
            <ResultOf<$a> as Category>::join_right::<tuple_result!($($rest),+)>(
                tuple_three_way!($l, $r; $($j: $rest),+)
            )
        } else {
            c.join_left::<tuple_result!($($rest),+)>()
        }
    }};
}

macro_rules! impl_three_way_tuple {
    ($($i:tt: $a:ident),+) => {
        impl<$($a: ThreeWayComparable),+> ThreeWay for ($($a,)+) {
            type Result = tuple_result!($($a),+);

            fn three_way(&self, other: &Self) -> Self::Result {
                let (l, r) = (self, other);
                tuple_three_way!(l, r; $($i: $a),+)
            }
        }
    };
}

impl_three_way_tuple!(0: A);
impl_three_way_tuple!(0: A, 1: B);
impl_three_way_tuple!(0: A, 1: B, 2: C);
impl_three_way_tuple!(0: A, 1: B, 2: C, 3: D);
impl_three_way_tuple!(0: A, 1: B, 2: C, 3: D, 4: E);
impl_three_way_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F);
impl_three_way_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G);
impl_three_way_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H);
impl_three_way_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I);
impl_three_way_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J);
impl_three_way_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K);
impl_three_way_tuple!(0: A, 1: B, 2: C, 3: D, 4: E, 5: F, 6: G, 7: H, 8: I, 9: J, 10: K, 11: L);

// ----------------------------------------------------------------------------
