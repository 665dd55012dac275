//! Assignment and construction traits that treat arrays like any other type.
//!
//! Each trait here has a counterpart in Rust's own vocabulary. For a type that
//! is not an array, the two agree. For an array, the trait asks the same
//! question of the array's [`Element`] type instead, and, where two types are
//! involved, additionally requires that they have the [`SameShape`].
//!
//! These traits describe what [`assign()`] can do, not what `=` can do.
//! For example, [`CopyAssignableFrom`] copies from a borrowed array, whereas
//! `=` can only move.
//!
//! Rust has no equivalent of a "nothrow" guarantee, so there are no "nothrow"
//! variants. Panics raised by element operations propagate unchanged.
//!
//! [`Element`]: super::Extents::Element
//! [`assign()`]: super::assign()

use super::{Extents, SameShape};

/// Assign an `R` to `Self`. This is the single-element operation from which
/// all array assignments are built.
///
/// Every type can be assigned from itself, by move, and from a reference to
/// itself, by [`Clone::clone_from()`]. You may implement it for your own types
/// to allow assignment from other types.
///
/// ```
/// use array_support::{NonArray, AssignFrom, assign};
///
/// #[derive(Debug, PartialEq)]
/// struct Name(String);
/// impl NonArray for Name {}
/// impl AssignFrom<&str> for Name {
///     fn assign_from(&mut self, r: &str) { self.0.clear(); self.0.push_str(r); }
/// }
///
/// let mut names = [Name(String::new()), Name(String::new())];
/// assign(&mut names).set_from(["Ada", "Grace"]);
/// assert_eq!(names, [Name("Ada".into()), Name("Grace".into())]);
/// ```
pub trait AssignFrom<R> {
    fn assign_from(&mut self, r: R);
}

impl<T> AssignFrom<T> for T {
    #[inline(always)]
    fn assign_from(&mut self, r: T) { *self = r; }
}

impl<'r, T: Clone> AssignFrom<&'r T> for T {
    #[inline(always)]
    fn assign_from(&mut self, r: &'r T) { self.clone_from(r); }
}

// ----------------------------------------------------------------------------

/// Implemented by `Self` if it has the same shape as `R` and each of its
/// elements can be assigned from the corresponding element of `R` by value.
pub trait AssignableFrom<R: Extents>: SameShape<R> {
    /// Assign each element of `r` to the corresponding element of `self`, in
    /// flat index order.
    fn assign_flat(&mut self, r: R);
}

impl<L, R> AssignableFrom<R> for L where
    L: SameShape<R>,
    R: Extents,
    L::Element: AssignFrom<R::Element>,
{
    fn assign_flat(&mut self, r: R) {
        for (i, e) in r.into_flat().enumerate() {
            self.flat_index_mut(i).assign_from(e);
        }
    }
}

/// Implemented by `Self` if it has the same shape as `R` and each of its
/// elements can be assigned from a reference to the corresponding element of
/// `R`.
pub trait CopyAssignableFrom<R: Extents>: SameShape<R> {
    /// Assign each element of `r` to the corresponding element of `self`, in
    /// flat index order.
    fn assign_flat_ref(&mut self, r: &R);
}

impl<L, R> CopyAssignableFrom<R> for L where
    L: SameShape<R>,
    R: Extents,
    L::Element: for<'r> AssignFrom<&'r R::Element>,
{
    fn assign_flat_ref(&mut self, r: &R) {
        for i in 0..L::FLAT_SIZE {
            self.flat_index_mut(i).assign_from(r.flat_index(i));
        }
    }
}

/// Implemented by `Self` if it implements [`AssignableFrom<Self>`].
pub trait MoveAssignable: Extents + AssignableFrom<Self> {}

impl<T: Extents + AssignableFrom<T>> MoveAssignable for T {}

/// Implemented by `Self` if it implements [`CopyAssignableFrom<Self>`].
pub trait CopyAssignable: Extents + CopyAssignableFrom<Self> {}

impl<T: Extents + CopyAssignableFrom<T>> CopyAssignable for T {}

/// Implemented by `Self` if it is [`AssignableFrom<R>`] and the elements of
/// both are [`Copy`].
pub trait TriviallyAssignableFrom<R: Extents>: AssignableFrom<R> {}

impl<L, R> TriviallyAssignableFrom<R> for L where
    L: AssignableFrom<R>,
    R: Extents,
    L::Element: Copy,
    R::Element: Copy,
{}

/// Implemented by `Self` if it is [`MoveAssignable`] and its elements are
/// [`Copy`].
pub trait TriviallyMoveAssignable: MoveAssignable {}

impl<T: MoveAssignable> TriviallyMoveAssignable for T where T::Element: Copy {}

/// Implemented by `Self` if it is [`CopyAssignable`] and its elements are
/// [`Copy`].
pub trait TriviallyCopyAssignable: CopyAssignable {}

impl<T: CopyAssignable> TriviallyCopyAssignable for T where T::Element: Copy {}

// ----------------------------------------------------------------------------

/// Implemented by `Self` if each of its elements can be assigned its
/// [`Default`] value. This is the equivalent of assigning `{}`.
pub trait EmptyListAssignable: Extents {
    /// Assign the default value to each element, in flat index order.
    fn assign_default(&mut self);
}

impl<T: Extents> EmptyListAssignable for T where T::Element: Default {
    fn assign_default(&mut self) {
        for i in 0..T::FLAT_SIZE {
            self.flat_index_mut(i).assign_from(T::Element::default());
        }
    }
}

/// Implemented by `Self` if it can be constructed with every element having
/// its [`Default`] value.
pub trait EmptyListInitializable: Extents {
    /// Returns a `Self` whose elements all have their default value.
    ///
    /// ```
    /// use array_support::EmptyListInitializable;
    /// let a = <[[String; 20]; 20]>::empty();
    /// assert!(a.iter().flatten().all(String::is_empty));
    /// ```
    fn empty() -> Self;
}

impl<T: Extents> EmptyListInitializable for T where T::Element: Default {
    fn empty() -> Self { Self::from_flat_fn(|_| T::Element::default()) }
}

/// Implemented by `Self` if it has the same shape as `R` and each of its
/// elements can be constructed [`From`] the corresponding element of `R`.
pub trait ConstructibleFrom<R: Extents>: SameShape<R> {
    /// Construct a `Self` from `r`, element by element, in flat index order.
    ///
    /// ```
    /// use array_support::ConstructibleFrom;
    /// let a = [[1u8, 2], [3, 4]];
    /// let b = <[[u32; 2]; 2]>::construct_from(a);
    /// assert_eq!(b, [[1, 2], [3, 4]]);
    /// ```
    fn construct_from(r: R) -> Self;
}

impl<L, R> ConstructibleFrom<R> for L where
    L: SameShape<R>,
    R: Extents,
    L::Element: From<R::Element>,
{
    fn construct_from(r: R) -> Self {
        let mut flat = r.into_flat();
        Self::from_flat_fn(|_| match flat.next() {
            Some(e) => e.into(),
            None => unreachable!("`L` and `R` have the same shape"),
        })
    }
}

/// Implemented by `Self` if it is [`ConstructibleFrom<R>`] and the elements
/// of both are [`Copy`].
pub trait TriviallyConstructibleFrom<R: Extents>: ConstructibleFrom<R> {}

impl<L, R> TriviallyConstructibleFrom<R> for L where
    L: ConstructibleFrom<R>,
    R: Extents,
    L::Element: Copy,
    R::Element: Copy,
{}

// ----------------------------------------------------------------------------
