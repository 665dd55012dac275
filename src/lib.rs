//! A pure-Rust library providing assignment and comparison of nested
//! fixed-size arrays, element by element.
//!
//! A type such as `[[f32; 4]; 3]` has a shape (rank 2, extents 3 and 4) and an
//! element type (`f32`). Trait [`Extents`] exposes both, and gives access to
//! the elements as if the array were one-dimensional. Types that are not
//! arrays implement [`NonArray`], and are then treated as arrays of rank 0
//! with exactly one element. You are encouraged to implement `NonArray` for
//! your own types.
//!
//! [`assign()`] assigns to a value of any type. For an array, it can assign
//! from an array of a different element type, from a borrowed array, or from
//! a tuple of rows, provided the shapes match exactly. For anything else it
//! does exactly what `=` does.
//!
//! The [`Comparator`]s [`CompareThreeWay`], [`EqualTo`], [`NotEqualTo`] and
//! [`Less`] compare arrays by content, in flat index order, stopping at the
//! first pair of elements that differ. For anything else they do exactly
//! what the corresponding operator does. [`Contents`] wraps an array so that
//! the ordinary comparison operators use them.
//!
//! The traits [`AssignableFrom`], [`EqualityComparableWith`] and so on say
//! what these operations can do. Shape mismatches and incompatible elements
//! are both rejected at compile time, as unsatisfied trait bounds.
//!
//! ```
//! use std::cmp::Ordering;
//! use array_support::{assign, Comparator, CompareThreeWay, EqualTo};
//!
//! let mut a = [[0u32; 2]; 2];
//! let b = [[1u8, 2], [3, 4]];
//! assign(&mut a).set_from(b);
//! assert!(EqualTo::call(&a, &[[1u32, 2], [3, 4]]));
//! assert_eq!(CompareThreeWay::call(&a, &[[1u32, 2], [3, 5]]), Ordering::Less);
//! ```

mod error;
pub use error::{ShapeError};

pub mod extents;
pub use extents::{
    NonArray, Extents, SameShape, AllExtentsRemoved, ExtentRemoved,
    rank, flat_size, is_array,
};

pub mod traits;
pub use traits::{
    AssignFrom, AssignableFrom, CopyAssignableFrom,
    MoveAssignable, CopyAssignable,
    TriviallyAssignableFrom, TriviallyMoveAssignable, TriviallyCopyAssignable,
    EmptyListAssignable, EmptyListInitializable,
    ConstructibleFrom, TriviallyConstructibleFrom,
};

mod assign;
pub use assign::{Assign, assign, AssignTo, Elements, assign_elements};

pub mod ordering;
pub use ordering::{Category, Common, ThreeWay};

pub mod compare;
pub use compare::{
    ThreeWayComparableWith, ThreeWayComparable, CompareThreeWayResult,
    EqualityComparableWith, EqualityComparable,
    TotallyOrderedWith, TotallyOrdered,
    Comparator, CompareThreeWay, EqualTo, NotEqualTo, Less,
    Greater, LessEqual, GreaterEqual,
    Contents,
};

/// `true` if [`AssignTo::set()`] assigns a whole array natively, `false` if
/// it assigns each element separately.
///
/// Rust arrays can always be moved, so this is `true` unless the crate is
/// built with the `elementwise-assign` feature.
pub const COPYABLE_ARRAY: bool = !cfg!(feature = "elementwise-assign");
