/// Returned when a flat run-time sequence does not fill an array exactly.
///
/// Almost everything in this crate is checked at compile time, using the
/// array's [`Shape`]. Only the bridges from run-time data (slices and
/// iterators) can fail, and this is how they fail.
///
/// [`Shape`]: super::Extents::Shape
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The source held fewer elements than the array.
    #[error("too few elements: expected {expected}, found {found}")]
    TooFew { expected: usize, found: usize },

    /// The source held more elements than the array. If the source is an
    /// iterator, `found` is a lower bound.
    #[error("too many elements: expected {expected}, found at least {found}")]
    TooMany { expected: usize, found: usize },
}

impl ShapeError {
    /// Compare a run-time length with the length an array needs.
    pub fn check(expected: usize, found: usize) -> Result<(), Self> {
        if found < expected {
            Err(Self::TooFew {expected, found})
        } else if found > expected {
            Err(Self::TooMany {expected, found})
        } else {
            Ok(())
        }
    }
}

// ----------------------------------------------------------------------------
