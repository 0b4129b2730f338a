//! Resumable zero-argument callable over a fixed-point search.

use super::points::{FixedPoints, NaturalEq};
use std::fmt;

/// Deferred fixed-point search.
///
/// Every [`call`](Self::call) resumes the same underlying cursor. A second
/// call does not restart the search: it returns the next fixed point along
/// the trajectory. Callers wanting the same value twice must keep the first
/// result themselves.
///
/// A thunk is driven by `&mut self` and cannot be shared between callers
/// without external synchronisation.
///
/// # Example
///
/// ```rust
/// use tetras_toolbox::FixedPointThunk;
///
/// // any pair whose later state is even counts as a match
/// let mut thunk = FixedPointThunk::with_comparator(0u32, |x: &u32| x + 1, |_: &u32, b: &u32| b % 2 == 0);
/// assert_eq!(thunk.call(), 1);
/// assert_eq!(thunk.call(), 3);
/// ```
pub struct FixedPointThunk<T, E, C = NaturalEq<T>> {
    points: FixedPoints<T, E, C>,
}

impl<T, E> FixedPointThunk<T, E, NaturalEq<T>>
where
    T: PartialEq,
    E: FnMut(&T) -> T,
{
    /// Create a thunk comparing states with their natural equality.
    pub fn new(base: T, evolve: E) -> Self {
        FixedPoints::new(base, evolve).into()
    }
}

impl<T, E, C> FixedPointThunk<T, E, C>
where
    E: FnMut(&T) -> T,
    C: FnMut(&T, &T) -> bool,
{
    /// Create a thunk with a caller-supplied comparator.
    pub fn with_comparator(base: T, evolve: E, equal: C) -> Self {
        FixedPoints::with_comparator(base, evolve, equal).into()
    }

    /// Resume the search and return the next fixed point.
    pub fn call(&mut self) -> T {
        self.points.advance()
    }

    /// Turn the thunk into a plain `FnMut` closure sharing the same cursor.
    pub fn into_fn(mut self) -> impl FnMut() -> T {
        move || self.call()
    }
}

impl<T, E, C> FixedPointThunk<T, E, C> {
    /// Number of times `evolve` has been called so far.
    pub fn steps(&self) -> usize {
        self.points.steps()
    }

    /// Release the underlying cursor.
    pub fn into_inner(self) -> FixedPoints<T, E, C> {
        self.points
    }
}

impl<T, E, C> From<FixedPoints<T, E, C>> for FixedPointThunk<T, E, C> {
    fn from(points: FixedPoints<T, E, C>) -> Self {
        Self { points }
    }
}

impl<T: fmt::Debug, E, C> fmt::Debug for FixedPointThunk<T, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedPointThunk").field(&self.points).finish()
    }
}
