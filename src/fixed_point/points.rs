//! Resumable advance-and-compare cursor over an evolution trajectory.

use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use tracing::trace;

/// Comparator used when the caller relies on the state's own `PartialEq`.
pub type NaturalEq<T> = fn(&T, &T) -> bool;

/// Cursor over the trajectory `s0 = evolve(base), s1 = evolve(s0), ...`.
///
/// Each [`advance`](Self::advance) scans forward from the cursor to the next
/// consecutive pair `(s_i, s_{i+1})` for which `equal` holds, returns `s_i`
/// and leaves the cursor on `s_{i+1}`. The next scan therefore resumes with
/// the pair `(s_{i+1}, s_{i+2})` instead of starting over.
///
/// Nothing is evaluated until the first pull. The base state itself is never
/// a candidate. There is no iteration cap: if `evolve` never produces two
/// equal consecutive states, a pull does not return.
///
/// As an [`Iterator`] the cursor is endless and yields the later element
/// `s_{i+1}` of each matching pair.
///
/// # Example
///
/// ```rust
/// use tetras_toolbox::FixedPoints;
///
/// let mut points = FixedPoints::new(0u32, |x: &u32| if *x < 5 { x + 1 } else { *x });
/// assert_eq!(points.advance(), 5);
/// assert_eq!(points.advance(), 5);
/// ```
pub struct FixedPoints<T, E, C = NaturalEq<T>> {
    current: T,
    primed: bool,
    steps: usize,
    evolve: E,
    equal: C,
}

impl<T, E> FixedPoints<T, E, NaturalEq<T>>
where
    T: PartialEq,
    E: FnMut(&T) -> T,
{
    /// Create a cursor comparing states with their natural equality.
    pub fn new(base: T, evolve: E) -> Self {
        Self::with_comparator(base, evolve, T::eq)
    }
}

impl<T, E, C> FixedPoints<T, E, C>
where
    E: FnMut(&T) -> T,
    C: FnMut(&T, &T) -> bool,
{
    /// Create a cursor with a caller-supplied comparator.
    ///
    /// Tolerance-based comparators give approximate fixed points; no rounding
    /// happens here.
    pub fn with_comparator(base: T, evolve: E, equal: C) -> Self {
        Self {
            current: base,
            primed: false,
            steps: 0,
            evolve,
            equal,
        }
    }

    /// Scan to the next matching pair and return its earlier element.
    pub fn advance(&mut self) -> T {
        if !self.primed {
            self.current = self.step();
            self.primed = true;
        }

        loop {
            let next = self.step();
            if (self.equal)(&self.current, &next) {
                trace!(steps = self.steps, "fixed point found");
                return mem::replace(&mut self.current, next);
            }
            self.current = next;
        }
    }

    fn step(&mut self) -> T {
        self.steps += 1;
        (self.evolve)(&self.current)
    }
}

impl<T, E, C> FixedPoints<T, E, C> {
    /// Number of times `evolve` has been called so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Current cursor position, or `None` before the first pull.
    pub fn position(&self) -> Option<&T> {
        self.primed.then_some(&self.current)
    }

    pub(super) fn into_position(self) -> T {
        self.current
    }
}

impl<T, E, C> Iterator for FixedPoints<T, E, C>
where
    T: Clone,
    E: FnMut(&T) -> T,
    C: FnMut(&T, &T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance();
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T, E, C> FusedIterator for FixedPoints<T, E, C>
where
    T: Clone,
    E: FnMut(&T) -> T,
    C: FnMut(&T, &T) -> bool,
{
}

impl<T: fmt::Debug, E, C> fmt::Debug for FixedPoints<T, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedPoints")
            .field("position", &self.position())
            .field("steps", &self.steps)
            .finish_non_exhaustive()
    }
}
