//! Fixed-point search over caller-supplied evolution functions.
//!
//! Starting from a base state, the evolution function is applied repeatedly
//! and consecutive results are compared. The first state `s_i` whose
//! successor compares equal to it is the fixed point:
//!
//! ```text
//! base -> s0 -> s1 -> s2 -> ...
//!         (s0, s1), (s1, s2), (s2, s3), ...  first matching pair wins
//! ```
//!
//! The base state is never a candidate on its own. No iteration cap is
//! imposed: a non-convergent evolution function makes the search run
//! forever, and bounding it is the caller's job.
//!
//! Three result shapes are available through [`ReturnMode`]:
//! - `Value`: eager, the converged state itself
//! - `Thunk`: a [`FixedPointThunk`] resuming a shared cursor on every call
//! - `Iterator`: an endless [`FixedPoints`] iterator for further chaining
//!
//! The eager helpers [`fixed_point`] and [`fixed_point_by`] cover the
//! common case without any mode parameter.

mod mode;
mod points;
mod thunk;

pub use mode::ReturnMode;
pub use points::{FixedPoints, NaturalEq};
pub use thunk::FixedPointThunk;

use crate::error::Error;
use std::fmt;
use tracing::{debug, trace};

/// Fixed-point search result in the shape chosen by [`ReturnMode`].
pub enum FixedPointResult<T, E, C> {
    /// Converged state, already computed
    Value(T),

    /// Endless iterator over successive fixed points
    Iterator(FixedPoints<T, E, C>),

    /// Resumable callable
    Thunk(FixedPointThunk<T, E, C>),
}

impl<T, E, C> FixedPointResult<T, E, C> {
    /// Mode this result was produced in.
    pub fn mode(&self) -> ReturnMode {
        match self {
            Self::Value(_) => ReturnMode::Value,
            Self::Iterator(_) => ReturnMode::Iterator,
            Self::Thunk(_) => ReturnMode::Thunk,
        }
    }

    /// Borrow the converged state if it was computed eagerly.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Take the iterator out of an `Iterator` mode result.
    pub fn try_into_iter(self) -> crate::error::Result<FixedPoints<T, E, C>> {
        match self {
            Self::Iterator(points) => Ok(points),
            other => Err(Error::ModeMismatch {
                expected: ReturnMode::Iterator,
                found: other.mode(),
            }),
        }
    }

    /// Take the thunk out of a `Thunk` mode result.
    pub fn try_into_thunk(self) -> crate::error::Result<FixedPointThunk<T, E, C>> {
        match self {
            Self::Thunk(thunk) => Ok(thunk),
            other => Err(Error::ModeMismatch {
                expected: ReturnMode::Thunk,
                found: other.mode(),
            }),
        }
    }
}

impl<T, E, C> FixedPointResult<T, E, C>
where
    E: FnMut(&T) -> T,
    C: FnMut(&T, &T) -> bool,
{
    /// Resolve any shape into the next converged state.
    ///
    /// `Value` and `Thunk` give the earlier state of the matching pair.
    /// `Iterator` gives what its next item would be: the later state.
    /// Lazy shapes are advanced once, so this may not return for a
    /// non-convergent evolution function.
    pub fn into_value(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Iterator(mut points) => {
                points.advance();
                points.into_position()
            }
            Self::Thunk(mut thunk) => thunk.call(),
        }
    }
}

impl<T: fmt::Debug, E, C> fmt::Debug for FixedPointResult<T, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Iterator(points) => f.debug_tuple("Iterator").field(points).finish(),
            Self::Thunk(thunk) => f.debug_tuple("Thunk").field(thunk).finish(),
        }
    }
}

/// Search for the fixed point of `evolve` starting from `base`, returning it
/// in the requested shape.
///
/// `Value` scans eagerly. `Iterator` and `Thunk` evaluate nothing until
/// first use, so a failing or diverging `evolve` only surfaces there.
///
/// # Example
///
/// ```rust
/// use tetras_toolbox::{find_fixed_point, ReturnMode};
///
/// let climb = |x: &i32| if *x < 5 { x + 1 } else { *x };
///
/// let result = find_fixed_point(0, climb, PartialEq::eq, ReturnMode::Value);
/// assert_eq!(result.as_value(), Some(&5));
///
/// let mut thunk = find_fixed_point(0, climb, PartialEq::eq, ReturnMode::Thunk)
///     .try_into_thunk()
///     .unwrap();
/// assert_eq!(thunk.call(), 5);
/// ```
pub fn find_fixed_point<T, E, C>(
    base: T,
    evolve: E,
    equal: C,
    mode: ReturnMode,
) -> FixedPointResult<T, E, C>
where
    E: FnMut(&T) -> T,
    C: FnMut(&T, &T) -> bool,
{
    debug!(%mode, "fixed point search requested");
    let mut points = FixedPoints::with_comparator(base, evolve, equal);
    match mode {
        ReturnMode::Value => FixedPointResult::Value(points.advance()),
        ReturnMode::Iterator => FixedPointResult::Iterator(points),
        ReturnMode::Thunk => FixedPointResult::Thunk(points.into()),
    }
}

/// Eagerly find the fixed point of `evolve` using the state's natural
/// equality.
///
/// # Example
///
/// ```rust
/// use tetras_toolbox::fixed_point;
///
/// assert_eq!(fixed_point(100u32, |x: &u32| x / 2), 0);
/// ```
pub fn fixed_point<T, E>(base: T, evolve: E) -> T
where
    T: PartialEq,
    E: FnMut(&T) -> T,
{
    FixedPoints::new(base, evolve).advance()
}

/// Eagerly find the fixed point of `evolve` under a custom comparator.
pub fn fixed_point_by<T, E, C>(base: T, evolve: E, equal: C) -> T
where
    E: FnMut(&T) -> T,
    C: FnMut(&T, &T) -> bool,
{
    FixedPoints::with_comparator(base, evolve, equal).advance()
}

/// Eagerly find the fixed point of a fallible `evolve`, using natural
/// equality. The first error from `evolve` is returned unchanged.
pub fn try_fixed_point<T, EvolveErr, E>(base: T, evolve: E) -> Result<T, EvolveErr>
where
    T: PartialEq,
    E: FnMut(&T) -> Result<T, EvolveErr>,
{
    try_fixed_point_by(base, evolve, T::eq)
}

/// Eagerly find the fixed point of a fallible `evolve` under a custom
/// comparator. The first error from `evolve` is returned unchanged.
///
/// # Example
///
/// ```rust
/// use tetras_toolbox::try_fixed_point_by;
///
/// let halve = |x: &u32| if *x == 7 { Err("odd checkpoint") } else { Ok(x / 2) };
///
/// assert_eq!(try_fixed_point_by(64u32, halve, |a: &u32, b: &u32| a == b), Ok(0));
/// assert_eq!(try_fixed_point_by(14u32, halve, |a: &u32, b: &u32| a == b), Err("odd checkpoint"));
/// ```
pub fn try_fixed_point_by<T, EvolveErr, E, C>(
    base: T,
    mut evolve: E,
    mut equal: C,
) -> Result<T, EvolveErr>
where
    E: FnMut(&T) -> Result<T, EvolveErr>,
    C: FnMut(&T, &T) -> bool,
{
    let mut current = evolve(&base)?;
    let mut steps = 1usize;
    loop {
        let next = evolve(&current)?;
        steps += 1;
        if equal(&current, &next) {
            trace!(steps, "fixed point found");
            return Ok(current);
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn climb_to_five(x: &i32) -> i32 {
        if *x < 5 {
            x + 1
        } else {
            *x
        }
    }

    #[test]
    fn value_mode_returns_converged_state() {
        let result = find_fixed_point(0, climb_to_five, PartialEq::eq, ReturnMode::Value);

        assert_eq!(result.mode(), ReturnMode::Value);
        assert_eq!(result.into_value(), 5);
    }

    #[test]
    fn value_mode_is_eager() {
        let calls = Cell::new(0);
        let result = find_fixed_point(
            1,
            |x: &i32| {
                calls.set(calls.get() + 1);
                *x
            },
            PartialEq::eq,
            ReturnMode::Value,
        );

        assert_eq!(calls.get(), 2);
        assert_eq!(result.as_value(), Some(&1));
    }

    #[test]
    fn lazy_modes_evaluate_nothing_up_front() {
        for mode in [ReturnMode::Iterator, ReturnMode::Thunk] {
            let calls = Cell::new(0);
            let result = find_fixed_point(
                1,
                |x: &i32| {
                    calls.set(calls.get() + 1);
                    *x
                },
                PartialEq::eq,
                mode,
            );

            assert_eq!(calls.get(), 0, "{mode} evaluated eagerly");
            assert_eq!(result.mode(), mode);
            assert!(result.as_value().is_none());
        }
    }

    #[test]
    fn iterator_mode_chains() {
        let points = find_fixed_point(0, climb_to_five, PartialEq::eq, ReturnMode::Iterator)
            .try_into_iter()
            .unwrap();

        let firsts: Vec<i32> = points.take(3).collect();
        assert_eq!(firsts, vec![5, 5, 5]);
    }

    #[test]
    fn thunk_mode_resolves_on_call() {
        let mut thunk = find_fixed_point(0, climb_to_five, PartialEq::eq, ReturnMode::Thunk)
            .try_into_thunk()
            .unwrap();

        assert_eq!(thunk.call(), 5);
    }

    #[test]
    fn projections_report_mode_mismatch() {
        let err = find_fixed_point(0, climb_to_five, PartialEq::eq, ReturnMode::Value)
            .try_into_thunk()
            .unwrap_err();
        assert_eq!(
            err,
            Error::ModeMismatch {
                expected: ReturnMode::Thunk,
                found: ReturnMode::Value,
            }
        );

        let err = find_fixed_point(0, climb_to_five, PartialEq::eq, ReturnMode::Thunk)
            .try_into_iter()
            .unwrap_err();
        assert_eq!(
            err,
            Error::ModeMismatch {
                expected: ReturnMode::Iterator,
                found: ReturnMode::Thunk,
            }
        );
    }

    #[test]
    fn into_value_resolves_every_shape() {
        for mode in [ReturnMode::Value, ReturnMode::Iterator, ReturnMode::Thunk] {
            let result = find_fixed_point(0, climb_to_five, PartialEq::eq, mode);
            assert_eq!(result.into_value(), 5, "{mode}");
        }
    }

    #[test]
    fn iterator_into_value_matches_next_item() {
        let halve = |x: &f64| x / 2.0;
        let near = |a: &f64, b: &f64| (a - b).abs() < 0.1;

        let resolved =
            find_fixed_point(1.0_f64, halve, near, ReturnMode::Iterator).into_value();
        let mut points = find_fixed_point(1.0_f64, halve, near, ReturnMode::Iterator)
            .try_into_iter()
            .unwrap();

        assert_eq!(resolved, 0.0625);
        assert_eq!(points.next(), Some(resolved));
    }

    #[test]
    fn value_and_thunk_resolve_earlier_state_under_tolerance() {
        let halve = |x: &f64| x / 2.0;
        let near = |a: &f64, b: &f64| (a - b).abs() < 0.1;

        for mode in [ReturnMode::Value, ReturnMode::Thunk] {
            let result = find_fixed_point(1.0_f64, halve, near, mode);
            assert_eq!(result.into_value(), 0.125, "{mode}");
        }
    }

    #[test]
    fn fixed_point_uses_natural_equality() {
        assert_eq!(fixed_point(0, climb_to_five), 5);
        assert_eq!(fixed_point(10, |x: &i32| x / 2), 0);
    }

    #[test]
    fn fixed_point_of_identity_is_base() {
        assert_eq!(fixed_point(vec![3, 1, 2], |v: &Vec<i32>| v.clone()), vec![3, 1, 2]);
    }

    #[test]
    fn fixed_point_by_accepts_tolerance() {
        let sqrt2 = fixed_point_by(
            1.0_f64,
            |x: &f64| (x + 2.0 / x) / 2.0,
            |a: &f64, b: &f64| (a - b).abs() < 1e-12,
        );

        assert!((sqrt2 - std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn try_fixed_point_converges_without_errors() {
        let result: Result<i32, String> = try_fixed_point(0, |x: &i32| Ok(climb_to_five(x)));
        assert_eq!(result, Ok(5));
    }

    #[test]
    fn try_fixed_point_propagates_first_error() {
        let calls = Cell::new(0);
        let result = try_fixed_point(0, |x: &i32| {
            calls.set(calls.get() + 1);
            if *x == 2 {
                Err(format!("cannot evolve {x}"))
            } else {
                Ok(x + 1)
            }
        });

        assert_eq!(result, Err("cannot evolve 2".to_string()));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn try_fixed_point_fails_on_first_evolution() {
        let result = try_fixed_point(1, |_: &i32| Err::<i32, _>("boom"));
        assert_eq!(result, Err("boom"));
    }
}
