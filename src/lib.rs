//! Tetras Toolbox: small pure functional combinators
//!
//! Two independent building blocks, both generic over caller-defined state
//! and driven entirely by caller-supplied functions:
//!
//! - **Fixed points**: evolve a state until two consecutive results compare
//!   equal, returning the converged state eagerly, as a resumable thunk, or
//!   as an endless iterator.
//! - **Interaction**: map each element of a collection against a view of all
//!   the other elements, lazily and in input order.
//!
//! Nothing here performs I/O or holds global state. Caller functions are
//! expected to be pure; failures they return propagate unchanged. A fixed
//! point search on a non-convergent evolution function never returns, and
//! bounding it is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use tetras_toolbox::{fixed_point, interact};
//!
//! // Relax each value towards the mean of the others until nothing moves.
//! let settle = |values: &Vec<i64>| -> Vec<i64> {
//!     interact(values, |value, others| {
//!         let mean = others.iter().sum::<i64>() / others.len().max(1) as i64;
//!         value + (mean - value) / 2
//!     })
//!     .collect()
//! };
//!
//! let settled = fixed_point(vec![0, 8, 16], settle);
//! assert_eq!(settle(&settled), settled);
//! ```

pub mod error;
pub mod fixed_point;
pub mod interact;

// Re-export commonly used types
pub use error::{Error, Result};
pub use fixed_point::{
    find_fixed_point, fixed_point, fixed_point_by, try_fixed_point, try_fixed_point_by,
    FixedPointResult, FixedPointThunk, FixedPoints, ReturnMode,
};
pub use interact::{interact, Interactions, Others};
