//! All-others interaction mapping.
//!
//! Each element of a collection is paired with a view of every *other*
//! element and handed to a caller-supplied interaction function. The output
//! lines up with the input position for position, which suits n-body style
//! updates where each body reacts to the rest.
//!
//! Evaluation is lazy: the interaction function runs once per element, in
//! index order, as the caller pulls results. A fallible interaction simply
//! returns `Result` items; an error surfaces when that element is consumed
//! and does not affect the others.

mod others;

pub use others::{Iter, Others};

use std::fmt;
use std::iter::FusedIterator;

/// Lazy iterator produced by [`interact`].
///
/// Yields exactly one item per input element, in input order.
pub struct Interactions<'a, T, F> {
    items: &'a [T],
    index: usize,
    interaction: F,
}

impl<'a, T, F> Interactions<'a, T, F> {
    /// Position of the next element to be interacted.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Input collection being mapped.
    pub fn items(&self) -> &'a [T] {
        self.items
    }
}

impl<'a, T, F, U> Iterator for Interactions<'a, T, F>
where
    F: FnMut(&'a T, Others<'a, T>) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let item = self.items.get(self.index)?;
        let others = Others::new(self.items, self.index)?;
        self.index += 1;
        Some((self.interaction)(item, others))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, T, F, U> ExactSizeIterator for Interactions<'a, T, F> where
    F: FnMut(&'a T, Others<'a, T>) -> U
{
}

impl<'a, T, F, U> FusedIterator for Interactions<'a, T, F> where
    F: FnMut(&'a T, Others<'a, T>) -> U
{
}

impl<T, F> fmt::Debug for Interactions<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interactions")
            .field("len", &self.items.len())
            .field("position", &self.index)
            .finish_non_exhaustive()
    }
}

/// Map every element of `items` against all the other elements.
///
/// For each index `i`, `interaction(&items[i], others)` is called where
/// `others` holds `items` with position `i` removed. The returned iterator
/// has the same length as `items` and item `i` derives from `items[i]`.
///
/// # Example
///
/// ```rust
/// use tetras_toolbox::interact;
///
/// let numbers = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let shares: Vec<f64> = interact(&numbers, |item, others| {
///     others.iter().sum::<f64>() / item
/// })
/// .collect();
///
/// assert_eq!(shares, vec![14.0, 6.5, 4.0, 2.75, 2.0]);
/// ```
pub fn interact<'a, T, F, U>(items: &'a [T], interaction: F) -> Interactions<'a, T, F>
where
    F: FnMut(&'a T, Others<'a, T>) -> U,
{
    Interactions {
        items,
        index: 0,
        interaction,
    }
}
