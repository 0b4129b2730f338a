//! Borrowed view of a collection with one element left out.

use std::fmt;
use std::iter::Chain;
use std::ops::Index;
use std::slice;

/// Iterator over the elements of an [`Others`] view, in original order.
pub type Iter<'a, T> = Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

/// Every element of a slice except the one at a single excluded index.
///
/// Relative order is preserved and exactly one position is skipped, so
/// duplicates of the excluded value elsewhere in the slice remain visible.
/// The view borrows the slice; [`to_vec`](Self::to_vec) materialises it.
///
/// # Example
///
/// ```rust
/// use tetras_toolbox::Others;
///
/// let items = [7, 3, 7, 1];
/// let others = Others::new(&items, 0).unwrap();
///
/// assert_eq!(others.len(), 3);
/// assert_eq!(others.to_vec(), vec![3, 7, 1]);
/// ```
pub struct Others<'a, T> {
    items: &'a [T],
    excluded: usize,
}

impl<'a, T> Others<'a, T> {
    /// View of `items` without position `excluded`, or `None` when the
    /// index is out of bounds.
    pub fn new(items: &'a [T], excluded: usize) -> Option<Self> {
        (excluded < items.len()).then_some(Self { items, excluded })
    }

    /// Position left out of the view.
    pub fn excluded_index(&self) -> usize {
        self.excluded
    }

    /// The element left out of the view.
    pub fn excluded(&self) -> &'a T {
        &self.items[self.excluded]
    }

    pub fn len(&self) -> usize {
        self.items.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index` within the view (not within the full slice).
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < self.excluded {
            self.items.get(index)
        } else {
            self.items.get(index + 1)
        }
    }

    /// Elements before the excluded position.
    pub fn before(&self) -> &'a [T] {
        &self.items[..self.excluded]
    }

    /// Elements after the excluded position.
    pub fn after(&self) -> &'a [T] {
        &self.items[self.excluded + 1..]
    }

    pub fn iter(&self) -> Iter<'a, T> {
        self.before().iter().chain(self.after().iter())
    }

    /// Copy the view into an owned vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for Others<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Others<'_, T> {}

impl<T> Index<usize> for Others<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index {index} out of bounds for view of length {}",
                self.len()
            ),
        }
    }
}

impl<'a, T> IntoIterator for Others<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Others<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq<[T]> for Others<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Others<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_bounds_index() {
        assert!(Others::new(&[1, 2, 3], 3).is_none());
        assert!(Others::<i32>::new(&[], 0).is_none());
    }

    #[test]
    fn skips_exactly_one_position() {
        let items = ['a', 'b', 'c', 'd'];

        for excluded in 0..items.len() {
            let others = Others::new(&items, excluded).unwrap();
            let mut expected = items.to_vec();
            expected.remove(excluded);

            assert_eq!(others.to_vec(), expected);
            assert_eq!(others.excluded(), &items[excluded]);
        }
    }

    #[test]
    fn keeps_duplicates_of_excluded_value() {
        let items = [2, 2, 2];
        let others = Others::new(&items, 1).unwrap();

        assert_eq!(others.to_vec(), vec![2, 2]);
    }

    #[test]
    fn single_element_view_is_empty() {
        let others = Others::new(&[42], 0).unwrap();

        assert!(others.is_empty());
        assert_eq!(others.iter().count(), 0);
        assert_eq!(others.get(0), None);
    }

    #[test]
    fn get_maps_view_positions_around_gap() {
        let items = [10, 20, 30, 40];
        let others = Others::new(&items, 1).unwrap();

        assert_eq!(others.get(0), Some(&10));
        assert_eq!(others.get(1), Some(&30));
        assert_eq!(others.get(2), Some(&40));
        assert_eq!(others.get(3), None);
        assert_eq!(others[2], 40);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_past_end() {
        let items = [1, 2];
        let others = Others::new(&items, 0).unwrap();
        let _value = others[1];
    }

    #[test]
    fn before_and_after_split_at_gap() {
        let items = [1, 2, 3, 4, 5];
        let others = Others::new(&items, 2).unwrap();

        assert_eq!(others.before(), &[1, 2]);
        assert_eq!(others.after(), &[4, 5]);
        assert_eq!(others.excluded_index(), 2);
    }

    #[test]
    fn compares_against_slices() {
        let items = [1, 2, 3];
        let others = Others::new(&items, 0).unwrap();

        assert!(others == [2, 3][..]);
        assert!(others != [1, 2][..]);
    }

    #[test]
    fn debug_renders_as_list() {
        let items = [1, 2, 3];
        let others = Others::new(&items, 1).unwrap();

        assert_eq!(format!("{others:?}"), "[1, 3]");
    }

    #[test]
    fn iterates_by_reference_and_value() {
        let items = [1, 2, 3, 4];
        let others = Others::new(&items, 3).unwrap();

        let by_ref: i32 = (&others).into_iter().sum();
        let by_value: i32 = others.into_iter().sum();
        assert_eq!(by_ref, 6);
        assert_eq!(by_value, 6);
    }
}
