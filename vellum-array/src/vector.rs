use std::fmt::Debug;

use vellum_error::{VellumResult, vellum_bail};

use crate::iter::VectorIter;

/// The capability every column view offers: row-wise read, write, search and iteration.
///
/// A vector is a handle over storage that may be shared. Writes go through `&self` and are
/// observed by every handle over the same storage.
///
/// Row indices passed to [`Vector::get`] and [`Vector::set`] must be in `0..len()`; what happens
/// otherwise is up to the implementation (the vectors in this crate panic). Use
/// [`Vector::try_get`] for a checked read.
pub trait Vector: Debug + Send + Sync {
    /// The logical value of a single row.
    type Value;

    /// Replacement storage accepted by [`Vector::clone_with`].
    type Data;

    /// The number of rows.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_valid(&self, index: usize) -> bool;

    /// The value stored at `index`. Null rows still return whatever occupies their slot.
    fn get(&self, index: usize) -> Self::Value;

    fn try_get(&self, index: usize) -> VellumResult<Self::Value> {
        if index >= self.len() {
            vellum_bail!(OutOfBounds: index, 0, self.len());
        }
        Ok(self.get(index))
    }

    fn set(&self, index: usize, value: Self::Value);

    /// The first row whose value equals `value`. Validity is not consulted.
    fn index_of(&self, value: &Self::Value) -> Option<usize>;

    /// A new vector of the same kind over `data`, sharing nothing with `self` that `data` does
    /// not already share.
    fn clone_with(&self, data: Self::Data) -> Self
    where
        Self: Sized;

    fn null_count(&self) -> usize {
        (0..self.len()).filter(|&index| !self.is_valid(index)).count()
    }

    /// A lazy pass over every row, starting from row 0.
    fn iter(&self) -> VectorIter<'_, Self>
    where
        Self: Sized,
    {
        VectorIter::new(self)
    }

    /// Materialize every row, in order.
    fn to_vec(&self) -> Vec<Self::Value>
    where
        Self: Sized,
    {
        self.iter().collect()
    }
}
