use std::sync::Arc;

use vellum_array::Vector;
use vellum_array::vectors::PrimitiveVector;
use vellum_error::{VellumResult, vellum_err};

use crate::DictKey;

/// A dictionary-encoded column: a vector of integer keys (`indices`) resolved through a vector
/// of values (`dictionary`).
///
/// The view owns no values. Both members are handles over storage shared with the rest of the
/// column: the dictionary is held behind an [`Arc`] so every view derived from this one resolves
/// keys against the very same dictionary, and the indices are a [`PrimitiveVector`] handle over
/// the column's key storage.
///
/// Every valid row must hold a key in `0..dictionary.len()`. [`DictionaryView::new`] trusts the
/// caller; [`DictionaryView::try_new`] checks.
///
/// Writes through [`Vector::set`] rebind a dictionary entry rather than a single cell: every row
/// holding the same key observes the new value.
#[derive(Debug)]
pub struct DictionaryView<V, K = u32> {
    dictionary: Arc<V>,
    indices: PrimitiveVector<K>,
}

impl<V, K: Clone> Clone for DictionaryView<V, K> {
    /// A second handle onto the same dictionary and the same key storage. Writes to the keys
    /// through either handle are seen by both; use [`DictionaryView::relocate`] or
    /// [`Vector::clone_with`] for a view whose keys are independent.
    fn clone(&self) -> Self {
        Self {
            dictionary: self.dictionary.clone(),
            indices: self.indices.clone(),
        }
    }
}

impl<V: Vector, K: DictKey> DictionaryView<V, K> {
    pub fn new(dictionary: V, indices: PrimitiveVector<K>) -> Self {
        Self::from_shared(Arc::new(dictionary), indices)
    }

    /// Build a view over a dictionary that other views may already be using.
    pub fn from_shared(dictionary: Arc<V>, indices: PrimitiveVector<K>) -> Self {
        Self {
            dictionary,
            indices,
        }
    }

    /// Like [`DictionaryView::new`], but rejects any valid row whose key does not address a
    /// dictionary entry.
    pub fn try_new(dictionary: V, indices: PrimitiveVector<K>) -> VellumResult<Self> {
        let view = Self::new(dictionary, indices);
        view.validate()?;
        Ok(view)
    }

    /// Check that every valid row holds a key in `0..dictionary.len()`.
    pub fn validate(&self) -> VellumResult<()> {
        let dictionary_len = self.dictionary.len();
        for row in 0..self.indices.len() {
            if !self.indices.is_valid(row) {
                continue;
            }
            let key = self.key_of(row);
            if key >= dictionary_len {
                log::debug!(
                    "row {} of {} holds dangling dictionary key {}",
                    row,
                    self.indices.len(),
                    key
                );
                return Err(vellum_err!(OutOfBounds: key, 0, dictionary_len)
                    .with_context(format!("dictionary key at row {row}")));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn dictionary(&self) -> &V {
        &self.dictionary
    }

    /// The shared handle to the dictionary.
    #[inline]
    pub fn shared_dictionary(&self) -> &Arc<V> {
        &self.dictionary
    }

    #[inline]
    pub fn indices(&self) -> &PrimitiveVector<K> {
        &self.indices
    }

    /// The dictionary position row `index` resolves to. Null rows yield whatever key their slot
    /// holds.
    #[inline]
    pub fn key_of(&self, index: usize) -> usize {
        self.indices.get(index).as_key()
    }

    /// Whether both views resolve keys through the same dictionary instance.
    pub fn shares_dictionary(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.dictionary, &other.dictionary)
    }

    pub fn into_parts(self) -> (Arc<V>, PrimitiveVector<K>) {
        (self.dictionary, self.indices)
    }
}
