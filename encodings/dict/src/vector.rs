use vellum_array::{Data, Vector, VectorIter};
use vellum_error::{ResultExt, VellumResult};

use crate::{DictKey, DictionaryView};

impl<V: Vector, K: DictKey> Vector for DictionaryView<V, K> {
    type Value = V::Value;
    type Data = Data<K>;

    #[inline]
    fn len(&self) -> usize {
        self.indices().len()
    }

    /// Validity is decided by the indices alone; the dictionary is not consulted.
    #[inline]
    fn is_valid(&self, index: usize) -> bool {
        self.indices().is_valid(index)
    }

    /// Resolve the key at `index` through the dictionary.
    ///
    /// A null row is not special-cased: the key stored in its slot (usually 0) is resolved like
    /// any other, so callers that care about nulls must check [`Vector::is_valid`] first.
    #[inline]
    fn get(&self, index: usize) -> V::Value {
        self.dictionary().get(self.key_of(index))
    }

    fn try_get(&self, index: usize) -> VellumResult<V::Value> {
        let key = self.indices().try_get(index)?.as_key();
        self.dictionary()
            .try_get(key)
            .with_context(|| format!("resolving dictionary key {key} for row {index}"))
    }

    /// Write `value` into the dictionary entry that row `index` refers to.
    ///
    /// This rebinds the key, not the row: every row holding the same key reads `value`
    /// afterwards, as does every other view sharing this dictionary.
    fn set(&self, index: usize, value: V::Value) {
        let key = self.key_of(index);
        log::trace!("rebinding dictionary key {key} through row {index}");
        self.dictionary().set(key, value)
    }

    /// Find the first row whose value equals `value`.
    ///
    /// The value is looked up in the dictionary once, and the resulting key is then searched for
    /// among the indices, so no row is resolved through the dictionary. If the dictionary holds
    /// duplicates, only rows referencing the first matching key are found.
    fn index_of(&self, value: &V::Value) -> Option<usize> {
        let key = self.dictionary().index_of(value)?;
        let key = K::from_key(key)?;
        self.indices().index_of(&key)
    }

    /// A view over relocated key storage that keeps resolving through this view's dictionary.
    fn clone_with(&self, data: Data<K>) -> Self {
        log::debug!(
            "re-pointing dictionary view of {} rows at {} relocated keys",
            self.len(),
            data.len()
        );
        Self::from_shared(
            self.shared_dictionary().clone(),
            self.indices().clone_with(data),
        )
    }

    fn null_count(&self) -> usize {
        self.indices().null_count()
    }
}

impl<'a, V: Vector, K: DictKey> IntoIterator for &'a DictionaryView<V, K> {
    type Item = V::Value;
    type IntoIter = VectorIter<'a, DictionaryView<V, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
