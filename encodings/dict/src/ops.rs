use vellum_array::Vector;
use vellum_error::VellumResult;

use crate::{DictKey, DictionaryView};

impl<V: Vector, K: DictKey> DictionaryView<V, K> {
    /// Rows `start..stop` as a new view. Key storage is shared with `self` and the dictionary is
    /// reused whole, so keys keep their meaning.
    pub fn slice(&self, start: usize, stop: usize) -> VellumResult<Self> {
        Ok(self.clone_with(self.indices().data().slice(start, stop)?))
    }

    /// A view over a private copy of the keys, still resolving through the shared dictionary.
    pub fn relocate(&self) -> Self {
        self.clone_with(self.indices().data().relocate())
    }
}

#[cfg(test)]
mod test {
    use vellum_array::Vector;
    use vellum_array::vectors::{PrimitiveVector, Utf8Vector};

    use crate::DictionaryView;

    fn weekdays() -> DictionaryView<Utf8Vector, u8> {
        DictionaryView::new(
            Utf8Vector::from_iter(["mon", "tue", "wed"]),
            PrimitiveVector::from_option_iter([Some(0u8), Some(2), None, Some(1), Some(2)]),
        )
    }

    #[test]
    fn slice_shares_keys_and_dictionary() {
        let view = weekdays();
        let sliced = view.slice(1, 4).unwrap();
        assert_eq!(sliced.len(), 3);
        assert_eq!(sliced.to_vec(), vec!["wed", "mon", "tue"]);
        assert!(!sliced.is_valid(1));
        assert!(sliced.shares_dictionary(&view));

        sliced.indices().set(0, 1);
        assert_eq!(view.get(1), "tue");
        assert_eq!(sliced.index_of(&"tue".to_string()), Some(0));
    }

    #[test]
    fn slice_out_of_bounds() {
        let view = weekdays();
        assert!(view.slice(3, 6).is_err());
        assert!(view.slice(5, 5).unwrap().is_empty());
    }

    #[test]
    fn relocate_detaches_keys() {
        let view = weekdays();
        let moved = view.relocate();
        moved.indices().set(0, 1);
        assert_eq!(view.get(0), "mon");
        assert_eq!(moved.get(0), "tue");

        moved.set(4, "thu".to_string());
        assert_eq!(view.get(1), "thu");
    }
}
