use std::iter::FusedIterator;

use crate::Vector;

/// Pull-based iterator over the rows of a [`Vector`].
///
/// Each value is resolved only when requested. Dropping the iterator part way through has no
/// effect on the vector.
pub struct VectorIter<'a, V: Vector> {
    vector: &'a V,
    front: usize,
    back: usize,
}

impl<'a, V: Vector> VectorIter<'a, V> {
    pub fn new(vector: &'a V) -> Self {
        Self {
            vector,
            front: 0,
            back: vector.len(),
        }
    }
}

impl<V: Vector> Iterator for VectorIter<'_, V> {
    type Item = V::Value;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.vector.get(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<V: Vector> DoubleEndedIterator for VectorIter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.vector.get(self.back))
    }
}

impl<V: Vector> ExactSizeIterator for VectorIter<'_, V> {}

impl<V: Vector> FusedIterator for VectorIter<'_, V> {}

#[cfg(test)]
mod test {
    use crate::Vector;
    use crate::vectors::PrimitiveVector;

    #[test]
    fn restartable() {
        let vector = PrimitiveVector::from_iter([3u8, 1, 4, 1, 5]);
        let first: Vec<u8> = vector.iter().collect();
        let second: Vec<u8> = vector.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vector.to_vec());
    }

    #[test]
    fn abandon_early() {
        let vector = PrimitiveVector::from_iter([3u8, 1, 4, 1, 5]);
        let mut iter = vector.iter();
        assert_eq!(iter.next(), Some(3));
        assert_eq!(iter.len(), 4);
        drop(iter);
        assert_eq!(vector.iter().len(), 5);
    }

    #[test]
    fn from_both_ends() {
        let vector = PrimitiveVector::from_iter([10i32, 20, 30]);
        let mut iter = vector.iter();
        assert_eq!(iter.next_back(), Some(30));
        assert_eq!(iter.nth(1), Some(20));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(vector.iter().rev().collect::<Vec<_>>(), vec![30, 20, 10]);
    }
}
