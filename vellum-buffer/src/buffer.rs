use std::fmt::{Debug, Formatter};
use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use parking_lot::RwLock;
use vellum_error::{VellumResult, vellum_bail, vellum_err, vellum_panic};

/// A window of `length` elements, starting at `offset`, over storage shared between handles.
///
/// Element access takes a short-lived lock on the storage. No lock is held between calls.
pub struct Buffer<T> {
    storage: Arc<RwLock<Vec<T>>>,
    offset: usize,
    length: usize,
}

impl<T> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            offset: self.offset,
            length: self.length,
        }
    }
}

impl<T> Buffer<T> {
    /// Create a new empty buffer.
    pub fn empty() -> Self {
        Self::from(Vec::new())
    }

    /// Create a buffer of `len` copies of `item`.
    pub fn full(item: T, len: usize) -> Self
    where
        T: Clone,
    {
        Self::from(vec![item; len])
    }

    /// Returns the length of the buffer in elements of type T.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns whether the buffer is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a copy of the element at `index`.
    ///
    /// ## Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn value(&self, index: usize) -> T
    where
        T: Clone,
    {
        if index >= self.length {
            vellum_panic!(OutOfBounds: index, 0, self.length);
        }
        self.storage.read()[self.offset + index].clone()
    }

    /// Returns a copy of the element at `index`, or an error if it is out of bounds.
    pub fn try_value(&self, index: usize) -> VellumResult<T>
    where
        T: Clone,
    {
        if index >= self.length {
            vellum_bail!(OutOfBounds: index, 0, self.length);
        }
        Ok(self.value(index))
    }

    /// Overwrite the element at `index`.
    ///
    /// The write is visible through every handle that shares this buffer's storage.
    ///
    /// ## Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    pub fn set(&self, index: usize, value: T) {
        if index >= self.length {
            vellum_panic!(OutOfBounds: index, 0, self.length);
        }
        let mut guard = self.storage.write();
        guard[self.offset + index] = value;
    }

    /// Returns the position of the first element within the window that satisfies `predicate`.
    ///
    /// The storage is read-locked while `predicate` runs, so it must not write to this buffer or
    /// any handle sharing its storage.
    pub fn position<P: FnMut(&T) -> bool>(&self, predicate: P) -> Option<usize> {
        let guard = self.storage.read();
        guard[self.offset..self.offset + self.length]
            .iter()
            .position(predicate)
    }

    /// Return a new handle over a sub-range of this buffer. No elements are copied, so the new
    /// handle aliases the same storage.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> VellumResult<Self> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1).ok_or_else(|| {
                vellum_err!("Slice start bound excludes {}, leaving no start index", s)
            })?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e
                .checked_add(1)
                .ok_or_else(|| vellum_err!(OutOfBounds: e, 0, self.length))?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.length,
        };

        if start > end {
            vellum_bail!("Slice start {} must be less than or equal to end {}", start, end);
        }
        if end > self.length {
            vellum_bail!(OutOfBounds: end, 0, self.length);
        }

        Ok(Self {
            storage: self.storage.clone(),
            offset: self.offset + start,
            length: end - start,
        })
    }

    /// Copy the elements of this window into new storage that no other handle references.
    pub fn relocate(&self) -> Self
    where
        T: Clone,
    {
        Self::from(self.to_vec())
    }

    /// Copy the elements of this window into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let guard = self.storage.read();
        guard[self.offset..self.offset + self.length].to_vec()
    }

    /// Returns true if both handles point at the same underlying storage, regardless of window.
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }
}

impl<T> From<Vec<T>> for Buffer<T> {
    fn from(value: Vec<T>) -> Self {
        let length = value.len();
        Self {
            storage: Arc::new(RwLock::new(value)),
            offset: 0,
            length,
        }
    }
}

impl<T> FromIterator<T> for Buffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Debug> Debug for Buffer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let guard = self.storage.read();
        f.debug_struct("Buffer")
            .field("offset", &self.offset)
            .field("length", &self.length)
            .field("values", &&guard[self.offset..self.offset + self.length])
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        if self.shares_storage(other) {
            if self.offset == other.offset {
                return true;
            }
            // A second read guard on the same lock can deadlock against a queued writer.
            let guard = self.storage.read();
            return guard[self.offset..self.offset + self.length]
                == guard[other.offset..other.offset + other.length];
        }
        let lhs = self.storage.read();
        let rhs = other.storage.read();
        lhs[self.offset..self.offset + self.length]
            == rhs[other.offset..other.offset + other.length]
    }
}

#[cfg(test)]
mod test {
    use std::ops::Bound;

    use rstest::rstest;

    use crate::{Buffer, buffer};

    #[test]
    fn clone_aliases_storage() {
        let buf = buffer![1u32, 2, 3];
        let alias = buf.clone();
        alias.set(1, 42);
        assert_eq!(buf.value(1), 42);
        assert!(buf.shares_storage(&alias));
    }

    #[test]
    fn relocate_detaches_storage() {
        let buf = buffer![1u32, 2, 3];
        let relocated = buf.relocate();
        relocated.set(0, 9);
        assert_eq!(buf.to_vec(), vec![1, 2, 3]);
        assert_eq!(relocated.to_vec(), vec![9, 2, 3]);
        assert!(!buf.shares_storage(&relocated));
    }

    #[test]
    fn slice_is_zero_copy() {
        let buf: Buffer<i64> = (0..10).collect();
        let sliced = buf.slice(3..6).unwrap();
        assert_eq!(sliced.to_vec(), vec![3, 4, 5]);
        sliced.set(0, -3);
        assert_eq!(buf.value(3), -3);

        let nested = sliced.slice(1..).unwrap();
        assert_eq!(nested.to_vec(), vec![4, 5]);
        assert_eq!(nested.position(|v| *v == 5), Some(1));
    }

    #[rstest]
    #[case(2..4)]
    #[case(0..0)]
    #[case(4..4)]
    fn slice_within_bounds(#[case] range: std::ops::Range<usize>) {
        let buf = buffer![0u8; 4];
        assert!(buf.slice(range).is_ok());
    }

    #[test]
    fn slice_rejects_out_of_bounds() {
        let buf = buffer![0u8; 4];
        assert!(buf.slice(2..5).is_err());
        assert!(buf.try_value(4).is_err());
        assert_eq!(buf.try_value(3).unwrap(), 0);
    }

    #[test]
    fn slice_inclusive_end_at_usize_max() {
        let buf = buffer![0u8; 4];
        assert!(buf.slice(..=usize::MAX).is_err());
        assert!(buf.slice(1..=3).is_ok());
        assert!(buf.slice((Bound::Excluded(usize::MAX), Bound::Unbounded)).is_err());
    }

    #[test]
    #[should_panic(expected = "index 3 out of bounds from 0 to 3")]
    fn set_out_of_bounds() {
        buffer![1u16, 2, 3].set(3, 0);
    }

    #[test]
    fn equality_compares_windows() {
        let buf: Buffer<u32> = (0..6).collect();
        let copy = buffer![2u32, 3];
        assert_eq!(buf.slice(2..4).unwrap(), copy);
        assert_ne!(buf.slice(1..3).unwrap(), copy);
    }
}
