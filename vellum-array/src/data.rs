use vellum_buffer::Buffer;
use vellum_error::{VellumResult, vellum_bail};

use crate::validity::Validity;

/// The backing storage of a vector: a window of values plus the validity of each row.
///
/// `Data` is a handle. Cloning it, or slicing it, shares the value storage; use
/// [`Data::relocate`] to obtain storage that no other handle observes.
#[derive(Clone, Debug, PartialEq)]
pub struct Data<T> {
    buffer: Buffer<T>,
    validity: Validity,
}

impl<T> Data<T> {
    pub fn try_new(buffer: Buffer<T>, validity: Validity) -> VellumResult<Self> {
        if let Some(len) = validity.maybe_len() {
            if buffer.len() != len {
                vellum_bail!(
                    "Buffer and validity length mismatch: buffer={}, validity={}",
                    buffer.len(),
                    len
                );
            }
        }
        Ok(Self { buffer, validity })
    }

    /// Storage whose rows can never be null.
    pub fn non_nullable(buffer: Buffer<T>) -> Self {
        Self {
            buffer,
            validity: Validity::NonNullable,
        }
    }

    /// Collect optional values, storing `T::default()` in the slot of every `None`.
    pub fn from_option_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self
    where
        T: Default,
    {
        let iter = iter.into_iter();
        let mut values = Vec::with_capacity(iter.size_hint().0);
        let mut flags = Vec::with_capacity(iter.size_hint().0);
        for item in iter {
            flags.push(item.is_some());
            values.push(item.unwrap_or_default());
        }
        Self {
            buffer: Buffer::from(values),
            validity: Validity::from_flags(flags),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn buffer(&self) -> &Buffer<T> {
        &self.buffer
    }

    #[inline]
    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    #[inline]
    pub fn is_valid(&self, index: usize) -> bool {
        self.validity.is_valid(index)
    }

    /// A zero-copy window over rows `start..stop`.
    pub fn slice(&self, start: usize, stop: usize) -> VellumResult<Self> {
        let buffer = self.buffer.slice(start..stop)?;
        Ok(Self {
            buffer,
            validity: self.validity.slice(start, stop),
        })
    }

    /// Copy the values into fresh storage. Validity is immutable and is shared as-is.
    pub fn relocate(&self) -> Self
    where
        T: Clone,
    {
        log::trace!("relocating {} rows into new storage", self.len());
        Self {
            buffer: self.buffer.relocate(),
            validity: self.validity.clone(),
        }
    }
}

impl<T> From<Buffer<T>> for Data<T> {
    fn from(value: Buffer<T>) -> Self {
        Self::non_nullable(value)
    }
}
