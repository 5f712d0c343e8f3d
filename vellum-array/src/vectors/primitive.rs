use vellum_buffer::Buffer;
use vellum_error::VellumResult;

use crate::validity::Validity;
use crate::{Data, NativePType, PType, Vector};

/// A vector of fixed-width native values.
#[derive(Clone, Debug)]
pub struct PrimitiveVector<T> {
    data: Data<T>,
}

impl<T: NativePType> PrimitiveVector<T> {
    pub fn try_new(buffer: impl Into<Buffer<T>>, validity: Validity) -> VellumResult<Self> {
        Data::try_new(buffer.into(), validity).map(Self::from)
    }

    /// Create a PrimitiveVector from an iterator of `Option<T>`; `None` rows are null and hold
    /// `T::default()`.
    pub fn from_option_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self::from(Data::from_option_iter(iter))
    }

    pub fn ptype(&self) -> PType {
        T::PTYPE
    }

    pub fn data(&self) -> &Data<T> {
        &self.data
    }

    pub fn buffer(&self) -> &Buffer<T> {
        self.data.buffer()
    }

    pub fn validity(&self) -> &Validity {
        self.data.validity()
    }
}

impl<T: NativePType> From<Data<T>> for PrimitiveVector<T> {
    fn from(data: Data<T>) -> Self {
        Self { data }
    }
}

impl<T: NativePType> FromIterator<T> for PrimitiveVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(Data::non_nullable(iter.into_iter().collect()))
    }
}

impl<T: NativePType> Vector for PrimitiveVector<T> {
    type Value = T;
    type Data = Data<T>;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn is_valid(&self, index: usize) -> bool {
        self.data.is_valid(index)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self.data.buffer().value(index)
    }

    fn try_get(&self, index: usize) -> VellumResult<T> {
        self.data.buffer().try_value(index)
    }

    #[inline]
    fn set(&self, index: usize, value: T) {
        self.data.buffer().set(index, value)
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        let value = *value;
        self.data.buffer().position(|v| v.is_eq(value))
    }

    fn clone_with(&self, data: Data<T>) -> Self {
        Self::from(data)
    }

    fn null_count(&self) -> usize {
        self.data.validity().null_count(self.len())
    }
}
