use num_traits::{AsPrimitive, PrimInt};
use vellum_array::NativePType;

/// A fixed-width integer type usable as a dictionary key.
///
/// Signed keys are accepted for interoperability. A negative key never addresses a dictionary
/// entry; it resolves to an index far past the end of any dictionary.
pub trait DictKey: NativePType + PrimInt + AsPrimitive<usize> {
    /// The dictionary position this key addresses.
    #[inline]
    fn as_key(self) -> usize {
        self.as_()
    }

    /// The key for dictionary position `position`, if it is representable in `Self`.
    #[inline]
    fn from_key(position: usize) -> Option<Self> {
        num_traits::cast(position)
    }
}

impl DictKey for u8 {}
impl DictKey for u16 {}
impl DictKey for u32 {}
impl DictKey for u64 {}
impl DictKey for i8 {}
impl DictKey for i16 {}
impl DictKey for i32 {}
impl DictKey for i64 {}

#[cfg(test)]
mod test {
    use crate::DictKey;

    #[test]
    fn representable_keys() {
        assert_eq!(u8::from_key(255), Some(255));
        assert_eq!(u8::from_key(256), None);
        assert_eq!(i8::from_key(128), None);
        assert_eq!(i64::from_key(9), Some(9));
        assert_eq!(7u16.as_key(), 7);
    }
}
