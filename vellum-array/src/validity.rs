//! Row validity (the null bitmap) of a vector.

use arrow_buffer::{BooleanBuffer, BooleanBufferBuilder};
use vellum_error::vellum_panic;

/// Validity information for a vector
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validity {
    /// Items *can't* be null
    NonNullable,
    /// All items are valid
    AllValid,
    /// All items are null
    AllInvalid,
    /// Specified items are null, one bit per row
    Array(BooleanBuffer),
}

impl Validity {
    /// The length this validity is bound to, if it carries a bitmap.
    pub fn maybe_len(&self) -> Option<usize> {
        match self {
            Self::Array(buffer) => Some(buffer.len()),
            _ => None,
        }
    }

    /// Returns whether the `index` item is valid.
    ///
    /// Bounds are the caller's responsibility; only the bitmap variant can detect an
    /// out-of-range index.
    #[inline]
    pub fn is_valid(&self, index: usize) -> bool {
        match self {
            Self::NonNullable | Self::AllValid => true,
            Self::AllInvalid => false,
            Self::Array(buffer) => {
                if index >= buffer.len() {
                    vellum_panic!(OutOfBounds: index, 0, buffer.len());
                }
                buffer.value(index)
            }
        }
    }

    #[inline]
    pub fn is_null(&self, index: usize) -> bool {
        !self.is_valid(index)
    }

    /// The number of null rows among `length` rows.
    pub fn null_count(&self, length: usize) -> usize {
        match self {
            Self::NonNullable | Self::AllValid => 0,
            Self::AllInvalid => length,
            Self::Array(buffer) => buffer.len() - buffer.count_set_bits(),
        }
    }

    /// Narrow the validity to rows `start..stop`. The caller checks the range against the
    /// values it describes.
    pub fn slice(&self, start: usize, stop: usize) -> Self {
        match self {
            Self::Array(buffer) => Self::Array(buffer.slice(start, stop - start)),
            _ => self.clone(),
        }
    }

    /// Build validity from per-row flags, keeping the bitmap only when it carries information.
    pub fn from_flags(flags: impl IntoIterator<Item = bool>) -> Self {
        let flags = flags.into_iter();
        let mut builder = BooleanBufferBuilder::new(flags.size_hint().0);
        for valid in flags {
            builder.append(valid);
        }
        Self::from(builder.finish())
    }
}

impl From<BooleanBuffer> for Validity {
    fn from(value: BooleanBuffer) -> Self {
        if value.count_set_bits() == value.len() {
            Self::AllValid
        } else if value.count_set_bits() == 0 {
            Self::AllInvalid
        } else {
            Self::Array(value)
        }
    }
}

#[cfg(test)]
mod test {
    use arrow_buffer::BooleanBuffer;
    use rstest::rstest;

    use crate::validity::Validity;

    #[rstest]
    #[case(Validity::NonNullable, 0)]
    #[case(Validity::AllValid, 0)]
    #[case(Validity::AllInvalid, 5)]
    #[case(Validity::from_flags([true, false, true, false, false]), 3)]
    fn null_count(#[case] validity: Validity, #[case] expected: usize) {
        assert_eq!(validity.null_count(5), expected);
    }

    #[test]
    fn bitmap_collapses_when_uniform() {
        assert_eq!(Validity::from_flags([true, true]), Validity::AllValid);
        assert_eq!(Validity::from_flags([false, false]), Validity::AllInvalid);
        assert_eq!(
            Validity::from(BooleanBuffer::from(vec![true, false])),
            Validity::Array(BooleanBuffer::from(vec![true, false]))
        );
    }

    #[test]
    fn slice_bitmap() {
        let validity = Validity::from_flags([true, false, false, true, true]);
        let sliced = validity.slice(2, 5);
        assert_eq!(sliced.maybe_len(), Some(3));
        assert!(sliced.is_null(0));
        assert!(sliced.is_valid(1));
        assert!(sliced.is_valid(2));
    }

    #[test]
    #[should_panic(expected = "index 2 out of bounds from 0 to 2")]
    fn bitmap_out_of_bounds() {
        Validity::from_flags([true, false]).is_valid(2);
    }
}
