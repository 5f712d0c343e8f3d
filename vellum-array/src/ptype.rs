//! Physical types of the fixed-width values a [`PrimitiveVector`](crate::vectors::PrimitiveVector)
//! can hold.

use std::fmt::{Debug, Display, Formatter};

use num_traits::{FromPrimitive, Num, NumCast, ToPrimitive};

/// Physical type enum, represents the in-memory physical layout but might represent a different
/// logical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PType {
    /// An 8-bit unsigned integer
    U8,
    /// A 16-bit unsigned integer
    U16,
    /// A 32-bit unsigned integer
    U32,
    /// A 64-bit unsigned integer
    U64,
    /// An 8-bit signed integer
    I8,
    /// A 16-bit signed integer
    I16,
    /// A 32-bit signed integer
    I32,
    /// A 64-bit signed integer
    I64,
    /// A 32-bit floating point number
    F32,
    /// A 64-bit floating point number
    F64,
}

impl PType {
    /// Returns `true` iff this PType is an unsigned integer type
    pub const fn is_unsigned_int(self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }

    /// Returns `true` iff this PType is a signed integer type
    pub const fn is_signed_int(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Returns `true` iff this PType is an integer type, signed or unsigned
    pub const fn is_int(self) -> bool {
        self.is_unsigned_int() || self.is_signed_int()
    }

    /// Returns `true` iff this PType is a floating point type
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns the number of bytes in this PType
    pub const fn byte_width(&self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }
}

impl Display for PType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::I8 => write!(f, "i8"),
            Self::I16 => write!(f, "i16"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::F32 => write!(f, "f32"),
            Self::F64 => write!(f, "f64"),
        }
    }
}

/// A Rust type that can be stored in a [`PrimitiveVector`](crate::vectors::PrimitiveVector).
pub trait NativePType:
    Send
    + Sync
    + Clone
    + Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Num
    + NumCast
    + FromPrimitive
    + ToPrimitive
    + 'static
{
    /// The PType that corresponds to this native type
    const PTYPE: PType;

    /// Whether another instance of this type (`other`) is bitwise equal to `self`.
    ///
    /// Unlike `==`, NaN is equal to itself.
    fn is_eq(self, other: Self) -> bool;
}

macro_rules! native_ptype {
    ($T:ty, $ptype:tt) => {
        impl NativePType for $T {
            const PTYPE: PType = PType::$ptype;

            fn is_eq(self, other: Self) -> bool {
                self == other
            }
        }
    };
}

macro_rules! native_float_ptype {
    ($T:ty, $ptype:tt) => {
        impl NativePType for $T {
            const PTYPE: PType = PType::$ptype;

            fn is_eq(self, other: Self) -> bool {
                self.to_bits() == other.to_bits()
            }
        }
    };
}

native_ptype!(u8, U8);
native_ptype!(u16, U16);
native_ptype!(u32, U32);
native_ptype!(u64, U64);
native_ptype!(i8, I8);
native_ptype!(i16, I16);
native_ptype!(i32, I32);
native_ptype!(i64, I64);
native_float_ptype!(f32, F32);
native_float_ptype!(f64, F64);

#[cfg(test)]
mod test {
    use rstest::rstest;

    use crate::{NativePType, PType};

    #[rstest]
    #[case(PType::U8, 1, true)]
    #[case(PType::I16, 2, true)]
    #[case(PType::U32, 4, true)]
    #[case(PType::I64, 8, true)]
    #[case(PType::F32, 4, false)]
    #[case(PType::F64, 8, false)]
    fn width_and_kind(#[case] ptype: PType, #[case] width: usize, #[case] is_int: bool) {
        assert_eq!(ptype.byte_width(), width);
        assert_eq!(ptype.is_int(), is_int);
        assert_eq!(ptype.is_float(), !is_int);
    }

    #[test]
    fn nan_is_eq_to_itself() {
        assert!(f64::NAN.is_eq(f64::NAN));
        assert!(!0.0f32.is_eq(-0.0));
        assert!(7u16.is_eq(7));
    }

    #[test]
    fn ptype_display() {
        assert_eq!(<i8 as NativePType>::PTYPE.to_string(), "i8");
        assert_eq!(PType::F64.to_string(), "f64");
    }
}
