use rug::Float;
use rug::float::Constant;
use std::ops::{Add, Div, Mul, Sub};

/// Significant bits carried by every [`ExtendedReal`], the width of IEEE binary128.
pub const EXTENDED_PRECISION_BITS: u32 = 113;

/// A real scalar with quad-like precision.
///
/// Every value is created at [`EXTENDED_PRECISION_BITS`] and every operation
/// below rounds to that same width, so nothing narrows to `f64` unless
/// [`ExtendedReal::to_f64`] is called explicitly.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct ExtendedReal(Float);

impl ExtendedReal {
    #[must_use]
    pub fn zero() -> Self {
        Self(Float::new(EXTENDED_PRECISION_BITS))
    }

    #[must_use]
    pub fn ln_two() -> Self {
        Self(Float::with_val(EXTENDED_PRECISION_BITS, Constant::Log2))
    }

    /// Natural logarithm.
    #[must_use]
    pub fn ln(&self) -> Self {
        Self(Float::with_val(EXTENDED_PRECISION_BITS, self.0.ln_ref()))
    }

    #[must_use]
    pub fn square(&self) -> Self {
        Self(Float::with_val(EXTENDED_PRECISION_BITS, self.0.square_ref()))
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Narrows to the nearest `f64`. Only for output scalars.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    #[must_use]
    pub fn precision(&self) -> u32 {
        self.0.prec()
    }
}

impl From<f64> for ExtendedReal {
    fn from(value: f64) -> Self {
        Self(Float::with_val(EXTENDED_PRECISION_BITS, value))
    }
}

impl From<i64> for ExtendedReal {
    fn from(value: i64) -> Self {
        Self(Float::with_val(EXTENDED_PRECISION_BITS, value))
    }
}

impl From<u32> for ExtendedReal {
    fn from(value: u32) -> Self {
        Self(Float::with_val(EXTENDED_PRECISION_BITS, value))
    }
}

// Owned operands reuse the left-hand allocation; borrowed operands allocate
// a fresh value at the extended width.
macro_rules! extended_binary_op {
    ($op:ident, $method:ident) => {
        impl $op for ExtendedReal {
            type Output = ExtendedReal;

            fn $method(self, rhs: ExtendedReal) -> ExtendedReal {
                ExtendedReal(self.0.$method(rhs.0))
            }
        }

        impl<'b> $op<&'b ExtendedReal> for ExtendedReal {
            type Output = ExtendedReal;

            fn $method(self, rhs: &'b ExtendedReal) -> ExtendedReal {
                ExtendedReal(self.0.$method(&rhs.0))
            }
        }

        impl<'a, 'b> $op<&'b ExtendedReal> for &'a ExtendedReal {
            type Output = ExtendedReal;

            fn $method(self, rhs: &'b ExtendedReal) -> ExtendedReal {
                ExtendedReal(Float::with_val(
                    EXTENDED_PRECISION_BITS,
                    (&self.0).$method(&rhs.0),
                ))
            }
        }
    };
}

extended_binary_op!(Add, add);
extended_binary_op!(Sub, sub);
extended_binary_op!(Mul, mul);
extended_binary_op!(Div, div);
