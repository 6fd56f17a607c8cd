use crate::core::data::extended_real::ExtendedReal;
use std::ops::{Add, Mul, Sub};

/// A complex number whose parts are both [`ExtendedReal`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedComplex {
    pub real: ExtendedReal,
    pub imag: ExtendedReal,
}

impl ExtendedComplex {
    #[must_use]
    pub fn new(real: ExtendedReal, imag: ExtendedReal) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self {
            real: ExtendedReal::zero(),
            imag: ExtendedReal::zero(),
        }
    }

    #[must_use]
    pub fn from_f64(real: f64, imag: f64) -> Self {
        Self {
            real: ExtendedReal::from(real),
            imag: ExtendedReal::from(imag),
        }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> ExtendedReal {
        self.real.square() + self.imag.square()
    }

    /// `(re² - im², 2·re·im)`
    #[must_use]
    pub fn square(&self) -> Self {
        let real = self.real.square() - self.imag.square();
        let real_imag = &self.real * &self.imag;
        let imag = &real_imag + &real_imag;

        Self { real, imag }
    }
}

impl<'a, 'b> Add<&'b ExtendedComplex> for &'a ExtendedComplex {
    type Output = ExtendedComplex;

    fn add(self, other: &'b ExtendedComplex) -> ExtendedComplex {
        ExtendedComplex {
            real: &self.real + &other.real,
            imag: &self.imag + &other.imag,
        }
    }
}

impl<'a, 'b> Sub<&'b ExtendedComplex> for &'a ExtendedComplex {
    type Output = ExtendedComplex;

    fn sub(self, other: &'b ExtendedComplex) -> ExtendedComplex {
        ExtendedComplex {
            real: &self.real - &other.real,
            imag: &self.imag - &other.imag,
        }
    }
}

impl<'a, 'b> Mul<&'b ExtendedComplex> for &'a ExtendedComplex {
    type Output = ExtendedComplex;

    fn mul(self, other: &'b ExtendedComplex) -> ExtendedComplex {
        ExtendedComplex {
            real: &self.real * &other.real - &self.imag * &other.imag,
            imag: &self.real * &other.imag + &self.imag * &other.real,
        }
    }
}

impl Add for ExtendedComplex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for ExtendedComplex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for ExtendedComplex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        &self * &other
    }
}
