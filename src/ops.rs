//! Arithmetic on [`Vector`].
//!
//! Binary operators between two vectors return a [`Result`], since their
//! dimensions are only known at runtime:
//!
//! ```
//! use euclid_vector::Vector;
//!
//! let a = Vector::from(vec![1.0, 2.0]);
//! let b = Vector::from(vec![3.0, 4.0]);
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.to_string(), "[4 6]");
//! assert_eq!((&a * &b).unwrap(), 11.0);
//! ```
//!
//! Scalars are `u32`. Dividing by zero follows IEEE-754 and yields
//! infinities or NaN.

use crate::{vector::Vector, Result, VectorError};
use std::ops::{Add, Div, DivAssign, Mul, MulAssign, Sub};

impl Vector {
    fn check_dimensions(&self, other: &Vector) -> Result<()> {
        let (expected, got) = (self.num_dimensions(), other.num_dimensions());
        if expected != got {
            log::debug!("dimension mismatch: {} vs {}", expected, got);
            return Err(VectorError::DimensionMismatch { expected, got });
        }
        Ok(())
    }

    /// In-place elementwise addition. On mismatch `self` is left untouched.
    pub fn try_add_assign(&mut self, other: &Vector) -> Result<&mut Self> {
        self.check_dimensions(other)?;
        for (lhs, rhs) in self.raw_magnitude_mut().iter_mut().zip(other.iter()) {
            *lhs += rhs;
        }
        Ok(self)
    }

    pub fn try_sub_assign(&mut self, other: &Vector) -> Result<&mut Self> {
        self.check_dimensions(other)?;
        for (lhs, rhs) in self.raw_magnitude_mut().iter_mut().zip(other.iter()) {
            *lhs -= rhs;
        }
        Ok(self)
    }

    pub fn checked_add(&self, other: &Vector) -> Result<Vector> {
        let mut sum = self.clone();
        sum.try_add_assign(other)?;
        Ok(sum)
    }

    pub fn checked_sub(&self, other: &Vector) -> Result<Vector> {
        let mut difference = self.clone();
        difference.try_sub_assign(other)?;
        Ok(difference)
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dimensions(other)?;
        Ok(self.view().dot(&other.view()))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.num_dimensions() == other.num_dimensions()
            && self.iter().zip(other.iter()).all(|(lhs, rhs)| lhs == rhs)
    }
}

impl MulAssign<u32> for Vector {
    fn mul_assign(&mut self, scalar: u32) {
        let scalar = f64::from(scalar);
        for value in self.raw_magnitude_mut() {
            *value *= scalar;
        }
    }
}

impl DivAssign<u32> for Vector {
    fn div_assign(&mut self, scalar: u32) {
        let scalar = f64::from(scalar);
        for value in self.raw_magnitude_mut() {
            *value /= scalar;
        }
    }
}

impl Add<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: &Vector) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Add<&Vector> for Vector {
    type Output = Result<Vector>;

    fn add(mut self, rhs: &Vector) -> Self::Output {
        self.try_add_assign(rhs)?;
        Ok(self)
    }
}

impl Add for Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: Vector) -> Self::Output {
        self + &rhs
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: &Vector) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Sub<&Vector> for Vector {
    type Output = Result<Vector>;

    fn sub(mut self, rhs: &Vector) -> Self::Output {
        self.try_sub_assign(rhs)?;
        Ok(self)
    }
}

impl Sub for Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: Vector) -> Self::Output {
        self - &rhs
    }
}

// Dot product
impl Mul<&Vector> for &Vector {
    type Output = Result<f64>;

    fn mul(self, rhs: &Vector) -> Self::Output {
        self.dot(rhs)
    }
}

impl Mul<u32> for Vector {
    type Output = Vector;

    fn mul(mut self, scalar: u32) -> Self::Output {
        self *= scalar;
        self
    }
}

impl Mul<u32> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: u32) -> Self::Output {
        self.clone() * scalar
    }
}

impl Mul<Vector> for u32 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Self::Output {
        vector * self
    }
}

impl Mul<&Vector> for u32 {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Self::Output {
        vector * self
    }
}

impl Div<u32> for Vector {
    type Output = Vector;

    fn div(mut self, scalar: u32) -> Self::Output {
        self /= scalar;
        self
    }
}

impl Div<u32> for &Vector {
    type Output = Vector;

    fn div(self, scalar: u32) -> Self::Output {
        self.clone() / scalar
    }
}
