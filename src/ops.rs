//! Element-wise arithmetic and comparison.
//!
//! The named methods return [`VectorError::DimensionMismatch`] when the
//! operands disagree on dimension. The operator impls call them and panic
//! with that error instead, the same way slice indexing and `ndarray`
//! arithmetic panic on bad shapes.
//!
//! Scalar division is multiplication by the reciprocal, so dividing by zero
//! produces `inf`/`NaN` magnitudes rather than an error.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::{vector::Vector, Result, VectorError};

impl Vector {
    fn check_dimension(&self, rhs: &Vector) -> Result<()> {
        if self.dimension() != rhs.dimension() {
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: rhs.dimension(),
            });
        }
        Ok(())
    }

    pub fn checked_add(&self, rhs: &Vector) -> Result<Vector> {
        let mut sum = self.clone();
        sum.add_in_place(rhs)?;
        Ok(sum)
    }

    pub fn checked_sub(&self, rhs: &Vector) -> Result<Vector> {
        let mut diff = self.clone();
        diff.sub_in_place(rhs)?;
        Ok(diff)
    }

    /// `Σ selfᵢ * rhsᵢ`
    pub fn dot(&self, rhs: &Vector) -> Result<f64> {
        self.check_dimension(rhs)?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b))
    }

    pub fn scale(&self, scalar: f64) -> Vector {
        self.iter().map(|m| m * scalar).collect()
    }

    pub fn divide(&self, scalar: f64) -> Vector {
        self.scale(1.0 / scalar)
    }

    /// Leaves `self` and its memoized norm untouched on a dimension mismatch.
    pub fn add_in_place(&mut self, rhs: &Vector) -> Result<()> {
        self.check_dimension(rhs)?;
        for (m, r) in self.magnitudes_mut().iter_mut().zip(rhs.iter()) {
            *m += r;
        }
        Ok(())
    }

    pub fn sub_in_place(&mut self, rhs: &Vector) -> Result<()> {
        self.check_dimension(rhs)?;
        for (m, r) in self.magnitudes_mut().iter_mut().zip(rhs.iter()) {
            *m -= r;
        }
        Ok(())
    }

    pub fn scale_in_place(&mut self, scalar: f64) {
        for m in self.iter_mut() {
            *m *= scalar;
        }
    }

    pub fn divide_in_place(&mut self, scalar: f64) {
        self.scale_in_place(1.0 / scalar);
    }
}

#[track_caller]
fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

/// Exact IEEE comparison: equal dimensions and `==` on every magnitude, so a
/// vector holding `NaN` is not equal to itself. The memoized norm is ignored.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    #[track_caller]
    fn add(self, rhs: &Vector) -> Vector {
        or_panic(self.checked_add(rhs))
    }
}

impl Add<&Vector> for Vector {
    type Output = Vector;

    #[track_caller]
    fn add(mut self, rhs: &Vector) -> Vector {
        self += rhs;
        self
    }
}

impl Add for Vector {
    type Output = Vector;

    #[track_caller]
    fn add(self, rhs: Vector) -> Vector {
        self + &rhs
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    #[track_caller]
    fn sub(self, rhs: &Vector) -> Vector {
        or_panic(self.checked_sub(rhs))
    }
}

impl Sub<&Vector> for Vector {
    type Output = Vector;

    #[track_caller]
    fn sub(mut self, rhs: &Vector) -> Vector {
        self -= rhs;
        self
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[track_caller]
    fn sub(self, rhs: Vector) -> Vector {
        self - &rhs
    }
}

/// Dot product.
impl Mul<&Vector> for &Vector {
    type Output = f64;

    #[track_caller]
    fn mul(self, rhs: &Vector) -> f64 {
        or_panic(self.dot(rhs))
    }
}

impl Mul for Vector {
    type Output = f64;

    #[track_caller]
    fn mul(self, rhs: Vector) -> f64 {
        &self * &rhs
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(mut self, scalar: f64) -> Vector {
        self *= scalar;
        self
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: &Vector) -> Vector {
        vector * self
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, vector: Vector) -> Vector {
        vector * self
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, scalar: f64) -> Vector {
        self.divide(scalar)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(mut self, scalar: f64) -> Vector {
        self /= scalar;
        self
    }
}

impl AddAssign<&Vector> for Vector {
    #[track_caller]
    fn add_assign(&mut self, rhs: &Vector) {
        or_panic(self.add_in_place(rhs))
    }
}

impl SubAssign<&Vector> for Vector {
    #[track_caller]
    fn sub_assign(&mut self, rhs: &Vector) {
        or_panic(self.sub_in_place(rhs))
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, scalar: f64) {
        self.scale_in_place(scalar);
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, scalar: f64) {
        self.divide_in_place(scalar);
    }
}
