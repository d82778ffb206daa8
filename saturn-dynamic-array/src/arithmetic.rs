//! Element-wise arithmetic on [`DynamicArray`].
//!
//! Every operation leaves its operands untouched and returns a fresh, unbounded
//! `DynamicArray<T>`, whatever capacity the operands were declared with. The
//! same contract is exposed through `std::ops` on references: `&a + &b`,
//! `&a - &b` and `&a / s` yield a `Result`, `&a * s` cannot fail.

use std::ops::{Add, Div, Mul, Sub};

use num_traits::Zero;
use tracing::debug;

use crate::array::DynamicArray;
use crate::error::{DynamicArrayError, Result};

impl<T, const FIXED_CAPACITY: usize> DynamicArray<T, FIXED_CAPACITY> {
    /// Element-wise sum of `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::SizeMismatch`] if the sizes differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_dynamic_array::Vec3Int;
    ///
    /// let a = Vec3Int::from_slice(&[1, 2, 3]).unwrap();
    /// let b = Vec3Int::from_slice(&[10, 20, 30]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().to_vec(), vec![11, 22, 33]);
    /// ```
    pub fn add<const M: usize>(&self, other: &DynamicArray<T, M>) -> Result<DynamicArray<T>>
    where
        T: Clone + Add<Output = T>,
    {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::SizeMismatch`] if the sizes differ.
    pub fn subtract<const M: usize>(&self, other: &DynamicArray<T, M>) -> Result<DynamicArray<T>>
    where
        T: Clone + Sub<Output = T>,
    {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Multiplies every element by `scalar`.
    pub fn scale(&self, scalar: T) -> DynamicArray<T>
    where
        T: Clone + Mul<Output = T>,
    {
        self.map_with(|a| a * scalar.clone())
    }

    /// Divides every element by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::DivisionByZero`] if `scalar` equals the
    /// zero value of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use saturn_dynamic_array::{DynamicArrayError, FloatArray};
    ///
    /// let a = FloatArray::from_slice(&[1.0, 3.0]).unwrap();
    /// assert_eq!(a.divide(2.0).unwrap().to_vec(), vec![0.5, 1.5]);
    /// assert_eq!(a.divide(0.0).unwrap_err(), DynamicArrayError::DivisionByZero);
    /// ```
    pub fn divide(&self, scalar: T) -> Result<DynamicArray<T>>
    where
        T: Clone + Div<Output = T> + Zero,
    {
        if scalar.is_zero() {
            debug!(len = self.size(), "rejected division by zero");
            return Err(DynamicArrayError::DivisionByZero);
        }

        Ok(self.map_with(|a| a / scalar.clone()))
    }

    fn zip_with<const M: usize>(
        &self,
        other: &DynamicArray<T, M>,
        op: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<DynamicArray<T>>
    where
        T: Clone,
    {
        let (left, right) = (self.size(), other.size());
        if left != right {
            debug!(op, left, right, "operand sizes differ");
            return Err(DynamicArrayError::SizeMismatch { left, right });
        }

        let elements: Vec<T> = self
            .elements()
            .iter()
            .zip(other.elements())
            .map(|(a, b)| f(a.clone(), b.clone()))
            .collect();

        Ok(DynamicArray::from_elements(elements))
    }

    fn map_with(&self, f: impl Fn(T) -> T) -> DynamicArray<T>
    where
        T: Clone,
    {
        let elements: Vec<T> = self.elements().iter().cloned().map(f).collect();
        DynamicArray::from_elements(elements)
    }
}

impl<T, const N: usize, const M: usize> Add<&DynamicArray<T, M>> for &DynamicArray<T, N>
where
    T: Clone + Add<Output = T>,
{
    type Output = Result<DynamicArray<T>>;

    fn add(self, rhs: &DynamicArray<T, M>) -> Self::Output {
        DynamicArray::<T, N>::add(self, rhs)
    }
}

impl<T, const N: usize, const M: usize> Sub<&DynamicArray<T, M>> for &DynamicArray<T, N>
where
    T: Clone + Sub<Output = T>,
{
    type Output = Result<DynamicArray<T>>;

    fn sub(self, rhs: &DynamicArray<T, M>) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<T, const N: usize> Mul<T> for &DynamicArray<T, N>
where
    T: Clone + Mul<Output = T>,
{
    type Output = DynamicArray<T>;

    fn mul(self, scalar: T) -> Self::Output {
        self.scale(scalar)
    }
}

impl<T, const N: usize> Div<T> for &DynamicArray<T, N>
where
    T: Clone + Div<Output = T> + Zero,
{
    type Output = Result<DynamicArray<T>>;

    fn div(self, scalar: T) -> Self::Output {
        self.divide(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn ints<const N: usize>(values: &[i32]) -> DynamicArray<i32, N> {
        DynamicArray::from_slice(values).unwrap()
    }

    #[test]
    fn test_add_and_subtract() {
        let a = ints::<3>(&[1, 2, 3]);
        let b = ints::<3>(&[4, 5, 6]);

        assert_eq!(a.add(&b).unwrap().to_vec(), vec![5, 7, 9]);
        assert_eq!(b.subtract(&a).unwrap().to_vec(), vec![3, 3, 3]);
        assert_eq!(a.to_vec(), vec![1, 2, 3]);
        assert_eq!(b.to_vec(), vec![4, 5, 6]);
    }

    #[test]
    fn test_size_mismatch() {
        let a = ints::<0>(&[1, 2, 3]);
        let b = ints::<0>(&[1, 2]);

        assert_eq!(
            a.add(&b).unwrap_err(),
            DynamicArrayError::SizeMismatch { left: 3, right: 2 }
        );
        assert_eq!(b.subtract(&a).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(a.size(), 3);
        assert_eq!(b.size(), 2);
    }

    #[test]
    fn test_mixed_capacities() {
        let bounded = ints::<2>(&[1, 2]);
        let unbounded = ints::<0>(&[3, 4]);
        let sum: DynamicArray<i32> = bounded.add(&unbounded).unwrap();
        assert_eq!(sum.to_vec(), vec![4, 6]);
    }

    #[test]
    fn test_result_is_unbounded() {
        let a = ints::<2>(&[1, 2]);
        let mut sum = a.add(&a).unwrap();
        sum.try_append(99).unwrap();
        sum.try_append(100).unwrap();
        assert_eq!(sum.size(), 4);
    }

    #[test]
    fn test_scale_and_divide() {
        let a = ints::<0>(&[2, 4, 6]);
        assert_eq!(a.scale(3).to_vec(), vec![6, 12, 18]);
        assert_eq!(a.divide(2).unwrap().to_vec(), vec![1, 2, 3]);
        assert_eq!(a.divide(0).unwrap_err(), DynamicArrayError::DivisionByZero);
    }

    #[test]
    fn test_negative_zero_divisor() {
        let a = DynamicArray::<f64>::from_slice(&[1.0]).unwrap();
        assert_eq!(a.divide(-0.0).unwrap_err(), DynamicArrayError::DivisionByZero);
    }

    #[test]
    fn test_empty_operands() {
        let empty = DynamicArray::<i32>::new();
        assert!(empty.add(&empty).unwrap().is_empty());
        assert!(empty.scale(5).is_empty());
        assert_eq!(empty.divide(0).unwrap_err(), DynamicArrayError::DivisionByZero);
    }

    #[test]
    fn test_operator_traits() {
        let a = ints::<0>(&[1, 2]);
        let b = ints::<0>(&[3, 5]);

        assert_eq!((&a + &b).unwrap().to_vec(), vec![4, 7]);
        assert_eq!((&b - &a).unwrap().to_vec(), vec![2, 3]);
        assert_eq!((&a * 10).to_vec(), vec![10, 20]);
        assert_eq!((&b / 1).unwrap().to_vec(), vec![3, 5]);
        assert!((&b / 0).is_err());
        assert!((&a + &ints::<0>(&[1])).is_err());
    }
}
