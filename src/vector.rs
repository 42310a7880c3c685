use std::fmt;
use std::mem;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};
use std::str::FromStr;

use num_traits::Zero;

use crate::error::LinAlgError;

/// Upper bound on the length of a [`DynVector`].
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Heap-allocated one-dimensional container whose length is fixed at
/// construction.
///
/// The length is always between 1 and [`MAX_VECTOR_SIZE`]; cloning produces
/// an independent deep copy. Element access is bounds-checked on every path:
/// `at`/`at_mut` report [`LinAlgError::IndexOutOfRange`], the `Index`
/// operators panic the way slice indexing does.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<T>",
        into = "Vec<T>",
        bound(serialize = "T: Clone + serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct DynVector<T> {
    data: Vec<T>,
}

fn check_size(size: usize) -> Result<(), LinAlgError> {
    if size == 0 {
        return Err(LinAlgError::InvalidSize);
    }
    if size > MAX_VECTOR_SIZE {
        return Err(LinAlgError::SizeExceeded {
            requested: size,
            max: MAX_VECTOR_SIZE,
        });
    }
    Ok(())
}

impl<T> DynVector<T> {
    /// Create a vector of `size` default-initialized elements.
    ///
    /// The size is validated before anything is allocated.
    pub fn new(size: usize) -> Result<Self, LinAlgError>
    where
        T: Clone + Default,
    {
        check_size(size)?;
        Ok(Self {
            data: vec![T::default(); size],
        })
    }

    /// Take ownership of an existing buffer, validating its length.
    pub fn from_vec(values: Vec<T>) -> Result<Self, LinAlgError> {
        check_size(values.len())?;
        Ok(Self { data: values })
    }

    /// Copy the elements of `values` into a fresh vector.
    pub fn from_slice(values: &[T]) -> Result<Self, LinAlgError>
    where
        T: Clone,
    {
        Self::from_vec(values.to_vec())
    }

    /// Internal constructor for buffers whose length is already known to
    /// satisfy the size invariant (e.g. rebuilt from an existing vector).
    pub(crate) fn from_vec_unchecked(values: Vec<T>) -> Self {
        debug_assert!(!values.is_empty());
        Self { data: values }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Bounds-checked element access.
    pub fn at(&self, index: usize) -> Result<&T, LinAlgError> {
        self.data.get(index).ok_or(LinAlgError::IndexOutOfRange {
            index,
            size: self.data.len(),
        })
    }

    /// Bounds-checked mutable element access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, LinAlgError> {
        let size = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(LinAlgError::IndexOutOfRange { index, size })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Constant-time exchange of the two vectors' storage.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
    }

    fn check_same_len(&self, other: &Self) -> Result<(), LinAlgError> {
        if self.len() != other.len() {
            return Err(LinAlgError::SizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    /// Elementwise sum; [`LinAlgError::SizeMismatch`] on length mismatch.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LinAlgError>
    where
        T: Add<Output = T> + Clone,
    {
        self.check_same_len(other)?;
        let data = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Ok(Self::from_vec_unchecked(data))
    }

    /// Elementwise difference; [`LinAlgError::SizeMismatch`] on length mismatch.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, LinAlgError>
    where
        T: Sub<Output = T> + Clone,
    {
        self.check_same_len(other)?;
        let data = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        Ok(Self::from_vec_unchecked(data))
    }

    /// Dot product, accumulated left to right from `T::zero()`.
    pub fn dot(&self, other: &Self) -> Result<T, LinAlgError>
    where
        T: Zero + Mul<Output = T> + Clone,
    {
        self.check_same_len(other)?;
        let mut acc = T::zero();
        for (a, b) in self.iter().zip(other.iter()) {
            acc = acc + a.clone() * b.clone();
        }
        Ok(acc)
    }
}

impl<T: FromStr> DynVector<T> {
    /// Read exactly `len()` elements from a whitespace-token source,
    /// overwriting the current contents in place.
    pub fn read_from<'a, I>(&mut self, tokens: &mut I) -> Result<(), LinAlgError>
    where
        I: Iterator<Item = &'a str>,
    {
        for slot in self.data.iter_mut() {
            let token = tokens.next().ok_or(LinAlgError::UnexpectedEof)?;
            *slot = token.parse().map_err(|_| LinAlgError::Parse {
                token: token.to_string(),
            })?;
        }
        Ok(())
    }
}

impl<T> TryFrom<Vec<T>> for DynVector<T> {
    type Error = LinAlgError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(values)
    }
}

impl<T> From<DynVector<T>> for Vec<T> {
    fn from(value: DynVector<T>) -> Self {
        value.data
    }
}

impl<T> Index<usize> for DynVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for DynVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

// Scalar operators: new vector of the same length, never fail.

impl<'a, T> Add<T> for &'a DynVector<T>
where
    T: Add<Output = T> + Clone,
{
    type Output = DynVector<T>;

    fn add(self, rhs: T) -> Self::Output {
        let data = self.iter().map(|v| v.clone() + rhs.clone()).collect();
        DynVector::from_vec_unchecked(data)
    }
}

impl<'a, T> Sub<T> for &'a DynVector<T>
where
    T: Sub<Output = T> + Clone,
{
    type Output = DynVector<T>;

    fn sub(self, rhs: T) -> Self::Output {
        let data = self.iter().map(|v| v.clone() - rhs.clone()).collect();
        DynVector::from_vec_unchecked(data)
    }
}

impl<'a, T> Mul<T> for &'a DynVector<T>
where
    T: Mul<Output = T> + Clone,
{
    type Output = DynVector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        let data = self.iter().map(|v| v.clone() * rhs.clone()).collect();
        DynVector::from_vec_unchecked(data)
    }
}

// Vector-vector operators panic on length mismatch; use `checked_add` /
// `checked_sub` for the recoverable form.

impl<'a, 'b, T> Add<&'b DynVector<T>> for &'a DynVector<T>
where
    T: Add<Output = T> + Clone,
{
    type Output = DynVector<T>;

    fn add(self, rhs: &'b DynVector<T>) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Vector addition requires vectors of equal length"
        );
        let data = self
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        DynVector::from_vec_unchecked(data)
    }
}

impl<'a, 'b, T> Sub<&'b DynVector<T>> for &'a DynVector<T>
where
    T: Sub<Output = T> + Clone,
{
    type Output = DynVector<T>;

    fn sub(self, rhs: &'b DynVector<T>) -> Self::Output {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Vector subtraction requires vectors of equal length"
        );
        let data = self
            .iter()
            .zip(rhs.iter())
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        DynVector::from_vec_unchecked(data)
    }
}

impl<T: fmt::Display> fmt::Display for DynVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.data.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
