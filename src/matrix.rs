use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::str::FromStr;

use log::trace;
use num_traits::{One, Zero};

use crate::error::LinAlgError;
use crate::vector::DynVector;

/// Upper bound on the dimension of a [`DynMatrix`].
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Square two-dimensional container composed of per-row [`DynVector`]s.
///
/// The matrix re-exposes only sizing and indexing from the underlying row
/// container; its arithmetic is defined here with matrix semantics (matrix
/// product rather than elementwise multiply). Every row has length exactly
/// `size()`, and rows are never resized after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<Vec<T>>",
        into = "Vec<Vec<T>>",
        bound(serialize = "T: Clone + serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct DynMatrix<T> {
    rows: DynVector<DynVector<T>>,
}

impl<T> DynMatrix<T> {
    /// Create a `size` x `size` matrix of default-initialized elements.
    ///
    /// Checks the matrix maximum first, then delegates to the row container,
    /// which rejects a zero size.
    pub fn new(size: usize) -> Result<Self, LinAlgError>
    where
        T: Clone + Default,
    {
        check_dimension(size)?;
        let rows = (0..size)
            .map(|_| DynVector::new(size))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: DynVector::from_vec(rows)?,
        })
    }

    /// Identity matrix of the given dimension.
    pub fn identity(size: usize) -> Result<Self, LinAlgError>
    where
        T: Clone + Zero + One,
    {
        check_dimension(size)?;
        let mut rows = Vec::with_capacity(size);
        for i in 0..size {
            let mut row = vec![T::zero(); size];
            row[i] = T::one();
            rows.push(DynVector::from_vec(row)?);
        }
        Ok(Self {
            rows: DynVector::from_vec(rows)?,
        })
    }

    /// Row and column count.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Bounds-checked element access; both coordinates are validated here.
    pub fn at(&self, row: usize, col: usize) -> Result<&T, LinAlgError> {
        let size = self.size();
        if row >= size {
            return Err(LinAlgError::IndexOutOfRange { index: row, size });
        }
        if col >= size {
            return Err(LinAlgError::IndexOutOfRange { index: col, size });
        }
        Ok(&self.rows[row][col])
    }

    /// Bounds-checked mutable element access.
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, LinAlgError> {
        let size = self.size();
        if row >= size {
            return Err(LinAlgError::IndexOutOfRange { index: row, size });
        }
        if col >= size {
            return Err(LinAlgError::IndexOutOfRange { index: col, size });
        }
        Ok(&mut self.rows[row][col])
    }

    /// Checked row access.
    pub fn row(&self, index: usize) -> Result<&DynVector<T>, LinAlgError> {
        self.rows.at(index)
    }

    fn check_same_size(&self, other_size: usize) -> Result<(), LinAlgError> {
        if self.size() != other_size {
            return Err(LinAlgError::DimensionMismatch {
                left: self.size(),
                right: other_size,
            });
        }
        Ok(())
    }

    /// Elementwise sum via per-row vector addition;
    /// [`LinAlgError::DimensionMismatch`] on size mismatch.
    pub fn checked_add(&self, other: &Self) -> Result<Self, LinAlgError>
    where
        T: Add<Output = T> + Clone,
    {
        self.check_same_size(other.size())?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.checked_add(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: DynVector::from_vec_unchecked(rows),
        })
    }

    /// Elementwise difference via per-row vector subtraction.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, LinAlgError>
    where
        T: Sub<Output = T> + Clone,
    {
        self.check_same_size(other.size())?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.checked_sub(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rows: DynVector::from_vec_unchecked(rows),
        })
    }

    /// Matrix-vector product; element `i` is row `i` dot `vector`.
    pub fn checked_mul_vector(&self, vector: &DynVector<T>) -> Result<DynVector<T>, LinAlgError>
    where
        T: Zero + Mul<Output = T> + Clone,
    {
        self.check_same_size(vector.len())?;
        let data = self
            .rows
            .iter()
            .map(|row| row.dot(vector))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DynVector::from_vec_unchecked(data))
    }

    /// Standard matrix product, naive `O(n^3)` triple loop with the
    /// accumulator starting from `T::zero()`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, LinAlgError>
    where
        T: Zero + Mul<Output = T> + Clone,
    {
        self.check_same_size(other.size())?;
        let size = self.size();
        trace!("multiplying {}x{} matrices", size, size);
        let mut rows = Vec::with_capacity(size);
        for i in 0..size {
            let mut row = Vec::with_capacity(size);
            for j in 0..size {
                let mut acc = T::zero();
                for k in 0..size {
                    acc = acc + self.rows[i][k].clone() * other.rows[k][j].clone();
                }
                row.push(acc);
            }
            rows.push(DynVector::from_vec_unchecked(row));
        }
        Ok(Self {
            rows: DynVector::from_vec_unchecked(rows),
        })
    }
}

impl<T: FromStr> DynMatrix<T> {
    /// Read `size()` rows from a whitespace-token source, each row via the
    /// vector read contract.
    pub fn read_from<'a, I>(&mut self, tokens: &mut I) -> Result<(), LinAlgError>
    where
        I: Iterator<Item = &'a str>,
    {
        for row in self.rows.iter_mut() {
            row.read_from(tokens)?;
        }
        Ok(())
    }
}

fn check_dimension(size: usize) -> Result<(), LinAlgError> {
    if size > MAX_MATRIX_SIZE {
        return Err(LinAlgError::SizeExceeded {
            requested: size,
            max: MAX_MATRIX_SIZE,
        });
    }
    Ok(())
}

impl<T> TryFrom<Vec<Vec<T>>> for DynMatrix<T> {
    type Error = LinAlgError;

    /// Build a matrix from literal rows, rejecting ragged or non-square input.
    fn try_from(values: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        let size = values.len();
        check_dimension(size)?;
        let mut rows = Vec::with_capacity(size);
        for row in values {
            if row.len() != size {
                return Err(LinAlgError::DimensionMismatch {
                    left: size,
                    right: row.len(),
                });
            }
            rows.push(DynVector::from_vec(row)?);
        }
        Ok(Self {
            rows: DynVector::from_vec(rows)?,
        })
    }
}

impl<T> From<DynMatrix<T>> for Vec<Vec<T>> {
    fn from(value: DynMatrix<T>) -> Self {
        Vec::<DynVector<T>>::from(value.rows)
            .into_iter()
            .map(Vec::from)
            .collect()
    }
}

/// Row access. Panics on an out-of-range row, the same way slice indexing
/// does; `m[row][col]` therefore performs two independent bounds checks.
impl<T> Index<usize> for DynMatrix<T> {
    type Output = DynVector<T>;

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

/// Mutable row access. The caller must not replace a row with one of a
/// different length; use `at_mut` or tuple indexing for element writes.
impl<T> IndexMut<usize> for DynMatrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.rows[row]
    }
}

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.rows[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[row][col]
    }
}

// Matrix-scalar multiply: per-row scalar multiply, never fails.

impl<'a, T> Mul<T> for &'a DynMatrix<T>
where
    T: Mul<Output = T> + Clone,
{
    type Output = DynMatrix<T>;

    fn mul(self, rhs: T) -> Self::Output {
        let rows = self.rows.iter().map(|row| row * rhs.clone()).collect();
        DynMatrix {
            rows: DynVector::from_vec_unchecked(rows),
        }
    }
}

// Matrix-matrix operators panic on size mismatch; the `checked_*` methods
// are the recoverable forms.

impl<'a, 'b, T> Add<&'b DynMatrix<T>> for &'a DynMatrix<T>
where
    T: Add<Output = T> + Clone,
{
    type Output = DynMatrix<T>;

    fn add(self, rhs: &'b DynMatrix<T>) -> Self::Output {
        assert_eq!(
            self.size(),
            rhs.size(),
            "Matrix addition requires matrices of equal size"
        );
        let rows = self
            .rows
            .iter()
            .zip(rhs.rows.iter())
            .map(|(a, b)| a + b)
            .collect();
        DynMatrix {
            rows: DynVector::from_vec_unchecked(rows),
        }
    }
}

impl<'a, 'b, T> Sub<&'b DynMatrix<T>> for &'a DynMatrix<T>
where
    T: Sub<Output = T> + Clone,
{
    type Output = DynMatrix<T>;

    fn sub(self, rhs: &'b DynMatrix<T>) -> Self::Output {
        assert_eq!(
            self.size(),
            rhs.size(),
            "Matrix subtraction requires matrices of equal size"
        );
        let rows = self
            .rows
            .iter()
            .zip(rhs.rows.iter())
            .map(|(a, b)| a - b)
            .collect();
        DynMatrix {
            rows: DynVector::from_vec_unchecked(rows),
        }
    }
}

impl<'a, 'b, T> Mul<&'b DynMatrix<T>> for &'a DynMatrix<T>
where
    T: Zero + Mul<Output = T> + Clone,
{
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &'b DynMatrix<T>) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(e) => panic!("Matrix multiplication failed: {}", e),
        }
    }
}

impl<'a, 'b, T> Mul<&'b DynVector<T>> for &'a DynMatrix<T>
where
    T: Zero + Mul<Output = T> + Clone,
{
    type Output = DynVector<T>;

    fn mul(self, rhs: &'b DynVector<T>) -> Self::Output {
        match self.checked_mul_vector(rhs) {
            Ok(product) => product,
            Err(e) => panic!("Matrix-vector multiplication failed: {}", e),
        }
    }
}

impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
