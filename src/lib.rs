//! dynalg: dynamic vector and square-matrix primitives.
//!
//! This crate provides two owning, generically-typed containers whose size is
//! fixed at construction: [`DynVector`] (one-dimensional) and [`DynMatrix`]
//! (always square, composed of per-row vectors). Both offer bounds-checked
//! access on every path, value-semantics copies, operator arithmetic with
//! checked `Result` twins for the fallible cases, and a plain-text read/write
//! form for demos and tests.
//!
//! The design favors small, testable modules: construction limits are
//! enforced up front, mismatched operands surface as [`LinAlgError`] values
//! rather than being clamped, and equality never fails (differently-sized
//! operands simply compare unequal).
//!
//! ```
//! use dynalg::{DynMatrix, DynVector};
//!
//! let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
//! let b = DynVector::from_slice(&[4, 5, 6]).unwrap();
//! assert_eq!(a.dot(&b).unwrap(), 32);
//!
//! let m = DynMatrix::try_from(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let id = DynMatrix::identity(2).unwrap();
//! assert_eq!(m.checked_mul(&id).unwrap(), m);
//! ```
pub mod error;
pub mod matrix;
pub mod vector;

pub use error::LinAlgError;
pub use matrix::{DynMatrix, MAX_MATRIX_SIZE};
pub use vector::{DynVector, MAX_VECTOR_SIZE};
