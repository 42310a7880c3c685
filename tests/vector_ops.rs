//! Integration tests for the DynVector container.

use dynalg::{DynVector, LinAlgError, MAX_VECTOR_SIZE};
use rand::Rng;

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn can_create_vector_with_positive_length() {
    let v: DynVector<i32> = DynVector::new(5).unwrap();
    assert_eq!(v.len(), 5);
}

#[test]
fn new_vector_is_default_initialized() {
    let v: DynVector<i32> = DynVector::new(4).unwrap();
    assert!(v.iter().all(|&x| x == 0));
}

#[test]
fn cant_create_vector_with_zero_length() {
    assert_eq!(
        DynVector::<i32>::new(0).unwrap_err(),
        LinAlgError::InvalidSize
    );
}

#[test]
fn cant_create_too_large_vector() {
    let err = DynVector::<i32>::new(MAX_VECTOR_SIZE + 1).unwrap_err();
    assert_eq!(
        err,
        LinAlgError::SizeExceeded {
            requested: MAX_VECTOR_SIZE + 1,
            max: MAX_VECTOR_SIZE,
        }
    );
}

#[test]
fn from_slice_copies_the_source() {
    let source = [1, 2, 3];
    let v = DynVector::from_slice(&source).unwrap();
    assert_eq!(v.len(), 3);
    assert_eq!(v.to_vec(), vec![1, 2, 3]);
}

#[test]
fn from_empty_slice_is_invalid() {
    assert_eq!(
        DynVector::<i32>::from_slice(&[]).unwrap_err(),
        LinAlgError::InvalidSize
    );
}

#[test]
fn try_from_validates_the_buffer() {
    assert!(DynVector::try_from(vec![1, 2]).is_ok());
    assert!(DynVector::<i32>::try_from(Vec::new()).is_err());
}

// ---------------------------------------------------------------------------
// Copy and assignment
// ---------------------------------------------------------------------------

#[test]
fn cloned_vector_is_equal_to_source() {
    let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let b = a.clone();
    assert_eq!(a, b);
}

#[test]
fn cloned_vector_has_its_own_memory() {
    let mut a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let b = a.clone();
    a[0] = 100;
    assert_ne!(a[0], b[0]);
    assert_eq!(b[0], 1);
}

#[test]
fn assignment_changes_target_size() {
    let a = DynVector::from_slice(&[1, 2, 3, 4]).unwrap();
    let mut b = DynVector::from_slice(&[9, 9]).unwrap();
    assert_eq!(b.len(), 2);
    b = a.clone();
    assert_eq!(b.len(), 4);
    assert_eq!(b, a);
}

#[test]
fn self_assignment_preserves_elements() {
    let mut a = DynVector::from_slice(&[5, 6, 7]).unwrap();
    a = a.clone();
    assert_eq!(a.to_vec(), vec![5, 6, 7]);
}

#[test]
fn swap_exchanges_storage() {
    let mut a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let mut b = DynVector::from_slice(&[9, 8]).unwrap();
    a.swap(&mut b);
    assert_eq!(a.to_vec(), vec![9, 8]);
    assert_eq!(b.to_vec(), vec![1, 2, 3]);
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn compare_vector_with_itself_returns_true() {
    let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    assert_eq!(a, a);
}

#[test]
fn vectors_with_different_size_are_not_equal() {
    let a: DynVector<i32> = DynVector::new(4).unwrap();
    let b: DynVector<i32> = DynVector::new(2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn vectors_with_different_values_are_not_equal() {
    let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let b = DynVector::from_slice(&[1, 2, 4]).unwrap();
    assert_ne!(a, b);
}

// ---------------------------------------------------------------------------
// Indexing
// ---------------------------------------------------------------------------

#[test]
fn can_set_and_get_element() {
    let mut v: DynVector<i32> = DynVector::new(4).unwrap();
    v[0] = 10;
    assert_eq!(v[0], 10);
    assert_eq!(*v.at(0).unwrap(), 10);
}

#[test]
fn at_rejects_index_at_length() {
    let v = DynVector::from_slice(&[1, 2, 3]).unwrap();
    assert_eq!(
        v.at(3).unwrap_err(),
        LinAlgError::IndexOutOfRange { index: 3, size: 3 }
    );
}

#[test]
fn at_rejects_index_far_past_length() {
    let v = DynVector::from_slice(&[1, 2, 3]).unwrap();
    assert!(v.at(100).is_err());
}

#[test]
fn at_mut_rejects_out_of_range_index() {
    let mut v = DynVector::from_slice(&[1, 2, 3]).unwrap();
    assert_eq!(
        v.at_mut(3).unwrap_err(),
        LinAlgError::IndexOutOfRange { index: 3, size: 3 }
    );
}

#[test]
#[should_panic]
fn index_operator_panics_out_of_range() {
    let v = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let _ = v[3];
}

// ---------------------------------------------------------------------------
// Scalar operations
// ---------------------------------------------------------------------------

#[test]
fn can_add_scalar_to_vector() {
    let v = DynVector::from_slice(&[1, 2, 3]).unwrap();
    assert_eq!(&v + 10, DynVector::from_slice(&[11, 12, 13]).unwrap());
}

#[test]
fn can_subtract_scalar_from_vector() {
    let v = DynVector::from_slice(&[11, 12, 13]).unwrap();
    assert_eq!(&v - 10, DynVector::from_slice(&[1, 2, 3]).unwrap());
}

#[test]
fn can_multiply_vector_by_scalar() {
    let v = DynVector::from_slice(&[1, 2, 3]).unwrap();
    assert_eq!(&v * 3, DynVector::from_slice(&[3, 6, 9]).unwrap());
}

#[test]
fn scalar_ops_leave_the_source_untouched() {
    let v = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let _ = &v + 1;
    assert_eq!(v.to_vec(), vec![1, 2, 3]);
}

// ---------------------------------------------------------------------------
// Vector-vector operations
// ---------------------------------------------------------------------------

#[test]
fn can_add_vectors_with_equal_size() {
    let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let b = DynVector::from_slice(&[4, 5, 6]).unwrap();
    assert_eq!(&a + &b, DynVector::from_slice(&[5, 7, 9]).unwrap());
    assert_eq!(a.checked_add(&b).unwrap(), &a + &b);
}

#[test]
fn can_subtract_vectors_with_equal_size() {
    let a = DynVector::from_slice(&[5, 7, 9]).unwrap();
    let b = DynVector::from_slice(&[4, 5, 6]).unwrap();
    assert_eq!(&a - &b, DynVector::from_slice(&[1, 2, 3]).unwrap());
}

#[test]
fn add_then_subtract_round_trips() {
    let mut rng = rand::thread_rng();
    let a = DynVector::from_vec((0..16).map(|_| rng.gen_range(-100i64..100)).collect()).unwrap();
    let b = DynVector::from_vec((0..16).map(|_| rng.gen_range(-100i64..100)).collect()).unwrap();
    let sum = &a + &b;
    assert_eq!(&sum - &b, a);
}

#[test]
fn cant_add_vectors_with_different_size() {
    let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let b = DynVector::from_slice(&[1, 2]).unwrap();
    assert_eq!(
        a.checked_add(&b).unwrap_err(),
        LinAlgError::SizeMismatch { left: 3, right: 2 }
    );
}

#[test]
fn cant_subtract_vectors_with_different_size() {
    let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let b = DynVector::from_slice(&[1, 2]).unwrap();
    assert!(a.checked_sub(&b).is_err());
}

#[test]
#[should_panic]
fn add_operator_panics_on_size_mismatch() {
    let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let b = DynVector::from_slice(&[1, 2]).unwrap();
    let _ = &a + &b;
}

// ---------------------------------------------------------------------------
// Dot product
// ---------------------------------------------------------------------------

#[test]
fn dot_product_of_known_vectors() {
    let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let b = DynVector::from_slice(&[4, 5, 6]).unwrap();
    assert_eq!(a.dot(&b).unwrap(), 32);
}

#[test]
fn cant_take_dot_product_of_different_sizes() {
    let a = DynVector::from_slice(&[1, 2, 3]).unwrap();
    let b = DynVector::from_slice(&[1, 2]).unwrap();
    assert_eq!(
        a.dot(&b).unwrap_err(),
        LinAlgError::SizeMismatch { left: 3, right: 2 }
    );
}
