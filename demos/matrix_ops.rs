//! End-to-end walk through the vector/matrix API: construction, arithmetic,
//! checked element access, and how mismatched operands are rejected.
//!
//! Run with `RUST_LOG=trace cargo run --example matrix_ops` to see the
//! library's trace output.

use anyhow::Result;
use rand::Rng;

use dynalg::{DynMatrix, DynVector};

fn random_matrix(size: usize) -> Result<DynMatrix<i64>> {
    let mut rng = rand::thread_rng();
    let mut m = DynMatrix::new(size)?;
    for i in 0..size {
        for j in 0..size {
            m[i][j] = rng.gen_range(-9..=9);
        }
    }
    Ok(m)
}

fn main() -> Result<()> {
    env_logger::init();

    let a = random_matrix(5)?;
    let b = random_matrix(5)?;
    log::info!("Built two random 5x5 matrices");

    println!("Matrix a =\n{}", a);
    println!("Matrix b =\n{}", b);
    println!("a + b =\n{}", a.checked_add(&b)?);
    println!("a - b =\n{}", a.checked_sub(&b)?);
    println!("a * b =\n{}", a.checked_mul(&b)?);
    println!("a * 10 =\n{}", &a * 10);

    let v = DynVector::from_slice(&[1i64, 2, 3, 4, 5])?;
    println!("v     = {}", v);
    println!("a * v = {}", a.checked_mul_vector(&v)?);
    println!("v . v = {}", v.dot(&v)?);

    let mut c = a.clone();
    println!("c[2][3] = {}", c.at(2, 3)?);
    *c.at_mut(2, 3)? = 555;
    println!("after write, c[2][3] = {}", c.at(2, 3)?);

    // Mismatched operands come back as errors instead of corrupting state.
    let small = DynMatrix::<i64>::new(3)?;
    if let Err(e) = a.checked_add(&small) {
        println!("adding a 3x3 to a 5x5 is rejected: {}", e);
    }
    if let Err(e) = c.at(2, 99) {
        println!("reading c[2][99] is rejected: {}", e);
    }

    Ok(())
}
