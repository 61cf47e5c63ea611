//! Flat operation set over plain values.
//!
//! One function per operation, grouped by category. Vectors travel as
//! `&[f64]` / `Vec<f64>`, matrices as row lists (`&[Vec<f64>]` /
//! `Vec<Vec<f64>>`) and complex numbers as `(re, im)` pairs. Optional
//! arguments take `Option` and fall back to the documented defaults:
//!
//! | parameter | default |
//! |-----------|---------|
//! | vector norm order `p` | 2 |
//! | variance/std-dev `population` | `false` (divisor n − 1) |
//! | normal `mean`, `std_dev` | 0, 1 |
//! | uniform `min`, `max` | 0, 1 |
//!
//! Matrices are validated on the way in: an empty or ragged row list fails
//! with [`Error::InvalidDimension`](crate::Error::InvalidDimension).

pub mod complex;
pub mod matrix;
pub mod ml;
pub mod probability;
pub mod random;
pub mod scalar;
pub mod signal;
pub mod statistics;
pub mod utils;
pub mod vector;
