//! Combinatorics and integer utilities.

pub use nc_math::combinatorics::{combinations, factorial, gcd, lcm};
