//! Probability distributions.
//!
//! Only the normal distribution is provided; its CDF delegates to the
//! `statrs` error function through [`crate::scalar`].

pub mod normal;

pub use normal::{
    normal_cdf, normal_pdf, standard_normal_cdf, standard_normal_pdf, NormalDistribution,
    DEFAULT_MEAN, DEFAULT_STD_DEV,
};
