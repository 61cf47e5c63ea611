//! # nc-core
//!
//! Core types, error definitions, and settings for numcore.
//!
//! This crate provides the foundational building blocks shared across the
//! workspace: the primitive type aliases, the error taxonomy with its
//! `ensure!` / `fail!` macros, and the process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (default random seed).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, ErrorKind, Result};
pub use settings::{ScopedSeed, Settings};
