//! 3D Vector Math Core Library
//!
//! Single-precision arithmetic on fixed 3-component vectors: construction
//! from points, addition and subtraction, dot and cross products, scaling,
//! angles, reflection, length, normalization, and tolerance equality.
//!
//! ## Design
//! - [`Vec3`] is a `#[repr(C)]` value type that can view caller-owned
//!   `[f32; 3]` buffers in place
//! - [`ops`] holds the pure, allocation-free operations
//! - Zero-length operands to angle/normalization never panic: they return a
//!   sentinel inside a [`Checked`] together with a [`DomainError`]
//!
//! ```
//! use v3math_core::{ops, Vec3};
//!
//! let a = Vec3::new(1.0, 0.0, 0.0);
//! let b = Vec3::new(0.0, 1.0, 0.0);
//! assert_eq!(ops::cross(a, b), Vec3::new(0.0, 0.0, 1.0));
//!
//! let degenerate = ops::normalize(Vec3::ZERO);
//! assert!(degenerate.is_degenerate());
//! assert_eq!(degenerate.value(), Vec3::ZERO);
//! ```

// Core types and utilities
pub mod core_types;

// Vector operations
pub mod ops;

// Re-export core types
pub use core_types::{Checked, DomainError, Operation, Vec3};
pub use ops::{DEFAULT_TOLERANCE, EPSILON};
