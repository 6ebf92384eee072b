//! Core types and utilities

pub mod checked;
pub mod vec3;

pub use checked::{Checked, DomainError, Operation};
pub use vec3::Vec3;
