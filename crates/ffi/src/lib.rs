//! C ABI for the 3D vector math library.
//!
//! Exposes the operations of `v3math-core` as `v3_*` functions over
//! caller-owned `float[3]` buffers, plus a thread-local last-error channel
//! for the zero-length-vector domain error. The build script writes the
//! matching C header to `V3Math.h` at the workspace root.

pub mod error;
mod helpers;
pub mod logging;
pub mod vector;

pub use error::V3ErrorCode;
