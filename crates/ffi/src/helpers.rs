use crate::error::{with_last_error_mut, FfiError, V3ErrorCode};
use std::ffi::CString;
use v3math_core::{Checked, Vec3};

/// Set the thread-local error message and code.
/// Accepts any type implementing `FfiError` trait.
pub(crate) fn set_last_error(error: &impl FfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = V3ErrorCode::Ok;
    });
}

/// Unwrap a soft-failure result for C callers, recording its error if it has one.
#[inline]
pub(crate) fn track_checked<T: Copy>(checked: Checked<T>) -> T {
    if let Some(error) = checked.error() {
        set_last_error(&error);
    }
    checked.value()
}

/// Copy a caller-owned `float[3]` into a local `Vec3`.
///
/// Loading every source before any store is what makes `dst == a` safe.
///
/// # Safety
/// `ptr` must be null or point to 3 readable, properly aligned `f32` values.
#[inline]
#[track_caller]
pub(crate) unsafe fn load(ptr: *const f32, param_name: &str) -> Vec3 {
    assert!(!ptr.is_null(), "Parameter '{param_name}' cannot be null");
    Vec3::from(unsafe { ptr.cast::<[f32; 3]>().read() })
}

/// Write a `Vec3` into a caller-owned `float[3]`.
///
/// # Safety
/// `ptr` must be null or point to 3 writable, properly aligned `f32` values.
#[inline]
#[track_caller]
pub(crate) unsafe fn store(ptr: *mut f32, param_name: &str, value: Vec3) {
    assert!(!ptr.is_null(), "Parameter '{param_name}' cannot be null");
    unsafe { ptr.cast::<[f32; 3]>().write(value.to_array()) };
}
