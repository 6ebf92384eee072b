//! C ABI over caller-owned `float[3]` buffers.
//!
//! Every function loads all of its sources into locals before it writes
//! `dst`, so `dst` may be the same buffer as any source:
//!
//! ```c
//! float a[3] = {1.0f, 2.0f, 3.0f};
//! float b[3] = {4.0f, 5.0f, 6.0f};
//! v3_add(a, a, b); // a = {5, 7, 9}
//! ```
//!
//! Null pointers are a caller bug and abort the process. Zero-length
//! operands to `v3_angle`, `v3_angle_quick` and `v3_normalize` instead
//! return a sentinel and record `V3ErrorCode::DomainError` for
//! `v3_get_last_error_code`.

use v3math_core::ops;

use crate::helpers::{load, store, track_checked};

/// `dst = b - a`: the vector from point `a` to point `b`.
///
/// # Safety
/// All pointers must be non-null and point to 3 valid `f32` values. `dst` may alias `a` or `b`.
#[no_mangle]
pub unsafe extern "C" fn v3_from_points(dst: *mut f32, a: *const f32, b: *const f32) {
    let (a, b) = unsafe { (load(a, "a"), load(b, "b")) };
    unsafe { store(dst, "dst", ops::from_points(a, b)) };
}

/// `dst = a + b`
///
/// # Safety
/// All pointers must be non-null and point to 3 valid `f32` values. `dst` may alias `a` or `b`.
#[no_mangle]
pub unsafe extern "C" fn v3_add(dst: *mut f32, a: *const f32, b: *const f32) {
    let (a, b) = unsafe { (load(a, "a"), load(b, "b")) };
    unsafe { store(dst, "dst", ops::add(a, b)) };
}

/// `dst = a - b`
///
/// # Safety
/// All pointers must be non-null and point to 3 valid `f32` values. `dst` may alias `a` or `b`.
#[no_mangle]
pub unsafe extern "C" fn v3_subtract(dst: *mut f32, a: *const f32, b: *const f32) {
    let (a, b) = unsafe { (load(a, "a"), load(b, "b")) };
    unsafe { store(dst, "dst", ops::subtract(a, b)) };
}

/// Dot product `a · b`.
///
/// # Safety
/// Both pointers must be non-null and point to 3 valid `f32` values.
#[no_mangle]
pub unsafe extern "C" fn v3_dot_product(a: *const f32, b: *const f32) -> f32 {
    let (a, b) = unsafe { (load(a, "a"), load(b, "b")) };
    ops::dot(a, b)
}

/// `dst = a × b` (right-handed).
///
/// # Safety
/// All pointers must be non-null and point to 3 valid `f32` values. `dst` may alias `a` or `b`.
#[no_mangle]
pub unsafe extern "C" fn v3_cross_product(dst: *mut f32, a: *const f32, b: *const f32) {
    let (a, b) = unsafe { (load(a, "a"), load(b, "b")) };
    unsafe { store(dst, "dst", ops::cross(a, b)) };
}

/// `dst = dst * s`, in place.
///
/// # Safety
/// `dst` must be non-null and point to 3 valid `f32` values.
#[no_mangle]
pub unsafe extern "C" fn v3_scale(dst: *mut f32, s: f32) {
    let mut v = unsafe { load(dst, "dst") };
    ops::scale(&mut v, s);
    unsafe { store(dst, "dst", v) };
}

/// Angle between `a` and `b` in radians, in `[0, pi]`.
///
/// Returns `0.0` and records a domain error if either vector has zero length.
///
/// # Safety
/// Both pointers must be non-null and point to 3 valid `f32` values.
#[no_mangle]
pub unsafe extern "C" fn v3_angle(a: *const f32, b: *const f32) -> f32 {
    let (a, b) = unsafe { (load(a, "a"), load(b, "b")) };
    track_checked(ops::angle(a, b))
}

/// Cosine of the angle between `a` and `b`, in `[-1, 1]`, without the `acos`.
///
/// Returns `1.0` and records a domain error if either vector has zero length.
///
/// # Safety
/// Both pointers must be non-null and point to 3 valid `f32` values.
#[no_mangle]
pub unsafe extern "C" fn v3_angle_quick(a: *const f32, b: *const f32) -> f32 {
    let (a, b) = unsafe { (load(a, "a"), load(b, "b")) };
    track_checked(ops::angle_quick(a, b))
}

/// `dst = v - 2(v · n)n`. `n` must already be unit length.
///
/// # Safety
/// All pointers must be non-null and point to 3 valid `f32` values. `dst` may alias `v` or `n`.
#[no_mangle]
pub unsafe extern "C" fn v3_reflect(dst: *mut f32, v: *const f32, n: *const f32) {
    let (v, n) = unsafe { (load(v, "v"), load(n, "n")) };
    unsafe { store(dst, "dst", ops::reflect(v, n)) };
}

/// Euclidean length of `a`.
///
/// # Safety
/// `a` must be non-null and point to 3 valid `f32` values.
#[no_mangle]
pub unsafe extern "C" fn v3_length(a: *const f32) -> f32 {
    ops::length(unsafe { load(a, "a") })
}

/// `dst = a / |a|`.
///
/// Writes the zero vector and records a domain error if `a` has zero length.
///
/// # Safety
/// Both pointers must be non-null and point to 3 valid `f32` values. `dst` may alias `a`.
#[no_mangle]
pub unsafe extern "C" fn v3_normalize(dst: *mut f32, a: *const f32) {
    let a = unsafe { load(a, "a") };
    let unit = track_checked(ops::normalize(a));
    unsafe { store(dst, "dst", unit) };
}

/// True if every component of `a` and `b` is identical or within `tolerance`.
///
/// # Safety
/// Both pointers must be non-null and point to 3 valid `f32` values.
#[no_mangle]
pub unsafe extern "C" fn v3_equals(a: *const f32, b: *const f32, tolerance: f32) -> bool {
    let (a, b) = unsafe { (load(a, "a"), load(b, "b")) };
    ops::equals(a, b, tolerance)
}
