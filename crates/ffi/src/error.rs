use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use v3math_core::DomainError;

use crate::helpers::clear_last_error;

/// Common interface for errors recorded across the FFI boundary.
///
/// # Design
/// - `code()` - Returns the error code visible to C callers
/// - `msg()` - Returns the diagnostic message stored alongside it
pub(crate) trait FfiError {
    /// Returns the error code exposed through `v3_get_last_error_code`.
    fn code(&self) -> V3ErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> String;
}

impl FfiError for DomainError {
    fn code(&self) -> V3ErrorCode {
        V3ErrorCode::DomainError
    }

    fn msg(&self) -> String {
        self.to_string()
    }
}

/// Error codes recorded by the vector functions.
/// Follows standard C convention: 0 = no error, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum V3ErrorCode {
    /// No error recorded on this thread.
    Ok = 0,

    /// Domain error: angle or normalization was asked of a zero-length vector.
    /// The function returned its documented sentinel instead of a result.
    DomainError = 1,
}

thread_local! {
    /// Thread-local storage for the most recent domain error (C string, error code).
    /// Plays the role `errno` plays for C math functions: set on failure, left alone on success.
    static LAST_ERROR: RefCell<(Option<CString>, V3ErrorCode)> = const { RefCell::new((None, V3ErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, V3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, V3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the message if a domain error was recorded.
/// - `null` if no error has been recorded since the last `v3_clear_last_error`.
///
/// # Thread Safety
/// Error state is stored per-thread, so each thread only sees its own errors.
///
/// # Lifetime
/// The returned pointer is valid until the next call on this thread that
/// records or clears an error. **DO NOT FREE THIS POINTER**.
///
/// Example:
/// ```c
/// float zero[3] = {0.0f, 0.0f, 0.0f};
/// float out[3];
/// v3_clear_last_error();
/// v3_normalize(out, zero);
/// if (v3_get_last_error_code() != Ok) {
///     fprintf(stderr, "%s\n", v3_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn v3_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent error code on this thread.
///
/// Successful calls do not reset it; call `v3_clear_last_error` before the
/// operation you want to check.
#[no_mangle]
pub extern "C" fn v3_get_last_error_code() -> V3ErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

/// Reset this thread's error state to `Ok`.
#[no_mangle]
pub extern "C" fn v3_clear_last_error() {
    clear_last_error();
}
