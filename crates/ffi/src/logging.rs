//! Diagnostics for C hosts.
//!
//! Domain errors are reported as `tracing` events by the core library. A
//! host that has no Rust-side subscriber can call `v3_init_logging` once to
//! have them printed to stderr.

use tracing_subscriber::EnvFilter;

/// Install a stderr logger for domain-error diagnostics.
///
/// The filter is read from `RUST_LOG`, defaulting to `warn`.
///
/// Returns `true` if the logger was installed, `false` if a global
/// subscriber was already set (by an earlier call or by the host).
#[no_mangle]
pub extern "C" fn v3_init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
