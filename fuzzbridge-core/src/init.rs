//! One-time process setup for fuzz harnesses.
//!
//! Shared setup (loading a dictionary, seeding a native library) runs from
//! the driver's startup hook through [`initialize_once`] instead of living
//! in module-load-time state.

use std::sync::Once;

static INIT: Once = Once::new();

/// Run `setup` the first time this is called in the process.
///
/// Returns `true` if `setup` ran on this call. Later calls, including
/// concurrent ones, wait for the first to finish and return `false`.
pub fn initialize_once<F: FnOnce()>(setup: F) -> bool {
    let mut ran = false;
    INIT.call_once(|| {
        setup();
        ran = true;
        tracing::info!("fuzz harness initialized");
    });
    ran
}

/// Returns `true` once [`initialize_once`] has completed.
#[must_use]
pub fn is_initialized() -> bool {
    INIT.is_completed()
}
