//! Foreign-call boundary shim.
//!
//! Converts a borrowed byte slice into the `(pointer, length)` pair a native
//! entry point expects. This is the only place in the workspace that takes a
//! raw address of fuzzer input.

use libc::size_t;

use crate::{NativeTarget, ShimError, Status};

/// Forwards fuzzer buffers to a native target.
///
/// Holds nothing but the target, so a `Shim` is reentrant and can be shared
/// across threads whenever `T` can.
#[derive(Debug, Clone, Copy)]
pub struct Shim<T: NativeTarget> {
    target: T,
}

impl<T: NativeTarget> Shim<T> {
    /// Create a shim in front of `target`.
    #[must_use]
    pub const fn new(target: T) -> Self {
        Self { target }
    }

    /// Forward one buffer to the target. See [`invoke`].
    ///
    /// # Errors
    /// Returns [`ShimError::LengthOverflow`] if the length cannot be
    /// represented as `size_t`.
    pub fn invoke(&self, buffer: &[u8]) -> Result<Status, ShimError> {
        invoke(&self.target, buffer)
    }

    /// Returns the wrapped target.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }
}

/// Forward `buffer` to `target` and relay its status.
///
/// Empty input returns [`Status::CLEAN`] without calling the target.
/// Otherwise the target is called exactly once with a pointer to the first
/// byte and the exact length, and its result is returned unchanged. The
/// pointer is never stored or returned.
///
/// Faults inside the target (crashes, sanitizer reports) are not caught.
///
/// # Errors
/// Returns [`ShimError::LengthOverflow`] if `buffer.len()` does not fit in
/// `size_t`.
pub fn invoke<T: NativeTarget + ?Sized>(target: &T, buffer: &[u8]) -> Result<Status, ShimError> {
    if buffer.is_empty() {
        tracing::debug!("empty input, native target not called");
        return Ok(Status::CLEAN);
    }

    let len = buffer.len();
    let size = size_t::try_from(len).map_err(|_| ShimError::LengthOverflow { len })?;

    tracing::trace!(len, "forwarding buffer to native target");

    // SAFETY: `buffer` is non-empty, so `as_ptr()` addresses its first byte
    // and is valid for `size` reads. The borrow outlives the call and the
    // pointer is not kept afterwards.
    let raw = unsafe { target.process(buffer.as_ptr(), size) };
    let status = Status::from_native(raw);

    tracing::trace!(len, %status, "native target returned");
    Ok(status)
}
