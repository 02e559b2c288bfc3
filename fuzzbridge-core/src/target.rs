//! Native entry-point abstraction.
//!
//! Separates the shim from whatever sits behind the raw-pointer calling
//! convention, so the guard can be exercised against a recording stand-in
//! as well as a real `extern "C"` function.

use libc::{c_int, size_t};

/// Raw-pointer calling convention of a native function under test:
/// `int process(const uint8_t *data, size_t size)`.
pub type EntryPoint = unsafe extern "C" fn(data: *const u8, size: size_t) -> c_int;

/// Something that accepts a pointer plus explicit length.
///
/// Implementations may dereference `data` for `size` bytes. Callers must
/// guarantee `data` is non-null, valid for reads of `size` bytes, and that
/// `size > 0`. Implementations must not retain `data` past the call.
pub trait NativeTarget {
    /// Process one buffer and return the native status code.
    ///
    /// # Safety
    /// See the trait-level contract.
    unsafe fn process(&self, data: *const u8, size: size_t) -> c_int;
}

impl NativeTarget for EntryPoint {
    unsafe fn process(&self, data: *const u8, size: size_t) -> c_int {
        // SAFETY: forwarded verbatim; the caller upholds the trait contract.
        unsafe { (*self)(data, size) }
    }
}

impl<T: NativeTarget + ?Sized> NativeTarget for &T {
    unsafe fn process(&self, data: *const u8, size: size_t) -> c_int {
        // SAFETY: forwarded verbatim; the caller upholds the trait contract.
        unsafe { (**self).process(data, size) }
    }
}
