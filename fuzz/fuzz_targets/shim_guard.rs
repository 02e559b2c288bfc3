//! Fuzz target: boundary guard and pass-through of the shim.
//!
//! Drives the shim with a recording stand-in and checks that empty input
//! never reaches the target and that non-empty input arrives exactly once
//! with the caller's pointer, length and bytes.

#![no_main]

use std::cell::Cell;

use fuzzbridge_core::{invoke, NativeTarget, Status};
use libc::{c_int, size_t};
use libfuzzer_sys::fuzz_target;

struct Witness<'a> {
    expected: &'a [u8],
    calls: Cell<usize>,
}

impl NativeTarget for Witness<'_> {
    unsafe fn process(&self, data: *const u8, size: size_t) -> c_int {
        self.calls.set(self.calls.get() + 1);
        assert!(!data.is_null(), "shim passed a null pointer");
        assert!(size > 0, "shim forwarded an empty buffer");
        assert_eq!(data, self.expected.as_ptr(), "pointer must address the first byte");
        // SAFETY: non-null and valid for `size` bytes per the shim contract.
        let seen = unsafe { std::slice::from_raw_parts(data, size) };
        assert_eq!(seen, self.expected, "target must see the caller's bytes");
        // Echo a status derived from the input so pass-through is checked too.
        c_int::from(seen[0]) - 128
    }
}

fuzz_target!(|data: &[u8]| {
    let witness = Witness { expected: data, calls: Cell::new(0) };
    let status = match invoke(&witness, data) {
        Ok(s) => s,
        Err(e) => panic!("shim failed on {} bytes: {e}", data.len()),
    };

    if data.is_empty() {
        assert_eq!(status, Status::CLEAN, "empty input must return 0");
        assert_eq!(witness.calls.get(), 0, "empty input must not reach the target");
    } else {
        assert_eq!(witness.calls.get(), 1, "target must be called exactly once");
        assert_eq!(status.code(), i32::from(data[0]) - 128, "status must pass through");
    }
});
