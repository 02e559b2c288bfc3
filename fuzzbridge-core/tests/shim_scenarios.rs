//! Integration tests: boundary scenarios against a recording stand-in and
//! against the real native target.

use std::cell::{Cell, RefCell};

use fuzzbridge_core::{invoke, EntryPoint, NativeTarget, Shim, Status};
use libc::{c_int, size_t};

/// Call-counting stand-in for the native function.
struct CountingTarget {
    reply: c_int,
    calls: Cell<usize>,
    last: RefCell<Option<(usize, usize, u8)>>,
}

impl CountingTarget {
    fn new(reply: c_int) -> Self {
        Self { reply, calls: Cell::new(0), last: RefCell::new(None) }
    }
}

impl NativeTarget for CountingTarget {
    unsafe fn process(&self, data: *const u8, size: size_t) -> c_int {
        self.calls.set(self.calls.get() + 1);
        // SAFETY: the shim guarantees `data` is non-null and `size > 0`.
        let first = unsafe { *data };
        *self.last.borrow_mut() = Some((data as usize, size, first));
        self.reply
    }
}

fn native() -> Shim<EntryPoint> {
    Shim::new(fuzzbridge_target::process_buffer as EntryPoint)
}

#[test]
fn scenario_a_empty_buffer_skips_native_call() {
    let target = CountingTarget::new(99);
    let status = invoke(&target, &[]).unwrap_or_else(|e| panic!("invoke failed: {e}"));
    assert_eq!(status, Status::CLEAN, "empty input must return 0");
    assert_eq!(target.calls.get(), 0, "native function must not be called");
}

#[test]
fn scenario_b_single_byte_forwards_pointer_and_length() {
    let target = CountingTarget::new(5);
    let buf = [0x41_u8];
    let status = invoke(&target, &buf).unwrap_or_else(|e| panic!("invoke failed: {e}"));

    assert_eq!(target.calls.get(), 1);
    let last = target.last.borrow().unwrap_or_else(|| panic!("no call recorded"));
    assert_eq!(last.0, buf.as_ptr() as usize, "pointer must address the byte");
    assert_eq!(last.1, 1, "length must be 1");
    assert_eq!(last.2, 0x41, "pointer must read back 0x41");
    assert_eq!(status.code(), 5, "result must be the native return value");
}

#[test]
fn scenario_c_large_buffer_forwards_full_length() {
    let target = CountingTarget::new(-1);
    let buf: Vec<u8> = (0..1024_u32).map(|i| (i.wrapping_mul(31) % 251) as u8).collect();
    let status = invoke(&target, &buf).unwrap_or_else(|e| panic!("invoke failed: {e}"));

    assert_eq!(target.calls.get(), 1);
    let last = target.last.borrow().unwrap_or_else(|| panic!("no call recorded"));
    assert_eq!(last.1, 1024, "length must be 1024");
    assert_eq!(status, Status::new(-1), "result must propagate unchanged");
}

#[test]
fn pass_through_table_of_representative_codes() {
    for code in [0, 1, -1, i32::MAX] {
        let target = CountingTarget::new(code);
        let status = invoke(&target, b"payload").unwrap_or_else(|e| panic!("invoke failed: {e}"));
        assert_eq!(status.code(), code, "code {code} must be relayed verbatim");
    }
}

#[test]
fn native_target_empty_input_returns_clean() {
    let status = native().invoke(&[]).unwrap_or_else(|e| panic!("invoke failed: {e}"));
    assert_eq!(status, Status::CLEAN);
}

#[test]
fn native_target_relays_magic_match() {
    let shim = native();
    let matched = shim.invoke(b"FUZZ").unwrap_or_else(|e| panic!("invoke failed: {e}"));
    let ignored = shim.invoke(b"BUZZ").unwrap_or_else(|e| panic!("invoke failed: {e}"));
    assert_eq!(matched.code(), 1, "magic prefix must be reported as 1");
    assert!(ignored.is_clean(), "other input must be reported as 0");
}

#[test]
fn native_target_is_idempotent_for_identical_buffers() {
    let shim = native();
    let a = shim.invoke(&b"FUZZ-abc".to_vec()).unwrap_or_else(|e| panic!("invoke failed: {e}"));
    let b = shim.invoke(&b"FUZZ-abc".to_vec()).unwrap_or_else(|e| panic!("invoke failed: {e}"));
    assert_eq!(a, b, "identical bytes must give identical status");
}
