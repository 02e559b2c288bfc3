//! Native function under test.
//!
//! Exposes `process_buffer` with the C calling convention so it can be
//! driven through a raw pointer and length, either from the Rust shim or
//! from a C driver linking the static library. Inputs starting with the
//! `FUZZ` magic are recognised; `FUZZX` hits a planted defect that aborts
//! the process.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

use libc::{c_int, size_t};

/// Prefix the target recognises.
pub const MAGIC: &[u8; 4] = b"FUZZ";

/// Byte after [`MAGIC`] that triggers the planted defect.
pub const TRAP_BYTE: u8 = b'X';

/// What the target decides to do with an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Verdict {
    /// Too short or no magic prefix. Reported as `0`.
    Ignored,
    /// Magic prefix present. Reported as `1`.
    Matched,
    /// Magic prefix followed by [`TRAP_BYTE`]. Aborts the process.
    Trap,
}

impl Verdict {
    /// Status code reported for non-trapping verdicts.
    #[must_use]
    pub fn code(self) -> c_int {
        match self {
            Verdict::Ignored => 0,
            Verdict::Matched | Verdict::Trap => 1,
        }
    }
}

/// Classify `data` without side effects.
#[must_use]
pub fn classify(data: &[u8]) -> Verdict {
    match data {
        [m0, m1, m2, m3, rest @ ..] if [*m0, *m1, *m2, *m3] == *MAGIC => match rest.first() {
            Some(&TRAP_BYTE) => Verdict::Trap,
            _ => Verdict::Matched,
        },
        _ => Verdict::Ignored,
    }
}

/// `int process_buffer(const uint8_t *data, size_t size)`
///
/// Returns `0` for null or short input, `1` for input carrying the magic
/// prefix, and aborts on the planted defect.
///
/// # Safety
/// If `data` is non-null it must be valid for reads of `size` bytes for the
/// duration of the call.
#[no_mangle]
pub unsafe extern "C" fn process_buffer(data: *const u8, size: size_t) -> c_int {
    if data.is_null() || size < MAGIC.len() {
        return 0;
    }
    // SAFETY: non-null and valid for `size` bytes per the function contract.
    let input = unsafe { std::slice::from_raw_parts(data, size) };
    match classify(input) {
        Verdict::Trap => std::process::abort(),
        verdict => verdict.code(),
    }
}

#[cfg(test)]
mod tests {
    use std::process::Command;

    use super::*;

    /// Set in the child process that is expected to hit the trap.
    const TRAP_CHILD_ENV: &str = "FUZZBRIDGE_TARGET_TRAP_CHILD";

    #[test]
    fn classify_short_input_is_ignored() {
        assert_eq!(classify(b""), Verdict::Ignored);
        assert_eq!(classify(b"FUZ"), Verdict::Ignored, "3 bytes must be ignored");
    }

    #[test]
    fn classify_magic_prefix_matches() {
        assert_eq!(classify(b"FUZZ"), Verdict::Matched);
        assert_eq!(classify(b"FUZZY"), Verdict::Matched, "non-trap fifth byte must match");
        assert_eq!(classify(b"FUZZ\0X"), Verdict::Matched, "trap byte must be fifth");
    }

    #[test]
    fn classify_trap_byte_after_magic_traps() {
        assert_eq!(classify(b"FUZZX"), Verdict::Trap);
        assert_eq!(classify(b"FUZZXtrailing"), Verdict::Trap);
    }

    #[test]
    fn classify_other_input_is_ignored() {
        assert_eq!(classify(b"fuzz"), Verdict::Ignored, "magic is case-sensitive");
        assert_eq!(classify(b"XFUZZ"), Verdict::Ignored, "magic must be a prefix");
    }

    #[test]
    fn process_buffer_null_pointer_returns_zero() {
        // SAFETY: a null pointer is explicitly handled.
        let rc = unsafe { process_buffer(std::ptr::null(), 16) };
        assert_eq!(rc, 0, "null input must return 0");
    }

    #[test]
    fn process_buffer_reports_non_trapping_verdicts() {
        let cases: [(&[u8], c_int); 4] = [
            (&b"A"[..], 0),
            (&b"FUZ"[..], 0),
            (&b"FUZZ"[..], 1),
            (&b"FUZZY!"[..], 1),
        ];
        for (input, expected) in cases {
            // SAFETY: `input` is valid for its full length.
            let rc = unsafe { process_buffer(input.as_ptr(), input.len()) };
            assert_eq!(rc, expected, "unexpected status for {input:?}");
        }
    }

    #[test]
    fn process_buffer_honours_size_over_buffer_contents() {
        let input = b"FUZZX";
        // SAFETY: only the first 4 bytes are exposed.
        let rc = unsafe { process_buffer(input.as_ptr(), 4) };
        assert_eq!(rc, 1, "trap byte outside `size` must not be read");
    }

    #[test]
    fn process_buffer_trap_input_aborts_process() {
        if std::env::var_os(TRAP_CHILD_ENV).is_some() {
            let input = b"FUZZX";
            // SAFETY: `input` is valid for its full length.
            let _ = unsafe { process_buffer(input.as_ptr(), input.len()) };
            // Reaching this line means the trap did not fire.
            std::process::exit(0);
        }

        let exe = match std::env::current_exe() {
            Ok(p) => p,
            Err(e) => panic!("failed to locate test binary: {e}"),
        };
        let output = match Command::new(exe)
            .args(["--exact", "tests::process_buffer_trap_input_aborts_process", "--test-threads=1"])
            .env(TRAP_CHILD_ENV, "1")
            .output()
        {
            Ok(o) => o,
            Err(e) => panic!("failed to run child test process: {e}"),
        };

        assert!(!output.status.success(), "trap input must not exit cleanly: {:?}", output.status);
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            assert_eq!(
                output.status.signal(),
                Some(libc::SIGABRT),
                "trap input must end the process with SIGABRT"
            );
        }
    }
}
