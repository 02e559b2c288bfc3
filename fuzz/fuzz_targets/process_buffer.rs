//! Fuzz target: native `process_buffer` through the boundary shim.
//!
//! libFuzzer supplies the bytes; the shim guards empty input and forwards
//! the rest to the C-ABI entry point. A crash or sanitizer report inside
//! the target is the finding.

#![no_main]

use fuzzbridge_core::{initialize_once, EntryPoint, Shim};
use libfuzzer_sys::{fuzz_target, Corpus};
use tracing_subscriber::EnvFilter;

/// libFuzzer's reserved "do not add to corpus" return value.
const REJECT: i32 = -1;

static SHIM: Shim<EntryPoint> = Shim::new(fuzzbridge_target::process_buffer as EntryPoint);

fuzz_target!(
    init: {
        initialize_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .try_init();
        });
    },
    |data: &[u8]| -> Corpus {
        match SHIM.invoke(data) {
            Ok(status) if status.code() == REJECT => Corpus::Reject,
            Ok(_) => Corpus::Keep,
            Err(e) => {
                tracing::warn!(error = %e, len = data.len(), "shim rejected input");
                Corpus::Reject
            }
        }
    }
);
