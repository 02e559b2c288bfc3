//! Entry point for the `fuzzbridge-replay` CLI.
//!
//! Usage: `fuzzbridge-replay <file-or-dir>...`
//!
//! Prints one JSON record per input and a JSON summary on stdout. Logs go
//! to stderr and honour `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;

use fuzzbridge_core::{EntryPoint, Shim};
use fuzzbridge_replay::{collect_inputs, ReplayConfig, ReplayError, ReplaySummary, Replayer};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if args.is_empty() {
        eprintln!("usage: fuzzbridge-replay <file-or-dir>...");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(summary) => {
            info!(
                total = summary.total,
                clean = summary.clean,
                nonzero = summary.nonzero,
                "replay complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[PathBuf]) -> Result<ReplaySummary, ReplayError> {
    let config = ReplayConfig::from_env()?;
    let replayer = Replayer::new(Shim::new(fuzzbridge_target::process_buffer as EntryPoint), config);
    info!(
        max_input_len = replayer.config().max_input_len,
        fail_on_nonzero = replayer.config().fail_on_nonzero,
        "starting replay"
    );
    let inputs = collect_inputs(args)?;

    let mut summary = ReplaySummary::default();
    for path in &inputs {
        let record = replayer.replay_path(path)?;
        summary.record(&record);
        emit(&record);
    }
    emit(&summary);
    Ok(summary)
}

fn emit<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(line) => println!("{line}"),
        Err(e) => tracing::error!(error = %e, "failed to serialize report line"),
    }
}
