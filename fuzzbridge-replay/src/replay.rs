//! Replays stored inputs through the shim outside the fuzzer.
//!
//! Used to re-run a corpus or to reproduce a crash file: each input goes
//! through exactly the same [`Shim`] the fuzz harness uses, so a planted or
//! discovered defect fires the same way it did under libFuzzer.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use fuzzbridge_core::{InputDigest, NativeTarget, Shim, Status};
use serde::Serialize;

use crate::{ReplayConfig, ReplayError};

/// Outcome of replaying one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct ReplayRecord {
    /// Path or label identifying the input.
    pub input: String,
    /// Input length in bytes.
    pub len: usize,
    /// SHA-256 of the input, lowercase hex.
    pub sha256: String,
    /// Status relayed from the native target.
    pub status: Status,
}

/// Totals over a replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct ReplaySummary {
    /// Inputs replayed.
    pub total: usize,
    /// Inputs that returned status `0`.
    pub clean: usize,
    /// Inputs that returned any other status.
    pub nonzero: usize,
}

impl ReplaySummary {
    /// Account for one record.
    pub fn record(&mut self, record: &ReplayRecord) {
        self.total += 1;
        if record.status.is_clean() {
            self.clean += 1;
        } else {
            self.nonzero += 1;
        }
    }
}

/// Feeds stored inputs through a [`Shim`].
pub struct Replayer<T: NativeTarget> {
    shim: Shim<T>,
    config: ReplayConfig,
}

impl<T: NativeTarget> Replayer<T> {
    /// Create a replayer over `shim` with the given limits.
    #[must_use]
    pub fn new(shim: Shim<T>, config: ReplayConfig) -> Self {
        Self { shim, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// Replay an in-memory input identified by `label`.
    ///
    /// # Errors
    /// Returns [`ReplayError::InputTooLarge`] if the input exceeds
    /// `max_input_len`, [`ReplayError::Shim`] if the shim rejects it, and
    /// [`ReplayError::NonZeroStatus`] if `fail_on_nonzero` is set and the
    /// target returns anything but `0`.
    pub fn replay_bytes(&self, label: &str, bytes: &[u8]) -> Result<ReplayRecord, ReplayError> {
        let len = bytes.len();
        if len > self.config.max_input_len {
            return Err(ReplayError::InputTooLarge {
                input: label.to_owned(),
                len,
                max: self.config.max_input_len,
            });
        }

        let digest = InputDigest::of(bytes);
        tracing::debug!(input = %label, len, sha256 = %digest, "replaying input");

        let status = self.shim.invoke(bytes)?;

        if status.is_clean() {
            tracing::info!(input = %label, len, %status, "replayed");
        } else {
            tracing::warn!(input = %label, len, %status, "native target returned non-zero status");
            if self.config.fail_on_nonzero {
                return Err(ReplayError::NonZeroStatus { input: label.to_owned(), status });
            }
        }

        Ok(ReplayRecord { input: label.to_owned(), len, sha256: digest.to_string(), status })
    }

    /// Read `path` and replay its contents.
    ///
    /// At most `max_input_len + 1` bytes are read, so oversized files,
    /// FIFOs and devices are rejected without buffering them whole. For
    /// streams the reported length is the number of bytes read before the
    /// limit was hit.
    ///
    /// # Errors
    /// Returns [`ReplayError::Io`] if the file cannot be read,
    /// [`ReplayError::InputTooLarge`] if it exceeds `max_input_len`, plus any
    /// error from [`Replayer::replay_bytes`].
    pub fn replay_path(&self, path: &Path) -> Result<ReplayRecord, ReplayError> {
        let io_err = |source| ReplayError::Io { path: path.to_path_buf(), source };
        let max = self.config.max_input_len;
        let too_large = |len| ReplayError::InputTooLarge {
            input: path.display().to_string(),
            len,
            max,
        };

        let file = File::open(path).map_err(io_err)?;
        let meta = file.metadata().map_err(io_err)?;
        if meta.is_file() {
            let len = usize::try_from(meta.len()).unwrap_or(usize::MAX);
            if len > max {
                return Err(too_large(len));
            }
        }

        let limit = u64::try_from(max).unwrap_or(u64::MAX).saturating_add(1);
        let mut bytes = Vec::new();
        file.take(limit).read_to_end(&mut bytes).map_err(io_err)?;
        if bytes.len() > max {
            return Err(too_large(bytes.len()));
        }

        self.replay_bytes(&path.display().to_string(), &bytes)
    }
}

/// Expand `paths` into the list of files to replay.
///
/// File arguments are kept in order. Directory arguments contribute their
/// regular files (not recursive), sorted by name so runs are reproducible.
/// Symlinks are followed in both cases.
///
/// # Errors
/// Returns [`ReplayError::Io`] if a path cannot be inspected or a directory
/// cannot be listed.
pub fn collect_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, ReplayError> {
    let mut inputs = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let io_err = |source| ReplayError::Io { path: path.to_path_buf(), source };

        let meta = std::fs::metadata(path).map_err(io_err)?;
        if !meta.is_dir() {
            inputs.push(path.to_path_buf());
            continue;
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(path).map_err(io_err)? {
            let entry_path = entry.map_err(io_err)?.path();
            let entry_meta = std::fs::metadata(&entry_path)
                .map_err(|source| ReplayError::Io { path: entry_path.clone(), source })?;
            if entry_meta.is_file() {
                files.push(entry_path);
            }
        }
        files.sort();
        tracing::debug!(dir = %path.display(), count = files.len(), "expanded corpus directory");
        inputs.extend(files);
    }
    Ok(inputs)
}
