use std::fmt;

use libc::c_int;
use serde::{Deserialize, Serialize};

/// Status code relayed from a native entry point.
///
/// The shim never interprets the value. `0` conventionally means the target
/// saw nothing unusual; every other value belongs to the driver's protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct Status(pub i32);

impl Status {
    /// Status returned for empty input without calling the target.
    pub const CLEAN: Self = Self(0);

    /// Creates a `Status` from a raw value.
    #[must_use]
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Widens a native `c_int` into a `Status` without truncation.
    #[must_use]
    pub fn from_native(code: c_int) -> Self {
        Self(i32::from(code))
    }

    /// Returns the inner code.
    #[must_use]
    pub fn code(self) -> i32 {
        self.0
    }

    /// Returns `true` for the conventional "no anomaly" value.
    #[must_use]
    pub fn is_clean(self) -> bool {
        self.0 == 0
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::CLEAN
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.0
    }
}
