//! Boundary shim between a coverage-guided fuzzer and a native function
//! under test.
//!
//! The fuzzer hands over a byte slice; the shim checks it is non-empty and
//! forwards a raw pointer plus length to a C-ABI entry point, relaying the
//! integer status back untouched.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod digest;
pub mod error;
pub mod init;
pub mod shim;
pub mod status;
pub mod target;

pub use digest::InputDigest;
pub use error::ShimError;
pub use init::{initialize_once, is_initialized};
pub use shim::{invoke, Shim};
pub use status::Status;
pub use target::{EntryPoint, NativeTarget};
