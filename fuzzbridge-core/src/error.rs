/// Errors produced by the `fuzzbridge-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ShimError {
    /// The buffer length does not fit in the native `size_t`.
    #[error("buffer length {len} does not fit in the native size type")]
    LengthOverflow { len: usize },
}
