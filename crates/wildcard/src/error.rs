// third-party imports
use thiserror::Error;

/// CompileError is an error which may occur when compiling a pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// A `?` directly follows a `*` with no literal character in between.
    #[error("unsupported construct at position {position}: '?' cannot directly follow '*'")]
    UnsupportedConstruct { position: usize },
}
