// Error types that callers need to tell apart. Everything else travels as
// a plain `anyhow::Error` with context attached.

use thiserror::Error;

/// Raised when the `create` command does not receive exactly one filename.
/// It is checked before any config, file or network I/O happens.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Specify filename by argument")]
pub struct UsageError;
