use std::{io, str::Utf8Error};

use thiserror::Error;

/// Failure modes of the `say_hello` operations.
///
/// Empty input is not one of them: every module treats an empty template or
/// name as "nothing to greet" and returns `Ok(())` without writing a byte.
#[derive(Debug, Error)]
pub enum GreetError {
    /// A C string held bytes that are not valid UTF-8. Raised at the
    /// boundary, before anything is written to the sink. Only reachable
    /// through [`c_string`](crate::c_string); the other representations
    /// guarantee UTF-8 by construction.
    #[error("C string is not valid UTF-8")]
    NotUtf8(#[from] Utf8Error),

    /// The output sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
