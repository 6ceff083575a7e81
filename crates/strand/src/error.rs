use thiserror::Error;

/// Errors raised when constructing a cursor over external storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The buffer handed to [`NulTerminated::new`] contains no nul byte,
    /// so the cursor would have no way to detect its end.
    ///
    /// [`NulTerminated::new`]: crate::NulTerminated::new
    #[error("byte buffer is missing a nul terminator")]
    MissingTerminator,
}
