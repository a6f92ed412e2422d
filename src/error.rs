/// Error types for the logsift library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred while writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A regex compilation error.
    #[error("regex error: {0}")]
    Regex(#[from] regex_automata::meta::BuildError),
}

/// Convenience type alias for Results using the library error.
pub type Result<T> = std::result::Result<T, Error>;
