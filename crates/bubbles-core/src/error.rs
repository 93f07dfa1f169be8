/// Errors surfaced by the metric set and the clustering engine.
///
/// Both kinds are caller errors: they are raised before or at the malformed
/// call and nothing is retried or partially computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bad K, empty or degenerate dataset, non-finite values, unknown metric.
    InvalidArgument(String),
    /// Two vectors (or two dataset rows) of different length.
    DimensionMismatch { expected: usize, found: usize },
}

/// Result type used by the library crates.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for an `InvalidArgument` with a formatted message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(s) => write!(f, "invalid argument: {}", s),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {}, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_kind() {
        let e = Error::invalid("k must be positive");
        assert_eq!(e.to_string(), "invalid argument: k must be positive");
        let e = Error::DimensionMismatch {
            expected: 2,
            found: 3,
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 2, found 3");
    }
}
