//! Crate-level error types.

use std::fmt;

/// Errors produced by the geopick crate.
///
/// The pick path itself never fails; these cover the ambient operations
/// around it (options files, DOM lookups).
#[derive(Debug)]
pub enum GeoPickError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// A required page element or browser API was unavailable.
    Dom(String),
}

impl fmt::Display for GeoPickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for GeoPickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GeoPickError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = GeoPickError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.toml",
        ));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn dom_errors_have_no_source() {
        let err = GeoPickError::Dom("no #myModal".to_owned());
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "DOM error: no #myModal");
    }
}
