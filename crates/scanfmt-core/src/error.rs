//! Error types for the scanfmt-core library.
//!
//! Resolution itself never fails: unknown tokens and unknown modes degrade to
//! a wider result. These errors only surface from the parsing entry points a
//! caller invokes directly ([`std::str::FromStr`] on [`crate::Symbology`] and
//! [`crate::Mode`], and [`crate::UriQuery::parse`]).

use thiserror::Error;

/// Result type alias for scanfmt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all scanfmt parse operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Token does not name a known symbology
    #[error("unknown symbology '{name}'")]
    UnknownSymbology {
        /// The rejected token, verbatim
        name: String,
    },

    /// Name is not one of the scan modes
    #[error("unknown scan mode '{name}'")]
    UnknownMode {
        /// The rejected mode name, verbatim
        name: String,
    },

    /// Input could not be parsed as a URI
    #[error("invalid URI '{uri}': {source}")]
    InvalidUri {
        /// The rejected input
        uri: String,
        /// Underlying parse error
        #[source]
        source: url::ParseError,
    },
}

impl Error {
    /// Creates a new unknown symbology error
    pub fn unknown_symbology(name: impl Into<String>) -> Self {
        Self::UnknownSymbology { name: name.into() }
    }

    /// Creates a new unknown mode error
    pub fn unknown_mode(name: impl Into<String>) -> Self {
        Self::UnknownMode { name: name.into() }
    }

    /// Creates a new invalid URI error
    pub fn invalid_uri(uri: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUri {
            uri: uri.into(),
            source,
        }
    }
}
