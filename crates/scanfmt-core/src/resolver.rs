//! Format resolution: explicit format list first, then scan mode.
//!
//! ## Precedence
//!
//! 1. An explicit format list, when present, wins if *every* token names a
//!    known symbology. A single unrecognised token discards the whole list.
//! 2. Otherwise a recognised mode name selects its pre-built group.
//! 3. Otherwise the result is `None`, meaning "no restriction".
//!
//! Nothing here returns an error. Bad input only widens the result.

use crate::error::Result;
use crate::mode::set_for_mode;
use crate::set::SymbologySet;
use crate::symbology::Symbology;
use tracing::{debug, trace};

/// Separator between names in a format list
pub const FORMAT_SEPARATOR: char = ',';

/// A scan request reduced to its two logical fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    /// Explicit format tokens; `None` when the carrier had no format field
    pub formats: Option<Vec<String>>,
    /// Mode name; `None` when the carrier had no mode field
    pub mode: Option<String>,
}

impl RawRequest {
    /// Creates an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the explicit format tokens
    pub fn formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = Some(formats.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the explicit formats from a comma-separated list
    pub fn format_list(self, list: &str) -> Self {
        self.formats(split_format_list(list))
    }

    /// Sets the mode name
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Resolves this request
    pub fn resolve(&self) -> Option<SymbologySet> {
        resolve(self.formats.as_deref(), self.mode.as_deref())
    }
}

/// Resolves explicit format tokens and/or a mode name into the symbologies a
/// decoder should attempt.
///
/// `Some(set)` restricts decoding to `set` (which may be empty when an empty
/// token list was given). `None` means every supported symbology.
pub fn resolve<I, S>(raw_formats: Option<I>, mode: Option<&str>) -> Option<SymbologySet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if let Some(tokens) = raw_formats {
        match parse_formats(tokens) {
            Ok(formats) => {
                trace!("Resolved explicit formats: [{}]", formats);
                return Some(formats);
            }
            Err(e) => {
                debug!("Ignoring explicit format list: {}", e);
            }
        }
    }

    let mode = mode?;
    let formats = set_for_mode(mode);
    match formats {
        Some(formats) => trace!("Resolved mode {} to [{}]", mode, formats),
        None => debug!("Unknown scan mode '{}', not restricting formats", mode),
    }
    formats
}

/// Parses every token; fails on the first unrecognised one.
pub fn parse_formats<I, S>(tokens: I) -> Result<SymbologySet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| token.as_ref().parse::<Symbology>())
        .collect()
}

/// Splits a comma-separated format list into tokens.
///
/// A string with no separator is a single token, so `""` yields `[""]`.
/// Otherwise trailing empty tokens are dropped: `"A,B,"` yields `["A", "B"]`
/// and `",,"` yields nothing. Tokens are not trimmed.
pub fn split_format_list(list: &str) -> Vec<&str> {
    if !list.contains(FORMAT_SEPARATOR) {
        return vec![list];
    }

    let mut tokens: Vec<&str> = list.split(FORMAT_SEPARATOR).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}
