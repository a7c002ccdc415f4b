//! Carriers that transport a scan request to the resolver.
//!
//! A carrier only decides how the two logical fields (format list and mode)
//! are read out of its container. Resolution is shared; see
//! [`crate::resolver`].
//!
//! Two carriers are provided:
//!
//! - [`IntentExtras`]: single string values per key. The format value is a
//!   comma-separated list.
//! - [`UriQuery`]: URI query parameters. The format key may repeat. A single
//!   value is comma-split; several values are used verbatim, one token each.
//!
//! ## Extensibility
//!
//! Any other container can take part by implementing [`RequestCarrier`]:
//!
//! ```
//! use scanfmt_core::{CarrierConfig, RawRequest, RequestCarrier};
//!
//! struct EnvCarrier;
//!
//! impl RequestCarrier for EnvCarrier {
//!     fn raw_request(&self, config: &CarrierConfig) -> RawRequest {
//!         RawRequest {
//!             formats: None,
//!             mode: std::env::var(&config.mode_key).ok(),
//!         }
//!     }
//! }
//! ```

use crate::error::{Error, Result};
use crate::keys;
use crate::resolver::{split_format_list, RawRequest};
use crate::set::SymbologySet;
use std::collections::HashMap;
use tracing::trace;
use url::Url;

/// Keys the carriers read the request fields from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierConfig {
    /// Key of the format list (default `SCAN_FORMATS`)
    pub formats_key: String,
    /// Key of the mode name (default `SCAN_MODE`)
    pub mode_key: String,
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self {
            formats_key: keys::FORMATS.to_string(),
            mode_key: keys::MODE.to_string(),
        }
    }
}

impl CarrierConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key holding the format list
    pub fn formats_key(mut self, key: impl Into<String>) -> Self {
        self.formats_key = key.into();
        self
    }

    /// Sets the key holding the mode name
    pub fn mode_key(mut self, key: impl Into<String>) -> Self {
        self.mode_key = key.into();
        self
    }
}

/// A container a scan request can be read from
pub trait RequestCarrier {
    /// Extracts the raw format tokens and mode name
    fn raw_request(&self, config: &CarrierConfig) -> RawRequest;

    /// Resolves the request using the default keys
    fn resolve(&self) -> Option<SymbologySet> {
        self.resolve_with(&CarrierConfig::default())
    }

    /// Resolves the request using custom keys
    fn resolve_with(&self, config: &CarrierConfig) -> Option<SymbologySet> {
        self.raw_request(config).resolve()
    }
}

/// String extras attached to an application intent.
///
/// Each key holds at most one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentExtras {
    extras: HashMap<String, String>,
}

impl IntentExtras {
    /// Creates an empty set of extras
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a string extra, replacing any previous value
    pub fn put_extra(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Builder form of [`put_extra`](Self::put_extra)
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put_extra(key, value);
        self
    }

    /// Returns the string extra for `key`, if any
    pub fn string_extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    /// Removes and returns an extra
    pub fn remove_extra(&mut self, key: &str) -> Option<String> {
        self.extras.remove(key)
    }

    /// Number of extras
    pub fn len(&self) -> usize {
        self.extras.len()
    }

    /// True when no extras are set
    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for IntentExtras
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            extras: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl RequestCarrier for IntentExtras {
    fn raw_request(&self, config: &CarrierConfig) -> RawRequest {
        let formats = self
            .string_extra(&config.formats_key)
            .map(|list| split_format_list(list).into_iter().map(String::from).collect());
        let mode = self.string_extra(&config.mode_key).map(String::from);

        trace!("Intent request: formats={:?} mode={:?}", formats, mode);
        RawRequest { formats, mode }
    }
}

/// Query parameters of a scan URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriQuery {
    url: Url,
}

impl UriQuery {
    /// Parses an absolute URI
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input).map_err(|e| Error::invalid_uri(input, e))?;
        Ok(Self { url })
    }

    /// Wraps an already parsed URL
    pub fn from_url(url: Url) -> Self {
        Self { url }
    }

    /// The underlying URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Every value of `key`, in order of appearance (percent-decoded)
    pub fn query_parameters(&self, key: &str) -> Vec<String> {
        self.url
            .query_pairs()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    }

    /// The first value of `key`
    pub fn query_parameter(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

impl From<Url> for UriQuery {
    fn from(url: Url) -> Self {
        Self::from_url(url)
    }
}

impl RequestCarrier for UriQuery {
    fn raw_request(&self, config: &CarrierConfig) -> RawRequest {
        let values = self.query_parameters(&config.formats_key);
        let formats = match values.len() {
            0 => None,
            // Only a lone value is a comma-separated list
            1 => Some(
                split_format_list(&values[0])
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ),
            _ => Some(values),
        };
        let mode = self.query_parameter(&config.mode_key);

        trace!("URI request: formats={:?} mode={:?}", formats, mode);
        RawRequest { formats, mode }
    }
}

impl std::str::FromStr for UriQuery {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
