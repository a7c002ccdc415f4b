//! # scanfmt-core
//!
//! Resolves a barcode scan request into the set of symbologies a decoder
//! should attempt.
//!
//! A request names either explicit formats (`"EAN_13,EAN_8,QR_CODE"`) or a
//! scan mode (`PRODUCT_MODE`, `QR_CODE_MODE`, ...). Explicit formats take
//! precedence, but only if every name in the list is recognised. A bad name
//! discards the whole list and resolution falls back to the mode. An unknown
//! or missing mode means "no restriction".
//!
//! ## Architecture
//!
//! - [`symbology`]: the closed catalog of [`Symbology`] values
//! - [`set`]: [`SymbologySet`] and the pre-built category groups
//! - [`mode`]: the six scan [`Mode`]s and [`set_for_mode`]
//! - [`resolver`]: the precedence rules ([`resolve`], [`RawRequest`])
//! - [`carrier`]: reading requests from intent extras or URI queries
//! - [`keys`]: key names of the scan request contract
//! - [`error`]: error types for the parsing entry points
//!
//! ## Example
//!
//! ```
//! use scanfmt_core::{keys, IntentExtras, RequestCarrier, Symbology, UriQuery};
//!
//! let extras = IntentExtras::new()
//!     .with_extra(keys::FORMATS, "QR_CODE,NOT_A_FORMAT")
//!     .with_extra(keys::MODE, keys::PRODUCT_MODE);
//! let formats = extras.resolve().unwrap();
//! assert!(formats.contains(Symbology::Ean13));
//! assert!(!formats.contains(Symbology::QrCode));
//!
//! let query = UriQuery::parse("scan://decode?SCAN_FORMATS=AZTEC&SCAN_FORMATS=PDF_417")?;
//! assert_eq!(query.resolve().unwrap().len(), 2);
//! # Ok::<(), scanfmt_core::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod carrier;
pub mod error;
pub mod keys;
pub mod mode;
pub mod resolver;
pub mod set;
pub mod symbology;

// Re-export primary types for convenience
pub use carrier::{CarrierConfig, IntentExtras, RequestCarrier, UriQuery};
pub use error::{Error, Result};
pub use mode::{set_for_mode, Mode};
pub use resolver::{parse_formats, resolve, split_format_list, RawRequest};
pub use set::{
    SymbologySet, AZTEC_FORMATS, DATA_MATRIX_FORMATS, INDUSTRIAL_FORMATS, ONE_D_FORMATS,
    PDF417_FORMATS, PRODUCT_FORMATS, QR_CODE_FORMATS,
};
pub use symbology::Symbology;

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
