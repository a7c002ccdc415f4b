//! Named scan modes and their symbology groups.

use crate::error::{Error, Result};
use crate::keys;
use crate::set::{
    SymbologySet, AZTEC_FORMATS, DATA_MATRIX_FORMATS, ONE_D_FORMATS, PDF417_FORMATS,
    PRODUCT_FORMATS, QR_CODE_FORMATS,
};
use std::fmt;
use std::str::FromStr;

/// A named shorthand for a pre-defined group of symbologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// All linear codes
    OneD,
    /// UPC and EAN retail codes
    Product,
    /// QR Code
    QrCode,
    /// Data Matrix
    DataMatrix,
    /// Aztec
    Aztec,
    /// PDF417
    Pdf417,
}

impl Mode {
    /// Every mode
    pub const ALL: [Self; 6] = [
        Self::OneD,
        Self::Product,
        Self::QrCode,
        Self::DataMatrix,
        Self::Aztec,
        Self::Pdf417,
    ];

    /// The mode name carried in a scan request
    pub const fn name(self) -> &'static str {
        match self {
            Self::OneD => keys::ONE_D_MODE,
            Self::Product => keys::PRODUCT_MODE,
            Self::QrCode => keys::QR_CODE_MODE,
            Self::DataMatrix => keys::DATA_MATRIX_MODE,
            Self::Aztec => keys::AZTEC_MODE,
            Self::Pdf417 => keys::PDF417_MODE,
        }
    }

    /// The symbologies this mode decodes
    pub const fn formats(self) -> SymbologySet {
        match self {
            Self::OneD => ONE_D_FORMATS,
            Self::Product => PRODUCT_FORMATS,
            Self::QrCode => QR_CODE_FORMATS,
            Self::DataMatrix => DATA_MATRIX_FORMATS,
            Self::Aztec => AZTEC_FORMATS,
            Self::Pdf417 => PDF417_FORMATS,
        }
    }

    /// Short human-readable summary
    pub const fn description(self) -> &'static str {
        match self {
            Self::OneD => "Decode only 1D barcodes",
            Self::Product => "Decode only UPC and EAN barcodes",
            Self::QrCode => "Decode only QR codes",
            Self::DataMatrix => "Decode only Data Matrix codes",
            Self::Aztec => "Decode only Aztec",
            Self::Pdf417 => "Decode only PDF417",
        }
    }

    /// Looks up a mode by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown_mode(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the symbology set for a mode name, or `None` if the name is not
/// one of the six recognised modes.
pub fn set_for_mode(name: &str) -> Option<SymbologySet> {
    Mode::from_name(name).map(Mode::formats)
}
