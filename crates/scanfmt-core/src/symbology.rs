//! The closed vocabulary of barcode symbologies.
//!
//! Names are the canonical upper-case identifiers used on the wire by scan
//! requests (`QR_CODE`, `EAN_13`, ...). Parsing is exact and case-sensitive.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A barcode symbology known to the decoding engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Symbology {
    /// Aztec 2D
    Aztec = 0,
    /// Codabar 1D
    Codabar = 1,
    /// Code 39 1D
    Code39 = 2,
    /// Code 93 1D
    Code93 = 3,
    /// Code 128 1D
    Code128 = 4,
    /// Data Matrix 2D
    DataMatrix = 5,
    /// EAN-8 1D
    Ean8 = 6,
    /// EAN-13 1D
    Ean13 = 7,
    /// Interleaved 2 of 5
    Itf = 8,
    /// MaxiCode 2D
    MaxiCode = 9,
    /// PDF417 stacked
    Pdf417 = 10,
    /// QR Code 2D
    QrCode = 11,
    /// GS1 DataBar (RSS-14)
    Rss14 = 12,
    /// GS1 DataBar Expanded
    RssExpanded = 13,
    /// UPC-A 1D
    UpcA = 14,
    /// UPC-E 1D
    UpcE = 15,
    /// UPC/EAN 2- and 5-digit extension
    UpcEanExtension = 16,
}

impl Symbology {
    /// Every symbology, in declaration order
    pub const ALL: [Self; 17] = [
        Self::Aztec,
        Self::Codabar,
        Self::Code39,
        Self::Code93,
        Self::Code128,
        Self::DataMatrix,
        Self::Ean8,
        Self::Ean13,
        Self::Itf,
        Self::MaxiCode,
        Self::Pdf417,
        Self::QrCode,
        Self::Rss14,
        Self::RssExpanded,
        Self::UpcA,
        Self::UpcE,
        Self::UpcEanExtension,
    ];

    /// Canonical identifier, e.g. `"CODE_128"`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aztec => "AZTEC",
            Self::Codabar => "CODABAR",
            Self::Code39 => "CODE_39",
            Self::Code93 => "CODE_93",
            Self::Code128 => "CODE_128",
            Self::DataMatrix => "DATA_MATRIX",
            Self::Ean8 => "EAN_8",
            Self::Ean13 => "EAN_13",
            Self::Itf => "ITF",
            Self::MaxiCode => "MAXICODE",
            Self::Pdf417 => "PDF_417",
            Self::QrCode => "QR_CODE",
            Self::Rss14 => "RSS_14",
            Self::RssExpanded => "RSS_EXPANDED",
            Self::UpcA => "UPC_A",
            Self::UpcE => "UPC_E",
            Self::UpcEanExtension => "UPC_EAN_EXTENSION",
        }
    }

    /// Looks up a symbology by its exact canonical identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Linear (bar/space) symbologies
    pub const fn is_one_dimensional(self) -> bool {
        matches!(
            self,
            Self::Codabar
                | Self::Code39
                | Self::Code93
                | Self::Code128
                | Self::Ean8
                | Self::Ean13
                | Self::Itf
                | Self::Rss14
                | Self::RssExpanded
                | Self::UpcA
                | Self::UpcE
                | Self::UpcEanExtension
        )
    }

    /// Two-dimensional and stacked symbologies
    pub const fn is_matrix(self) -> bool {
        !self.is_one_dimensional()
    }

    /// Bit position used by [`crate::SymbologySet`]
    pub(crate) const fn bit(self) -> u32 {
        1 << (self as u8)
    }
}

impl FromStr for Symbology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::unknown_symbology(s))
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        for symbology in Symbology::ALL {
            assert_eq!(Symbology::from_name(symbology.name()), Some(symbology));
            assert_eq!(symbology.name().parse::<Symbology>().unwrap(), symbology);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("qr_code".parse::<Symbology>().is_err());
        assert!("QR_Code".parse::<Symbology>().is_err());
        assert_eq!("QR_CODE".parse::<Symbology>().unwrap(), Symbology::QrCode);
    }

    #[test]
    fn test_parse_does_not_trim() {
        assert!(" EAN_13".parse::<Symbology>().is_err());
        assert!("EAN_13 ".parse::<Symbology>().is_err());
        assert!("".parse::<Symbology>().is_err());
    }

    #[test]
    fn test_parse_error_carries_token() {
        let err = "PDF417".parse::<Symbology>().unwrap_err();
        assert_eq!(err, Error::unknown_symbology("PDF417"));
    }

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (i, symbology) in Symbology::ALL.iter().enumerate() {
            assert_eq!(*symbology as usize, i);
        }
    }

    #[test]
    fn test_classification() {
        assert!(Symbology::Code128.is_one_dimensional());
        assert!(Symbology::UpcEanExtension.is_one_dimensional());
        assert!(Symbology::Pdf417.is_matrix());
        assert!(Symbology::MaxiCode.is_matrix());
        assert!(!Symbology::QrCode.is_one_dimensional());
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbology::RssExpanded.to_string(), "RSS_EXPANDED");
    }
}
