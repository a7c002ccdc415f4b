//! Key names of the scan request contract.
//!
//! Only [`FORMATS`] and [`MODE`] are read by the resolver. The remaining keys
//! belong to the same request/result contract and are published so callers
//! assembling a carrier use the exact spelling.

/// Action string that asks a scanner app to find a barcode and return it
pub const ACTION: &str = "com.schaffer.zxinglibrary.SCAN";

/// Scan mode key. Overridden by [`FORMATS`] when that is present and valid.
pub const MODE: &str = "SCAN_MODE";

/// Decode only UPC and EAN barcodes
pub const PRODUCT_MODE: &str = "PRODUCT_MODE";

/// Decode only 1D barcodes
pub const ONE_D_MODE: &str = "ONE_D_MODE";

/// Decode only QR codes
pub const QR_CODE_MODE: &str = "QR_CODE_MODE";

/// Decode only Data Matrix codes
pub const DATA_MATRIX_MODE: &str = "DATA_MATRIX_MODE";

/// Decode only Aztec
pub const AZTEC_MODE: &str = "AZTEC_MODE";

/// Decode only PDF417
pub const PDF417_MODE: &str = "PDF417_MODE";

/// Comma-separated symbology names, e.g. `"EAN_13,EAN_8,QR_CODE"`
pub const FORMATS: &str = "SCAN_FORMATS";

/// Camera id to scan with (int)
pub const CAMERA_ID: &str = "SCAN_CAMERA_ID";

/// Character set hint for decoding text payloads
pub const CHARACTER_SET: &str = "CHARACTER_SET";

/// Scanning rectangle width in pixels (int)
pub const WIDTH: &str = "SCAN_WIDTH";

/// Scanning rectangle height in pixels (int)
pub const HEIGHT: &str = "SCAN_HEIGHT";

/// Pause after a successful scan, in milliseconds (long)
pub const RESULT_DISPLAY_DURATION_MS: &str = "RESULT_DISPLAY_DURATION_MS";

/// On-screen prompt while scanning
pub const PROMPT_MESSAGE: &str = "PROMPT_MESSAGE";

/// Decoded contents
pub const RESULT: &str = "SCAN_RESULT";

/// Symbology name of the decoded barcode
pub const RESULT_FORMAT: &str = "SCAN_RESULT_FORMAT";

/// Contents of a UPC/EAN extension found next to the main barcode
pub const RESULT_UPC_EAN_EXTENSION: &str = "SCAN_RESULT_UPC_EAN_EXTENSION";

/// Raw bytes of the barcode, if available
pub const RESULT_BYTES: &str = "SCAN_RESULT_BYTES";

/// Orientation metadata
pub const RESULT_ORIENTATION: &str = "SCAN_RESULT_ORIENTATION";

/// Error correction level metadata
pub const RESULT_ERROR_CORRECTION_LEVEL: &str = "SCAN_RESULT_ERROR_CORRECTION_LEVEL";

/// Prefix for byte segment keys; segment `n` lives under `{prefix}{n}`
pub const RESULT_BYTE_SEGMENTS_PREFIX: &str = "SCAN_RESULT_BYTE_SEGMENTS_";

/// Whether the scan should be saved to history (bool)
pub const SAVE_HISTORY: &str = "SAVE_HISTORY";

/// Key holding byte segment `index` of a result
pub fn result_byte_segment(index: usize) -> String {
    format!("{RESULT_BYTE_SEGMENTS_PREFIX}{index}")
}
