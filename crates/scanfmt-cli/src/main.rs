//! scanfmt - Resolve barcode scan requests
//!
//! This tool takes a scan request, either as intent-style fields or as a
//! scan URI, and prints the symbologies a decoder should attempt.

use anyhow::{Context, Result};
use clap::{Args, Parser, ValueEnum};
use scanfmt_core::{
    CarrierConfig, IntentExtras, Mode, RequestCarrier, Symbology, SymbologySet, UriQuery,
};
use std::io::{self, Write};
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Printed when the request places no restriction on symbologies
const UNRESTRICTED: &str = "ALL";

/// Resolve a barcode scan request into the symbologies to decode
#[derive(Parser, Debug)]
#[command(name = "scanfmt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    input: InputMode,

    /// Key holding the format list
    #[arg(long, default_value = scanfmt_core::keys::FORMATS, env = "SCANFMT_FORMATS_KEY")]
    formats_key: String,

    /// Key holding the scan mode
    #[arg(long, default_value = scanfmt_core::keys::MODE, env = "SCANFMT_MODE_KEY")]
    mode_key: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "names")]
    output: OutputFormat,

    /// List the scan modes and their symbologies, then exit
    #[arg(long, conflicts_with_all = ["uri", "formats", "mode", "list_symbologies"])]
    list_modes: bool,

    /// List every known symbology, then exit
    #[arg(long, conflicts_with_all = ["uri", "formats", "mode"])]
    list_symbologies: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Debug)]
struct InputMode {
    /// Scan URI, e.g. "scan://decode?SCAN_FORMATS=EAN_13,EAN_8&SCAN_MODE=PRODUCT_MODE"
    #[arg(short, long, conflicts_with_all = ["formats", "mode"])]
    uri: Option<String>,

    /// Comma-separated symbology names, e.g. "EAN_13,EAN_8,QR_CODE"
    #[arg(short, long)]
    formats: Option<String>,

    /// Scan mode name, e.g. PRODUCT_MODE
    #[arg(short, long)]
    mode: Option<String>,
}

/// How the resolved set is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One symbology per line
    Names,
    /// A single comma-separated line (usable as a format list)
    List,
    /// Just the number of symbologies
    Count,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list_modes {
        return write_modes(&mut out).context("Failed to write mode listing");
    }
    if cli.list_symbologies {
        return write_symbologies(&mut out).context("Failed to write symbology listing");
    }

    let resolved = resolve_request(&cli)?;
    match resolved {
        Some(set) => info!("Resolved {} symbologies", set.len()),
        None => info!("No restriction: decoder should try every symbology"),
    }

    write_resolved(&mut out, resolved, cli.output).context("Failed to write result")
}

/// Build the carrier described by the arguments and resolve it
fn resolve_request(cli: &Cli) -> Result<Option<SymbologySet>> {
    let config = CarrierConfig::new()
        .formats_key(&cli.formats_key)
        .mode_key(&cli.mode_key);

    if let Some(ref uri) = cli.input.uri {
        debug!("Resolving URI carrier: {}", uri);
        let query = UriQuery::parse(uri).with_context(|| format!("Invalid scan URI: {uri}"))?;
        return Ok(query.resolve_with(&config));
    }

    let extras = intent_extras(&cli.input, &config);
    debug!("Resolving intent carrier with {} extras", extras.len());
    Ok(extras.resolve_with(&config))
}

/// Intent extras holding whichever fields were given
fn intent_extras(input: &InputMode, config: &CarrierConfig) -> IntentExtras {
    let mut extras = IntentExtras::new();
    if let Some(ref formats) = input.formats {
        extras.put_extra(config.formats_key.as_str(), formats.as_str());
    }
    if let Some(ref mode) = input.mode {
        extras.put_extra(config.mode_key.as_str(), mode.as_str());
    }
    extras
}

/// Print a resolution result
fn write_resolved(
    out: &mut impl Write,
    resolved: Option<SymbologySet>,
    format: OutputFormat,
) -> io::Result<()> {
    match (resolved, format) {
        (None, OutputFormat::Count) => writeln!(out, "all"),
        (None, _) => writeln!(out, "{UNRESTRICTED}"),
        (Some(set), OutputFormat::Count) => writeln!(out, "{}", set.len()),
        (Some(set), OutputFormat::List) => {
            if set.is_empty() {
                return Ok(());
            }
            writeln!(out, "{set}")
        }
        (Some(set), OutputFormat::Names) => {
            for symbology in set {
                writeln!(out, "{symbology}")?;
            }
            Ok(())
        }
    }
}

/// Print every scan mode with its description and symbologies
fn write_modes(out: &mut impl Write) -> io::Result<()> {
    for mode in Mode::ALL {
        writeln!(out, "{:<18} {}", mode.name(), mode.description())?;
        writeln!(out, "{:<18} {}", "", mode.formats())?;
    }
    Ok(())
}

/// Print the symbology catalog
fn write_symbologies(out: &mut impl Write) -> io::Result<()> {
    for symbology in Symbology::ALL {
        let kind = if symbology.is_one_dimensional() { "1D" } else { "2D" };
        writeln!(out, "{:<18} {}", symbology.name(), kind)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(resolved: Option<SymbologySet>, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_resolved(&mut buf, resolved, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn run(args: &[&str]) -> Option<SymbologySet> {
        let cli = Cli::try_parse_from(std::iter::once("scanfmt").chain(args.iter().copied()))
            .unwrap();
        resolve_request(&cli).unwrap()
    }

    #[test]
    fn test_render_names() {
        let set = SymbologySet::of(&[Symbology::QrCode, Symbology::Aztec]);
        assert_eq!(render(Some(set), OutputFormat::Names), "AZTEC\nQR_CODE\n");
    }

    #[test]
    fn test_render_list_and_count() {
        let set = SymbologySet::of(&[Symbology::Ean8, Symbology::Ean13]);
        assert_eq!(render(Some(set), OutputFormat::List), "EAN_8,EAN_13\n");
        assert_eq!(render(Some(set), OutputFormat::Count), "2\n");
    }

    #[test]
    fn test_render_unrestricted() {
        assert_eq!(render(None, OutputFormat::Names), "ALL\n");
        assert_eq!(render(None, OutputFormat::List), "ALL\n");
        assert_eq!(render(None, OutputFormat::Count), "all\n");
    }

    #[test]
    fn test_render_empty_set() {
        assert_eq!(render(Some(SymbologySet::EMPTY), OutputFormat::Names), "");
        assert_eq!(render(Some(SymbologySet::EMPTY), OutputFormat::List), "");
        assert_eq!(render(Some(SymbologySet::EMPTY), OutputFormat::Count), "0\n");
    }

    #[test]
    fn test_resolve_intent_arguments() {
        assert_eq!(
            run(&["--formats", "QR_CODE", "--mode", "PRODUCT_MODE"]),
            Some(scanfmt_core::QR_CODE_FORMATS)
        );
        assert_eq!(
            run(&["--formats", "bogus", "--mode", "PRODUCT_MODE"]),
            Some(scanfmt_core::PRODUCT_FORMATS)
        );
        assert_eq!(run(&[]), None);
    }

    #[test]
    fn test_resolve_uri_argument() {
        assert_eq!(
            run(&["--uri", "scan://decode?SCAN_FORMATS=AZTEC&SCAN_FORMATS=PDF_417"]),
            Some(SymbologySet::of(&[Symbology::Aztec, Symbology::Pdf417]))
        );
    }

    #[test]
    fn test_resolve_custom_keys() {
        assert_eq!(
            run(&["--mode-key", "mode", "--uri", "scan://decode?mode=AZTEC_MODE"]),
            Some(scanfmt_core::AZTEC_FORMATS)
        );
    }

    #[test]
    fn test_invalid_uri_is_an_error() {
        let cli = Cli::try_parse_from(["scanfmt", "--uri", "not a uri"]).unwrap();
        assert!(resolve_request(&cli).is_err());
    }

    #[test]
    fn test_uri_conflicts_with_intent_fields() {
        assert!(Cli::try_parse_from(["scanfmt", "--uri", "scan://x", "--mode", "QR_CODE_MODE"])
            .is_err());
    }

    #[test]
    fn test_listings() {
        let mut buf = Vec::new();
        write_modes(&mut buf).unwrap();
        let modes = String::from_utf8(buf).unwrap();
        assert!(modes.contains("PRODUCT_MODE"));
        assert!(modes.contains("UPC_A"));

        let mut buf = Vec::new();
        write_symbologies(&mut buf).unwrap();
        let symbologies = String::from_utf8(buf).unwrap();
        assert_eq!(symbologies.lines().count(), Symbology::ALL.len());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
