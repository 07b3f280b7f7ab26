use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use devid_core::{ConversionResult, IdentifierType};

#[derive(Debug, clap::Args, Clone)]
pub struct ConvertOptions {
    /// Device identifier: ICCID, IMEI, MEID or ESN, in decimal or hex
    #[clap(env = "DEVID_INPUT")]
    pub identifier: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: ConvertOptions, global: crate::Global) -> Result<()> {
    log::debug!("converting {:?}", options.identifier);

    let result = devid_core::convert(&options.identifier)
        .with_context(|| format!("Cannot convert {:?}", options.identifier))?;

    log::debug!(
        "{:?} classified as {}",
        options.identifier,
        result.classification
    );

    if global.verbose {
        eprintln!("Detected: {}", result.classification);
    }

    if options.json {
        println!("{}", format_result_json(&result)?);
    } else {
        build_table(&result).printstd();
    }

    Ok(())
}

/// Pretty JSON of a conversion, absent fields omitted.
pub fn format_result_json(result: &ConversionResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Two-column table of every populated result field.
pub fn build_table(result: &ConversionResult) -> prettytable::Table {
    let mut table = field_table();

    table.add_row(prettytable::row![
        "Type".green(),
        result.classification.to_string().bright_white().bold()
    ]);

    for (name, value) in result.fields() {
        let label = field_label(name, result.classification.kind);
        table.add_row(prettytable::row![label.green(), value.bright_white()]);
    }

    table
}

/// Display label for a result field. The ESN of an IMEI or MEID is a pseudo-ESN.
pub fn field_label(name: &str, kind: IdentifierType) -> &'static str {
    let derived_esn = matches!(kind, IdentifierType::Imei | IdentifierType::Meid);

    match name {
        "iccidDecimal" => "ICCID",
        "iccidCheckDigit" => "ICCID check digit",
        "imeiDecimal" => "IMEI (decimal MEID form)",
        "imeiCheckDigit" => "IMEI check digit",
        "meidHex" => "MEID (hex)",
        "meidHexCheckDigit" => "MEID hex check digit",
        "meidDecimal" => "MEID (decimal)",
        "meidDecimalCheckDigit" => "MEID decimal check digit",
        "esnHex" if derived_esn => "pESN (hex)",
        "esnDecimal" if derived_esn => "pESN (decimal)",
        "esnHex" => "ESN (hex)",
        "esnDecimal" => "ESN (decimal)",
        _ => "Unknown field",
    }
}
