use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use devid_core::Classification;

#[derive(Debug, clap::Args, Clone)]
pub struct ClassifyOptions {
    /// Device identifier to classify
    #[clap(env = "DEVID_INPUT")]
    pub identifier: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct ValidateOptions {
    /// Device identifier to validate
    #[clap(env = "DEVID_INPUT")]
    pub identifier: String,
}

pub fn run(options: ClassifyOptions, global: crate::Global) -> Result<()> {
    let classification = devid_core::classify(&options.identifier);
    log::debug!(
        "{:?} classified as {}",
        options.identifier,
        classification
    );

    if options.json {
        println!("{}", format_classification_json(&classification)?);
    } else {
        println!("{}", format_classification_text(&classification));
    }

    if global.verbose && !classification.is_valid() {
        eprintln!("No identifier pattern matches {:?}", options.identifier);
    }

    Ok(())
}

/// Print `valid` or `invalid`; an invalid identifier is reported as an error.
pub fn validate(options: ValidateOptions, global: crate::Global) -> Result<()> {
    let classification = devid_core::classify(&options.identifier);
    log::debug!(
        "{:?} classified as {}",
        options.identifier,
        classification
    );

    if global.verbose {
        eprintln!("Detected: {}", classification);
    }

    if classification.is_valid() {
        println!("{}", "valid".green());
        Ok(())
    } else {
        println!("{}", "invalid".red());
        Err(eyre!(
            "{:?} is not a recognised device identifier",
            options.identifier
        ))
    }
}

pub fn format_classification_json(classification: &Classification) -> Result<String> {
    serde_json::to_string_pretty(classification)
        .map_err(|e| eyre!("JSON serialization failed: {}", e))
}

pub fn format_classification_text(classification: &Classification) -> String {
    if classification.is_valid() {
        format!(
            "{}: {}\n{}: {}",
            "Type".green(),
            classification.kind.to_string().bright_white().bold(),
            "Encoding".green(),
            classification.encoding.to_string().bright_white()
        )
    } else {
        format!("{}: {}", "Type".green(), "invalid".red())
    }
}
