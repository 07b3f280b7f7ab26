use crate::prelude::{eprintln, println, *};
use devid_core::ConversionResult;

#[derive(Debug, clap::Args, Clone)]
pub struct SummaryOptions {
    /// Device identifier to summarise
    #[clap(env = "DEVID_INPUT")]
    pub identifier: String,
}

pub fn run(options: SummaryOptions, global: crate::Global) -> Result<()> {
    let result = devid_core::convert(&options.identifier)
        .with_context(|| format!("Cannot summarise {:?}", options.identifier))?;

    if global.verbose {
        eprintln!("Detected: {}", result.classification);
    }

    let summary = format_summary_text(&result)?;
    log::debug!("summary of {:?}: {}", options.identifier, summary);

    println!("{}", summary);

    Ok(())
}

pub fn format_summary_text(result: &ConversionResult) -> Result<String> {
    result
        .summary()
        .with_context(|| format!("No summary for {:?}", result.input))
}
