use crate::prelude::*;
use clap::Parser;

mod classify;
mod convert;
mod prelude;
mod summary;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Identify ICCID, IMEI, MEID and ESN device identifiers and derive every other representation of them"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "DEVID_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Derive every representation of a device identifier
    Convert(crate::convert::ConvertOptions),

    /// Detect the identifier type and encoding
    Classify(crate::classify::ClassifyOptions),

    /// Check that an identifier has a recognised format
    Validate(crate::classify::ValidateOptions),

    /// Print the short composite form of an identifier
    Summary(crate::summary::SummaryOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Convert(options) => crate::convert::run(options, app.global),
        SubCommands::Classify(options) => crate::classify::run(options, app.global),
        SubCommands::Validate(options) => crate::classify::validate(options, app.global),
        SubCommands::Summary(options) => crate::summary::run(options, app.global),
    }
}
