pub mod completions;
pub mod convert;

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::output::Printer;

/// Convert a coolors.co palette XML export into a JSON colormap
#[derive(Parser, Debug)]
#[command(name = "coolors-colormap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: convert::ConvertArgs,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

pub fn run(cli: Cli, printer: &Printer) -> Result<()> {
    match cli.completions {
        Some(shell) => completions::run(shell),
        None => convert::run(cli.convert, printer),
    }
}
