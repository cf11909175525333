use clap::Parser;
use coolors_colormap::cli::Cli;
use coolors_colormap::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    coolors_colormap::cli::run(cli, &printer)?;

    Ok(())
}
