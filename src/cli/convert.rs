//! Convert command implementation.
//!
//! Reads a palette export, maps it onto a colormap and writes the JSON.
//! Nothing is written unless the whole conversion succeeds.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::convert::convert;
use crate::error::{ConvertError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{encode_colormap, write_colormap_json, JsonStyle};

/// Options for a single conversion
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Input XML file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output JSON file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Colormap name (default: derived from colour names)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let source = read_input(args.input.as_deref())?;
    let colormap = convert(&source, args.name.as_deref())?;
    let style = JsonStyle::from_pretty(args.pretty);

    match &args.output {
        Some(path) => {
            let from = args
                .input
                .as_deref()
                .map(display_path)
                .unwrap_or_else(|| "<stdin>".to_string());
            printer.status("Converting", &from);

            write_colormap_json(&colormap, path, style)?;

            printer.success(
                "Created",
                &format!(
                    "colormap '{}' with {} ({})",
                    colormap.display_name(),
                    plural(colormap.stops.len(), "colour", "colours"),
                    display_path(path)
                ),
            );
        }
        None => {
            let json = encode_colormap(&colormap, style)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Read the whole palette export from a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| ConvertError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read palette: {}", e),
        }),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
