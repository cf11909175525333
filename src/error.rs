use miette::Diagnostic;
use thiserror::Error;

/// Main error type for colormap conversion
#[derive(Error, Diagnostic, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    #[diagnostic(code(coolors::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(coolors::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// The input is not well-formed XML.
    #[error("Error parsing XML at byte {offset}: {message}")]
    #[diagnostic(
        code(coolors::document),
        help("Export the palette from coolors.co as XML and pass the file unmodified")
    )]
    MalformedDocument { message: String, offset: u64 },

    /// A `<color>` element is missing a channel or the channel is not an integer.
    #[error("Malformed colour #{index}: {message}")]
    #[diagnostic(code(coolors::colour))]
    MalformedColour {
        index: usize,
        attribute: String,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("No colors found in input")]
    #[diagnostic(
        code(coolors::empty),
        help("The root element needs at least one <color> child")
    )]
    EmptyPalette,

    #[error("JSON error: {0}")]
    #[diagnostic(code(coolors::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
