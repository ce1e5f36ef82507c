//! Errors raised by the host around the engine: reading files and parsing
//! configuration. Engine failures pass through as [`RingingError`].

use std::path::PathBuf;

use touchcheck_core::RingingError;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("error reading file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing method catalogue '{name}': {source}")]
    CatalogueSyntax {
        name: String,
        source: Box<toml::de::Error>,
    },

    #[error("error in method catalogue '{name}': {source}")]
    Catalogue { name: String, source: RingingError },

    #[error("{}:{line}: can't parse line {text:?}: {reason}", path.display())]
    TouchLine {
        path: PathBuf,
        line: usize,
        text: String,
        reason: &'static str,
    },

    #[error("{}:{line}: {source}", path.display())]
    Touch {
        path: PathBuf,
        line: usize,
        source: RingingError,
    },

    #[error("no method with shorthand '{0}' in the catalogue")]
    NoSuchMethod(String),
}
