use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read manifest '{path}'")]
    #[diagnostic(help(
        "run the analyzer first, or point `manifest` at an existing custom-elements.json"
    ))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse custom elements manifest")]
    #[diagnostic(code(cemwrap::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid JSON here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error carrying the offending path
    pub fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, source_name: &str) -> Box<Self> {
        let span = json_error_span(src, &source);
        Box::new(Error::Parse {
            src: NamedSource::new(source_name, src.to_string()),
            span,
            source,
        })
    }
}

/// Translate the line/column carried by a serde_json error into a span.
/// Some error kinds carry no location; those render without a label.
fn json_error_span(src: &str, error: &serde_json::Error) -> Option<SourceSpan> {
    if error.line() == 0 {
        return None;
    }
    let offset = SourceOffset::from_location(src, error.line(), error.column());
    Some(SourceSpan::new(offset, 1))
}
