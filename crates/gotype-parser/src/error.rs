//! Parser error types for gotype-parser.

/// Errors that can occur before extraction starts.
///
/// Extraction itself is total: anything it cannot classify degrades to an
/// empty value instead of an error.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
