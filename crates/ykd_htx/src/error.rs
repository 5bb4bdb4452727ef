//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// A line was requested past the end of the table
    #[error("line {index} is out of range for a table of {len} lines")]
    #[diagnostic(help("the script and its .htx table were probably not saved together"))]
    OutOfRange { index: usize, len: usize },

    /// A line holds a character that Shift_JIS cannot represent
    #[error("line {line} contains {character:?} which has no Shift_JIS encoding")]
    Unencodable { line: usize, character: char },

    /// A line holds the line terminator and would split in two when read back
    #[error("line {line} contains a line break")]
    #[diagnostic(help("dialogue text cannot span table lines, use the dialogue separator instead"))]
    LineBreak { line: usize },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
