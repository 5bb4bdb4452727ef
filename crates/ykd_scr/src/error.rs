//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

use crate::symbols::SymbolKind;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// Transparent warpper for [`ykd_htx::error::Error`]
    #[error(transparent)]
    #[diagnostic(transparent)]
    TableError(#[from] ykd_htx::error::Error),

    /// segment does not start with the marker byte
    #[error("first byte of segment at {offset:#06x} is {found:#04X}, expected 0x23")]
    MarkerMismatch { offset: usize, found: u8 },

    /// opcode is not part of the command set
    #[error("encountered unknown opcode {opcode:#04X} at {offset:#06x}")]
    UnknownOpcode { offset: usize, opcode: u8 },

    /// code has no name in its symbol table
    #[error("encountered unknown {kind} {code:#06X} at {offset:#06x}")]
    UnknownSymbol {
        offset: usize,
        kind: SymbolKind,
        code: u16,
    },

    /// character position is not one of the six known placements
    #[error("encountered unknown position {position:#06X} at {offset:#06x}")]
    InvalidPosition { offset: usize, position: u16 },

    /// dialogue refers to a line the string table does not have
    #[error("dialogue at {offset:#06x} refers to line {index} but the table only has {len} lines")]
    #[diagnostic(help("the script and its .htx table were probably not saved together"))]
    OutOfRange {
        offset: usize,
        index: u16,
        len: usize,
    },

    /// segment runs past the end of the buffer
    #[error("segment at {offset:#06x} needs {needed} bytes but only {available} remain")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// script does not finish with an end command
    #[error("script does not finish with an end command")]
    MissingEnd,

    /// name has no code in its symbol table
    #[error("unknown {kind} {name:?}")]
    UnknownName { kind: SymbolKind, name: String },

    /// string table no longer fits the 16 bit dialogue index
    #[error("string table grew to {lines} lines, dialogue indices are limited to 65536")]
    TableOverflow { lines: usize },

    /// dialogue line is wider than the text box
    #[error("dialogue line {line} is {width} characters wide, the text box fits {max}")]
    LineTooWide {
        line: usize,
        width: usize,
        max: usize,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
