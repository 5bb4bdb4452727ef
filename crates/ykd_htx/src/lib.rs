//! This library handles reading from and creating **HTX** string tables used by the scripts of
//! *My Melody: Yume no Kuni de Daibouken*.
//!
//! # HTX Format Documentation
//!
//! An HTX file backs the dialogue of a `.scr` script. Every dialogue command in the script refers to
//! a line of its paired `.htx` file by position, starting from zero. The table is a derived artifact
//! of the script: when a script is saved the table is rebuilt from scratch, storing every distinct
//! dialogue text exactly once.
//!
//! ## File Structure
//!
//! The file has no header, no count and no terminator. It is plain text:
//!
//! | Element                | Description                                                      |
//! |------------------------|------------------------------------------------------------------|
//! | Encoding               | Shift_JIS as implemented by Windows code page 932                |
//! | Line terminator        | `0x0D 0x0A` (`\r\n`) between lines, never after the last one     |
//! | Line count             | Implicit, one more than the number of terminators                |
//!
//! ### Character Substitution
//!
//! The game's font only carries full-width glyphs for Latin letters, digits and a handful of
//! punctuation marks. Those characters are therefore stored full-width on disk and converted back
//! to their ASCII form when read, see [`width`].
//!
//! ### Dialogue Separator
//!
//! A single dialogue text holds up to three on-screen lines joined with `↓` (U+2193). The table
//! itself treats the separator like any other character.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.htx`
//! - **Paired With**: the `.scr` file sharing its stem
//!

pub mod error;
pub mod read;
pub mod types;
pub mod width;
pub mod write;

pub use types::StringTable;

/// Sequence separating two lines of an HTX file
pub const LINE_TERMINATOR: &str = "\r\n";
