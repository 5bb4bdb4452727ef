//! This library handles reading from and creating **SCR** scripts used by
//! *My Melody: Yume no Kuni de Daibouken*.
//!
//! # SCR Script Format Documentation
//!
//! An SCR file is the instruction stream of one scene. It is a flat list of command segments with no
//! header, no length prefix, no checksum and no end-of-file marker: the script ends where the buffer
//! ends. Dialogue is not stored inline; dialogue commands refer to lines of the paired `.htx` string
//! table (see [`ykd_htx`]), which must always be written together with the script.
//!
//! ## Segment Structure
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Marker                 | 1 byte: Fixed value 0x23 (`#`)                              |
//! | 0x0001         | Opcode                 | 1 byte: Selects the command and its payload layout          |
//! | 0x0002         | Payload                | 0, 2 or 4 bytes depending on the opcode                     |
//!
//! ### Commands
//!
//! | Opcode | Command    | Payload                                                         | Size |
//! |--------|------------|-----------------------------------------------------------------|------|
//! | 0x00   | Dialogue   | u16: line index into the string table                           | 2    |
//! | 0x0F   | Wait       | u16: duration in hundredths of a second                         | 2    |
//! | 0x13   | Sound      | u16: sound code                                                 | 2    |
//! | 0x15   | Fade In    | 4 bytes: unknown meaning, preserved as is                       | 4    |
//! | 0x16   | Transition | u8: unknown, u8: transition code, i16: speed                    | 4    |
//! | 0x1B   | Background | u8: unknown, u8: background code                                | 2    |
//! | 0x1C   | Character  | u16: position, u16: character code                              | 4    |
//! | 0xFE   | End        | none                                                            | 0    |
//!
//! - **Codes**: sound, transition, background and character codes only exist on disk. In memory
//!   they are replaced by the names of [`symbols`].
//! - **Position**: one of `0x0000`, `0x0001`, `0x0002`, `0x0100`, `0x0101` or `0x0102`. The low byte
//!   places the character (middle, left, right) and the high byte mirrors the sprite.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.scr`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Paired With**: the `.htx` file sharing its stem
//!

pub mod command;
pub mod document;
pub mod error;
pub mod read;
pub mod symbols;
pub mod types;
pub mod write;

pub use command::{Command, DialogueText, Script};
pub use document::Document;
pub use read::{ReadOptions, ScriptReader};
pub use types::{Opcode, Position};
pub use write::{Encoded, ScriptWriter};
pub use ykd_htx::StringTable;
