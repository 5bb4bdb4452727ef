//! Types for reading SCR scripts
//!

use binrw::BinRead;
use bon::Builder;
use byteorder::ReadBytesExt;
use std::io::{Cursor, Read};
use tracing::{debug, instrument, trace};
use ykd_htx::StringTable;

use crate::{
    command::{Command, DialogueText, Script},
    error::{Error, Result},
    symbols::{BACKGROUNDS, CHARACTERS, SOUNDS, TRANSITIONS},
    types::{
        BackgroundPayload, CharacterPayload, DialoguePayload, FadeInPayload, Opcode, Position,
        SegmentHeader, SoundPayload, TransitionPayload, WaitPayload, SEGMENT_MARKER,
    },
};

/// Options for how a script should be read
#[derive(Debug, Clone, Copy, Default, Builder)]
pub struct ReadOptions {
    /// Fail with [`Error::MissingEnd`] when the last command is not [`Command::End`]
    #[builder(default)]
    pub require_end: bool,
}

/// Segment by segment SCR decoder
///
/// Every item is one command in playback order. The first error ends the iteration.
///
/// ```
/// use ykd_scr::{Command, ScriptReader, StringTable};
///
/// let table = StringTable::new();
/// let data = [0x23, 0x0F, 0x64, 0x00, 0x23, 0xFE];
///
/// let commands = ScriptReader::new(&data, &table, Default::default())
///     .collect::<ykd_scr::error::Result<Vec<_>>>()
///     .unwrap();
///
/// assert_eq!(commands, vec![Command::Wait { hundredths: 100 }, Command::End]);
/// ```
pub struct ScriptReader<'a> {
    cursor: Cursor<&'a [u8]>,
    table: &'a StringTable,
    options: ReadOptions,
    failed: bool,
}

impl<'a> ScriptReader<'a> {
    pub fn new(data: &'a [u8], table: &'a StringTable, options: ReadOptions) -> Self {
        Self {
            cursor: Cursor::new(data),
            table,
            options,
            failed: false,
        }
    }

    /// Offset of the next segment
    pub fn offset(&self) -> usize {
        self.cursor.position() as usize
    }

    fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.offset())
    }

    /// Decode every remaining segment
    pub fn read_to_end(self) -> Result<Script> {
        let require_end = self.options.require_end;
        let script = self.collect::<Result<Script>>()?;

        if require_end && !script.is_terminated() {
            return Err(Error::MissingEnd);
        }

        Ok(script)
    }

    fn read_command(&mut self) -> Result<Command> {
        let offset = self.offset();
        let available = self.remaining();

        let marker = self.cursor.read_u8()?;
        if marker != SEGMENT_MARKER {
            return Err(Error::MarkerMismatch {
                offset,
                found: marker,
            });
        }

        if available < SegmentHeader::SIZE {
            return Err(Error::TruncatedBuffer {
                offset,
                needed: SegmentHeader::SIZE,
                available,
            });
        }

        let opcode = self.cursor.read_u8()?;
        let opcode =
            Opcode::try_from(opcode).map_err(|opcode| Error::UnknownOpcode { offset, opcode })?;

        if available < opcode.segment_len() {
            return Err(Error::TruncatedBuffer {
                offset,
                needed: opcode.segment_len(),
                available,
            });
        }

        trace!(offset, %opcode, "segment");

        let command = match opcode {
            Opcode::Dialogue => {
                let DialoguePayload { index } = DialoguePayload::read(&mut self.cursor)?;
                let line = self
                    .table
                    .get(index as usize)
                    .map_err(|_| Error::OutOfRange {
                        offset,
                        index,
                        len: self.table.len(),
                    })?;
                Command::Dialogue {
                    text: DialogueText::from_joined(line),
                }
            }
            Opcode::Wait => {
                let WaitPayload { hundredths } = WaitPayload::read(&mut self.cursor)?;
                Command::Wait { hundredths }
            }
            Opcode::Sound => {
                let SoundPayload { sound } = SoundPayload::read(&mut self.cursor)?;
                Command::Sound {
                    sound: SOUNDS.resolve(sound, offset)?,
                }
            }
            Opcode::FadeIn => {
                let FadeInPayload { bytes } = FadeInPayload::read(&mut self.cursor)?;
                Command::FadeIn { bytes }
            }
            Opcode::Transition => {
                let payload = TransitionPayload::read(&mut self.cursor)?;
                Command::Transition {
                    unknown: payload.unknown,
                    transition: TRANSITIONS.resolve(payload.transition, offset)?,
                    speed: payload.speed,
                }
            }
            Opcode::Background => {
                let payload = BackgroundPayload::read(&mut self.cursor)?;
                Command::Background {
                    unknown: payload.unknown,
                    background: BACKGROUNDS.resolve(payload.background, offset)?,
                }
            }
            Opcode::Character => {
                let payload = CharacterPayload::read(&mut self.cursor)?;
                let name = CHARACTERS.resolve(payload.character, offset)?;
                let position = Position::try_from(payload.position)
                    .map_err(|position| Error::InvalidPosition { offset, position })?;
                Command::Character { position, name }
            }
            Opcode::End => Command::End,
        };

        Ok(command)
    }
}

impl Iterator for ScriptReader<'_> {
    type Item = Result<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining() == 0 {
            return None;
        }

        let command = self.read_command();
        self.failed = command.is_err();
        Some(command)
    }
}

impl Script {
    /// Decode a script, resolving dialogue against `table`
    pub fn decode(data: &[u8], table: &StringTable) -> Result<Script> {
        Self::decode_with(data, table, ReadOptions::default())
    }

    /// Decode a script with explicit [`ReadOptions`]
    #[instrument(skip_all, fields(size = data.len()), err)]
    pub fn decode_with(data: &[u8], table: &StringTable, options: ReadOptions) -> Result<Script> {
        let script = ScriptReader::new(data, table, options).read_to_end()?;
        debug!(commands = script.len(), "decoded script");
        Ok(script)
    }

    /// Read a whole script from `reader`
    pub fn read<R: Read>(mut reader: R, table: &StringTable) -> Result<Script> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::decode(&data, table)
    }
}
