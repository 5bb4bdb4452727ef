//! Types for writing SCR scripts
//!

use binrw::BinWrite;
use std::io::{Cursor, Write};
use tracing::{debug, instrument, trace};
use ykd_htx::StringTable;

use crate::{
    command::{Command, Script},
    error::{Error, Result},
    symbols::{BACKGROUNDS, CHARACTERS, SOUNDS, TRANSITIONS},
    types::{
        BackgroundPayload, CharacterPayload, DialoguePayload, FadeInPayload, SegmentHeader,
        SoundPayload, TransitionPayload, WaitPayload,
    },
};

/// SCR script generator
///
/// Builds a fresh string table while commands are written. The table returned by
/// [`ScriptWriter::finish`] is the only one the written script can be read back with.
///
/// ```
/// # fn doit() -> ykd_scr::error::Result<()>
/// # {
/// use ykd_scr::{Command, ScriptWriter};
///
/// let mut writer = ScriptWriter::new(Vec::new());
/// writer.write_command(&Command::Wait { hundredths: 100 })?;
/// writer.write_command(&Command::End)?;
///
/// let (script, table) = writer.finish()?;
/// assert_eq!(script, vec![0x23, 0x0F, 0x64, 0x00, 0x23, 0xFE]);
/// assert!(table.is_empty());
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
pub struct ScriptWriter<W: Write> {
    inner: W,
    table: StringTable,
    offset: usize,
}

impl<W: Write> ScriptWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            table: StringTable::new(),
            offset: 0,
        }
    }

    /// Table built from the dialogue written so far
    pub fn table(&self) -> &StringTable {
        &self.table
    }

    /// Append one command
    ///
    /// The whole segment is encoded before anything reaches the inner writer, so a failed
    /// command leaves no partial segment behind.
    pub fn write_command(&mut self, command: &Command) -> Result<()> {
        let mut segment = Cursor::new(Vec::with_capacity(command.opcode().segment_len()));

        SegmentHeader {
            opcode: command.opcode(),
        }
        .write(&mut segment)?;

        match command {
            Command::Dialogue { text } => {
                let index = self.table.add_line(text.joined());
                let index = u16::try_from(index).map_err(|_| Error::TableOverflow {
                    lines: self.table.len(),
                })?;
                DialoguePayload { index }.write(&mut segment)?;
            }
            Command::Wait { hundredths } => {
                WaitPayload {
                    hundredths: *hundredths,
                }
                .write(&mut segment)?;
            }
            Command::Sound { sound } => {
                SoundPayload {
                    sound: SOUNDS.lookup(sound)?,
                }
                .write(&mut segment)?;
            }
            Command::FadeIn { bytes } => {
                FadeInPayload { bytes: *bytes }.write(&mut segment)?;
            }
            Command::Transition {
                unknown,
                transition,
                speed,
            } => {
                TransitionPayload {
                    unknown: *unknown,
                    transition: TRANSITIONS.lookup(transition)?,
                    speed: *speed,
                }
                .write(&mut segment)?;
            }
            Command::Background {
                unknown,
                background,
            } => {
                BackgroundPayload {
                    unknown: *unknown,
                    background: BACKGROUNDS.lookup(background)?,
                }
                .write(&mut segment)?;
            }
            Command::Character { position, name } => {
                CharacterPayload {
                    position: position.code(),
                    character: CHARACTERS.lookup(name)?,
                }
                .write(&mut segment)?;
            }
            Command::End => {}
        }

        let segment = segment.into_inner();
        trace!(offset = self.offset, opcode = %command.opcode(), "segment");

        self.inner.write_all(&segment)?;
        self.offset += segment.len();

        Ok(())
    }

    /// Flush the inner writer and hand it back together with the string table
    pub fn finish(mut self) -> Result<(W, StringTable)> {
        self.inner.flush()?;
        Ok((self.inner, self.table))
    }
}

/// A script and its string table, ready to be written side by side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// `.scr` bytes
    pub script: Vec<u8>,
    /// Table the dialogue indices in `script` refer to
    pub table: StringTable,
}

impl Script {
    /// Encode this script together with a freshly built string table
    #[instrument(skip_all, fields(commands = self.len()), err)]
    pub fn encode(&self) -> Result<Encoded> {
        let mut writer = ScriptWriter::new(Vec::new());
        for command in self.iter() {
            writer.write_command(command)?;
        }

        let (script, table) = writer.finish()?;
        debug!(size = script.len(), lines = table.len(), "encoded script");

        Ok(Encoded { script, table })
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use crate::command::{Command, DialogueText, Script};
    use crate::error::{Error, Result};
    use crate::symbols::SymbolKind;
    use crate::types::Position;
    use crate::write::ScriptWriter;

    fn dialogue(text: &str) -> Command {
        Command::Dialogue {
            text: DialogueText::from_joined(text),
        }
    }

    #[test]
    #[traced_test]
    fn encode_wait_and_end() -> Result<()> {
        let script: Script = vec![Command::Wait { hundredths: 100 }, Command::End].into();

        let encoded = script.encode()?;

        assert_eq!(encoded.script, vec![0x23, 0x0F, 0x64, 0x00, 0x23, 0xFE]);
        assert!(encoded.table.is_empty());
        assert!(logs_contain("encoded script"));

        Ok(())
    }

    #[test]
    fn repeated_dialogue_shares_a_line() -> Result<()> {
        let script: Script = vec![
            dialogue("Kuromi-chan!"),
            dialogue("Ikuyo!"),
            dialogue("Kuromi-chan!"),
        ]
        .into();

        let encoded = script.encode()?;

        #[rustfmt::skip]
        let expected = vec![
            0x23, 0x00, 0x00, 0x00,
            0x23, 0x00, 0x01, 0x00,
            0x23, 0x00, 0x00, 0x00,
        ];

        assert_eq!(encoded.script, expected);
        assert_eq!(encoded.table.lines(), &["Kuromi-chan!", "Ikuyo!"]);

        Ok(())
    }

    #[test]
    fn encode_symbols() -> Result<()> {
        let script: Script = vec![
            Command::Sound {
                sound: "Title BGM".to_string(),
            },
            Command::Transition {
                unknown: 3,
                transition: "Pink Wipe Left".to_string(),
                speed: -1,
            },
            Command::Background {
                unknown: 0,
                background: "bg08.png".to_string(),
            },
            Command::Character {
                position: Position::RightFacingRight,
                name: "Baku (Talking)".to_string(),
            },
            Command::FadeIn {
                bytes: [0xAA, 0xBB, 0xCC, 0xDD],
            },
        ]
        .into();

        #[rustfmt::skip]
        let expected = vec![
            0x23, 0x13, 0x01, 0x00,
            0x23, 0x16, 0x03, 0x05, 0xFF, 0xFF,
            0x23, 0x1B, 0x00, 0x08,
            0x23, 0x1C, 0x02, 0x01, 0x16, 0x00,
            0x23, 0x15, 0xAA, 0xBB, 0xCC, 0xDD,
        ];

        assert_eq!(script.encode()?.script, expected);

        Ok(())
    }

    #[test]
    fn unknown_name() {
        let script: Script = vec![Command::Sound {
            sound: "Kazoo SFX".to_string(),
        }]
        .into();

        match script.encode() {
            Err(Error::UnknownName { kind, name }) => {
                assert_eq!(kind, SymbolKind::Sound);
                assert_eq!(name, "Kazoo SFX");
            }
            other => panic!("expected unknown name, got {other:?}"),
        }
    }

    #[test]
    fn failed_command_writes_nothing() -> Result<()> {
        let mut writer = ScriptWriter::new(Vec::new());
        writer.write_command(&Command::End)?;

        let result = writer.write_command(&Command::Background {
            unknown: 0,
            background: "bg09.png".to_string(),
        });
        assert!(result.is_err());

        let (script, _) = writer.finish()?;
        assert_eq!(script, vec![0x23, 0xFE]);

        Ok(())
    }

    #[test]
    fn table_overflow() {
        let script: Script = (0..=u16::MAX as usize + 1)
            .map(|i| dialogue(&i.to_string()))
            .collect();

        assert!(matches!(
            script.encode(),
            Err(Error::TableOverflow { lines: 65537 })
        ));
    }

    #[test]
    fn round_trip() -> Result<()> {
        let script: Script = vec![
            Command::Character {
                position: Position::LeftFacingLeft,
                name: "My Melo (Talking)".to_string(),
            },
            dialogue("Ah,↓Kuromi-chan!"),
            Command::Wait { hundredths: 250 },
            dialogue("Hirake!↓Yume no↓tobira!"),
            dialogue("Ah,↓Kuromi-chan!"),
            Command::Transition {
                unknown: 0,
                transition: "White Center Wipe Out".to_string(),
                speed: 4,
            },
            Command::End,
        ]
        .into();

        let encoded = script.encode()?;
        let decoded = Script::decode(&encoded.script, &encoded.table)?;

        assert_eq!(decoded, script);
        assert_eq!(encoded.table.len(), 2);

        Ok(())
    }
}
