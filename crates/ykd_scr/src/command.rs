//! In-memory command model of a script

use derive_more::derive::{Deref, DerefMut, Display, From, IntoIterator};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    symbols::{BACKGROUNDS, CHARACTERS, SOUNDS, TRANSITIONS},
    types::{Opcode, Position},
};

/// Glyph joining the lines of one dialogue box inside a single string table entry
pub const DIALOGUE_SEPARATOR: char = '↓';

/// Text of one dialogue box
///
/// Stored on disk as a single string table entry with the lines joined by
/// [`DIALOGUE_SEPARATOR`]. Empty lines are never kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct DialogueText {
    lines: Vec<String>,
}

impl DialogueText {
    /// Number of lines a dialogue box can show
    pub const MAX_LINES: usize = 3;
    /// Number of characters that fit on one line of the dialogue box
    pub const MAX_LINE_WIDTH: usize = 12;

    /// Build dialogue text out of separate lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = lines
            .into_iter()
            .map(|line| strip_line_breaks(line.as_ref()))
            .collect::<Vec<_>>()
            .join(&DIALOGUE_SEPARATOR.to_string());
        Self::from_joined(&joined)
    }

    /// Split a string table entry into its lines
    ///
    /// Anything past [`DialogueText::MAX_LINES`] lines is dropped.
    pub fn from_joined(text: &str) -> Self {
        let lines = text
            .split(DIALOGUE_SEPARATOR)
            .filter(|line| !line.is_empty())
            .take(Self::MAX_LINES)
            .map(str::to_owned)
            .collect();
        Self { lines }
    }

    /// The form stored in the string table
    pub fn joined(&self) -> String {
        self.lines.join(&DIALOGUE_SEPARATOR.to_string())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Edit one line of the box the way the editor's text fields do
    ///
    /// Empty text removes the line, an index past the last line appends (while the box has room)
    /// and anything else replaces the line in place. Separator glyphs and line breaks in `text`
    /// are removed.
    pub fn set_line(&mut self, index: usize, text: &str) {
        let text: String = strip_line_breaks(text)
            .chars()
            .filter(|c| *c != DIALOGUE_SEPARATOR)
            .collect();

        if text.is_empty() {
            if index < self.lines.len() {
                self.lines.remove(index);
            }
        } else if index >= self.lines.len() {
            if self.lines.len() < Self::MAX_LINES {
                self.lines.push(text);
            }
        } else {
            self.lines[index] = text;
        }
    }

    /// Make sure every line fits the dialogue box
    pub fn check_width(&self) -> Result<()> {
        for (line, text) in self.lines.iter().enumerate() {
            let width = text.chars().count();
            if width > Self::MAX_LINE_WIDTH {
                return Err(Error::LineTooWide {
                    line,
                    width,
                    max: Self::MAX_LINE_WIDTH,
                });
            }
        }

        Ok(())
    }
}

/// On-screen lines never contain CR or LF, the string table uses them to separate entries
fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

impl fmt::Display for DialogueText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl From<Vec<String>> for DialogueText {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}

impl From<DialogueText> for Vec<String> {
    fn from(value: DialogueText) -> Self {
        value.lines
    }
}

impl From<&str> for DialogueText {
    fn from(value: &str) -> Self {
        Self::from_joined(value)
    }
}

/// One instruction of a script
///
/// Codes for sounds, transitions, backgrounds and characters are kept as their names from
/// [`crate::symbols`]. Formatting a command gives the caption an editor shows for it.
#[derive(Clone, Debug, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "command", rename_all = "snake_case"))]
pub enum Command {
    #[display("Dialogue: {text}")]
    Dialogue { text: DialogueText },

    #[display("Wait {} seconds", f64::from(*hundredths) / 100.0)]
    Wait { hundredths: u16 },

    #[display("Play sound '{sound}'")]
    Sound { sound: String },

    #[display("Fade in")]
    FadeIn { bytes: [u8; 4] },

    #[display("Transition '{transition}' at speed {speed}")]
    Transition {
        unknown: u8,
        transition: String,
        speed: i16,
    },

    #[display("Display Background '{background}'")]
    Background { unknown: u8, background: String },

    #[display("Show character '{name}' at '{position}'")]
    Character { position: Position, name: String },

    #[display("End")]
    End,
}

impl Command {
    /// Opcode this command is stored under
    pub fn opcode(&self) -> Opcode {
        match self {
            Command::Dialogue { .. } => Opcode::Dialogue,
            Command::Wait { .. } => Opcode::Wait,
            Command::Sound { .. } => Opcode::Sound,
            Command::FadeIn { .. } => Opcode::FadeIn,
            Command::Transition { .. } => Opcode::Transition,
            Command::Background { .. } => Opcode::Background,
            Command::Character { .. } => Opcode::Character,
            Command::End => Opcode::End,
        }
    }

    /// Command inserted when a new entry of this kind is added to a script
    pub fn default_for(opcode: Opcode) -> Command {
        match opcode {
            Opcode::Dialogue => Command::Dialogue {
                text: DialogueText::default(),
            },
            Opcode::Wait => Command::Wait { hundredths: 0 },
            Opcode::Sound => Command::Sound {
                sound: SOUNDS.first().to_owned(),
            },
            Opcode::FadeIn => Command::FadeIn { bytes: [0; 4] },
            Opcode::Transition => Command::Transition {
                unknown: 0,
                transition: TRANSITIONS.first().to_owned(),
                speed: 1,
            },
            Opcode::Background => Command::Background {
                unknown: 0,
                background: BACKGROUNDS.first().to_owned(),
            },
            Opcode::Character => Command::Character {
                position: Position::LeftFacingRight,
                name: CHARACTERS.first().to_owned(),
            },
            Opcode::End => Command::End,
        }
    }
}

/// Ordered list of commands making up one scene
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, DerefMut, IntoIterator, From)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Script(#[into_iterator(owned, ref, ref_mut)] Vec<Command>);

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last command is [`Command::End`]
    pub fn is_terminated(&self) -> bool {
        matches!(self.0.last(), Some(Command::End))
    }

    pub fn into_inner(self) -> Vec<Command> {
        self.0
    }
}

impl FromIterator<Command> for Script {
    fn from_iter<T: IntoIterator<Item = Command>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
