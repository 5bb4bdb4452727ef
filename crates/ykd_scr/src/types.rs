//! Base types for structure of SCR file.

use binrw::{BinRead, BinWrite};
use derive_more::derive::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Byte every segment starts with
pub const SEGMENT_MARKER: u8 = 0x23;

/// Identifies the command stored in a segment and the layout of its payload
#[derive(BinWrite, Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[bw(repr = u8)]
pub enum Opcode {
    /// Show a line of the string table
    Dialogue = 0x00,
    /// Pause playback
    Wait = 0x0F,
    /// Play music, a sound effect or a voice clip
    Sound = 0x13,
    /// Fade the screen in
    FadeIn = 0x15,
    /// Screen wipe
    Transition = 0x16,
    /// Swap the background picture
    Background = 0x1B,
    /// Place a character sprite
    Character = 0x1C,
    /// Stop the scene
    End = 0xFE,
}

impl Opcode {
    /// Every opcode, in wire order
    pub const ALL: [Opcode; 8] = [
        Opcode::Dialogue,
        Opcode::Wait,
        Opcode::Sound,
        Opcode::FadeIn,
        Opcode::Transition,
        Opcode::Background,
        Opcode::Character,
        Opcode::End,
    ];

    /// Size in bytes of the payload following this opcode
    pub const fn payload_len(self) -> usize {
        match self {
            Opcode::Dialogue | Opcode::Wait | Opcode::Sound | Opcode::Background => 2,
            Opcode::FadeIn | Opcode::Transition | Opcode::Character => 4,
            Opcode::End => 0,
        }
    }

    /// Size in bytes of a whole segment using this opcode
    pub const fn segment_len(self) -> usize {
        SegmentHeader::SIZE + self.payload_len()
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Opcode::Dialogue),
            0x0F => Ok(Opcode::Wait),
            0x13 => Ok(Opcode::Sound),
            0x15 => Ok(Opcode::FadeIn),
            0x16 => Ok(Opcode::Transition),
            0x1B => Ok(Opcode::Background),
            0x1C => Ok(Opcode::Character),
            0xFE => Ok(Opcode::End),
            _ => Err(value),
        }
    }
}

/// Marker and opcode opening every segment
#[derive(BinWrite, Debug, Copy, Clone, PartialEq, Eq)]
#[bw(little, magic = 0x23u8)]
pub struct SegmentHeader {
    pub opcode: Opcode,
}

impl SegmentHeader {
    /// Size in bytes of the marker and opcode
    pub const SIZE: usize = 2;
}

/// Payload of [`Opcode::Dialogue`]
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct DialoguePayload {
    /// Index of the line in the string table
    pub index: u16,
}

/// Payload of [`Opcode::Wait`]
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct WaitPayload {
    pub hundredths: u16,
}

/// Payload of [`Opcode::Sound`]
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct SoundPayload {
    pub sound: u16,
}

/// Payload of [`Opcode::FadeIn`]
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct FadeInPayload {
    pub bytes: [u8; 4],
}

/// Payload of [`Opcode::Transition`]
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct TransitionPayload {
    pub unknown: u8,
    pub transition: u8,
    pub speed: i16,
}

/// Payload of [`Opcode::Background`]
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct BackgroundPayload {
    pub unknown: u8,
    pub background: u8,
}

/// Payload of [`Opcode::Character`]
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(little)]
pub struct CharacterPayload {
    pub position: u16,
    pub character: u16,
}

/// Where a character sprite stands and which way it faces
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Position {
    #[display("middle, facing right")]
    MiddleFacingRight,
    #[display("left, facing right")]
    LeftFacingRight,
    #[display("right, facing left")]
    RightFacingLeft,
    #[display("middle, facing left")]
    MiddleFacingLeft,
    #[display("left, facing left")]
    LeftFacingLeft,
    #[display("right, facing right")]
    RightFacingRight,
}

impl Position {
    /// Every position, in code order
    pub const ALL: [Position; 6] = [
        Position::MiddleFacingRight,
        Position::LeftFacingRight,
        Position::RightFacingLeft,
        Position::MiddleFacingLeft,
        Position::LeftFacingLeft,
        Position::RightFacingRight,
    ];

    /// Value stored on disk for this position
    pub const fn code(self) -> u16 {
        match self {
            Position::MiddleFacingRight => 0x0000,
            Position::LeftFacingRight => 0x0001,
            Position::RightFacingLeft => 0x0002,
            Position::MiddleFacingLeft => 0x0100,
            Position::LeftFacingLeft => 0x0101,
            Position::RightFacingRight => 0x0102,
        }
    }
}

impl TryFrom<u16> for Position {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Position::ALL
            .into_iter()
            .find(|p| p.code() == value)
            .ok_or(value)
    }
}
