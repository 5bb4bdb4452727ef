//! Names for the sound, background, character and transition codes found in scripts.
//!
//! Scripts only ever store the numeric code. Every table here maps it to a stable human readable
//! name in both directions; the order of each table is the order an editor should offer them in.

use derive_more::derive::Display;

use crate::error::{Error, Result};

/// Which symbol table a code or name belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum SymbolKind {
    #[display("sound")]
    Sound,
    #[display("background")]
    Background,
    #[display("character")]
    Character,
    #[display("transition")]
    Transition,
}

/// Static bidirectional mapping between names and wire codes
#[derive(Debug)]
pub struct SymbolTable<T: 'static> {
    kind: SymbolKind,
    entries: &'static [(&'static str, T)],
}

impl<T: Copy + PartialEq + Into<u16> + 'static> SymbolTable<T> {
    const fn new(kind: SymbolKind, entries: &'static [(&'static str, T)]) -> Self {
        Self { kind, entries }
    }

    /// The kind of symbol stored in this table
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Number of entries in this table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the name for a wire code
    pub fn name(&self, code: T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| *name)
    }

    /// Look up the wire code for a name
    pub fn code(&self, name: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, code)| *code)
    }

    /// First name in the table, used as the default for new commands
    pub fn first(&self) -> &'static str {
        self.entries.first().map(|(name, _)| *name).unwrap_or_default()
    }

    /// Iterate over all names in table order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Iterate over all `(name, code)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, T)> + '_ {
        self.entries.iter().copied()
    }

    pub(crate) fn resolve(&self, code: T, offset: usize) -> Result<String> {
        self.name(code)
            .map(str::to_owned)
            .ok_or(Error::UnknownSymbol {
                offset,
                kind: self.kind,
                code: code.into(),
            })
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<T> {
        self.code(name).ok_or_else(|| Error::UnknownName {
            kind: self.kind,
            name: name.to_owned(),
        })
    }
}

/// Music, sound effects and voice clips
pub static SOUNDS: SymbolTable<u16> = SymbolTable::new(
    SymbolKind::Sound,
    &[
        ("Silence", 0x0000),
        ("Title BGM", 0x0001),
        ("Unknown BGM 02", 0x0002),
        ("Unknown BGM 03", 0x0003),
        ("Unknown BGM 04", 0x0004),
        ("Unknown BGM 05", 0x0005),
        ("Unknown BGM 06", 0x0006),
        ("Unknown BGM 07", 0x0007),
        ("Unknown BGM 08", 0x0008),
        ("Unknown BGM 09", 0x0009),
        ("Rolling Hills BGM", 0x000A),
        ("Silence 0B", 0x000B),
        ("Button Select SFX", 0x000C),
        ("Deselect SFX", 0x000D),
        ("Unknown SFX 0E", 0x000E),
        ("Unknown SFX 0F", 0x000F),
        ("Page Turn SFX", 0x0010),
        ("Incorrect SFX", 0x0011),
        ("Correct SFX", 0x0012),
        ("Unknown SFX 13", 0x0013),
        ("Unknown SFX 14", 0x0014),
        ("Unknown SFX 15", 0x0015),
        ("Win SFX", 0x0016),
        ("Unknown SFX 17", 0x0017),
        ("Unknown SFX 18", 0x0018),
        ("Unknown SFX 19", 0x0019),
        ("Unknown SFX 1A", 0x001A),
        ("Unknown SFX 1B", 0x001B),
        ("Unknown SFX 1C", 0x001C),
        ("Unknown SFX 1D", 0x001D),
        ("Unknown SFX 1E", 0x001E),
        ("Unknown SFX 1F", 0x001F),
        ("Unknown SFX 20", 0x0020),
        ("Unknown SFX 21", 0x0021),
        ("Dunk SFX", 0x0022),
        ("Unknown SFX 23", 0x0023),
        ("Unknown SFX 24", 0x0024),
        ("Unknown SFX 25", 0x0025),
        ("Unknown SFX 26", 0x0026),
        ("Unknown SFX 27", 0x0027),
        ("Wind SFX", 0x0028),
        ("Unknown SFX 29", 0x0029),
        ("Unknown SFX 2A", 0x002A),
        ("Unknown SFX 2B", 0x002B),
        ("Unknown Sting SFX 2C", 0x002C),
        ("My Melo: Ah, Kuromi-chan!", 0x002D),
        ("My Melo: Kuromi-chan!", 0x002E),
        ("My Melo: Kuromi-chaaaaan!", 0x002F),
        ("My Melo: Ah, Kuromi-chan! (2)", 0x0030),
        ("My Melo: Kuromi-chan?", 0x0031),
        ("My Melo: Kuromi-chaan!", 0x0032),
        ("My Melo: Kuromi-chan! (2)", 0x0033),
        ("Kuromi: Jaa ikuyo... hirake, yume no tobira!", 0x0034),
        ("Kuromi: Ikuyo... hirake, yume no tobira!", 0x0035),
        ("Kuromi: Hirakeeee, yume no tobira!", 0x0036),
        ("Kuromi: Hirake, yume no tobira!", 0x0037),
        ("Kuromi: Jaa ikuyo. Hirake, yume no tobira!", 0x0038),
        ("Kuromi: Ikuyo! Hirake, yume no tobira!", 0x0039),
        ("Kuromi: Hiirakee! Yume no tobira!", 0x003A),
        ("Kuromi: Hirake! Yume no tobira!", 0x003B),
        ("Unknown SFX 3C", 0x003C),
    ],
);

/// Background pictures, named after the files they were extracted to
pub static BACKGROUNDS: SymbolTable<u8> = SymbolTable::new(
    SymbolKind::Background,
    &[
        ("bg01.png", 0x01),
        ("bg02.png", 0x02),
        ("bg03.png", 0x03),
        ("bg04.png", 0x04),
        ("bg05.png", 0x05),
        ("bg06.png", 0x06),
        ("bg07.png", 0x07),
        ("bg08.png", 0x08),
    ],
);

/// Character sprites
pub static CHARACTERS: SymbolTable<u16> = SymbolTable::new(
    SymbolKind::Character,
    &[
        ("Empty", 0x0000),
        ("My Melo (Silent)", 0x0001),
        ("My Melo (Talking)", 0x0002),
        ("Uta (Silent)", 0x0003),
        ("Uta (Talking)", 0x0004),
        ("My Sweet Piano (Silent)", 0x0005),
        ("My Sweet Piano (Talking)", 0x0006),
        ("Flat (Silent)", 0x0007),
        ("Flat (Talking)", 0x0008),
        ("Kuromi (Silent)", 0x0009),
        ("Kuromi (Talking)", 0x000A),
        ("Rhythm (Silent)", 0x000B),
        ("Rhythm (Talking)", 0x000C),
        ("Risu (Silent)", 0x000D),
        ("Risu (Talking)", 0x000E),
        ("Hedgehog (Silent)", 0x000F),
        ("Hedgehog (Talking)", 0x0010),
        ("Kuma (Silent)", 0x0011),
        ("Kuma (Talking)", 0x0012),
        ("Grandpa (Silent)", 0x0013),
        ("Grandpa (Talking)", 0x0014),
        ("Baku (Silent)", 0x0015),
        ("Baku (Talking)", 0x0016),
    ],
);

/// Screen wipes
pub static TRANSITIONS: SymbolTable<u8> = SymbolTable::new(
    SymbolKind::Transition,
    &[
        ("Transparent Wipe Right (Clean Screen)", 0x02),
        ("Transparent Wipe Right (Draw New)", 0x03),
        ("Pink Wipe Left (Clean)", 0x04),
        ("Pink Wipe Left", 0x05),
        ("White Center Wipe Out", 0x06),
        ("White Center Wipe In (Needs Fade In)", 0x07),
        ("White Curtains Out (Transparent)", 0x0A),
        ("White Curtains Out (White)", 0x0B),
    ],
);

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::error::Error;
    use crate::symbols::{SymbolKind, BACKGROUNDS, CHARACTERS, SOUNDS, TRANSITIONS};

    #[test]
    fn names_and_codes_are_unique() {
        fn check<T: Copy + PartialEq + Into<u16> + 'static>(table: &super::SymbolTable<T>) {
            let entries: Vec<_> = table.iter().collect();
            for (i, (name, code)) in entries.iter().enumerate() {
                assert!(entries[i + 1..]
                    .iter()
                    .all(|(n, c)| n != name && c != code));
            }
        }

        check(&SOUNDS);
        check(&BACKGROUNDS);
        check(&CHARACTERS);
        check(&TRANSITIONS);
    }

    #[test]
    fn lookups_go_both_ways() {
        assert_eq!(SOUNDS.name(0x0028), Some("Wind SFX"));
        assert_eq!(SOUNDS.code("Wind SFX"), Some(0x0028));
        assert_eq!(BACKGROUNDS.code("bg03.png"), Some(0x03));
        assert_eq!(CHARACTERS.name(0x000A), Some("Kuromi (Talking)"));
        assert_eq!(TRANSITIONS.name(0x08), None);
    }

    #[test]
    fn first_entries() {
        assert_eq!(SOUNDS.first(), "Silence");
        assert_eq!(BACKGROUNDS.first(), "bg01.png");
        assert_eq!(CHARACTERS.first(), "Empty");
        assert_eq!(TRANSITIONS.first(), "Transparent Wipe Right (Clean Screen)");
    }

    #[test]
    fn resolve_reports_offset_and_code() {
        assert!(matches!(
            BACKGROUNDS.resolve(0x09, 0x10),
            Err(Error::UnknownSymbol {
                offset: 0x10,
                kind: SymbolKind::Background,
                code: 0x09
            })
        ));
        assert!(matches!(
            CHARACTERS.lookup("Nobody"),
            Err(Error::UnknownName { kind: SymbolKind::Character, .. })
        ));
    }
}
