//! Types for writing string table files
//!

use encoding_rs::SHIFT_JIS;
use std::io::Write;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::types::StringTable;
use crate::width::to_full_width;
use crate::LINE_TERMINATOR;

/// Code page 932 byte pairs written for glyphs other Shift_JIS tables map differently
const CP932_OVERRIDES: &[(char, [u8; 2])] = &[('～', [0x81, 0x60]), ('－', [0x81, 0x7C])];

fn encode_run(run: &str, line: usize, out: &mut Vec<u8>) -> Result<()> {
    if run.is_empty() {
        return Ok(());
    }

    let (bytes, _, had_errors) = SHIFT_JIS.encode(run);
    if had_errors {
        let character = run
            .chars()
            .find(|c| SHIFT_JIS.encode(c.encode_utf8(&mut [0; 4])).2)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(Error::Unencodable { line, character });
    }

    out.extend_from_slice(&bytes);
    Ok(())
}

fn encode_line(text: &str, line: usize, out: &mut Vec<u8>) -> Result<()> {
    let mut start = 0;
    for (offset, c) in text.char_indices() {
        if let Some((_, bytes)) = CP932_OVERRIDES.iter().find(|(glyph, _)| *glyph == c) {
            encode_run(&text[start..offset], line, out)?;
            out.extend_from_slice(bytes);
            start = offset + c.len_utf8();
        }
    }
    encode_run(&text[start..], line, out)
}

impl StringTable {
    /// Serialize this table into the raw contents of an HTX file.
    #[instrument(skip(self), fields(lines = self.len()), err)]
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        for (index, line) in self.iter().enumerate() {
            if index > 0 {
                data.extend_from_slice(LINE_TERMINATOR.as_bytes());
            }
            if line.contains(LINE_TERMINATOR) {
                return Err(Error::LineBreak { line: index });
            }
            encode_line(&to_full_width(line), index, &mut data)?;
        }
        Ok(data)
    }

    /// Serialize this table and write it out.
    ///
    /// Nothing is written if any line fails to encode.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        let data = self.encode()?;
        writer.write_all(&data)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use crate::error::{Error, Result};
    use crate::types::StringTable;

    #[traced_test]
    #[test]
    fn encode_empty_table() -> Result<()> {
        assert_eq!(StringTable::new().encode()?, Vec::<u8>::new());
        Ok(())
    }

    #[traced_test]
    #[test]
    fn encode_joins_with_crlf() -> Result<()> {
        let mut table = StringTable::new();
        table.add_line("Ab");
        table.add_line("ゆめ");

        #[rustfmt::skip]
        let expected = vec![
            0x82, 0x60, 0x82, 0x82,
            0x0D, 0x0A,
            0x82, 0xE4, 0x82, 0xDF,
        ];

        assert_eq!(table.encode()?, expected);
        Ok(())
    }

    #[traced_test]
    #[test]
    fn encode_uses_code_page_932_for_tilde_and_hyphen() -> Result<()> {
        let mut table = StringTable::new();
        table.add_line("~-");

        assert_eq!(table.encode()?, vec![0x81, 0x60, 0x81, 0x7C]);
        Ok(())
    }

    #[traced_test]
    #[test]
    fn encode_rejects_unrepresentable_characters() {
        let mut table = StringTable::new();
        table.add_line("fine");
        table.add_line("not 🎵 fine");

        assert!(matches!(
            table.encode(),
            Err(Error::Unencodable {
                line: 1,
                character: '🎵'
            })
        ));
    }

    #[traced_test]
    #[test]
    fn encode_rejects_line_terminators() {
        let mut table = StringTable::new();
        table.add_line("a");
        table.add_line("b\r\nc");

        assert!(matches!(table.encode(), Err(Error::LineBreak { line: 1 })));
    }

    #[traced_test]
    #[test]
    fn encode_keeps_lone_line_feeds() -> Result<()> {
        let mut table = StringTable::new();
        table.add_line("a\nb");

        assert_eq!(table.encode()?, vec![0x82, 0x81, 0x0A, 0x82, 0x82]);
        Ok(())
    }

    #[traced_test]
    #[test]
    fn write_matches_encode() -> Result<()> {
        let mut table = StringTable::new();
        table.add_line("Kuromi!");

        let mut out = Vec::new();
        table.write(&mut out)?;

        assert_eq!(out, table.encode()?);
        Ok(())
    }
}
