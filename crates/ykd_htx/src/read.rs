//! Types for reading string table files
//!

use encoding_rs::SHIFT_JIS;
use std::io::Read;
use tracing::{instrument, warn};

use crate::error::Result;
use crate::types::StringTable;
use crate::width::to_half_width;
use crate::LINE_TERMINATOR;

impl StringTable {
    /// Read an HTX file and parse its lines.
    ///
    /// ```no_run
    /// fn list_lines(path: &str) -> ykd_htx::error::Result<()> {
    ///     let table = ykd_htx::StringTable::read(std::fs::File::open(path)?)?;
    ///
    ///     for (index, line) in table.iter().enumerate() {
    ///         println!("{index:>4}: {line}");
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip_all, err)]
    pub fn read<R: Read>(mut reader: R) -> Result<StringTable> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::decode(&data))
    }

    /// Parse the raw contents of an HTX file.
    ///
    /// Byte sequences that are not valid Shift_JIS are replaced with U+FFFD rather than rejected.
    #[instrument(skip_all, fields(size = data.len()))]
    pub fn decode(data: &[u8]) -> StringTable {
        let (text, had_errors) = SHIFT_JIS.decode_without_bom_handling(data);
        if had_errors {
            warn!("table contains malformed Shift_JIS sequences");
        }

        text.split(LINE_TERMINATOR)
            .map(to_half_width)
            .collect()
    }
}
