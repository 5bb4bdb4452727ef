use derive_more::derive::{Deref, IntoIterator};
use std::collections::{hash_map::Entry, HashMap};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Index-addressable pool of dialogue text
///
/// A line's index is its position in the table. Tables built through [`StringTable::add_line`]
/// never hold the same text twice, while tables read from disk keep every line where it was found
/// so existing references stay valid.
///
/// ```
/// let mut table = ykd_htx::StringTable::new();
///
/// assert_eq!(table.add_line("Kuromi-chan!"), 0);
/// assert_eq!(table.add_line("Ikuyo!"), 1);
/// assert_eq!(table.add_line("Kuromi-chan!"), 0);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get(1).unwrap(), "Ikuyo!");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref, IntoIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct StringTable {
    #[deref]
    #[into_iterator(owned, ref)]
    lines: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl StringTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the line stored at `index`
    pub fn get(&self, index: usize) -> Result<&str> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(Error::OutOfRange {
                index,
                len: self.lines.len(),
            })
    }

    /// Get the index of the first line equal to `text`
    pub fn index_of(&self, text: &str) -> Option<usize> {
        self.lookup.get(text).copied()
    }

    /// Return the index of `text`, appending it first if the table does not hold it yet
    ///
    /// Matching is exact: no case folding and no width normalization.
    pub fn add_line(&mut self, text: impl AsRef<str>) -> usize {
        let text = text.as_ref();
        if let Some(index) = self.index_of(text) {
            return index;
        }

        let index = self.lines.len();
        self.lines.push(text.to_owned());
        self.lookup.insert(text.to_owned(), index);
        index
    }

    /// Append a line at the next position even if an equal line already exists
    pub(crate) fn push_line(&mut self, text: String) {
        let index = self.lines.len();
        match self.lookup.entry(text.clone()) {
            Entry::Occupied(first) => {
                debug!(index, first = *first.get(), "duplicate line");
            }
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
        self.lines.push(text);
    }

    /// Get the lines of this table in index order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl FromIterator<String> for StringTable {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut table = StringTable::new();
        iter.into_iter().for_each(|line| table.push_line(line));
        table
    }
}

impl From<Vec<String>> for StringTable {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<StringTable> for Vec<String> {
    fn from(value: StringTable) -> Self {
        value.lines
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::error::Error;
    use crate::types::StringTable;

    #[test]
    fn add_line_reuses_existing_entries() {
        let mut table = StringTable::new();

        assert_eq!(table.add_line("ゆめのとびら"), 0);
        assert_eq!(table.add_line("Melody"), 1);
        assert_eq!(table.add_line("ゆめのとびら"), 0);
        assert_eq!(table.add_line("melody"), 2);

        assert_eq!(table.lines(), &["ゆめのとびら", "Melody", "melody"]);
    }

    #[test]
    fn get_out_of_range() {
        let mut table = StringTable::new();
        table.add_line("only");

        assert_eq!(table.get(0).ok(), Some("only"));
        assert!(matches!(
            table.get(1),
            Err(Error::OutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn collected_tables_keep_duplicate_positions() {
        let table: StringTable = vec!["a".to_string(), "b".to_string(), "a".to_string()]
            .into_iter()
            .collect();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(2).ok(), Some("a"));
        assert_eq!(table.index_of("a"), Some(0));
    }

    #[test]
    fn add_line_after_collect_reuses_first_occurrence() {
        let mut table = StringTable::from(vec!["x".to_string(), "x".to_string()]);

        assert_eq!(table.add_line("x"), 0);
        assert_eq!(table.add_line("y"), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_line_list() -> Result<(), serde_json::Error> {
        let mut table = StringTable::new();
        table.add_line("Melody");
        table.add_line("Kuromi");

        let json = serde_json::to_string(&table)?;
        assert_eq!(json, r#"["Melody","Kuromi"]"#);
        assert_eq!(serde_json::from_str::<StringTable>(&json)?, table);

        Ok(())
    }
}
