use clap::Args;
use itertools::Itertools;
use miette::{Context, Result};
use owo_colors::OwoColorize;
use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};
use ykd_scr::Document;

#[derive(Args)]
pub struct DiffArgs {
    /// An input SCR file
    #[arg(short, long, value_name = "FILE")]
    left: PathBuf,

    /// An input SCR file
    #[arg(short, long, value_name = "FILE")]
    right: PathBuf,

    /// Number of unchanged commands shown around each change
    #[arg(short, long, default_value_t = 2)]
    context: usize,
}

impl DiffArgs {
    fn captions(path: &Path) -> Result<String> {
        let document = Document::open(path).context(format!("path: {}", path.display()))?;
        Ok(document
            .script()
            .iter()
            .map(|command| format!("{command}\n"))
            .join(""))
    }

    pub fn handle(&self) -> Result<()> {
        let left = Self::captions(&self.left)?;
        let right = Self::captions(&self.right)?;

        let diff = TextDiff::from_lines(&left, &right);
        if diff.ratio() >= 1.0 {
            println!("{}", "scripts are identical".dimmed());
            return Ok(());
        }

        for group in diff.grouped_ops(self.context) {
            let mut section = Vec::new();
            for op in &group {
                for change in diff.iter_inline_changes(op) {
                    let (sign, index) = match change.tag() {
                        ChangeTag::Delete => ("❌", change.old_index()),
                        ChangeTag::Insert => ("✅", change.new_index()),
                        ChangeTag::Equal => (" ", change.new_index()),
                    };

                    let mut line = String::new();
                    for (emphasized, value) in change.iter_strings_lossy() {
                        let value = value.trim_end_matches('\n');
                        let styled = match (change.tag(), emphasized) {
                            (ChangeTag::Insert, true) => format!("{}", value.green().underline()),
                            (ChangeTag::Insert, false) => format!("{}", value.green()),
                            (ChangeTag::Delete, true) => format!("{}", value.red().underline()),
                            (ChangeTag::Delete, false) => format!("{}", value.red()),
                            (ChangeTag::Equal, _) => format!("{}", value.dimmed()),
                        };
                        line.push_str(&styled);
                    }

                    let index = index.map(|i| i.to_string()).unwrap_or_default();
                    section.push(format!("{sign} {index:>4} {line}"));
                }
            }

            println!("{}\n", section.iter().join("\n"));
        }

        Ok(())
    }
}
