use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use std::path::PathBuf;
use ykd_scr::{Document, ReadOptions};

use crate::commands::Format;

#[derive(Args)]
pub struct DumpArgs {
    /// An input SCR file, read together with the HTX file next to it
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Fail when the script does not finish with an end command
    #[arg(long, default_value_t = false)]
    require_end: bool,
}

impl DumpArgs {
    pub fn handle(&self) -> Result<()> {
        let options = ReadOptions::builder().require_end(self.require_end).build();
        let document = Document::open_with(&self.file, options)
            .context(format!("reading {}", &self.file.display()))?;

        match self.format {
            Format::Text => {
                let width = document.script().len().to_string().len();
                for (index, command) in document.script().iter().enumerate() {
                    println!("{index:>width$}  {command}");
                }
            }
            Format::Json => {
                let json = serde_json::to_string_pretty(document.script()).into_diagnostic()?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
