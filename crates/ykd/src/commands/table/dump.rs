use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use std::{fs::File, path::PathBuf};
use ykd_htx::StringTable;

use crate::commands::Format;

#[derive(Args)]
pub struct DumpArgs {
    /// An input HTX file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl DumpArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let table = StringTable::read(f)?;

        match self.format {
            Format::Text => {
                for (index, line) in table.iter().enumerate() {
                    println!("{index:>4}  {line}");
                }
            }
            Format::Json => {
                let json = serde_json::to_string_pretty(&table).into_diagnostic()?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
