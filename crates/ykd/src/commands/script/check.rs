use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use std::{fs, path::Path, path::PathBuf};
use tracing::{error, info};
use walkdir::WalkDir;
use ykd_scr::{Document, ReadOptions};

#[derive(Args)]
pub struct CheckArgs {
    /// A directory searched recursively for SCR files
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// Fail scripts that do not finish with an end command
    #[arg(long, default_value_t = false)]
    require_end: bool,
}

impl CheckArgs {
    fn check_file(&self, path: &Path) -> Result<()> {
        let options = ReadOptions::builder().require_end(self.require_end).build();
        let document = Document::open_with(path, options)?;
        let encoded = document.script().encode()?;

        if encoded.script != fs::read(path).into_diagnostic()? {
            return Err(miette!("script changes when written back"));
        }

        if encoded.table.encode()? != fs::read(document.table_path()).into_diagnostic()? {
            return Err(miette!("string table changes when written back"));
        }

        Ok(())
    }

    pub fn handle(&self) -> Result<()> {
        let scripts = WalkDir::new(&self.directory)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "scr"))
            .collect::<Vec<_>>();

        if scripts.is_empty() {
            return Err(miette!("no scripts found in {}", self.directory.display()));
        }

        let mut failed = 0;
        for entry in &scripts {
            match self.check_file(entry.path()) {
                Ok(()) => info!("{} ok", entry.path().display()),
                Err(e) => {
                    failed += 1;
                    error!("{}: {e}", entry.path().display());
                }
            }
        }

        info!("checked {} scripts, {} failed", scripts.len(), failed);

        if failed > 0 {
            return Err(miette!("{failed} of {} scripts failed", scripts.len()));
        }

        Ok(())
    }
}
