use clap::Args;
use miette::{miette, Context, IntoDiagnostic, Result};
use std::{fs, path::PathBuf};
use tracing::{info, warn};
use ykd_scr::{Command, Document, Script};

#[derive(Args)]
pub struct BuildArgs {
    /// A JSON file as written by `script dump --format json`
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// A target SCR file, the HTX file is written next to it
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl BuildArgs {
    pub fn handle(&self) -> Result<()> {
        let json = fs::read_to_string(&self.input)
            .into_diagnostic()
            .context(format!("reading {}", &self.input.display()))?;
        let script: Script = serde_json::from_str(&json)
            .into_diagnostic()
            .context(format!("parsing {}", &self.input.display()))?;

        for (index, command) in script.iter().enumerate() {
            if let Command::Dialogue { text } = command {
                if let Err(e) = text.check_width() {
                    warn!(index, "{e}");
                }
            }
        }

        if !script.is_terminated() {
            warn!("script does not finish with an end command");
        }

        let document = Document::new(&self.file, script);
        if !self.overwrite {
            for path in [document.path().to_path_buf(), document.table_path()] {
                if path.exists() {
                    return Err(miette!("{} already exists", path.display()));
                }
            }
        }

        info!("creating {}", &self.file.display());
        document
            .save()
            .context(format!("writing {}", &self.file.display()))?;

        Ok(())
    }
}
