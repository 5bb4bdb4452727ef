//! A script on disk together with its string table

use std::{
    fs, io,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{info, instrument, warn};
use ykd_htx::StringTable;

use crate::{
    command::Script,
    error::Result,
    read::ReadOptions,
    write::Encoded,
};

/// Extension of the string table paired with a script
pub const TABLE_EXTENSION: &str = "htx";

/// An open `.scr` file
///
/// The string table lives next to the script under the same stem with an `.htx` extension. It is
/// only needed while reading; saving always builds a new one from the current commands.
///
/// ```no_run
/// # fn doit() -> ykd_scr::error::Result<()>
/// # {
/// use ykd_scr::{Command, Document};
///
/// let mut document = Document::open("scene01.scr")?;
/// document.script_mut().insert(0, Command::Wait { hundredths: 50 });
/// document.save()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    script: Script,
}

impl Document {
    /// Start a document that does not exist on disk yet
    pub fn new(path: impl Into<PathBuf>, script: Script) -> Self {
        Self {
            path: path.into(),
            script,
        }
    }

    /// Read a script and its string table
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, ReadOptions::default())
    }

    /// Read a script and its string table with explicit [`ReadOptions`]
    #[instrument(skip_all, fields(path = %path.as_ref().display()), err)]
    pub fn open_with(path: impl AsRef<Path>, options: ReadOptions) -> Result<Self> {
        let path = path.as_ref();

        let table = StringTable::decode(&fs::read(table_path(path))?);
        let script = Script::decode_with(&fs::read(path)?, &table, options)?;

        Ok(Self {
            path: path.to_path_buf(),
            script,
        })
    }

    /// Write the script and a freshly built string table to [`Document::path`]
    pub fn save(&self) -> Result<()> {
        self.write_files(&self.path)
    }

    /// Write the script and its string table under a new path and keep using that path
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        self.write_files(&path)?;
        self.path = path;
        Ok(())
    }

    /// Both files are staged next to their targets and only moved into place once both are
    /// written. If the script cannot be moved after the table was, the previous table is put back.
    #[instrument(skip_all, fields(path = %path.display()), err)]
    fn write_files(&self, path: &Path) -> Result<()> {
        let Encoded { script, table } = self.script.encode()?;
        let table = table.encode()?;

        let table_target = table_path(path);
        let staged_script = stage(path, &script)?;
        let staged_table = stage(&table_target, &table)?;

        let previous_table = fs::read(&table_target).ok();

        staged_table.persist(&table_target).map_err(io::Error::from)?;

        if let Err(e) = staged_script.persist(path) {
            warn!("restoring {}", table_target.display());
            match previous_table {
                Some(previous) => fs::write(&table_target, previous)?,
                None => fs::remove_file(&table_target)?,
            }
            return Err(io::Error::from(e).into());
        }

        info!("saved script");
        Ok(())
    }

    /// Location of the `.scr` file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location of the paired `.htx` file
    pub fn table_path(&self) -> PathBuf {
        table_path(&self.path)
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn script_mut(&mut self) -> &mut Script {
        &mut self.script
    }

    pub fn into_script(self) -> Script {
        self.script
    }
}

/// Write `data` to a temporary file in the directory of `target`
fn stage(target: &Path, data: &[u8]) -> Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(file)
}

/// Path of the string table belonging to the script at `path`
pub fn table_path(path: &Path) -> PathBuf {
    path.with_extension(TABLE_EXTENSION)
}
