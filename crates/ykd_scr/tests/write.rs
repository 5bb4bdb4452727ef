use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_test::traced_test;
use walkdir::WalkDir;
use ykd_scr::{error::Error, Document, Encoded, Script, StringTable};

fn resources() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources")
}

/// Reading then writing a script must reproduce both files byte for byte
#[traced_test]
#[test]
fn rewrite_is_identical() -> Result<(), Error> {
    for entry in WalkDir::new(resources()).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "scr") {
            continue;
        }

        info!("testing {}", path.display());

        let document = Document::open(path)?;
        let Encoded { script, table } = document.script().encode()?;

        assert_eq!(script, fs::read(path)?);
        assert_eq!(table.encode()?, fs::read(document.table_path())?);
    }

    Ok(())
}

#[traced_test]
#[test]
fn save_copy() -> Result<(), Error> {
    let dir = tempfile::tempdir()?;
    let mut document = Document::open(resources().join("scene.scr"))?;

    document.save_as(dir.path().join("copy.scr"))?;

    assert_eq!(
        fs::read(dir.path().join("copy.scr"))?,
        fs::read(resources().join("scene.scr"))?
    );
    assert_eq!(
        fs::read(dir.path().join("copy.htx"))?,
        fs::read(resources().join("scene.htx"))?
    );

    Ok(())
}

/// Dialogue edits replace the table instead of growing the loaded one
#[traced_test]
#[test]
fn table_is_rebuilt() -> Result<(), Error> {
    let table = StringTable::read(fs::File::open(resources().join("scene.htx"))?)?;
    let data = fs::read(resources().join("scene.scr"))?;

    let script: Script = Script::decode(&data, &table)?
        .into_iter()
        .filter(|command| {
            !matches!(command, ykd_scr::Command::Dialogue { text } if text.joined().starts_with("Ah,"))
        })
        .collect();

    let encoded = script.encode()?;

    assert_eq!(encoded.table.lines(), &["ゆめのとびら↓Hirake!"]);
    assert_eq!(Script::decode(&encoded.script, &encoded.table)?, script);

    Ok(())
}
