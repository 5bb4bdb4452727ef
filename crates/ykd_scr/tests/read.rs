use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_test::traced_test;
use walkdir::WalkDir;
use ykd_scr::{error::Error, Command, DialogueText, Document, Position, ReadOptions};

fn resources() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources")
}

#[traced_test]
#[test]
fn read_scene() -> Result<(), Error> {
    let document = Document::open(resources().join("scene.scr"))?;

    let expected = vec![
        Command::Background {
            unknown: 0,
            background: "bg02.png".to_string(),
        },
        Command::Sound {
            sound: "Title BGM".to_string(),
        },
        Command::FadeIn {
            bytes: [0x00, 0x00, 0x1E, 0x00],
        },
        Command::Character {
            position: Position::LeftFacingRight,
            name: "My Melo (Talking)".to_string(),
        },
        Command::Dialogue {
            text: DialogueText::new(["Ah,", "Kuromi-chan!"]),
        },
        Command::Wait { hundredths: 150 },
        Command::Character {
            position: Position::RightFacingLeft,
            name: "Kuromi (Talking)".to_string(),
        },
        Command::Dialogue {
            text: DialogueText::new(["ゆめのとびら", "Hirake!"]),
        },
        Command::Sound {
            sound: "Kuromi: Ikuyo! Hirake, yume no tobira!".to_string(),
        },
        Command::Dialogue {
            text: DialogueText::new(["Ah,", "Kuromi-chan!"]),
        },
        Command::Transition {
            unknown: 0,
            transition: "White Center Wipe Out".to_string(),
            speed: 2,
        },
        Command::End,
    ];

    assert_eq!(document.script().to_vec(), expected);

    Ok(())
}

#[traced_test]
#[test]
fn every_script_is_terminated() -> Result<(), Error> {
    let scripts = WalkDir::new(resources())
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "scr"))
        .collect::<Vec<_>>();

    assert!(!scripts.is_empty());

    for path in scripts {
        info!("testing {}", path.display());

        let options = ReadOptions::builder().require_end(true).build();
        let document = Document::open_with(&path, options)?;
        assert!(document.script().is_terminated());
    }

    Ok(())
}
