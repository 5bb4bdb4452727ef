use pretty_assertions::assert_eq;
use std::fs::File;
use tracing_test::traced_test;
use ykd_htx::{error::Error, StringTable};

#[traced_test]
#[test]
fn read_sample() -> Result<(), Error> {
    let table = StringTable::read(File::open(format!(
        "{}/resources/sample.htx",
        env!("CARGO_MANIFEST_DIR")
    ))?)?;

    assert_eq!(
        table.lines(),
        &[
            "Ah,↓Kuromi-chan!",
            "",
            "ゆめのくにで↓だいぼうけん",
            "#1 100% $5 a/b ~ c-d?!",
        ]
    );
    assert_eq!(table.index_of(""), Some(1));
    assert!(!logs_contain("malformed"));

    Ok(())
}
