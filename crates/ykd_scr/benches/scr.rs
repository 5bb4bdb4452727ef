use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

fn get_input() -> (Vec<u8>, ykd_scr::StringTable) {
    let read = |name: &str| {
        std::fs::read(format!("{}/resources/{name}", env!("CARGO_MANIFEST_DIR"))).unwrap()
    };

    (
        read("scene.scr"),
        ykd_scr::StringTable::decode(&read("scene.htx")),
    )
}

pub mod read {
    use divan::Bencher;
    use ykd_scr::{Script, StringTable};

    #[divan::bench]
    fn decode_table(bencher: Bencher) {
        bencher
            .with_inputs(|| {
                std::fs::read(format!(
                    "{}/resources/scene.htx",
                    env!("CARGO_MANIFEST_DIR")
                ))
                .unwrap()
            })
            .bench_refs(|data| {
                divan::black_box(StringTable::decode(data));
            });
    }

    #[divan::bench]
    fn decode_script(bencher: Bencher) {
        bencher
            .with_inputs(super::get_input)
            .bench_refs(|(data, table)| {
                divan::black_box(Script::decode(data, table).unwrap());
            });
    }
}

pub mod write {
    use divan::Bencher;
    use ykd_scr::Script;

    #[divan::bench]
    fn encode_script(bencher: Bencher) {
        bencher
            .with_inputs(|| {
                let (data, table) = super::get_input();
                Script::decode(&data, &table).unwrap()
            })
            .bench_refs(|script| {
                divan::black_box(script.encode().unwrap());
            });
    }

    #[divan::bench]
    fn encode_table(bencher: Bencher) {
        bencher
            .with_inputs(|| super::get_input().1)
            .bench_refs(|table| {
                divan::black_box(table.encode().unwrap());
            });
    }
}
