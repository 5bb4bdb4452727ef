use clap::{Args, ValueEnum};
use miette::Result;
use ykd_scr::{
    symbols::{SymbolTable, BACKGROUNDS, CHARACTERS, SOUNDS, TRANSITIONS},
    Position,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Kind {
    Sound,
    Background,
    Character,
    Transition,
    Position,
}

#[derive(Args)]
pub struct SymbolsArgs {
    /// Only list one kind of symbol
    #[arg(short, long, value_enum)]
    kind: Option<Kind>,
}

fn print_table<T: Copy + PartialEq + Into<u16> + 'static>(table: &SymbolTable<T>) {
    println!("{}s:", table.kind());
    for (name, code) in table.iter() {
        println!("  {:#06X}  {name}", Into::<u16>::into(code));
    }
}

impl SymbolsArgs {
    pub fn handle(&self) -> Result<()> {
        let wanted = |kind: Kind| self.kind.map_or(true, |k| k == kind);

        if wanted(Kind::Sound) {
            print_table(&SOUNDS);
        }
        if wanted(Kind::Background) {
            print_table(&BACKGROUNDS);
        }
        if wanted(Kind::Character) {
            print_table(&CHARACTERS);
        }
        if wanted(Kind::Transition) {
            print_table(&TRANSITIONS);
        }
        if wanted(Kind::Position) {
            println!("positions:");
            for position in Position::ALL {
                println!("  {:#06X}  {position}", position.code());
            }
        }

        Ok(())
    }
}
