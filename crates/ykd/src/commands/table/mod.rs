pub mod dump;

#[derive(clap::Subcommand)]
pub enum TableCommands {
    /// Print the lines of a string table
    Dump(dump::DumpArgs),
}

impl TableCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            TableCommands::Dump(dump) => dump.handle(),
        }
    }
}
