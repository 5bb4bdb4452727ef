pub mod script;
pub mod symbols;
pub mod table;

use clap::ValueEnum;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle SCR scripts
    Script {
        #[command(subcommand)]
        command: script::ScriptCommands,
    },
    /// Handle HTX string tables
    Table {
        #[command(subcommand)]
        command: table::TableCommands,
    },
    /// List the names scripts use for sounds, backgrounds, characters and transitions
    Symbols(symbols::SymbolsArgs),
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Script { command } => command.handle(),
            Commands::Table { command } => command.handle(),
            Commands::Symbols(symbols) => symbols.handle(),
        }
    }
}

/// Output format of the dump commands
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One numbered line per entry
    #[default]
    Text,
    /// Pretty printed JSON
    Json,
}
