pub mod build;
pub mod check;
pub mod diff;
pub mod dump;

#[derive(clap::Subcommand)]
pub enum ScriptCommands {
    /// Print the commands of a script
    Dump(dump::DumpArgs),
    /// Create a script and its string table from JSON
    Build(build::BuildArgs),
    /// Verify that every script in a directory reads and rewrites unchanged
    Check(check::CheckArgs),
    /// Compare the commands of two scripts
    Diff(diff::DiffArgs),
}

impl ScriptCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            ScriptCommands::Dump(dump) => dump.handle(),
            ScriptCommands::Build(build) => build.handle(),
            ScriptCommands::Check(check) => check.handle(),
            ScriptCommands::Diff(diff) => diff.handle(),
        }
    }
}
