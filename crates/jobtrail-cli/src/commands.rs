use super::args::{Cli, Commands};
use super::handlers;
use crate::context::StorePaths;
use crate::types::BackendKind;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let paths = StorePaths::new(&cli.data_dir);

    match cli.command {
        None => handlers::shell::handle(&paths, BackendKind::Tabular),

        Some(Commands::Init) => handlers::init::handle(&paths),

        Some(Commands::Clean) => handlers::clean::handle(&paths),

        Some(Commands::ToRelational) => {
            handlers::migrate::handle(&paths, BackendKind::Relational)
        }

        Some(Commands::ToTabular) => handlers::migrate::handle(&paths, BackendKind::Tabular),

        Some(Commands::Run { backend }) => handlers::shell::handle(&paths, backend),
    }
}
