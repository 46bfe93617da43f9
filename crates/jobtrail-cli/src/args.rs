use crate::types::BackendKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobtrail")]
#[command(about = "Track job applications from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the application stores
    #[arg(long, default_value = ".", global = true)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new empty tabular store
    Init,

    /// Collapse the tabular store to one row per company and status
    Clean,

    /// Copy the tabular store into a new relational store
    ToRelational,

    /// Copy the relational store into a new tabular store
    ToTabular,

    /// Interactive entry shell (the default when no command is given)
    Run {
        #[arg(long, value_enum, default_value_t = BackendKind::Tabular)]
        backend: BackendKind,
    },
}
