use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::create::CreateArgs;

#[derive(Parser, Debug)]
#[command(name = "gist")]
#[command(version, about = "Simple GitHub Gist command", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create new snippet
    Create {
        /// Create public Gist
        #[arg(long)]
        public: bool,

        /// Description shown on the Gist page
        #[arg(short, long)]
        description: Option<String>,

        /// File to upload
        #[arg(value_name = "FILENAME")]
        files: Vec<PathBuf>,
    },
}

impl From<Commands> for CreateArgs {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Create {
                public,
                description,
                files,
            } => CreateArgs {
                files,
                public,
                description,
            },
        }
    }
}
