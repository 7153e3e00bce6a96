use std::path::PathBuf;
use clap::{Parser, Subcommand};
use notepad::bin_constants::DEFAULT_CLIENT_CONFIG_FILE;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about = "Notes with an offline fallback")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CLIENT_CONFIG_FILE)]
    pub config_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum Command {
    /// Print every note
    List,

    /// Print one note
    Get {
        id: String,
    },

    /// Print the notes whose title, content or tags contain the term
    Search {
        term: String,
    },

    /// Create a note, or edit the one with `--id`
    Save {
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Replaces all tags of an edited note, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    Delete {
        id: String,
    },
}
