use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::schema::Language;
use crate::store::Flag;

#[derive(Parser, Debug)]
#[command(name = "remodel-planner")]
#[command(version, about = "Track ship remodels and the materials they still need")]
pub struct Cli {
    /// Catalog file path or http(s) URL (defaults to the bundled catalog)
    #[arg(long, global = true, env = "REMODEL_CATALOG")]
    pub catalog: Option<String>,

    /// Directory holding saved progress
    #[arg(long, global = true, env = "REMODEL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Display language
    #[arg(short, long, global = true, value_enum, default_value_t = Language::Kr, env = "REMODEL_LANG")]
    pub lang: Language,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive terminal browser
    Browse,

    /// Print ships grouped by type with material totals
    Show {
        /// Hide ships whose remodel is done
        #[arg(short, long)]
        incomplete: bool,
    },

    /// Print material totals over unfinished remodels
    Totals,

    /// Print the saved flags of one ship
    Status {
        /// Ship id
        id: String,
    },

    /// Flip one flag of a ship and save
    Toggle {
        /// Ship id
        id: String,

        /// Flag to flip
        #[arg(value_enum)]
        flag: Flag,
    },

    /// List display groups and their type codes
    Groups,

    /// Write a JSON snapshot of the current view
    Export {
        /// Output file
        #[arg(default_value = "remodel-plan.json")]
        output: PathBuf,

        /// Hide ships whose remodel is done
        #[arg(short, long)]
        incomplete: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
