use clap::{Parser, Subcommand, ValueEnum};
use snipdeck::model::Category;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "snipdeck")]
#[command(about = "One-click clipboard deck for offer and price snippets", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this catalog file instead of the resolved default
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show both sections and their buttons
    #[command(alias = "ls")]
    Show,

    /// Add a button, prompting for its label and text
    #[command(alias = "a")]
    Add {
        /// Section to add to
        category: CategoryArg,
    },

    /// Remove a button from a section
    #[command(alias = "rm")]
    Remove {
        /// Section to remove from
        category: CategoryArg,

        /// Label of the button to remove
        label: Option<String>,
    },

    /// Copy a button's text to the clipboard
    #[command(alias = "c")]
    Copy {
        /// Label of the button
        label: String,
    },

    /// Print the catalog file location
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    Offer,
    Price,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Offer => Category::Offer,
            CategoryArg::Price => Category::Price,
        }
    }
}
