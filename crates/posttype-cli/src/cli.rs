//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// posttype: verified content-type configuration
#[derive(Parser)]
#[command(name = "posttype")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a definition's options and show the registration arguments
    Resolve {
        /// Path to the post-type definition (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the merged list-table columns
    Columns {
        /// Path to the post-type definition (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Base columns as key=Label, replacing the definition's base columns
        #[arg(short, long, value_name = "KEY=LABEL", value_parser = parse_column)]
        base: Vec<(String, String)>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the admin status messages
    Messages {
        /// Path to the post-type definition (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Permalink of the post the messages refer to
        #[arg(long, default_value = "https://example.com/?p=1")]
        permalink: String,

        /// Post date (YYYY-MM-DD HH:MM), defaults to now
        #[arg(long)]
        date: Option<String>,

        /// Title of a revision being restored
        #[arg(long)]
        revision: Option<String>,
    },
}

fn parse_column(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, label)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), label.to_string()))
        }
        _ => Err(format!("Invalid column '{}'. Use KEY=LABEL.", s)),
    }
}
