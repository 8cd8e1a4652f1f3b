//! Columns command - show the merged list-table columns.

use std::path::PathBuf;

use colored::Colorize;
use indexmap::IndexMap;
use posttype::{CHECKBOX_COLUMN, Columns, RecordingHost};

pub fn run(
    file: PathBuf,
    base: Vec<(String, String)>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (definition, post_type) = super::load(&file, verbose)?;

    let base: Columns = if base.is_empty() {
        definition.base_columns.clone()
    } else {
        base.into_iter().collect::<IndexMap<_, _>>()
    };

    if verbose {
        let keys: Vec<&str> = base.keys().map(String::as_str).collect();
        println!("{} {}", "Base columns:".dimmed(), keys.join(", "));
    }

    let host = RecordingHost::new();
    let columns = post_type.columns(base, &host);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&columns)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Columns for".cyan().bold(),
        post_type.slug().white()
    );
    for (position, (key, label)) in columns.iter().enumerate() {
        let custom = post_type.custom_columns().iter().any(|c| &c.key == key);
        let marker = if custom {
            "*".green().to_string()
        } else if key == CHECKBOX_COLUMN {
            "☐".to_string()
        } else {
            " ".to_string()
        };
        println!("  {:2}. {} {:24} {}", position + 1, marker, key, label);
    }

    Ok(())
}
