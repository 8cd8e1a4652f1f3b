//! CLI command implementations.

pub mod columns;
pub mod messages;
pub mod resolve;

use std::path::Path;

use colored::Colorize;
use posttype::{PostType, PostTypeDefinition};
use tracing::debug;

/// Load a definition and build its post type.
fn load(file: &Path, verbose: bool) -> Result<(PostTypeDefinition, PostType), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    debug!(path = %file.display(), "loading definition");
    let definition = PostTypeDefinition::load(file)?;
    let post_type = PostType::from_definition(&definition)?;

    if verbose {
        println!(
            "{} {} ({})",
            "Loaded".cyan().bold(),
            post_type.name().white(),
            post_type.slug()
        );
    }

    Ok((definition, post_type))
}
