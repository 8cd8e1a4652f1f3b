//! Resolve command - show the verified configuration of a definition.

use std::path::PathBuf;

use colored::Colorize;
use posttype::RecordingHost;

pub fn run(file: PathBuf, json_output: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, post_type) = super::load(&file, verbose)?;

    let host = RecordingHost::new();
    let args = post_type.registration_args(&host);

    if json_output {
        let output = serde_json::json!({
            "slug": post_type.slug(),
            "name": post_type.name(),
            "config": post_type.config(),
            "registration": args,
            "meta_boxes": post_type.meta_boxes(),
            "hooks": post_type.hooks(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        "Post type".cyan().bold(),
        post_type.name().white().bold(),
        post_type.slug()
    );
    println!();

    println!("{}", "Options:".yellow().bold());
    for (name, value) in post_type.config().iter() {
        let shown = match value {
            Some(value) => value.to_string(),
            None => "(unset)".dimmed().to_string(),
        };
        println!("  {:16} {}", name, shown);
    }

    if !post_type.meta_boxes().is_empty() {
        println!();
        println!("{}", "Meta boxes:".yellow().bold());
        for meta_box in post_type.meta_boxes() {
            println!("  {:24} {} → {}", meta_box.slug, meta_box.name, meta_box.post_type);
        }
    }

    println!();
    println!("{}", "Registration:".yellow().bold());
    println!("{}", serde_json::to_string_pretty(&args)?);

    if verbose {
        println!();
        println!("{}", "Hooks:".yellow().bold());
        for hook in post_type.hooks() {
            println!("  {:?}", hook);
        }
    }

    Ok(())
}
