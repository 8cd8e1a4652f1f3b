//! Messages command - print the admin status messages.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use posttype::{MessageContext, RecordingHost};

pub fn run(
    file: PathBuf,
    permalink: String,
    date: Option<String>,
    revision: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (_, post_type) = super::load(&file, verbose)?;

    let post_date = match date {
        Some(ref d) => NaiveDateTime::parse_from_str(d, "%Y-%m-%d %H:%M")
            .map_err(|e| format!("Invalid date '{}': {}", d, e))?,
        None => Local::now().naive_local(),
    };

    let mut ctx = MessageContext::new(permalink, post_date);
    if let Some(title) = revision {
        ctx = ctx.with_revision(title);
    }

    let host = RecordingHost::new();
    let messages = post_type.updated_messages(&ctx, &host);

    println!(
        "{} {}",
        "Messages for".cyan().bold(),
        post_type.singular_name().white()
    );
    for (slot, message) in messages.iter().enumerate().skip(1) {
        match message {
            Some(text) => println!("  {:2}  {}", slot, text),
            None => println!("  {:2}  {}", slot, "(none)".dimmed()),
        }
    }

    Ok(())
}
