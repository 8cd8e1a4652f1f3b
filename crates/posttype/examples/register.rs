//! Register a post type against an in-memory host.
//!
//! Run with: cargo run -p posttype --example register

use posttype::{MessageContext, PostType, RecordingHost, Result, columns_from};
use serde_json::json;

fn main() -> Result<()> {
    let overrides = serde_json::from_value(json!({
        "singular_name": "Story",
        "has_archive": "News Archive",
        "supports": ["title", "editor", "thumbnail"],
        "meta_boxes": [
            {"slug": "byline", "name": "Byline", "context": "side"},
            {"name": "Forgot the slug"}
        ],
        "custom_toc": [{"slug": "byline", "name": "Byline"}],
        "unset_toc": ["date"],
        "toc_order": ["title", "news-byline"]
    }))?;

    let news = PostType::new("news", "News", overrides)?
        .with_column_renderer("byline", |id| format!("Author of #{id}"));

    let mut host = RecordingHost::new();
    news.attach(&mut host);
    news.register(&mut host);

    println!("Hooks: {:?}", host.hooks);
    println!(
        "Registration: {}",
        serde_json::to_string_pretty(&host.registered["news"])?
    );

    for meta_box in news.meta_boxes() {
        println!("Meta box {} ({}) on {}", meta_box.slug, meta_box.name, meta_box.post_type);
    }

    let columns = news.columns(
        columns_from([("cb", ""), ("title", "Title"), ("date", "Date")]),
        &host,
    );
    println!("Columns: {:?}", columns.keys().collect::<Vec<_>>());
    println!("Cell: {:?}", news.column_cell("news-byline", 7, &host));

    let date = chrono::Local::now().naive_local();
    let ctx = MessageContext::new("https://example.com/news/hello", date);
    for message in news.updated_messages(&ctx, &host).into_iter().flatten() {
        if !message.is_empty() {
            println!("{}", message);
        }
    }

    Ok(())
}
