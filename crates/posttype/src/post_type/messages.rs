//! Admin status messages shown after a post is saved, published, etc.

use chrono::NaiveDateTime;

use crate::host::Host;

/// Number of message slots the host expects; slot 0 is unused.
pub const MESSAGE_COUNT: usize = 11;

/// Publish-box date format, e.g. `Mar 5, 2024 @ 9:07`.
const SCHEDULED_FORMAT: &str = "%b %-d, %Y @ %-H:%M";

/// Post details the messages refer to.
#[derive(Debug, Clone)]
pub struct MessageContext {
    /// Public URL of the post, as produced by the host.
    pub permalink: String,
    /// The post's publish date, used by the "scheduled" message.
    pub post_date: NaiveDateTime,
    /// Title of the revision being restored, if any.
    pub revision_title: Option<String>,
}

impl MessageContext {
    pub fn new(permalink: impl Into<String>, post_date: NaiveDateTime) -> Self {
        Self {
            permalink: permalink.into(),
            post_date,
            revision_title: None,
        }
    }

    pub fn with_revision(mut self, title: impl Into<String>) -> Self {
        self.revision_title = Some(title.into());
        self
    }

    /// The permalink with `preview=true` appended to its query string.
    pub fn preview_link(&self) -> String {
        let separator = if self.permalink.contains('?') { '&' } else { '?' };
        format!("{}{}preview=true", self.permalink, separator)
    }
}

/// Build the host's status messages for a post type.
///
/// Templates are translated with their placeholders intact; `%1$s` is always
/// the singular name. Slot 5 is `None` unless a revision is being restored.
pub(crate) fn updated_messages(
    singular: &str,
    ctx: &MessageContext,
    host: &dyn Host,
) -> Vec<Option<String>> {
    let t = |template: &str, args: &[&str]| fill(&host.translate(template), args);
    let view = ctx.permalink.as_str();
    let preview = ctx.preview_link();
    let scheduled = ctx.post_date.format(SCHEDULED_FORMAT).to_string();

    vec![
        Some(String::new()),
        Some(t("%1$s updated. <a href=\"%2$s\">View %1$s</a>", &[singular, view])),
        Some(t("%1$s updated.", &[singular])),
        Some(t("%1$s deleted.", &[singular])),
        Some(t("%1$s updated.", &[singular])),
        ctx.revision_title
            .as_deref()
            .map(|title| t("%1$s restored to revision from %2$s", &[singular, title])),
        Some(t("%1$s published. <a href=\"%2$s\">View %1$s</a>", &[singular, view])),
        Some(t("%1$s saved.", &[singular])),
        Some(t(
            "%1$s submitted. <a target=\"_blank\" href=\"%2$s\">Preview %1$s</a>",
            &[singular, &preview],
        )),
        Some(t(
            "%1$s scheduled for: <strong>%2$s</strong>. <a target=\"_blank\" href=\"%3$s\">Preview %1$s</a>",
            &[singular, &scheduled, view],
        )),
        Some(t(
            "%1$s draft updated. <a target=\"_blank\" href=\"%2$s\">Preview %1$s</a>",
            &[singular, &preview],
        )),
    ]
}

/// Substitute `%N$s` (positional) and `%s` (sequential) placeholders in one
/// left-to-right pass. Inserted text is never rescanned, and placeholders
/// with no matching argument expand to nothing.
fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next = 0;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        if let Some(after) = tail.strip_prefix('s') {
            out.push_str(args.get(next).copied().unwrap_or_default());
            next += 1;
            rest = after;
            continue;
        }

        let digits = tail.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            if let Some(after) = tail[digits..].strip_prefix("$s") {
                let arg = tail[..digits]
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| args.get(i));
                out.push_str(arg.copied().unwrap_or_default());
                rest = after;
                continue;
            }
        }

        out.push('%');
        rest = tail;
    }

    out.push_str(rest);
    out
}
