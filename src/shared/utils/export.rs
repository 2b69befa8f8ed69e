//! Results export and clipboard interop
//!
//! Serialization is plain Rust; the browser side (file download, clipboard
//! write) goes through `document::eval` and is fire-and-forget.

use dioxus::document;
use dioxus::prelude::*;

use crate::domain::models::Post;
use crate::shared::errors::Result;
use crate::shared::logging;

/// Serialize posts to the export format: a pretty-printed JSON array with
/// 2-space indentation.
pub fn posts_to_json(posts: &[Post]) -> Result<String> {
    Ok(serde_json::to_string_pretty(posts)?)
}

/// Filename of the exported document for a keyword.
pub fn export_filename(keyword: &str) -> String {
    format!("linkedin-posts-{keyword}.json")
}

/// Trigger a client-side download of `content` under `filename`.
///
/// Builds a percent-encoded data URI and clicks a transient anchor element,
/// so nothing touches the server. No-op outside the browser.
pub fn trigger_download(filename: &str, content: &str) {
    let data_uri = format!(
        "data:application/json;charset=utf-8,{}",
        urlencoding::encode(content)
    );
    // JSON string literals double as JS string literals, which keeps
    // arbitrary keyword characters out of the script text
    let script = format!(
        r#"
        (function() {{
            const link = document.createElement('a');
            link.setAttribute('href', '{data_uri}');
            link.setAttribute('download', {name});
            link.click();
        }})()
        "#,
        name = js_string_literal(filename),
    );

    spawn(async move {
        let _ = document::eval(&script).await;
    });
}

/// Write `text` to the platform clipboard. Fire-and-forget.
pub fn copy_to_clipboard(text: &str) {
    logging::log_clipboard_copy(text.len());
    let script = format!(
        "navigator.clipboard.writeText({})",
        js_string_literal(text)
    );

    spawn(async move {
        let _ = document::eval(&script).await;
    });
}

fn js_string_literal(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::generate_posts;

    #[test]
    fn test_posts_to_json_round_trip() {
        let posts = generate_posts("AI");
        let json = posts_to_json(&posts).unwrap();

        let parsed: Vec<Post> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed, posts);
    }

    #[test]
    fn test_posts_to_json_uses_two_space_indentation() {
        let posts = generate_posts("AI");
        let json = posts_to_json(&posts).unwrap();

        assert!(json.starts_with("[\n  {"));
        assert!(json.contains("\n    \"title\""));
        assert!(json.contains("\n      \"likes\""));
    }

    #[test]
    fn test_export_filename_embeds_keyword() {
        assert_eq!(export_filename("AI"), "linkedin-posts-AI.json");
    }

    #[test]
    fn test_js_string_literal_escapes_quotes() {
        assert_eq!(js_string_literal(r#"a"b"#), r#""a\"b""#);
    }
}
