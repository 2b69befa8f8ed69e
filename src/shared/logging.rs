//! Structured logging helpers
//!
//! Keeps tracing fields consistent across the search, export and auth flows.

/// Log categories for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Search,
    Export,
    Clipboard,
    Auth,
    Theme,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Search => "search",
            LogOperation::Export => "export",
            LogOperation::Clipboard => "clipboard",
            LogOperation::Auth => "auth",
            LogOperation::Theme => "theme",
        }
    }
}

/// Log search start (keyword validated, loading state entered)
pub fn log_search_start(keyword: &str) {
    tracing::info!(
        operation = LogOperation::Search.as_str(),
        keyword = keyword,
        "Starting simulated search"
    );
}

/// Log a submission rejected because a search is already in flight
pub fn log_search_in_flight(keyword: &str) {
    tracing::debug!(
        operation = LogOperation::Search.as_str(),
        keyword = keyword,
        "Search already in flight, submission ignored"
    );
}

/// Log a submission rejected by keyword validation
pub fn log_search_rejected(reason: &str) {
    tracing::warn!(
        operation = LogOperation::Search.as_str(),
        reason = reason,
        "Search rejected"
    );
}

/// Log search completion
pub fn log_search_completed(keyword: &str, post_count: usize) {
    tracing::info!(
        operation = LogOperation::Search.as_str(),
        keyword = keyword,
        post_count = post_count,
        "Search completed"
    );
}

/// Log a JSON export
pub fn log_export(keyword: &str, post_count: usize, filename: &str) {
    tracing::info!(
        operation = LogOperation::Export.as_str(),
        keyword = keyword,
        post_count = post_count,
        filename = filename,
        "Exported results"
    );
}

/// Log a clipboard copy
pub fn log_clipboard_copy(length: usize) {
    tracing::debug!(
        operation = LogOperation::Clipboard.as_str(),
        text_length = length,
        "Copied text to clipboard"
    );
}

/// Log an auth state change
pub fn log_auth_change(signed_in: bool) {
    tracing::info!(
        operation = LogOperation::Auth.as_str(),
        signed_in = signed_in,
        "Auth state changed"
    );
}

/// Log a theme switch
pub fn log_theme_change(theme: &str) {
    tracing::debug!(
        operation = LogOperation::Theme.as_str(),
        theme = theme,
        "Theme changed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Search.as_str(), "search");
        assert_eq!(LogOperation::Export.as_str(), "export");
        assert_eq!(LogOperation::Clipboard.as_str(), "clipboard");
        assert_eq!(LogOperation::Auth.as_str(), "auth");
        assert_eq!(LogOperation::Theme.as_str(), "theme");
    }
}
