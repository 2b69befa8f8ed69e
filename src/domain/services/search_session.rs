//! Search session state machine
//!
//! All state transitions of one search live here, free of any UI or timer
//! concern. The `use_search` hook owns the scheduling (progress ticker,
//! simulated fetch delay) and drives these methods in order:
//!
//! `begin_search` -> `tick_progress`* -> `complete_search` -> `finish_search`
//! -> `reset_progress`

use chrono::{DateTime, Utc};

use crate::domain::models::{Post, SearchHistory};
use crate::domain::services::generate_posts;
use crate::shared::errors::{AppError, Result};

/// Interval between progress ticks while a search is in flight.
pub const PROGRESS_TICK_MS: u32 = 200;
/// Progress added per tick.
pub const PROGRESS_STEP: u8 = 10;
/// Progress never exceeds this value until the fetch completes.
pub const PROGRESS_CEILING: u8 = 90;
/// Simulated network latency of one search.
pub const FETCH_DELAY_MS: u32 = 2000;
/// Delay before the progress bar is zeroed after completion.
pub const PROGRESS_RESET_DELAY_MS: u32 = 1000;

/// Transient per-session search state. Lives for one page load only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    /// Current content of the keyword input field.
    pub keyword: String,
    /// Posts from the most recent completed search.
    pub posts: Vec<Post>,
    /// True while a simulated fetch is in flight.
    pub loading: bool,
    /// Progress value shown while loading, 0-100.
    pub progress: u8,
    /// Recent distinct keywords, most recent first.
    pub history: SearchHistory,
    /// When the last search completed, for the statistics panel.
    pub last_search_at: Option<DateTime<Utc>>,
}

impl SearchSession {
    /// Validate the keyword and enter the loading state.
    ///
    /// Returns the trimmed keyword the rest of the search runs on. An empty
    /// (or whitespace-only) keyword fails with [`AppError::KeywordRequired`]
    /// and mutates nothing. Only one search may be in flight: while
    /// `loading` is set this fails with [`AppError::SearchInFlight`],
    /// again without mutating anything, so a mid-flight submission cannot
    /// wipe the posts or restart the progress counter.
    pub fn begin_search(&mut self) -> Result<String> {
        if self.loading {
            return Err(AppError::SearchInFlight);
        }
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return Err(AppError::KeywordRequired);
        }
        let keyword = keyword.to_string();

        self.loading = true;
        self.progress = 0;
        self.posts.clear();
        Ok(keyword)
    }

    /// Advance the simulated progress by one step, clamped at the ceiling.
    pub fn tick_progress(&mut self) {
        self.progress = (self.progress.saturating_add(PROGRESS_STEP)).min(PROGRESS_CEILING);
    }

    /// Install the generated posts and record the keyword in the history.
    /// Returns the number of posts found.
    pub fn complete_search(&mut self, keyword: &str) -> usize {
        self.posts = generate_posts(keyword);
        self.progress = 100;
        self.history.record(keyword);
        self.last_search_at = Some(Utc::now());
        self.posts.len()
    }

    /// Leave the loading state. Runs on every exit path of a search.
    pub fn finish_search(&mut self) {
        self.loading = false;
    }

    /// Zero the progress bar (after the trailing completion delay).
    pub fn reset_progress(&mut self) {
        self.progress = 0;
    }

    /// Prefill the keyword input from a recent-search chip. Does not start
    /// a search.
    pub fn recall_term(&mut self, term: &str) {
        self.keyword = term.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_search_rejects_empty_keyword() {
        let mut session = SearchSession::default();

        assert!(matches!(
            session.begin_search(),
            Err(AppError::KeywordRequired)
        ));
        assert_eq!(session, SearchSession::default());
    }

    #[test]
    fn test_begin_search_rejects_whitespace_keyword() {
        let mut session = SearchSession {
            keyword: "   ".to_string(),
            ..Default::default()
        };

        assert!(session.begin_search().is_err());
        assert!(!session.loading);
        assert!(session.posts.is_empty());
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_begin_search_trims_and_enters_loading() {
        let mut session = SearchSession {
            keyword: "  AI  ".to_string(),
            progress: 47,
            posts: generate_posts("stale"),
            ..Default::default()
        };

        let keyword = session.begin_search().unwrap();

        assert_eq!(keyword, "AI");
        assert!(session.loading);
        assert_eq!(session.progress, 0);
        assert!(session.posts.is_empty());
    }

    #[test]
    fn test_tick_progress_clamps_at_ceiling() {
        let mut session = SearchSession::default();

        for _ in 0..20 {
            session.tick_progress();
        }
        assert_eq!(session.progress, PROGRESS_CEILING);
    }

    #[test]
    fn test_full_search_transition_sequence() {
        let mut session = SearchSession {
            keyword: "AI".to_string(),
            ..Default::default()
        };

        let keyword = session.begin_search().unwrap();
        session.tick_progress();
        session.tick_progress();
        assert_eq!(session.progress, 20);

        let count = session.complete_search(&keyword);
        assert_eq!(count, 5);
        assert_eq!(session.progress, 100);
        assert_eq!(session.posts.len(), 5);
        assert_eq!(session.history.terms(), &["AI"]);
        assert!(session.last_search_at.is_some());

        session.finish_search();
        assert!(!session.loading);

        session.reset_progress();
        assert_eq!(session.progress, 0);
    }

    #[test]
    fn test_begin_search_refuses_while_already_loading() {
        let mut session = SearchSession {
            keyword: "AI".to_string(),
            ..Default::default()
        };
        let keyword = session.begin_search().unwrap();
        session.complete_search(&keyword);

        // Still loading: finish_search has not run yet
        session.keyword = "Marketing".to_string();
        assert!(matches!(
            session.begin_search(),
            Err(AppError::SearchInFlight)
        ));

        // The in-flight results and progress survive untouched
        assert_eq!(session.posts.len(), 5);
        assert_eq!(session.posts[0].title, "How AI is transforming the industry");
        assert_eq!(session.progress, 100);
        assert!(session.loading);
        assert_eq!(session.history.terms(), &["AI"]);
    }

    #[test]
    fn test_repeat_search_keeps_keyword_once_at_front() {
        let mut session = SearchSession {
            keyword: "AI".to_string(),
            ..Default::default()
        };

        for _ in 0..2 {
            let keyword = session.begin_search().unwrap();
            session.complete_search(&keyword);
            session.finish_search();
        }

        assert_eq!(session.history.terms(), &["AI"]);
    }

    #[test]
    fn test_six_searches_keep_five_most_recent() {
        let mut session = SearchSession::default();

        for term in ["AI", "Marketing", "Sales", "Rust", "Hiring", "Cloud"] {
            session.keyword = term.to_string();
            let keyword = session.begin_search().unwrap();
            session.complete_search(&keyword);
            session.finish_search();
        }

        assert_eq!(
            session.history.terms(),
            &["Cloud", "Hiring", "Rust", "Sales", "Marketing"]
        );
    }

    #[test]
    fn test_recall_term_prefills_without_searching() {
        let mut session = SearchSession::default();
        session.recall_term("Marketing");

        assert_eq!(session.keyword, "Marketing");
        assert!(!session.loading);
        assert!(session.posts.is_empty());
        assert!(session.history.is_empty());
    }
}
