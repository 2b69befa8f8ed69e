//! Search session hook
//!
//! Owns the [`SearchSession`] signal and the two scheduled tasks of a
//! running search: a repeating progress ticker and a one-shot completion
//! delay. The completion path cancels the ticker before anything else runs,
//! so the periodic task cannot leak past the fetch.

use dioxus::prelude::*;

use crate::domain::services::{
    SearchSession, FETCH_DELAY_MS, PROGRESS_RESET_DELAY_MS, PROGRESS_TICK_MS,
};
use crate::shared::errors::AppError;
use crate::shared::hooks::ToastState;
use crate::shared::logging;
use crate::shared::utils::sleep_ms;

#[derive(Clone, Copy)]
pub struct SearchState {
    pub session: Signal<SearchSession>,
}

impl SearchState {
    /// Submit the current keyword.
    ///
    /// An empty keyword raises one error toast and mutates nothing. A
    /// submission while a search is already loading is ignored outright,
    /// which keeps a second ticker from ever being scheduled.
    pub fn submit(&self, mut toasts: ToastState) {
        if self.session.peek().loading {
            let keyword = self.session.peek().keyword.clone();
            logging::log_search_in_flight(&keyword);
            return;
        }

        let mut session = self.session;
        let begun = session.write().begin_search();
        let keyword = match begun {
            Ok(keyword) => keyword,
            // Session-level re-entry refusal; the peek guard above already
            // covers the common path, so this stays silent too
            Err(AppError::SearchInFlight) => return,
            Err(err) => {
                logging::log_search_rejected(&err.to_string());
                toasts.error(err.to_string());
                return;
            }
        };
        logging::log_search_start(&keyword);

        let mut session = self.session;
        let ticker = spawn(async move {
            loop {
                sleep_ms(PROGRESS_TICK_MS).await;
                session.write().tick_progress();
            }
        });

        let mut session = self.session;
        spawn(async move {
            // Simulated network latency
            sleep_ms(FETCH_DELAY_MS).await;

            // Must happen before the results land, error path included
            ticker.cancel();

            let count = session.write().complete_search(&keyword);
            logging::log_search_completed(&keyword, count);
            toasts.success(format!("Found {count} posts for \"{keyword}\""));

            session.write().finish_search();
            sleep_ms(PROGRESS_RESET_DELAY_MS).await;
            session.write().reset_progress();
        });
    }

    /// Update the keyword input field.
    pub fn set_keyword(&self, value: String) {
        let mut session = self.session;
        session.write().keyword = value;
    }

    /// Prefill the keyword from a recent-search chip.
    pub fn recall_term(&self, term: &str) {
        let mut session = self.session;
        session.write().recall_term(term);
    }
}

/// Hook owning the per-page search session.
pub fn use_search() -> SearchState {
    SearchState {
        session: use_signal(SearchSession::default),
    }
}
