// Domain services (business logic)
// Pure Rust, fully testable without the UI layer

pub mod post_generator;
pub mod search_session;

pub use post_generator::generate_posts;
pub use search_session::{
    SearchSession, FETCH_DELAY_MS, PROGRESS_CEILING, PROGRESS_RESET_DELAY_MS, PROGRESS_STEP,
    PROGRESS_TICK_MS,
};
