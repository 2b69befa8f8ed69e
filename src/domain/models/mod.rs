// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod history;
pub mod post;
pub mod user;

pub use history::{SearchHistory, MAX_RECENT_SEARCHES};
pub use post::{Engagement, Post};
pub use user::AuthUser;
