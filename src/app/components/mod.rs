pub mod button;
pub mod card;
pub mod post_card;
pub mod process_panel;
pub mod results_list;
pub mod search_panel;
pub mod sign_in;
pub mod stats_panel;
pub mod theme_toggle;
pub mod toast_host;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use post_card::PostCard;
pub use process_panel::ProcessPanel;
pub use results_list::ResultsList;
pub use search_panel::SearchPanel;
pub use sign_in::SignInCard;
pub use stats_panel::StatsPanel;
pub use theme_toggle::ThemeToggle;
pub use toast_host::ToastHost;
