use dioxus::prelude::*;

use crate::domain::models::AuthUser;
use crate::shared::logging;

/// Identity provider boundary.
///
/// The app only observes "current user or none" plus imperative
/// sign-in/sign-out. This local implementation installs a demo identity;
/// a hosted provider can replace it behind the same surface.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn sign_in(&mut self) {
        self.user.set(Some(AuthUser::demo()));
        logging::log_auth_change(true);
    }

    pub fn sign_out(&mut self) {
        self.user.set(None);
        logging::log_auth_change(false);
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }
}

/// Hook subscribing to the current authenticated user.
pub fn use_auth() -> AuthState {
    AuthState {
        user: use_signal(|| None),
    }
}
