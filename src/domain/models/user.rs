use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub display_name: String,
    pub email: String,
}

impl AuthUser {
    /// Local stand-in identity used by the simulated sign-in flow.
    pub fn demo() -> Self {
        Self {
            display_name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
        }
    }
}
