use std::env;

/// Identity for the active session, passed explicitly to the fetch client
/// rather than looked up from ambient storage.
///
/// The user id may be empty or unknown. A request is still attempted with it;
/// the service's rejection then surfaces as an ordinary fetch failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    user_id: String,
}

impl SessionContext {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    /// Reads `PATHWAY_USER_ID`; missing or blank yields an empty id.
    #[must_use]
    pub fn from_env() -> Self {
        let user_id = env::var("PATHWAY_USER_ID").unwrap_or_default();
        Self {
            user_id: user_id.trim().to_string(),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
