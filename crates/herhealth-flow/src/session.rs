/// Source of the signed-in user's identity. `None` means nobody is signed
/// in, and completed runs are then not persisted.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<String>;
}

/// A session whose user is fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user_id: Option<String>,
}

impl StaticSession {
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<String> {
        self.user_id.clone()
    }
}
