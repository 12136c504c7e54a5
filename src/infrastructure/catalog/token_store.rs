use tokio::sync::RwLock;
use tracing::info;

/// Holds the single catalog bearer credential for the session. Login
/// replaces it, logout clears it; the rest of the system only ever asks
/// whether one is present. How the token is validated or refreshed is the
/// catalog's business, not ours.
pub struct BearerTokenStore {
    token: RwLock<Option<String>>,
}

impl BearerTokenStore {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            token: RwLock::new(initial.filter(|token| !token.trim().is_empty())),
        }
    }

    pub async fn set(&self, token: String) -> bool {
        let token = token.trim().to_string();
        if token.is_empty() {
            return false;
        }
        *self.token.write().await = Some(token);
        info!("auth: bearer token stored");
        true
    }

    pub async fn clear(&self) {
        *self.token.write().await = None;
        info!("auth: bearer token cleared");
    }

    pub async fn current(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }
}
