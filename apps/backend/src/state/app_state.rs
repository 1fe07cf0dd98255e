use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::auth::clock::Clock;
use crate::auth::token::TokenCodec;
use crate::services::users::{InMemoryUserDirectory, UserDirectory};

/// Application state shared read-only by every worker
#[derive(Clone)]
pub struct AppState {
    pub security: SecurityConfig,
    /// Codec built from `security`; issues and validates bearer tokens
    pub tokens: TokenCodec,
    pub users: Arc<dyn UserDirectory>,
}

impl AppState {
    pub fn new(security: SecurityConfig, users: Arc<dyn UserDirectory>) -> Self {
        let tokens = TokenCodec::new(&security);
        Self {
            security,
            tokens,
            users,
        }
    }

    /// Replace the codec's clock. Tests use this to move past expiry.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.tokens = TokenCodec::with_clock(&self.security, clock);
        self
    }

    /// State backed by an empty in-memory user directory
    pub fn in_memory(security: SecurityConfig) -> Self {
        Self::new(security, Arc::new(InMemoryUserDirectory::default()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("security", &self.security)
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}
