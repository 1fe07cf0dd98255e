//! Token and state helpers for tests

use std::sync::Arc;

use ggnet_backend::auth::clock::FixedClock;
use ggnet_backend::state::app_state::AppState;
use ggnet_backend::state::security_config::{SecurityConfig, SigningScheme};

/// 2023-11-14T22:13:20Z
pub const TEST_NOW: i64 = 1_700_000_000;

pub fn test_security(scheme: SigningScheme) -> SecurityConfig {
    SecurityConfig::new("test_secret_key_for_testing_purposes_only").with_scheme(scheme)
}

/// In-memory state whose token clock is pinned at [`TEST_NOW`].
pub fn pinned_state(scheme: SigningScheme) -> (AppState, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::at(TEST_NOW));
    let state = AppState::in_memory(test_security(scheme)).with_clock(clock.clone());
    (state, clock)
}

/// Full `Authorization` header value for `token`
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
