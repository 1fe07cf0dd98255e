//! Security events. Emitted at `warn` with a stable `event` field so they
//! can be filtered out of the request log.

use tracing::warn;

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A login attempt was refused. `reason` is for operators only.
pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

/// A presented bearer token was refused.
pub fn token_rejected(reason: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        reason,
        "Bearer token rejected"
    );
}
