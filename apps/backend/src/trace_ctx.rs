//! Task-local trace id for the request currently being served.
//!
//! `RequestTrace` establishes the scope; error rendering reads it so
//! problem bodies and the `x-trace-id` header agree.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current task, or `"unknown"` outside a request.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run `future` with `trace_id` as the task-local trace id.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
