//! Audit trail for money-moving operations
//!
//! Events go to the `audit` tracing target; the terminal routes that
//! target to its own permanent log file.

/// Record a business operation
///
/// ```ignore
/// audit_log!("cajero1", "payment", "order:42", "efectivo S/ 35.50");
/// ```
macro_rules! audit_log {
    ($user:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            user = %$user,
            action = $action,
            resource = %$resource,
            timestamp = %chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($user:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            user = %$user,
            action = $action,
            resource = %$resource,
            details = %$details,
            timestamp = %chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}
