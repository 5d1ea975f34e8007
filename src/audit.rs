use serde_json::Value;

/// Records a write on the `audit` tracing target.
pub fn log_audit(action: &str, resource: &str, metadata: Value) {
    tracing::info!(
        target: "audit",
        action,
        resource,
        metadata = %metadata,
        "audit event"
    );
}
