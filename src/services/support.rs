use tracing::warn;

use crate::utils::{ClientError, Result};

/// Log a failed service call and hand the error back unchanged
pub(crate) fn log_failure(operation: &str, id: Option<&str>, err: ClientError) -> ClientError {
    match id {
        Some(id) => warn!(operation, id, error = %err, "Service call failed"),
        None => warn!(operation, error = %err, "Service call failed"),
    }
    err
}

/// `<parent>/<id>/<child>` for nested resources
pub(crate) fn nested_endpoint(parent: &str, id: &str, child: &str) -> Result<String> {
    if id.is_empty() || id.contains(['/', '?', '#']) {
        return Err(ClientError::Query(format!("Invalid {} id '{}'", parent, id)));
    }
    Ok(format!("{}/{}/{}", parent, id, child))
}
