use crate::domain::models::{ClusterContext, UNKNOWN};
use crate::services::errors::{QueryError, AUTH_HINT};
use crate::services::executor::Executor;

/// Current kubeconfig context plus the cluster it points at. The cluster
/// name degrades to `unknown` instead of failing.
pub fn current_context(executor: &dyn Executor) -> Result<ClusterContext, QueryError> {
    let raw = executor
        .run(&["config", "current-context"])
        .map_err(|e| QueryError::retrieval_with_hint("current context", AUTH_HINT, e))?;
    let context = String::from_utf8_lossy(&raw).trim().to_string();

    let cluster = match executor.run(&[
        "config",
        "view",
        "--minify",
        "-o",
        "jsonpath={.clusters[0].name}",
    ]) {
        Ok(out) => {
            let name = String::from_utf8_lossy(&out).trim().to_string();
            if name.is_empty() {
                UNKNOWN.to_string()
            } else {
                name
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not resolve cluster name");
            UNKNOWN.to_string()
        }
    };

    Ok(ClusterContext { context, cluster })
}
