use crate::domain::models::{SimplePolicy, SimpleRule};
use crate::domain::resources::{ClusterPolicy, ObjectList};
use crate::services::errors::{QueryError, KYVERNO_HINT};
use crate::services::executor::Executor;

pub struct PolicyRetriever<'a> {
    executor: &'a dyn Executor,
}

impl<'a> PolicyRetriever<'a> {
    pub fn new(executor: &'a dyn Executor) -> Self {
        Self { executor }
    }

    pub fn list_all_policies(&self) -> Result<Vec<SimplePolicy>, QueryError> {
        let raw = self
            .executor
            .run(&["get", "clusterpolicies", "-o", "json"])
            .map_err(|e| QueryError::retrieval_with_hint("cluster policies", KYVERNO_HINT, e))?;
        let list: ObjectList<ClusterPolicy> = serde_json::from_slice(&raw)
            .map_err(|e| QueryError::parse("cluster policy list", e))?;
        tracing::debug!(count = list.items.len(), "parsed cluster policies");
        Ok(list.items.into_iter().map(simplify).collect())
    }

    /// `name` must be non-empty; callers validate it.
    pub fn get_policy(&self, name: &str) -> Result<SimplePolicy, QueryError> {
        let raw = self
            .executor
            .run(&["get", "clusterpolicy", name, "-o", "json"])
            .map_err(|e| QueryError::retrieval(format!("cluster policy {}", name), e))?;
        let policy: ClusterPolicy = serde_json::from_slice(&raw)
            .map_err(|e| QueryError::parse(format!("cluster policy {}", name), e))?;
        Ok(simplify(policy))
    }
}

fn simplify(p: ClusterPolicy) -> SimplePolicy {
    SimplePolicy {
        name: p.metadata.name,
        validation_failure_action: p.spec.validation_failure_action,
        rules: p
            .spec
            .rules
            .into_iter()
            .map(|r| SimpleRule { name: r.name })
            .collect(),
    }
}
