use serde::Serialize;

pub const UNKNOWN: &str = "unknown";

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SimplePolicy {
    pub name: String,
    /// Copied verbatim from the cluster (`enforce`, `Audit`, ...).
    pub validation_failure_action: String,
    pub rules: Vec<SimpleRule>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SimpleRule {
    pub name: String,
}

/// One policy result, flattened out of a PolicyReport or ClusterPolicyReport.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PolicyReportEntry {
    pub policy: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rule: String,
    /// Empty for cluster-scoped resources.
    pub namespace: String,
    /// `Kind/Name`, `namespace/Kind/Name`, or `unknown`.
    pub resource: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Default, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub pass: usize,
    pub fail: usize,
    pub warn: usize,
    pub error: usize,
    pub skip: usize,
    pub other: usize,
    pub total: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ClusterContext {
    pub context: String,
    pub cluster: String,
}
