//! Wire shapes of the Kyverno and wgpolicyk8s objects as `kubectl -o json`
//! prints them. Only the fields the CLI reads are modelled; everything else
//! in the documents is ignored by serde.

use serde::{Deserialize, Deserializer};

/// `null` decodes like a missing field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Any `kubectl get <kind> -o json` list response.
#[derive(Debug, Deserialize)]
pub struct ObjectList<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub namespace: String,
}

#[derive(Debug, Deserialize)]
pub struct ClusterPolicy {
    pub metadata: ObjectMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spec: ClusterPolicySpec,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterPolicySpec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub validation_failure_action: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: Vec<RuleSpec>,
}

#[derive(Debug, Deserialize)]
pub struct RuleSpec {
    pub name: String,
}

/// A `PolicyReport` or `ClusterPolicyReport`; both share this shape.
#[derive(Debug, Deserialize)]
pub struct PolicyReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ObjectMeta,
    /// Set on per-resource reports, which omit `resources` in their results.
    #[serde(default)]
    pub scope: Option<ResourceRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<ReportResult>,
}

#[derive(Debug, Deserialize)]
pub struct ReportResult {
    pub policy: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rule: String,
    pub result: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<ResourceRef>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResourceRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub namespace: String,
}
