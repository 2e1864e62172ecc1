use crate::domain::models::{PolicyReportEntry, ReportSummary, UNKNOWN};
use crate::domain::resources::{ObjectList, PolicyReport, ResourceRef};
use crate::services::errors::{QueryError, REPORT_CRD_HINT};
use crate::services::executor::Executor;

const REPORT_KINDS: &str = "policyreports,clusterpolicyreports";

pub struct ReportRetriever<'a> {
    executor: &'a dyn Executor,
}

impl<'a> ReportRetriever<'a> {
    pub fn new(executor: &'a dyn Executor) -> Self {
        Self { executor }
    }

    /// Every result of every PolicyReport and ClusterPolicyReport, in
    /// document order then result order. A non-empty `filter` keeps only
    /// entries whose status matches it case-insensitively.
    pub fn list_all_reports(&self, filter: &str) -> Result<Vec<PolicyReportEntry>, QueryError> {
        let raw = self
            .executor
            .run(&["get", REPORT_KINDS, "--all-namespaces", "-o", "json"])
            .map_err(|e| QueryError::retrieval_with_hint("policy reports", REPORT_CRD_HINT, e))?;
        let list: ObjectList<PolicyReport> = serde_json::from_slice(&raw)
            .map_err(|e| QueryError::parse("policy report list", e))?;

        let entries = flatten_reports(list.items);
        tracing::debug!(count = entries.len(), "flattened policy report results");
        Ok(filter_by_status(entries, filter))
    }

    /// All unfiltered entries produced by `policy_name` (exact match).
    pub fn get_entries_for_policy(
        &self,
        policy_name: &str,
    ) -> Result<Vec<PolicyReportEntry>, QueryError> {
        Ok(self
            .list_all_reports("")?
            .into_iter()
            .filter(|e| e.policy == policy_name)
            .collect())
    }
}

pub fn flatten_reports(reports: Vec<PolicyReport>) -> Vec<PolicyReportEntry> {
    let mut out = Vec::new();
    for report in reports {
        for r in report.results {
            // First resource wins; per-resource reports carry it in `scope`.
            let subject = r.resources.first().or(report.scope.as_ref());
            let (namespace, resource) = match subject {
                Some(res) => {
                    let ns = if res.namespace.is_empty() {
                        report.metadata.namespace.clone()
                    } else {
                        res.namespace.clone()
                    };
                    let id = resource_id(&ns, res);
                    (ns, id)
                }
                None => (report.metadata.namespace.clone(), UNKNOWN.to_string()),
            };
            out.push(PolicyReportEntry {
                policy: r.policy,
                rule: r.rule,
                namespace,
                resource,
                status: r.result,
                message: r.message,
            });
        }
    }
    out
}

fn resource_id(namespace: &str, res: &ResourceRef) -> String {
    if namespace.is_empty() {
        format!("{}/{}", res.kind, res.name)
    } else {
        format!("{}/{}/{}", namespace, res.kind, res.name)
    }
}

pub fn filter_by_status(entries: Vec<PolicyReportEntry>, filter: &str) -> Vec<PolicyReportEntry> {
    if filter.is_empty() {
        return entries;
    }
    entries
        .into_iter()
        .filter(|e| e.status.eq_ignore_ascii_case(filter))
        .collect()
}

pub fn summarize(entries: &[PolicyReportEntry]) -> ReportSummary {
    let mut s = ReportSummary {
        total: entries.len(),
        ..ReportSummary::default()
    };
    for e in entries {
        match e.status.to_ascii_lowercase().as_str() {
            "pass" => s.pass += 1,
            "fail" => s.fail += 1,
            "warn" => s.warn += 1,
            "error" => s.error += 1,
            "skip" => s.skip += 1,
            _ => s.other += 1,
        }
    }
    s
}
