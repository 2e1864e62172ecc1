use crate::domain::models::{
    ClusterContext, JsonOut, PolicyReportEntry, ReportSummary, SimplePolicy,
};
use serde::Serialize;

const RULE: &str = "---------------------------";

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// Prints `data` as a JSON envelope, or the text rendering otherwise.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(data)
    } else {
        println!("{}", render(&data));
        Ok(())
    }
}

fn heading(title: String, width: usize) -> Vec<String> {
    vec![title, "=".repeat(width)]
}

pub fn render_policy_list(policies: &[SimplePolicy]) -> String {
    let mut lines = heading("Available Kyverno Policies:".to_string(), 27);
    for p in policies {
        lines.push(format!("Name: {}", p.name));
        lines.push(format!(
            "Validation Failure Action: {}",
            p.validation_failure_action
        ));
        lines.push(RULE.to_string());
    }
    lines.join("\n")
}

pub fn render_policy(p: &SimplePolicy) -> String {
    let mut lines = heading(format!("Policy Details for: {}", p.name), 29);
    lines.push(format!(
        "Validation Failure Action: {}",
        p.validation_failure_action
    ));
    lines.push("Rules:".to_string());
    lines.extend(p.rules.iter().map(|r| format!("- {}", r.name)));
    lines.join("\n")
}

fn entry_lines(lines: &mut Vec<String>, e: &PolicyReportEntry) {
    lines.push(format!("Resource: {}", e.resource));
    lines.push(format!("Status: {}", e.status));
    if !e.message.is_empty() {
        lines.push(format!("Message: {}", e.message));
    }
    lines.push(RULE.to_string());
}

pub fn render_report_entries(entries: &[PolicyReportEntry]) -> String {
    let mut lines = heading("Policy Reports:".to_string(), 15);
    for e in entries {
        lines.push(format!("Policy: {}", e.policy));
        entry_lines(&mut lines, e);
    }
    lines.join("\n")
}

pub fn render_policy_entries(policy: &str, entries: &[PolicyReportEntry]) -> String {
    let mut lines = heading(format!("Resources affected by policy: {}", policy), 37);
    for e in entries {
        entry_lines(&mut lines, e);
    }
    lines.join("\n")
}

pub fn render_summary(s: &ReportSummary) -> String {
    let mut lines = heading("Policy Report Summary:".to_string(), 22);
    for (label, n) in [
        ("pass", s.pass),
        ("fail", s.fail),
        ("warn", s.warn),
        ("error", s.error),
        ("skip", s.skip),
        ("other", s.other),
        ("total", s.total),
    ] {
        lines.push(format!("{}\t{}", label, n));
    }
    lines.join("\n")
}

pub fn render_context(c: &ClusterContext) -> String {
    format!(
        "Current context: {}\nCluster name: {}\nYou're connected to a Kubernetes cluster",
        c.context, c.cluster
    )
}
