use crate::cli::{PoliciesArgs, ReportsArgs};
use crate::services::executor::Executor;
use crate::services::output::{
    print_one, render_policy, render_policy_entries, render_policy_list, render_report_entries,
    render_summary,
};
use crate::services::policies::PolicyRetriever;
use crate::services::reports::{filter_by_status, summarize, ReportRetriever};

pub fn handle_policies(json: bool, args: &PoliciesArgs, exec: &dyn Executor) -> anyhow::Result<()> {
    let retriever = PolicyRetriever::new(exec);
    match &args.policy {
        Some(name) => {
            let policy = retriever.get_policy(name)?;
            print_one(json, policy, render_policy)
        }
        None => {
            let policies = retriever.list_all_policies()?;
            print_one(json, policies, |p| render_policy_list(p))
        }
    }
}

pub fn handle_reports(json: bool, args: &ReportsArgs, exec: &dyn Executor) -> anyhow::Result<()> {
    let retriever = ReportRetriever::new(exec);
    let filter = args.filter.as_deref().unwrap_or("");
    match &args.target.policy {
        Some(name) => {
            let entries = filter_by_status(retriever.get_entries_for_policy(name)?, filter);
            print_one(json, entries, |e| render_policy_entries(name, e))
        }
        None => {
            let entries = retriever.list_all_reports(filter)?;
            if args.summary {
                print_one(json, summarize(&entries), render_summary)
            } else {
                print_one(json, entries, |e| render_report_entries(e))
            }
        }
    }
}
