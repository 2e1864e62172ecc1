use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};

pub const DEFAULT_KUBECTL: &str = "kubectl";

#[derive(Parser, Debug)]
#[command(
    name = "kyctl",
    version,
    about = "Check Kyverno policies and policy reports in a Kubernetes cluster"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "KYCTL_KUBECTL",
        default_value = DEFAULT_KUBECTL,
        help = "kubectl binary used to query the cluster"
    )]
    pub kubectl: String,
    #[arg(long, global = true, help = "Path to the kubeconfig file to use")]
    pub kubeconfig: Option<String>,
    #[arg(long, global = true, help = "Kubeconfig context to use")]
    pub context: Option<String>,
    #[arg(short, long, global = true, help = "Log cluster queries to stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version number of kyctl
    Version,
    /// Check the current Kubernetes context
    Context,
    /// List all Kyverno policies or show one
    Policies(PoliciesArgs),
    /// View policy reports for all policies or a specific policy
    Reports(ReportsArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PoliciesArgs {
    #[arg(short, long, help = "List all policies")]
    pub all: bool,
    #[arg(
        short,
        long,
        value_name = "NAME",
        value_parser = NonEmptyStringValueParser::new(),
        help = "Get details of a specific policy"
    )]
    pub policy: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReportsArgs {
    #[command(flatten)]
    pub target: ReportTarget,
    #[arg(
        short,
        long,
        value_name = "STATUS",
        help = "Filter reports by status (pass/fail/warn/error/skip)"
    )]
    pub filter: Option<String>,
    #[arg(long, requires = "all", help = "Print status counts instead of entries")]
    pub summary: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ReportTarget {
    #[arg(short, long, help = "Show all policy reports")]
    pub all: bool,
    #[arg(
        short,
        long,
        value_name = "NAME",
        value_parser = NonEmptyStringValueParser::new(),
        help = "Show report for a specific policy"
    )]
    pub policy: Option<String>,
}
