//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `inspect.rs` — `policies` and `reports`.
//! - `cluster.rs` — `context` and `version`.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate cluster queries to `services/*`.
//! - Keep behavior and output schema stable.

pub mod cluster;
pub mod inspect;

use crate::cli::{Cli, Commands};
use crate::services::executor::Executor;

pub fn handle_command(cli: &Cli, exec: &dyn Executor) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Version => cluster::handle_version(cli.json),
        Commands::Context => cluster::handle_context(cli.json, exec),
        Commands::Policies(args) => inspect::handle_policies(cli.json, args, exec),
        Commands::Reports(args) => inspect::handle_reports(cli.json, args, exec),
    }
}
