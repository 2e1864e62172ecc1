use crate::services::context::current_context;
use crate::services::executor::Executor;
use crate::services::output::{print_one, render_context};

pub fn handle_context(json: bool, exec: &dyn Executor) -> anyhow::Result<()> {
    let ctx = current_context(exec)?;
    print_one(json, ctx, render_context)
}

pub fn handle_version(json: bool) -> anyhow::Result<()> {
    let version = format!("kyctl v{}", env!("CARGO_PKG_VERSION"));
    print_one(json, version, |v| v.clone())
}
