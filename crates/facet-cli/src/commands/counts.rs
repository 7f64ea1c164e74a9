//! Counts command
//!
//! Usage: facet counts <RECORDS.json> --by path [--filter path=value]...

use crate::registry_builder::{build_selection, load_records, SelectionArgs};
use anyhow::{bail, Result};
use clap::Args;
use facet_core::{grouped_counts, log_op_end, log_op_error, log_op_start, FieldAccessor, ViewError};
use facet_core_types::RequestContext;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct CountsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Grouping key path, e.g. mentor.name
    #[arg(long)]
    pub by: String,
}

/// Execute counts command
pub fn execute(args: CountsArgs) -> Result<()> {
    let ctx = RequestContext::new();
    let started = Instant::now();
    log_op_start!(
        "counts",
        request_id = %ctx.request_id,
        records = %args.selection.records.display(),
        by = %args.by
    );

    let result = run(&args);
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => log_op_end!("counts", duration_ms = duration_ms),
        Err(e) => {
            if let Some(view_err) = e.downcast_ref::<ViewError>() {
                log_op_error!("counts", *view_err, duration_ms = duration_ms);
            } else {
                tracing::error!(op = "counts", duration_ms, err = %e);
            }
        }
    }
    result
}

fn run(args: &CountsArgs) -> Result<()> {
    if !args.selection.role.allows_counts() {
        bail!(
            "role '{}' may not aggregate across the roster",
            args.selection.role.name()
        );
    }

    let records = load_records(&args.selection.records)?;
    let (registry, criteria) = build_selection(&args.selection)?;
    let search = args.selection.search.as_deref().unwrap_or("");

    let groups = grouped_counts(
        &records,
        &criteria,
        search,
        &registry,
        &FieldAccessor::path(&args.by),
    )?;
    println!("{}", serde_json::to_string_pretty(&groups)?);
    Ok(())
}
