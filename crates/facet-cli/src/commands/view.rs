//! View command
//!
//! Usage: facet view <RECORDS.json> [--filter path=value]... [--search term]
//!        [--sort path:desc,...] [--page N] [--page-size N] [--role ROLE]

use crate::registry_builder::{build_selection, load_records, parse_sort, SelectionArgs, CLI_SORT_KEY};
use anyhow::Result;
use clap::Args;
use facet_core::{compute_view, log_op_end, log_op_error, log_op_start, ViewError, ViewState};
use facet_core_types::RequestContext;
use std::time::Instant;

#[derive(Debug, Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Sort expression: path[:asc|desc], later segments break ties
    #[arg(long)]
    pub sort: Option<String>,

    /// 0-based page index
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Records per page
    #[arg(long, default_value_t = 10)]
    pub page_size: usize,
}

/// Execute view command
pub fn execute(args: ViewArgs) -> Result<()> {
    let ctx = RequestContext::new();
    let started = Instant::now();
    log_op_start!(
        "view",
        request_id = %ctx.request_id,
        records = %args.selection.records.display()
    );

    let result = run(&args);
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => log_op_end!("view", duration_ms = duration_ms),
        Err(e) => {
            if let Some(view_err) = e.downcast_ref::<ViewError>() {
                log_op_error!("view", *view_err, duration_ms = duration_ms);
            } else {
                tracing::error!(op = "view", duration_ms, err = %e);
            }
        }
    }
    result
}

fn run(args: &ViewArgs) -> Result<()> {
    let records = load_records(&args.selection.records)?;
    let (mut registry, criteria) = build_selection(&args.selection)?;

    let mut state = ViewState::new()
        .with_page(args.page)
        .with_page_size(args.page_size)
        .with_criteria(criteria);
    if let Some(term) = &args.selection.search {
        state = state.with_search(term.clone());
    }
    if let Some(expr) = &args.sort {
        registry = registry.with_sort(CLI_SORT_KEY, parse_sort(expr)?);
        state = state.with_sort_key(CLI_SORT_KEY);
    }

    let view = compute_view(&records, &state, &registry)?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
