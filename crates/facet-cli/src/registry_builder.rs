//! Flag-driven registry construction
//!
//! A portal page would supply its filter registry in code; the CLI builds
//! an equivalent one from flags. Filter names are the dot-paths themselves,
//! so `--filter profile.sem=5` binds an equality filter named
//! `profile.sem`. The caller's role is an explicit input consumed here, at
//! composition time: a disallowed flag is rejected before the engine ever
//! runs, and the engine itself never sees the role.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, ValueEnum};
use facet_core::{
    by_value, with_fallback, Comparator, Criteria, Criterion, FieldAccessor, FilterRegistry,
    PredicateKind, Record, SortOrder, ViewError,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Sort key name the CLI registers for a parsed `--sort` expression
pub const CLI_SORT_KEY: &str = "cli";

/// Capability value gating which view configuration a caller may compose
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Student,
    Faculty,
    Hod,
    Admin,
    Director,
}

impl Role {
    /// Students get search-only views of their own data; everyone else
    /// may compose filters.
    pub fn allows_filters(self) -> bool {
        !matches!(self, Role::Student)
    }

    /// Roster-wide aggregation is a coordinator-level capability.
    pub fn allows_counts(self) -> bool {
        matches!(self, Role::Hod | Role::Admin | Role::Director)
    }

    /// Name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Hod => "hod",
            Role::Admin => "admin",
            Role::Director => "director",
        }
    }
}

/// Record selection flags shared by `view` and `counts`
#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Records file: a JSON array of objects
    pub records: PathBuf,

    /// Equality filter, repeatable: --filter dot.path=value
    #[arg(long = "filter", value_name = "PATH=VALUE")]
    pub filters: Vec<String>,

    /// Filter matching records where the path is null or absent
    #[arg(long = "filter-missing", value_name = "PATH")]
    pub filter_missing: Vec<String>,

    /// Filter matching records where the path has a value
    #[arg(long = "filter-present", value_name = "PATH")]
    pub filter_present: Vec<String>,

    /// Case-insensitive search term; requires at least one --search-field
    #[arg(long)]
    pub search: Option<String>,

    /// Searchable field path, repeatable
    #[arg(long = "search-field", value_name = "PATH")]
    pub search_fields: Vec<String>,

    /// Caller role gating which flags may be composed
    #[arg(long, value_enum, default_value_t = Role::Admin)]
    pub role: Role,
}

impl SelectionArgs {
    /// Whether any filter flag was passed
    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty() || !self.filter_missing.is_empty() || !self.filter_present.is_empty()
    }
}

/// Load a JSON array of records from disk
///
/// # Errors
///
/// Returns an error for unreadable files, invalid JSON, or a top-level
/// value that is not an array.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read records file {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("records file {} is not valid JSON", path.display()))?;

    let Value::Array(items) = value else {
        return Err(ViewError::MalformedRecords {
            reason: "top-level JSON value must be an array".to_string(),
        }
        .into());
    };
    Ok(items.into_iter().map(Record::new).collect())
}

/// Build the registry and criteria a page would have wired up in code
///
/// # Errors
///
/// Returns an error for malformed filter flags or flags the role may not
/// compose.
pub fn build_selection(args: &SelectionArgs) -> Result<(FilterRegistry, Criteria)> {
    if args.has_filters() && !args.role.allows_filters() {
        bail!(
            "role '{}' may not compose filters; search is available",
            args.role.name()
        );
    }
    // A term with no fields to probe would silently match nothing
    if args.search.is_some() && args.search_fields.is_empty() {
        bail!("--search requires at least one --search-field");
    }

    let mut registry = FilterRegistry::new();
    let mut criteria = Criteria::new();

    for spec in &args.filters {
        let (path, raw_value) = spec
            .split_once('=')
            .ok_or_else(|| anyhow!("--filter expects PATH=VALUE, got '{}'", spec))?;
        registry = registry.with_filter(path, FieldAccessor::path(path), PredicateKind::Equality);
        criteria.set(path, Criterion::Equals(parse_flag_value(raw_value)));
    }
    for path in &args.filter_missing {
        registry = registry.with_filter(path, FieldAccessor::path(path), PredicateKind::Presence);
        criteria.set(path, Criterion::Missing);
    }
    for path in &args.filter_present {
        registry = registry.with_filter(path, FieldAccessor::path(path), PredicateKind::Presence);
        criteria.set(path, Criterion::Present);
    }

    for path in &args.search_fields {
        registry = registry.with_search_field(FieldAccessor::path(path));
    }

    Ok((registry, criteria))
}

/// Parse a `--sort` expression into a comparator
///
/// Grammar: `path[:asc|desc][,path[:asc|desc]]...` - later segments are
/// fallbacks deciding earlier segments' ties.
///
/// # Errors
///
/// Returns an error for an empty expression or an unknown direction.
pub fn parse_sort(expr: &str) -> Result<Comparator> {
    let mut comparator: Option<Comparator> = None;
    for segment in expr.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            bail!("--sort contains an empty segment: '{}'", expr);
        }
        let (path, order) = match segment.split_once(':') {
            Some((path, "asc")) => (path, SortOrder::Asc),
            Some((path, "desc")) => (path, SortOrder::Desc),
            Some((_, dir)) => bail!("--sort direction must be asc or desc, got '{}'", dir),
            None => (segment, SortOrder::Asc),
        };
        let next = by_value(FieldAccessor::path(path), order);
        comparator = Some(match comparator {
            Some(prev) => with_fallback(prev, next),
            None => next,
        });
    }
    comparator.ok_or_else(|| anyhow!("--sort expression is empty"))
}

/// Interpret a flag value as JSON when possible, else as a plain string
///
/// `--filter sem=5` compares against the number 5; `--filter dept=cse`
/// against the string "cse".
fn parse_flag_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
