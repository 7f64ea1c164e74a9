//! Value semantics shared by predicates, search, and comparators
//!
//! The engine works over untyped JSON values, so the three coercions every
//! operation relies on live here:
//! - a total, deterministic ordering over values (for sorting and equality)
//! - the documented string coercion used by substring search
//! - datetime parsing for date-range predicates and date-keyed comparators

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::cmp::Ordering;

/// Rank used to order values of different JSON types
///
/// null < bool < number < string < array < object. Cross-type comparisons
/// never panic and never depend on insertion order.
fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total, deterministic ordering over JSON values
///
/// Same-type values compare naturally (numbers via f64, strings
/// lexicographically, arrays element-wise); values of different types
/// compare by type rank. Objects compare by their sorted key set, then by
/// per-key values, which is enough to make the order total and stable.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }

    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let xf = x.as_f64().unwrap_or(f64::NAN);
            let yf = y.as_f64().unwrap_or(f64::NAN);
            xf.partial_cmp(&yf).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => {
            for (xe, ye) in x.iter().zip(y.iter()) {
                let ord = compare_values(xe, ye);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        (Value::Object(x), Value::Object(y)) => {
            let mut xk: Vec<&String> = x.keys().collect();
            let mut yk: Vec<&String> = y.keys().collect();
            xk.sort();
            yk.sort();
            let keys = xk.cmp(&yk);
            if keys != Ordering::Equal {
                return keys;
            }
            for k in xk {
                let ord = compare_values(&x[k], &y[k]);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        }
        // Unreachable: ranks already matched
        _ => Ordering::Equal,
    }
}

/// Documented string coercion for substring search
///
/// Strings pass through unchanged; numbers use their decimal display form;
/// booleans render as `true`/`false`; null and containers coerce to the
/// empty string, which never matches a non-empty term.
pub fn search_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Parse a value as a UTC datetime
///
/// Accepts RFC 3339 strings and plain `YYYY-MM-DD` dates (interpreted as
/// midnight UTC). Anything else is `None` - unparseable dates are data,
/// not errors.
pub fn parse_datetime(v: &Value) -> Option<DateTime<Utc>> {
    let s = v.as_str()?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(DateTime::from_naive_utc_and_offset(
        date.and_hms_opt(0, 0, 0)?,
        Utc,
    ))
}
