//! Filter validation helpers

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("address regex is valid"));

/// Check that an optional filter field holds a 20-byte hex address
pub(super) fn check_address(field: &str, value: &Option<String>) -> Result<()> {
    match value {
        Some(v) if !ADDRESS_RE.is_match(v) => Err(Error::validation(format!(
            "{field} must be a 20-byte hex address, got '{v}'"
        ))),
        _ => Ok(()),
    }
}

/// Check that an optional index id is a decimal integer string
pub(super) fn check_index_id(field: &str, value: &Option<String>) -> Result<()> {
    match value {
        Some(v) if v.parse::<u64>().is_err() => Err(Error::validation(format!(
            "{field} must be a decimal integer string, got '{v}'"
        ))),
        _ => Ok(()),
    }
}

/// Check that an optional epoch-second bound is non-negative
pub(super) fn check_timestamp(field: &str, value: Option<i64>) -> Result<()> {
    match value {
        Some(v) if v < 0 => Err(Error::validation(format!(
            "{field} must be a non-negative epoch second, got {v}"
        ))),
        _ => Ok(()),
    }
}
