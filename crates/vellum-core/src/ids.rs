//! ID prefix constants and formatting helpers.
//!
//! IDs are `{prefix}-{8 hex chars}`, generated by the database layer.

pub const PREFIX_CONTRACT: &str = "ctr";

/// Check whether an ID carries the expected prefix.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('-'))
}
