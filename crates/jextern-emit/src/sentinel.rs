//! Diagnostic sentinels for constructs with no target mapping.
//!
//! A sentinel is a single line of the form `~~~TAG: text`. It is written
//! straight into the output so that a compile of the generated file fails
//! loudly at the exact spot that needs attention.

use std::fmt::Display;

use jextern_core::utils::to_sentinel_tag;

pub const SENTINEL_PREFIX: &str = "~~~";

/// Build a sentinel. `kind` is snake_case and gets upper-cased.
pub fn sentinel(kind: &str, text: impl Display) -> String {
    format!("{SENTINEL_PREFIX}{}: {text}", to_sentinel_tag(kind))
}

/// Whether rendered text carries at least one sentinel.
pub fn contains_sentinel(text: &str) -> bool {
    text.contains(SENTINEL_PREFIX)
}
