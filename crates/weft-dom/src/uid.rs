//! Identifier generation
//!
//! Process-unique, human-readable identifiers used as stable DOM hooks.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a process-unique identifier, prefixed by the tag name.
///
/// The identifier is assigned once at node construction and only
/// regenerated on explicit duplication.
pub fn data_id(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    if prefix.is_empty() {
        format!("{n:x}")
    } else {
        format!("{prefix}-{n:x}")
    }
}
