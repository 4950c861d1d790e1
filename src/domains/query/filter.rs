//! Target filtering used to decide whether a request is worth sending.

use super::types::Query;

/// Iterate over the targets that name a profile type.
pub fn valid_targets(targets: &[Query]) -> impl Iterator<Item = &Query> {
    targets.iter().filter(|t| t.is_configured())
}

/// Whether at least one target names a profile type.
pub fn has_valid_target(targets: &[Query]) -> bool {
    valid_targets(targets).next().is_some()
}
