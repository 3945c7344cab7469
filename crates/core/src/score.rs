//! Quality score for a resolved verdict set

use crate::namespace::{self, OK_ITEM};
use crate::verdict::{Verdict, VerdictSet};

/// Best possible score
pub const MAX_SCORE: u8 = 100;

/// Points deducted per severity level
pub const POINTS_PER_LEVEL: u32 = 5;

/// Score in `0..=100`.
///
/// Each verdict outside the ERR namespace costs five points per severity
/// level. Any ERR verdict carrying content means the query could not be
/// handled, which scores 0 outright.
pub fn score(verdicts: &VerdictSet) -> u8 {
    if verdicts.iter().any(is_hard_failure) {
        return 0;
    }

    let penalty: u32 = verdicts
        .iter()
        .filter(|v| v.item != OK_ITEM && !namespace::is_failure_item(&v.item))
        .map(|v| match v.severity.ordinal() {
            Some(level) => level.saturating_mul(POINTS_PER_LEVEL),
            None => {
                tracing::warn!(item = %v.item, severity = %v.severity, "malformed severity, counting as L0");
                0
            }
        })
        .fold(0u32, u32::saturating_add);

    u32::from(MAX_SCORE).saturating_sub(penalty) as u8
}

fn is_hard_failure(verdict: &Verdict) -> bool {
    namespace::is_failure_item(&verdict.item) && !verdict.content.is_empty()
}

/// One star per 20 points, for display
pub fn stars(score: u8) -> String {
    "★".repeat(usize::from(score / 20))
}
