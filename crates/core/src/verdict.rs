//! Verdict types that bridge rule checks to scoring and report renderers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Severity level of a rule, written `L0`..`L9` (higher is worse)
///
/// Kept as the original string so malformed values coming from metadata
/// survive to the renderer; [`Severity::ordinal`] interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(String);

impl Severity {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Severity for a numeric level, e.g. `Severity::level(4)` is `L4`
    pub fn level(ordinal: u32) -> Self {
        Self(format!("L{}", ordinal))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric level, or `None` when the string is not `L<digits>`
    pub fn ordinal(&self) -> Option<u32> {
        let digits = self.0.strip_prefix('L')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of one rule's check against one audit subject
///
/// Field names serialize in the `Item`/`Severity`/... form expected by tools
/// consuming the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Verdict {
    /// Rule identifier (e.g. "COL.001")
    pub item: String,

    pub severity: Severity,

    /// One-line description
    pub summary: String,

    /// Explanation, possibly specialized to the offending query
    pub content: String,

    /// Example SQL that triggers the rule
    pub case: String,

    /// Character offset the verdict applies to; 0 means the whole statement
    pub position: usize,
}

impl Verdict {
    /// Copy of this verdict with `content` replaced
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}

/// De-duplicated verdicts for one subject, keyed by item
///
/// Iteration order is unspecified; renderers sort explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerdictSet {
    verdicts: HashMap<String, Verdict>,
}

impl VerdictSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a verdict under its own item. A verdict already stored under
    /// the same item is replaced.
    pub fn insert(&mut self, verdict: Verdict) -> Option<Verdict> {
        self.verdicts.insert(verdict.item.clone(), verdict)
    }

    /// Merge another set into this one (the other set wins on collisions)
    pub fn merge(&mut self, other: VerdictSet) {
        self.verdicts.extend(other.verdicts);
    }

    pub fn get(&self, item: &str) -> Option<&Verdict> {
        self.verdicts.get(item)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.verdicts.contains_key(item)
    }

    pub fn remove(&mut self, item: &str) -> Option<Verdict> {
        self.verdicts.remove(item)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str, &Verdict) -> bool) {
        self.verdicts.retain(|item, verdict| keep(item, verdict));
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.verdicts.keys().map(String::as_str)
    }

    /// Verdicts ordered by ascending item
    pub fn sorted(&self) -> Vec<&Verdict> {
        let mut out: Vec<&Verdict> = self.verdicts.values().collect();
        out.sort_by(|a, b| a.item.cmp(&b.item));
        out
    }
}

impl FromIterator<Verdict> for VerdictSet {
    fn from_iter<I: IntoIterator<Item = Verdict>>(iter: I) -> Self {
        let mut set = VerdictSet::new();
        for verdict in iter {
            set.insert(verdict);
        }
        set
    }
}

impl Extend<Verdict> for VerdictSet {
    fn extend<I: IntoIterator<Item = Verdict>>(&mut self, iter: I) {
        for verdict in iter {
            self.insert(verdict);
        }
    }
}

impl IntoIterator for VerdictSet {
    type Item = Verdict;
    type IntoIter = std::collections::hash_map::IntoValues<String, Verdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.verdicts.into_values()
    }
}
