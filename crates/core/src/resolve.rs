//! Conflict resolution between rules that report the same problem
//!
//! Different analysis layers can flag one underlying issue twice (e.g. a
//! heuristic and an index advisory). A [`ConflictTable`] lists, for each
//! subsumed item, the items that make it redundant.

use crate::catalog::RuleCatalog;
use crate::verdict::VerdictSet;
use std::collections::{BTreeMap, BTreeSet};

/// Subsumed item → items that supersede it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictTable {
    superseded_by: BTreeMap<String, BTreeSet<String>>,
}

impl ConflictTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table built from every rule's `superseded_by` declaration
    pub fn from_catalog(catalog: &RuleCatalog) -> Self {
        let mut table = Self::new();
        for rule in catalog.list_all() {
            for winner in &rule.superseded_by {
                table.add(&rule.item, winner);
            }
        }
        table
    }

    /// Declare that `winner` makes `subsumed` redundant
    pub fn add(&mut self, subsumed: &str, winner: &str) -> &mut Self {
        if subsumed != winner {
            self.superseded_by
                .entry(subsumed.to_string())
                .or_default()
                .insert(winner.to_string());
        }
        self
    }

    /// Add every pair from a `subsumed → [winners]` map
    pub fn extend_from<'a, I, W>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a String, W)>,
        W: IntoIterator<Item = &'a String>,
    {
        for (subsumed, winners) in pairs {
            for winner in winners {
                self.add(subsumed, winner);
            }
        }
        self
    }

    pub fn superseders(&self, item: &str) -> Option<&BTreeSet<String>> {
        self.superseded_by.get(item)
    }

    pub fn is_empty(&self) -> bool {
        self.superseded_by.is_empty()
    }

    /// Remove every verdict that has a superseder in `verdicts`.
    ///
    /// Presence is judged against the input set, so the outcome does not
    /// depend on removal order and resolving twice changes nothing.
    pub fn resolve(&self, verdicts: VerdictSet) -> VerdictSet {
        if self.is_empty() {
            return verdicts;
        }
        let present: BTreeSet<String> = verdicts.items().map(str::to_string).collect();
        let mut out = verdicts;
        out.retain(|item, _| {
            let superseded = self
                .superseders(item)
                .is_some_and(|winners| winners.iter().any(|w| present.contains(w)));
            if superseded {
                tracing::debug!(item, "verdict superseded");
            }
            !superseded
        });
        out
    }
}
