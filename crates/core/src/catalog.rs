//! Rule catalog - immutable registry of rule metadata and their checks
//!
//! Metadata is plain serializable data. The executable side lives in a
//! [`CheckRegistry`] keyed by [`CheckId`]; building a [`RuleCatalog`] binds
//! every rule to its check and refuses to produce a partial catalog.

use crate::namespace::{self, OK_ITEM};
use crate::subject::AuditSubject;
use crate::verdict::{Severity, Verdict};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

/// Name of an executable check in a [`CheckRegistry`]
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckId(String);

impl CheckId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static description of one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleMetadata {
    /// Rule identifier (`NNN.DDD` or `OK`)
    pub item: String,

    pub severity: Severity,

    pub summary: String,

    pub content: String,

    /// Example SQL that triggers the rule
    pub case: String,

    pub position: usize,

    /// Check that evaluates this rule; never exported
    #[serde(skip)]
    pub check: CheckId,

    /// Items whose presence makes this rule's verdict redundant
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub superseded_by: Vec<String>,
}

impl RuleMetadata {
    /// The verdict this rule reports when its check fires unspecialized
    pub fn verdict(&self) -> Verdict {
        Verdict {
            item: self.item.clone(),
            severity: self.severity.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            case: self.case.clone(),
            position: self.position,
        }
    }
}

/// Capability to evaluate one rule against a subject
///
/// Returns `None` when the subject passes.
pub trait Check: Send + Sync {
    fn evaluate(&self, subject: &AuditSubject, rule: &RuleMetadata) -> Option<Verdict>;
}

impl<F> Check for F
where
    F: Fn(&AuditSubject, &RuleMetadata) -> Option<Verdict> + Send + Sync,
{
    fn evaluate(&self, subject: &AuditSubject, rule: &RuleMetadata) -> Option<Verdict> {
        self(subject, rule)
    }
}

/// Maps [`CheckId`]s to executable checks
#[derive(Default, Clone)]
pub struct CheckRegistry {
    checks: HashMap<CheckId, Arc<dyn Check>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `check` under `id`, replacing any previous registration
    pub fn register(&mut self, id: impl Into<String>, check: impl Check + 'static) -> &mut Self {
        self.checks.insert(CheckId::new(id), Arc::new(check));
        self
    }

    pub fn get(&self, id: &CheckId) -> Option<&Arc<dyn Check>> {
        self.checks.get(id)
    }

    pub fn contains(&self, id: &CheckId) -> bool {
        self.checks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.checks.keys().map(CheckId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("CheckRegistry").field("checks", &ids).finish()
    }
}

/// Integrity violations that prevent a catalog from being built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate rule item: {0}")]
    DuplicateItem(String),

    #[error("invalid rule item {0:?}: expected NNN.DDD with a known namespace, or OK")]
    InvalidItem(String),

    #[error("rule {item} refers to check {check:?}, which is not registered")]
    MissingCheck { item: String, check: String },
}

struct CatalogEntry {
    rule: RuleMetadata,
    check: Arc<dyn Check>,
}

/// Immutable rule registry, ordered by item
pub struct RuleCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl RuleCatalog {
    /// Build a catalog, binding every rule to its registered check.
    ///
    /// Fails on the first duplicate item, malformed item or unregistered
    /// check; nothing is returned in that case.
    pub fn build(
        rules: impl IntoIterator<Item = RuleMetadata>,
        registry: &CheckRegistry,
    ) -> Result<Self, CatalogError> {
        let mut entries = BTreeMap::new();

        for rule in rules {
            if !namespace::is_valid_item(&rule.item) {
                return Err(CatalogError::InvalidItem(rule.item));
            }
            if entries.contains_key(&rule.item) {
                return Err(CatalogError::DuplicateItem(rule.item));
            }
            let check = registry
                .get(&rule.check)
                .cloned()
                .ok_or_else(|| CatalogError::MissingCheck {
                    item: rule.item.clone(),
                    check: rule.check.to_string(),
                })?;
            entries.insert(rule.item.clone(), CatalogEntry { rule, check });
        }

        tracing::debug!(rules = entries.len(), "rule catalog built");
        Ok(Self { entries })
    }

    pub fn lookup(&self, item: &str) -> Option<&RuleMetadata> {
        self.entries.get(item).map(|e| &e.rule)
    }

    /// Every rule, sorted by item
    pub fn list_all(&self) -> Vec<&RuleMetadata> {
        self.entries.values().map(|e| &e.rule).collect()
    }

    /// Rules paired with their checks, sorted by item
    pub fn rules_with_checks(&self) -> impl Iterator<Item = (&RuleMetadata, &dyn Check)> {
        self.entries.values().map(|e| (&e.rule, e.check.as_ref()))
    }

    /// The `OK` sentinel verdict, if the catalog defines one
    pub fn ok_verdict(&self) -> Option<Verdict> {
        self.lookup(OK_ITEM).map(RuleMetadata::verdict)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for RuleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleCatalog")
            .field("items", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Shared, reloadable reference to the current catalog
///
/// Readers take an `Arc` snapshot; a reload builds the replacement first and
/// only then swaps the pointer, so no reader ever sees a half-built catalog.
pub struct CatalogHandle {
    current: RwLock<Arc<RuleCatalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<RuleCatalog> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Rebuild the catalog with `build` and publish it.
    ///
    /// On error the previous snapshot stays current.
    pub fn reload<F>(&self, build: F) -> Result<Arc<RuleCatalog>, CatalogError>
    where
        F: FnOnce() -> Result<RuleCatalog, CatalogError>,
    {
        let fresh = Arc::new(build()?);
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::clone(&fresh);
        tracing::debug!(rules = fresh.len(), "rule catalog reloaded");
        Ok(fresh)
    }
}

impl fmt::Debug for CatalogHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogHandle")
            .field("current", &self.snapshot())
            .finish()
    }
}
