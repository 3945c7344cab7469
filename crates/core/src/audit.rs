//! Audit pipeline - checks, gates, resolution and scoring for one query
//!
//! Data flow per query:
//! subject → block-list gate → checks → conflict resolver → ignore gate → score.
//! Rendering is separate so one outcome can be encoded several times.

use crate::builtin;
use crate::catalog::{Check, RuleCatalog, RuleMetadata};
use crate::config::AuditConfig;
use crate::filter::RuleFilter;
use crate::report::{self, RenderOptions, ReportFormat};
use crate::resolve::ConflictTable;
use crate::score::{score, MAX_SCORE};
use crate::subject::{default_engines, AuditSubject, ParseEngine, ParseOptions};
use crate::verdict::VerdictSet;
use rayon::prelude::*;
use std::sync::Arc;

/// Result of auditing one query
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub subject: AuditSubject,
    /// Resolved verdicts with ignored items removed
    pub verdicts: VerdictSet,
    pub score: u8,
    /// The query matched the block-list and was not checked
    pub blocked: bool,
}

/// Runs a catalog's checks over queries
pub struct Auditor {
    catalog: Arc<RuleCatalog>,
    engines: Vec<Box<dyn ParseEngine>>,
    parse_options: ParseOptions,
    filter: RuleFilter,
    conflicts: ConflictTable,
    render_options: RenderOptions,
}

impl Auditor {
    /// Auditor with the default engines and no filtering
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        let conflicts = ConflictTable::from_catalog(&catalog);
        let render_options = RenderOptions {
            ok: catalog.ok_verdict().unwrap_or_else(builtin::ok_verdict),
            ..RenderOptions::default()
        };
        Self {
            catalog,
            engines: default_engines(),
            parse_options: ParseOptions::default(),
            filter: RuleFilter::default(),
            conflicts,
            render_options,
        }
    }

    /// Auditor configured from a loaded `.sqlaudit.toml`
    pub fn from_config(catalog: Arc<RuleCatalog>, config: &AuditConfig) -> Self {
        let ok = catalog.ok_verdict().unwrap_or_else(builtin::ok_verdict);
        Self {
            engines: config.engines(),
            parse_options: config.parse_options(),
            filter: config.rule_filter(),
            conflicts: config.conflict_table(&catalog),
            render_options: config.render_options(ok),
            catalog,
        }
    }

    pub fn with_engines(mut self, engines: Vec<Box<dyn ParseEngine>>) -> Self {
        self.engines = engines;
        self
    }

    pub fn with_filter(mut self, filter: RuleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_conflicts(mut self, conflicts: ConflictTable) -> Self {
        self.conflicts = conflicts;
        self
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    pub fn catalog(&self) -> &Arc<RuleCatalog> {
        &self.catalog
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    pub fn render_options_mut(&mut self) -> &mut RenderOptions {
        &mut self.render_options
    }

    /// Parse `sql` with every configured engine
    pub fn subject(&self, sql: &str) -> AuditSubject {
        AuditSubject::parse(sql, &self.engines, self.parse_options.clone())
    }

    /// Run every catalog check against `subject` in parallel
    pub fn evaluate(&self, subject: &AuditSubject) -> VerdictSet {
        let rules: Vec<(&RuleMetadata, &dyn Check)> = self.catalog.rules_with_checks().collect();
        let verdicts: Vec<_> = rules
            .par_iter()
            .filter_map(|(rule, check)| check.evaluate(subject, rule))
            .collect();
        tracing::debug!(checks = rules.len(), fired = verdicts.len(), "checks evaluated");
        verdicts.into_iter().collect()
    }

    pub fn audit_subject(&self, subject: AuditSubject) -> AuditOutcome {
        if self.filter.is_blocked(subject.raw()) {
            return blocked(subject);
        }
        self.check(subject)
    }

    /// Audit one query; block-listed text is never handed to a parser
    pub fn audit(&self, sql: &str) -> AuditOutcome {
        if self.filter.is_blocked(sql) {
            tracing::debug!("query matched the block-list");
            return blocked(AuditSubject::unparsed(sql));
        }
        self.check(self.subject(sql))
    }

    fn check(&self, subject: AuditSubject) -> AuditOutcome {
        let raw = self.evaluate(&subject);
        let mut verdicts = self.conflicts.resolve(raw);
        self.filter.ignore.apply(&mut verdicts);
        let score = score(&verdicts);

        AuditOutcome {
            subject,
            verdicts,
            score,
            blocked: false,
        }
    }

    /// Audit several queries, keeping input order
    pub fn audit_all<S: AsRef<str> + Sync>(&self, queries: &[S]) -> Vec<AuditOutcome> {
        queries.par_iter().map(|q| self.audit(q.as_ref())).collect()
    }

    pub fn render(&self, outcome: &AuditOutcome, format: ReportFormat) -> String {
        report::render(
            &outcome.subject,
            &outcome.verdicts,
            outcome.score,
            format,
            &self.render_options,
        )
    }
}

fn blocked(subject: AuditSubject) -> AuditOutcome {
    AuditOutcome {
        subject,
        verdicts: VerdictSet::new(),
        score: MAX_SCORE,
        blocked: true,
    }
}

impl std::fmt::Debug for Auditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let engines: Vec<&str> = self.engines.iter().map(|e| e.name()).collect();
        f.debug_struct("Auditor")
            .field("catalog", &self.catalog)
            .field("engines", &engines)
            .field("filter", &self.filter)
            .field("conflicts", &self.conflicts)
            .finish()
    }
}
