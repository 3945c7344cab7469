//! End-to-end tests for the audit pipeline

use sqlaudit_core::catalog::{CheckId, CheckRegistry, RuleCatalog, RuleMetadata};
use sqlaudit_core::filter::{BlockList, IgnoreList, RuleFilter};
use sqlaudit_core::{
    builtin, AuditConfig, AuditSubject, Auditor, ConflictTable, ParseEngine, ParseError,
    ParseOptions, ReportFormat, Severity, Verdict,
};
use sqlaudit_core::subject::ParseTree;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn rule(item: &str, severity: &str, check: &str) -> RuleMetadata {
    RuleMetadata {
        item: item.to_string(),
        severity: Severity::new(severity),
        summary: format!("{} summary", item),
        content: String::new(),
        case: String::new(),
        position: 0,
        check: CheckId::new(check),
        superseded_by: Vec::new(),
    }
}

fn builtin_auditor() -> Auditor {
    Auditor::new(Arc::new(builtin::catalog().unwrap()))
}

/// Catalog whose single rule counts how often it is evaluated
fn counting_catalog(calls: Arc<AtomicUsize>) -> RuleCatalog {
    let mut registry = CheckRegistry::new();
    registry.register(
        "counting",
        move |_: &AuditSubject, rule: &RuleMetadata| -> Option<Verdict> {
            calls.fetch_add(1, Ordering::SeqCst);
            Some(rule.verdict())
        },
    );
    RuleCatalog::build(vec![rule("COL.001", "L1", "counting")], &registry).unwrap()
}

/// Engine that accepts everything and counts its calls
struct CountingEngine {
    calls: Arc<AtomicUsize>,
}

impl ParseEngine for CountingEngine {
    fn name(&self) -> &str {
        "counting"
    }

    fn parse(&self, _sql: &str, _options: &ParseOptions) -> Result<ParseTree, ParseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

// ── pipeline ────────────────────────────────────────────────────

#[test]
fn test_builtin_select_star() {
    let outcome = builtin_auditor().audit("select * from film");
    assert!(!outcome.blocked);
    assert!(outcome.verdicts.contains("COL.001"));
    assert!(outcome.verdicts.contains("CLA.001"));
    assert!(outcome.score < 100);
}

#[test]
fn test_clean_query_full_score() {
    let outcome = builtin_auditor().audit("SELECT title FROM film WHERE film_id = 1");
    assert!(outcome.verdicts.is_empty());
    assert_eq!(outcome.score, 100);
}

#[test]
fn test_blocked_query_skips_checks() {
    let calls = Arc::new(AtomicUsize::new(0));
    let auditor = Auditor::new(Arc::new(counting_catalog(Arc::clone(&calls))))
        .with_filter(RuleFilter::new(IgnoreList::default(), BlockList::new(["^select 1$"])));

    let outcome = auditor.audit("SELECT 1");
    assert!(outcome.blocked);
    assert!(outcome.verdicts.is_empty());
    assert_eq!(outcome.score, 100);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let outcome = auditor.audit("SELECT 2");
    assert!(!outcome.blocked);
    assert!(outcome.verdicts.contains("COL.001"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_blocked_query_never_parsed() {
    let parses = Arc::new(AtomicUsize::new(0));
    let auditor = builtin_auditor()
        .with_engines(vec![Box::new(CountingEngine {
            calls: Arc::clone(&parses),
        })])
        .with_filter(RuleFilter::new(IgnoreList::default(), BlockList::new(["^select 1$"])));

    let outcome = auditor.audit("SELECT 1");
    assert!(outcome.blocked);
    assert_eq!(outcome.subject.raw(), "SELECT 1");
    assert_eq!(parses.load(Ordering::SeqCst), 0);

    let outcome = auditor.audit("SELECT 2");
    assert!(!outcome.blocked);
    assert_eq!(parses.load(Ordering::SeqCst), 1);
}

#[test]
fn test_ignored_items_removed_before_scoring() {
    let auditor = builtin_auditor()
        .with_filter(RuleFilter::new(IgnoreList::new(["COL", "CLA"]), BlockList::default()));
    let outcome = auditor.audit("select * from film");
    assert!(!outcome.verdicts.contains("COL.001"));
    assert!(!outcome.verdicts.contains("CLA.001"));
    assert_eq!(outcome.score, 100);
}

#[test]
fn test_conflicts_resolved() {
    let mut conflicts = ConflictTable::new();
    conflicts.add("CLA.001", "COL.001");
    let outcome = builtin_auditor()
        .with_conflicts(conflicts)
        .audit("select * from film");
    assert!(outcome.verdicts.contains("COL.001"));
    assert!(!outcome.verdicts.contains("CLA.001"));
}

#[test]
fn test_catalog_declared_supersession() {
    let mut registry = CheckRegistry::new();
    registry.register("always", |_: &AuditSubject, rule: &RuleMetadata| -> Option<Verdict> {
        Some(rule.verdict())
    });
    let mut subsumed = rule("ARG.001", "L4", "always");
    subsumed.superseded_by = vec!["IDX.001".to_string()];
    let catalog = RuleCatalog::build(
        vec![subsumed, rule("IDX.001", "L2", "always")],
        &registry,
    )
    .unwrap();

    let outcome = Auditor::new(Arc::new(catalog)).audit("select 1");
    let items: Vec<&str> = outcome.verdicts.items().collect();
    assert_eq!(items, vec!["IDX.001"]);
    assert_eq!(outcome.score, 90);
}

#[test]
fn test_audit_all_keeps_order() {
    let queries = [
        "select * from film",
        "SELECT title FROM film WHERE film_id = 1",
        "DELETE FROM film",
    ];
    let outcomes = builtin_auditor().audit_all(&queries);
    assert_eq!(outcomes.len(), 3);
    for (outcome, sql) in outcomes.iter().zip(queries) {
        assert_eq!(outcome.subject.raw(), sql);
    }
    assert!(outcomes[2].verdicts.contains("CLA.014"));
}

// ── configuration ───────────────────────────────────────────────

#[test]
fn test_from_config() {
    let config: AuditConfig = toml::from_str(
        r#"
[ignore]
rules = ["CLA"]
blacklist = ["^show\\s"]

[output]
hide_ok = true

[conflicts]
"SEC.003" = ["CLA.014"]
"#,
    )
    .unwrap();
    let auditor = Auditor::from_config(Arc::new(builtin::catalog().unwrap()), &config);

    assert!(auditor.audit("SHOW TABLES").blocked);

    let outcome = auditor.audit("DELETE FROM film");
    // CLA.014 supersedes SEC.003 and is then ignored itself
    assert!(!outcome.verdicts.contains("SEC.003"));
    assert!(!outcome.verdicts.contains("CLA.014"));

    assert!(auditor.render_options().ignore.hides_ok());
    let doc = auditor.render(&auditor.audit("SELECT title FROM film WHERE film_id = 1"), ReportFormat::Markdown);
    assert!(!doc.contains("## OK"));
}

#[test]
fn test_render_uses_catalog_ok() {
    let auditor = builtin_auditor();
    let outcome = auditor.audit("SELECT title FROM film WHERE film_id = 1");
    let doc = auditor.render(&outcome, ReportFormat::Markdown);
    let ok = builtin::ok_verdict();
    assert!(doc.contains(&format!("## {}", ok.summary)));
}
