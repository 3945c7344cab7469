//! Built-in checks
//!
//! Most checks are regular expressions over the query text, matched after
//! string literals and comments are masked out so that keywords quoted inside
//! values do not trigger them. A few look at the parse tree instead.

use crate::catalog::{Check, CheckRegistry, RuleMetadata};
use crate::fingerprint::mask_literals;
use crate::subject::AuditSubject;
use crate::verdict::Verdict;
use regex::Regex;
use sqlparser::ast::{Select, SelectItem, SetExpr, Statement};
use std::sync::LazyLock;

pub const PASS: &str = "pass";
pub const EXTERNAL: &str = "external";
pub const PARSE_FAILURE: &str = "parse_failure";
pub const SELECT_STAR: &str = "select_star";
pub const SELECT_WITHOUT_WHERE: &str = "select_without_where";

pub const STAR_ALIAS: &str = "star_alias";
pub const ALTER_CHARSET: &str = "alter_charset";
pub const ALTER_DROP_COLUMN: &str = "alter_drop_column";
pub const ALTER_DROP_KEY: &str = "alter_drop_key";
pub const PREFIX_LIKE: &str = "prefix_like";
pub const EQUAL_LIKE: &str = "equal_like";
pub const HINT: &str = "hint";
pub const NEGATIVE_PREDICATE: &str = "negative_predicate";
pub const ORDER_BY_RAND: &str = "order_by_rand";
pub const LIMIT_OFFSET: &str = "limit_offset";
pub const DELETE_WITHOUT_WHERE: &str = "delete_without_where";
pub const UPDATE_WITHOUT_WHERE: &str = "update_without_where";
pub const INSERT_WITHOUT_COLUMNS: &str = "insert_without_columns";
pub const ENUM_TYPE: &str = "enum_type";
pub const SYSDATE: &str = "sysdate";
pub const CALC_FOUND_ROWS: &str = "calc_found_rows";
pub const INSERT_SELECT: &str = "insert_select";
pub const LIMIT_WITHOUT_ORDER: &str = "limit_without_order";
pub const WRITE_WITH_LIMIT: &str = "write_with_limit";
pub const TRUNCATE: &str = "truncate";
pub const DESTRUCTIVE: &str = "destructive";
pub const NOT_EQUAL: &str = "not_equal";
pub const UNION_DISTINCT: &str = "union_distinct";
pub const PARTITION: &str = "partition";

/// Which form of the query text a [`PatternCheck`] searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextView {
    /// The text exactly as submitted
    Raw,
    /// Literals emptied and comments blanked
    Masked,
}

/// Fires when `matches` is found and `unless` (if any) is not
#[derive(Debug, Clone)]
pub struct PatternCheck {
    matches: Regex,
    unless: Option<Regex>,
    view: TextView,
}

impl PatternCheck {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            matches: Regex::new(pattern)?,
            unless: None,
            view: TextView::Masked,
        })
    }

    /// Suppress the check when `pattern` also matches
    pub fn unless(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.unless = Some(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn on(mut self, view: TextView) -> Self {
        self.view = view;
        self
    }

    pub fn is_match(&self, sql: &str) -> bool {
        let masked;
        let text = match self.view {
            TextView::Raw => sql,
            TextView::Masked => {
                masked = mask_literals(sql);
                masked.as_str()
            }
        };
        self.matches.is_match(text) && !self.unless.as_ref().is_some_and(|re| re.is_match(text))
    }
}

impl Check for PatternCheck {
    fn evaluate(&self, subject: &AuditSubject, rule: &RuleMetadata) -> Option<Verdict> {
        self.is_match(subject.raw()).then(|| rule.verdict())
    }
}

/// Text patterns for the built-in rules, compiled once
static PATTERNS: LazyLock<Vec<(&'static str, PatternCheck)>> = LazyLock::new(|| {
    let masked = |pattern: &str| PatternCheck::new(pattern).unwrap();
    let raw = |pattern: &str| PatternCheck::new(pattern).unwrap().on(TextView::Raw);

    vec![
        // ── Aliases and schema changes ──────────────────────────────
        (STAR_ALIAS, masked(r"(?i)\*\s+as\s+\w")),
        (
            ALTER_CHARSET,
            masked(r"(?is)\balter\s+table\b.*\b(?:character\s+set|charset)\b")
                .unless(r"(?i)\bconvert\s+to\b")
                .unwrap(),
        ),
        (ALTER_DROP_COLUMN, masked(r"(?is)\balter\s+table\b.*\bdrop\s+column\b")),
        (
            ALTER_DROP_KEY,
            masked(r"(?is)\balter\s+table\b.*\bdrop\s+(?:primary|foreign)\s+key\b"),
        ),
        (
            ENUM_TYPE,
            masked(r"(?is)\b(?:create|alter)\s+table\b.*\b(?:enum|set|bit)\s*\("),
        ),
        (
            PARTITION,
            masked(r"(?is)^\s*(?:create|alter)\s+table\b.*\bpartition\s+by\b"),
        ),
        // ── Predicates ──────────────────────────────────────────────
        // LIKE patterns live inside literals, so these read the raw text
        (PREFIX_LIKE, raw(r"(?i)\blike\s+'%")),
        (EQUAL_LIKE, raw(r"(?i)\blike\s+'[^'%_]*'")),
        (NEGATIVE_PREDICATE, masked(r"(?i)\bnot\s+(?:in|like)\b")),
        (NOT_EQUAL, masked(r"!=")),
        (SYSDATE, masked(r"(?i)\bsysdate\s*\(")),
        // ── Clauses ─────────────────────────────────────────────────
        (
            HINT,
            masked(r"(?i)\b(?:sql_no_cache|straight_join|(?:force|ignore|use)\s+(?:index|key))\b"),
        ),
        (ORDER_BY_RAND, masked(r"(?i)\border\s+by\s+rand\s*\(")),
        (
            LIMIT_OFFSET,
            masked(r"(?i)\blimit\s+\d+\s+offset\s+\d+|\blimit\s+\d+\s*,\s*\d+"),
        ),
        (
            LIMIT_WITHOUT_ORDER,
            masked(r"(?is)^\s*select\b.*\blimit\s+\d")
                .unless(r"(?i)\border\s+by\b")
                .unwrap(),
        ),
        (CALC_FOUND_ROWS, masked(r"(?i)\bsql_calc_found_rows\b")),
        (
            UNION_DISTINCT,
            masked(r"(?i)\bunion\s+(?:distinct\s+)?(?:select\b|\()"),
        ),
        // ── Writes ──────────────────────────────────────────────────
        (
            DELETE_WITHOUT_WHERE,
            masked(r"(?i)^\s*delete\s+from\b").unless(r"(?i)\bwhere\b").unwrap(),
        ),
        (
            UPDATE_WITHOUT_WHERE,
            masked(r"(?i)^\s*update\b").unless(r"(?i)\bwhere\b").unwrap(),
        ),
        (
            INSERT_WITHOUT_COLUMNS,
            masked(
                r"(?i)^\s*(?:insert|replace)\s+(?:(?:low_priority|delayed|high_priority|ignore)\s+)*(?:into\s+)?[\w.`]+\s+(?:values?|select)\b",
            ),
        ),
        (INSERT_SELECT, masked(r"(?is)^\s*(?:insert|replace)\b.*\bselect\b")),
        (
            WRITE_WITH_LIMIT,
            masked(r"(?is)^\s*(?:update|delete)\b.*\blimit\s+\d"),
        ),
        (TRUNCATE, masked(r"(?i)^\s*truncate\b")),
        (DESTRUCTIVE, masked(r"(?i)^\s*(?:delete|drop|truncate)\b")),
    ]
});

fn pass(_: &AuditSubject, _: &RuleMetadata) -> Option<Verdict> {
    None
}

/// ERR.000: every configured engine rejected the query
fn parse_failure(subject: &AuditSubject, rule: &RuleMetadata) -> Option<Verdict> {
    subject
        .parse_failure()
        .map(|message| rule.verdict().with_content(message))
}

/// The `SELECT` at the top of a query statement
fn outer_select(stmt: &Statement) -> Option<&Select> {
    match stmt {
        Statement::Query(query) => match query.body.as_ref() {
            SetExpr::Select(select) => Some(&**select),
            _ => None,
        },
        _ => None,
    }
}

fn outer_selects<'a>(subject: &'a AuditSubject) -> impl Iterator<Item = &'a Select> + 'a {
    subject
        .first_tree()
        .into_iter()
        .flatten()
        .filter_map(outer_select)
}

fn select_star(subject: &AuditSubject, rule: &RuleMetadata) -> Option<Verdict> {
    outer_selects(subject)
        .any(|select| {
            select.projection.iter().any(|item| {
                matches!(
                    item,
                    SelectItem::Wildcard(..) | SelectItem::QualifiedWildcard(..)
                )
            })
        })
        .then(|| rule.verdict())
}

fn select_without_where(subject: &AuditSubject, rule: &RuleMetadata) -> Option<Verdict> {
    outer_selects(subject)
        .any(|select| !select.from.is_empty() && select.selection.is_none())
        .then(|| rule.verdict())
}

/// Registry holding every check the built-in rules refer to
pub fn builtin_registry() -> CheckRegistry {
    let mut registry = CheckRegistry::new();
    registry
        .register(PASS, pass)
        .register(EXTERNAL, pass)
        .register(PARSE_FAILURE, parse_failure)
        .register(SELECT_STAR, select_star)
        .register(SELECT_WITHOUT_WHERE, select_without_where);

    for (id, check) in PATTERNS.iter() {
        registry.register(*id, check.clone());
    }
    registry
}
