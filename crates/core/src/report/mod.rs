//! Report rendering - one resolved verdict set, several encodings
//!
//! Every format shares the same normalization ([`normalize`]) and the same
//! categorization ([`partition`]), so a verdict lands in the same place no
//! matter which document is produced. Rendering never fails.

pub mod html;
pub mod json;
pub mod lint;
pub mod listing;
pub mod markdown;
pub mod text;

use crate::builtin;
use crate::filter::IgnoreList;
use crate::namespace::{Category, EXPLAIN_SUMMARY_ITEM, OK_ITEM};
use crate::subject::AuditSubject;
use crate::verdict::{Verdict, VerdictSet};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use listing::{render_listing, rule_markdown, ListingFormat};

/// Supported report encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Markdown,
    /// The markdown report converted to HTML
    Html,
    Json,
    Lint,
    Text,
    /// Text plus a debug dump of every verdict; used for unknown names
    Dump,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 6] = [
        ReportFormat::Markdown,
        ReportFormat::Html,
        ReportFormat::Json,
        ReportFormat::Lint,
        ReportFormat::Text,
        ReportFormat::Dump,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Lint => "lint",
            ReportFormat::Text => "text",
            ReportFormat::Dump => "dump",
        }
    }

    /// Exact, case-insensitive lookup
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// Lookup that falls back to [`ReportFormat::Dump`] for unknown names
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::warn!(format = name, "unknown report format, falling back to dump");
            ReportFormat::Dump
        })
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the query block of a report shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleMode {
    /// Normalized fingerprint
    Fingerprint,
    /// The query as submitted
    #[default]
    Sample,
    /// Re-printed from the parse tree
    Pretty,
}

impl SampleMode {
    pub fn text(self, subject: &AuditSubject) -> String {
        match self {
            SampleMode::Fingerprint => subject.fingerprint(),
            SampleMode::Sample => subject.raw().trim().to_string(),
            SampleMode::Pretty => subject.pretty(),
        }
    }
}

/// How the markdown report shows the case of an `IDX` verdict
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndexCase {
    /// `* **Case:** ...` bullet
    #[default]
    Bullet,
    /// Fenced `sql` block, for cases that hold a table definition
    SqlBlock,
}

/// Presentation settings shared by every format
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub sample_mode: SampleMode,
    pub index_case: IndexCase,
    pub ignore: IgnoreList,
    /// Verdict synthesized for a query with no findings
    pub ok: Verdict,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sample_mode: SampleMode::default(),
            index_case: IndexCase::default(),
            ignore: IgnoreList::default(),
            ok: builtin::ok_verdict(),
        }
    }
}

/// Verdicts as they should be displayed: `OK` added for a clean query,
/// dropped when anything else is present or when hidden, and ignored items
/// removed.
pub fn normalize(verdicts: &VerdictSet, options: &RenderOptions) -> VerdictSet {
    let mut out = verdicts.clone();
    if out.is_empty() {
        out.insert(options.ok.clone());
    }
    if out.len() > 1 || options.ignore.hides_ok() {
        out.remove(OK_ITEM);
    }
    options.ignore.apply(&mut out);
    out
}

/// Verdicts grouped by category, each group sorted by item
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buckets<'a> {
    /// ERR verdicts that carry an error message
    pub failures: Vec<&'a Verdict>,
    /// EXP.000
    pub explain_header: Option<&'a Verdict>,
    pub explain: Vec<&'a Verdict>,
    pub profiling: Vec<&'a Verdict>,
    pub trace: Vec<&'a Verdict>,
    pub index: Vec<&'a Verdict>,
    /// Everything else, including OK
    pub heuristic: Vec<&'a Verdict>,
}

impl<'a> Buckets<'a> {
    /// Any failure forces the score to 0
    pub fn effective_score(&self, score: u8) -> u8 {
        if self.failures.is_empty() {
            score
        } else {
            0
        }
    }

    /// EXP verdicts with the header first
    pub fn explain_all(&self) -> Vec<&'a Verdict> {
        self.explain_header
            .into_iter()
            .chain(self.explain.iter().copied())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
            && self.explain_header.is_none()
            && self.explain.is_empty()
            && self.profiling.is_empty()
            && self.trace.is_empty()
            && self.index.is_empty()
            && self.heuristic.is_empty()
    }
}

/// Split verdicts into disjoint, sorted buckets
pub fn partition(verdicts: &VerdictSet) -> Buckets<'_> {
    let mut buckets = Buckets::default();
    for verdict in verdicts.sorted() {
        match Category::of_item(&verdict.item) {
            Category::Failure => {
                if !verdict.content.is_empty() {
                    buckets.failures.push(verdict);
                }
            }
            Category::Explain if verdict.item == EXPLAIN_SUMMARY_ITEM => {
                buckets.explain_header = Some(verdict);
            }
            Category::Explain => buckets.explain.push(verdict),
            Category::Profiling => buckets.profiling.push(verdict),
            Category::Trace => buckets.trace.push(verdict),
            Category::Index => buckets.index.push(verdict),
            Category::Heuristic => buckets.heuristic.push(verdict),
        }
    }
    buckets
}

/// Render one subject's resolved verdicts
pub fn render(
    subject: &AuditSubject,
    verdicts: &VerdictSet,
    score: u8,
    format: ReportFormat,
    options: &RenderOptions,
) -> String {
    let shown = normalize(verdicts, options);
    match format {
        ReportFormat::Markdown => markdown::render(subject, &shown, score, options),
        ReportFormat::Html => html::render(&markdown::render(subject, &shown, score, options)),
        ReportFormat::Json => json::render(subject, &shown, score),
        ReportFormat::Lint => lint::render(&shown),
        ReportFormat::Text => text::render(subject, &shown),
        ReportFormat::Dump => text::render_dump(subject, &shown),
    }
}
