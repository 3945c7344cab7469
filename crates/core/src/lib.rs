//! sqlaudit core - SQL review diagnostic aggregation
//!
//! This crate turns individually produced rule verdicts into one report:
//! - Rule catalog and check registry
//! - Query subjects parsed by independent engines
//! - Block-list and ignore gates, conflict resolution, scoring
//! - Markdown, JSON, lint and text rendering

pub mod audit;
pub mod builtin;
pub mod catalog;
pub mod checks;
pub mod config;
pub mod filter;
pub mod fingerprint;
pub mod namespace;
pub mod report;
pub mod resolve;
pub mod score;
pub mod subject;
pub mod verdict;

pub use audit::{AuditOutcome, Auditor};
pub use catalog::{
    CatalogError, CatalogHandle, Check, CheckId, CheckRegistry, RuleCatalog, RuleMetadata,
};
pub use config::AuditConfig;
pub use filter::{BlockList, IgnoreList, RuleFilter};
pub use namespace::{Category, Namespace};
pub use report::{render, IndexCase, ListingFormat, RenderOptions, ReportFormat, SampleMode};
pub use resolve::ConflictTable;
pub use score::score;
pub use subject::{AuditSubject, ParseEngine, ParseError, ParseOptions, SqlParserEngine};
pub use verdict::{Severity, Verdict, VerdictSet};

/// sqlaudit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
