//! Main review command - wires config, catalog, auditor and renderers together

use anyhow::Result;
use colored::Colorize;
use sqlaudit_core::report::html;
use sqlaudit_core::{builtin, AuditConfig, AuditOutcome, Auditor, ReportFormat};
use std::path::Path;
use std::sync::Arc;

use crate::input::{read_input, split_statements};
use crate::output;

/// Process exit status of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewExitCode {
    Success,
    BelowMinScore,
}

impl ReviewExitCode {
    pub fn code(self) -> i32 {
        match self {
            ReviewExitCode::Success => 0,
            ReviewExitCode::BelowMinScore => 1,
        }
    }
}

pub fn run(file: Option<&Path>, cli: &crate::Cli) -> Result<ReviewExitCode> {
    // ── 1. Config ────────────────────────────────────────────────
    let config = apply_overrides(load_config(cli)?, cli);
    let format = resolve_format(cli, &config);
    let min_score = cli.min_score.unwrap_or(config.output.min_score);

    // ── 2. Catalog ───────────────────────────────────────────────
    let catalog = Arc::new(builtin::catalog()?);
    let auditor = Auditor::from_config(catalog, &config);

    // ── 3. Input ─────────────────────────────────────────────────
    let text = read_input(file)?;
    let statements = split_statements(&text);
    if statements.is_empty() {
        eprintln!("  {}", "No SQL statements found.".dimmed());
        return Ok(ReviewExitCode::Success);
    }
    tracing::debug!(statements = statements.len(), "input split");

    // ── 4. Audit ─────────────────────────────────────────────────
    let outcomes = auditor.audit_all(&statements);

    // ── 5. Output ────────────────────────────────────────────────
    println!("{}", render_all(&auditor, &outcomes, format));
    output::terminal::print_summary(&outcomes, min_score);

    Ok(exit_code(&outcomes, min_score))
}

// ── Helpers ──────────────────────────────────────────────────────

pub fn load_config(cli: &crate::Cli) -> Result<AuditConfig> {
    match cli.config {
        Some(ref path) => AuditConfig::from_file(path),
        None => {
            let cwd = std::env::current_dir()?;
            AuditConfig::find_and_load(&cwd)
        }
    }
}

/// Fold command-line flags into the loaded config
pub fn apply_overrides(mut config: AuditConfig, cli: &crate::Cli) -> AuditConfig {
    config.ignore.rules.extend(cli.ignore.iter().cloned());
    if cli.hide_ok {
        config.output.hide_ok = true;
    }
    if let Some(sample) = cli.sample {
        config.output.sample = sample.into();
    }
    config
}

pub fn resolve_format(cli: &crate::Cli, config: &AuditConfig) -> ReportFormat {
    match cli.format {
        Some(f) => f.into(),
        None => ReportFormat::from_name(&config.output.format),
    }
}

/// Rendered documents for every non-blocked query. Several JSON documents
/// are wrapped in one array; HTML fragments share one page.
pub fn render_all(auditor: &Auditor, outcomes: &[AuditOutcome], format: ReportFormat) -> String {
    let documents: Vec<String> = outcomes
        .iter()
        .filter(|o| !o.blocked)
        .map(|o| auditor.render(o, format))
        .collect();

    match format {
        ReportFormat::Json if documents.len() > 1 => format!("[\n{}\n]", documents.join(",\n")),
        ReportFormat::Html => html::page("sqlaudit review", &documents),
        _ => documents.join("\n"),
    }
}

pub fn exit_code(outcomes: &[AuditOutcome], min_score: u8) -> ReviewExitCode {
    if outcomes.iter().any(|o| !o.blocked && o.score < min_score) {
        ReviewExitCode::BelowMinScore
    } else {
        ReviewExitCode::Success
    }
}
