//! JSON report

use super::partition;
use crate::subject::AuditSubject;
use crate::verdict::{Verdict, VerdictSet};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonReport<'a> {
    #[serde(rename = "ID")]
    pub id: String,
    pub fingerprint: String,
    pub score: u8,
    pub sample: String,
    pub explain: Vec<&'a Verdict>,
    pub index_rules: Vec<&'a Verdict>,
    pub heuristic_rules: Vec<&'a Verdict>,
    pub tables: Vec<String>,
}

impl<'a> JsonReport<'a> {
    /// `Sample` is always the query as submitted, whatever the sample mode
    pub fn new(subject: &AuditSubject, verdicts: &'a VerdictSet, score: u8) -> Self {
        let buckets = partition(verdicts);
        let score = buckets.effective_score(score);

        let mut heuristic_rules: Vec<&Verdict> = buckets
            .failures
            .iter()
            .chain(&buckets.profiling)
            .chain(&buckets.trace)
            .chain(&buckets.heuristic)
            .copied()
            .collect();
        heuristic_rules.sort_by(|a, b| a.item.cmp(&b.item));

        Self {
            id: subject.id(),
            fingerprint: subject.fingerprint(),
            score,
            sample: subject.raw().to_string(),
            explain: buckets.explain_all(),
            index_rules: buckets.index,
            heuristic_rules,
            tables: subject.tables(),
        }
    }
}

pub fn render(subject: &AuditSubject, verdicts: &VerdictSet, score: u8) -> String {
    let report = JsonReport::new(subject, verdicts, score);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize JSON report");
            "{}".to_string()
        }
    }
}
