//! Markdown report

use super::{partition, IndexCase, RenderOptions};
use crate::namespace::OK_ITEM;
use crate::score::stars;
use crate::subject::AuditSubject;
use crate::verdict::{Verdict, VerdictSet};

const ESCAPED: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '|', '#'];

/// Backslash-escape characters that markdown would otherwise interpret
pub fn markdown_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if ESCAPED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `Score: ★★★ 75`
pub fn score_line(score: u8) -> String {
    let stars = stars(score);
    if stars.is_empty() {
        format!("Score: {}", score)
    } else {
        format!("Score: {} {}", stars, score)
    }
}

pub fn render(
    subject: &AuditSubject,
    verdicts: &VerdictSet,
    score: u8,
    options: &RenderOptions,
) -> String {
    let buckets = partition(verdicts);
    let score = buckets.effective_score(score);
    let mut blocks: Vec<String> = Vec::new();

    let raw = subject.raw().trim();
    if !raw.is_empty() {
        blocks.push(format!("# Query: {}\n", subject.id()));
    }
    blocks.push(format!("{}\n", score_line(score)));
    if !raw.is_empty() {
        blocks.push(format!(
            "```sql\n{}\n```\n",
            options.sample_mode.text(subject)
        ));
    }

    if !buckets.failures.is_empty() {
        blocks.push("## Execution failed\n".to_string());
        blocks.extend(buckets.failures.iter().map(|v| format!("{}\n", v.content)));
    }

    if let Some(header) = buckets.explain_header {
        blocks.push(format!("## {}\n", header.summary));
        blocks.push(format!("{}\n", header.content));
        blocks.push(format!("{}\n", header.case));
    }
    for v in &buckets.explain {
        blocks.push(format!("### {}\n", v.summary));
        blocks.push(format!("{}\n", v.content));
        blocks.push(format!("{}\n", v.case));
    }

    if !buckets.profiling.is_empty() {
        blocks.push("## Profiling\n".to_string());
        blocks.extend(buckets.profiling.iter().map(|v| format!("{}\n", v.content)));
    }
    if !buckets.trace.is_empty() {
        blocks.push("## Trace\n".to_string());
        blocks.extend(buckets.trace.iter().map(|v| format!("{}\n", v.content)));
    }

    for v in &buckets.index {
        let mut block = rule_section(v);
        match options.index_case {
            IndexCase::Bullet => {
                block.push_str(&format!("* **Case:** {}\n", markdown_escape(&v.case)));
            }
            IndexCase::SqlBlock => {
                block.push_str(&format!("* **Case:**\n\n```sql\n{}\n```\n", v.case.trim()));
            }
        }
        blocks.push(block);
    }

    for v in &buckets.heuristic {
        if v.item == OK_ITEM {
            blocks.push(format!("## {}\n", markdown_escape(&v.summary)));
        } else {
            blocks.push(rule_section(v));
        }
    }

    blocks.join("\n")
}

fn rule_section(v: &Verdict) -> String {
    format!(
        "## {}\n* **Item:** {}\n* **Severity:** {}\n* **Content:** {}\n",
        markdown_escape(&v.summary),
        v.item,
        v.severity,
        markdown_escape(&v.content)
    )
}
