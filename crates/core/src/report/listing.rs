//! Catalog listing, independent of any query

use super::markdown::markdown_escape;
use crate::catalog::{RuleCatalog, RuleMetadata};
use crate::namespace::OK_ITEM;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingFormat {
    #[default]
    Markdown,
    Json,
}

/// Every rule except `OK`, sorted by item
pub fn render_listing(catalog: &RuleCatalog, format: ListingFormat) -> String {
    let rules: Vec<&RuleMetadata> = catalog
        .list_all()
        .into_iter()
        .filter(|r| r.item != OK_ITEM)
        .collect();

    match format {
        ListingFormat::Markdown => render_markdown(&rules),
        ListingFormat::Json => serde_json::to_string_pretty(&rules).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to serialize rule listing");
            "[]".to_string()
        }),
    }
}

fn render_markdown(rules: &[&RuleMetadata]) -> String {
    let mut out = String::from("# Heuristic rules\n");
    for rule in rules {
        out.push('\n');
        out.push_str(&rule_markdown(rule));
    }
    out
}

/// One `##` section describing `rule`
pub fn rule_markdown(rule: &RuleMetadata) -> String {
    format!(
        "## {}\n\n* **Item**: {}\n* **Severity**: {}\n* **Content**: {}\n* **Case**:\n\n```sql\n{}\n```\n",
        markdown_escape(&rule.summary),
        rule.item,
        rule.severity,
        markdown_escape(&rule.content),
        rule.case
    )
}
