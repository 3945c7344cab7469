//! Explain a rule, or every rule in a namespace

use anyhow::{bail, Result};
use sqlaudit_core::report::rule_markdown;
use sqlaudit_core::{builtin, Namespace, RuleCatalog};

/// Namespace part of an item: `COL.001` → `COL`
pub fn extract_prefix(item: &str) -> &str {
    item.split('.').next().unwrap_or(item)
}

/// Markdown explanation for `query`, an exact item or a namespace prefix.
///
/// Returns `None` when neither matches anything in the catalog.
pub fn explain(catalog: &RuleCatalog, query: &str) -> Option<String> {
    let query = query.trim().to_ascii_uppercase();

    if let Some(rule) = catalog.lookup(&query) {
        return Some(rule_markdown(rule));
    }

    if query.contains('.') {
        return None;
    }
    let namespace = Namespace::from_prefix(extract_prefix(&query))?;
    let sections: Vec<String> = catalog
        .list_all()
        .into_iter()
        .filter(|r| Namespace::of_item(&r.item) == Some(namespace))
        .map(rule_markdown)
        .collect();

    if sections.is_empty() {
        None
    } else {
        Some(sections.join("\n"))
    }
}

pub fn run(item: &str) -> Result<()> {
    let catalog = builtin::catalog()?;
    match explain(&catalog, item) {
        Some(text) => {
            println!("{}", text);
            Ok(())
        }
        None => bail!("unknown rule or namespace: {}", item),
    }
}
