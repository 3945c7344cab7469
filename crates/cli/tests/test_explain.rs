use sqlaudit_cli::commands::explain::{explain, extract_prefix};
use sqlaudit_core::builtin;

#[test]
fn test_extract_prefix_standard() {
    assert_eq!(extract_prefix("COL.001"), "COL");
    assert_eq!(extract_prefix("ARG.010"), "ARG");
}

#[test]
fn test_extract_prefix_no_number() {
    assert_eq!(extract_prefix("SEC"), "SEC");
    assert_eq!(extract_prefix("OK"), "OK");
}

#[test]
fn test_explain_exact_item() {
    let catalog = builtin::catalog().unwrap();
    let text = explain(&catalog, "COL.001").unwrap();
    assert!(text.starts_with("## "));
    assert!(text.contains("* **Item**: COL.001"));
    assert!(text.contains("```sql"));
    assert_eq!(text.matches("* **Item**:").count(), 1);
}

#[test]
fn test_explain_is_case_insensitive() {
    let catalog = builtin::catalog().unwrap();
    assert_eq!(explain(&catalog, " col.001 "), explain(&catalog, "COL.001"));
}

#[test]
fn test_explain_namespace() {
    let catalog = builtin::catalog().unwrap();
    let text = explain(&catalog, "CLA").unwrap();
    let count = catalog
        .list_all()
        .iter()
        .filter(|r| r.item.starts_with("CLA."))
        .count();
    assert!(count > 1);
    assert_eq!(text.matches("* **Item**: CLA.").count(), count);
    assert!(!text.contains("* **Item**: COL."));
}

#[test]
fn test_explain_unknown() {
    let catalog = builtin::catalog().unwrap();
    assert!(explain(&catalog, "COL.999").is_none());
    assert!(explain(&catalog, "FOOBAR").is_none());
    assert!(explain(&catalog, "").is_none());
}

#[test]
fn test_explain_known_namespace_without_builtin_rules() {
    // IDX rules come from external index advisors
    let catalog = builtin::catalog().unwrap();
    assert!(explain(&catalog, "IDX").is_none());
}
