use sqlaudit_cli::output::terminal::{format_outcome, format_score};
use sqlaudit_core::{builtin, Auditor};
use std::sync::Arc;

#[test]
fn test_format_score_text() {
    colored::control::set_override(false);
    assert_eq!(format_score(95).to_string(), "95");
    assert_eq!(format_score(0).to_string(), "0");
}

#[test]
fn test_format_outcome_line() {
    colored::control::set_override(false);
    let auditor = Auditor::new(Arc::new(builtin::catalog().unwrap()));
    let outcome = auditor.audit("select * from film");

    let line = format_outcome(&outcome);
    assert!(line.contains(&outcome.subject.id()));
    assert!(line.contains(&format!("{} finding(s)", outcome.verdicts.len())));
}
