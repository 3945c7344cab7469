use sqlaudit_cli::input::{read_input, split_statements};
use tempfile::TempDir;

// ── splitting ───────────────────────────────────────────────────

#[test]
fn test_split_simple() {
    let stmts = split_statements("select 1; select 2;\n select 3");
    assert_eq!(stmts, vec!["select 1", "select 2", "select 3"]);
}

#[test]
fn test_split_ignores_semicolon_in_literals() {
    let stmts = split_statements("select 'a;b'; select \"c;d\"; select `e;f` from t");
    assert_eq!(
        stmts,
        vec!["select 'a;b'", "select \"c;d\"", "select `e;f` from t"]
    );
}

#[test]
fn test_split_doubled_and_escaped_quotes() {
    let stmts = split_statements("select 'it''s; fine'; select 'a\\'; b'; select 3");
    assert_eq!(
        stmts,
        vec!["select 'it''s; fine'", "select 'a\\'; b'", "select 3"]
    );
}

#[test]
fn test_split_ignores_semicolon_in_comments() {
    let text = "select 1 -- first; still comment\n; /* a; b */ select 2 # x; y\n";
    let stmts = split_statements(text);
    assert_eq!(stmts.len(), 2);
    assert!(stmts[0].starts_with("select 1"));
    assert!(stmts[1].contains("select 2"));
}

#[test]
fn test_double_dash_without_space_is_code() {
    let stmts = split_statements("select 1--2; select 3");
    assert_eq!(stmts, vec!["select 1--2", "select 3"]);
}

#[test]
fn test_comment_only_chunks_dropped() {
    let stmts = split_statements("-- header\n;\n/* nothing */;\n  ;select 1;");
    assert_eq!(stmts, vec!["select 1"]);
}

#[test]
fn test_empty_input() {
    assert!(split_statements("").is_empty());
    assert!(split_statements(" ;\n; ").is_empty());
}

// ── reading ─────────────────────────────────────────────────────

#[test]
fn test_read_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("queries.sql");
    std::fs::write(&path, "select 1;").unwrap();
    assert_eq!(read_input(Some(&path)).unwrap(), "select 1;");
}

#[test]
fn test_read_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.sql");
    let err = read_input(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("missing.sql"));
}
