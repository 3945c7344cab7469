//! Query fingerprints and stable query IDs
//!
//! A fingerprint strips comments and literal values and folds case and
//! whitespace, so structurally identical queries share one fingerprint. The
//! ID is a short digest of the fingerprint.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*(?s:.*?)\*/|(?m:(?:--(?:[ \t].*)?|#.*)$)").unwrap());

static STRING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'(?:[^'\\]|\\.|'')*'|"(?:[^"\\]|\\.|"")*""#).unwrap());

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:0x[0-9a-f]+|\d+(?:\.\d+)?(?:e[+-]?\d+)?)\b").unwrap());

static LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(in|values)\s*\(\s*\?(?:\s*,\s*\?)*\s*\)").unwrap());

static VALUES_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"values\(\?\+\)(?:\s*,\s*\(\s*\?(?:\s*,\s*\?)*\s*\))+").unwrap());

static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalized form of `sql` with literals replaced by `?`
pub fn fingerprint(sql: &str) -> String {
    let text = STRING_RE.replace_all(sql, "?");
    let text = COMMENT_RE.replace_all(&text, " ");
    let text = text.to_lowercase();
    let text = NUMBER_RE.replace_all(&text, "?");
    let text = LIST_RE.replace_all(&text, "$1(?+)");
    let text = VALUES_TAIL_RE.replace_all(&text, "values(?+)");
    let text = SPACE_RE.replace_all(&text, " ");
    text.trim().trim_end_matches(';').trim_end().to_string()
}

/// `sql` with string literals emptied and comments blanked, case preserved
pub(crate) fn mask_literals(sql: &str) -> String {
    let text = STRING_RE.replace_all(sql, "''");
    COMMENT_RE.replace_all(&text, " ").into_owned()
}

/// 16 upper-case hex digits derived from the fingerprint
pub fn query_id(fingerprint: &str) -> String {
    let digest = Sha256::digest(fingerprint.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02X}", b)).collect();
    hex[16..32].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_replaced() {
        assert_eq!(
            fingerprint("SELECT * FROM film WHERE id = 10 AND name = 'x'"),
            "select * from film where id = ? and name = ?"
        );
    }

    #[test]
    fn test_identifiers_with_digits_kept() {
        assert_eq!(fingerprint("select c1 from t1"), "select c1 from t1");
    }

    #[test]
    fn test_in_list_collapsed() {
        assert_eq!(
            fingerprint("select a from t where id in (1, 2, 3)"),
            "select a from t where id in(?+)"
        );
    }

    #[test]
    fn test_multi_row_values_collapsed() {
        assert_eq!(
            fingerprint("INSERT INTO t VALUES (1, 'a'), (2, 'b');"),
            "insert into t values(?+)"
        );
    }

    #[test]
    fn test_comments_and_whitespace() {
        assert_eq!(
            fingerprint("select  a /* hint */\nfrom t -- trailing\n"),
            "select a from t"
        );
    }

    #[test]
    fn test_mask_literals_keeps_structure() {
        assert_eq!(
            mask_literals("SELECT a FROM t WHERE b != 'x -- y' # note"),
            "SELECT a FROM t WHERE b != ''  "
        );
    }

    #[test]
    fn test_query_id_stable() {
        let a = query_id(&fingerprint("select a from t where id = 1"));
        let b = query_id(&fingerprint("SELECT a FROM t WHERE id = 42"));
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }
}
