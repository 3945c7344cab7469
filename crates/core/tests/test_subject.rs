use sqlaudit_core::subject::{default_engines, ParseTree};
use sqlaudit_core::{AuditSubject, ParseEngine, ParseError, ParseOptions, SqlParserEngine};

struct RejectingEngine;

impl ParseEngine for RejectingEngine {
    fn name(&self) -> &str {
        "rejecting"
    }

    fn parse(&self, _sql: &str, _options: &ParseOptions) -> Result<ParseTree, ParseError> {
        Err(ParseError {
            engine: "rejecting".to_string(),
            message: "not supported".to_string(),
        })
    }
}

fn parse(sql: &str) -> AuditSubject {
    AuditSubject::parse(sql, &default_engines(), ParseOptions::default())
}

// ── parsing ─────────────────────────────────────────────────────

#[test]
fn test_parse_with_every_engine() {
    let subject = parse("select * from film");
    assert_eq!(subject.parses().len(), 2);
    assert!(subject.tree("mysql").is_some());
    assert!(subject.tree("generic").is_some());
    assert!(subject.first_tree().is_some());
    assert!(subject.parse_failure().is_none());
}

#[test]
fn test_failure_when_every_engine_fails() {
    let subject = parse("selec * frm film");
    assert!(subject.first_tree().is_none());
    let message = subject.parse_failure().unwrap();
    assert!(message.contains("mysql: "));
    assert!(message.contains("generic: "));
}

#[test]
fn test_one_success_is_enough() {
    let engines: Vec<Box<dyn ParseEngine>> =
        vec![Box::new(RejectingEngine), Box::new(SqlParserEngine::mysql())];
    let subject = AuditSubject::parse("select 1", &engines, ParseOptions::default());

    assert!(subject.tree("rejecting").is_none());
    assert!(subject.tree("mysql").is_some());
    assert!(subject.parse_failure().is_none());
}

#[test]
fn test_custom_engine_failure_message() {
    let engines: Vec<Box<dyn ParseEngine>> = vec![Box::new(RejectingEngine)];
    let subject = AuditSubject::parse("select 1", &engines, ParseOptions::default());
    assert_eq!(subject.parse_failure().unwrap(), "rejecting: not supported");
}

#[test]
fn test_unparsed_subject() {
    let subject = AuditSubject::unparsed("  select 1  ");
    assert!(subject.parses().is_empty());
    assert!(subject.parse_failure().is_none());
    assert_eq!(subject.pretty(), "select 1");
    assert_eq!(subject.raw(), "  select 1  ");
}

#[test]
fn test_options_kept() {
    let options = ParseOptions {
        charset: "latin1".to_string(),
        collation: String::new(),
    };
    let subject = AuditSubject::parse("select 1", &default_engines(), options.clone());
    assert_eq!(subject.options(), &options);
}

// ── derived views ───────────────────────────────────────────────

#[test]
fn test_tables_sorted_unique() {
    let subject = parse(
        "SELECT f.title FROM film f JOIN film_actor fa ON f.film_id = fa.film_id \
         JOIN actor a ON a.actor_id = fa.actor_id WHERE f.film_id IN (SELECT film_id FROM film)",
    );
    assert_eq!(subject.tables(), vec!["actor", "film", "film_actor"]);
}

#[test]
fn test_tables_empty_without_tree() {
    assert!(parse("selec * frm film").tables().is_empty());
}

#[test]
fn test_pretty_from_tree() {
    let pretty = parse("select title from film where film_id = 1").pretty();
    assert!(pretty.contains("film"));
    assert!(pretty.ends_with(';'));
}

#[test]
fn test_pretty_falls_back_to_raw() {
    assert_eq!(parse(" selec * frm film ").pretty(), "selec * frm film");
}

#[test]
fn test_id_stable_across_literals() {
    let a = parse("SELECT * FROM film WHERE film_id = 1");
    let b = parse("select *   from film where film_id = 42");
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.id(), b.id());
    assert_eq!(a.id().len(), 16);
    assert_ne!(a.id(), parse("SELECT * FROM actor WHERE actor_id = 1").id());
}
