use sqlaudit_core::report::{normalize, partition, render_listing, ListingFormat};
use sqlaudit_core::subject::default_engines;
use sqlaudit_core::{
    builtin, render, score, AuditSubject, IgnoreList, IndexCase, ParseOptions, RenderOptions,
    ReportFormat, SampleMode, Severity, Verdict, VerdictSet,
};

const SQL: &str = "select id, name from film where id = 1";

fn verdict(item: &str, severity: &str, content: &str) -> Verdict {
    Verdict {
        item: item.to_string(),
        severity: Severity::new(severity),
        summary: format!("{} summary", item),
        content: content.to_string(),
        case: format!("{} case", item),
        position: 0,
    }
}

fn set(verdicts: Vec<Verdict>) -> VerdictSet {
    verdicts.into_iter().collect()
}

fn render_set(verdicts: &VerdictSet, format: ReportFormat) -> String {
    let subject = AuditSubject::unparsed(SQL);
    render(
        &subject,
        verdicts,
        score(verdicts),
        format,
        &RenderOptions::default(),
    )
}

fn items(verdicts: &[&Verdict]) -> Vec<String> {
    verdicts.iter().map(|v| v.item.clone()).collect()
}

fn json_set(verdicts: &VerdictSet) -> serde_json::Value {
    serde_json::from_str(&render_set(verdicts, ReportFormat::Json)).unwrap()
}

// ── scenarios ───────────────────────────────────────────────────

#[test]
fn test_clean_query_renders_single_ok_section() {
    let verdicts = VerdictSet::new();
    let doc = render_set(&verdicts, ReportFormat::Markdown);

    assert_eq!(score(&verdicts), 100);
    assert!(doc.contains("Score: ★★★★★ 100"));
    assert_eq!(doc.matches("\n## ").count(), 1);
    assert!(doc.contains("\n## OK\n"));
    assert!(!doc.contains("**Item:**"));
}

#[test]
fn test_two_findings_score_75() {
    let verdicts = set(vec![
        verdict("KEY.002", "L4", "no primary key"),
        verdict("ARG.005", "L1", "IN list"),
    ]);
    let doc = render_set(&verdicts, ReportFormat::Markdown);

    assert_eq!(score(&verdicts), 75);
    assert!(doc.contains("Score: ★★★ 75"));
    let arg = doc.find("## ARG.005 summary").unwrap();
    let key = doc.find("## KEY.002 summary").unwrap();
    assert!(arg < key);
    assert!(doc.contains("* **Item:** ARG.005"));
    assert!(doc.contains("* **Severity:** L4"));
    assert!(!doc.contains("## OK"));
}

#[test]
fn test_execution_failure_first_and_zero() {
    let verdicts = set(vec![
        verdict("ERR.001", "L8", "Table 'sakila.nope' doesn't exist"),
        verdict("ALI.001", "L0", "alias"),
        verdict("IDX.001", "L2", "add index"),
    ]);
    let doc = render_set(&verdicts, ReportFormat::Markdown);

    assert_eq!(score(&verdicts), 0);
    assert!(doc.contains("Score: 0"));
    let failed = doc.find("## Execution failed").unwrap();
    let first_other = doc
        .match_indices("\n## ")
        .map(|(i, _)| i)
        .find(|&i| i + 1 != failed)
        .unwrap();
    assert!(failed < first_other);
    assert!(doc.contains("Table 'sakila.nope' doesn't exist"));
}

#[test]
fn test_json_splits_index_and_heuristic() {
    let verdicts = set(vec![
        verdict("IDX.003", "L2", "index advice"),
        verdict("COL.001", "L1", "select star"),
    ]);
    let json = json_set(&verdicts);

    let index = json["IndexRules"].as_array().unwrap();
    let heuristic = json["HeuristicRules"].as_array().unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index[0]["Item"], "IDX.003");
    assert_eq!(heuristic.len(), 1);
    assert_eq!(heuristic[0]["Item"], "COL.001");
    assert_eq!(json["Explain"].as_array().unwrap().len(), 0);
    assert_eq!(json["Score"], 85);
}

// ── normalization ───────────────────────────────────────────────

#[test]
fn test_ok_removed_alongside_findings() {
    let verdicts = set(vec![builtin::ok_verdict(), verdict("COL.001", "L1", "")]);
    let shown = normalize(&verdicts, &RenderOptions::default());
    assert!(!shown.contains("OK"));
    assert!(shown.contains("COL.001"));
}

#[test]
fn test_hidden_ok_leaves_nothing() {
    let options = RenderOptions {
        ignore: IgnoreList::new(["OK"]),
        ..RenderOptions::default()
    };
    let shown = normalize(&VerdictSet::new(), &options);
    assert!(shown.is_empty());

    let doc = render(
        &AuditSubject::unparsed(SQL),
        &VerdictSet::new(),
        100,
        ReportFormat::Markdown,
        &options,
    );
    assert!(!doc.contains("## OK"));
}

#[test]
fn test_ignored_items_not_rendered() {
    let options = RenderOptions {
        ignore: IgnoreList::new(["COL"]),
        ..RenderOptions::default()
    };
    let verdicts = set(vec![verdict("COL.001", "L1", ""), verdict("ARG.001", "L4", "")]);
    let doc = render(
        &AuditSubject::unparsed(SQL),
        &verdicts,
        score(&verdicts),
        ReportFormat::Lint,
        &options,
    );
    assert_eq!(doc, "ARG.001 ARG.001 summary");
}

// ── partition ───────────────────────────────────────────────────

#[test]
fn test_partition_buckets() {
    let verdicts = set(vec![
        verdict("ERR.000", "L8", "parse error"),
        verdict("ERR.002", "L8", ""),
        verdict("EXP.000", "L0", "plan"),
        verdict("EXP.003", "L2", "filesort"),
        verdict("EXP.001", "L2", "full scan"),
        verdict("PRO.001", "L0", "profile"),
        verdict("TRA.001", "L0", "trace"),
        verdict("IDX.002", "L2", ""),
        verdict("IDX.001", "L2", ""),
        verdict("SUB.001", "L4", ""),
        verdict("ALI.001", "L0", ""),
    ]);
    let buckets = partition(&verdicts);

    assert_eq!(items(&buckets.failures), vec!["ERR.000"]);
    assert_eq!(buckets.explain_header.unwrap().item, "EXP.000");
    assert_eq!(items(&buckets.explain), vec!["EXP.001", "EXP.003"]);
    assert_eq!(items(&buckets.profiling), vec!["PRO.001"]);
    assert_eq!(items(&buckets.trace), vec!["TRA.001"]);
    assert_eq!(items(&buckets.index), vec!["IDX.001", "IDX.002"]);
    assert_eq!(items(&buckets.heuristic), vec!["ALI.001", "SUB.001"]);
    assert_eq!(buckets.effective_score(90), 0);
}

#[test]
fn test_explain_sections() {
    let verdicts = set(vec![
        verdict("EXP.001", "L2", "full scan"),
        verdict("EXP.000", "L0", "| id | select_type |"),
    ]);
    let doc = render_set(&verdicts, ReportFormat::Markdown);

    let header = doc.find("## EXP.000 summary").unwrap();
    let sub = doc.find("### EXP.001 summary").unwrap();
    assert!(header < sub);
    assert!(doc.contains("| id | select_type |"));

    let json = json_set(&verdicts);
    let explain = json["Explain"].as_array().unwrap();
    assert_eq!(explain[0]["Item"], "EXP.000");
    assert_eq!(explain[1]["Item"], "EXP.001");
}

#[test]
fn test_profiling_and_trace_in_json_heuristics() {
    let verdicts = set(vec![
        verdict("TRA.001", "L0", "trace"),
        verdict("PRO.001", "L0", "profile"),
        verdict("COL.001", "L1", ""),
        verdict("ERR.002", "L8", ""),
    ]);
    let json = json_set(&verdicts);
    let items: Vec<&str> = json["HeuristicRules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["Item"].as_str().unwrap())
        .collect();
    assert_eq!(items, vec!["COL.001", "PRO.001", "TRA.001"]);
}

// ── formats ─────────────────────────────────────────────────────

#[test]
fn test_rendering_deterministic() {
    let a = set(vec![
        verdict("SUB.001", "L4", ""),
        verdict("ALI.001", "L0", ""),
        verdict("IDX.001", "L2", ""),
        verdict("CLA.001", "L4", ""),
    ]);
    let b = set(vec![
        verdict("CLA.001", "L4", ""),
        verdict("IDX.001", "L2", ""),
        verdict("ALI.001", "L0", ""),
        verdict("SUB.001", "L4", ""),
    ]);
    for format in ReportFormat::ALL {
        assert_eq!(render_set(&a, format), render_set(&b, format), "{}", format);
        assert_eq!(render_set(&a, format), render_set(&a, format), "{}", format);
    }
}

#[test]
fn test_lint_skips_ok_and_explain() {
    let verdicts = set(vec![
        verdict("EXP.000", "L0", ""),
        verdict("KEY.002", "L4", ""),
        verdict("COL.001", "L1", ""),
    ]);
    assert_eq!(
        render_set(&verdicts, ReportFormat::Lint),
        "COL.001 COL.001 summary\nKEY.002 KEY.002 summary"
    );
    assert_eq!(render_set(&VerdictSet::new(), ReportFormat::Lint), "");
}

#[test]
fn test_text_records() {
    let verdicts = set(vec![verdict("COL.001", "L1", "select star")]);
    let doc = render_set(&verdicts, ReportFormat::Text);
    let subject = AuditSubject::unparsed(SQL);

    assert!(doc.contains(&format!("Query: {}\n", SQL)));
    assert!(doc.contains(&format!("ID: {}\n", subject.id())));
    assert!(doc.contains("Item: COL.001\n"));
    assert!(doc.contains("Severity: L1\n"));
    assert!(doc.contains("Content: select star\n"));
}

#[test]
fn test_dump_extends_text() {
    let verdicts = set(vec![verdict("COL.001", "L1", "select star")]);
    let text = render_set(&verdicts, ReportFormat::Text);
    let dump = render_set(&verdicts, ReportFormat::Dump);
    assert!(dump.starts_with(&text));
    assert!(dump.contains("Verdict {"));
}

#[test]
fn test_format_names() {
    assert_eq!(ReportFormat::parse("JSON"), Some(ReportFormat::Json));
    assert_eq!(ReportFormat::parse("xml"), None);
    assert_eq!(ReportFormat::from_name("markdown"), ReportFormat::Markdown);
    assert_eq!(ReportFormat::from_name("HTML"), ReportFormat::Html);
    assert_eq!(ReportFormat::from_name("xml"), ReportFormat::Dump);
    for format in ReportFormat::ALL {
        assert_eq!(ReportFormat::parse(format.name()), Some(format));
    }
}

#[test]
fn test_html_converts_markdown() {
    let mut v = verdict("COL.001", "L1", "avoid SELECT * here");
    v.summary = "Do not use SELECT *".to_string();
    let doc = render_set(&set(vec![v]), ReportFormat::Html);
    let subject = AuditSubject::unparsed(SQL);

    assert!(doc.contains(&format!("<h1>Query: {}</h1>", subject.id())));
    assert!(doc.contains(&format!("<pre><code class=\"language-sql\">{}\n</code></pre>", SQL)));
    assert!(doc.contains("<h2>Do not use SELECT *</h2>"));
    assert!(doc.contains("<strong>Item:</strong> COL.001"));
    assert!(!doc.contains("## "));
}

#[test]
fn test_html_escapes_query_text() {
    let subject = AuditSubject::unparsed("select a from t where b < 1 and c = '<x>'");
    let doc = render(
        &subject,
        &VerdictSet::new(),
        100,
        ReportFormat::Html,
        &RenderOptions::default(),
    );
    assert!(doc.contains("b &lt; 1 and c = '&lt;x&gt;'"));
    assert!(!doc.contains("<x>"));
}

#[test]
fn test_index_case_bullet_by_default() {
    let mut v = verdict("IDX.001", "L2", "add index");
    v.case = "CREATE TABLE film (id int)".to_string();
    let doc = render_set(&set(vec![v]), ReportFormat::Markdown);
    assert!(doc.contains("* **Case:** CREATE TABLE film (id int)\n"));
}

#[test]
fn test_index_case_as_sql_block() {
    let mut v = verdict("IDX.001", "L2", "add index");
    v.case = "CREATE TABLE `film` (\n  `id` int\n)".to_string();
    let options = RenderOptions {
        index_case: IndexCase::SqlBlock,
        ..RenderOptions::default()
    };
    let doc = render(
        &AuditSubject::unparsed(SQL),
        &set(vec![v, verdict("COL.001", "L1", "")]),
        90,
        ReportFormat::Markdown,
        &options,
    );

    assert!(doc.contains("* **Case:**\n\n```sql\nCREATE TABLE `film` (\n  `id` int\n)\n```\n"));
    // heuristic verdicts carry no case line in either mode
    assert_eq!(doc.matches("* **Case:**").count(), 1);
}

#[test]
fn test_markdown_without_query_omits_header() {
    let doc = render(
        &AuditSubject::unparsed(""),
        &VerdictSet::new(),
        100,
        ReportFormat::Markdown,
        &RenderOptions::default(),
    );
    assert!(!doc.contains("# Query:"));
    assert!(!doc.contains("```sql"));
    assert!(doc.contains("## OK"));
}

#[test]
fn test_markdown_escapes_text() {
    let mut v = verdict("COL.001", "L1", "avoid SELECT * here");
    v.summary = "Do not use SELECT *".to_string();
    let doc = render_set(&set(vec![v]), ReportFormat::Markdown);
    assert!(doc.contains("## Do not use SELECT \\*"));
    assert!(doc.contains("* **Content:** avoid SELECT \\* here"));
}

#[test]
fn test_sample_modes_shape_markdown_block() {
    let subject = AuditSubject::unparsed("SELECT a FROM t WHERE id = 42");
    let render_with = |mode: SampleMode| {
        let options = RenderOptions {
            sample_mode: mode,
            ..RenderOptions::default()
        };
        render(&subject, &VerdictSet::new(), 100, ReportFormat::Markdown, &options)
    };

    let fp = render_with(SampleMode::Fingerprint);
    assert!(fp.contains("```sql\nselect a from t where id = ?\n```"));

    let raw = render_with(SampleMode::Sample);
    assert!(raw.contains("```sql\nSELECT a FROM t WHERE id = 42\n```"));
}

#[test]
fn test_json_sample_is_submitted_query() {
    let subject = AuditSubject::unparsed("SELECT a FROM t WHERE id = 42");
    for mode in [SampleMode::Fingerprint, SampleMode::Sample, SampleMode::Pretty] {
        let options = RenderOptions {
            sample_mode: mode,
            ..RenderOptions::default()
        };
        let doc = render(&subject, &VerdictSet::new(), 100, ReportFormat::Json, &options);
        let json: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(json["Sample"], "SELECT a FROM t WHERE id = 42");
        assert_eq!(json["Fingerprint"], "select a from t where id = ?");
        assert_eq!(json["ID"], subject.id());
    }
}

#[test]
fn test_json_tables_from_parse_tree() {
    let subject = AuditSubject::parse(
        "select f.title from film f join actor a on a.id = f.actor_id",
        &default_engines(),
        ParseOptions::default(),
    );
    let doc = render(
        &subject,
        &VerdictSet::new(),
        100,
        ReportFormat::Json,
        &RenderOptions::default(),
    );
    let json: serde_json::Value = serde_json::from_str(&doc).unwrap();
    assert_eq!(json["Tables"], serde_json::json!(["actor", "film"]));
}

// ── catalog listing ─────────────────────────────────────────────

#[test]
fn test_listing_markdown() {
    let catalog = builtin::catalog().unwrap();
    let doc = render_listing(&catalog, ListingFormat::Markdown);
    assert!(doc.starts_with("# Heuristic rules\n"));
    assert!(doc.contains("* **Item**: COL.001"));
    assert!(!doc.contains("* **Item**: OK\n"));

    let alt = doc.find("* **Item**: ALT.001").unwrap();
    let sub = doc.find("* **Item**: SUB.001").unwrap();
    assert!(alt < sub);
}

#[test]
fn test_listing_json() {
    let catalog = builtin::catalog().unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&render_listing(&catalog, ListingFormat::Json)).unwrap();
    let rules = json.as_array().unwrap();
    assert_eq!(rules.len(), catalog.len() - 1);
    assert!(rules.iter().all(|r| r["Item"] != "OK"));
    assert!(rules.iter().all(|r| r.get("Check").is_none()));
}
