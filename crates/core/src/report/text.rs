//! Plain labeled records, plus the debug dump used for unknown formats

use crate::subject::AuditSubject;
use crate::verdict::VerdictSet;

pub fn render(subject: &AuditSubject, verdicts: &VerdictSet) -> String {
    let query = subject.raw().trim();
    let id = subject.id();
    verdicts
        .sorted()
        .into_iter()
        .map(|v| {
            format!(
                "Query: {}\nID: {}\nItem: {}\nSeverity: {}\nSummary: {}\nContent: {}\n",
                query, id, v.item, v.severity, v.summary, v.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_dump(subject: &AuditSubject, verdicts: &VerdictSet) -> String {
    let mut out = render(subject, verdicts);
    for v in verdicts.sorted() {
        out.push('\n');
        out.push_str(&format!("{:#?}\n", v));
    }
    out
}
