//! Terminal summary printed on stderr after a review

use colored::{ColoredString, Colorize};
use sqlaudit_core::AuditOutcome;

/// Score colored by band: green from 80, yellow from 60, red below
pub fn format_score(score: u8) -> ColoredString {
    let text = score.to_string();
    match score {
        80..=100 => text.green(),
        60..=79 => text.yellow(),
        _ => text.red(),
    }
}

/// One line per reviewed query: `  <ID>  <score>  <finding count>`
pub fn format_outcome(outcome: &AuditOutcome) -> String {
    if outcome.blocked {
        return format!("  {}  {}", outcome.subject.id(), "blocked".dimmed());
    }
    format!(
        "  {}  {:>3}  {} finding(s)",
        outcome.subject.id(),
        format_score(outcome.score),
        outcome.verdicts.len()
    )
}

pub fn print_summary(outcomes: &[AuditOutcome], min_score: u8) {
    eprintln!();
    for outcome in outcomes {
        eprintln!("{}", format_outcome(outcome));
    }

    let reviewed: Vec<&AuditOutcome> = outcomes.iter().filter(|o| !o.blocked).collect();
    let blocked = outcomes.len() - reviewed.len();
    let lowest = reviewed.iter().map(|o| o.score).min();

    eprintln!("  {}", "\u{2500}".repeat(60).dimmed());
    match lowest {
        Some(lowest) => eprintln!(
            "  {} queries reviewed \u{00b7} {} blocked \u{00b7} lowest score {}",
            reviewed.len(),
            blocked,
            format_score(lowest)
        ),
        None => eprintln!("  {} queries blocked, none reviewed", blocked),
    }
    if lowest.is_some_and(|s| s < min_score) {
        eprintln!(
            "  {}",
            format!("score below minimum of {}", min_score).red().bold()
        );
    }
}
