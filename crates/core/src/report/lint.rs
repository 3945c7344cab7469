//! One line per finding, for editor and CI integration

use crate::namespace::{Namespace, OK_ITEM};
use crate::verdict::VerdictSet;

pub fn render(verdicts: &VerdictSet) -> String {
    verdicts
        .sorted()
        .into_iter()
        .filter(|v| v.item != OK_ITEM && Namespace::of_item(&v.item) != Some(Namespace::Exp))
        .map(|v| format!("{} {}", v.item, v.summary))
        .collect::<Vec<_>>()
        .join("\n")
}
