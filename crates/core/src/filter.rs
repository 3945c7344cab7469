//! Rule filter - query block-list and per-item ignore list
//!
//! The block-list gate runs before any check: a blocked query produces no
//! verdicts at all. The ignore gate runs on the resolved verdict set and
//! removes items by prefix.

use crate::namespace::OK_ITEM;
use crate::verdict::VerdictSet;
use regex::Regex;

/// One configured ignore pattern with its `*` removed
#[derive(Debug, Clone, PartialEq, Eq)]
struct IgnorePattern {
    prefix: String,
    /// Written with a trailing `*`: plain prefix match
    wildcard: bool,
}

impl IgnorePattern {
    fn matches(&self, item: &str) -> bool {
        match item.strip_prefix(self.prefix.as_str()) {
            Some(rest) => {
                self.wildcard
                    || self.prefix.contains('.')
                    || rest.is_empty()
                    || rest.starts_with('.')
            }
            None => false,
        }
    }
}

/// Item prefixes whose verdicts are dropped from reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreList {
    patterns: Vec<IgnorePattern>,
    hide_ok: bool,
}

impl IgnoreList {
    /// Build from configured patterns such as `COL`, `COL.*` or `ARG.001`.
    ///
    /// Surrounding `*` and whitespace are trimmed; patterns that end up
    /// empty are dropped. The pattern `OK` hides the OK verdict instead of
    /// acting as a prefix.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for pattern in patterns {
            let raw = pattern.as_ref();
            if raw.trim() == OK_ITEM {
                list.hide_ok = true;
                continue;
            }
            let trimmed = raw.trim_matches(|c: char| c == '*' || c.is_whitespace());
            if !trimmed.is_empty() {
                list.patterns.push(IgnorePattern {
                    prefix: trimmed.to_string(),
                    wildcard: raw.trim_end().ends_with('*'),
                });
            }
        }
        list
    }

    /// Also hide the OK verdict
    pub fn hiding_ok(mut self, hide: bool) -> Self {
        self.hide_ok |= hide;
        self
    }

    pub fn hides_ok(&self) -> bool {
        self.hide_ok
    }

    /// Whether `item` is suppressed. `OK` never is.
    ///
    /// A bare namespace only matches up to the dot, so `COL` covers
    /// `COL.001` but not `COLX.001`; `COL.00` covers `COL.001`..`COL.009`.
    /// A trailing `*` makes any pattern a plain prefix: `C*` covers `CLA.001`.
    pub fn is_ignored(&self, item: &str) -> bool {
        if item == OK_ITEM {
            return false;
        }
        self.patterns.iter().any(|p| p.matches(item))
    }

    /// Drop every ignored verdict
    pub fn apply(&self, verdicts: &mut VerdictSet) {
        if self.patterns.is_empty() {
            return;
        }
        verdicts.retain(|item, _| {
            let keep = !self.is_ignored(item);
            if !keep {
                tracing::debug!(item, "verdict ignored");
            }
            keep
        });
    }

    /// Configured prefixes, `*` removed
    pub fn prefixes(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.prefix.as_str()).collect()
    }
}

struct BlockPattern {
    literal: String,
    regex: Option<Regex>,
}

/// Queries that must not be audited at all
#[derive(Default)]
pub struct BlockList {
    patterns: Vec<BlockPattern>,
}

impl BlockList {
    /// Compile every pattern as a case-insensitive regex. A pattern that
    /// fails to compile is kept for literal comparison only.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let literal = p.as_ref().to_string();
                let regex = match Regex::new(&format!("(?i){}", literal)) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        tracing::warn!(pattern = %literal, error = %e, "invalid block-list regex, using literal match only");
                        None
                    }
                };
                BlockPattern { literal, regex }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_blocked(&self, sql: &str) -> bool {
        self.patterns.iter().any(|p| {
            p.literal == sql || p.regex.as_ref().is_some_and(|re| re.is_match(sql))
        })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl std::fmt::Debug for BlockList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literals: Vec<&str> = self.patterns.iter().map(|p| p.literal.as_str()).collect();
        f.debug_struct("BlockList").field("patterns", &literals).finish()
    }
}

/// Both gates, as configured for one run
#[derive(Debug, Default)]
pub struct RuleFilter {
    pub ignore: IgnoreList,
    pub block: BlockList,
}

impl RuleFilter {
    pub fn new(ignore: IgnoreList, block: BlockList) -> Self {
        Self { ignore, block }
    }

    pub fn is_blocked(&self, sql: &str) -> bool {
        let blocked = self.block.is_blocked(sql);
        if blocked {
            tracing::debug!("query matched block-list, skipping checks");
        }
        blocked
    }
}
