//! Configuration file parsing for .sqlaudit.toml

use crate::catalog::RuleCatalog;
use crate::filter::{BlockList, IgnoreList, RuleFilter};
use crate::report::{IndexCase, RenderOptions, SampleMode};
use crate::resolve::ConflictTable;
use crate::subject::{ParseEngine, ParseOptions, SqlParserEngine};
use crate::verdict::Verdict;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// File name looked up by [`AuditConfig::find_and_load`]
pub const CONFIG_FILE: &str = ".sqlaudit.toml";

/// Main configuration structure for .sqlaudit.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub ignore: IgnoreConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub parser: ParserConfig,

    /// Subsumed item → items that make it redundant
    #[serde(default)]
    pub conflicts: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IgnoreConfig {
    /// Rule item prefixes to drop from reports (`COL`, `ARG.001`, `OK`)
    #[serde(default)]
    pub rules: Vec<String>,

    /// Queries never audited: exact text or case-insensitive regex
    #[serde(default)]
    pub blacklist: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default report format
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default)]
    pub sample: SampleMode,

    /// `sql-block` prints index-advice cases as fenced SQL
    #[serde(default)]
    pub index_case: IndexCase,

    /// Never show the OK verdict
    #[serde(default)]
    pub hide_ok: bool,

    /// Exit non-zero when a query scores below this
    #[serde(default)]
    pub min_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_charset")]
    pub charset: String,

    #[serde(default)]
    pub collation: String,

    /// Parser engines, tried in order
    #[serde(default = "default_engines")]
    pub engines: Vec<String>,
}

// Default functions
fn default_format() -> String {
    "markdown".to_string()
}

fn default_charset() -> String {
    "utf8mb4".to_string()
}

fn default_engines() -> Vec<String> {
    vec!["mysql".to_string(), "generic".to_string()]
}

impl Default for AuditConfig {
    fn default() -> Self {
        toml::from_str("").expect("empty TOML should parse to defaults")
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            sample: SampleMode::default(),
            index_case: IndexCase::default(),
            hide_ok: false,
            min_score: 0,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            charset: default_charset(),
            collation: String::new(),
            engines: default_engines(),
        }
    }
}

impl AuditConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AuditConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .sqlaudit.toml from the current directory or ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading config");
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn ignore_list(&self) -> IgnoreList {
        IgnoreList::new(&self.ignore.rules).hiding_ok(self.output.hide_ok)
    }

    pub fn rule_filter(&self) -> RuleFilter {
        RuleFilter::new(self.ignore_list(), BlockList::new(&self.ignore.blacklist))
    }

    /// Catalog declarations plus the `[conflicts]` section
    pub fn conflict_table(&self, catalog: &RuleCatalog) -> ConflictTable {
        let mut table = ConflictTable::from_catalog(catalog);
        table.extend_from(&self.conflicts);
        table
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            charset: self.parser.charset.clone(),
            collation: self.parser.collation.clone(),
        }
    }

    /// Configured engines; unknown names are skipped with a warning
    pub fn engines(&self) -> Vec<Box<dyn ParseEngine>> {
        self.parser
            .engines
            .iter()
            .filter_map(|name| {
                let engine = SqlParserEngine::by_name(name);
                if engine.is_none() {
                    tracing::warn!(engine = %name, "unknown parser engine, skipping");
                }
                engine.map(|e| Box::new(e) as Box<dyn ParseEngine>)
            })
            .collect()
    }

    pub fn render_options(&self, ok: Verdict) -> RenderOptions {
        RenderOptions {
            sample_mode: self.output.sample,
            index_case: self.output.index_case,
            ignore: self.ignore_list(),
            ok,
        }
    }
}
