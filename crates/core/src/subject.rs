//! Audit subjects - one query plus whatever its parser engines made of it
//!
//! A subject is built once per query and never mutated. Each configured
//! engine gets a chance to parse the text; any engine may fail without
//! invalidating the subject, so checks that only need the raw text still run.

use crate::fingerprint;
use sqlparser::ast::{visit_relations, Statement};
use sqlparser::dialect::{Dialect, GenericDialect, MySqlDialect};
use sqlparser::parser::Parser;
use std::collections::BTreeSet;
use std::ops::ControlFlow;
use thiserror::Error;

/// Statements produced by one successful parse
pub type ParseTree = Vec<Statement>;

/// Failure reported by a parser engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{engine}: {message}")]
pub struct ParseError {
    pub engine: String,
    pub message: String,
}

/// Character set and collation the query is written in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub charset: String,
    pub collation: String,
}

/// A SQL parser that can turn raw text into a [`ParseTree`]
pub trait ParseEngine: Send + Sync {
    /// Engine name recorded alongside its tree (e.g. "mysql")
    fn name(&self) -> &str;

    fn parse(&self, sql: &str, options: &ParseOptions) -> Result<ParseTree, ParseError>;
}

/// Dialects supported by [`SqlParserEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineDialect {
    MySql,
    Generic,
}

/// [`ParseEngine`] backed by `sqlparser`
#[derive(Debug, Clone)]
pub struct SqlParserEngine {
    dialect: EngineDialect,
}

impl SqlParserEngine {
    pub fn mysql() -> Self {
        Self {
            dialect: EngineDialect::MySql,
        }
    }

    pub fn generic() -> Self {
        Self {
            dialect: EngineDialect::Generic,
        }
    }

    /// Engine for a configured name, `None` if the name is unknown
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mysql" => Some(Self::mysql()),
            "generic" => Some(Self::generic()),
            _ => None,
        }
    }

    fn dialect(&self) -> Box<dyn Dialect> {
        match self.dialect {
            EngineDialect::MySql => Box::new(MySqlDialect {}),
            EngineDialect::Generic => Box::new(GenericDialect {}),
        }
    }
}

impl ParseEngine for SqlParserEngine {
    fn name(&self) -> &str {
        match self.dialect {
            EngineDialect::MySql => "mysql",
            EngineDialect::Generic => "generic",
        }
    }

    // sqlparser works on already-decoded text, so charset and collation only
    // matter to engines that re-encode the input.
    fn parse(&self, sql: &str, _options: &ParseOptions) -> Result<ParseTree, ParseError> {
        let dialect = self.dialect();
        Parser::parse_sql(dialect.as_ref(), sql).map_err(|e| ParseError {
            engine: self.name().to_string(),
            message: e.to_string(),
        })
    }
}

/// The engines used when nothing is configured
pub fn default_engines() -> Vec<Box<dyn ParseEngine>> {
    vec![
        Box::new(SqlParserEngine::mysql()),
        Box::new(SqlParserEngine::generic()),
    ]
}

/// Result of running one engine over the subject text
#[derive(Debug, Clone)]
pub struct EngineParse {
    pub engine: String,
    pub tree: Result<ParseTree, ParseError>,
}

/// One query under review
#[derive(Debug, Clone)]
pub struct AuditSubject {
    raw: String,
    options: ParseOptions,
    parses: Vec<EngineParse>,
}

impl AuditSubject {
    /// Parse `sql` with every engine, in order
    pub fn parse(sql: &str, engines: &[Box<dyn ParseEngine>], options: ParseOptions) -> Self {
        let parses = engines
            .iter()
            .map(|engine| {
                let tree = engine.parse(sql, &options);
                if let Err(ref e) = tree {
                    tracing::debug!(engine = engine.name(), error = %e.message, "parse failed");
                }
                EngineParse {
                    engine: engine.name().to_string(),
                    tree,
                }
            })
            .collect();

        Self {
            raw: sql.to_string(),
            options,
            parses,
        }
    }

    /// A subject with no parse attempts, for text-only auditing
    pub fn unparsed(sql: &str) -> Self {
        Self {
            raw: sql.to_string(),
            options: ParseOptions::default(),
            parses: Vec::new(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Every parse attempt, in engine order
    pub fn parses(&self) -> &[EngineParse] {
        &self.parses
    }

    /// Tree produced by the named engine, if it succeeded
    pub fn tree(&self, engine: &str) -> Option<&ParseTree> {
        self.parses
            .iter()
            .find(|p| p.engine == engine)
            .and_then(|p| p.tree.as_ref().ok())
    }

    /// First successful tree in engine order
    pub fn first_tree(&self) -> Option<&ParseTree> {
        self.parses.iter().find_map(|p| p.tree.as_ref().ok())
    }

    /// Parser message when every engine failed.
    ///
    /// `None` when at least one engine succeeded or none were run.
    pub fn parse_failure(&self) -> Option<String> {
        if self.parses.is_empty() || self.first_tree().is_some() {
            return None;
        }
        let messages: Vec<String> = self
            .parses
            .iter()
            .filter_map(|p| p.tree.as_ref().err())
            .map(ToString::to_string)
            .collect();
        Some(messages.join("; "))
    }

    pub fn fingerprint(&self) -> String {
        fingerprint::fingerprint(&self.raw)
    }

    pub fn id(&self) -> String {
        fingerprint::query_id(&self.fingerprint())
    }

    /// Pretty-printed statements from the first successful tree, falling back
    /// to the raw text
    pub fn pretty(&self) -> String {
        match self.first_tree() {
            Some(tree) if !tree.is_empty() => tree
                .iter()
                .map(|stmt| format!("{:#};", stmt))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => self.raw.trim().to_string(),
        }
    }

    /// Relations referenced by the first successful tree, sorted and unique
    pub fn tables(&self) -> Vec<String> {
        let mut tables = BTreeSet::new();
        if let Some(tree) = self.first_tree() {
            for stmt in tree {
                let _ = visit_relations(stmt, |name| {
                    tables.insert(name.to_string());
                    ControlFlow::<()>::Continue(())
                });
            }
        }
        tables.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_by_name() {
        assert_eq!(
            SqlParserEngine::by_name("MySQL").map(|e| e.dialect),
            Some(EngineDialect::MySql)
        );
        assert_eq!(
            SqlParserEngine::by_name(" generic ").map(|e| e.dialect),
            Some(EngineDialect::Generic)
        );
        assert!(SqlParserEngine::by_name("tidb").is_none());
    }
}
