//! Rule namespaces and the report categories they map to
//!
//! Every rule item is either the `OK` sentinel or `NNN.DDD`, where `NNN` names
//! the analysis layer that produced it. The layer decides which report
//! section a verdict lands in.

use std::fmt;

/// The sentinel item reported when nothing else fired
pub const OK_ITEM: &str = "OK";

/// Summary-level execution-plan item, rendered as a header of its section
pub const EXPLAIN_SUMMARY_ITEM: &str = "EXP.000";

/// Namespace of a rule item (the three letters before the dot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    /// Alias (AS)
    Ali,
    /// ALTER statements
    Alt,
    /// Arguments and predicates
    Arg,
    /// Classic anti-patterns
    Cla,
    /// Columns
    Col,
    /// DISTINCT
    Dis,
    /// Parse / execution failures
    Err,
    /// Execution plan (EXPLAIN)
    Exp,
    /// Functions
    Fun,
    /// GROUP BY
    Grp,
    /// Index advisor
    Idx,
    /// Joins
    Joi,
    /// Keys
    Key,
    /// Keywords
    Kwr,
    /// Locking
    Lck,
    /// Literals
    Lit,
    /// Profiling
    Pro,
    /// Result sets
    Res,
    /// Security
    Sec,
    /// Standards and naming
    Sta,
    /// Subqueries
    Sub,
    /// Table definitions
    Tbl,
    /// Optimizer trace
    Tra,
}

impl Namespace {
    pub const ALL: [Namespace; 23] = [
        Namespace::Ali,
        Namespace::Alt,
        Namespace::Arg,
        Namespace::Cla,
        Namespace::Col,
        Namespace::Dis,
        Namespace::Err,
        Namespace::Exp,
        Namespace::Fun,
        Namespace::Grp,
        Namespace::Idx,
        Namespace::Joi,
        Namespace::Key,
        Namespace::Kwr,
        Namespace::Lck,
        Namespace::Lit,
        Namespace::Pro,
        Namespace::Res,
        Namespace::Sec,
        Namespace::Sta,
        Namespace::Sub,
        Namespace::Tbl,
        Namespace::Tra,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::Ali => "ALI",
            Namespace::Alt => "ALT",
            Namespace::Arg => "ARG",
            Namespace::Cla => "CLA",
            Namespace::Col => "COL",
            Namespace::Dis => "DIS",
            Namespace::Err => "ERR",
            Namespace::Exp => "EXP",
            Namespace::Fun => "FUN",
            Namespace::Grp => "GRP",
            Namespace::Idx => "IDX",
            Namespace::Joi => "JOI",
            Namespace::Key => "KEY",
            Namespace::Kwr => "KWR",
            Namespace::Lck => "LCK",
            Namespace::Lit => "LIT",
            Namespace::Pro => "PRO",
            Namespace::Res => "RES",
            Namespace::Sec => "SEC",
            Namespace::Sta => "STA",
            Namespace::Sub => "SUB",
            Namespace::Tbl => "TBL",
            Namespace::Tra => "TRA",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.prefix() == prefix)
    }

    /// Namespace of a full item such as `COL.001`.
    ///
    /// Returns `None` for the `OK` sentinel and for anything that is not
    /// shaped like `NNN.DDD` with a known prefix.
    pub fn of_item(item: &str) -> Option<Self> {
        let (prefix, number) = item.split_once('.')?;
        if number.len() != 3 || !number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::from_prefix(prefix)
    }

    /// Report category this namespace belongs to
    pub fn category(self) -> Category {
        match self {
            Namespace::Err => Category::Failure,
            Namespace::Exp => Category::Explain,
            Namespace::Pro => Category::Profiling,
            Namespace::Tra => Category::Trace,
            Namespace::Idx => Category::Index,
            Namespace::Ali
            | Namespace::Alt
            | Namespace::Arg
            | Namespace::Cla
            | Namespace::Col
            | Namespace::Dis
            | Namespace::Fun
            | Namespace::Grp
            | Namespace::Joi
            | Namespace::Key
            | Namespace::Kwr
            | Namespace::Lck
            | Namespace::Lit
            | Namespace::Res
            | Namespace::Sec
            | Namespace::Sta
            | Namespace::Sub
            | Namespace::Tbl => Category::Heuristic,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Report section a verdict is grouped into, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Failure,
    Explain,
    Profiling,
    Trace,
    Index,
    Heuristic,
}

impl Category {
    /// Category of any item string. `OK` and unrecognised items are heuristic.
    pub fn of_item(item: &str) -> Self {
        Namespace::of_item(item)
            .map(Namespace::category)
            .unwrap_or(Category::Heuristic)
    }
}

/// Whether `item` is a well-formed catalog identifier
pub fn is_valid_item(item: &str) -> bool {
    item == OK_ITEM || Namespace::of_item(item).is_some()
}

/// Whether `item` belongs to the parse/execution failure namespace
pub fn is_failure_item(item: &str) -> bool {
    Namespace::of_item(item) == Some(Namespace::Err)
}
