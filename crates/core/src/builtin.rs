//! Built-in rule metadata
//!
//! Rules whose findings come from another analysis layer (execution errors,
//! schema-level advice) are bound to [`checks::EXTERNAL`] and never fire on
//! their own; a caller can register a real check under a different id and
//! rebuild the catalog.

use crate::catalog::{CatalogError, CheckId, RuleCatalog, RuleMetadata};
use crate::checks;
use crate::verdict::{Severity, Verdict};

struct RuleSpec {
    item: &'static str,
    severity: &'static str,
    summary: &'static str,
    content: &'static str,
    case: &'static str,
    check: &'static str,
}

const RULES: &[RuleSpec] = &[
    RuleSpec {
        item: "OK",
        severity: "L0",
        summary: "OK",
        content: "OK",
        case: "OK",
        check: checks::PASS,
    },
    RuleSpec {
        item: "ALI.001",
        severity: "L0",
        summary: "Declare aliases explicitly with AS",
        content: "An explicit alias such as \"tbl AS alias\" reads more clearly than an implicit one such as \"tbl alias\".",
        case: "select name from tbl t1 where id < 1000",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ALI.002",
        severity: "L8",
        summary: "Do not alias the column wildcard '*'",
        content: "\"SELECT tbl.* col1, col2\" aliases the wildcard. The author probably wanted col1, but the last column of tbl gets renamed instead.",
        case: "select tbl.* as c1,c2,c3 from tbl where id < 1000",
        check: checks::STAR_ALIAS,
    },
    RuleSpec {
        item: "ALI.003",
        severity: "L1",
        summary: "Alias is identical to the table or column name",
        content: "An alias equal to the real name of its table or column makes the query harder to read.",
        case: "select name from tbl as tbl where id < 1000",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ALT.001",
        severity: "L4",
        summary: "Changing the table default charset does not convert existing columns",
        content: "ALTER TABLE tbl [DEFAULT] CHARACTER SET only applies to columns added later. Use ALTER TABLE tbl CONVERT TO CHARACTER SET charset_name to convert every column.",
        case: "ALTER TABLE tbl_name CONVERT TO CHARACTER SET charset_name;",
        check: checks::ALTER_CHARSET,
    },
    RuleSpec {
        item: "ALT.002",
        severity: "L2",
        summary: "Merge multiple ALTER requests on the same table",
        content: "Every schema change affects the online service. Merge ALTER requests to reduce the number of operations.",
        case: "ALTER TABLE tbl ADD COLUMN col int, ADD INDEX idx_col (`col`);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ALT.003",
        severity: "L0",
        summary: "Dropping a column is high risk; confirm nothing still depends on it",
        content: "If application code still reads or writes the column, dropping it breaks the application, and restoring a backup loses writes made in between.",
        case: "ALTER TABLE tbl DROP COLUMN col;",
        check: checks::ALTER_DROP_COLUMN,
    },
    RuleSpec {
        item: "ALT.004",
        severity: "L0",
        summary: "Dropping primary or foreign keys is high risk",
        content: "Primary and foreign keys are core integrity constraints. Confirm the impact with a DBA before removing them.",
        case: "ALTER TABLE tbl DROP PRIMARY KEY;",
        check: checks::ALTER_DROP_KEY,
    },
    RuleSpec {
        item: "ARG.001",
        severity: "L4",
        summary: "Avoid leading wildcards in LIKE patterns",
        content: "A pattern such as '%foo' cannot use an index on the column.",
        case: "select c1,c2,c3 from tbl where name like '%foo'",
        check: checks::PREFIX_LIKE,
    },
    RuleSpec {
        item: "ARG.002",
        severity: "L1",
        summary: "LIKE without wildcards",
        content: "A LIKE pattern without wildcards behaves like an equality test and may hide a logic error.",
        case: "select c1,c2,c3 from tbl where name like 'foo'",
        check: checks::EQUAL_LIKE,
    },
    RuleSpec {
        item: "ARG.003",
        severity: "L4",
        summary: "Implicit type conversion in a comparison prevents index use",
        content: "Comparing values of different types forces a conversion that can skip the index, which is costly at high concurrency or large data volumes.",
        case: "SELECT * FROM sakila.film WHERE length >= '60';",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ARG.004",
        severity: "L4",
        summary: "IN (NULL) and NOT IN (NULL) never match",
        content: "A comparison with NULL is never true. Write col IN ('a', 'b') OR col IS NULL instead.",
        case: "SELECT * FROM tb WHERE col IN (NULL);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ARG.005",
        severity: "L1",
        summary: "Use IN with care; long lists cause full table scans",
        content: "Prefer BETWEEN for continuous values. With too many IN values the optimizer may fall back to a full table scan.",
        case: "select id from t where num in(1,2,3)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ARG.006",
        severity: "L1",
        summary: "Avoid testing columns for NULL in WHERE",
        content: "IS NULL and IS NOT NULL can make the engine give up the index and scan the table. Give the column a NOT NULL default such as 0 and compare against that value.",
        case: "select id from t where num is null",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ARG.007",
        severity: "L3",
        summary: "Avoid pattern matching",
        content: "LIKE and REGEXP are slow and can return unexpected matches. A full-text index or a dedicated search engine is usually the better tool; caching repeated searches also helps.",
        case: "select c_id,c2,c3 from tbl where c2 like 'test%'",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ARG.008",
        severity: "L1",
        summary: "Prefer IN over OR on an indexed column",
        content: "An IN list of constants can drive an index search and be sorted to match the index order.",
        case: "SELECT c1,c2,c3 FROM tbl WHERE c1 = 14 OR c1 = 17",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ARG.009",
        severity: "L1",
        summary: "Quoted string has leading or trailing spaces",
        content: "Padding around a VARCHAR value causes subtle logic bugs; some MySQL versions compare 'a' and 'a ' as equal.",
        case: "SELECT ' abc'",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ARG.010",
        severity: "L1",
        summary: "Do not use optimizer hints such as sql_no_cache, force index, ignore key or straight_join",
        content: "Hints pin an execution plan that may stop being correct as the data changes.",
        case: "SELECT * FROM t1 FORCE INDEX (i1) ORDER BY a;",
        check: checks::HINT,
    },
    RuleSpec {
        item: "ARG.011",
        severity: "L3",
        summary: "Avoid negative predicates such as NOT IN / NOT LIKE",
        content: "Negative predicates usually lead to full table scans.",
        case: "select id from t where num not in(1,2,3);",
        check: checks::NEGATIVE_PREDICATE,
    },
    RuleSpec {
        item: "ARG.012",
        severity: "L2",
        summary: "Too many rows in a single INSERT/REPLACE",
        content: "One huge multi-row INSERT or REPLACE performs poorly and can delay replicas. Split the load into batches.",
        case: "INSERT INTO tb (a) VALUES (1), (2)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ARG.013",
        severity: "L0",
        summary: "Full-width quotation marks in DDL",
        content: "The statement contains full-width quotes such as “” or ‘’. This is usually a typo; check that it is intended.",
        case: "CREATE TABLE tb (a varchar(10) default '“”')",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ARG.014",
        severity: "L4",
        summary: "IN list contains a column name",
        content: "A column inside an IN list widens the match, e.g. delete from t where id in (1, 2, id) deletes every row. Check the IN condition carefully.",
        case: "select id from t where id in (1, 2, id)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.001",
        severity: "L4",
        summary: "Outermost SELECT has no WHERE condition",
        content: "Without a WHERE clause the query may read far more rows than expected. For approximate row counts use SHOW TABLE STATUS or EXPLAIN.",
        case: "select id from tbl",
        check: checks::SELECT_WITHOUT_WHERE,
    },
    RuleSpec {
        item: "CLA.002",
        severity: "L3",
        summary: "ORDER BY RAND() is not recommended",
        content: "ORDER BY RAND() sorts the whole result only to discard most of it.",
        case: "select name from tbl where id < 1000 order by rand(number)",
        check: checks::ORDER_BY_RAND,
    },
    RuleSpec {
        item: "CLA.003",
        severity: "L2",
        summary: "Avoid LIMIT with OFFSET for paging",
        content: "Paging with LIMIT and OFFSET is quadratic in the number of pages. Page by remembering the last key seen instead.",
        case: "select c1,c2 from tbl where name = xx order by number limit 1 offset 20",
        check: checks::LIMIT_OFFSET,
    },
    RuleSpec {
        item: "CLA.004",
        severity: "L2",
        summary: "Do not GROUP BY a constant",
        content: "GROUP BY 1 groups by the first selected column. Positional grouping silently changes meaning when the select list is reordered.",
        case: "select col1,col2 from tbl group by 1",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.005",
        severity: "L2",
        summary: "ORDER BY a column pinned to a constant is pointless",
        content: "The WHERE clause already fixes the column, so sorting by it changes nothing and may hint at a logic error.",
        case: "select id from test where id=1 order by id",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.006",
        severity: "L4",
        summary: "GROUP BY or ORDER BY spans several tables",
        content: "Sorting or grouping on columns from different tables forces a temporary table and filesort, which can use a lot of memory and disk.",
        case: "select tb1.col, tb2.col from tb1, tb2 where id=1 group by tb1.col, tb2.col",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.007",
        severity: "L2",
        summary: "ORDER BY mixes sort directions",
        content: "An index can only serve ORDER BY when every expression sorts in the same direction.",
        case: "select c1,c2,c3 from t1 where c1='foo' order by c2 desc, c3 asc",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.008",
        severity: "L2",
        summary: "Add an explicit ORDER BY to GROUP BY",
        content: "MySQL sorts GROUP BY results by the grouped columns. Add ORDER BY NULL when no ordering is needed.",
        case: "select c1,c2,c3 from t1 where c1 = 'foo' group by c2",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.009",
        severity: "L2",
        summary: "ORDER BY on an expression",
        content: "Sorting by an expression or function result needs a temporary table, which gets slow on large result sets without a selective WHERE.",
        case: "select description from film where title ='ACADEMY DINOSAUR' order by length-language_id;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.010",
        severity: "L2",
        summary: "GROUP BY on an expression",
        content: "Grouping by an expression or function result needs a temporary table, which gets slow on large result sets without a selective WHERE.",
        case: "select description from film where title ='ACADEMY DINOSAUR' GROUP BY length-language_id;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.011",
        severity: "L1",
        summary: "Add a comment to the table",
        content: "A table comment documents its purpose for future maintainers.",
        case: "CREATE TABLE `test1` (`ID` bigint(20) NOT NULL AUTO_INCREMENT, PRIMARY KEY (`ID`)) ENGINE=InnoDB",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.012",
        severity: "L2",
        summary: "Split overly complex queries",
        content: "A very long query is hard to read, change and debug, and easily produces an accidental Cartesian product. Break it into several simple queries, generated by code if they are repetitive.",
        case: "A very long query; the example is omitted.",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.013",
        severity: "L3",
        summary: "Avoid HAVING",
        content: "Conditions in HAVING are applied after grouping. Moving them to WHERE lets the optimizer use an index.",
        case: "SELECT s.c_id,count(s.c_id) FROM s where c = test GROUP BY s.c_id HAVING s.c_id <> '1660' AND s.c_id <> '2' order by s.c_id",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "CLA.014",
        severity: "L2",
        summary: "Use TRUNCATE instead of DELETE to empty a table",
        content: "Deleting every row with DELETE is slower than TRUNCATE.",
        case: "delete from tbl",
        check: checks::DELETE_WITHOUT_WHERE,
    },
    RuleSpec {
        item: "CLA.015",
        severity: "L4",
        summary: "UPDATE has no WHERE condition",
        content: "An UPDATE without WHERE rewrites every row of the table.",
        case: "update tbl set col = 1",
        check: checks::UPDATE_WITHOUT_WHERE,
    },
    RuleSpec {
        item: "CLA.016",
        severity: "L2",
        summary: "Do not UPDATE the primary key",
        content: "The primary key identifies the row. Updating it often disturbs index statistics and hurts normal queries.",
        case: "update tbl set col=1",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.001",
        severity: "L1",
        summary: "Do not use SELECT *",
        content: "When the table structure changes, SELECT * changes what the query returns and may return more data than needed.",
        case: "select * from tbl where id = 1",
        check: checks::SELECT_STAR,
    },
    RuleSpec {
        item: "COL.002",
        severity: "L2",
        summary: "INSERT/REPLACE without a column list",
        content: "Without explicit columns the statement changes meaning when the table changes. Write INSERT INTO tbl(col1, col2) VALUES ... instead.",
        case: "insert into tbl values(1, 'name')",
        check: checks::INSERT_WITHOUT_COLUMNS,
    },
    RuleSpec {
        item: "COL.003",
        severity: "L2",
        summary: "Make auto-increment ids unsigned",
        content: "An AUTO_INCREMENT id never goes negative; declaring it UNSIGNED doubles its range.",
        case: "create table test(`id` int(11) NOT NULL AUTO_INCREMENT)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.004",
        severity: "L1",
        summary: "Give the column a default value",
        content: "Columns without a default make online schema changes on large tables harder. When altering a column, keep its existing default.",
        case: "CREATE TABLE tbl (col int) ENGINE=InnoDB;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.005",
        severity: "L1",
        summary: "Column has no comment",
        content: "A comment on every column documents its meaning.",
        case: "CREATE TABLE tbl (col int) ENGINE=InnoDB;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.006",
        severity: "L3",
        summary: "Table has too many columns",
        content: "The table defines more columns than the configured limit.",
        case: "CREATE TABLE tbl (cols ....);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.007",
        severity: "L3",
        summary: "Table has too many TEXT/BLOB columns",
        content: "The table defines more TEXT or BLOB columns than the configured limit.",
        case: "CREATE TABLE tbl (cols ....);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.008",
        severity: "L1",
        summary: "Prefer VARCHAR to CHAR and VARBINARY to BINARY",
        content: "Variable-length columns take less space, and searching a smaller field is faster.",
        case: "create table t1(id int,name char(20),last_time date)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.009",
        severity: "L2",
        summary: "Use exact numeric types",
        content: "FLOAT, REAL and DOUBLE accumulate rounding errors in sums. Use NUMERIC or DECIMAL, which store exactly the declared precision.",
        case: "CREATE TABLE tab2 (p_id BIGINT UNSIGNED NOT NULL,a_id BIGINT UNSIGNED NOT NULL,hours float not null,PRIMARY KEY (p_id, a_id))",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.010",
        severity: "L2",
        summary: "Avoid ENUM/BIT/SET column types",
        content: "ENUM stores ordinals, so sorting follows definition order rather than the string value, and changing the value list requires a schema change.",
        case: "create table tab1(status ENUM('new','in progress','fixed'))",
        check: checks::ENUM_TYPE,
    },
    RuleSpec {
        item: "COL.011",
        severity: "L0",
        summary: "Use NULL for missing values and NOT NULL only when a value must exist",
        content: "NULL differs from 0, from the empty string and from FALSE; it propagates through arithmetic and concatenation and makes boolean logic three-valued. Declare NOT NULL when every row must carry a meaningful value.",
        case: "select c1,c2,c3 from tbl where c4 is null or c4 <> 1",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.012",
        severity: "L5",
        summary: "Do not declare TEXT, BLOB or JSON columns NOT NULL",
        content: "These types cannot have a non-NULL default, so NOT NULL makes any insert that omits the column fail.",
        case: "CREATE TABLE `tb`(`c` longblob NOT NULL);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.013",
        severity: "L4",
        summary: "Questionable TIMESTAMP default",
        content: "Give TIMESTAMP columns a default, and avoid 0 or '0000-00-00 00:00:00'.",
        case: "CREATE TABLE tbl( `id` bigint not null, `create_time` timestamp);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.014",
        severity: "L5",
        summary: "Column declares its own character set",
        content: "Columns should inherit the table character set instead of setting one individually.",
        case: "CREATE TABLE `tb2` (`id` int(11) DEFAULT NULL, `col` char(10) CHARACTER SET utf8 DEFAULT NULL)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.015",
        severity: "L4",
        summary: "TEXT, BLOB and JSON columns cannot have a non-NULL default",
        content: "MySQL rejects non-NULL defaults on these types.",
        case: "CREATE TABLE `tbl` (`c` blob DEFAULT NULL);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.016",
        severity: "L1",
        summary: "Declare integers as INT(10) or BIGINT(20)",
        content: "The M in INT(M) is only a display width and does not change storage; newer MySQL versions deprecate it.",
        case: "CREATE TABLE tab (a INT(1));",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.017",
        severity: "L2",
        summary: "VARCHAR length is too long",
        content: "Very long VARCHAR columns belong in a TEXT column kept in a separate table keyed by the primary key, so they do not slow down other indexes.",
        case: "CREATE TABLE tab (a varchar(3500));",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.018",
        severity: "L9",
        summary: "Table uses a disallowed column type",
        content: "The table definition uses a column type that the configuration forbids.",
        case: "CREATE TABLE tab (a BOOLEAN);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "COL.019",
        severity: "L1",
        summary: "Avoid sub-second time precision",
        content: "Fractional-second time types take more space and need MySQL 5.6.4 or later.",
        case: "CREATE TABLE t1 (t TIME(3), dt DATETIME(6));",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "DIS.001",
        severity: "L1",
        summary: "Remove unnecessary DISTINCT conditions",
        content: "Many DISTINCT conditions are a sign of an overly complex query. DISTINCT has no effect when the primary key is part of the result.",
        case: "SELECT DISTINCT c.c_id, count(DISTINCT c.c_name) FROM (select distinct id, name from B) as e",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "DIS.002",
        severity: "L3",
        summary: "COUNT(DISTINCT) over several columns may surprise",
        content: "COUNT(DISTINCT col, col2) skips every row where any listed column is NULL, so it can return 0 even when the other column varies.",
        case: "SELECT COUNT(DISTINCT col, col2) FROM tbl;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "DIS.003",
        severity: "L3",
        summary: "DISTINCT * is redundant on a table with a primary key",
        content: "Rows are already unique when the table has a primary key, so DISTINCT over all columns changes nothing.",
        case: "SELECT DISTINCT * FROM film;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ERR.000",
        severity: "L8",
        summary: "SQL could not be parsed",
        content: "",
        case: "select * from",
        check: checks::PARSE_FAILURE,
    },
    RuleSpec {
        item: "ERR.001",
        severity: "L8",
        summary: "SQL execution failed",
        content: "",
        case: "select * from tbl_not_exists",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "ERR.002",
        severity: "L8",
        summary: "EXPLAIN failed",
        content: "",
        case: "explain select * from tbl_not_exists",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "FUN.001",
        severity: "L2",
        summary: "Avoid functions or operators on columns in WHERE conditions",
        content: "A function applied to an indexed column prevents index use. Keep the bare column on the left of the comparison.",
        case: "select id from t where substring(name,1,3) = 'abc'",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "FUN.002",
        severity: "L1",
        summary: "COUNT(*) is slow with a WHERE clause or outside MyISAM",
        content: "Only MyISAM keeps an exact row count. Elsewhere COUNT(*) scans many rows; when an estimate is enough, the row count from EXPLAIN is much cheaper.",
        case: "SELECT c3, COUNT(*) AS accounts FROM tab where c2 < 10000 GROUP BY c3 ORDER BY num",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "FUN.003",
        severity: "L3",
        summary: "String concatenation over nullable columns",
        content: "Concatenating a NULL column makes the whole expression NULL. Wrap nullable parts in COALESCE().",
        case: "select c1 || coalesce(' ' || c2 || ' ', '') || c3 as c from tbl",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "FUN.004",
        severity: "L4",
        summary: "Do not use SYSDATE()",
        content: "SYSDATE() can make primary and replica data diverge. Use NOW() instead.",
        case: "SELECT SYSDATE();",
        check: checks::SYSDATE,
    },
    RuleSpec {
        item: "FUN.005",
        severity: "L1",
        summary: "Use COUNT(*) rather than COUNT(col) or COUNT(constant)",
        content: "COUNT(*) is the standard row count and does not depend on column values or NULLs.",
        case: "SELECT COUNT(1) FROM tbl;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "FUN.006",
        severity: "L1",
        summary: "SUM(col) can return NULL",
        content: "When every value is NULL, COUNT(col) returns 0 but SUM(col) returns NULL. Guard it, e.g. IF(ISNULL(SUM(col)), 0, SUM(col)).",
        case: "SELECT SUM(COL) FROM tbl;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "FUN.007",
        severity: "L1",
        summary: "Avoid triggers",
        content: "Triggers run without feedback or logging, hide real execution steps and cannot be switched off temporarily during migrations.",
        case: "CREATE TRIGGER t1 AFTER INSERT ON work FOR EACH ROW INSERT INTO time VALUES(NOW());",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "FUN.008",
        severity: "L1",
        summary: "Avoid stored procedures",
        content: "Stored procedures have no version control, are hard to upgrade alongside the application and are hard to port.",
        case: "CREATE PROCEDURE simpleproc (OUT param1 INT);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "FUN.009",
        severity: "L1",
        summary: "Avoid user-defined functions",
        content: "User-defined functions are not recommended.",
        case: "CREATE FUNCTION hello (s CHAR(20));",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "GRP.001",
        severity: "L2",
        summary: "GROUP BY on a column already fixed by an equality predicate",
        content: "Grouping by a column constrained to one value in WHERE does nothing useful.",
        case: "select film_id, title from film where release_year = '2006' group by release_year",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "JOI.001",
        severity: "L2",
        summary: "JOIN mixes comma and ANSI syntax",
        content: "Mixing comma joins with JOIN ... ON is hard to read, and join precedence differs between MySQL versions.",
        case: "select c1,c2,c3 from t1,t2 join t3 on t1.c1=t2.c1,t1.c3=t3,c1 where id>1000",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "JOI.002",
        severity: "L4",
        summary: "The same table is joined twice",
        content: "A table that appears more than once in FROM can usually be read once.",
        case: "select tb1.col from (tb1, tb2) join tb2 on tb1.id = tb.id where tb1.id = 1",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "JOI.003",
        severity: "L4",
        summary: "OUTER JOIN degraded to INNER JOIN",
        content: "A WHERE condition on the outer table rejects the NULL rows an OUTER JOIN produces, which silently turns it into an inner join.",
        case: "select c1,c2,c3 from t1 left outer join t2 using(c1) where t1.c2=2 and t2.c3=4",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "JOI.004",
        severity: "L4",
        summary: "Avoid exclusive JOIN",
        content: "A LEFT OUTER JOIN whose WHERE only tests a right-table column for NULL may be testing the wrong column; the join key is usually meant.",
        case: "select c1,c2,c3 from t1 left outer join t2 on t1.c1=t2.c1 where t2.c2 is null",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "JOI.005",
        severity: "L2",
        summary: "Reduce the number of joins",
        content: "Many joins are a sign of an overly complex query. Consider splitting it into simpler queries.",
        case: "select bp1.p_id, b1.d_d as l, b1.b_id from b1 join bp1 on (b1.b_id = bp1.b_id) left outer join (b1 as b2 join bp2 on (b2.b_id = bp2.b_id)) on (bp1.p_id = bp2.p_id) join bp21 on (b1.b_id = bp1.b_id) join bp31 on (b1.b_id = bp1.b_id) join bp41 on (b1.b_id = bp1.b_id) where b2.b_id = 0",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "JOI.006",
        severity: "L4",
        summary: "Rewrite nested subqueries as joins",
        content: "A subquery that returns at most one row, or that reads several tables in FROM, can usually be flattened into a join that optimizes better.",
        case: "SELECT s,p,d FROM tbl WHERE p.p_id = (SELECT s.p_id FROM tbl WHERE s.c_id = 100996 AND s.q = 1)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "JOI.007",
        severity: "L4",
        summary: "Avoid multi-table DELETE and UPDATE",
        content: "Change one table per statement instead of combining several tables in one DELETE or UPDATE.",
        case: "UPDATE users u LEFT JOIN hobby h ON u.id = h.uid SET u.name = 'pianoboy' WHERE h.hobby = 'piano';",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "JOI.008",
        severity: "L4",
        summary: "Avoid cross-database joins",
        content: "A join across databases couples two subsystems and usually points at a schema design problem.",
        case: "SELECT s,p,d FROM db1.tbl JOIN db2.tbl2 ON tbl.id = tbl2.id",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KEY.001",
        severity: "L2",
        summary: "Use an auto-increment column as the primary key",
        content: "With a composite auto-increment primary key, put the auto-increment column first.",
        case: "create table test(`id` int(11) NOT NULL PRIMARY KEY (`id`))",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KEY.002",
        severity: "L4",
        summary: "No primary or unique key; online schema changes are impossible",
        content: "Online schema change tools need a primary or unique key.",
        case: "create table test(col varchar(5000))",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KEY.003",
        severity: "L4",
        summary: "Avoid self-referencing foreign keys",
        content: "A foreign key between two columns of the same table models a tree that needs one join per level. A closure table, path enumeration or nested sets are easier to query.",
        case: "CREATE TABLE tab2 (p_id BIGINT UNSIGNED NOT NULL,a_id BIGINT UNSIGNED NOT NULL,PRIMARY KEY (p_id, a_id),FOREIGN KEY (p_id) REFERENCES tab1(p_id),FOREIGN KEY (a_id) REFERENCES tab3(a_id))",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KEY.004",
        severity: "L0",
        summary: "Keep composite index order aligned with queries",
        content: "A composite index only helps when queries use its columns in the same order.",
        case: "create index idx1 on tbl (last_name,first_name)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KEY.005",
        severity: "L2",
        summary: "Table has too many indexes",
        content: "The table defines more indexes than the configured limit.",
        case: "CREATE TABLE tbl (a int, b int, c int, KEY idx_a (`a`),KEY idx_b(`b`),KEY idx_c(`c`));",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KEY.006",
        severity: "L4",
        summary: "Primary key has too many columns",
        content: "The primary key spans more columns than the configured limit.",
        case: "CREATE TABLE tbl (a int, b int, c int, PRIMARY KEY(`a`,`b`,`c`));",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KEY.007",
        severity: "L4",
        summary: "Missing primary key or non-integer primary key",
        content: "Declare a primary key of type INT UNSIGNED or BIGINT UNSIGNED.",
        case: "CREATE TABLE tbl (a int);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KEY.008",
        severity: "L4",
        summary: "ORDER BY with mixed directions may not use an index",
        content: "Before MySQL 8.0 an index cannot serve ORDER BY columns sorted in different directions.",
        case: "SELECT * FROM tbl ORDER BY a DESC, b ASC;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KEY.009",
        severity: "L0",
        summary: "Check data uniqueness before adding a unique index",
        content: "If existing rows are not unique, an online schema change may silently drop the duplicates.",
        case: "CREATE UNIQUE INDEX part_of_name ON customer (name(10));",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KEY.010",
        severity: "L0",
        summary: "Full-text indexes are not a silver bullet",
        content: "Full-text indexes speed up fuzzy search, but query rate and concurrency still need limits, and parameters such as ft_min_word_len and ngram_token_size need tuning.",
        case: "CREATE TABLE `tb` (`id` int(10) unsigned NOT NULL AUTO_INCREMENT, `ip` varchar(255) NOT NULL DEFAULT '', PRIMARY KEY (`id`), FULLTEXT KEY `ip` (`ip`)) ENGINE=InnoDB;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KWR.001",
        severity: "L2",
        summary: "SQL_CALC_FOUND_ROWS is inefficient",
        content: "SQL_CALC_FOUND_ROWS does not scale. Count rows another way, for example by paging without a total.",
        case: "select SQL_CALC_FOUND_ROWS col from tbl where id > 1000",
        check: checks::CALC_FOUND_ROWS,
    },
    RuleSpec {
        item: "KWR.002",
        severity: "L2",
        summary: "Do not use MySQL keywords as table or column names",
        content: "Keyword names must be quoted everywhere; a missed quote makes the statement fail.",
        case: "CREATE TABLE tbl (`select` int)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KWR.003",
        severity: "L1",
        summary: "Do not use plural table or column names",
        content: "A table name describes the entity it stores, not how many there are.",
        case: "CREATE TABLE tbl (`books` int)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KWR.004",
        severity: "L1",
        summary: "Do not use multi-byte characters in names",
        content: "Name databases, tables, columns and aliases with ASCII letters, digits and underscores.",
        case: "select col as 列 from tb",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "KWR.005",
        severity: "L1",
        summary: "Query contains invisible unicode characters",
        content: "Some editors insert invisible characters such as non-breaking or zero-width spaces. `cat -A file.sql` reveals them.",
        case: "update tb set status = 1 where id = 1;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "LCK.001",
        severity: "L3",
        summary: "INSERT INTO ... SELECT takes coarse locks",
        content: "INSERT INTO ... SELECT locks the rows it reads; run it with care.",
        case: "INSERT INTO tbl SELECT * FROM tbl2;",
        check: checks::INSERT_SELECT,
    },
    RuleSpec {
        item: "LCK.002",
        severity: "L3",
        summary: "Use INSERT ... ON DUPLICATE KEY UPDATE with care",
        content: "With an auto-increment primary key this burns through ids quickly and can overflow the key; in rare cases replicas diverge.",
        case: "INSERT INTO t1(a,b,c) VALUES (1,2,3) ON DUPLICATE KEY UPDATE c=c+1;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "LIT.001",
        severity: "L2",
        summary: "IP address stored as a string",
        content: "A literal that looks like an IP address but is not passed to INET_ATON() suggests the column stores text. Integers are more compact and faster.",
        case: "insert into tbl (IP,name) values('10.20.306.122','test')",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "LIT.002",
        severity: "L4",
        summary: "Unquoted date or time literal",
        content: "WHERE col < 2010-02-12 is valid SQL but evaluates as col < 1996. Quote date and time literals.",
        case: "select col1,col2 from tbl where time < 2018-01-10",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "LIT.003",
        severity: "L3",
        summary: "Column stores a list of related values",
        content: "Keeping ids as a delimited list in a VARCHAR or TEXT column needs pattern matching to query and cannot be validated. Store one value per row in an intersection table.",
        case: "select c1,c2,c3,c4 from tab1 where col_id REGEXP '[[:<:]]12[[:>:]]'",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "LIT.004",
        severity: "L1",
        summary: "End statements with a semicolon or the configured delimiter",
        content: "Commands such as USE and SHOW DATABASES also need a terminating semicolon or DELIMITER.",
        case: "USE db",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "RES.001",
        severity: "L4",
        summary: "Non-deterministic GROUP BY",
        content: "A selected column that is neither aggregated nor grouped returns an arbitrary value from each group.",
        case: "select c1,c2,c3 from t1 where c2='foo' group by c2",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "RES.002",
        severity: "L4",
        summary: "LIMIT without ORDER BY",
        content: "Without ORDER BY the rows LIMIT returns depend on the execution plan.",
        case: "select col1,col2 from tbl where name = xx limit 10",
        check: checks::LIMIT_WITHOUT_ORDER,
    },
    RuleSpec {
        item: "RES.003",
        severity: "L4",
        summary: "UPDATE/DELETE with LIMIT",
        content: "UPDATE/DELETE with LIMIT is non-deterministic and can break replication consistency.",
        case: "UPDATE film SET length = 120 WHERE title = 'abc' LIMIT 1;",
        check: checks::WRITE_WITH_LIMIT,
    },
    RuleSpec {
        item: "RES.004",
        severity: "L4",
        summary: "UPDATE or DELETE with ORDER BY",
        content: "Do not sort rows in an UPDATE or DELETE.",
        case: "UPDATE film SET length = 120 WHERE title = 'abc' ORDER BY title",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "RES.005",
        severity: "L4",
        summary: "UPDATE assignment joined with AND",
        content: "Separate assignments in SET with commas. col = 1 and cl = 2 assigns a boolean to col and corrupts the data.",
        case: "update tbl set col = 1 and cl = 2 where col=3;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "RES.006",
        severity: "L4",
        summary: "Comparison is never true",
        content: "The condition can never hold, so the WHERE clause matches nothing.",
        case: "select * from tbl where 1 != 1;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "RES.007",
        severity: "L4",
        summary: "Comparison is always true",
        content: "The condition always holds, so the WHERE clause filters nothing and the whole table is read.",
        case: "select * from tbl where 1 = 1;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "RES.008",
        severity: "L2",
        summary: "Avoid LOAD DATA and SELECT ... INTO OUTFILE",
        content: "INTO OUTFILE needs the FILE privilege, a security risk. LOAD DATA imports quickly but can lag replicas badly.",
        case: "LOAD DATA INFILE 'data.txt' INTO TABLE db2.my_table;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "RES.009",
        severity: "L2",
        summary: "Chained comparison",
        content: "col = col = 'abc' is probably a typo for col = 'abc'. If intended, write col = col AND col = 'abc'.",
        case: "SELECT * FROM tbl WHERE col = col = 'abc'",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "RES.010",
        severity: "L2",
        summary: "ON UPDATE CURRENT_TIMESTAMP column should not carry business logic",
        content: "Such a column changes whenever any other column of the row is updated, including bulk fixes that were not meant to touch it.",
        case: "CREATE TABLE category (category_id TINYINT UNSIGNED NOT NULL AUTO_INCREMENT, name VARCHAR(25) NOT NULL, last_update TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP, PRIMARY KEY (category_id))",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "RES.011",
        severity: "L2",
        summary: "Updated table has an ON UPDATE CURRENT_TIMESTAMP column",
        content: "That column will change too. To keep it, assign it to itself: UPDATE category SET name = 'ActioN', last_update = last_update WHERE category_id = 1",
        case: "UPDATE category SET name='ActioN', last_update=last_update WHERE category_id=1",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "SEC.001",
        severity: "L0",
        summary: "Use TRUNCATE with care",
        content: "TRUNCATE cannot report how many rows it removed and resets AUTO_INCREMENT.",
        case: "TRUNCATE TABLE tbl_name",
        check: checks::TRUNCATE,
    },
    RuleSpec {
        item: "SEC.002",
        severity: "L0",
        summary: "Do not store passwords in plain text",
        content: "A plain-text password can be read from the table, the network or the query log. Hash it with a salted one-way function in the application and only send the hash.",
        case: "create table test(id int,name varchar(20) not null,password varchar(200)not null)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "SEC.003",
        severity: "L0",
        summary: "Back up data before DELETE/DROP/TRUNCATE",
        content: "High-risk operations need a backup first.",
        case: "delete from table where col = 'condition'",
        check: checks::DESTRUCTIVE,
    },
    RuleSpec {
        item: "SEC.004",
        severity: "L0",
        summary: "Function commonly used in SQL injection",
        content: "SLEEP(), BENCHMARK(), GET_LOCK() and RELEASE_LOCK() typically show up in injection payloads and hurt database performance.",
        case: "SELECT BENCHMARK(10, RAND())",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "STA.001",
        severity: "L0",
        summary: "'!=' is a non-standard operator",
        content: "\"<>\" is the standard SQL inequality operator.",
        case: "select col1,col2 from tbl where type != 0",
        check: checks::NOT_EQUAL,
    },
    RuleSpec {
        item: "STA.002",
        severity: "L1",
        summary: "No space after the dot in qualified names",
        content: "db.table and table.column are valid with a space after the dot, but harder to read.",
        case: "select col from sakila. film",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "STA.003",
        severity: "L1",
        summary: "Index name does not follow the naming convention",
        content: "Prefix secondary indexes with idx_ and unique indexes with uk_.",
        case: "select col from now where type!=0",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "STA.004",
        severity: "L1",
        summary: "Names should only use letters, digits and underscores",
        content: "Start names with a letter or underscore, keep one letter case, and avoid consecutive underscores.",
        case: "CREATE TABLE `abc` (a int);",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "SUB.001",
        severity: "L4",
        summary: "MySQL optimizes subqueries poorly",
        content: "A dependent subquery runs once per row of the outer query. Rewrite it as a JOIN or LEFT OUTER JOIN.",
        case: "select col1,col2,col3 from table1 where col2 in(select col from table2)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "SUB.002",
        severity: "L2",
        summary: "Use UNION ALL instead of UNION when duplicates do not matter",
        content: "UNION removes duplicates, which UNION ALL does not need to do.",
        case: "select id from t1 union select id from t2",
        check: checks::UNION_DISTINCT,
    },
    RuleSpec {
        item: "SUB.003",
        severity: "L3",
        summary: "Consider EXISTS instead of DISTINCT with a join",
        content: "DISTINCT removes duplicates after sorting all rows. An EXISTS subquery avoids producing them in the first place.",
        case: "SELECT DISTINCT c.c_id, c.c_name FROM c,e WHERE e.c_id = c.c_id",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "SUB.004",
        severity: "L3",
        summary: "Subqueries nested too deeply",
        content: "MySQL runs each subquery as a dependent query per outer row, a common cause of severe slowdowns.",
        case: "SELECT * from tb where id in (select id from (select id from tb))",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "SUB.005",
        severity: "L8",
        summary: "LIMIT is not supported inside IN/ALL/ANY/SOME subqueries",
        content: "MySQL rejects LIMIT in a subquery used with IN, ALL, ANY or SOME.",
        case: "SELECT * FROM staff WHERE name IN (SELECT NAME FROM customer ORDER BY name LIMIT 1)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "SUB.006",
        severity: "L2",
        summary: "Avoid functions in subqueries",
        content: "The subquery runs per outer row, and a function in it defeats even semi-join optimization. Rewrite it as an outer join that filters on the join condition.",
        case: "SELECT * FROM staff WHERE name IN (SELECT max(NAME) FROM customer)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "SUB.007",
        severity: "L2",
        summary: "Repeat the outer LIMIT inside UNION branches",
        content: "MySQL cannot push an outer LIMIT into UNION branches, so every branch is materialized in full. Adding the same LIMIT to each branch shrinks the temporary table.",
        case: "(SELECT * FROM tb1 ORDER BY name LIMIT 20) UNION ALL (SELECT * FROM tb2 ORDER BY name LIMIT 20) LIMIT 20;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "TBL.001",
        severity: "L4",
        summary: "Partitioned tables are not recommended",
        content: "Partitioned tables are not recommended.",
        case: "CREATE TABLE trb3(id INT, purchased DATE) PARTITION BY RANGE(YEAR(purchased)) (PARTITION p0 VALUES LESS THAN (1990))",
        check: checks::PARTITION,
    },
    RuleSpec {
        item: "TBL.002",
        severity: "L4",
        summary: "Use an allowed storage engine",
        content: "Create or alter tables with one of the configured storage engines.",
        case: "create table test(`id` int(11) NOT NULL AUTO_INCREMENT)",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "TBL.003",
        severity: "L8",
        summary: "Do not name a table DUAL",
        content: "DUAL is a built-in virtual table and needs no definition.",
        case: "create table dual(id int, primary key (id));",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "TBL.004",
        severity: "L2",
        summary: "Initial AUTO_INCREMENT is not 0",
        content: "A non-zero starting AUTO_INCREMENT leaves gaps in the ids.",
        case: "CREATE TABLE tbl (a int) AUTO_INCREMENT = 10;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "TBL.005",
        severity: "L4",
        summary: "Use an allowed character set",
        content: "Tables may only use one of the configured character sets.",
        case: "CREATE TABLE tbl (a int) DEFAULT CHARSET = latin1;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "TBL.006",
        severity: "L1",
        summary: "Avoid views",
        content: "Views are not recommended.",
        case: "create view v_today (today) AS SELECT CURRENT_DATE;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "TBL.007",
        severity: "L1",
        summary: "Avoid temporary tables",
        content: "Temporary tables are not recommended.",
        case: "CREATE TEMPORARY TABLE `work` (`time` time DEFAULT NULL) ENGINE=InnoDB;",
        check: checks::EXTERNAL,
    },
    RuleSpec {
        item: "TBL.008",
        severity: "L4",
        summary: "Use an allowed collation",
        content: "Tables may only use one of the configured collations.",
        case: "CREATE TABLE tbl (a int) DEFAULT COLLATE = latin1_bin;",
        check: checks::EXTERNAL,
    },
];

/// Metadata for every built-in rule, in declaration order
pub fn rules() -> Vec<RuleMetadata> {
    RULES
        .iter()
        .map(|spec| RuleMetadata {
            item: spec.item.to_string(),
            severity: Severity::new(spec.severity),
            summary: spec.summary.to_string(),
            content: spec.content.to_string(),
            case: spec.case.to_string(),
            position: 0,
            check: CheckId::new(spec.check),
            superseded_by: Vec::new(),
        })
        .collect()
}

/// Catalog of built-in rules bound to the built-in checks
pub fn catalog() -> Result<RuleCatalog, CatalogError> {
    RuleCatalog::build(rules(), &checks::builtin_registry())
}

/// The built-in `OK` sentinel, used when a catalog has none
pub fn ok_verdict() -> Verdict {
    let ok = &RULES[0];
    Verdict {
        item: ok.item.to_string(),
        severity: Severity::new(ok.severity),
        summary: ok.summary.to_string(),
        content: ok.content.to_string(),
        case: ok.case.to_string(),
        position: 0,
    }
}
