//! SELECT statement builder.
//!
//! [`Request`] owns one FROM table, the selected columns, joins, a WHERE
//! and a HAVING condition, GROUP BY names, and an optional LIMIT, and
//! renders them into a single SQL string in a fixed clause order.
//!
//! Configuration is fluent: each call mutates and returns the same
//! builder. `build` is a pure read-only traversal — idempotent, and the
//! builder may be reconfigured and rebuilt afterwards.
//!
//! # Example
//! ```ignore
//! use sqlforge::{col, request};
//!
//! let sql = request()
//!     .table("payment")
//!     .select([col("staff_id"), col("amount").sum()])
//!     .group_by(["staff_id"])
//!     .filter(col("amount").gt(0.99))
//!     .build();
//! ```

use std::collections::HashMap;

use crate::col::{Col, col};
use crate::condition::Condition;
use crate::error::{QueryError, QueryResult};
use crate::table::{JoinType, Table};

/// Join target: an explicit condition, one shared column name, or a chain
/// of column names implying an equi-join.
#[derive(Debug, Clone)]
pub enum JoinOn {
    /// Explicit ON condition, attached as-is
    Condition(Condition),
    /// Single shared column name; the equi-join condition is synthesized
    Column(String),
    /// Two or more shared column names, AND-chained in input order
    Columns(Vec<String>),
}

impl From<Condition> for JoinOn {
    fn from(cond: Condition) -> Self {
        JoinOn::Condition(cond)
    }
}

impl From<&str> for JoinOn {
    fn from(name: &str) -> Self {
        JoinOn::Column(name.to_string())
    }
}

impl From<String> for JoinOn {
    fn from(name: String) -> Self {
        JoinOn::Column(name)
    }
}

impl From<Vec<&str>> for JoinOn {
    fn from(names: Vec<&str>) -> Self {
        JoinOn::Columns(names.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for JoinOn {
    fn from(names: Vec<String>) -> Self {
        JoinOn::Columns(names)
    }
}

/// Rendered form of a join's linking clause.
#[derive(Debug, Clone)]
enum JoinClause {
    On(Condition),
    Using(Vec<String>),
}

#[derive(Debug, Clone)]
struct Join {
    table: Table,
    join_type: JoinType,
    clause: JoinClause,
}

/// SELECT statement builder.
#[derive(Debug, Clone)]
pub struct Request {
    table: Option<Table>,
    selected: Vec<Col>,
    unique: bool,
    joins: Vec<Join>,
    where_cond: Option<Condition>,
    having_cond: Option<Condition>,
    group_by: Vec<String>,
    limit: Option<u64>,
    compact: bool,
    using: bool,
    last_joined: Option<Table>,
    /// Join-column registry: column name -> (reference-side alias, joined-side alias)
    joined_cols: HashMap<String, (String, String)>,
}

/// Create a statement builder with ON-style joins.
pub fn request() -> Request {
    Request::new()
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Create an empty builder. Joins render with `ON` conditions.
    pub fn new() -> Self {
        Self {
            table: None,
            selected: Vec::new(),
            unique: false,
            joins: Vec::new(),
            where_cond: None,
            having_cond: None,
            group_by: Vec::new(),
            limit: None,
            compact: true,
            using: false,
            last_joined: None,
            joined_cols: HashMap::new(),
        }
    }

    /// Create an empty builder whose joins render with `USING (cols)`.
    pub fn new_using() -> Self {
        Self {
            using: true,
            ..Self::new()
        }
    }

    // ==================== Configuration ====================

    /// Set or replace the FROM table.
    pub fn table(mut self, table: impl Into<Table>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Set the selected columns. An empty selection renders `*`.
    pub fn select<I>(mut self, cols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Col>,
    {
        self.selected = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Remove duplicate rows (SELECT DISTINCT).
    pub fn distinct(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Keep only the first `n` rows (LIMIT).
    pub fn head(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Alias for [`Request::head`].
    pub fn limit(self, n: u64) -> Self {
        self.head(n)
    }

    /// Set the GROUP BY column names, in order.
    pub fn group_by<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.group_by = names.into_iter().map(Into::into).collect();
        self
    }

    /// Choose the clause separator: one space (default) or newline.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Filter rows by a condition.
    ///
    /// Routed structurally: a condition whose tree carries an aggregate
    /// function becomes the HAVING clause, anything else the WHERE clause.
    /// A condition mixing aggregate and plain terms is routed entirely to
    /// HAVING.
    pub fn filter(mut self, condition: Condition) -> Self {
        if condition.has_aggregate() {
            self.having_cond = Some(condition);
        } else {
            self.where_cond = Some(condition);
        }
        self
    }

    // ==================== Joins ====================

    /// Join a table.
    ///
    /// In ON mode `on` may be an explicit [`Condition`], a single shared
    /// column name, or a list of at least two column names. Name forms
    /// synthesize equi-join conditions, auto-alias the tables involved,
    /// and record the names in the join-column registry so selected
    /// columns with the same bare name get qualified afterwards.
    ///
    /// In USING mode only name forms are accepted and the join renders
    /// `USING (cols)`.
    pub fn join(
        mut self,
        table: impl Into<Table>,
        on: impl Into<JoinOn>,
        join_type: JoinType,
    ) -> QueryResult<Self> {
        let mut table = table.into();

        let clause = if self.using {
            match on.into() {
                JoinOn::Condition(_) => return Err(QueryError::ConditionInUsingJoin),
                JoinOn::Column(name) => JoinClause::Using(vec![name]),
                JoinOn::Columns(names) => JoinClause::Using(names),
            }
        } else {
            match on.into() {
                // Explicit conditions already carry their qualifiers.
                JoinOn::Condition(cond) => JoinClause::On(cond),
                JoinOn::Column(name) => {
                    table.ensure_alias();
                    if let Some(from) = self.table.as_mut() {
                        from.ensure_alias();
                    }
                    let reference = self
                        .last_joined
                        .as_ref()
                        .or(self.table.as_ref())
                        .map(|t| t.alias_or_name().to_string())
                        .unwrap_or_default();
                    JoinClause::On(self.link_condition(&table, &name, &reference))
                }
                JoinOn::Columns(names) => {
                    if names.len() < 2 {
                        return Err(QueryError::JoinColumnsTooFew(names.len()));
                    }
                    table.ensure_alias();
                    if let Some(from) = self.table.as_mut() {
                        from.ensure_alias();
                    }
                    let reference = self
                        .table
                        .as_ref()
                        .map(|t| t.alias_or_name().to_string())
                        .unwrap_or_default();
                    let mut cond = self.link_condition(&table, &names[0], &reference);
                    for name in &names[1..] {
                        cond = cond.and(self.link_condition(&table, name, &reference));
                    }
                    JoinClause::On(cond)
                }
            }
        };

        self.last_joined = Some(table.clone());
        self.joins.push(Join {
            table,
            join_type,
            clause,
        });
        self.resolve_select_ambiguity();
        Ok(self)
    }

    /// Join with [`JoinType::Inner`].
    pub fn inner_join(self, table: impl Into<Table>, on: impl Into<JoinOn>) -> QueryResult<Self> {
        self.join(table, on, JoinType::Inner)
    }

    /// Join with [`JoinType::Left`].
    pub fn left_join(self, table: impl Into<Table>, on: impl Into<JoinOn>) -> QueryResult<Self> {
        self.join(table, on, JoinType::Left)
    }

    /// Synthesize `(joined.name = reference.name)` and record the column
    /// in the join registry.
    fn link_condition(&mut self, joined: &Table, name: &str, reference_alias: &str) -> Condition {
        let joined_alias = joined.alias_or_name().to_string();
        self.joined_cols.insert(
            name.to_string(),
            (reference_alias.to_string(), joined_alias.clone()),
        );
        col(name)
            .qualify(joined_alias)
            .eq(col(name).qualify(reference_alias))
    }

    /// Qualify selected columns whose bare name became ambiguous through a
    /// join, using the reference-side alias recorded for that name.
    fn resolve_select_ambiguity(&mut self) {
        for selected in &mut self.selected {
            if let Some((reference_alias, _)) = self.joined_cols.get(&selected.name) {
                selected.qualifier = Some(reference_alias.clone());
            }
        }
    }

    // ==================== Rendering ====================

    fn build_select(&self) -> String {
        let cols = if self.selected.is_empty() {
            "*".to_string()
        } else {
            self.selected
                .iter()
                .map(Col::build)
                .collect::<Vec<_>>()
                .join(", ")
        };
        if self.unique {
            format!("SELECT DISTINCT {cols}")
        } else {
            format!("SELECT {cols}")
        }
    }

    fn build_from(&self) -> String {
        match &self.table {
            Some(table) => format!("FROM {}", table.build()),
            None => String::new(),
        }
    }

    fn build_joins(&self) -> Vec<String> {
        let mut parts = Vec::with_capacity(self.joins.len() * 2);
        for join in &self.joins {
            parts.push(format!(
                "{} JOIN {}",
                join.join_type.keyword(),
                join.table.build()
            ));
            match &join.clause {
                JoinClause::On(cond) => parts.push(format!("ON {}", cond.build())),
                JoinClause::Using(cols) => parts.push(format!("USING ({})", cols.join(", "))),
            }
        }
        parts
    }

    fn build_where(&self) -> String {
        match &self.where_cond {
            Some(cond) => format!("WHERE {}", cond.build()),
            None => String::new(),
        }
    }

    fn build_group_by(&self) -> String {
        if self.group_by.is_empty() {
            String::new()
        } else {
            format!("GROUP BY {}", self.group_by.join(", "))
        }
    }

    fn build_having(&self) -> String {
        match &self.having_cond {
            Some(cond) => format!("HAVING {}", cond.build()),
            None => String::new(),
        }
    }

    /// ORDER BY is derived from the ordering flags on selected columns,
    /// in select-list order, as `[qualifier.]name DIRECTION`.
    fn build_order_by(&self) -> String {
        let mut terms = Vec::new();
        for selected in &self.selected {
            if let Some(direction) = selected.ordering {
                let name = match &selected.qualifier {
                    Some(qualifier) => format!("{}.{}", qualifier, selected.name),
                    None => selected.name.clone(),
                };
                terms.push(format!("{} {}", name, direction.keyword()));
            }
        }
        if terms.is_empty() {
            String::new()
        } else {
            format!("ORDER BY {}", terms.join(", "))
        }
    }

    fn build_limit(&self) -> String {
        match self.limit {
            Some(n) => format!("LIMIT {n}"),
            None => String::new(),
        }
    }

    /// Render the statement.
    ///
    /// Clause order is fixed: SELECT, FROM, joins in declaration order,
    /// WHERE, GROUP BY, HAVING, ORDER BY, LIMIT. Clauses with no content
    /// are omitted entirely.
    pub fn build(&self) -> String {
        let mut parts = vec![self.build_select(), self.build_from()];
        parts.extend(self.build_joins());
        parts.push(self.build_where());
        parts.push(self.build_group_by());
        parts.push(self.build_having());
        parts.push(self.build_order_by());
        parts.push(self.build_limit());

        let separator = if self.compact { " " } else { "\n" };
        let sql = parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(separator);

        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %sql, "built SELECT statement");

        sql
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}
