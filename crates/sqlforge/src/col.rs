//! Column expressions.
//!
//! A [`Col`] names a table column and carries optional rendering metadata:
//! an aggregate function, an output alias, a table qualifier, and a sort
//! direction. Only the first three are rendered inline; the sort direction
//! is consumed by the statement builder's ORDER BY assembly.
//!
//! Two columns compare equal iff their rendered text is equal, and a column
//! also compares against plain strings, so rendered forms can be asserted
//! directly.
//!
//! # Example
//! ```ignore
//! use sqlforge::col;
//!
//! let total = col("amount").alias("total_amount").sum().desc();
//! assert_eq!(total.build(), "SUM(amount) AS total_amount");
//!
//! let cond = col("amount").gt(0.99);
//! assert_eq!(cond.build(), "(amount > 0.99)");
//! ```

use std::fmt;

use crate::condition::{Condition, Operand, Operator};

/// Aggregate function applied to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggFunc {
    /// COUNT(col)
    Count,
    /// SUM(col)
    Sum,
    /// MIN(col)
    Min,
    /// MAX(col)
    Max,
    /// AVG(col)
    Avg,
}

impl AggFunc {
    /// SQL keyword for this aggregate function.
    pub fn keyword(self) -> &'static str {
        match self {
            AggFunc::Count => "COUNT",
            AggFunc::Sum => "SUM",
            AggFunc::Min => "MIN",
            AggFunc::Max => "MAX",
            AggFunc::Avg => "AVG",
        }
    }
}

/// Sort direction, consumed only by ORDER BY assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// ORDER BY ... ASC
    Asc,
    /// ORDER BY ... DESC
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A column expression.
#[derive(Debug, Clone)]
pub struct Col {
    pub(crate) name: String,
    pub(crate) alias: Option<String>,
    pub(crate) aggregate: Option<AggFunc>,
    pub(crate) ordering: Option<SortOrder>,
    pub(crate) qualifier: Option<String>,
}

/// Create a column expression for `name`.
pub fn col(name: impl Into<String>) -> Col {
    Col::new(name)
}

impl Col {
    /// Create a bare column expression.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            aggregate: None,
            ordering: None,
            qualifier: None,
        }
    }

    // ==================== Configuration ====================

    /// Rename the column in the output (` AS alias`).
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Prefix the column name with a table qualifier (`qualifier.name`).
    pub fn qualify(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Apply an aggregate function.
    pub fn aggregate(mut self, func: AggFunc) -> Self {
        self.aggregate = Some(func);
        self
    }

    /// Apply COUNT.
    pub fn count(self) -> Self {
        self.aggregate(AggFunc::Count)
    }

    /// Apply SUM.
    pub fn sum(self) -> Self {
        self.aggregate(AggFunc::Sum)
    }

    /// Apply MIN.
    pub fn min(self) -> Self {
        self.aggregate(AggFunc::Min)
    }

    /// Apply MAX.
    pub fn max(self) -> Self {
        self.aggregate(AggFunc::Max)
    }

    /// Apply AVG.
    pub fn avg(self) -> Self {
        self.aggregate(AggFunc::Avg)
    }

    /// Mark for ascending ordering.
    pub fn asc(mut self) -> Self {
        self.ordering = Some(SortOrder::Asc);
        self
    }

    /// Mark for descending ordering.
    pub fn desc(mut self) -> Self {
        self.ordering = Some(SortOrder::Desc);
        self
    }

    // ==================== Comparisons ====================

    /// Condition: self = other
    pub fn eq(self, other: impl Into<Operand>) -> Condition {
        Condition::new(self, Operator::Eq, other)
    }

    /// Condition: self <> other
    pub fn ne(self, other: impl Into<Operand>) -> Condition {
        Condition::new(self, Operator::Ne, other)
    }

    /// Condition: self > other
    pub fn gt(self, other: impl Into<Operand>) -> Condition {
        Condition::new(self, Operator::Gt, other)
    }

    /// Condition: self >= other
    pub fn gte(self, other: impl Into<Operand>) -> Condition {
        Condition::new(self, Operator::Gte, other)
    }

    /// Condition: self < other
    pub fn lt(self, other: impl Into<Operand>) -> Condition {
        Condition::new(self, Operator::Lt, other)
    }

    /// Condition: self <= other
    pub fn lte(self, other: impl Into<Operand>) -> Condition {
        Condition::new(self, Operator::Lte, other)
    }

    /// Condition: self LIKE pattern
    pub fn like(self, pattern: impl Into<Operand>) -> Condition {
        Condition::new(self, Operator::Like, pattern)
    }

    // ==================== Rendering ====================

    /// Render the column expression.
    ///
    /// `[qualifier.]name`, wrapped in `AGG(...)` if aggregated, suffixed
    /// with ` AS alias` if aliased.
    pub fn build(&self) -> String {
        let mut out = String::new();
        if let Some(agg) = self.aggregate {
            out.push_str(agg.keyword());
            out.push('(');
        }
        if let Some(qualifier) = &self.qualifier {
            out.push_str(qualifier);
            out.push('.');
        }
        out.push_str(&self.name);
        if self.aggregate.is_some() {
            out.push(')');
        }
        if let Some(alias) = &self.alias {
            out.push_str(" AS ");
            out.push_str(alias);
        }
        out
    }
}

impl fmt::Display for Col {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl PartialEq for Col {
    fn eq(&self, other: &Self) -> bool {
        self.build() == other.build()
    }
}

impl PartialEq<str> for Col {
    fn eq(&self, other: &str) -> bool {
        self.build() == other
    }
}

impl PartialEq<&str> for Col {
    fn eq(&self, other: &&str) -> bool {
        self.build() == *other
    }
}

impl PartialEq<String> for Col {
    fn eq(&self, other: &String) -> bool {
        self.build() == *other
    }
}

impl From<&str> for Col {
    fn from(name: &str) -> Self {
        Col::new(name)
    }
}

impl From<String> for Col {
    fn from(name: String) -> Self {
        Col::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_column() {
        assert_eq!(col("amount").build(), "amount");
        assert_eq!(col("amount").to_string(), col("amount").build());
    }

    #[test]
    fn aggregate_wraps_name() {
        assert_eq!(col("amount").sum(), "SUM(amount)");
        assert_eq!(col("amount").count(), "COUNT(amount)");
        assert_eq!(col("amount").min(), "MIN(amount)");
        assert_eq!(col("amount").max(), "MAX(amount)");
        assert_eq!(col("amount").avg(), "AVG(amount)");
        assert_eq!(col("amount").sum(), col("amount").aggregate(AggFunc::Sum));
    }

    #[test]
    fn alias_appends_as() {
        assert_eq!(col("amount").alias("total_amount"), "amount AS total_amount");
        assert_eq!(
            col("amount").alias("total_amount").sum().build(),
            "SUM(amount) AS total_amount"
        );
    }

    #[test]
    fn alias_breaks_identity_but_renders_equal() {
        assert_ne!(col("amount").alias("total_amount"), col("amount"));
        assert_eq!(col("amount").alias("total_amount"), "amount AS total_amount");
    }

    #[test]
    fn qualifier_prefixes_name() {
        assert_eq!(col("film_id").qualify("f"), "f.film_id");
        assert_eq!(col("amount").qualify("p").sum(), "SUM(p.amount)");
    }

    #[test]
    fn ordering_is_not_rendered_inline() {
        assert_eq!(col("staff_id").asc(), "staff_id");
        assert_eq!(col("staff_id").desc(), col("staff_id"));
    }

    #[test]
    fn equality_is_by_rendered_text() {
        assert_eq!(col("a").qualify("t"), col("t.a"));
    }
}
