//! Condition trees for WHERE / HAVING / ON clauses.
//!
//! A [`Condition`] is a binary expression node over operands that are
//! literals, columns, or nested conditions, plus a unary NOT form. Every
//! binary node renders fully parenthesized at its own boundary
//! (`(left OP right)`), which makes precedence unambiguous at any nesting
//! depth without an operator precedence table.

use std::fmt;

use crate::col::Col;
use crate::value::Value;

/// Comparison and boolean operators for binary condition nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `=`
    Eq,
    /// `<>`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `LIKE`
    Like,
    /// `AND`
    And,
    /// `OR`
    Or,
}

impl Operator {
    /// SQL keyword for this operator.
    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "<>",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }
}

/// An operand of a binary condition: a literal, a column, or a nested
/// condition.
#[derive(Debug, Clone)]
pub enum Operand {
    /// Literal scalar
    Value(Value),
    /// Column expression
    Col(Col),
    /// Nested condition, rendered with its own parentheses
    Condition(Box<Condition>),
}

impl Operand {
    fn render(&self) -> String {
        match self {
            Operand::Value(v) => v.render(),
            Operand::Col(c) => c.build(),
            Operand::Condition(c) => c.build(),
        }
    }

    fn has_aggregate(&self) -> bool {
        match self {
            Operand::Value(_) => false,
            Operand::Col(c) => c.aggregate.is_some(),
            Operand::Condition(c) => c.has_aggregate(),
        }
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Operand::Value(v)
    }
}

impl From<Col> for Operand {
    fn from(c: Col) -> Self {
        Operand::Col(c)
    }
}

impl From<Condition> for Operand {
    fn from(c: Condition) -> Self {
        Operand::Condition(Box::new(c))
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Value(s.into())
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Value(s.into())
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Value(n.into())
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Value(n.into())
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Value(x.into())
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Value(b.into())
    }
}

/// Internal representation of a [`Condition`].
#[derive(Debug, Clone)]
enum ConditionInner {
    /// `(left OP right)`
    Binary {
        left: Operand,
        op: Operator,
        right: Operand,
    },
    /// `NOT(child)` — the child's own parentheses close the form
    Not(Box<Condition>),
}

/// A boolean / comparison condition node.
#[derive(Debug, Clone)]
pub struct Condition(ConditionInner);

impl Condition {
    /// Create a binary condition node.
    pub fn new(left: impl Into<Operand>, op: Operator, right: impl Into<Operand>) -> Self {
        Condition(ConditionInner::Binary {
            left: left.into(),
            op,
            right: right.into(),
        })
    }

    /// Negate a condition: `NOT(cond)`.
    pub fn not(cond: Condition) -> Self {
        Condition(ConditionInner::Not(Box::new(cond)))
    }

    /// Combine with another condition via AND.
    pub fn and(self, other: Condition) -> Self {
        Condition::new(self, Operator::And, other)
    }

    /// Combine with another condition via OR.
    pub fn or(self, other: Condition) -> Self {
        Condition::new(self, Operator::Or, other)
    }

    /// Consume and negate this condition.
    pub fn negate(self) -> Self {
        Condition::not(self)
    }

    /// Whether any column in the tree carries an aggregate function.
    ///
    /// Propagated bottom-up; the statement builder routes aggregate
    /// conditions to HAVING instead of WHERE.
    pub fn has_aggregate(&self) -> bool {
        match &self.0 {
            ConditionInner::Binary { left, right, .. } => {
                left.has_aggregate() || right.has_aggregate()
            }
            ConditionInner::Not(child) => child.has_aggregate(),
        }
    }

    /// Render the condition tree, depth-first.
    ///
    /// Binary nodes contribute exactly one pair of parentheses; NOT
    /// prepends its keyword to the child's parenthesized form.
    pub fn build(&self) -> String {
        match &self.0 {
            ConditionInner::Binary { left, op, right } => {
                format!("({} {} {})", left.render(), op.keyword(), right.render())
            }
            ConditionInner::Not(child) => format!("NOT{}", child.build()),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        self.build() == other.build()
    }
}

impl PartialEq<&str> for Condition {
    fn eq(&self, other: &&str) -> bool {
        self.build() == *other
    }
}

impl PartialEq<String> for Condition {
    fn eq(&self, other: &String) -> bool {
        self.build() == *other
    }
}
