//! # sqlforge
//!
//! A fluent, tree-based builder for SQL SELECT statement text.
//!
//! Callers assemble a statement from composable objects — columns,
//! literals, boolean conditions, CASE WHEN expressions, table references —
//! and render it to a literal SQL string with a single `build()` call.
//! The crate does not parse SQL, validate against a schema, or talk to a
//! database: given a well-formed sequence of builder calls, it produces
//! exactly one string.
//!
//! ## Design
//!
//! - **Explicit parenthesization**: every condition node renders one pair
//!   of parentheses, so no operator precedence table is needed and nesting
//!   order is always unambiguous.
//! - **Structural clause routing**: `filter` places a condition in HAVING
//!   when its tree carries an aggregate function, otherwise in WHERE.
//! - **Join ambiguity resolution**: name-based joins record their columns
//!   in a registry and qualify matching selected columns with the
//!   reference-side table alias.
//! - **Eager validation**: malformed construction (empty CASE WHEN,
//!   single-column join lists, conditions in USING mode) fails at the call
//!   site; rendering a well-formed tree never fails.
//!
//! ## Usage
//!
//! ```ignore
//! use sqlforge::{col, request};
//!
//! let sql = request()
//!     .table("payment")
//!     .select([col("staff_id").asc(), col("amount").alias("total_amount").sum().desc()])
//!     .group_by(["staff_id"])
//!     .filter(col("amount").gt(0.99).and(col("customer_id").eq(3).negate()))
//!     .build();
//! ```

pub mod case_when;
pub mod col;
pub mod condition;
pub mod error;
pub mod request;
pub mod table;
pub mod value;

pub use case_when::CaseWhen;
pub use col::{AggFunc, Col, SortOrder, col};
pub use condition::{Condition, Operand, Operator};
pub use error::{QueryError, QueryResult};
pub use request::{JoinOn, Request, request};
pub use table::{JoinType, Table};
pub use value::Value;

#[cfg(test)]
mod tests;
