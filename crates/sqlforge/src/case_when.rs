//! CASE WHEN expressions.
//!
//! Maps a column's discrete values to output values through an ordered
//! chain of WHEN/THEN branches with an optional ELSE. Branch lists are
//! validated eagerly at construction; rendering never fails.

use std::fmt;

use crate::col::Col;
use crate::error::{QueryError, QueryResult};
use crate::value::Value;

/// A CASE WHEN expression over a governing column.
#[derive(Debug, Clone)]
pub struct CaseWhen {
    col: Col,
    branches: Vec<(Value, Value)>,
    else_value: Option<Value>,
}

impl CaseWhen {
    /// Create a CASE WHEN from parallel expected/returned value lists.
    ///
    /// Fails when the lists differ in length or are empty.
    pub fn new<E, R>(col: Col, expected: E, returned: R) -> QueryResult<Self>
    where
        E: IntoIterator,
        E::Item: Into<Value>,
        R: IntoIterator,
        R::Item: Into<Value>,
    {
        let expected: Vec<Value> = expected.into_iter().map(Into::into).collect();
        let returned: Vec<Value> = returned.into_iter().map(Into::into).collect();

        if expected.len() != returned.len() {
            return Err(QueryError::CaseWhenLengthMismatch {
                expected: expected.len(),
                returned: returned.len(),
            });
        }
        if expected.is_empty() {
            return Err(QueryError::CaseWhenEmpty);
        }

        Ok(Self {
            col,
            branches: expected.into_iter().zip(returned).collect(),
            else_value: None,
        })
    }

    /// Set the ELSE value.
    pub fn otherwise(mut self, value: impl Into<Value>) -> Self {
        self.else_value = Some(value.into());
        self
    }

    /// Render the expression, one line per clause.
    pub fn build(&self) -> String {
        let mut lines = Vec::with_capacity(self.branches.len() + 3);
        lines.push(format!("CASE {}", self.col));
        for (expected, returned) in &self.branches {
            lines.push(format!("WHEN {expected} THEN {returned}"));
        }
        if let Some(value) = &self.else_value {
            lines.push(format!("ELSE {value}"));
        }
        lines.push("END".to_string());
        lines.join("\n")
    }
}

impl fmt::Display for CaseWhen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl PartialEq<&str> for CaseWhen {
    fn eq(&self, other: &&str) -> bool {
        self.build() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::col::col;

    #[test]
    fn renders_branches_in_input_order() {
        let expr = CaseWhen::new(col("rating"), ["G", "PG"], ["family", "family"]).unwrap();
        assert_eq!(
            expr.build(),
            "CASE rating\nWHEN 'G' THEN 'family'\nWHEN 'PG' THEN 'family'\nEND"
        );
    }

    #[test]
    fn renders_else_when_supplied() {
        let expr = CaseWhen::new(col("rating"), ["G"], ["family"])
            .unwrap()
            .otherwise("adult");
        assert_eq!(
            expr.build(),
            "CASE rating\nWHEN 'G' THEN 'family'\nELSE 'adult'\nEND"
        );
    }

    #[test]
    fn mixed_value_kinds() {
        let expr = CaseWhen::new(col("active"), [1, 0], [1, 0]).unwrap();
        assert_eq!(expr.build(), "CASE active\nWHEN 1 THEN 1\nWHEN 0 THEN 0\nEND");
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = CaseWhen::new(col("rating"), ["G", "PG"], ["family"]).unwrap_err();
        assert!(matches!(
            err,
            QueryError::CaseWhenLengthMismatch {
                expected: 2,
                returned: 1
            }
        ));
    }

    #[test]
    fn empty_branches_fail() {
        let err = CaseWhen::new(col("rating"), Vec::<Value>::new(), Vec::<Value>::new())
            .unwrap_err();
        assert!(matches!(err, QueryError::CaseWhenEmpty));
    }
}
