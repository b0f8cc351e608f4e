//! Table references and join types.

use std::fmt;

/// Join clause type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN
    Inner,
    /// LEFT JOIN
    Left,
    /// RIGHT JOIN
    Right,
    /// FULL OUTER JOIN
    FullOuter,
}

impl JoinType {
    /// SQL keyword for this join type.
    pub fn keyword(self) -> &'static str {
        match self {
            JoinType::Inner => "INNER",
            JoinType::Left => "LEFT",
            JoinType::Right => "RIGHT",
            JoinType::FullOuter => "FULL OUTER",
        }
    }
}

/// A table reference with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub(crate) name: String,
    pub(crate) alias: Option<String>,
}

impl Table {
    /// Create an unaliased table reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    /// Set the table alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Derive a short alias from the table name: the first letter of each
    /// underscore-separated segment (`film_actor` -> `fa`).
    pub(crate) fn short_alias(&self) -> String {
        self.name
            .split('_')
            .filter_map(|segment| segment.chars().next())
            .collect()
    }

    /// Assign the derived short alias if the table has none yet.
    pub(crate) fn ensure_alias(&mut self) {
        if self.alias.is_none() {
            self.alias = Some(self.short_alias());
        }
    }

    /// The name other clauses qualify columns with: alias if set, else name.
    pub(crate) fn alias_or_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Render the table reference: `name` or `name alias`.
    pub fn build(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} {}", self.name, alias),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<&str> for Table {
    fn from(name: &str) -> Self {
        Table::new(name)
    }
}

impl From<String> for Table {
    fn from(name: String) -> Self {
        Table::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_and_optional_alias() {
        assert_eq!(Table::new("payment").build(), "payment");
        assert_eq!(Table::new("payment").alias("p").build(), "payment p");
    }

    #[test]
    fn short_alias_takes_segment_initials() {
        assert_eq!(Table::new("payment").short_alias(), "p");
        assert_eq!(Table::new("film_actor").short_alias(), "fa");
        assert_eq!(Table::new("staff_list_view").short_alias(), "slv");
    }

    #[test]
    fn ensure_alias_keeps_explicit_alias() {
        let mut table = Table::new("film_actor").alias("actors");
        table.ensure_alias();
        assert_eq!(table.build(), "film_actor actors");

        let mut table = Table::new("film_actor");
        table.ensure_alias();
        assert_eq!(table.build(), "film_actor fa");
    }

    #[test]
    fn join_type_keywords() {
        assert_eq!(JoinType::Inner.keyword(), "INNER");
        assert_eq!(JoinType::Left.keyword(), "LEFT");
        assert_eq!(JoinType::Right.keyword(), "RIGHT");
        assert_eq!(JoinType::FullOuter.keyword(), "FULL OUTER");
    }
}
