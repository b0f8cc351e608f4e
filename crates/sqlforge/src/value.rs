//! Literal scalar values and their quoted SQL text forms.
//!
//! [`Value`] is the leaf of every expression tree: it has no identity and
//! renders purely by value. Strings are single-quoted with internal quotes
//! doubled; numbers and booleans render bare; the null value renders as the
//! `NULL` keyword. Rendering is total over the supported scalar set.

use std::fmt;

/// A literal scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, rendered single-quoted with `'` escaped as `''`
    Text(String),
    /// Integer, rendered bare
    Int(i64),
    /// Floating point, rendered bare
    Float(f64),
    /// Boolean, rendered as `TRUE` / `FALSE`
    Bool(bool),
    /// Absent value, rendered as `NULL`
    Null,
}

impl Value {
    /// Render the value as literal SQL text.
    pub fn render(&self) -> String {
        match self {
            Value::Text(s) => {
                let mut out = String::with_capacity(s.len() + 2);
                out.push('\'');
                for ch in s.chars() {
                    if ch == '\'' {
                        out.push('\'');
                        out.push('\'');
                    } else {
                        out.push(ch);
                    }
                }
                out.push('\'');
                out
            }
            Value::Int(n) => n.to_string(),
            Value::Float(x) => x.to_string(),
            Value::Bool(true) => "TRUE".to_string(),
            Value::Bool(false) => "FALSE".to_string(),
            Value::Null => "NULL".to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
