//! Semantic values carried by documents, mutations and conditions.

use crate::document::Document;
use crate::rid::RecordId;

/// A value that can appear as a literal in a statement.
///
/// Integers and floats are kept apart so integers never gain a decimal point
/// when rendered.
///
/// # Example
/// ```ignore
/// use orientql::Value;
///
/// let v: Value = "hello".into();
/// let n: Value = 12345.into();
/// let none: Value = Option::<i32>::None.into(); // Value::Null
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `NULL`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integer number
    Integer(i64),
    /// Unsigned integer above `i64::MAX`
    Unsigned(u64),
    /// Floating-point number
    Float(f64),
    /// Text, rendered single-quoted
    String(String),
    /// Link to another record, rendered as `#c:p`
    Link(RecordId),
    /// Embedded document
    Document(Document),
    /// Collection of values
    List(Vec<Value>),
}

impl Value {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) | Value::Unsigned(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Link(_) => "link",
            Value::Document(_) => "document",
            Value::List(_) => "list",
        }
    }

    /// Check if this is `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Integer(i64::from(v))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(Value::Unsigned(v), Value::Integer)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        // usize is at most 64 bits on every supported target.
        Value::from(v as u64)
    }
}

impl From<f32> for Value {
    /// Goes through the `f32` shortest representation so `0.1f32` stays `0.1`.
    fn from(v: f32) -> Self {
        Value::Float(v.to_string().parse().unwrap_or(f64::from(v)))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<RecordId> for Value {
    fn from(v: RecordId) -> Self {
        Value::Link(v)
    }
}

impl From<Document> for Value {
    fn from(v: Document) -> Self {
        Value::Document(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    /// Objects become embedded documents (keys kept in order), arrays become
    /// lists. Integers stay exact, including those above `i64::MAX`.
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Unsigned(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut doc = Document::new();
                for (k, v) in map {
                    doc.set_field(k, Value::from(v));
                }
                Value::Document(doc)
            }
        }
    }
}
