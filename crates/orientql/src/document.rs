//! Ordered field/value payload of a mutation.

use crate::error::{OqlError, OqlResult};
use crate::rid::RecordId;
use crate::value::Value;
use indexmap::IndexMap;

/// JSON key carrying the class name in [`Document::from_json`].
pub const CLASS_KEY: &str = "@class";
/// JSON key carrying the record id in [`Document::from_json`].
pub const RID_KEY: &str = "@rid";

/// An ordered mapping from field name to [`Value`], optionally tagged with a
/// class name and a record id.
///
/// Fields keep their first-insertion order. Setting an existing field again
/// replaces the value in place.
///
/// # Example
/// ```ignore
/// use orientql::Document;
///
/// let doc = Document::new()
///     .with_class("TestVertexClass")
///     .field("foo", "foo string value")
///     .field("bar", 12345);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    class_name: Option<String>,
    rid: Option<RecordId>,
    fields: IndexMap<String, Value>,
}

impl Document {
    /// Create an empty document with no class and no record id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the record id.
    pub fn with_rid(mut self, rid: RecordId) -> Self {
        self.rid = Some(rid);
        self
    }

    /// Set a field (chainable form of [`Document::set_field`]).
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Set a field. An existing field keeps its position.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Remove a field, keeping the order of the remaining ones.
    pub fn remove_field(&mut self, name: &str) -> Option<Value> {
        self.fields.shift_remove(name)
    }

    /// Get a field value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn set_class_name(&mut self, class_name: Option<String>) -> &mut Self {
        self.class_name = class_name;
        self
    }

    pub fn rid(&self) -> Option<RecordId> {
        self.rid
    }

    pub fn set_rid(&mut self, rid: Option<RecordId>) -> &mut Self {
        self.rid = rid;
        self
    }

    /// Build a document from a JSON object.
    ///
    /// Keys keep their order. The top-level `@class` and `@rid` keys set the
    /// class name and record id instead of becoming fields.
    pub fn from_json(json: serde_json::Value) -> OqlResult<Self> {
        let map = match json {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(OqlError::InvalidDocument(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )));
            }
        };

        let mut doc = Document::new();
        for (key, value) in map {
            match key.as_str() {
                CLASS_KEY => {
                    let serde_json::Value::String(class_name) = value else {
                        return Err(OqlError::InvalidDocument(format!(
                            "{CLASS_KEY} must be a string"
                        )));
                    };
                    doc.class_name = Some(class_name);
                }
                RID_KEY => {
                    let serde_json::Value::String(rid) = value else {
                        return Err(OqlError::InvalidDocument(format!(
                            "{RID_KEY} must be a string"
                        )));
                    };
                    doc.rid = Some(rid.parse()?);
                }
                _ => {
                    doc.set_field(key, Value::from(value));
                }
            }
        }
        Ok(doc)
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
