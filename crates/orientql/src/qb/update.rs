//! UPDATE statement builder.

use crate::config::RenderConfig;
use crate::document::Document;
use crate::error::{OqlError, OqlResult};
use crate::format::write_assignment;
use crate::qb::expr::{Combinator, Op, WhereChain};
use crate::qb::traits::SqlQb;
use crate::rid::RecordId;
use crate::trace;
use crate::value::Value;
use std::fmt;
use std::marker::PhantomData;

/// Subject of an UPDATE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `#<cluster>:<position>`
    Record(RecordId),
    /// Bare class name
    Class(String),
    /// `cluster:<name>`
    Cluster(String),
}

impl Target {
    fn check(&self) -> OqlResult<()> {
        match self {
            Target::Record(_) => Ok(()),
            Target::Class(name) if name.is_empty() => {
                Err(OqlError::invalid_identifier("class name cannot be empty"))
            }
            Target::Cluster(name) if name.is_empty() => {
                Err(OqlError::invalid_identifier("cluster name cannot be empty"))
            }
            Target::Class(_) | Target::Cluster(_) => Ok(()),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Record(rid) => write!(f, "{rid}"),
            Target::Class(name) => f.write_str(name),
            Target::Cluster(name) => write!(f, "cluster:{name}"),
        }
    }
}

/// Builder state: no WHERE clause yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWhere;

/// Builder state: WHERE clause started; only `and` / `or` may extend it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasWhere;

/// UPDATE statement builder.
///
/// The target is resolved at render time, highest priority first:
/// 1. the last of [`record`](Self::record) / [`class`](Self::class) /
///    [`cluster`](Self::cluster),
/// 2. the attached document's record id,
/// 3. the attached document's class name.
///
/// Clauses always render in the order SET, ADD, REMOVE, WHERE. SET lists the
/// attached document's fields first, then explicit [`set`](Self::set) calls.
///
/// The state parameter makes condition misuse a compile error: `where_` is
/// only available before a WHERE was started, `and` / `or` only after.
///
/// # Example
/// ```ignore
/// use orientql::qb::{self, SqlQb};
/// use orientql::RecordId;
///
/// let sql = qb::update()
///     .record(RecordId::new(8, 0))
///     .set("foo", "foo string value")
///     .where_("bar").gt(10)
///     .or("bar").is_null()
///     .build()?;
/// assert_eq!(sql, "UPDATE #8:0 SET foo = 'foo string value' WHERE bar > 10 OR bar IS NULL");
/// # Ok::<(), orientql::OqlError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UpdateQb<S = NoWhere> {
    /// Explicit target (last call wins)
    target: Option<Target>,
    /// Attached document: fallback target and leading SET fields
    document: Option<Document>,
    /// SET clauses
    set_fields: Vec<(String, Value)>,
    /// ADD clauses
    add_fields: Vec<(String, Value)>,
    /// REMOVE clauses
    remove_fields: Vec<(String, Option<Value>)>,
    /// WHERE conditions
    where_chain: WhereChain,
    _state: PhantomData<S>,
}

impl UpdateQb<NoWhere> {
    /// Create an empty UPDATE builder.
    pub fn new() -> Self {
        Self {
            target: None,
            document: None,
            set_fields: Vec::new(),
            add_fields: Vec::new(),
            remove_fields: Vec::new(),
            where_chain: WhereChain::new(),
            _state: PhantomData,
        }
    }

    /// Start the WHERE clause on `field`.
    pub fn where_(self, field: impl Into<String>) -> PendingCondition {
        PendingCondition {
            qb: self.into_state(),
            combinator: None,
            field: field.into(),
        }
    }

    /// Use a condition chain built with the [`WhereChain`] API.
    ///
    /// Fails with [`OqlError::MalformedCondition`] if the chain is empty.
    pub fn filter(self, chain: WhereChain) -> OqlResult<UpdateQb<HasWhere>> {
        if chain.is_empty() {
            return Err(OqlError::malformed("cannot filter on an empty condition chain"));
        }
        let mut qb = self.into_state();
        qb.where_chain = chain;
        Ok(qb)
    }
}

impl Default for UpdateQb<NoWhere> {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateQb<HasWhere> {
    /// Continue the WHERE clause with `AND <field>`.
    pub fn and(self, field: impl Into<String>) -> PendingCondition {
        PendingCondition {
            qb: self,
            combinator: Some(Combinator::And),
            field: field.into(),
        }
    }

    /// Continue the WHERE clause with `OR <field>`.
    pub fn or(self, field: impl Into<String>) -> PendingCondition {
        PendingCondition {
            qb: self,
            combinator: Some(Combinator::Or),
            field: field.into(),
        }
    }
}

impl<S> UpdateQb<S> {
    fn into_state<T>(self) -> UpdateQb<T> {
        UpdateQb {
            target: self.target,
            document: self.document,
            set_fields: self.set_fields,
            add_fields: self.add_fields,
            remove_fields: self.remove_fields,
            where_chain: self.where_chain,
            _state: PhantomData,
        }
    }

    // ==================== Target ====================

    /// Attach a document. Its fields lead the SET clause; its record id or
    /// class name is the target when no explicit one is set.
    pub fn document(mut self, document: Document) -> Self {
        self.document = Some(document);
        self
    }

    /// Target a single record.
    pub fn record(mut self, rid: RecordId) -> Self {
        self.target = Some(Target::Record(rid));
        self
    }

    /// Target every record of a class.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.target = Some(Target::Class(name.into()));
        self
    }

    /// Target every record of a cluster.
    pub fn cluster(mut self, name: impl Into<String>) -> Self {
        self.target = Some(Target::Cluster(name.into()));
        self
    }

    // ==================== Mutations ====================

    /// Add `SET field = value`.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_fields.push((field.into(), value.into()));
        self
    }

    /// Set an optional field (None => skip).
    pub fn set_opt<T: Into<Value>>(self, field: impl Into<String>, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.set(field, v)
        } else {
            self
        }
    }

    /// Set a field from any serializable value.
    pub fn set_json<T: serde::Serialize>(
        self,
        field: impl Into<String>,
        value: &T,
    ) -> serde_json::Result<Self> {
        let json_val = serde_json::to_value(value)?;
        Ok(self.set(field, Value::from(json_val)))
    }

    /// Add a `SET` entry for every field of `document`, in order.
    ///
    /// Unlike [`document`](Self::document), the document's class name and
    /// record id are ignored.
    pub fn set_document(mut self, document: &Document) -> Self {
        self.set_fields.extend(
            document
                .fields()
                .map(|(name, value)| (name.to_string(), value.clone())),
        );
        self
    }

    /// Add `ADD field = value` (append to a collection).
    pub fn add(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_fields.push((field.into(), value.into()));
        self
    }

    /// Add `REMOVE field` (drop the whole field).
    pub fn remove(mut self, field: impl Into<String>) -> Self {
        self.remove_fields.push((field.into(), None));
        self
    }

    /// Add `REMOVE field = value` (drop one item from a collection).
    pub fn remove_value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.remove_fields.push((field.into(), Some(value.into())));
        self
    }

    // ==================== Inspection ====================

    /// The target the statement would render with, if any.
    pub fn target(&self) -> Option<Target> {
        self.resolve_target().ok()
    }

    /// The condition chain so far.
    pub fn where_chain(&self) -> &WhereChain {
        &self.where_chain
    }

    fn resolve_target(&self) -> OqlResult<Target> {
        if let Some(target) = &self.target {
            return Ok(target.clone());
        }
        let document = self.document.as_ref().ok_or(OqlError::MissingTarget)?;
        if let Some(rid) = document.rid() {
            return Ok(Target::Record(rid));
        }
        document
            .class_name()
            .map(|name| Target::Class(name.to_string()))
            .ok_or(OqlError::MissingTarget)
    }

    fn set_entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.document
            .iter()
            .flat_map(Document::fields)
            .chain(self.set_fields.iter().map(|(f, v)| (f.as_str(), v)))
    }

    // ==================== Build ====================

    fn build_update(&self, config: &RenderConfig) -> OqlResult<String> {
        let target = self.resolve_target()?;
        target.check()?;
        let target = target.to_string();

        let mut sql = format!("UPDATE {target}");
        let mut has_clause = false;

        let mut set_entries = self.set_entries().peekable();
        if set_entries.peek().is_some() {
            sql.push_str(" SET ");
            write_assignments(&mut sql, set_entries, config)?;
            has_clause = true;
        }

        if !self.add_fields.is_empty() {
            sql.push_str(" ADD ");
            write_assignments(
                &mut sql,
                self.add_fields.iter().map(|(f, v)| (f.as_str(), v)),
                config,
            )?;
            has_clause = true;
        }

        if !self.remove_fields.is_empty() {
            sql.push_str(" REMOVE ");
            for (i, (field, value)) in self.remove_fields.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                match value {
                    Some(value) => write_assignment(&mut sql, field, value, config)?,
                    None => {
                        if field.is_empty() {
                            return Err(OqlError::invalid_identifier(
                                "field name cannot be empty",
                            ));
                        }
                        sql.push_str(field);
                    }
                }
            }
            has_clause = true;
        }

        if !self.where_chain.is_empty() {
            sql.push(' ');
            self.where_chain.write_to(&mut sql, config)?;
            has_clause = true;
        }

        if !has_clause {
            trace::empty_update(&target);
        }
        trace::rendered("UPDATE", &target, &sql, config);
        Ok(sql)
    }
}

fn write_assignments<'a>(
    sql: &mut String,
    entries: impl Iterator<Item = (&'a str, &'a Value)>,
    config: &RenderConfig,
) -> OqlResult<()> {
    for (i, (field, value)) in entries.enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        write_assignment(sql, field, value, config)?;
    }
    Ok(())
}

impl<S> SqlQb for UpdateQb<S> {
    fn build_with(&self, config: &RenderConfig) -> OqlResult<String> {
        self.build_update(config)
    }

    fn validate(&self) -> OqlResult<()> {
        self.resolve_target()?.check()
    }
}

/// A WHERE / AND / OR field waiting for its operator.
///
/// Every method consumes the pending condition and returns the builder.
#[derive(Debug)]
#[must_use = "a condition is only added once an operator is applied"]
pub struct PendingCondition {
    qb: UpdateQb<HasWhere>,
    combinator: Option<Combinator>,
    field: String,
}

impl PendingCondition {
    /// Complete the condition with an arbitrary [`Op`].
    pub fn op(self, op: Op) -> UpdateQb<HasWhere> {
        let PendingCondition {
            mut qb,
            combinator,
            field,
        } = self;
        qb.where_chain.push_unchecked(combinator, field, op);
        qb
    }

    /// `field = value`
    pub fn eq(self, value: impl Into<Value>) -> UpdateQb<HasWhere> {
        self.op(Op::eq(value))
    }

    /// `field != value`
    pub fn ne(self, value: impl Into<Value>) -> UpdateQb<HasWhere> {
        self.op(Op::ne(value))
    }

    /// `field < value`
    pub fn lt(self, value: impl Into<Value>) -> UpdateQb<HasWhere> {
        self.op(Op::lt(value))
    }

    /// `field <= value`
    pub fn lte(self, value: impl Into<Value>) -> UpdateQb<HasWhere> {
        self.op(Op::lte(value))
    }

    /// `field > value`
    pub fn gt(self, value: impl Into<Value>) -> UpdateQb<HasWhere> {
        self.op(Op::gt(value))
    }

    /// `field >= value`
    pub fn gte(self, value: impl Into<Value>) -> UpdateQb<HasWhere> {
        self.op(Op::gte(value))
    }

    /// `field LIKE pattern`
    pub fn like(self, pattern: impl Into<Value>) -> UpdateQb<HasWhere> {
        self.op(Op::like(pattern))
    }

    /// `field IS NULL`
    pub fn is_null(self) -> UpdateQb<HasWhere> {
        self.op(Op::is_null())
    }

    /// `field CONTAINS value`
    pub fn contains(self, value: impl Into<Value>) -> UpdateQb<HasWhere> {
        self.op(Op::contains(value))
    }

    /// `field CONTAINS (nested_field = value)`
    pub fn contains_field(
        self,
        nested_field: impl Into<String>,
        value: impl Into<Value>,
    ) -> UpdateQb<HasWhere> {
        self.op(Op::contains_field(nested_field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::new()
            .field("foo", "foo string value")
            .field("bar", 12345)
    }

    #[test]
    fn test_class_from_document() {
        let sql = UpdateQb::new()
            .document(doc().with_class("TestVertexClass"))
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "UPDATE TestVertexClass SET foo = 'foo string value', bar = 12345"
        );
    }

    #[test]
    fn test_cluster_target() {
        let sql = UpdateQb::new()
            .document(doc())
            .cluster("TestCluster")
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "UPDATE cluster:TestCluster SET foo = 'foo string value', bar = 12345"
        );
    }

    #[test]
    fn test_record_rid_beats_class_in_document() {
        let qb = UpdateQb::new().document(
            doc()
                .with_class("TestVertexClass")
                .with_rid(RecordId::new(8, 0)),
        );
        assert_eq!(qb.target(), Some(Target::Record(RecordId::new(8, 0))));
    }

    #[test]
    fn test_missing_target() {
        let err = UpdateQb::new().document(doc()).build().unwrap_err();
        assert!(err.is_missing_target());
        assert!(UpdateQb::new().set("a", 1).validate().unwrap_err().is_missing_target());
    }

    #[test]
    fn test_empty_class_or_cluster_name() {
        for qb in [UpdateQb::new().class(""), UpdateQb::new().cluster("")] {
            assert!(matches!(
                qb.set("a", 1).build(),
                Err(OqlError::InvalidIdentifier(_))
            ));
        }
    }

    #[test]
    fn test_remove_forms() {
        let sql = UpdateQb::new()
            .record(RecordId::new(8, 0))
            .remove("foo")
            .remove_value("tags", "x")
            .remove("bar")
            .build()
            .unwrap();
        assert_eq!(sql, "UPDATE #8:0 REMOVE foo, tags = 'x', bar");
    }

    #[test]
    fn test_empty_field_name_is_rejected() {
        let rid = RecordId::new(8, 0);
        for qb in [
            UpdateQb::new().record(rid).set("", 1),
            UpdateQb::new().record(rid).add("", 1),
            UpdateQb::new().record(rid).remove(""),
            UpdateQb::new().record(rid).remove_value("", 1),
        ] {
            assert!(matches!(qb.build(), Err(OqlError::InvalidIdentifier(_))));
        }
    }

    #[test]
    fn test_set_opt() {
        let sql = UpdateQb::new()
            .class("Person")
            .set_opt("name", Some("alice"))
            .set_opt("nickname", Option::<&str>::None)
            .build()
            .unwrap();
        assert_eq!(sql, "UPDATE Person SET name = 'alice'");
    }

    #[test]
    fn test_unsupported_value_fails_render() {
        let err = UpdateQb::new()
            .class("Metric")
            .set("value", f64::NAN)
            .build()
            .unwrap_err();
        assert!(err.is_unsupported_value());
    }

    #[test]
    fn test_filter_with_chain() {
        let mut chain = WhereChain::new();
        chain
            .where_("age", Op::gte(18))
            .unwrap()
            .and("name", Op::like("a%"))
            .unwrap();

        let sql = UpdateQb::new()
            .class("Person")
            .set("adult", true)
            .filter(chain)
            .unwrap()
            .or("vip")
            .eq(true)
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "UPDATE Person SET adult = true WHERE age >= 18 AND name LIKE 'a%' OR vip = true"
        );
    }

    #[test]
    fn test_filter_empty_chain_is_malformed() {
        let err = UpdateQb::new()
            .class("Person")
            .filter(WhereChain::new())
            .unwrap_err();
        assert!(err.is_malformed_condition());
    }
}
