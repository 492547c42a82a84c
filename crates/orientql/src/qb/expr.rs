//! WHERE condition chain.
//!
//! A [`WhereChain`] is an ordered list of [`Condition`]s. The first entry has
//! no combinator; every later entry is joined to the previous one with `AND`
//! or `OR`. Entries render strictly left to right, with no grouping and no
//! precedence:
//!
//! ```text
//! WHERE foo = 'whoa' OR foo != 123 AND foo CONTAINS (name = 'johny')
//! ```

use crate::config::RenderConfig;
use crate::error::{OqlError, OqlResult};
use crate::format::{write_assignment, write_value};
use crate::value::Value;

/// Joins a condition to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    pub fn token(self) -> &'static str {
        match self {
            Combinator::And => "AND",
            Combinator::Or => "OR",
        }
    }
}

/// Right-hand side of `CONTAINS`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// `CONTAINS <literal>`
    Value(Value),
    /// `CONTAINS (<field> = <literal>)`
    FieldEq { field: String, value: Value },
}

/// Comparison operator together with its operand.
///
/// # Example
/// ```ignore
/// use orientql::Op;
///
/// Op::eq("whoa");
/// Op::lte(2);
/// Op::is_null();
/// Op::contains("johny");
/// Op::contains_field("name", "johny");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// `=`
    Eq(Value),
    /// `!=`
    Ne(Value),
    /// `<`
    Lt(Value),
    /// `<=`
    Lte(Value),
    /// `>`
    Gt(Value),
    /// `>=`
    Gte(Value),
    /// `LIKE`
    Like(Value),
    /// `IS NULL`
    IsNull,
    /// `CONTAINS`
    Contains(Operand),
}

impl Op {
    pub fn eq(value: impl Into<Value>) -> Self {
        Op::Eq(value.into())
    }

    pub fn ne(value: impl Into<Value>) -> Self {
        Op::Ne(value.into())
    }

    pub fn lt(value: impl Into<Value>) -> Self {
        Op::Lt(value.into())
    }

    pub fn lte(value: impl Into<Value>) -> Self {
        Op::Lte(value.into())
    }

    pub fn gt(value: impl Into<Value>) -> Self {
        Op::Gt(value.into())
    }

    pub fn gte(value: impl Into<Value>) -> Self {
        Op::Gte(value.into())
    }

    pub fn like(pattern: impl Into<Value>) -> Self {
        Op::Like(pattern.into())
    }

    pub fn is_null() -> Self {
        Op::IsNull
    }

    pub fn contains(value: impl Into<Value>) -> Self {
        Op::Contains(Operand::Value(value.into()))
    }

    /// `CONTAINS (<field> = <value>)`: the collection holds an element whose
    /// `field` equals `value`.
    pub fn contains_field(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Op::Contains(Operand::FieldEq {
            field: field.into(),
            value: value.into(),
        })
    }

    /// Operator token as written in the dialect.
    pub fn token(&self) -> &'static str {
        match self {
            Op::Eq(_) => "=",
            Op::Ne(_) => "!=",
            Op::Lt(_) => "<",
            Op::Lte(_) => "<=",
            Op::Gt(_) => ">",
            Op::Gte(_) => ">=",
            Op::Like(_) => "LIKE",
            Op::IsNull => "IS NULL",
            Op::Contains(_) => "CONTAINS",
        }
    }

    fn write_operand(&self, out: &mut String, config: &RenderConfig) -> OqlResult<()> {
        match self {
            Op::Eq(v)
            | Op::Ne(v)
            | Op::Lt(v)
            | Op::Lte(v)
            | Op::Gt(v)
            | Op::Gte(v)
            | Op::Like(v)
            | Op::Contains(Operand::Value(v)) => {
                out.push(' ');
                write_value(out, v, config)
            }
            Op::Contains(Operand::FieldEq { field, value }) => {
                out.push_str(" (");
                write_assignment(out, field, value, config)?;
                out.push(')');
                Ok(())
            }
            Op::IsNull => Ok(()),
        }
    }
}

/// One entry of a [`WhereChain`].
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    combinator: Option<Combinator>,
    field: String,
    op: Op,
}

impl Condition {
    /// `None` for the first entry of a chain.
    pub fn combinator(&self) -> Option<Combinator> {
        self.combinator
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    fn write(&self, out: &mut String, config: &RenderConfig) -> OqlResult<()> {
        if self.field.is_empty() {
            return Err(OqlError::invalid_identifier(
                "condition field name cannot be empty",
            ));
        }
        if let Some(combinator) = self.combinator {
            out.push(' ');
            out.push_str(combinator.token());
            out.push(' ');
        }
        out.push_str(&self.field);
        out.push(' ');
        out.push_str(self.op.token());
        self.op.write_operand(out, config)
    }
}

/// Ordered WHERE predicate.
///
/// Use [`WhereChain::where_`] once, then [`WhereChain::and`] /
/// [`WhereChain::or`] any number of times. Calling them out of order fails
/// immediately with [`OqlError::MalformedCondition`].
///
/// # Example
/// ```ignore
/// use orientql::{Op, WhereChain};
///
/// let mut chain = WhereChain::new();
/// chain
///     .where_("foo", Op::eq("whoa"))?
///     .or("foo", Op::ne(123))?;
/// assert_eq!(chain.build()?, "WHERE foo = 'whoa' OR foo != 123");
/// # Ok::<(), orientql::OqlError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereChain {
    conditions: Vec<Condition>,
}

impl WhereChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the chain. Fails if it already has a condition.
    pub fn where_(&mut self, field: impl Into<String>, op: Op) -> OqlResult<&mut Self> {
        let field = field.into();
        if !self.conditions.is_empty() {
            return Err(OqlError::malformed(format!(
                "WHERE already started; use and/or for '{field}'"
            )));
        }
        self.push_unchecked(None, field, op);
        Ok(self)
    }

    /// Append an `AND` condition. Fails if the chain was not started.
    pub fn and(&mut self, field: impl Into<String>, op: Op) -> OqlResult<&mut Self> {
        self.append(Combinator::And, field.into(), op)
    }

    /// Append an `OR` condition. Fails if the chain was not started.
    pub fn or(&mut self, field: impl Into<String>, op: Op) -> OqlResult<&mut Self> {
        self.append(Combinator::Or, field.into(), op)
    }

    fn append(&mut self, combinator: Combinator, field: String, op: Op) -> OqlResult<&mut Self> {
        if self.conditions.is_empty() {
            return Err(OqlError::malformed(format!(
                "{} '{field}' used before WHERE",
                combinator.token()
            )));
        }
        self.push_unchecked(Some(combinator), field, op);
        Ok(self)
    }

    /// Callers guarantee `combinator` is `None` exactly for the first entry.
    pub(crate) fn push_unchecked(&mut self, combinator: Option<Combinator>, field: String, op: Op) {
        debug_assert_eq!(combinator.is_none(), self.conditions.is_empty());
        self.conditions.push(Condition {
            combinator,
            field,
            op,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Render `WHERE ...`, or an empty string for an empty chain.
    pub fn build(&self) -> OqlResult<String> {
        self.build_with(&RenderConfig::default())
    }

    pub fn build_with(&self, config: &RenderConfig) -> OqlResult<String> {
        let mut out = String::new();
        self.write_to(&mut out, config)?;
        Ok(out)
    }

    pub(crate) fn write_to(&self, out: &mut String, config: &RenderConfig) -> OqlResult<()> {
        if self.conditions.is_empty() {
            return Ok(());
        }
        out.push_str("WHERE ");
        for condition in &self.conditions {
            condition.write(out, config)?;
        }
        Ok(())
    }
}
