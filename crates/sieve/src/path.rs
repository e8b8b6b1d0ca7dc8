//! Field references used on the left-hand side of a clause.
//!
//! A [`FieldPath`] names a field of an entity (`member.username`). The typed
//! wrappers [`StringPath`] and [`NumberPath`] restrict which clauses can be
//! built against a field, so a numeric bound can never target a string field.
//! `#[derive(Seekable)]` generates these as associated constants.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::predicate::{Literal, Predicate};
use crate::value::Number;

/// Reference to a field of an entity, displayed as `entity.name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    entity: &'static str,
    name: &'static str,
}

impl FieldPath {
    /// Creates a path for `name` on `entity`.
    pub const fn new(entity: &'static str, name: &'static str) -> Self {
        FieldPath { entity, name }
    }

    /// The entity (table alias) this field belongs to.
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    /// The field name within its entity.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity, self.name)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Path to a string-typed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringPath(FieldPath);

impl StringPath {
    pub const fn new(entity: &'static str, name: &'static str) -> Self {
        StringPath(FieldPath::new(entity, name))
    }

    pub const fn path(&self) -> FieldPath {
        self.0
    }

    /// Equality clause against `value`.
    ///
    /// This always produces a clause; use
    /// [`build_equals`](crate::build_equals) when the value is optional.
    pub fn eq(&self, value: impl Into<String>) -> Predicate {
        Predicate::FieldEquals {
            field: self.0,
            value: Literal::String(value.into()),
        }
    }
}

/// Path to a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberPath(FieldPath);

impl NumberPath {
    pub const fn new(entity: &'static str, name: &'static str) -> Self {
        NumberPath(FieldPath::new(entity, name))
    }

    pub const fn path(&self) -> FieldPath {
        self.0
    }

    /// Equality clause against `value`.
    pub fn eq(&self, value: impl Into<Number>) -> Predicate {
        Predicate::FieldEquals {
            field: self.0,
            value: Literal::Number(value.into()),
        }
    }

    /// `field >= value`.
    pub fn goe(&self, value: impl Into<Number>) -> Predicate {
        Predicate::FieldGreaterOrEqual {
            field: self.0,
            value: value.into(),
        }
    }

    /// `field <= value`.
    pub fn loe(&self, value: impl Into<Number>) -> Predicate {
        Predicate::FieldLessOrEqual {
            field: self.0,
            value: value.into(),
        }
    }
}

impl From<StringPath> for FieldPath {
    fn from(path: StringPath) -> Self {
        path.0
    }
}

impl From<NumberPath> for FieldPath {
    fn from(path: NumberPath) -> Self {
        path.0
    }
}
