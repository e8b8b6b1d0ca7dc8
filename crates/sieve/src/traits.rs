//! The record access trait used by predicate evaluation.

use crate::path::FieldPath;
use crate::value::Value;

/// Trait for records that predicates can be evaluated against.
///
/// Usually derived with `#[derive(Seekable)]` from `sieve-macros`, which
/// also generates typed path constants for each annotated field. Manual
/// implementations are useful for join projections spanning several
/// entities.
///
/// # Derive Usage
///
/// ```ignore
/// use sieve::{Predicate, Seekable};
/// use sieve_macros::Seekable;
///
/// #[derive(Seekable)]
/// #[seek(entity = "member")]
/// struct Member {
///     #[seek(String)]
///     username: String,
///     #[seek(Number)]
///     age: i32,
/// }
///
/// let members = vec![
///     Member { username: "member1".into(), age: 10 },
///     Member { username: "member2".into(), age: 20 },
/// ];
///
/// let predicate = Member::AGE.goe(15);
/// let results = predicate.filter(&members, Member::accessor);
/// assert_eq!(results.len(), 1);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use sieve::{FieldPath, Number, Seekable, Value};
///
/// struct Team {
///     name: String,
///     size: u32,
/// }
///
/// impl Seekable for Team {
///     fn field_value(&self, path: &FieldPath) -> Value<'_> {
///         match (path.entity(), path.name()) {
///             ("team", "name") => Value::String(&self.name),
///             ("team", "size") => Value::Number(Number::from(self.size)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// Returns the value of the field at `path`, or [`Value::None`] if the
    /// record has no such field.
    fn field_value(&self, path: &FieldPath) -> Value<'_>;

    /// Accessor function suitable for the execution methods on
    /// [`Predicate`](crate::Predicate).
    fn accessor<'a>(item: &'a Self, path: &FieldPath) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(path)
    }
}
