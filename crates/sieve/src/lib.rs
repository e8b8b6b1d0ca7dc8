//! Sieve - composable dynamic predicates for filtering typed records.
//!
//! Search screens usually offer a handful of optional filters. Sieve turns
//! each optional filter into a clause that is either a real comparison or
//! the identity [`Predicate::AlwaysTrue`], then folds the clauses into one
//! immutable [`Predicate`] tree. The tree can be evaluated against any
//! record implementing [`Seekable`], rendered as query text, or serialized.
//!
//! # Quick Start
//!
//! ```rust
//! use sieve::{
//!     build_equals, build_greater_or_equal, build_less_or_equal, FieldPath, Number,
//!     NumberPath, Predicate, StringPath, Value,
//! };
//!
//! const USERNAME: StringPath = StringPath::new("member", "username");
//! const AGE: NumberPath = NumberPath::new("member", "age");
//!
//! struct Member {
//!     username: String,
//!     age: i32,
//! }
//!
//! fn accessor<'a>(member: &'a Member, path: &FieldPath) -> Value<'a> {
//!     match path.name() {
//!         "username" => Value::String(&member.username),
//!         "age" => Value::Number(Number::from(member.age)),
//!         _ => Value::None,
//!     }
//! }
//!
//! let members = vec![
//!     Member { username: "member1".into(), age: 10 },
//!     Member { username: "member2".into(), age: 20 },
//!     Member { username: "member3".into(), age: 30 },
//! ];
//!
//! // A blank username is ignored, the age bounds apply
//! let predicate = build_equals(USERNAME, Some("   "))
//!     .and(build_greater_or_equal(AGE, Some(15)))
//!     .and(build_less_or_equal(AGE, None::<i32>));
//!
//! assert_eq!(predicate.to_string(), "member.age >= 15");
//!
//! let results = predicate.filter(&members, accessor);
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].username, "member2");
//! ```
//!
//! # Semantics
//!
//! | Node | Matches when |
//! |------|--------------|
//! | `AlwaysTrue` | always |
//! | `FieldEquals` | field value equals the literal (same type) |
//! | `FieldGreaterOrEqual` | numeric field value `>=` bound |
//! | `FieldLessOrEqual` | numeric field value `<=` bound |
//! | `And` | both operands match |
//!
//! A missing field ([`Value::None`]) never satisfies a comparison, which
//! matches how a null column behaves in a left join.

mod builder;
mod path;
mod predicate;
mod traits;
mod value;

// Re-export public API
pub use builder::{
    build_equals, build_greater_or_equal, build_less_or_equal, build_number_equals, has_text,
};
pub use path::{FieldPath, NumberPath, StringPath};
pub use predicate::{Literal, Predicate};
pub use traits::Seekable;
pub use value::{Number, Value};
