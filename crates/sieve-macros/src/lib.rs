//! Proc macros for Sieve.
//!
//! - [`Seekable`] - Generate typed field paths and the record accessor used
//!   by sieve predicates

mod seekable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `sieve::Seekable` for record structs.
///
/// # Struct Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `entity = "..."` | Entity name in field paths (default: snake_case struct name) |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `String` | String field, `String` or `Option<String>` (supports equality) |
/// | `Number` | Numeric field, any primitive number or `Option` of one (supports equality and bounds) |
/// | `skip` | Exclude this field |
/// | `rename = "..."` | Field name in paths (default: the Rust field name) |
/// | `entity = "..."` | Entity for this field only, for join projections |
///
/// Fields without a `#[seek(...)]` type are not queryable.
///
/// # Generated Code
///
/// 1. `ENTITY` plus one constant per field (e.g. `Member::USERNAME` as a
///    `StringPath`, `Member::AGE` as a `NumberPath`), named after the Rust
///    field in SCREAMING_SNAKE_CASE
/// 2. Implementation of `Seekable::field_value()`; an empty `Option`
///    field reads as `Value::None`
///
/// # Example
///
/// ```ignore
/// use sieve::{build_equals, Predicate, Seekable};
/// use sieve_macros::Seekable;
///
/// #[derive(Seekable)]
/// #[seek(entity = "member")]
/// struct Member {
///     #[seek(String)]
///     username: String,
///
///     #[seek(Number)]
///     age: i32,
///
///     #[seek(String, entity = "team", rename = "name")]
///     team_name: Option<String>,
/// }
///
/// let members = vec![
///     Member { username: "member1".into(), age: 10, team_name: Some("teamA".into()) },
///     Member { username: "member2".into(), age: 20, team_name: None },
/// ];
///
/// let predicate = build_equals(Member::TEAM_NAME, Some("teamA")).and(Member::AGE.loe(15));
/// assert_eq!(predicate.to_string(), "team.name = 'teamA' and member.age <= 15");
///
/// let results = predicate.filter(&members, Member::accessor);
/// assert_eq!(results.len(), 1);
/// ```
#[proc_macro_derive(Seekable, attributes(seek))]
pub fn seekable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    seekable::seekable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
