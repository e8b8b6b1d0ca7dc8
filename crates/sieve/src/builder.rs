//! Clause builders for optional search filters.
//!
//! Each builder turns one optional filter value into a [`Predicate`]. An
//! absent value yields [`Predicate::AlwaysTrue`], so the results can be
//! folded with [`Predicate::and`] without any conditional plumbing at the
//! call site. None of these functions can fail.

use crate::path::{NumberPath, StringPath};
use crate::predicate::Predicate;
use crate::value::Number;

/// Returns `true` if `value` is present and contains a non-whitespace
/// character.
///
/// This is the single blank check shared by every string filter: absent,
/// empty and whitespace-only values are all blank.
///
/// ```
/// assert!(sieve::has_text(Some("member1")));
/// assert!(!sieve::has_text(Some(" \t\n")));
/// assert!(!sieve::has_text(Some("")));
/// assert!(!sieve::has_text(None));
/// ```
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| s.chars().any(|c| !c.is_whitespace()))
}

/// Equality clause on a string field, or `AlwaysTrue` when `value` is blank.
///
/// The value is compared as given; surrounding whitespace is not trimmed.
pub fn build_equals(field: StringPath, value: Option<&str>) -> Predicate {
    match value {
        Some(text) if has_text(Some(text)) => field.eq(text),
        _ => Predicate::AlwaysTrue,
    }
}

/// Equality clause on a numeric field, or `AlwaysTrue` when absent.
pub fn build_number_equals<N>(field: NumberPath, value: Option<N>) -> Predicate
where
    N: Into<Number>,
{
    value.map_or(Predicate::AlwaysTrue, |n| field.eq(n))
}

/// `field >= value`, or `AlwaysTrue` when absent.
pub fn build_greater_or_equal<N>(field: NumberPath, value: Option<N>) -> Predicate
where
    N: Into<Number>,
{
    value.map_or(Predicate::AlwaysTrue, |n| field.goe(n))
}

/// `field <= value`, or `AlwaysTrue` when absent.
pub fn build_less_or_equal<N>(field: NumberPath, value: Option<N>) -> Predicate
where
    N: Into<Number>,
{
    value.map_or(Predicate::AlwaysTrue, |n| field.loe(n))
}
