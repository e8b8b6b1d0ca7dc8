//! Predicate building for member searches.
//!
//! [`combine`] is the single entry point that turns a
//! [`MemberSearchCondition`] into a [`Predicate`]. The per-field helpers are
//! public so callers can assemble other combinations of the same clauses.

use sieve::{
    build_equals, build_greater_or_equal, build_less_or_equal, build_number_equals, Predicate,
};

use crate::condition::MemberSearchCondition;
use crate::entity::{Member, Team};

/// `member.username = ?`, or `AlwaysTrue` when blank.
pub fn username_eq(username: Option<&str>) -> Predicate {
    build_equals(Member::USERNAME, username)
}

/// `team.name = ?`, or `AlwaysTrue` when blank.
pub fn team_name_eq(team_name: Option<&str>) -> Predicate {
    build_equals(Team::NAME, team_name)
}

/// `member.age = ?`, or `AlwaysTrue` when absent.
pub fn age_eq(age: Option<i32>) -> Predicate {
    build_number_equals(Member::AGE, age)
}

/// `member.age >= ?`, or `AlwaysTrue` when absent.
pub fn age_goe(age: Option<i32>) -> Predicate {
    build_greater_or_equal(Member::AGE, age)
}

/// `member.age <= ?`, or `AlwaysTrue` when absent.
pub fn age_loe(age: Option<i32>) -> Predicate {
    build_less_or_equal(Member::AGE, age)
}

/// Builds the search predicate for `condition`.
///
/// Clauses are always combined in the order username, team name, lower age
/// bound, upper age bound, and absent filters leave no trace in the tree.
/// A condition with every filter absent yields `AlwaysTrue`.
///
/// ```
/// use sieve_store::{combine, MemberSearchCondition};
///
/// let condition = MemberSearchCondition::new()
///     .with_username("  ")
///     .with_age_goe(20)
///     .with_age_loe(35);
///
/// assert_eq!(combine(&condition).to_string(), "member.age >= 20 and member.age <= 35");
/// assert!(combine(&MemberSearchCondition::new()).is_always_true());
/// ```
pub fn combine(condition: &MemberSearchCondition) -> Predicate {
    username_eq(condition.username.as_deref())
        .and(team_name_eq(condition.team_name.as_deref()))
        .and(age_goe(condition.age_goe))
        .and(age_loe(condition.age_loe))
}

/// Exact username and age lookup; either part may be absent.
pub fn username_and_age(username: Option<&str>, age: Option<i32>) -> Predicate {
    username_eq(username).and(age_eq(age))
}
