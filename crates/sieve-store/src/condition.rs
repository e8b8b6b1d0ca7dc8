//! The member search condition.

use serde::{Deserialize, Serialize};

/// Optional filters for a member search.
///
/// Every field is independently optional; an absent field places no
/// restriction on the result. Blank strings count as absent.
///
/// ```
/// use sieve_store::MemberSearchCondition;
///
/// let condition = MemberSearchCondition::new()
///     .with_age_goe(20)
///     .with_age_loe(35);
/// assert_eq!(condition.age_goe, Some(20));
/// assert!(condition.username.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberSearchCondition {
    /// Exact member username.
    pub username: Option<String>,
    /// Exact name of the member's team.
    pub team_name: Option<String>,
    /// Inclusive lower age bound.
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound.
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    /// A condition with every filter absent; it matches all members.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn with_age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }
}
