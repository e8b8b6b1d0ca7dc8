//! Stored entities and their ids.

use std::fmt;

use serde::{Deserialize, Serialize};
use sieve::Number;
use sieve_macros::Seekable;

/// Store-assigned member id, sequential from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

/// Store-assigned team id, sequential from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<MemberId> for Number {
    fn from(id: MemberId) -> Self {
        Number::U64(id.0)
    }
}

impl From<TeamId> for Number {
    fn from(id: TeamId) -> Self {
        Number::U64(id.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Seekable)]
#[seek(entity = "team")]
pub struct Team {
    #[seek(Number)]
    pub id: TeamId,
    #[seek(String)]
    pub name: String,
}

/// A member, optionally belonging to one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Seekable)]
#[seek(entity = "member")]
pub struct Member {
    #[seek(Number)]
    pub id: MemberId,
    #[seek(String)]
    pub username: String,
    #[seek(Number)]
    pub age: i32,
    #[seek(Number)]
    pub team_id: Option<TeamId>,
}
