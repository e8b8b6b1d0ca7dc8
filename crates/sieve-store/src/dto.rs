//! Projection rows produced by store searches.

use serde::{Deserialize, Serialize};
use sieve_macros::Seekable;

use crate::entity::{MemberId, TeamId};

/// One row of the member left-join team projection.
///
/// Field paths use the source entities, so predicates written against
/// `Member::USERNAME` or `Team::NAME` evaluate directly on the row. A member
/// without a team has `None` team columns, and no team clause matches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Seekable)]
#[seek(entity = "member")]
pub struct MemberTeamDto {
    #[seek(Number, rename = "id")]
    pub member_id: MemberId,
    #[seek(String)]
    pub username: String,
    #[seek(Number)]
    pub age: i32,
    #[seek(Number, entity = "team", rename = "id")]
    pub team_id: Option<TeamId>,
    #[seek(String, entity = "team", rename = "name")]
    pub team_name: Option<String>,
}
