//! # Sieve Store - member search over an in-memory record store
//!
//! A small member/team store whose searches are driven by [`sieve`]
//! predicates. A [`MemberSearchCondition`] carries up to four optional
//! filters; [`combine`] turns it into one predicate, and
//! [`MemberStore::search`] evaluates that predicate over the member
//! left-join team projection.
//!
//! ## Quick Start
//!
//! ```
//! use sieve_store::{Fixtures, MemberSearchCondition, MemberStore};
//!
//! let store = MemberStore::from_fixtures(&Fixtures::sample()).unwrap();
//!
//! let condition = MemberSearchCondition::new()
//!     .with_age_goe(20)
//!     .with_age_loe(35);
//!
//! let names: Vec<_> = store
//!     .search(&condition)
//!     .into_iter()
//!     .map(|row| row.username)
//!     .collect();
//! assert_eq!(names, ["member2", "member3"]);
//! ```
//!
//! ## Field Paths
//!
//! | Path              | Kind   | Source column        |
//! |-------------------|--------|----------------------|
//! | `member.id`       | Number | [`Member::ID`]       |
//! | `member.username` | String | [`Member::USERNAME`] |
//! | `member.age`      | Number | [`Member::AGE`]      |
//! | `member.team_id`  | Number | [`Member::TEAM_ID`]  |
//! | `team.id`         | Number | [`Team::ID`]         |
//! | `team.name`       | String | [`Team::NAME`]       |

mod condition;
mod dto;
mod entity;
mod error;
mod fixtures;
mod search;
mod store;

pub use condition::MemberSearchCondition;
pub use dto::MemberTeamDto;
pub use entity::{Member, MemberId, Team, TeamId};
pub use error::{Result, StoreError};
pub use fixtures::{Fixtures, MemberFixture, TeamFixture};
pub use search::{age_eq, age_goe, age_loe, combine, team_name_eq, username_and_age, username_eq};
pub use store::MemberStore;
