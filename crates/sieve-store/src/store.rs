//! In-memory member and team tables.
//!
//! # Responsibility
//! - Own the member and team tables and assign sequential ids.
//! - Evaluate predicates against members and the member/team join.
//! - Apply bulk updates to every member a predicate selects.
//!
//! # Invariants
//! - Ids start at 1 and are never reused.
//! - A stored member's team id always refers to a stored team.
//! - Iteration order is ascending id order, so results are deterministic.

use std::collections::{BTreeMap, HashMap};

use log::{debug, info};
use sieve::{Predicate, Seekable};

use crate::condition::MemberSearchCondition;
use crate::dto::MemberTeamDto;
use crate::entity::{Member, MemberId, Team, TeamId};
use crate::error::{Result, StoreError};
use crate::fixtures::Fixtures;
use crate::search::{combine, username_eq};

/// Member and team tables with predicate-driven search.
#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    teams: BTreeMap<TeamId, Team>,
    members: BTreeMap<MemberId, Member>,
    last_team_id: u64,
    last_member_id: u64,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store populated from `fixtures`.
    ///
    /// Teams are persisted first, in declaration order, then members. A
    /// member's team is resolved by name.
    ///
    /// # Errors
    /// - [`StoreError::DuplicateTeamName`] when a team name is declared twice.
    /// - [`StoreError::UnknownTeamName`] when a member names an undeclared team.
    pub fn from_fixtures(fixtures: &Fixtures) -> Result<Self> {
        let mut store = Self::new();
        let mut team_ids: HashMap<&str, TeamId> = HashMap::new();

        for team in &fixtures.teams {
            if team_ids.contains_key(team.name.as_str()) {
                return Err(StoreError::DuplicateTeamName(team.name.clone()));
            }
            let id = store.persist_team(team.name.clone());
            team_ids.insert(team.name.as_str(), id);
        }

        for member in &fixtures.members {
            let team = match member.team.as_deref() {
                Some(name) => Some(
                    *team_ids
                        .get(name)
                        .ok_or_else(|| StoreError::UnknownTeamName(name.to_string()))?,
                ),
                None => None,
            };
            store.persist_member(member.username.clone(), member.age, team)?;
        }

        info!(
            "event=fixtures_loaded module=store teams={} members={}",
            store.teams.len(),
            store.members.len()
        );
        Ok(store)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Stores a new team and returns its id.
    pub fn persist_team(&mut self, name: impl Into<String>) -> TeamId {
        self.last_team_id += 1;
        let id = TeamId(self.last_team_id);
        let team = Team {
            id,
            name: name.into(),
        };
        debug!("event=team_persisted module=store id={} name={}", id, team.name);
        self.teams.insert(id, team);
        id
    }

    /// Stores a new member and returns its id.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownTeam`] when `team` is not a stored team;
    /// nothing is stored in that case.
    pub fn persist_member(
        &mut self,
        username: impl Into<String>,
        age: i32,
        team: Option<TeamId>,
    ) -> Result<MemberId> {
        if let Some(team_id) = team {
            if !self.teams.contains_key(&team_id) {
                return Err(StoreError::UnknownTeam(team_id));
            }
        }

        self.last_member_id += 1;
        let id = MemberId(self.last_member_id);
        let member = Member {
            id,
            username: username.into(),
            age,
            team_id: team,
        };
        debug!(
            "event=member_persisted module=store id={} username={} age={} team={}",
            id,
            member.username,
            member.age,
            team.map_or_else(|| "none".to_string(), |t| t.to_string())
        );
        self.members.insert(id, member);
        Ok(id)
    }

    /// Sets the username of every member whose joined row matches
    /// `predicate`. Returns the number of members updated.
    pub fn bulk_set_username(&mut self, predicate: &Predicate, username: &str) -> usize {
        let updated = self.update_where(predicate, |member| {
            member.username = username.to_string();
        });
        info!(
            "event=bulk_update module=store op=set_username matched={} predicate=\"{}\"",
            updated, predicate
        );
        updated
    }

    /// Adds `delta` to the age of every member whose joined row matches
    /// `predicate`, saturating at the `i32` bounds. Returns the number of
    /// members updated.
    pub fn bulk_add_age(&mut self, predicate: &Predicate, delta: i32) -> usize {
        let updated = self.update_where(predicate, |member| {
            member.age = member.age.saturating_add(delta);
        });
        info!(
            "event=bulk_update module=store op=add_age delta={} matched={} predicate=\"{}\"",
            delta, updated, predicate
        );
        updated
    }

    // All matches are decided before any row is modified.
    fn update_where<F>(&mut self, predicate: &Predicate, mut apply: F) -> usize
    where
        F: FnMut(&mut Member),
    {
        let matched: Vec<MemberId> = self
            .members
            .values()
            .filter(|member| self.selects(member, predicate))
            .map(|member| member.id)
            .collect();

        for id in &matched {
            if let Some(member) = self.members.get_mut(id) {
                apply(member);
            }
        }
        matched.len()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn find_by_id(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    pub fn find_team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    /// Finds a team by exact name.
    pub fn find_team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.values().find(|team| team.name == name)
    }

    /// All members in id order.
    pub fn find_all(&self) -> Vec<&Member> {
        self.members.values().collect()
    }

    /// Members whose username equals `username` exactly.
    ///
    /// Unlike a search condition, a blank `username` is not ignored: it only
    /// matches members whose username is that exact string.
    pub fn find_by_username(&self, username: &str) -> Vec<&Member> {
        self.query(&Member::USERNAME.eq(username))
    }

    /// Members matching `predicate`, in id order.
    ///
    /// The predicate sees the member joined with its team, so team clauses
    /// apply here just as in [`search_by`].
    ///
    /// [`search_by`]: MemberStore::search_by
    pub fn query(&self, predicate: &Predicate) -> Vec<&Member> {
        self.members
            .values()
            .filter(|member| self.selects(member, predicate))
            .collect()
    }

    /// The member left-join team projection filtered by `predicate`.
    ///
    /// Every member yields one row; members without a team carry `None` team
    /// columns. Rows come back in member id order.
    pub fn search_by(&self, predicate: &Predicate) -> Vec<MemberTeamDto> {
        let rows: Vec<MemberTeamDto> = self
            .members
            .values()
            .map(|member| join_row(member, &self.teams))
            .filter(|row| predicate.matches(row, MemberTeamDto::accessor))
            .collect();
        debug!(
            "event=search module=store predicate=\"{}\" rows={}",
            predicate,
            rows.len()
        );
        rows
    }

    /// Searches with the predicate built from `condition`.
    pub fn search(&self, condition: &MemberSearchCondition) -> Vec<MemberTeamDto> {
        self.search_by(&combine(condition))
    }

    /// Members matching a blank-aware username filter.
    ///
    /// A blank `username` matches every member.
    pub fn search_by_username(&self, username: Option<&str>) -> Vec<&Member> {
        self.query(&username_eq(username))
    }

    fn selects(&self, member: &Member, predicate: &Predicate) -> bool {
        predicate.matches(&join_row(member, &self.teams), MemberTeamDto::accessor)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}

fn join_row(member: &Member, teams: &BTreeMap<TeamId, Team>) -> MemberTeamDto {
    let team = member.team_id.and_then(|id| teams.get(&id));
    MemberTeamDto {
        member_id: member.id,
        username: member.username.clone(),
        age: member.age,
        team_id: team.map(|t| t.id),
        team_name: team.map(|t| t.name.clone()),
    }
}
