//! Fixture data for seeding a store.
//!
//! Fixtures are plain data: teams by name, and members that reference a team
//! by name. They load from JSON or YAML files.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamFixture {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberFixture {
    pub username: String,
    pub age: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

/// Teams and members to persist, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub teams: Vec<TeamFixture>,
    pub members: Vec<MemberFixture>,
}

impl Fixtures {
    /// The four-member sample data set.
    ///
    /// | username | age | team  |
    /// |----------|-----|-------|
    /// | member1  | 10  | teamA |
    /// | member2  | 20  | teamA |
    /// | member3  | 30  | teamB |
    /// | member4  | 40  | teamB |
    pub fn sample() -> Self {
        let member = |username: &str, age, team: &str| MemberFixture {
            username: username.to_string(),
            age,
            team: Some(team.to_string()),
        };
        Self {
            teams: vec![
                TeamFixture {
                    name: "teamA".to_string(),
                },
                TeamFixture {
                    name: "teamB".to_string(),
                },
            ],
            members: vec![
                member("member1", 10, "teamA"),
                member("member2", 20, "teamA"),
                member("member3", 30, "teamB"),
                member("member4", 40, "teamB"),
            ],
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Loads fixtures from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => return Err(StoreError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixtures = parse(&content)?;
        debug!(
            "event=fixtures_read module=fixtures path={} teams={} members={}",
            path.display(),
            fixtures.teams.len(),
            fixtures.members.len()
        );
        Ok(fixtures)
    }
}
