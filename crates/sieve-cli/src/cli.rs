//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use sieve_store::MemberSearchCondition;

/// Search members by optional username, team name and age range.
///
/// Blank string filters are ignored. Without `--fixtures` the built-in
/// sample data set is searched.
#[derive(Debug, Parser)]
#[command(name = "sieve", version, about)]
pub struct Cli {
    /// Fixture file to load (.json, .yaml or .yml)
    #[arg(long, value_name = "PATH")]
    pub fixtures: Option<PathBuf>,

    /// Exact member username
    #[arg(long)]
    pub username: Option<String>,

    /// Exact team name
    #[arg(long)]
    pub team_name: Option<String>,

    /// Minimum age, inclusive
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub age_goe: Option<i32>,

    /// Maximum age, inclusive
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub age_loe: Option<i32>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print the search predicate before the results
    #[arg(long)]
    pub explain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl Cli {
    pub fn condition(&self) -> MemberSearchCondition {
        MemberSearchCondition {
            username: self.username.clone(),
            team_name: self.team_name.clone(),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        }
    }

    /// Log level spec for the verbosity count.
    pub fn log_spec(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
