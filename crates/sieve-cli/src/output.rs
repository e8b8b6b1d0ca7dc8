//! Rendering of search results.

use std::fmt::{self, Write as _};

use anyhow::Result;
use serde::Serialize;
use sieve::Predicate;
use sieve_store::MemberTeamDto;
use unicode_width::UnicodeWidthStr;

use crate::cli::OutputFormat;

#[derive(Serialize)]
struct Explained<'a> {
    predicate: &'a Predicate,
    rows: &'a [MemberTeamDto],
}

/// Renders `rows`, preceded by `predicate` when one is given.
pub fn render(
    format: OutputFormat,
    rows: &[MemberTeamDto],
    predicate: Option<&Predicate>,
) -> Result<String> {
    let out = match (format, predicate) {
        (OutputFormat::Text, _) => render_text(rows, predicate)?,
        (OutputFormat::Json, Some(predicate)) => {
            serde_json::to_string_pretty(&Explained { predicate, rows })? + "\n"
        }
        (OutputFormat::Json, None) => serde_json::to_string_pretty(rows)? + "\n",
        (OutputFormat::Yaml, Some(predicate)) => {
            serde_yaml::to_string(&Explained { predicate, rows })?
        }
        (OutputFormat::Yaml, None) => serde_yaml::to_string(rows)?,
    };
    Ok(out)
}

fn render_text(
    rows: &[MemberTeamDto],
    predicate: Option<&Predicate>,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if let Some(predicate) = predicate {
        writeln!(out, "where: {predicate}")?;
    }

    let width = rows
        .iter()
        .map(|row| row.username.width())
        .chain(std::iter::once("USERNAME".width()))
        .max()
        .unwrap_or_default();

    writeln!(out, "{:>4}  {}  {:>4}  TEAM", "ID", pad("USERNAME", width), "AGE")?;
    for row in rows {
        writeln!(
            out,
            "{:>4}  {}  {:>4}  {}",
            row.member_id.0,
            pad(&row.username, width),
            row.age,
            row.team_name.as_deref().unwrap_or("-"),
        )?;
    }
    writeln!(out, "({} rows)", rows.len())?;
    Ok(out)
}

// Pads to a terminal column width; wide characters take two columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
