use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::info;
use sieve_store::{combine, Fixtures, MemberStore};

mod cli;
mod output;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.log_spec())?;

    let fixtures = match &cli.fixtures {
        Some(path) => Fixtures::load(path)
            .with_context(|| format!("loading fixtures from {}", path.display()))?,
        None => Fixtures::sample(),
    };
    let store = MemberStore::from_fixtures(&fixtures).context("building member store")?;

    let predicate = combine(&cli.condition());
    info!("event=search module=cli status=start predicate=\"{predicate}\"");
    let rows = store.search_by(&predicate);
    info!("event=search module=cli status=ok rows={}", rows.len());

    let explained = cli.explain.then_some(&predicate);
    print!("{}", output::render(cli.output, &rows, explained)?);
    Ok(())
}

// `RUST_LOG` takes precedence over the -v derived level.
fn init_logging(spec: &str) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(spec)
        .context("invalid log specification")?
        .log_to_stderr()
        .start()
        .context("failed to start logger")
}
