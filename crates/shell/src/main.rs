//! `congo` terminal entry point.

use std::io::{self, IsTerminal};

use anyhow::Context;
use tracing::info;

use congo_shell::{Session, ShellConfig};

fn main() -> anyhow::Result<()> {
    let config = ShellConfig::from_env().context("failed to load configuration")?;
    congo_observability::init(&config.log);

    let stdin = io::stdin();
    let mut session = Session::new(io::stdout().lock());
    if stdin.is_terminal() {
        session = session.with_prompt(config.prompt.clone());
    }

    info!(interactive = stdin.is_terminal(), "congo shell started");
    session.run(stdin.lock()).context("shell session failed")?;
    info!(items = session.manager().len(), "congo shell stopped");

    Ok(())
}
