use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use traffic_watcher::cli::{Cli, TrafficCommandHandler, report_failure, require_counter_source};
use traffic_watcher::collectors::SystemCounterSource;
use traffic_watcher::config::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    // Checked before the menu so nothing is shown on an unsupported host
    let source = match require_counter_source(SystemCounterSource::new(), &mut io::stderr()) {
        Ok(source) => source,
        Err(code) => return code,
    };

    match run(cli, source).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e, &mut io::stderr()),
    }
}

async fn run(cli: Cli, source: SystemCounterSource) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    let handler =
        TrafficCommandHandler::new(source, io::stdout(), settings, CancellationToken::new())
            .with_ctrl_c();
    handler.handle(cli.command, &mut io::stdin().lock()).await?;

    Ok(())
}
