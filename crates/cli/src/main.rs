use clap::Parser;
use config::Config;
use flume::bounded;
use omnisight::{
    cli::Cli,
    report::{dump, report},
    signals::{SignalEvent, wait_for_signal},
};
use orchestrator::summarizer::DigestSummarizer;
use orchestrator::{LogAnalyst, SessionManager, SystemClock};
use std::io::{self, Write};
use std::sync::Arc;
use telemetry::Catalog;
use telemetry::view::LogFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(cli.verbosity.tracing_level_filter().into())
                .from_env_lossy(),
        )
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let mut config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::new(),
    };
    if let Some(seed) = cli.seed {
        config.generator.seed = Some(seed);
    }

    if cli.print_config {
        writeln!(io::stdout().lock(), "{}", config.to_toml_string()?)?;
        return Ok(());
    }

    let analyst = LogAnalyst::new(Arc::new(DigestSummarizer), &config.summarizer);
    let filter = LogFilter::new(&cli.query, cli.level.0);
    let mut sessions = SessionManager::new(config, Catalog::default(), Arc::new(SystemClock));
    sessions.login().await?;

    let deadline = async {
        match cli.duration {
            Some(duration) => tokio::time::sleep(duration).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(deadline);

    let mut reports = tokio::time::interval(cli.report_every);
    let (events_tx, events_rx) = bounded(8);

    loop {
        tokio::select! {
            _ = &mut deadline => {
                info!("run duration elapsed");
                break;
            }
            res = tokio::signal::ctrl_c() => {
                res?;
                info!("interrupted");
                break;
            }
            err = wait_for_signal(&events_tx) => {
                tracing::error!(error = ?err, "Error while waiting for signal");
                err?;
            }
            _ = reports.tick() => {
                if let Some(session) = sessions.current() {
                    report(session, &filter, &analyst).await;
                }
            }
            res = events_rx.recv_async() => {
                let event = res?;
                debug!(?event, "Received signal event");
                match event {
                    SignalEvent::Report => {
                        if let Some(session) = sessions.current() {
                            report(session, &filter, &analyst).await;
                        }
                    }
                    SignalEvent::Relogin => {
                        sessions.login().await?;
                    }
                }
            }
        }
    }

    if let (Some(path), Some(session)) = (&cli.dump, sessions.current()) {
        dump(session, path)?;
    }
    sessions.logout().await?;
    Ok(())
}
