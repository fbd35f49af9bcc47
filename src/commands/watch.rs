use crate::OutputFormat;
use crate::commands::check::client_for;
use crate::config::Config;
use crate::error::StatusError;
use crate::status::presenter::{Presenter, RequestToken};
use crate::status::render::render;
use crate::status::{Classification, classify};
use crate::torn::client::TornClient;
use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

type Outcome = (RequestToken, Result<Classification, StatusError>);

/// Poll the travel status every `interval` seconds and print each update.
///
/// Ticks that arrive while the latest request is still in flight are
/// skipped, so a slow API delays updates instead of starving them.
pub fn watch(
    config: &Config,
    key: Option<&str>,
    interval: Option<u64>,
    count: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let interval_secs = interval.unwrap_or(config.watch.interval_secs);
    if interval_secs == 0 {
        anyhow::bail!("Watch interval must be greater than 0");
    }

    // Held here so the blocking client is never dropped on an async thread.
    let client = Arc::new(client_for(config, key)?);

    info!("Watching travel status every {}s", interval_secs);
    tokio::runtime::Runtime::new()?.block_on(poll(
        Arc::clone(&client),
        Duration::from_secs(interval_secs),
        count,
        format,
    ))
}

async fn poll(
    client: Arc<TornClient>,
    interval: Duration,
    count: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();
    let mut presenter = Presenter::default();
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut applied = 0u32;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if presenter.is_pending() {
                    debug!("Previous request still in flight; skipping tick");
                    continue;
                }

                let token = presenter.begin();
                let client = Arc::clone(&client);
                let tx = tx.clone();
                tokio::task::spawn_blocking(move || {
                    let outcome = client.fetch_travel().map(|record| classify(&record));
                    // Receiver is gone once watching has stopped
                    let _ = tx.send((token, outcome));
                });
            }
            Some((token, outcome)) = rx.recv() => {
                if !presenter.apply(token, outcome) {
                    warn!("Discarded stale response for request {}", token);
                    continue;
                }

                println!("{}", render(presenter.state(), format)?);
                applied += 1;
                if count.is_some_and(|limit| applied >= limit) {
                    break;
                }
            }
        }
    }

    Ok(())
}
