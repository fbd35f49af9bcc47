use crate::OutputFormat;
use crate::config::Config;
use crate::status::classify;
use crate::status::render::{PresentationState, StatusPanel, render};
use crate::torn::client::TornClient;
use anyhow::Result;

/// Build a client from the resolved key and config overrides.
///
/// Fails with `MissingApiKey` before any network traffic.
pub fn client_for(config: &Config, key: Option<&str>) -> Result<TornClient> {
    let api_key = config.resolve_api_key(key)?;
    build_client(config, &api_key)
}

fn build_client(config: &Config, api_key: &str) -> Result<TornClient> {
    let client = TornClient::new(api_key, config.torn.timeout())?;

    Ok(match &config.torn.api_url {
        Some(url) => client.with_base_url(url),
        None => client,
    })
}

/// Fetch the travel status once and print it.
///
/// In JSON mode failures are also printed as an error state on stdout.
pub fn check(config: &Config, key: Option<&str>, format: OutputFormat) -> Result<()> {
    let outcome = match config.resolve_api_key(key) {
        Ok(api_key) => build_client(config, &api_key)?
            .fetch_travel()
            .map(|record| classify(&record)),
        Err(err) => Err(err),
    };

    match outcome {
        Ok(classification) => {
            let state = PresentationState::Status(StatusPanel::from(classification));
            println!("{}", render(&state, format)?);
            Ok(())
        }
        Err(err) => {
            if format == OutputFormat::Json {
                println!("{}", render(&PresentationState::error(&err), format)?);
            }
            Err(err.into())
        }
    }
}
