use super::config::{Overrides, resolve};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use vchat_application::{Route, Router, ShareView};
use vchat_interaction::HttpSessionSource;

pub async fn run(path: &str, overrides: Overrides, wait_secs: u64) -> Result<()> {
    let route = Router::resolve(path)?;
    tracing::info!("Resolved {} to route {}", path, route.name());

    let session_id = match &route {
        Route::Default => {
            println!("Default view: no shared session to open.");
            return Ok(());
        }
        Route::Share { session_id } => session_id.clone(),
    };

    let config = resolve(overrides)?;
    let source = HttpSessionSource::from_config(&config)?;
    let view = ShareView::open(config, Arc::new(source), session_id);

    let mut settled = view.settled();
    let finished =
        tokio::time::timeout(Duration::from_secs(wait_secs), settled.wait_for(|done| *done))
            .await
            .is_ok_and(|signal| signal.is_ok());

    if !finished {
        tracing::warn!(
            "Session {} still loading after {}s; printing current state",
            view.session_id(),
            wait_secs
        );
    }

    let snapshot = view.state().snapshot().await;
    let output =
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize share view state")?;
    println!("{}", output);

    Ok(())
}
