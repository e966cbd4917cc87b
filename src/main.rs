use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use home_in_israel::api::{build_app, AppState};
use home_in_israel::catalog::Catalog;
use home_in_israel::config::load_app_config;
use home_in_israel::i18n::ResourceStore;
use home_in_israel::leads::{HttpLeadSubmitter, LeadSubmitter, SimulatedSubmitter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_app_config().context("failed to load configuration")?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("🏠 Home in Israel");
    info!(env = %config.env, bind_addr = %config.bind_addr, "starting");

    let catalog = Catalog::showcase().context("invalid showcase catalog")?;
    let resources = ResourceStore::embedded().context("invalid translation resources")?;

    let submitter: Arc<dyn LeadSubmitter> = match &config.lead_endpoint {
        Some(endpoint) => Arc::new(
            HttpLeadSubmitter::new(
                endpoint.as_str(),
                config.lead_timeout(),
                &config.lead_user_agent,
            )
            .context("failed to build lead client")?,
        ),
        None => Arc::new(SimulatedSubmitter::with_delay(config.simulated_delay())),
    };
    info!(submitter = submitter.name(), "lead capture ready");

    let app = build_app(AppState::new(catalog, resources, submitter));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("received shutdown signal, starting graceful shutdown");
}
