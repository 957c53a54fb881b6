#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::Args;
use clap::Parser;
use faultmap_config::Config;
use faultmap_registry::RegistryHandle;
use faultmap_server::Server;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(&args.config)?;

    if let Some(listen) = args.listen {
        config.server.listen_address = Some(listen);
    }

    faultmap_telemetry::init(config.telemetry.as_ref(), "info")?;

    tracing::info!(config_path = %args.config.display(), "starting faultmap");

    let registry = RegistryHandle::load(&config.registry)
        .map_err(|e| anyhow::anyhow!("failed to load error registry: {e}"))?;

    if args.check {
        report(&registry);
        return Ok(());
    }

    let server = Server::with_registry(config, registry);

    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    server.serve(shutdown).await?;

    tracing::info!("faultmap stopped");
    Ok(())
}

/// Log what the loaded registry contains
fn report(registry: &RegistryHandle) {
    let snapshot = registry.snapshot();

    tracing::info!(definitions = snapshot.store().len(), "error definitions loaded");
    tracing::debug!(codes = ?snapshot.store().codes(), "known error codes");

    for language in snapshot.catalog().languages() {
        tracing::info!(
            language,
            messages = snapshot.catalog().message_count(language),
            "message catalog loaded"
        );
    }
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
