use anyhow::{Context, Result};
use tokio::task::JoinError;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use headless_blog::config::Config;
use headless_blog::web;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    info!("Starting headless-blog");

    // The content endpoint is validated here; a bad value stops startup.
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(
        endpoint = %config.graphcms_endpoint,
        comments_api = %config.comments_api_url,
        authenticated = config.graphcms_token.is_some(),
        "Configuration loaded"
    );

    let web_handle = tokio::spawn(web::serve(config));

    tokio::select! {
        () = shutdown_signal() => info!("Shutting down..."),
        result = web_handle => return server_exited(result),
    }

    info!("Shutdown complete");

    Ok(())
}

/// Turn the end of the web server task into the process result. The server
/// only returns on failure, so every outcome here is an error.
fn server_exited(result: Result<Result<()>, JoinError>) -> Result<()> {
    result.context("Web server task panicked")??;
    anyhow::bail!("Web server exited unexpectedly")
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,headless_blog=debug"));

    // Check if JSON logging is requested
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_is_propagated() {
        let err = server_exited(Ok(Err(anyhow::anyhow!("Failed to bind web server")))).unwrap_err();
        assert!(err.to_string().contains("Failed to bind web server"));
    }

    #[test]
    fn test_clean_server_exit_is_still_an_error() {
        assert!(server_exited(Ok(Ok(()))).is_err());
    }

    #[tokio::test]
    async fn test_panicked_server_task_is_an_error() {
        let result = tokio::spawn(async { panic!("boom"); }).await;
        let err = server_exited(result.map(|()| Ok(()))).unwrap_err();
        assert!(err.to_string().contains("panicked"));
    }
}
