mod app;
mod config;
mod error;
mod handlers;

use anyhow::{Context, Result};
use clap::Parser;
use listenfd::ListenFd;
use sessionstore::SessionRegistry;
use sessionstore_axum::SessionLayer;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config};

/// sessiond - Demo server for sessionstore sessions
#[derive(Parser, Debug)]
#[command(name = "sessiond")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Session backend: memory, cache, remote or redis
    #[arg(long, default_value = "memory", env = "SESSION_BACKEND")]
    backend: String,

    /// Backend address, e.g. localhost:6379 or memory:// for an in-process cache
    #[arg(long, default_value = "localhost:6379", env = "SESSION_ADDR")]
    addr: String,

    /// Backend password
    #[arg(long, env = "SESSION_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Backend database index
    #[arg(long, env = "SESSION_DB")]
    db: Option<String>,
}

impl Cli {
    /// Positional backend options: password, then database.
    fn session_options(&self) -> Vec<&str> {
        match (self.password.as_deref(), self.db.as_deref()) {
            (password, Some(db)) => vec![password.unwrap_or_default(), db],
            (Some(password), None) => vec![password],
            (None, None) => Vec::new(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sessiond=debug,sessionstore=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let registry = SessionRegistry::create(&cli.backend, &cli.addr, &cli.session_options())
        .await
        .with_context(|| format!("failed to initialize `{}` session backend", cli.backend))?;

    let app = create_app(SessionLayer::new(registry, config.session_config()));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!(
        backend = %cli.backend,
        cookie = %config.cookie_name,
        "listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sessiond").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_session_options() {
        assert!(cli(&[]).session_options().is_empty());
        assert_eq!(cli(&["--password", "pw"]).session_options(), vec!["pw"]);
        assert_eq!(cli(&["--db", "2"]).session_options(), vec!["", "2"]);
        assert_eq!(
            cli(&["--password", "pw", "--db", "2"]).session_options(),
            vec!["pw", "2"]
        );
    }

    #[test]
    fn test_backend_flag() {
        let cli = cli(&["--backend", "redis", "--addr", "cache.internal:6379"]);
        assert_eq!(cli.backend, "redis");
        assert_eq!(cli.addr, "cache.internal:6379");
    }
}
