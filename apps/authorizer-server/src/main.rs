use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use token_authorizer::TokenAuthorizerModule;
use tokio::net::TcpListener;
use tracing::info;

mod config;
mod logging;

use config::AppConfig;

/// Custom authorizer for API gateway token validation.
#[derive(Parser, Debug)]
#[command(name = "authorizer-server", version, about)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the authorizer endpoint (default)
    Run {
        /// Override `server.bind_addr`
        #[arg(long)]
        bind: Option<String>,
    },
    /// Load and validate the configuration, then exit
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = AppConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Run { bind: None }) {
        Commands::Check => check(&cfg),
        Commands::Run { bind } => {
            if let Some(bind) = bind {
                cfg.server.bind_addr = bind;
            }
            logging::init(&cfg.logging)?;
            run(cfg).await
        }
    }
}

fn check(cfg: &AppConfig) -> anyhow::Result<()> {
    let addr = cfg.server.socket_addr()?;
    let module = TokenAuthorizerModule::init(&cfg.authorizer);
    println!("configuration OK");
    println!("  bind_addr:         {addr}");
    println!("  log level:         {}", cfg.logging.level);
    println!("  principal_id:      {}", cfg.authorizer.principal_id);
    println!("  secret configured: {}", module.service().has_secret());
    Ok(())
}

async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = cfg.server.socket_addr()?;
    let module = TokenAuthorizerModule::init(&cfg.authorizer);
    let app = module.router();

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "authorizer listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("authorizer stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
    info!("shutdown signal received");
}
