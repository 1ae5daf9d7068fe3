//! geoaddr - address book HTTP service.
//!
//! - `geoaddr [serve] [--bind ADDR]` - run the HTTP server
//! - `geoaddr dump` - print every stored address
//!
//! Both read `geoaddr.toml` from `--data-dir` (created with defaults when
//! missing) and open the database there. `serve` sets up logging before that
//! so that startup failures land in the log file.

mod commands;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::ArgMatches;
use tracing::{error, info};

use geoaddr_executor::{Command, Database, Executor, Output};
use geoaddr_server::{init_logging, router, settings_for};

use commands::{build_cli, DEFAULT_DATA_DIR};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();

    let data_dir = matches
        .get_one::<String>("data-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

    match matches.subcommand() {
        Some(("dump", _)) => dump(open_database(&data_dir)?),
        Some(("serve", sub)) => serve(&data_dir, Some(sub)).await,
        _ => serve(&data_dir, None).await,
    }
}

fn open_database(data_dir: &Path) -> anyhow::Result<Arc<Database>> {
    Database::open(data_dir)
        .with_context(|| format!("failed to open database in {}", data_dir.display()))
}

async fn serve(data_dir: &Path, args: Option<&ArgMatches>) -> anyhow::Result<()> {
    // Logging comes first so that a failed open is recorded too.
    let settings = settings_for(data_dir);
    let _guard = init_logging(data_dir, &settings.file, &settings.level)
        .context("failed to initialize logging")?;

    // Schema bootstrap happens here, before any listener exists.
    let db = open_database(data_dir).map_err(|e| {
        error!(data_dir = %data_dir.display(), error = %format!("{:#}", e), "startup failed");
        e
    })?;
    let config = db.config().clone();

    let bind: SocketAddr = match args.and_then(|m| m.get_one::<String>("bind")) {
        Some(addr) => addr
            .parse()
            .with_context(|| format!("invalid --bind address: {}", addr))?,
        None => config.bind_addr()?,
    };

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))
        .map_err(|e| {
            error!(%bind, error = %format!("{:#}", e), "startup failed");
            e
        })?;
    info!(%bind, data_dir = %db.data_dir().display(), "geoaddr listening");

    axum::serve(listener, router(Executor::new(db)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("geoaddr stopped");
    Ok(())
}

/// Print every row as one JSON object per line.
fn dump(db: Arc<Database>) -> anyhow::Result<()> {
    let executor = Executor::new(db);
    match executor.execute(Command::AddressList)? {
        Output::Addresses(all) => {
            for address in &all {
                println!("{}", serde_json::to_string(address)?);
            }
            Ok(())
        }
        other => anyhow::bail!("unexpected output: {:?}", other),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
