use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Result, bail};
use clap::Parser;
use config::{EnvArgs, ShowcaseConfig};
use routes::Demo;
use showcase_backend_service::BackendServices;
use tokio::net::{TcpListener, UnixListener};
use tracing::{info, warn};

mod config;
mod routes;

#[derive(clap::Parser)]
struct Args {
	/// TOML configuration file. Settings are read from the environment when omitted.
	#[arg(short, long)]
	config: Option<PathBuf>,
	#[command(flatten)]
	env: EnvArgs,
	#[command(subcommand)]
	demo: Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(tracing::Level::INFO)
			.finish(),
	)?;

	let config = match &args.config {
		Some(config_path) => {
			let config = toml::from_str::<ShowcaseConfig>(&fs::read_to_string(config_path)?)?;
			info!("loaded configuration from file: {:?}", config_path);
			config
		}
		None => {
			info!("loaded configuration from environment");
			ShowcaseConfig::from(args.env)
		}
	};

	info!(demo = ?args.demo, "initializing backend services ...");
	let backend = BackendServices::new(config.clone().try_into()?).await?;
	if args.demo == Demo::Users {
		// the demo reports an unreachable database per request instead
		if let Err(error) = backend.database.migrate().await {
			warn!(%error, "failed to run database migrations");
		}
	}
	info!("initialized backend services");

	let services = ShowcaseServices {
		config: Arc::new(config),
		backend,
	};
	let listen_addr = services.config.web.listen.clone();
	let router = routes::make_router(args.demo, services)?;
	if let Some(path) = listen_addr.strip_prefix("unix://") {
		let path = PathBuf::from(path);
		_ = fs::remove_file(&path);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)?;
		}

		let listener = UnixListener::bind(&path)?;
		info!("listening on UDS: {:?}", path);
		axum::serve(listener, router)
			.with_graceful_shutdown(shutdown_signal())
			.await?;
	} else if let Some(addr) = listen_addr.strip_prefix("tcp://") {
		let listener = TcpListener::bind(addr).await?;
		info!("listening on TCP {}", listener.local_addr()?);
		axum::serve(listener, router)
			.with_graceful_shutdown(shutdown_signal())
			.await?;
	} else {
		bail!("unsupported web.listen schema")
	}

	info!("server stopped");
	Ok(())
}

/// Resolves on SIGINT, or SIGTERM as sent by container runtimes.
async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(error) = tokio::signal::ctrl_c().await {
			warn!(%error, "failed to listen for ctrl-c");
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		use tokio::signal::unix::{SignalKind, signal};
		match signal(SignalKind::terminate()) {
			Ok(mut sigterm) => {
				sigterm.recv().await;
			}
			Err(error) => {
				warn!(%error, "failed to listen for SIGTERM");
				std::future::pending::<()>().await;
			}
		}
	};
	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {}
		_ = terminate => {}
	}
	info!("shutting down");
}

/// State shared by all routes.
#[derive(Debug, Clone)]
pub struct ShowcaseServices {
	pub config: Arc<ShowcaseConfig>,
	pub backend: BackendServices,
}
