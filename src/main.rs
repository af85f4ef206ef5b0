use std::path::PathBuf;
use std::sync::Arc;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gsos_clients::config::{Config, DatabaseConfig};
use gsos_clients::server::{AppState, create_router};
use gsos_clients::store::{SqliteStore, Store, check_connection};

#[derive(Parser)]
#[command(name = "gsos-clients")]
#[command(about = "Client record and pull history service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Serve {
        /// TOML file with [server] and [database] tables
        #[arg(long, env = "GSOS_CONFIG")]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, short, env = "PORT")]
        port: Option<u16>,

        /// Origin allowed to make credentialed cross-origin requests
        #[arg(long, env = "ALLOWED_ORIGIN")]
        allowed_origin: Option<String>,

        #[command(flatten)]
        database: DatabaseArgs,
    },

    /// Open one database connection and report the database time
    CheckDb {
        /// TOML file with a [database] table
        #[arg(long, env = "GSOS_CONFIG")]
        config: Option<PathBuf>,

        #[command(flatten)]
        database: DatabaseArgs,
    },
}

#[derive(Args)]
struct DatabaseArgs {
    /// Path to the SQLite database file
    #[arg(long = "database", env = "DATABASE_PATH")]
    path: Option<PathBuf>,

    /// Maximum number of pooled database connections
    #[arg(long, env = "DB_POOL_SIZE")]
    pool_size: Option<usize>,
}

impl DatabaseArgs {
    fn apply(self, config: &mut DatabaseConfig) {
        if let Some(path) = self.path {
            config.path = path;
        }
        if let Some(pool_size) = self.pool_size {
            config.pool_size = pool_size;
        }
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::default()),
    }
}

async fn run_serve(config: Config) -> anyhow::Result<()> {
    info!(
        "Attempting to connect to database at {}",
        config.database.path.display()
    );

    if let Err(e) = check_connection(&config.database) {
        error!("Database connection failed: {e}");
        error!("Check the database path and that its directory is writable");
        std::process::exit(1);
    }
    info!("Connected to database successfully");

    let store = SqliteStore::new(config.database.clone())?;
    store.initialize()?;

    let state = Arc::new(AppState::new(
        Arc::new(store),
        &config.server.allowed_origin,
    )?);

    let app = create_router(state);
    let addr = config.server.socket_addr()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn run_check_db(config: &DatabaseConfig) -> anyhow::Result<()> {
    match check_connection(config) {
        Ok(now) => {
            println!("Connected successfully at: {now}");
            Ok(())
        }
        Err(e) => bail!("Connection error: {e}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("gsos_clients=info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            allowed_origin,
            database,
        } => {
            let mut config = load_config(config)?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(allowed_origin) = allowed_origin {
                config.server.allowed_origin = allowed_origin;
            }
            database.apply(&mut config.database);

            run_serve(config).await?;
        }
        Commands::CheckDb { config, database } => {
            let mut config = load_config(config)?;
            database.apply(&mut config.database);

            run_check_db(&config.database)?;
        }
    }

    Ok(())
}
