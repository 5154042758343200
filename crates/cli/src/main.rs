//! `hiredata` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server.
//! - `migrate` — run pending database migrations.

use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hiredata",
    about = "HR data ingestion and reporting API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, env = "DATABASE_URL", default_value = "sqlite://hiredata.db")]
        database_url: String,
        /// Expose `POST /employees/sql-test/`, which executes
        /// caller-supplied SQL verbatim.  Do not enable on anything
        /// reachable from untrusted clients.
        #[arg(long, env = "ENABLE_SQL_CONSOLE")]
        enable_sql_console: bool,
    },
    /// Run pending database migrations.
    Migrate {
        #[arg(long, env = "DATABASE_URL", default_value = "sqlite://hiredata.db")]
        database_url: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, database_url, enable_sql_console } => {
            info!("Starting API server on {bind}");
            let pool = db::pool::create_pool(&database_url, 10)
                .await
                .expect("failed to connect to database");
            db::pool::run_migrations(&pool)
                .await
                .expect("migration failed");
            let state = api::AppState {
                pool,
                config: api::ApiConfig { enable_sql_console },
            };
            api::serve(&bind, state).await.expect("server failed");
        }
        Command::Migrate { database_url } => {
            info!("Running migrations against {database_url}");
            let pool = db::pool::create_pool(&database_url, 2)
                .await
                .expect("failed to connect to database");
            db::pool::run_migrations(&pool)
                .await
                .expect("migration failed");
            info!("Migrations applied successfully");
        }
    }
}
