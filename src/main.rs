use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use project_tracker::{AppState, Config, db, logging, schema};

#[derive(Parser)]
#[command(name = "project-tracker")]
#[command(about = "GraphQL API for projects and clients")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Keep records in memory instead of Postgres
        #[arg(long)]
        in_memory: bool,
    },

    /// Apply pending database migrations and exit
    Migrate,

    /// Print the GraphQL schema in SDL form
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    match cli.command {
        Commands::Serve { port, in_memory } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }

            let state = if in_memory {
                tracing::warn!("using in-memory store, records are lost on exit");
                AppState::with_store(config, Arc::new(db::MemoryStore::new()))
            } else {
                AppState::new(config).await?
            };
            tracing::info!("record store ready");

            project_tracker::start_server(state).await
        }
        Commands::Migrate => {
            let config = Config::load()?;
            db::init(&config).await?;
            tracing::info!("migrations complete");
            Ok(())
        }
        Commands::Schema => {
            println!("{}", schema::sdl());
            Ok(())
        }
    }
}
