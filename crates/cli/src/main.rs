use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pokedex_catalog::CatalogClient;
use pokedex_core::AppConfig;
use pokedex_http::{create_router, AppState, SeedResponse};
use pokedex_service::{PokemonService, SeedService};
use pokedex_storage::PgStorage;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Pokemon CRUD backend with catalog seeding", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Reset the collection and import it from the remote catalog.
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let storage = Arc::new(PgStorage::connect(&config.database_url).await?);
    let pokemon_service = Arc::new(PokemonService::new(storage, config.default_limit));
    let catalog = Arc::new(CatalogClient::new(&config.catalog_url)?);
    let seed_service = Arc::new(SeedService::new(Arc::clone(&pokemon_service), catalog));

    match cli.command {
        Commands::Serve { port, host } => {
            let state = Arc::new(AppState { pokemon_service, seed_service });
            let router = create_router(state);
            let addr = format!("{host}:{port}");
            tracing::info!("Starting HTTP server on {addr}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::Seed => {
            let outcome = seed_service.populate().await?;
            println!("{}", serde_json::to_string_pretty(&SeedResponse::from(outcome))?);
        },
    }

    Ok(())
}
