//! orgscout - resolve nonprofits by EIN and discover their content pages.
//!
//! ```text
//! orgscout resolve 75-3139219
//! orgscout discover https://pastorserve.org
//! ```

mod config;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orgscout::{
    CrawlOrchestrator, HttpFetcher, MemoryStore, OpenAiLanguageModel, OrganizationResolver,
    OrganizationStore, PostgresStore, ProfileExtractor, RelevanceRanker,
};
use openai_client::OpenAIClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "orgscout")]
#[command(about = "Nonprofit profile resolution and content discovery")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get or create the organization for an EIN and print it as JSON
    Resolve { ein: String },

    /// Print up to ten content URLs linked from a seed page
    Discover {
        url: String,
        /// Fall back to unranked links when the model answer is unusable
        #[arg(long)]
        unranked: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,orgscout=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let ai = Arc::new(OpenAiLanguageModel::from_client(OpenAIClient::new(
        config.openai_api_key.clone(),
    )));
    let extractor = ProfileExtractor::new(ai, config.openai_model.clone());
    let fetcher = Arc::new(HttpFetcher::new().context("Failed to build HTTP client")?);

    match cli.command {
        Commands::Resolve { ein } => {
            let store = connect_store(&config).await?;
            let resolver = OrganizationResolver::new(fetcher, extractor, store)
                .with_config(config.resolver_config()?);

            let organization = resolver
                .resolve(&ein)
                .await
                .with_context(|| format!("Failed to resolve EIN {}", ein))?;

            println!("{}", serde_json::to_string_pretty(&organization)?);
        }
        Commands::Discover { url, unranked } => {
            let orchestrator = CrawlOrchestrator::new(fetcher, RelevanceRanker::sharing(&extractor));

            let urls = if unranked {
                orchestrator.discover_content_urls_or_unranked(&url).await
            } else {
                orchestrator.discover_content_urls(&url).await
            }
            .with_context(|| format!("Failed to discover content URLs for {}", url))?;

            for url in urls {
                println!("{}", url);
            }
        }
    }

    Ok(())
}

async fn connect_store(config: &Config) -> Result<Arc<dyn OrganizationStore>> {
    match &config.database_url {
        Some(database_url) => {
            let store = PostgresStore::new(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Using PostgreSQL organization store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory organization store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
