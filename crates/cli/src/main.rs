use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::{
    DEFAULT_CORS_ORIGINS, DEFAULT_LLM_BASE_URL, DEFAULT_LLM_MODEL, DEFAULT_RAG_BACKEND_URL,
    DEFAULT_TOP_K,
};
use folio_llm::LlmClient;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio backend: AI game guides and RAG question answering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create or update the Postgres schema (requires DATABASE_URL)
    Migrate,
    /// Print the guide for a game, generating and caching it if needed
    Guide { name: String },
    /// Ask the RAG backend a question and print its JSON answer
    Ask {
        question: String,
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: u32,
    },
}

/// Loads `.env.local` then `.env`; variables already set win. Missing files are fine.
fn load_env_files() {
    for file in [".env.local", ".env"] {
        dotenvy::from_filename(file).ok();
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

pub(crate) fn get_database_url() -> Option<String> {
    env_non_empty("DATABASE_URL")
}

/// Completion client, or `None` when `DEEPSEEK_API_KEY` is unset.
pub(crate) fn get_llm_client() -> Result<Option<Arc<LlmClient>>> {
    let Some(api_key) = env_non_empty("DEEPSEEK_API_KEY") else {
        tracing::warn!("DEEPSEEK_API_KEY not set, only cached guides will be served");
        return Ok(None);
    };
    let base_url =
        env_non_empty("DEEPSEEK_BASE_URL").unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_owned());
    let model = env_non_empty("DEEPSEEK_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_owned());
    let client = LlmClient::new(api_key, base_url)?.with_model(model);
    Ok(Some(Arc::new(client)))
}

pub(crate) fn get_rag_base_url() -> String {
    env_non_empty("RAG_BACKEND_URL")
        .or_else(|| env_non_empty("FASTAPI_URL"))
        .unwrap_or_else(|| DEFAULT_RAG_BACKEND_URL.to_owned())
}

pub(crate) fn get_cors_origins() -> Vec<String> {
    env_non_empty("FOLIO_CORS_ORIGINS")
        .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_owned())
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_owned)
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    load_env_files();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::Migrate => commands::migrate::run().await,
        Commands::Guide { name } => commands::guide::run(&name).await,
        Commands::Ask { question, top_k } => commands::ask::run(question, top_k).await,
    }
}
