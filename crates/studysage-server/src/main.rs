//! StudySage — turns uploaded PDF/DOCX documents into study aids.

use std::sync::Arc;

use studysage_core::StudySageConfig;
use studysage_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_help() {
    println!("StudySage — summaries, notes, flashcards and questions from documents");
    println!();
    println!("Usage: studysage [help]");
    println!();
    println!("Environment:");
    println!("  HOST                               Bind address (default 0.0.0.0)");
    println!("  PORT                               Bind port (default 10000)");
    println!("  STUDYSAGE_SUMMARIZER_URL           Summarization model endpoint (optional)");
    println!("  STUDYSAGE_SUMMARIZER_TOKEN         Bearer token for that endpoint");
    println!("  STUDYSAGE_SUMMARIZER_TIMEOUT_SECS  Model request timeout (default 60)");
    println!("  STUDYSAGE_MAX_UPLOAD_MB            Upload size limit (default 25)");
    println!("  RUST_LOG                           Log filter (default info)");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" | "help" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("Unknown command: {}. Use 'studysage help' for usage.", other);
                std::process::exit(1);
            }
        }
    }

    let config = StudySageConfig::from_env();
    let addr = config.bind_addr();

    // The summarizer backend is loaded once here and shared read-only.
    // Its blocking HTTP client must be built off the async runtime.
    let state = Arc::new(tokio::task::spawn_blocking(move || AppState::from_config(config)).await?);
    if !state.summarizer.has_model() {
        info!("Summaries will use frequency scoring only");
    }

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("StudySage server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
