//! Ordkort Web CLI
//!
//! Starts the HTTP server for the language-learning pipeline.

use ordkort_web::{config::WebConfig, start_server, WebError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), WebError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        let config_path = &args[2];
        WebConfig::from_file(config_path)?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using default configuration");
        eprintln!("Usage: ordkort-web --config <path-to-config.toml>");
        eprintln!();
        WebConfig::default_test_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Ordkort Web - Swedish Vocabulary Flashcards");
    println!();
    println!("USAGE:");
    println!("    ordkort-web --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    ordkort-web --config config/ordkort.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8080)");
    println!("    - ollama_endpoint: Ollama API endpoint (default: http://localhost:11434)");
    println!("    - model: Model name (default: gemma3:4b)");
    println!("    - temperature: Sampling temperature (default: 0.5)");
    println!("    - wiki_language: Wikipedia language edition (default: sv)");
    println!("    - [extractor]: max_article_length, llm_timeout_secs, dedup_terms");
    println!();
}
