// src/main.rs

// Modules defined in the crate
mod api;
mod config;
mod constants;
mod error;
mod model;
mod types;

// Specific imports
use crate::api::{NotionHttpClient, PageWriter};
use crate::config::{CommandLineInput, WriterConfig};
use crate::error::AppError;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .build(Root::builder().appender("stdout").build(log_level))?;

    log4rs::init_config(config)?;
    Ok(())
}

/// Builds the request from CLI input, sends it, and reports the outcome.
async fn execute_create(config: &WriterConfig) -> Result<(), AppError> {
    let client = NotionHttpClient::with_timeout(config.credentials.clone(), config.timeout)?;
    let request = config.page_request();

    log::debug!(
        "Create request body: {}",
        serde_json::to_string_pretty(&request)
            .unwrap_or_else(|_| "Failed to serialize".to_string())
    );

    let page = client.create_page(&request).await?;

    println!("✓ Page created: {}", page.id);
    if let Some(url) = &page.url {
        println!("  View here: {}", url);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = WriterConfig::resolve(cli)?;

    if let Err(err) = execute_create(&config).await {
        match &err {
            AppError::NotionService { code, message, .. } if code.is_auth() => {
                eprintln!("✗ Notion rejected the credentials ({}): {}", code, message);
            }
            AppError::NotionService { code, message, .. } if code.is_schema() => {
                eprintln!(
                    "✗ Request does not match the database schema ({}): {}",
                    code, message
                );
            }
            _ => eprintln!("✗ {}", err),
        }
        std::process::exit(1);
    }

    Ok(())
}
