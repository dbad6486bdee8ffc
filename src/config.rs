// src/config.rs
use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::error::AppError;
use crate::model::{Block, PageProperties, PageRequest, Parent};
use crate::types::{ApiKey, Credentials, DatabaseId};
use clap::Parser;
use std::time::Duration;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Title text for the new page (the database's title column)
    pub title: String,

    /// Name of the title property in the target database
    #[arg(long, default_value = "Name")]
    pub title_property: String,

    /// Numeric value to set on the number property
    #[arg(short = 'n', long)]
    pub number: Option<f64>,

    /// Name of the number property
    #[arg(long, default_value = "Number")]
    pub number_property: String,

    /// Select option to set (must exist in the remote schema)
    #[arg(short = 's', long)]
    pub select: Option<String>,

    /// Name of the select property
    #[arg(long, default_value = "Options")]
    pub select_property: String,

    /// Paragraph of page content; repeatable, order preserved
    #[arg(long = "paragraph")]
    pub paragraphs: Vec<String>,

    /// Target database URL or ID (overrides the DATABASE_ID environment variable)
    #[arg(short = 'd', long)]
    pub database: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved writer configuration — validated and ready to drive one create call.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    pub credentials: Credentials,
    pub timeout: Duration,
    #[allow(dead_code)] // Logging level is decided before resolve; kept for lib callers
    pub verbose: bool,
    title: String,
    title_property: String,
    number: Option<(String, f64)>,
    select: Option<(String, String)>,
    paragraphs: Vec<String>,
}

impl WriterConfig {
    /// Resolves a complete configuration from CLI input and environment.
    ///
    /// The two secrets come from `NOTION_API_KEY` and `DATABASE_ID`; the CLI
    /// can override the database but never the key.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = std::env::var("NOTION_API_KEY").map_err(|_| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;
        let api_key = ApiKey::new(api_key_str)?;

        let database_input = match cli.database {
            Some(input) => input,
            None => std::env::var("DATABASE_ID").map_err(|_| {
                AppError::MissingConfiguration(
                    "DATABASE_ID environment variable not set (or pass --database)".to_string(),
                )
            })?,
        };
        let database_id = DatabaseId::parse(&database_input)?;

        Ok(WriterConfig {
            credentials: Credentials::new(api_key, database_id),
            timeout: Duration::from_secs(cli.timeout),
            verbose: cli.verbose,
            title: cli.title,
            title_property: cli.title_property,
            number: cli.number.map(|n| (cli.number_property, n)),
            select: cli.select.map(|s| (cli.select_property, s)),
            paragraphs: cli.paragraphs,
        })
    }

    /// Assembles the page-creation request described by the CLI input.
    pub fn page_request(&self) -> PageRequest {
        let mut properties = PageProperties::new().with_title(
            self.title_property.as_str(),
            self.title.clone(),
        );
        if let Some((name, value)) = &self.number {
            properties = properties.with_number(name.as_str(), *value);
        }
        if let Some((name, option)) = &self.select {
            properties = properties.with_select(name.as_str(), option.clone());
        }

        let request = PageRequest::new(properties)
            .in_database(self.credentials.database_id().clone());

        if self.paragraphs.is_empty() {
            request
        } else {
            request.with_children(
                self.paragraphs
                    .iter()
                    .map(|text| Block::paragraph(text.clone()))
                    .collect(),
            )
        }
    }

    /// The parent every CLI-built request targets.
    #[allow(dead_code)]
    pub fn parent(&self) -> Parent {
        Parent::database(self.credentials.database_id().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageProperty;

    fn sample_config() -> WriterConfig {
        WriterConfig {
            credentials: Credentials::new(
                ApiKey::new("secret_test_key_1234567890").unwrap(),
                DatabaseId::parse("550e8400e29b41d4a716446655440000").unwrap(),
            ),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            verbose: false,
            title: "Trial 1".to_string(),
            title_property: "Imp Name".to_string(),
            number: Some(("Crazy Number".to_string(), 1234.0)),
            select: Some(("Options".to_string(), "Option 1".to_string())),
            paragraphs: vec!["first".to_string(), "second".to_string()],
        }
    }

    #[test]
    fn page_request_carries_all_configured_properties() {
        let request = sample_config().page_request();

        assert!(matches!(request.parent, Some(Parent::Database { .. })));
        assert_eq!(request.properties.len(), 3);
        assert_eq!(
            request.properties.get(&"Crazy Number".into()),
            Some(&PageProperty::number(1234.0))
        );
        assert_eq!(request.children.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn page_request_without_content_has_no_children_key() {
        let mut config = sample_config();
        config.paragraphs.clear();
        let request = config.page_request();
        assert!(request.children.is_none());
    }
}
