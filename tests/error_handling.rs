// tests/error_handling.rs
//! Unit tests for the error vocabulary and display contract.

use notion_pagewriter::{AppError, NotionErrorCode, ValidationError};
use reqwest::StatusCode;

#[test]
fn validation_error_messages() {
    let err = ValidationError::InvalidApiKey {
        reason: "missing prefix".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid API key format: missing prefix");

    let err = ValidationError::InvalidId("bad-id".to_string());
    assert_eq!(err.to_string(), "Invalid Notion ID format: bad-id");
}

#[test]
fn missing_configuration_names_the_variable() {
    let err = AppError::MissingConfiguration("NOTION_API_KEY environment variable not set".into());
    assert_eq!(
        err.to_string(),
        "Missing configuration: NOTION_API_KEY environment variable not set"
    );
}

#[test]
fn service_error_display_includes_code_and_message() {
    let err = AppError::NotionService {
        code: NotionErrorCode::Unauthorized,
        message: "API token is invalid.".to_string(),
        status: StatusCode::UNAUTHORIZED,
    };
    assert_eq!(
        err.to_string(),
        "Notion API returned an error (unauthorized): API token is invalid."
    );
}

#[test]
fn validation_errors_convert_into_app_errors() {
    fn parse_id() -> Result<notion_pagewriter::DatabaseId, AppError> {
        Ok(notion_pagewriter::DatabaseId::parse("nonsense")?)
    }
    let err = parse_id().unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[test]
fn classification_helpers_only_fire_on_service_errors() {
    let err = AppError::MalformedResponse("no object field".into());
    assert!(!err.is_auth_error());
    assert!(!err.is_schema_error());
    assert!(!err.is_remote_verdict());

    let err = AppError::NotionService {
        code: NotionErrorCode::ValidationFailed,
        message: "bad shape".into(),
        status: StatusCode::BAD_REQUEST,
    };
    assert!(err.is_remote_verdict());
    assert!(err.is_schema_error());
}

#[test]
fn unknown_remote_codes_survive_the_round_trip() {
    let code = NotionErrorCode::from_api_response("some_future_code");
    let err = AppError::NotionService {
        code,
        message: "m".into(),
        status: StatusCode::IM_A_TEAPOT,
    };
    assert!(err.to_string().contains("some_future_code"));
}
