use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Missing credential for live network {network}: {}", credential_hint(.variable))]
    MissingCredential {
        network: String,
        variable: Option<String>,
    },

    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("Invalid network configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read network configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Failed to parse network configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

fn credential_hint(variable: &Option<String>) -> String {
    match variable {
        Some(name) => format!("environment variable {name} is unset or empty"),
        None => "no credential reference configured".to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::UnknownNetwork(_) => StatusCode::NOT_FOUND,
            CustomError::MissingCredential { .. } => StatusCode::BAD_REQUEST,
            CustomError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CustomError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::ConfigIo(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CustomError::ConfigParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let api_error = ApiError {
            code: status.as_u16(),
            message: self.to_string(),
        };

        let response = ApiResponse {
            status: "FAILURE".to_string(),
            code: api_error.code,
            result: None::<()>,
            error: Some(api_error),
        };

        HttpResponse::build(status).json(response)
    }
}
