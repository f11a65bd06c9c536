use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::Display;

pub const INVALID_INPUT: i32 = 101;
pub const NOT_FOUND: i32 = 102;
pub const REJECTED: i32 = 103;

const DATABASE: i32 = 2;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self.code {
            NOT_FOUND => StatusCode::NOT_FOUND,
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn is_not_found_error(&self) -> bool {
        self.code == NOT_FOUND
    }

    pub fn is_database_error(&self) -> bool {
        self.code == DATABASE
    }

    /// Reports a store failure as a bad request, keeping its detail.
    pub fn rejected(self) -> Self {
        if self.is_database_error() {
            rejected_error(self.message)
        } else {
            self
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }

        if status.is_server_error() {
            tracing::error!(code = self.code, error = %self.message, "request failed");
        } else {
            tracing::warn!(code = self.code, error = %self.message, "request rejected");
        }

        let body = Json(json!({
            "code": self.code,
            "error": self.message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_input_error<T: Display>(detail: T) -> Error {
    Error {
        code: INVALID_INPUT,
        message: format!("invalid input: {}", detail),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: NOT_FOUND,
        message: "not found".into(),
    }
}

pub fn rejected_error(message: String) -> Error {
    Error {
        code: REJECTED,
        message,
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    Error {
        code: 1,
        message: format!("environment variable error: {}", err),
    }
}

pub fn database_error<T: Display>(err: T) -> Error {
    Error {
        code: DATABASE,
        message: err.to_string(),
    }
}

pub fn config_error<T: Display>(detail: T) -> Error {
    Error {
        code: 3,
        message: format!("config error: {}", detail),
    }
}

pub fn server_error<T: Display>(err: T) -> Error {
    Error {
        code: 4,
        message: format!("server error: {}", err),
    }
}
