use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no query string parameters provided")]
    MissingParameters,

    #[error("incomplete query string parameters")]
    IncompleteParameters,

    #[error("invalid query parameter format: {0}")]
    MalformedNumeric(String),

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("lookup failed: {0}")]
    LookupFailed(String),
}

impl Error {
    /// Short name of the failure, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MissingParameters => "MissingParameters",
            Error::IncompleteParameters => "IncompleteParameters",
            Error::MalformedNumeric(_) => "MalformedNumeric",
            Error::InvalidRange(_) => "InvalidRange",
            Error::LookupFailed(_) => "LookupFailed",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingParameters
            | Error::IncompleteParameters
            | Error::MalformedNumeric(_)
            | Error::InvalidRange(_) => StatusCode::BAD_REQUEST,
            Error::LookupFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response envelope. Lookup failures never leak
    /// the underlying reason to the caller.
    pub fn message(&self) -> &'static str {
        match self {
            Error::MissingParameters | Error::IncompleteParameters => {
                "Invalid or missing query parameters"
            }
            Error::MalformedNumeric(_) => "Invalid query parameter format",
            Error::InvalidRange(_) => "Invalid query range",
            Error::LookupFailed(_) => "Error processing your request",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::LookupFailed(e.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        crate::response::failure_response(&self).into_response()
    }
}
