use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Security token not found")]
    MissingToken,

    #[error("Invalid action URL: {0}")]
    InvalidUrl(String),

    #[error("Refusing cross-origin request to {0}")]
    CrossOrigin(String),

    #[error("Server error: {status}")]
    ServerError {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Which part of the system an error points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The page or markup is wrong; retrying cannot help.
    Configuration,
    /// The request failed on the way or the server refused it.
    Transport,
}

impl ApiError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ApiError::MissingToken | ApiError::InvalidUrl(_) | ApiError::CrossOrigin(_) => {
                ErrorClass::Configuration
            }
            ApiError::NetworkError(_)
            | ApiError::ServerError { .. }
            | ApiError::InvalidResponse(_) => ErrorClass::Transport,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::NetworkError(error.to_string())
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}
