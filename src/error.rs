use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Food not found: {0}")]
    FoodNotFound(i64),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Screen is not ready (currently {0})")]
    NotReady(&'static str),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = AppError::Api {
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 500): internal");
    }

    #[test]
    fn test_not_ready_display() {
        let err = AppError::NotReady("loading");
        assert_eq!(err.to_string(), "Screen is not ready (currently loading)");
    }
}
