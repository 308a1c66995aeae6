use thiserror::Error;
use serde::Serialize;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Host Error: {0}")]
    Host(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Window Error: {0}")]
    Window(String),

    #[error("Clipboard Error: {0}")]
    Clipboard(String),

    #[error("Shortcut Error: {0}")]
    Shortcut(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Validation(format!("Malformed history payload: {}", err))
        } else if err.is_status() {
            AppError::Host(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Serialization error: {}", err))
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Unknown(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Unknown(err.to_string())
    }
}

#[cfg(feature = "desktop")]
impl From<tauri::Error> for AppError {
    fn from(err: tauri::Error) -> Self {
        AppError::Window(err.to_string())
    }
}

// Helper for Tauri Result
pub type AppResult<T> = Result<T, AppError>;
