use thiserror::Error;

#[derive(Error, Debug)]
pub enum LatteError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[source] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to fetch release information: {0}")]
    ReleaseFetch(String),

    #[error("Unrecognized panel message: {0}")]
    InvalidMessage(String),

    #[error("Panel surface error: {0}")]
    Surface(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LatteError>;
