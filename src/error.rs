use thiserror::Error;

pub type Result<T> = std::result::Result<T, LaneboardError>;

#[derive(Debug, Error)]
pub enum LaneboardError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Duplicate item ID: {0}")]
    DuplicateItemId(String),

    #[error("Item title must not be empty")]
    EmptyTitle,

    #[error("Invalid item ID: {0:?}")]
    InvalidItemId(String),

    #[error("Invalid item status: {0}")]
    InvalidStatus(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Lane for status {0} is configured more than once")]
    DuplicateLane(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
