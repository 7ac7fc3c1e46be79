use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum LinkBioError {
    #[error("{entity} not found: {id}")]
    NotFoundError { entity: String, id: Uuid },

    #[error("store unavailable: {message}")]
    StoreUnavailableError { message: String },

    #[error("invalid value for {field} ({value}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl LinkBioError {
    pub fn link_not_found(id: Uuid) -> Self {
        LinkBioError::NotFoundError {
            entity: "link".to_string(),
            id,
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkBioError>;
