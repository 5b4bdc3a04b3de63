//! Error types for Arcana

use thiserror::Error;

/// Main error type for Arcana operations
#[derive(Error, Debug)]
pub enum TarotError {
    /// Card id outside the standard deck
    #[error("Card not found: {0}")]
    CardNotFound(String),

    /// Spread id not present in the catalog
    #[error("Spread not found: {0}")]
    SpreadNotFound(String),

    /// Reading was not found in storage
    #[error("Reading not found: {0}")]
    ReadingNotFound(String),

    /// Sign-in rejected (no profile, or password mismatch)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password could not be hashed
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    /// User supplied input failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Texture could not be loaded or decoded
    #[error("Texture load failed for {url}: {reason}")]
    TextureLoad { url: String, reason: String },

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for TarotError {
    fn from(err: serde_json::Error) -> Self {
        TarotError::Serialization(err.to_string())
    }
}

/// Result type alias using TarotError
pub type TarotResult<T> = Result<T, TarotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TarotError::CardNotFound("99".to_string());
        assert_eq!(format!("{}", err), "Card not found: 99");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TarotError = io_err.into();
        assert!(matches!(err, TarotError::Io(_)));
    }

    #[test]
    fn test_texture_error_names_url() {
        let err = TarotError::TextureLoad {
            url: "/images/cards/m00.jpg".into(),
            reason: "missing".into(),
        };
        assert!(err.to_string().contains("/images/cards/m00.jpg"));
    }
}
