use stylesnap_css::CssError;
use thiserror::Error;

pub type SerializerResult<T> = Result<T, SerializerError>;

/// Errors raised while formatting a snapshot
#[derive(Error, Debug)]
pub enum SerializerError {
    #[error("Stylesheet error: {0}")]
    Stylesheet(#[from] CssError),

    #[error("Invalid class attribute pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid serializer config: {0}")]
    Config(#[from] serde_json::Error),
}
