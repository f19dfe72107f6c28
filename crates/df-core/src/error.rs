use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: i64 },

    #[error("Unknown tier tag: {tag}")]
    UnknownTier { tag: String },
}
