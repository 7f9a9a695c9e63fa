#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown lifecycle status: {0}")]
    UnknownStatus(String),

    #[error("Invalid resource warning set: {0}")]
    InvalidWarningSet(String),
}
