use thiserror::Error;

#[derive(Debug, Error)]
pub enum RawSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex payload: {message}")]
    Hex { line: usize, message: String },
}
