mod raw;

pub use raw::RawFileSource;

use thiserror::Error;

/// One raw symbol payload extracted from a ticket document.
#[derive(Debug, Clone)]
pub struct PayloadEvent {
    pub index: usize,
    pub data: Vec<u8>,
}

/// Anything that can hand out raw SSB payloads, one at a time.
///
/// Barcode extraction from document images is a separate concern; this
/// trait is its seam, so the decoder can be driven by synthetic payloads
/// in tests.
pub trait PayloadSource {
    fn next_payload(&mut self) -> Result<Option<PayloadEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("payload file error: {0}")]
    Payload(String),
}

impl From<raw::error::RawSourceError> for SourceError {
    fn from(value: raw::error::RawSourceError) -> Self {
        match value {
            raw::error::RawSourceError::Io(err) => SourceError::Io(err),
            raw::error::RawSourceError::Hex { line, message } => {
                SourceError::Payload(format!("line {line}: {message}"))
            }
        }
    }
}
