use thiserror::Error;

/// Errors returned by SSB bit reading and record decoding.
///
/// Note: this error type lives in an internal module; the example is
/// illustrative and not compiled as a public doctest.
///
/// # Examples
/// ```text
/// use ssbdec_core::SsbError;
///
/// let err = SsbError::BufferUnderrun { needed: 849, actual: 800 };
/// assert!(err.to_string().contains("payload too short"));
/// ```
#[derive(Debug, Error)]
pub enum SsbError {
    #[error("payload too short: need {needed} bits, got {actual}")]
    BufferUnderrun { needed: usize, actual: usize },
    #[error("unsupported field width: {width} bits")]
    WidthTooLarge { width: u32 },
    #[error("hex field width not a multiple of 4: {width} bits")]
    HexWidth { width: u32 },
    #[error("departure timeslot out of range: {value}")]
    TimeslotOutOfRange { value: u64 },
}
