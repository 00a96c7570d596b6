use std::fs::Metadata;
use std::path::Path;

use thiserror::Error;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::protocols::ssb::parse_ssb;
use crate::source::{PayloadEvent, PayloadSource, RawFileSource, SourceError};
use crate::{
    DEFAULT_GENERATED_AT, DecodeFailure, PayloadSummary, Report, TicketSummary, make_stub_report,
};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub fn decode_file(path: &Path) -> Result<Report, DecodeError> {
    let source = RawFileSource::open(path)?;
    decode_source(path, source)
}

pub fn decode_source<S: PayloadSource>(
    path: &Path,
    mut source: S,
) -> Result<Report, DecodeError> {
    let mut payloads_total = 0u64;
    let mut tickets = Vec::new();
    let mut failures = Vec::new();

    while let Some(PayloadEvent { index, data }) = source.next_payload()? {
        payloads_total += 1;
        match parse_ssb(&data) {
            Ok(record) => tickets.push(TicketSummary {
                payload_index: index as u64,
                record,
            }),
            Err(err) => failures.push(DecodeFailure {
                payload_index: index as u64,
                error: err.to_string(),
            }),
        }
    }

    let meta = path.metadata()?;
    let mut report = make_stub_report(&path.display().to_string(), meta.len());
    report.payload_summary = Some(PayloadSummary { payloads_total });
    report.generated_at =
        modified_to_rfc3339(&meta).unwrap_or_else(|| DEFAULT_GENERATED_AT.to_string());
    report.tickets = tickets;
    report.failures = failures;
    Ok(report)
}

fn modified_to_rfc3339(meta: &Metadata) -> Option<String> {
    let modified = meta.modified().ok()?;
    OffsetDateTime::from(modified).format(&Rfc3339).ok()
}
