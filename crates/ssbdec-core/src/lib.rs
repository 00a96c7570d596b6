//! ssbdec core library for decoding SSB rail-ticket barcodes.
//!
//! This crate implements the decoding pipeline used by the CLI: payload
//! sources feed the decode layer, which drives the SSB record decoder
//! (layout/reader/parser) and aggregates results into a deterministic
//! report. Decoding is bit-oriented and side-effect free; all I/O is
//! isolated in `source` modules. Packing conventions are captured in the
//! reader so the parser stays minimal and consistent with the UIC 918-2 /
//! ERA TAP TSI B.6 packet schema.
//!
//! Invariants:
//! - Report outputs are deterministic and stable across runs.
//! - A record is decoded in one forward pass; no partial records survive
//!   a failed decode.
//! - Hash code and digital seal are extracted verbatim, never verified.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur de décodage : sources -> décodage ->
//! enregistrement SSB (layout/reader/parser) -> rapport déterministe. Les
//! E/S restent dans `source`, les conventions de paquetage dans `reader`.
//! Garanties : passe unique en avant, aucun enregistrement partiel, champs
//! de sécurité extraits sans vérification. Voir le document technique B.6
//! pour la référence.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use ssbdec_core::decode_file;
//!
//! let report = decode_file(Path::new("ticket.ssb"))?;
//! println!("report version: {}", report.report_version);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod decode;
mod protocols;
mod source;

pub use decode::{DecodeError, decode_file, decode_source};
pub use protocols::ssb::{
    SegmentKind, SpecimenKind, SsbError, SsbTicket, Station, TravelerKind, parse_ssb,
};
pub use source::{PayloadEvent, PayloadSource, RawFileSource, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when no input timestamp is available.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Aggregated decode report with deterministic ordering.
///
/// # Examples
/// ```
/// use ssbdec_core::make_stub_report;
///
/// let report = make_stub_report("ticket.ssb", 107);
/// assert_eq!(report.report_version, ssbdec_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the ticket version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,

    /// Input file metadata.
    pub input: InputInfo,

    /// Optional payload summary (absent when the source was never drained).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_summary: Option<PayloadSummary>,
    /// Decoded tickets in payload order.
    pub tickets: Vec<TicketSummary>,
    /// Per-payload decode failures in payload order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<DecodeFailure>,
}

/// Tool metadata embedded in reports.
///
/// # Examples
/// ```
/// use ssbdec_core::ToolInfo;
///
/// let tool = ToolInfo {
///     name: "ssbdec".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(tool.name, "ssbdec");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "ssbdec").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input file metadata embedded in reports.
///
/// # Examples
/// ```
/// use ssbdec_core::InputInfo;
///
/// let input = InputInfo {
///     path: "ticket.ssb".to_string(),
///     bytes: 107,
/// };
/// assert_eq!(input.bytes, 107);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Basic payload summary.
///
/// # Examples
/// ```
/// use ssbdec_core::PayloadSummary;
///
/// let summary = PayloadSummary { payloads_total: 2 };
/// assert_eq!(summary.payloads_total, 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadSummary {
    /// Total payload count observed in the input.
    pub payloads_total: u64,
}

/// One successfully decoded payload.
///
/// # Examples
/// ```
/// use ssbdec_core::{SegmentKind, SpecimenKind, SsbTicket, Station, TicketSummary, TravelerKind};
///
/// let summary = TicketSummary {
///     payload_index: 0,
///     record: SsbTicket {
///         version: 3,
///         issuing_railway: 1186,
///         segment_kind: SegmentKind::Single,
///         adult_passengers: 1,
///         child_passengers: 0,
///         valid_from: 180,
///         valid_to: 180,
///         traveler_kind: TravelerKind::Individual,
///         customer_number: 0,
///         departure_station: Station::Name("HKI  ".to_string()),
///         arrival_station: Station::Code(9029),
///         departure_time: "08:00-08:29".to_string(),
///         train_number: 9702,
///         reservation_reference: 0,
///         class_of_transport: "2".to_string(),
///         coach_number: 5,
///         seat_number: "07A".to_string(),
///         overbooking: false,
///         pnr: "AB12345".to_string(),
///         ticket_type: "BP".to_string(),
///         specimen: SpecimenKind::Operational,
///         via_stations: "     ".to_string(),
///         hash_code: "deadbeef".to_string(),
///         digital_seal: "00".repeat(60),
///     },
/// };
/// assert_eq!(summary.record.seat_number, "07A");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSummary {
    /// Zero-based index of the payload within the input.
    pub payload_index: u64,
    /// The decoded ticket record.
    pub record: SsbTicket,
}

/// Single payload decode failure record.
///
/// # Examples
/// ```
/// use ssbdec_core::DecodeFailure;
///
/// let failure = DecodeFailure {
///     payload_index: 1,
///     error: "payload too short: need 849 bits, got 80".to_string(),
/// };
/// assert_eq!(failure.payload_index, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeFailure {
    /// Zero-based index of the payload within the input.
    pub payload_index: u64,
    /// Human-readable decode error.
    pub error: String,
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use ssbdec_core::make_stub_report;
///
/// let report = make_stub_report("ticket.ssb", 107);
/// assert_eq!(report.report_version, ssbdec_core::REPORT_VERSION);
/// assert!(report.tickets.is_empty());
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "ssbdec".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        payload_summary: None,
        tickets: vec![],
        failures: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_omits_optional_fields_when_empty() {
        let report = make_stub_report("ticket.ssb", 107);

        let value = serde_json::to_value(&report).expect("report json");
        assert!(value.get("payload_summary").is_none());
        assert!(value.get("failures").is_none());
        assert_eq!(value["tickets"], serde_json::json!([]));
    }

    #[test]
    fn stations_serialize_untagged() {
        let name = serde_json::to_value(Station::Name("HKI  ".to_string())).expect("name json");
        assert_eq!(name, serde_json::json!("HKI  "));

        let code = serde_json::to_value(Station::Code(9029)).expect("code json");
        assert_eq!(code, serde_json::json!(9029));

        let back: Station = serde_json::from_value(serde_json::json!(9029)).expect("roundtrip");
        assert_eq!(back, Station::Code(9029));
    }

    #[test]
    fn enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(SegmentKind::BiSegment).unwrap(),
            serde_json::json!("bi_segment")
        );
        assert_eq!(
            serde_json::to_value(TravelerKind::Corporate).unwrap(),
            serde_json::json!("corporate")
        );
        assert_eq!(
            serde_json::to_value(SpecimenKind::Test).unwrap(),
            serde_json::json!("test")
        );
    }
}
