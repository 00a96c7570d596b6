//! SSB (Small Structured Barcode) record decoding.
//!
//! The parser performs one linear pass over the bit-packed B.6 packet
//! schema: ~30 sequentially dependent fields with two conditional station
//! encodings. Field widths live in `layout` (the table is the wire
//! protocol), bit access conventions in `reader`, and value translation
//! (six-bit alphabet, half-hour timeslots, ticket-type designators) in
//! `translate`. The hash code and digital seal are extracted verbatim and
//! never verified.
//!
//! Errors are explicit and actionable (buffer underrun with bit counts,
//! out-of-range timeslot). A failed decode returns no partial record.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod translate;

pub use error::SsbError;
pub use parser::{SegmentKind, SpecimenKind, SsbTicket, Station, TravelerKind, parse_ssb};
