use serde::{Deserialize, Serialize};

use super::error::SsbError;
use super::layout;
use super::reader::SsbReader;
use super::translate::{ticket_type, timeslot, translate_sixbit};

/// RCT2 segment indicator decoded from one bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Single,
    BiSegment,
}

/// Frequent-traveler scheme the customer number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelerKind {
    Corporate,
    Individual,
}

/// Specimen code: test tickets are marked at issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecimenKind {
    Test,
    Operational,
}

/// Station field: alphanumeric short name or numeric station code,
/// selected by a flag bit on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Station {
    Name(String),
    Code(u32),
}

/// One decoded SSB ticket record.
///
/// A flat value object; the hash code and digital seal are carried verbatim
/// as hex and never verified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SsbTicket {
    pub version: u8,
    pub issuing_railway: u16,
    pub segment_kind: SegmentKind,
    pub adult_passengers: u8,
    pub child_passengers: u8,
    pub valid_from: u16,
    pub valid_to: u16,
    pub traveler_kind: TravelerKind,
    pub customer_number: u64,
    pub departure_station: Station,
    pub arrival_station: Station,
    pub departure_time: String,
    pub train_number: u32,
    pub reservation_reference: u64,
    pub class_of_transport: String,
    pub coach_number: u16,
    pub seat_number: String,
    pub overbooking: bool,
    pub pnr: String,
    pub ticket_type: String,
    pub specimen: SpecimenKind,
    pub via_stations: String,
    pub hash_code: String,
    pub digital_seal: String,
}

/// Decode one raw SSB payload into a ticket record.
///
/// The payload is read in a single forward pass; the field order and widths
/// are fixed by the B.6 packet schema regardless of the version field's
/// value. Any truncation fails the whole decode.
pub fn parse_ssb(payload: &[u8]) -> Result<SsbTicket, SsbError> {
    let mut reader = SsbReader::new(payload);
    parse_record(&mut reader)
}

pub(crate) fn parse_record(reader: &mut SsbReader<'_>) -> Result<SsbTicket, SsbError> {
    let version = reader.read_uint(layout::VERSION_BITS)? as u8;
    let issuing_railway = reader.read_uint(layout::ISSUING_RAILWAY_BITS)? as u16;
    let segment_kind = if reader.read_uint(layout::SEGMENT_FLAG_BITS)? == 0 {
        SegmentKind::Single
    } else {
        SegmentKind::BiSegment
    };
    // Number-of-tickets field, unused on every observed ticket.
    reader.skip_padding(layout::TICKET_COUNT_PAD_BITS)?;
    let adult_passengers = reader.read_uint(layout::ADULT_PASSENGERS_BITS)? as u8;
    let child_passengers = reader.read_uint(layout::CHILD_PASSENGERS_BITS)? as u8;
    let valid_from = reader.read_uint(layout::VALID_FROM_BITS)? as u16;
    let valid_to = reader.read_uint(layout::VALID_TO_BITS)? as u16;
    let traveler_kind = if reader.read_uint(layout::TRAVELER_FLAG_BITS)? == 0 {
        TravelerKind::Corporate
    } else {
        TravelerKind::Individual
    };
    let customer_number = reader.read_uint(layout::CUSTOMER_NUMBER_BITS)?;

    let departure_station = read_station(reader)?;
    let arrival_station = read_station(reader)?;

    let departure_time = timeslot(reader.read_uint(layout::TIMESLOT_BITS)?)?;
    let train_number = reader.read_uint(layout::TRAIN_NUMBER_BITS)? as u32;
    let reservation_reference = reader.read_uint(layout::RESERVATION_REFERENCE_BITS)?;
    let class_of_transport =
        translate_sixbit(&reader.read_many(1, layout::SIXBIT_BITS)?);
    let coach_number = reader.read_uint(layout::COACH_NUMBER_BITS)? as u16;

    let seat_digits = reader.read_uint(layout::SEAT_NUMBER_BITS)?;
    let seat_letter = translate_sixbit(&reader.read_many(1, layout::SIXBIT_BITS)?);
    let seat_number = format!("{seat_digits:02}{seat_letter}");

    let overbooking = reader.read_bool()?;
    let pnr = translate_sixbit(&reader.read_many(layout::PNR_CODE_COUNT, layout::SIXBIT_BITS)?);
    let ticket_type = ticket_type(reader.read_uint(layout::TICKET_TYPE_BITS)?);
    let specimen = if reader.read_uint(layout::SPECIMEN_FLAG_BITS)? == 0 {
        SpecimenKind::Test
    } else {
        SpecimenKind::Operational
    };
    let via_stations =
        translate_sixbit(&reader.read_many(layout::VIA_CODE_COUNT, layout::SIXBIT_BITS)?);
    let hash_code = reader.read_hex(layout::HASH_CODE_BITS)?;
    let digital_seal = reader.read_hex(layout::DIGITAL_SEAL_BITS)?;

    Ok(SsbTicket {
        version,
        issuing_railway,
        segment_kind,
        adult_passengers,
        child_passengers,
        valid_from,
        valid_to,
        traveler_kind,
        customer_number,
        departure_station,
        arrival_station,
        departure_time,
        train_number,
        reservation_reference,
        class_of_transport,
        coach_number,
        seat_number,
        overbooking,
        pnr,
        ticket_type,
        specimen,
        via_stations,
        hash_code,
        digital_seal,
    })
}

fn read_station(reader: &mut SsbReader<'_>) -> Result<Station, SsbError> {
    if reader.read_uint(layout::STATION_FLAG_BITS)? == 0 {
        let codes = reader.read_many(layout::STATION_CODE_COUNT, layout::SIXBIT_BITS)?;
        Ok(Station::Name(translate_sixbit(&codes)))
    } else {
        let code = reader.read_uint(layout::STATION_NUMERIC_BITS)? as u32;
        reader.skip_padding(layout::STATION_NUMERIC_PAD_BITS)?;
        Ok(Station::Code(code))
    }
}
