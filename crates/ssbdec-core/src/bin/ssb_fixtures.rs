use std::fs;
use std::path::{Path, PathBuf};

const VERSION_BITS: u32 = 4;
const ISSUING_RAILWAY_BITS: u32 = 14;
const SEGMENT_FLAG_BITS: u32 = 1;
const TICKET_COUNT_PAD_BITS: u32 = 6;
const ADULT_PASSENGERS_BITS: u32 = 7;
const CHILD_PASSENGERS_BITS: u32 = 7;
const VALID_FROM_BITS: u32 = 9;
const VALID_TO_BITS: u32 = 9;
const TRAVELER_FLAG_BITS: u32 = 1;
const CUSTOMER_NUMBER_BITS: u32 = 47;
const STATION_FLAG_BITS: u32 = 1;
const STATION_NUMERIC_BITS: u32 = 20;
const STATION_NUMERIC_PAD_BITS: u32 = 10;
const TIMESLOT_BITS: u32 = 6;
const TRAIN_NUMBER_BITS: u32 = 17;
const RESERVATION_REFERENCE_BITS: u32 = 40;
const CLASS_BITS: u32 = 6;
const COACH_NUMBER_BITS: u32 = 10;
const SEAT_NUMBER_BITS: u32 = 7;
const SEAT_LETTER_BITS: u32 = 6;
const OVERBOOKING_BITS: u32 = 1;
const TICKET_TYPE_BITS: u32 = 4;
const SPECIMEN_FLAG_BITS: u32 = 1;
const HASH_CODE_BITS: u32 = 32;
const SIXBIT_BITS: u32 = 6;

const TRUNCATED_LEN: usize = 40;

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests/golden");
    let alnum = ticket_alnum_payload();
    let numeric = ticket_numeric_payload();
    let truncated = alnum[..TRUNCATED_LEN].to_vec();

    write_fixture(
        &root.join("ticket_alnum").join("input.hex"),
        "# single-segment ticket, alphanumeric stations",
        &[&alnum],
    )?;
    write_fixture(
        &root.join("ticket_numeric").join("input.hex"),
        "# bi-segment ticket, numeric station codes",
        &[&numeric],
    )?;
    write_fixture(
        &root.join("ticket_truncated").join("input.hex"),
        "# payload cut short before the digital seal",
        &[&truncated],
    )?;
    write_fixture(
        &root.join("multi_payload").join("input.hex"),
        "# one good payload, one truncated",
        &[&alnum, &truncated],
    )?;
    Ok(())
}

struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    fn new() -> Self {
        Self { bits: Vec::new() }
    }

    fn push(&mut self, value: u64, width: u32) -> &mut Self {
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
        self
    }

    fn push_codes(&mut self, codes: &[u64]) -> &mut Self {
        for &code in codes {
            self.push(code, SIXBIT_BITS);
        }
        self
    }

    fn finish(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.bits.len().div_ceil(8)];
        for (idx, bit) in self.bits.iter().enumerate() {
            if *bit {
                bytes[idx / 8] |= 1 << (7 - idx % 8);
            }
        }
        bytes
    }
}

fn ticket_alnum_payload() -> Vec<u8> {
    let mut writer = BitWriter::new();
    writer
        .push(3, VERSION_BITS)
        .push(1186, ISSUING_RAILWAY_BITS)
        .push(0, SEGMENT_FLAG_BITS)
        .push(0, TICKET_COUNT_PAD_BITS)
        .push(2, ADULT_PASSENGERS_BITS)
        .push(1, CHILD_PASSENGERS_BITS)
        .push(180, VALID_FROM_BITS)
        .push(185, VALID_TO_BITS)
        .push(1, TRAVELER_FLAG_BITS)
        .push(123_456_789, CUSTOMER_NUMBER_BITS)
        .push(0, STATION_FLAG_BITS)
        .push_codes(&[17, 20, 18, 36, 36])
        .push(0, STATION_FLAG_BITS)
        .push_codes(&[29, 25, 14, 36, 36])
        .push(17, TIMESLOT_BITS)
        .push(9702, TRAIN_NUMBER_BITS)
        .push(1_234_567_890, RESERVATION_REFERENCE_BITS)
        .push(2, CLASS_BITS)
        .push(5, COACH_NUMBER_BITS)
        .push(7, SEAT_NUMBER_BITS)
        .push(10, SEAT_LETTER_BITS)
        .push(0, OVERBOOKING_BITS)
        .push_codes(&[10, 11, 1, 2, 3, 4, 5])
        .push(3, TICKET_TYPE_BITS)
        .push(1, SPECIMEN_FLAG_BITS)
        .push_codes(&[36, 36, 36, 36, 36])
        .push(0xDEAD_BEEF, HASH_CODE_BITS);
    for _ in 0..12 {
        writer.push(0x01_2345_6789, 40);
    }
    writer.finish()
}

fn ticket_numeric_payload() -> Vec<u8> {
    let mut writer = BitWriter::new();
    writer
        .push(2, VERSION_BITS)
        .push(10, ISSUING_RAILWAY_BITS)
        .push(1, SEGMENT_FLAG_BITS)
        .push(0, TICKET_COUNT_PAD_BITS)
        .push(1, ADULT_PASSENGERS_BITS)
        .push(0, CHILD_PASSENGERS_BITS)
        .push(1, VALID_FROM_BITS)
        .push(1, VALID_TO_BITS)
        .push(0, TRAVELER_FLAG_BITS)
        .push(0, CUSTOMER_NUMBER_BITS)
        .push(1, STATION_FLAG_BITS)
        .push(12345, STATION_NUMERIC_BITS)
        .push(0x3FF, STATION_NUMERIC_PAD_BITS)
        .push(1, STATION_FLAG_BITS)
        .push(67890, STATION_NUMERIC_BITS)
        .push(0, STATION_NUMERIC_PAD_BITS)
        .push(0, TIMESLOT_BITS)
        .push(1, TRAIN_NUMBER_BITS)
        .push(0, RESERVATION_REFERENCE_BITS)
        .push(36, CLASS_BITS)
        .push(0, COACH_NUMBER_BITS)
        .push(0, SEAT_NUMBER_BITS)
        .push(36, SEAT_LETTER_BITS)
        .push(1, OVERBOOKING_BITS)
        .push_codes(&[0, 0, 0, 0, 0, 0, 0])
        .push(15, TICKET_TYPE_BITS)
        .push(0, SPECIMEN_FLAG_BITS)
        .push_codes(&[10, 11, 12, 13, 14])
        .push(1, HASH_CODE_BITS);
    for _ in 0..12 {
        writer.push(0, 40);
    }
    writer.finish()
}

fn write_fixture(path: &Path, comment: &str, payloads: &[&[u8]]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create {}: {}", parent.display(), err))?;
    }

    let mut contents = String::new();
    contents.push_str(comment);
    contents.push('\n');
    for payload in payloads {
        for byte in *payload {
            contents.push_str(&format!("{byte:02x}"));
        }
        contents.push('\n');
    }

    fs::write(path, contents).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}
