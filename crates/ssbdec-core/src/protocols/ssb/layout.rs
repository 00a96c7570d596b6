pub const VERSION_BITS: u32 = 4;
pub const ISSUING_RAILWAY_BITS: u32 = 14;
pub const SEGMENT_FLAG_BITS: u32 = 1;
pub const TICKET_COUNT_PAD_BITS: u32 = 6;
pub const ADULT_PASSENGERS_BITS: u32 = 7;
pub const CHILD_PASSENGERS_BITS: u32 = 7;
pub const VALID_FROM_BITS: u32 = 9;
pub const VALID_TO_BITS: u32 = 9;
pub const TRAVELER_FLAG_BITS: u32 = 1;
pub const CUSTOMER_NUMBER_BITS: u32 = 47;

pub const STATION_FLAG_BITS: u32 = 1;
pub const STATION_CODE_COUNT: u32 = 5;
pub const STATION_NUMERIC_BITS: u32 = 20;
pub const STATION_NUMERIC_PAD_BITS: u32 = 10;

pub const TIMESLOT_BITS: u32 = 6;
pub const TRAIN_NUMBER_BITS: u32 = 17;
pub const RESERVATION_REFERENCE_BITS: u32 = 40;
pub const CLASS_BITS: u32 = 6;
pub const COACH_NUMBER_BITS: u32 = 10;
pub const SEAT_NUMBER_BITS: u32 = 7;
pub const SEAT_LETTER_BITS: u32 = 6;
pub const OVERBOOKING_BITS: u32 = 1;
pub const PNR_CODE_COUNT: u32 = 7;
pub const TICKET_TYPE_BITS: u32 = 4;
pub const SPECIMEN_FLAG_BITS: u32 = 1;
pub const VIA_CODE_COUNT: u32 = 5;
pub const HASH_CODE_BITS: u32 = 32;
pub const DIGITAL_SEAL_BITS: u32 = 480;

pub const SIXBIT_BITS: u32 = 6;
pub const TIMESLOT_MAX: u64 = 48;

/// Both station encodings occupy 30 bits after the flag.
pub const STATION_BITS: u32 = STATION_CODE_COUNT * SIXBIT_BITS;

/// Bits consumed by one full record, flag bits and padding included.
pub const TOTAL_BITS: usize = 849;

/// Smallest buffer that can hold a full record.
pub const MIN_LEN: usize = TOTAL_BITS.div_ceil(8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_bits_matches_field_sum() {
        let station = STATION_FLAG_BITS + STATION_BITS;
        let sum = VERSION_BITS
            + ISSUING_RAILWAY_BITS
            + SEGMENT_FLAG_BITS
            + TICKET_COUNT_PAD_BITS
            + ADULT_PASSENGERS_BITS
            + CHILD_PASSENGERS_BITS
            + VALID_FROM_BITS
            + VALID_TO_BITS
            + TRAVELER_FLAG_BITS
            + CUSTOMER_NUMBER_BITS
            + station * 2
            + TIMESLOT_BITS
            + TRAIN_NUMBER_BITS
            + RESERVATION_REFERENCE_BITS
            + CLASS_BITS
            + COACH_NUMBER_BITS
            + SEAT_NUMBER_BITS
            + SEAT_LETTER_BITS
            + OVERBOOKING_BITS
            + PNR_CODE_COUNT * SIXBIT_BITS
            + TICKET_TYPE_BITS
            + SPECIMEN_FLAG_BITS
            + VIA_CODE_COUNT * SIXBIT_BITS
            + HASH_CODE_BITS
            + DIGITAL_SEAL_BITS;
        assert_eq!(sum as usize, TOTAL_BITS);
    }

    #[test]
    fn numeric_station_form_matches_translated_form() {
        assert_eq!(STATION_NUMERIC_BITS + STATION_NUMERIC_PAD_BITS, STATION_BITS);
    }

    #[test]
    fn min_len_holds_a_full_record() {
        assert_eq!(MIN_LEN, 107);
        assert!(MIN_LEN * 8 >= TOTAL_BITS);
        assert!((MIN_LEN - 1) * 8 < TOTAL_BITS);
    }
}
