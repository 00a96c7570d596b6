use super::error::SsbError;
use super::layout;

/// Six-bit character table: codes 0-9 are digits, 10-35 are letters.
/// Codes 36-63 have no entry and translate to a space.
pub const SIXBIT_SYMBOLS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Two-letter designators for ticket-type codes 1-9.
pub const TICKET_TYPES: [&str; 9] = ["IV", "IR", "BP", "IQ", "IM", "IO", "IP", "IK", "IT"];

/// Translate a run of six-bit codes into a string, in input order.
pub fn translate_sixbit(codes: &[u64]) -> String {
    codes
        .iter()
        .map(|&code| match SIXBIT_SYMBOLS.get(code as usize) {
            Some(&symbol) => symbol as char,
            None => ' ',
        })
        .collect()
}

/// Translate a timeslot number into a "HH:MM-HH:MM" half-hour interval.
///
/// Slot 0 means "unspecified" and yields the empty string; slot n covers
/// minutes [(n-1)*30, (n-1)*30+29]. The 6-bit field can represent 49-63,
/// which the 48-slot day does not define; those are rejected rather than
/// formatted into a misleading time.
pub fn timeslot(num: u64) -> Result<String, SsbError> {
    if num == 0 {
        return Ok(String::new());
    }
    if num > layout::TIMESLOT_MAX {
        return Err(SsbError::TimeslotOutOfRange { value: num });
    }
    let start = (num - 1) * 30;
    let end = start + 29;
    Ok(format!(
        "{:02}:{:02}-{:02}:{:02}",
        start / 60,
        start % 60,
        end / 60,
        end % 60
    ))
}

/// Translate a ticket-type code into its designator, falling back to the
/// decimal representation for codes outside the table.
pub fn ticket_type(num: u64) -> String {
    match num {
        1..=9 => TICKET_TYPES[num as usize - 1].to_string(),
        _ => num.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{ticket_type, timeslot, translate_sixbit};
    use crate::protocols::ssb::error::SsbError;

    #[test]
    fn sixbit_digits_and_letters() {
        let codes: Vec<u64> = (0..36).collect();
        assert_eq!(
            translate_sixbit(&codes),
            "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ"
        );
    }

    #[test]
    fn sixbit_out_of_table_codes_become_spaces() {
        for code in 36..64 {
            assert_eq!(translate_sixbit(&[code]), " ");
        }
    }

    #[test]
    fn sixbit_concatenates_in_input_order() {
        assert_eq!(translate_sixbit(&[17, 20, 18, 36, 36]), "HKI  ");
        assert_eq!(translate_sixbit(&[]), "");
    }

    #[test]
    fn timeslot_zero_is_unspecified() {
        assert_eq!(timeslot(0).unwrap(), "");
    }

    #[test]
    fn timeslot_first_and_last_slots() {
        assert_eq!(timeslot(1).unwrap(), "00:00-00:29");
        assert_eq!(timeslot(2).unwrap(), "00:30-00:59");
        assert_eq!(timeslot(17).unwrap(), "08:00-08:29");
        assert_eq!(timeslot(48).unwrap(), "23:30-23:59");
    }

    #[test]
    fn timeslot_above_48_is_rejected() {
        for value in [49u64, 50, 63] {
            let err = timeslot(value).unwrap_err();
            assert!(matches!(err, SsbError::TimeslotOutOfRange { value: v } if v == value));
        }
    }

    #[test]
    fn ticket_type_designators() {
        assert_eq!(ticket_type(1), "IV");
        assert_eq!(ticket_type(3), "BP");
        assert_eq!(ticket_type(9), "IT");
    }

    #[test]
    fn ticket_type_passthrough_for_unknown_codes() {
        assert_eq!(ticket_type(0), "0");
        assert_eq!(ticket_type(10), "10");
        assert_eq!(ticket_type(15), "15");
    }
}
