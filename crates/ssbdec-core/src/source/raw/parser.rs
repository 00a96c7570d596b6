use std::fs;
use std::path::Path;

use crate::source::{PayloadEvent, PayloadSource, SourceError};

use super::reader::{decode_hex_line, is_hex_text};

pub struct RawFileSource {
    inner: RawReader,
}

enum RawReader {
    Binary {
        payload: Option<Vec<u8>>,
    },
    HexText {
        lines: std::vec::IntoIter<(usize, String)>,
        emitted: usize,
    },
}

impl RawFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let data = fs::read(path).map_err(SourceError::from)?;
        let inner = if is_hex_text(&data) {
            let text = String::from_utf8_lossy(&data);
            let lines: Vec<(usize, String)> = text
                .lines()
                .enumerate()
                .map(|(idx, line)| (idx + 1, line.trim().to_string()))
                .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
                .collect();
            RawReader::HexText {
                lines: lines.into_iter(),
                emitted: 0,
            }
        } else {
            RawReader::Binary {
                payload: Some(data),
            }
        };
        Ok(Self { inner })
    }
}

impl PayloadSource for RawFileSource {
    fn next_payload(&mut self) -> Result<Option<PayloadEvent>, SourceError> {
        match &mut self.inner {
            RawReader::Binary { payload } => Ok(payload.take().map(|data| PayloadEvent {
                index: 0,
                data,
            })),
            RawReader::HexText { lines, emitted } => {
                let Some((line_no, line)) = lines.next() else {
                    return Ok(None);
                };
                let data = decode_hex_line(&line, line_no).map_err(SourceError::from)?;
                let index = *emitted;
                *emitted += 1;
                Ok(Some(PayloadEvent { index, data }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RawFileSource;
    use crate::source::{PayloadSource, SourceError};
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("ssbdec_{name}_{unique}"));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn hex_file_emits_one_payload_per_line() {
        let path = temp_file("hex", b"# two payloads\n0102\n\nfffe\n");
        let mut source = RawFileSource::open(&path).unwrap();

        let first = source.next_payload().unwrap().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.data, vec![0x01, 0x02]);

        let second = source.next_payload().unwrap().unwrap();
        assert_eq!(second.index, 1);
        assert_eq!(second.data, vec![0xFF, 0xFE]);

        assert!(source.next_payload().unwrap().is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn binary_file_is_one_payload() {
        let contents = [0x00u8, 0xFF, 0x10, 0x20];
        let path = temp_file("bin", &contents);
        let mut source = RawFileSource::open(&path).unwrap();

        let event = source.next_payload().unwrap().unwrap();
        assert_eq!(event.index, 0);
        assert_eq!(event.data, contents);
        assert!(source.next_payload().unwrap().is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_hex_line_is_reported_with_its_line_number() {
        let path = temp_file("badhex", b"0102\nabc\n");
        let mut source = RawFileSource::open(&path).unwrap();

        assert!(source.next_payload().unwrap().is_some());
        let err = source.next_payload().unwrap_err();
        match err {
            SourceError::Payload(message) => {
                assert!(message.contains("line 2"));
                assert!(message.contains("odd number of hex digits"));
            }
            other => panic!("unexpected error: {other}"),
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("ssbdec_missing_payload_file");
        let err = match RawFileSource::open(&path) {
            Ok(_) => panic!("expected missing file to be rejected"),
            Err(err) => err,
        };
        assert!(matches!(err, SourceError::Io(_)));
    }
}
