/*!
    Bounded reads for untrusted input.

    Messages, signatures and cipher input are read from files before any
    cryptographic work happens. Reads are capped so a hostile or accidental
    huge file cannot force an unbounded allocation.
*/

use std::io::Read;
use std::path::Path;

use crate::error::InputError;

/**
    Maximum number of bytes accepted from a single input file.
*/
pub const MAX_INPUT_LEN: usize = 1_000_000;

/**
    Read at most `limit` bytes from `reader`.

    Fails with `InputError::TooLarge` if the reader holds more than `limit`
    bytes and with `InputError::Empty` if it holds none.
*/
pub fn read_bounded(reader: impl Read, limit: usize) -> Result<Vec<u8>, InputError> {
    let mut buf = Vec::new();
    // One extra byte tells "exactly at the limit" apart from "over it".
    reader.take((limit as u64).saturating_add(1)).read_to_end(&mut buf)?;

    if buf.len() > limit {
        return Err(InputError::TooLarge { limit });
    }
    if buf.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(buf)
}

/**
    Read a whole file, capped at [`MAX_INPUT_LEN`] bytes.
*/
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, InputError> {
    let file = std::fs::File::open(path)?;
    read_bounded(file, MAX_INPUT_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_within_limit() {
        let data = read_bounded(&b"hello"[..], 16).unwrap();
        assert_eq!(data, b"hello");
    }

    #[test]
    fn reads_exactly_at_limit() {
        let data = read_bounded(&[7u8; 16][..], 16).unwrap();
        assert_eq!(data.len(), 16);
    }

    #[test]
    fn rejects_over_limit() {
        let err = read_bounded(&[7u8; 17][..], 16).unwrap_err();
        assert!(matches!(err, InputError::TooLarge { limit: 16 }));
    }

    #[test]
    fn rejects_empty() {
        let err = read_bounded(&b""[..], 16).unwrap_err();
        assert!(matches!(err, InputError::Empty));
    }

    #[test]
    fn unbounded_limit() {
        let data = read_bounded(&b"hello"[..], usize::MAX).unwrap();
        assert_eq!(data, b"hello");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_file("/nonexistent/fipsdemo/input.bin").unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
