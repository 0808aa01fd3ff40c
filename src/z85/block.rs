//! Block codec: 4 bytes in, 5 characters out.
//!
//! Every 4-byte group is read as a big-endian `u32` and written as five
//! base-85 digits, most significant first. Inputs must already be aligned
//! to whole blocks; see [`super::padding`] for arbitrary lengths.

use byteorder::{BigEndian, ByteOrder};
use log::trace;

use super::alphabet;
use super::error::{Result, Z85Error};

/// Bytes per block on the binary side.
pub const BYTES_PER_BLOCK: usize = 4;

/// Characters per block on the text side.
pub const CHARS_PER_BLOCK: usize = 5;

/// Length of the text produced by [`encode`] for `n` input bytes.
#[inline]
pub fn encoded_len(n: usize) -> usize {
    n / BYTES_PER_BLOCK * CHARS_PER_BLOCK
}

/// Length of the buffer produced by [`decode`] for `n` input characters.
#[inline]
pub fn decoded_len(n: usize) -> usize {
    n / CHARS_PER_BLOCK * BYTES_PER_BLOCK
}

/// Encodes a buffer whose length is a multiple of 4.
///
/// # Errors
/// Returns [`Z85Error::UnalignedLength`] if `bytes.len() % 4 != 0`.
pub fn encode(bytes: &[u8]) -> Result<String> {
    let mut out = String::new();
    encode_into(&mut out, bytes)?;
    Ok(out)
}

/// Appends the encoding of `bytes` to `out`.
///
/// `out` is left untouched on error.
pub fn encode_into(out: &mut String, bytes: &[u8]) -> Result<()> {
    if bytes.len() % BYTES_PER_BLOCK != 0 {
        return Err(Z85Error::UnalignedLength {
            modulus: BYTES_PER_BLOCK,
            found: bytes.len(),
        });
    }

    encode_blocks(out, bytes);
    Ok(())
}

/// Encodes whole blocks. Any trailing partial block is ignored.
pub(crate) fn encode_blocks(out: &mut String, bytes: &[u8]) {
    trace!("Encoding {} bytes -> {} chars", bytes.len(), encoded_len(bytes.len()));
    out.reserve(encoded_len(bytes.len()));

    for chunk in bytes.chunks_exact(BYTES_PER_BLOCK) {
        let mut value = BigEndian::read_u32(chunk);
        let mut block = [0u8; CHARS_PER_BLOCK];
        for slot in block.iter_mut().rev() {
            *slot = alphabet::symbol(value % 85);
            value /= 85;
        }
        out.extend(block.iter().map(|&b| char::from(b)));
    }
}

/// Decodes text whose length is a multiple of 5.
///
/// # Errors
/// - [`Z85Error::UnalignedLength`] if the length is not a multiple of 5
/// - [`Z85Error::InvalidCharacter`] for a character outside the alphabet
/// - [`Z85Error::InvalidByte`] for the same in input that is not UTF-8
/// - [`Z85Error::ValueOverflow`] for a group above `0xFFFFFFFF`
pub fn decode(text: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decode_into(&mut out, text)?;
    Ok(out)
}

/// Appends the decoding of `text` to `out`.
///
/// On error `out` is truncated back to its original length.
pub fn decode_into(out: &mut Vec<u8>, text: impl AsRef<[u8]>) -> Result<()> {
    let text = text.as_ref();
    if text.len() % CHARS_PER_BLOCK != 0 {
        return Err(Z85Error::UnalignedLength {
            modulus: CHARS_PER_BLOCK,
            found: text.len(),
        });
    }

    trace!("Decoding {} chars -> {} bytes", text.len(), decoded_len(text.len()));
    let start = out.len();
    out.reserve(decoded_len(text.len()));

    for (index, group) in text.chunks_exact(CHARS_PER_BLOCK).enumerate() {
        match decode_group(text, group, index * CHARS_PER_BLOCK) {
            Ok(value) => {
                let mut bytes = [0u8; BYTES_PER_BLOCK];
                BigEndian::write_u32(&mut bytes, value);
                out.extend_from_slice(&bytes);
            }
            Err(e) => {
                out.truncate(start);
                return Err(e);
            }
        }
    }
    Ok(())
}

/// Folds one 5-character group starting at `offset` of `text` into its 32-bit value.
fn decode_group(text: &[u8], group: &[u8], offset: usize) -> Result<u32> {
    let mut value: u64 = 0;
    for (i, &byte) in group.iter().enumerate() {
        let digit = alphabet::digit(byte).ok_or_else(|| invalid_character(text, offset + i))?;
        value = value * 85 + u64::from(digit);
    }

    // 85^5 exceeds 2^32, so the top of the range must be rejected explicitly.
    u32::try_from(value).map_err(|_| Z85Error::ValueOverflow { position: offset })
}

/// Names the character starting at byte `position`, or the raw byte when
/// `text` is not UTF-8.
///
/// Every non-ASCII byte is outside the alphabet and groups are scanned in
/// order, so the first rejected byte of UTF-8 input starts a character.
fn invalid_character(text: &[u8], position: usize) -> Z85Error {
    let character = std::str::from_utf8(text)
        .ok()
        .and_then(|s| s.get(position..))
        .and_then(|rest| rest.chars().next());

    match character {
        Some(character) => Z85Error::InvalidCharacter { character, position },
        None => Z85Error::InvalidByte {
            byte: text[position],
            position,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::z85::error::ErrorKind;

    #[test]
    fn encodes_extreme_values() {
        assert_eq!(encode(&[0, 0, 0, 0]).unwrap(), "00000");
        assert_eq!(encode(&[0, 0, 0, 1]).unwrap(), "00001");
        assert_eq!(encode(&[0xFF; 4]).unwrap(), "%nSc0");
        assert_eq!(decode("%nSc0").unwrap(), vec![0xFF; 4]);
    }

    #[test]
    fn rejects_group_above_u32_max() {
        // "%nSc1" is 0xFFFFFFFF + 1.
        let err = decode("00000%nSc1").unwrap_err();
        assert!(matches!(err, Z85Error::ValueOverflow { position: 5 }), "{err}");
        assert_eq!(err.kind(), ErrorKind::Alphabet);

        assert!(matches!(
            decode("#####").unwrap_err(),
            Z85Error::ValueOverflow { position: 0 }
        ));
    }

    #[test]
    fn reports_offending_character_and_position() {
        let err = decode("Hello World").unwrap_err();
        assert!(matches!(err, Z85Error::UnalignedLength { modulus: 5, found: 11 }));

        let err = decode("HelloWor~d").unwrap_err();
        match err {
            Z85Error::InvalidCharacter { character, position } => {
                assert_eq!(character, '~');
                assert_eq!(position, 8);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn names_multibyte_character_from_str_input() {
        let err = decode("é000").unwrap_err();
        assert!(matches!(err, Z85Error::InvalidCharacter { character: 'é', position: 0 }));
        assert_eq!(err.to_string(), "Invalid Z85 character 'é' at position 0");

        let err = decode("0000€000").unwrap_err();
        assert_eq!(err.to_string(), "Invalid Z85 character '€' at position 4");
    }

    #[test]
    fn names_raw_byte_from_non_utf8_input() {
        let err = decode(b"0000\xe9").unwrap_err();
        assert!(matches!(err, Z85Error::InvalidByte { byte: 0xe9, position: 4 }));
        assert_eq!(err.kind(), ErrorKind::Alphabet);
        assert_eq!(err.to_string(), "Invalid Z85 byte 0xe9 at position 4");
    }

    #[test]
    fn decode_into_leaves_no_partial_output() {
        let mut out = vec![0xAA];
        let err = decode_into(&mut out, "HelloWorl\"").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Alphabet);
        assert_eq!(out, vec![0xAA]);

        decode_into(&mut out, "HelloWorld").unwrap();
        assert_eq!(out, [0xAA, 0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B]);
    }

    #[test]
    fn encode_into_appends() {
        let mut out = String::from("key:");
        encode_into(&mut out, &[0x86, 0x4F, 0xD2, 0x6F]).unwrap();
        assert_eq!(out, "key:Hello");

        assert!(encode_into(&mut out, &[1, 2, 3]).is_err());
        assert_eq!(out, "key:Hello");
    }

    #[test]
    fn length_helpers() {
        assert_eq!(encoded_len(0), 0);
        assert_eq!(encoded_len(32), 40);
        assert_eq!(decoded_len(40), 32);
        assert_eq!(decoded_len(5), 4);
    }
}
