//! Padding extension for buffers of any length.
//!
//! Encoding pads the input with 0-3 zero bytes up to a whole block and
//! appends one digit `'0'..='3'` holding the number of bytes added. Decoding
//! reads that digit back and strips the same number of bytes.

use log::debug;

use super::block::{self, BYTES_PER_BLOCK, CHARS_PER_BLOCK};
use super::error::{Result, Z85Error};

/// Length of the text produced by [`encode_with_padding`] for `n` input bytes.
#[inline]
pub fn padded_encoded_len(n: usize) -> usize {
    n.div_ceil(BYTES_PER_BLOCK) * CHARS_PER_BLOCK + 1
}

/// Encodes a buffer of any length, appending the padding counter.
///
/// The empty buffer encodes to `"0"`.
pub fn encode_with_padding(bytes: &[u8]) -> String {
    let pad = (BYTES_PER_BLOCK - bytes.len() % BYTES_PER_BLOCK) % BYTES_PER_BLOCK;
    let aligned = bytes.len() - (bytes.len() % BYTES_PER_BLOCK);
    debug!("Padding {} bytes with {} zero bytes", bytes.len(), pad);

    let mut out = String::with_capacity(padded_encoded_len(bytes.len()));
    block::encode_blocks(&mut out, &bytes[..aligned]);

    if pad > 0 {
        let mut tail = [0u8; BYTES_PER_BLOCK];
        tail[..BYTES_PER_BLOCK - pad].copy_from_slice(&bytes[aligned..]);
        block::encode_blocks(&mut out, &tail);
    }

    out.push(counter_char(pad));
    out
}

/// Decodes text produced by [`encode_with_padding`].
///
/// # Errors
/// - [`Z85Error::PaddedLength`] if `text.len() % 5 != 1`
/// - [`Z85Error::InvalidCounter`] if the last character is not `'0'..='3'`
///   ([`Z85Error::InvalidCounterByte`] when `text` is not UTF-8)
/// - [`Z85Error::CounterTooLarge`] if the counter exceeds the decoded length
/// - any error from [`block::decode`] on the remaining characters
pub fn decode_with_padding(text: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let text = text.as_ref();
    let Some((&marker, body)) = text.split_last() else {
        return Err(Z85Error::PaddedLength { found: 0 });
    };
    if text.len() % CHARS_PER_BLOCK != 1 {
        return Err(Z85Error::PaddedLength { found: text.len() });
    }

    let counter = parse_counter(text, marker)?;
    let mut decoded = block::decode(body)?;

    let size = decoded
        .len()
        .checked_sub(counter)
        .ok_or(Z85Error::CounterTooLarge {
            counter,
            available: decoded.len(),
        })?;
    debug!("Stripping {} padding bytes from {} decoded bytes", counter, decoded.len());
    decoded.truncate(size);
    Ok(decoded)
}

fn counter_char(pad: usize) -> char {
    // pad is always below BYTES_PER_BLOCK.
    char::from(b'0' + pad as u8)
}

fn parse_counter(text: &[u8], marker: u8) -> Result<usize> {
    match marker {
        b'0'..=b'3' => Ok(usize::from(marker - b'0')),
        // Name the whole trailing character, not the last byte of its UTF-8 form.
        _ => match std::str::from_utf8(text).ok().and_then(|s| s.chars().next_back()) {
            Some(character) => Err(Z85Error::InvalidCounter(character)),
            None => Err(Z85Error::InvalidCounterByte(marker)),
        },
    }
}
