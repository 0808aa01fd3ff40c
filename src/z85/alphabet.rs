//! The fixed 85-symbol Z85 alphabet and its reverse lookup table.

/// Digit value to character, in the order fixed by ZeroMQ RFC 32.
pub const ENCODE_TABLE: &[u8; 85] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#";

/// Marks bytes in [`DECODE_TABLE`] that are not part of the alphabet.
pub const INVALID: u8 = 0xFF;

/// Byte to digit value (0..=84), or [`INVALID`].
pub const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ENCODE_TABLE.len() {
        table[ENCODE_TABLE[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the digit value of `byte`, or `None` if it is not a Z85 character.
#[inline]
pub fn digit(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Returns the character for a digit value. `value` must be below 85.
#[inline]
pub(crate) fn symbol(value: u32) -> u8 {
    ENCODE_TABLE[value as usize]
}

/// Returns `true` if `byte` is one of the 85 alphabet characters.
#[inline]
pub fn is_z85_char(byte: u8) -> bool {
    digit(byte).is_some()
}
