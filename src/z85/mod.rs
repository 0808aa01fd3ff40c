//! Core Z85 codec module
//!
//! Implements the ZeroMQ Z85 encoding (RFC 32): 4 bytes map to 5 printable
//! ASCII characters. The unpadded operations require block-aligned input;
//! the padded variants accept any length and append a one-digit counter
//! recording how many zero bytes were added.
//!
//! All operations are pure functions over borrowed input and may be called
//! concurrently without coordination.

pub mod alphabet;
pub mod error;
mod block;
mod padding;

pub use block::{
    decode, decode_into, decoded_len, encode, encode_into, encoded_len, BYTES_PER_BLOCK,
    CHARS_PER_BLOCK,
};
pub use error::{ErrorKind, Result, Z85Error};
pub use padding::{decode_with_padding, encode_with_padding, padded_encoded_len};
