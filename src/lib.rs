//! # z85-codec
//!
//! A binary-to-text codec for the ZeroMQ Z85 encoding.
//! Encodes 4-byte blocks as 5 printable characters, with a padded variant
//! for buffers whose length is not a multiple of 4.
pub mod z85;

// Re-export the main operations for convenience
pub use z85::{
    decode,
    decode_into,
    decode_with_padding,
    encode,
    encode_into,
    encode_with_padding,
    error::{ErrorKind, Result, Z85Error},
};
