//! Custom error types for the z85-codec crate.

use thiserror::Error;

/// Coarse classification of a [`Z85Error`].
///
/// Lets callers react to the kind of failure without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input length does not satisfy the operation's modulus.
    Length,
    /// A character is outside the alphabet, or a group decodes out of range.
    Alphabet,
    /// The padding marker is invalid or exceeds the decoded data.
    Counter,
    /// The input is not byte or text shaped at all.
    Argument,
    /// Reading or writing a stream failed.
    Io,
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum Z85Error {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// Unpadded input whose length is not a whole number of blocks.
    #[error("Invalid length {found}: input length must be a multiple of {modulus}; use the padding variant")]
    UnalignedLength { modulus: usize, found: usize },

    /// Padded input whose length is not one past a whole number of blocks.
    #[error("Invalid length {found}: input length for padded decode must be 1 mod 5")]
    PaddedLength { found: usize },

    /// A byte that is not part of the Z85 alphabet.
    #[error("Invalid Z85 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A byte outside the alphabet in input that is not valid UTF-8.
    #[error("Invalid Z85 byte {byte:#04x} at position {position}")]
    InvalidByte { byte: u8, position: usize },

    /// A 5-character group whose value does not fit in 32 bits.
    #[error("Z85 group at position {position} decodes to a value above 0xFFFFFFFF")]
    ValueOverflow { position: usize },

    /// The trailing padding marker is not one of '0'..='3'.
    #[error("Invalid counter: {0}")]
    InvalidCounter(char),

    /// The trailing padding marker byte of input that is not valid UTF-8.
    #[error("Invalid counter byte: {0:#04x}")]
    InvalidCounterByte(u8),

    /// The padding marker claims more bytes than were decoded.
    #[error("Decoded buffer shorter than declared padding: counter {counter}, but only {available} bytes decoded")]
    CounterTooLarge { counter: usize, available: usize },

    /// Input that could not be interpreted as bytes or text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Z85Error {
    /// Returns the taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::UnalignedLength { .. } | Self::PaddedLength { .. } => ErrorKind::Length,
            Self::InvalidCharacter { .. }
            | Self::InvalidByte { .. }
            | Self::ValueOverflow { .. } => ErrorKind::Alphabet,
            Self::InvalidCounter(_)
            | Self::InvalidCounterByte(_)
            | Self::CounterTooLarge { .. } => ErrorKind::Counter,
            Self::InvalidInput(_) => ErrorKind::Argument,
        }
    }
}

/// A convenience `Result` type alias using the crate's `Z85Error` type.
pub type Result<T> = std::result::Result<T, Z85Error>;
