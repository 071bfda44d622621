use thiserror::Error;

/// Failure while decoding a board code.
///
/// Decoding never resynchronizes: the layout is schema-on-read, so the
/// first failed field aborts the whole document.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    /// A field would extend past the final character of the code.
    ///
    /// The message literal is part of the wire compatibility contract;
    /// callers match on it.
    #[error("Unexpected end of base64 string")]
    UnexpectedEnd,
    /// The code contains a character outside the 64-character alphabet.
    #[error("invalid base64 character {0:?}")]
    InvalidCharacter(char),
}
