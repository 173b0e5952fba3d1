//!
//! Error types returned by the decoder, the encoder and the vint tools.
//!

use std::io;

///
/// The byte stream (or a value to be written into it) cannot be represented in EBML.
///
/// Raised by the vint codec and by the decoder when it meets structurally impossible data.  Fatal for the call that raised it; the stream should be treated as corrupt.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Unrepresentable length: vint starting with [{bytes}] is longer than 8 bytes")]
    UnrepresentableLength { bytes: String },

    #[error("Unrepresentable value: {0}")]
    UnrepresentableValue(i128),

    #[error("Unrepresentable id: {0} does not fit in 4 bytes")]
    UnrepresentableId(String),

    #[error("Element {name} ({id_hex}) declares an unknown size but is not a master element")]
    UnknownSizedLeaf { name: String, id_hex: String },

    #[error("Element {name} declares {size} bytes of data, above the limit of {max}")]
    ElementTooLarge { name: String, size: u64, max: u64 },

    #[error("Value cannot be encoded: {0}")]
    UnencodableValue(String),
}

///
/// The encoder was asked for an element name that the schema does not contain.
///
/// Raised synchronously; the encoder state is left as it was before the call.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("No schema entry found for {0}")]
    UnknownElement(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("Cannot write after end")]
    WriteAfterEnd,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("Error reading from source: {0}")]
    Read(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("Error writing to destination: {0}")]
    Write(#[from] io::Error),
}
