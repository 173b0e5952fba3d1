//!
//! Interpretation of leaf element payloads.
//!
//! The decoder hands every leaf's bytes to [`interpret`], which derives a typed [`Value`] from the schema type and, for `Block`/`SimpleBlock` elements, the block header fields.  [`encode_value`] goes the other way for callers building events by hand.
//!

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::warn;

use crate::errors::FormatError;
use crate::specs::ElementType;
use crate::tools::{arr_to_u64, hex_string, read_vint};

/// Widest unsigned payload still read back as [`Value::Unsigned`].
const MAX_UNSIGNED_WIDTH: usize = 6;

///
/// The typed value of a leaf element.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Masters, elements of unknown type, and UTF-8 strings that are not valid UTF-8.
    None,
    Unsigned(u64),
    /// Unsigned integers wider than 6 bytes, as lowercase hex.
    Hex(String),
    Signed(i64),
    Float(f64),
    /// Integers and floats stored with a width that has no native reading.
    NotANumber,
    /// A `String` element, decoded as Latin-1.
    String(String),
    Utf8(String),
    Date(DateTime<Utc>),
    Binary(Bytes),
}

impl Value {
    /// The integer held by [`Value::Unsigned`].
    pub fn as_unsigned(&self) -> Option<u64> {
        match self {
            Value::Unsigned(val) => Some(*val),
            _ => None,
        }
    }

    /// The integer held by [`Value::Signed`].
    pub fn as_signed(&self) -> Option<i64> {
        match self {
            Value::Signed(val) => Some(*val),
            _ => None,
        }
    }

    /// The number held by [`Value::Float`].
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(val) => Some(*val),
            _ => None,
        }
    }

    /// The text of a Latin-1, UTF-8 or hex value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(val) | Value::Utf8(val) | Value::Hex(val) => Some(val.as_str()),
            _ => None,
        }
    }
}

///
/// Header fields of a `Block` or `SimpleBlock` payload.
///
/// Only `SimpleBlock` carries a flags byte; a plain `Block` reports both flags as `false` and its payload starts right after the timecode.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub track: u64,
    pub timecode: i16,
    pub keyframe: bool,
    pub discardable: bool,
    pub payload: Bytes,
}

///
/// Derives the typed value of a leaf from its schema type, plus block fields when `name` is `Block` or `SimpleBlock`.
///
pub fn interpret(name: &str, element_type: Option<ElementType>, data: &Bytes) -> (Value, Option<Block>) {
    let block = match name {
        "SimpleBlock" => read_block(data, true),
        "Block" => read_block(data, false),
        _ => None,
    };
    (decode_value(element_type, data), block)
}

///
/// Derives the typed value of a leaf payload.
///
/// ```
/// use ebml_stream::specs::ElementType;
/// use ebml_stream::values::{decode_value, Value};
///
/// let data = bytes::Bytes::from_static(&[0x01, 0x00]);
/// assert_eq!(Value::Unsigned(256), decode_value(Some(ElementType::UnsignedInt), &data));
/// assert_eq!(Value::Signed(256), decode_value(Some(ElementType::Integer), &data));
/// ```
///
pub fn decode_value(element_type: Option<ElementType>, data: &Bytes) -> Value {
    let element_type = match element_type {
        Some(element_type) => element_type,
        None => return Value::None,
    };

    match element_type {
        ElementType::Master => Value::None,
        ElementType::UnsignedInt => {
            if data.len() <= MAX_UNSIGNED_WIDTH {
                Value::Unsigned(arr_to_u64(data))
            } else {
                Value::Hex(hex_string(data))
            }
        },
        ElementType::Integer => match data.len() {
            1 => Value::Signed(i64::from(data[0] as i8)),
            2 => Value::Signed(i64::from(i16::from_be_bytes([data[0], data[1]]))),
            4 => Value::Signed(i64::from(i32::from_be_bytes([data[0], data[1], data[2], data[3]]))),
            _ => Value::NotANumber,
        },
        ElementType::Float => match data.len() {
            4 => Value::Float(f64::from(f32::from_be_bytes([data[0], data[1], data[2], data[3]]))),
            8 => Value::Float(f64::from_be_bytes([data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7]])),
            _ => Value::NotANumber,
        },
        ElementType::String => Value::String(data.iter().map(|b| char::from(*b)).collect()),
        ElementType::Utf8 => match std::str::from_utf8(data) {
            Ok(val) => Value::Utf8(val.to_string()),
            Err(_) => Value::None,
        },
        ElementType::Date => {
            let millis = match data.len() {
                1 | 2 | 4 | 8 => i64::try_from(arr_to_u64(data)).ok(),
                _ => None,
            };
            Value::Date(millis.and_then(DateTime::from_timestamp_millis).unwrap_or_default())
        },
        ElementType::Binary => Value::Binary(data.clone()),
    }
}

///
/// Parses the header of a `Block` (`simple == false`) or `SimpleBlock` payload.
///
/// Returns `None` when the payload is too short to hold the header.
///
pub fn read_block(data: &Bytes, simple: bool) -> Option<Block> {
    let track = match read_vint(data, 0) {
        Ok(Some(track)) => track,
        Ok(None) | Err(_) => {
            warn!(len = data.len(), "block payload too short for a track number");
            return None;
        },
    };

    let header_len = track.length + 2 + usize::from(simple);
    if data.len() < header_len {
        warn!(len = data.len(), "block payload too short for its header");
        return None;
    }

    let timecode = i16::from_be_bytes([data[track.length], data[track.length + 1]]);
    let flags = if simple { data[track.length + 2] } else { 0 };

    Some(Block {
        track: track.value,
        timecode,
        keyframe: flags & 0x80 != 0,
        discardable: flags & 0x01 != 0,
        payload: data.slice(header_len..),
    })
}

///
/// Serializes a value into element payload bytes.
///
/// Unsigned integers use the fewest bytes that hold them, up to 6.  Signed integers use the smallest of 1, 2 or 4 bytes.  Floats always use 8 bytes and dates are written as 8 byte millisecond timestamps.  Every value accepted here decodes back to itself through [`decode_value`].
///
/// # Errors
///
/// Returns [`FormatError::UnencodableValue`] for [`Value::NotANumber`], for unsigned integers above 48 bits (write those as [`Value::Hex`]), for signed integers outside the `i32` range, for malformed [`Value::Hex`] strings, for [`Value::String`]s with characters outside Latin-1 and for dates before the epoch.
///
pub fn encode_value(value: &Value) -> Result<Bytes, FormatError> {
    let bytes = match value {
        Value::None => Vec::new(),
        Value::Unsigned(val) => {
            let width = ((u64::BITS - val.leading_zeros()) as usize).div_ceil(8).max(1);
            if width > MAX_UNSIGNED_WIDTH {
                return Err(FormatError::UnencodableValue(format!("{} is wider than {} bytes, use a hex value", val, MAX_UNSIGNED_WIDTH)));
            }
            val.to_be_bytes()[8 - width..].to_vec()
        },
        Value::Hex(val) => decode_hex(val)?,
        Value::Signed(val) => {
            if *val <= i8::MAX as i64 && *val >= i8::MIN as i64 {
                (*val as i8).to_be_bytes().to_vec()
            } else if *val <= i16::MAX as i64 && *val >= i16::MIN as i64 {
                (*val as i16).to_be_bytes().to_vec()
            } else {
                i32::try_from(*val)
                    .map_err(|_| FormatError::UnencodableValue(format!("{} does not fit in 4 bytes", val)))?
                    .to_be_bytes()
                    .to_vec()
            }
        },
        Value::Float(val) => val.to_be_bytes().to_vec(),
        Value::NotANumber => return Err(FormatError::UnencodableValue(String::from("NaN has no width"))),
        Value::String(val) => val.chars()
            .map(|c| u8::try_from(c).map_err(|_| FormatError::UnencodableValue(format!("'{}' is not Latin-1", c))))
            .collect::<Result<Vec<u8>, _>>()?,
        Value::Utf8(val) => val.as_bytes().to_vec(),
        Value::Date(val) => {
            let millis = u64::try_from(val.timestamp_millis())
                .map_err(|_| FormatError::UnencodableValue(format!("{} is before the epoch", val)))?;
            millis.to_be_bytes().to_vec()
        },
        Value::Binary(val) => return Ok(val.clone()),
    };
    Ok(Bytes::from(bytes))
}

fn decode_hex(hex: &str) -> Result<Vec<u8>, FormatError> {
    let invalid = || FormatError::UnencodableValue(format!("\"{}\" is not a hex string", hex));
    if hex.len() % 2 != 0 || !hex.is_ascii() {
        return Err(invalid());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid()))
        .collect()
}
