//!
//! Contains a number of tools that are useful when working with EBML encoded data.
//!

use super::errors::FormatError;
use super::tags::EBMLSize;

///
/// The largest value accepted by [`Vint::as_vint`] (2^53).
///
pub const MAX_VINT_VALUE: u64 = 1 << 53;

///
/// The size field written for elements whose length is unknown.
///
/// This is the 8 byte all-ones vint.  It is always written at this length, independent of the minimal length [`Vint::as_vint`] would pick.
///
pub const UNKNOWN_SIZE: [u8; 8] = [0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

///
/// A vint read by [`read_vint`]: the value with its length marker removed, and the number of bytes it occupied.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawVint {
    pub value: u64,
    pub length: usize,
}

impl RawVint {
    ///
    /// Returns whether every value bit is set, which EBML reserves for "unknown size".
    ///
    pub fn is_unknown(&self) -> bool {
        self.value == (1u64 << (7 * self.length)) - 1
    }

    ///
    /// Interprets the vint as an element size.
    ///
    pub fn as_size(&self) -> EBMLSize {
        if self.is_unknown() {
            EBMLSize::Unknown
        } else {
            EBMLSize::Known(self.value)
        }
    }

    ///
    /// Returns the vint as an element id, i.e. with its length marker put back.
    ///
    /// # Errors
    ///
    /// Ids longer than 4 bytes are rejected.
    ///
    pub fn as_id(&self) -> Result<u32, FormatError> {
        let id = self.value | (1u64 << (7 * self.length));
        u32::try_from(id).map_err(|_| FormatError::UnrepresentableId(format!("{:x}", id)))
    }
}

///
/// Trait to enable easy serialization to a vint.
///
/// This is available for the primitive integer types.  Negative values and values above [`MAX_VINT_VALUE`] are rejected.
///
pub trait Vint: Into<i128> + Copy {
    ///
    /// Returns a representation of the current value as a vint array, using the smallest length whose all-ones pattern is above the value.
    ///
    /// # Errors
    ///
    /// This can return an error if the value is negative or larger than [`MAX_VINT_VALUE`].
    ///
    fn as_vint(&self) -> Result<Vec<u8>, FormatError> {
        let val = check_value((*self).into())?;
        let mut length = 1;
        while length < 8 && val >= (1 << (7 * length)) - 1 {
            length += 1;
        }

        Ok(as_vint_no_check_u64(val, length))
    }

    ///
    /// Returns a representation of the current value as a vint array with a specified length.
    ///
    /// # Errors
    ///
    /// This can return an error if the value is not representable in `length` bytes without colliding with the unknown size pattern.
    ///
    fn as_vint_with_length(&self, length: usize) -> Result<Vec<u8>, FormatError> {
        let raw: i128 = (*self).into();
        let val = check_value(raw)?;
        if length == 0 || length > 8 || val >= (1 << (7 * length)) - 1 {
            return Err(FormatError::UnrepresentableValue(raw));
        }
        Ok(as_vint_no_check_u64(val, length))
    }
}

impl Vint for u64 { }
impl Vint for u32 { }
impl Vint for u16 { }
impl Vint for u8 { }
impl Vint for i64 { }
impl Vint for i32 { }
impl Vint for i16 { }
impl Vint for i8 { }

///
/// Writes `value` as a vint.  Shorthand for [`Vint::as_vint`].
///
/// ```
/// use ebml_stream::tools::write_vint;
///
/// assert_eq!(vec![0x81], write_vint(1u8).unwrap());
/// assert_eq!(vec![0x40, 0x7F], write_vint(127u8).unwrap());
/// assert!(write_vint(-1i64).is_err());
/// ```
///
pub fn write_vint<T: Vint>(value: T) -> Result<Vec<u8>, FormatError> {
    value.as_vint()
}

#[inline]
fn check_value(val: i128) -> Result<u64, FormatError> {
    if val < 0 || val > i128::from(MAX_VINT_VALUE) {
        Err(FormatError::UnrepresentableValue(val))
    } else {
        Ok(val as u64)
    }
}

#[inline]
fn as_vint_no_check_u64(val: u64, length: usize) -> Vec<u8> {
    let bytes: [u8; 8] = val.to_be_bytes();
    let mut result: Vec<u8> = Vec::from(&bytes[(8-length)..]);
    result[0] |= 1 << (8 - length);
    result
}

///
/// Reads a vint starting at `start` in the input slice.
///
/// This method returns an option with the `None` variant used to indicate there was not enough data in the buffer to completely read a vint.  Callers are expected to retry once more data is available.
///
/// # Errors
///
/// This method returns [`FormatError::UnrepresentableLength`] if the first byte is zero, i.e. the vint would be longer than 8 bytes.
///
pub fn read_vint(buffer: &[u8], start: usize) -> Result<Option<RawVint>, FormatError> {
    let first = match buffer.get(start) {
        Some(first) => *first,
        None => return Ok(None),
    };

    if first == 0 {
        let end = buffer.len().min(start + 9);
        return Err(FormatError::UnrepresentableLength { bytes: hex_string(&buffer[start..end]) });
    }

    let length = first.leading_zeros() as usize + 1;

    if start + length > buffer.len() {
        // Not enough data in the buffer to read out the vint value
        return Ok(None);
    }

    let mut value = u64::from(first) & ((1 << (8 - length)) - 1);
    for item in &buffer[(start + 1)..(start + length)] {
        value <<= 8;
        value += u64::from(*item);
    }

    Ok(Some(RawVint { value, length }))
}

///
/// Reads a `u64` value from an array slice of length <= 8, most significant byte first.
///
/// ```
/// # use ebml_stream::tools::arr_to_u64;
/// assert_eq!(4096, arr_to_u64(&[16, 0]));
/// ```
///
/// Only the last 8 bytes of longer slices affect the result.
///
pub fn arr_to_u64(arr: &[u8]) -> u64 {
    arr.iter().fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
}

///
/// Formats bytes as a lowercase hex string, two characters per byte.
///
pub fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
