use ebml_stream_specification::ElementInfo;

use crate::spec_util;
use crate::tags::ElementHeader;

///
/// The declared data size of an element.
///
/// `Unknown` is only produced by the all-ones vint pattern; every other size, however large, is `Known`.
///
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EBMLSize {
    Known(u64),
    Unknown
}

impl EBMLSize {
    pub fn new(size: u64, vint_length: usize) -> Self {
        if (1..=8).contains(&vint_length) && size == (1u64 << (7 * vint_length)) - 1 {
            EBMLSize::Unknown
        } else {
            EBMLSize::Known(size)
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, EBMLSize::Known(_))
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            EBMLSize::Known(size) => Some(*size),
            EBMLSize::Unknown => None,
        }
    }
}

///
/// An element the decoder has read the header of but not yet closed.
///
#[derive(Clone, Debug)]
pub struct ProcessingTag {
    pub header: ElementHeader,
    pub level: Option<u8>,
}

impl ProcessingTag {
    pub fn new(info: &ElementInfo, id_hex: String, start: u64, id_length: usize) -> Self {
        ProcessingTag {
            header: ElementHeader {
                id: info.id,
                id_hex,
                name: info.name.to_string(),
                element_type: info.element_type,
                start,
                end: Some(start + id_length as u64),
                data_size: EBMLSize::Known(0),
            },
            level: info.level,
        }
    }

    pub fn into_inner(self) -> ElementHeader {
        self.header
    }

    pub fn is_master(&self) -> bool {
        self.header.is_master()
    }

    ///
    /// Records the size read from the size field.  Unknown sizes leave the element without an end offset.
    ///
    pub fn set_size(&mut self, size: EBMLSize, data_start: u64) {
        self.header.data_size = size;
        self.header.end = size.value().map(|size| data_start + size);
    }

    ///
    /// Whether every byte of this element is at or before `offset`.
    ///
    pub fn is_finished_at(&self, offset: u64) -> bool {
        matches!(self.header.end, Some(end) if offset >= end)
    }

    ///
    /// Whether the start of `next` implicitly closes this element.
    ///
    pub fn is_ended_by(&self, next: &ElementInfo) -> bool {
        self.header.end.is_none() && spec_util::is_ended_by(self.level, next.level)
    }
}

pub const DEFAULT_BUFFER_LEN: usize = 1024 * 64;
pub const DEFAULT_READ_CHUNK_LEN: usize = 1024 * 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_ones_is_unknown_at_every_length() {
        for length in 1..=8 {
            assert_eq!(EBMLSize::Unknown, EBMLSize::new((1u64 << (7 * length)) - 1, length));
            assert_eq!(EBMLSize::Known(1), EBMLSize::new(1, length));
        }
    }

    #[test]
    fn size_records_end() {
        let info = ElementInfo { id: 0x4286, name: "EBMLVersion", element_type: None, level: Some(1) };
        let mut tag = ProcessingTag::new(&info, String::from("4286"), 5, 2);
        assert_eq!(Some(7), tag.header.end);

        tag.set_size(EBMLSize::Known(1), 8);
        assert_eq!(Some(9), tag.header.end);
        assert!(!tag.is_finished_at(8));
        assert!(tag.is_finished_at(9));

        tag.set_size(EBMLSize::Unknown, 8);
        assert_eq!(None, tag.header.end);
        assert!(!tag.is_finished_at(u64::MAX));
    }
}
