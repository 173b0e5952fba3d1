//!
//! The events produced by the [`Decoder`](crate::Decoder) and consumed by the [`Encoder`](crate::Encoder).
//!

use bytes::Bytes;

use crate::errors::FormatError;
use crate::specs::ElementType;
use crate::values::{encode_value, Block, Value};

pub use crate::tag_iterator_util::EBMLSize;

///
/// Everything known about an element once its id and size have been read.
///
/// Offsets are absolute positions in the decoded stream.  `end` is `None` for elements of unknown size.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementHeader {
    pub id: u32,
    pub id_hex: String,
    pub name: String,
    pub element_type: Option<ElementType>,
    pub start: u64,
    pub end: Option<u64>,
    pub data_size: EBMLSize,
}

impl ElementHeader {
    ///
    /// A header carrying only a name, for events handed to an encoder.  The encoder resolves everything else from its schema.
    ///
    pub fn named(name: impl Into<String>) -> Self {
        ElementHeader {
            id: 0,
            id_hex: String::new(),
            name: name.into(),
            element_type: None,
            start: 0,
            end: Some(0),
            data_size: EBMLSize::Known(0),
        }
    }

    pub fn is_master(&self) -> bool {
        matches!(self.element_type, Some(ElementType::Master))
    }

    pub fn is_unknown_size(&self) -> bool {
        self.end.is_none()
    }
}

///
/// A leaf element with its payload.
///
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedElement {
    pub header: ElementHeader,
    pub data: Bytes,
    pub value: Value,

    /// Populated for `Block` and `SimpleBlock` elements whose payload holds a complete block header.
    pub block: Option<Block>,
}

impl DecodedElement {
    pub fn name(&self) -> &str {
        &self.header.name
    }
}

///
/// A single step through an EBML document.
///
/// Every `Start` is matched by an `End` with the same id once the master element is closed, and every leaf produces exactly one `Tag`.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Start(ElementHeader),
    Tag(DecodedElement),
    End(ElementHeader),
}

impl Event {
    ///
    /// Opens a master element of known size.  The size is computed by the encoder once the element is ended.
    ///
    pub fn start(name: impl Into<String>) -> Self {
        Event::Start(ElementHeader::named(name))
    }

    ///
    /// Opens a master element that is written with the unknown size marker.
    ///
    pub fn start_unknown(name: impl Into<String>) -> Self {
        Event::Start(ElementHeader {
            end: None,
            data_size: EBMLSize::Unknown,
            ..ElementHeader::named(name)
        })
    }

    ///
    /// A leaf element with raw payload bytes.
    ///
    pub fn tag(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Event::leaf(name.into(), data.into(), Value::None)
    }

    ///
    /// A leaf element whose payload is the serialized form of `value`.
    ///
    /// # Errors
    ///
    /// Fails when [`encode_value`] cannot serialize the value.
    ///
    pub fn tag_value(name: impl Into<String>, value: Value) -> Result<Self, FormatError> {
        let data = encode_value(&value)?;
        Ok(Event::leaf(name.into(), data, value))
    }

    pub fn end(name: impl Into<String>) -> Self {
        Event::End(ElementHeader::named(name))
    }

    pub fn header(&self) -> &ElementHeader {
        match self {
            Event::Start(header) | Event::End(header) => header,
            Event::Tag(element) => &element.header,
        }
    }

    pub fn name(&self) -> &str {
        &self.header().name
    }

    fn leaf(name: String, data: Bytes, value: Value) -> Self {
        let header = ElementHeader {
            data_size: EBMLSize::Known(data.len() as u64),
            ..ElementHeader::named(name)
        };
        Event::Tag(DecodedElement {
            header,
            data,
            value,
            block: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_names() {
        assert_eq!("EBML", Event::start("EBML").name());
        assert_eq!("Cluster", Event::end("Cluster").name());
        assert_eq!("Void", Event::tag("Void", vec![0u8; 3]).name());
    }

    #[test]
    fn start_unknown_has_no_end() {
        assert!(Event::start_unknown("Segment").header().is_unknown_size());
        assert!(!Event::start("Segment").header().is_unknown_size());
    }

    #[test]
    fn tag_value_serializes() {
        let event = Event::tag_value("EBMLVersion", Value::Unsigned(1)).unwrap();
        match event {
            Event::Tag(element) => {
                assert_eq!(Bytes::from_static(&[0x01]), element.data);
                assert_eq!(Value::Unsigned(1), element.value);
                assert_eq!(EBMLSize::Known(1), element.header.data_size);
            },
            _ => panic!("expected a tag"),
        }
    }
}
