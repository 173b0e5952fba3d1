//! This crate provides the schema contract that is used by the ebml-stream crate.
//!
//! The related ebml-stream-specification-derive crate can be used to generate a [`Schema`] implementation from a declarative element list.
//!

use std::rc::Rc;
use std::sync::Arc;

///
/// Contains a schema that knows no elements, for structural scanning or very basic testing.
///
pub mod empty_spec;

///
/// Different data types defined in the EBML specification.
///
/// Each variant corresponds to one of the single-character type letters used by EBML schema tables (`m`, `u`, `i`, `f`, `s`, `8`, `d`, `b`).
///
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ElementType {
    /// `m` - a container for other elements.
    Master,
    /// `u` - unsigned integer.
    UnsignedInt,
    /// `i` - signed integer.
    Integer,
    /// `f` - IEEE-754 floating point number.
    Float,
    /// `s` - printable ASCII string.
    String,
    /// `8` - UTF-8 string.
    Utf8,
    /// `d` - timestamp.
    Date,
    /// `b` - binary data, otherwise uninterpreted.
    Binary,
}

impl ElementType {
    ///
    /// Returns the `ElementType` for an EBML type letter, or `None` if the letter is not one of `m u i f s 8 d b`.
    ///
    /// ```
    /// use ebml_stream_specification::ElementType;
    ///
    /// assert_eq!(Some(ElementType::Utf8), ElementType::from_letter('8'));
    /// assert_eq!(None, ElementType::from_letter('x'));
    /// ```
    ///
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'm' => Some(ElementType::Master),
            'u' => Some(ElementType::UnsignedInt),
            'i' => Some(ElementType::Integer),
            'f' => Some(ElementType::Float),
            's' => Some(ElementType::String),
            '8' => Some(ElementType::Utf8),
            'd' => Some(ElementType::Date),
            'b' => Some(ElementType::Binary),
            _ => None,
        }
    }

    ///
    /// Returns the EBML type letter for this type.
    ///
    pub fn letter(self) -> char {
        match self {
            ElementType::Master => 'm',
            ElementType::UnsignedInt => 'u',
            ElementType::Integer => 'i',
            ElementType::Float => 'f',
            ElementType::String => 's',
            ElementType::Utf8 => '8',
            ElementType::Date => 'd',
            ElementType::Binary => 'b',
        }
    }

    pub fn is_master(self) -> bool {
        matches!(self, ElementType::Master)
    }
}

///
/// Schema metadata for a single element id.
///
/// `level` is the depth of the element in the document tree (`0` for root elements such as `EBML` and `Segment`).  Global elements that may appear at any depth (e.g. `Void`, `CRC-32`) have no level.
///
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElementInfo {
    pub id: u32,
    pub name: &'static str,
    pub element_type: Option<ElementType>,
    pub level: Option<u8>,
}

///
/// The sentinel returned by [`Schema::id_to_info`] for ids that are not in a schema.
///
pub const UNKNOWN_ELEMENT: ElementInfo = ElementInfo {
    id: 0,
    name: "unknown",
    element_type: None,
    level: None,
};

///
/// This trait should be implemented to describe an EBML document type so that the decoder and encoder can resolve element ids and names.
///
/// A schema is a read-only mapping: it is handed to a decoder or encoder when the instance is created and is never modified by them.  Typically the implementation is generated by the `ebml_schema!` macro, but hand-written implementations work the same way.
///
pub trait Schema {
    ///
    /// Pulls the metadata for an element from the schema, based on the element id.
    ///
    /// This function *must* return [`None`] if the input id is not in the schema.
    ///
    fn get_element(&self, id: u32) -> Option<ElementInfo>;

    ///
    /// Gets the id of an element based on its name.
    ///
    /// This function *must* return [`None`] if the name is not in the schema.
    ///
    fn name_to_id(&self, name: &str) -> Option<u32>;

    ///
    /// Pulls the metadata for an element, never failing.
    ///
    /// Ids that are not in the schema resolve to a copy of [`UNKNOWN_ELEMENT`] carrying the requested id.
    ///
    fn id_to_info(&self, id: u32) -> ElementInfo {
        self.get_element(id).unwrap_or(ElementInfo { id, ..UNKNOWN_ELEMENT })
    }
}

impl<S: Schema + ?Sized> Schema for &S {
    fn get_element(&self, id: u32) -> Option<ElementInfo> {
        (**self).get_element(id)
    }

    fn name_to_id(&self, name: &str) -> Option<u32> {
        (**self).name_to_id(name)
    }
}

impl<S: Schema + ?Sized> Schema for Box<S> {
    fn get_element(&self, id: u32) -> Option<ElementInfo> {
        (**self).get_element(id)
    }

    fn name_to_id(&self, name: &str) -> Option<u32> {
        (**self).name_to_id(name)
    }
}

impl<S: Schema + ?Sized> Schema for Rc<S> {
    fn get_element(&self, id: u32) -> Option<ElementInfo> {
        (**self).get_element(id)
    }

    fn name_to_id(&self, name: &str) -> Option<u32> {
        (**self).name_to_id(name)
    }
}

impl<S: Schema + ?Sized> Schema for Arc<S> {
    fn get_element(&self, id: u32) -> Option<ElementInfo> {
        (**self).get_element(id)
    }

    fn name_to_id(&self, name: &str) -> Option<u32> {
        (**self).name_to_id(name)
    }
}
