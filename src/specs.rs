//!
//! Provides the EBML schema types.
//!
//! Typically won't be used unless you are implementing a custom schema that uses EBML.  You can enable the `"derive-spec"` feature to obtain a macro to make implementation easier.
//!

#[cfg(feature = "derive-spec")]
pub use ebml_stream_specification_derive::ebml_schema;

pub use ebml_stream_specification::Schema;
pub use ebml_stream_specification::ElementInfo;
pub use ebml_stream_specification::ElementType;
pub use ebml_stream_specification::UNKNOWN_ELEMENT;
pub use ebml_stream_specification::empty_spec::EmptySchema;
