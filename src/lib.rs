//! This crate provides a streaming decoder and encoder for [EBML][EBML] data.  Its primary goal is to turn bytes into element events (and back) as they arrive, without ever holding a whole document in memory.
//!
//! [EBML][EBML] stands for Extensible Binary Meta-Language and is somewhat of a
//! binary version of XML. It's used for container formats like [WebM][webm] or
//! [MKV][mkv].
//!
//! # Decoding
//! A [`Decoder`] accepts chunks of any size through [`Decoder::write`] and queues an [`Event`] for every element boundary it finds: [`Event::Start`] when a master element begins, [`Event::Tag`] for each complete leaf element and [`Event::End`] when a master element is closed.  Leaf payloads are interpreted according to their schema type (see [`values`]), and `Block`/`SimpleBlock` payloads additionally expose their track, timecode and flags.  Elements of "Unknown Data Size" as defined in [RFC8794][rfc8794] are supported; they are closed when a sibling or parent element begins, or when the input ends.
//!
//! [`TagIterator`] wraps a decoder around any [`std::io::Read`] source.
//!
//! # Encoding
//! An [`Encoder`] accepts the same events and produces EBML bytes.  Master element sizes are computed automatically, or the unknown size marker is written for masters opened with [`Event::start_unknown`].  [`TagWriter`] wraps an encoder around any [`std::io::Write`] destination.
//!
//! # Important - Schemas
//! The decoder and encoder are schema-agnostic and require a schema implementing the [`specs::Schema`] trait to resolve element ids, names, types and levels.  A Matroska/WebM schema is provided in [`matroska`] when the `"derive-spec"` feature is enabled (the default), and custom schemas can be declared with the [`specs::ebml_schema`] macro.
//!
//! # Features
//!   * __derive-spec__ - the `ebml_schema!` macro and the bundled Matroska schema.
//!   * __futures__ - `TagIteratorAsync`, an iterator over `futures::AsyncRead` sources that can also be turned into a `futures::Stream`.
//!
//! # Logging
//! Diagnostics are emitted through [`tracing`]; the crate never installs a subscriber.
//!
//! [EBML]: http://ebml.sourceforge.net/
//! [webm]: https://www.webmproject.org/
//! [mkv]: http://www.matroska.org/technical/specs/index.html
//! [rfc8794]: https://datatracker.ietf.org/doc/rfc8794/
//!

extern crate self as ebml_stream;

mod config;
mod decoder;
mod encoder;
pub mod errors;
mod spec_util;
mod tag_iterator;
mod tag_iterator_util;
mod tag_writer;
pub mod specs;
pub mod tags;
pub mod tools;
pub mod values;

#[cfg(feature = "derive-spec")]
pub mod matroska;

#[cfg(feature = "futures")]
mod tag_iterator_async;

#[cfg(test)]
mod test_schema;

pub use self::config::DecoderConfig;
pub use self::decoder::{Decoder, DecoderState};
pub use self::encoder::Encoder;
pub use self::tag_iterator::TagIterator;
pub use self::tag_writer::TagWriter;
pub use self::tags::{DecodedElement, EBMLSize, ElementHeader, Event};

#[cfg(feature = "futures")]
pub use self::tag_iterator_async::TagIteratorAsync;
