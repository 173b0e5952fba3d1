use std::collections::VecDeque;

use bytes::{Buf, BytesMut};
use tracing::{debug, trace, warn};

use crate::config::DecoderConfig;
use crate::errors::{DecodeError, FormatError, StateError};
use crate::specs::Schema;
use crate::tag_iterator_util::{EBMLSize, ProcessingTag};
use crate::tags::{DecodedElement, Event};
use crate::tools::{hex_string, read_vint};
use crate::values;

///
/// What the decoder expects to read next.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecoderState {
    /// An element id.
    Tag,
    /// The size field of the element whose id was just read.
    Size,
    /// The payload of the current element.
    Content,
}

///
/// Incrementally turns EBML bytes into [`Event`]s.
///
/// Bytes are handed over with [`write`](Decoder::write) in chunks of any size; the decoder keeps whatever it cannot use yet and resumes exactly where it stopped.  The events produced do not depend on how the input was split.  Completed events are queued and pulled with [`read_event`](Decoder::read_event) or [`drain_events`](Decoder::drain_events).
///
/// ```
/// use ebml_stream::{Decoder, Event};
/// use ebml_stream::matroska::Matroska;
///
/// let mut decoder = Decoder::new(Matroska);
/// decoder.write(&[0x1a, 0x45, 0xdf, 0xa3, 0x84]).unwrap();
/// decoder.write(&[0x42, 0x86, 0x81, 0x00]).unwrap();
///
/// let names: Vec<String> = decoder.drain_events()
///     .map(|event| match event {
///         Event::Start(header) => format!("+{}", header.name),
///         Event::Tag(element) => element.header.name,
///         Event::End(header) => format!("-{}", header.name),
///     })
///     .collect();
/// assert_eq!(vec!["+EBML", "EBMLVersion", "-EBML"], names);
/// ```
///
pub struct Decoder<S: Schema> {
    schema: S,
    config: DecoderConfig,

    buffer: BytesMut,
    cursor: usize,
    total: u64,
    state: DecoderState,
    tag_stack: Vec<ProcessingTag>,
    events: VecDeque<Event>,
    ended: bool,
}

impl<S: Schema> Decoder<S> {
    pub fn new(schema: S) -> Self {
        Decoder::with_config(schema, DecoderConfig::default())
    }

    pub fn with_config(schema: S, config: DecoderConfig) -> Self {
        Decoder {
            schema,
            buffer: BytesMut::with_capacity(config.initial_capacity),
            config,
            cursor: 0,
            total: 0,
            state: DecoderState::Tag,
            tag_stack: Vec::new(),
            events: VecDeque::new(),
            ended: false,
        }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    ///
    /// Absolute offset of the next unread byte.
    ///
    pub fn total(&self) -> u64 {
        self.total
    }

    ///
    /// Number of elements whose header has been read but which have not been closed yet.
    ///
    pub fn depth(&self) -> usize {
        self.tag_stack.len()
    }

    ///
    /// Number of received bytes that have not been consumed yet.
    ///
    pub fn buffered(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    ///
    /// Feeds a chunk of input and processes as much of it as possible.
    ///
    /// # Errors
    ///
    /// [`StateError::WriteAfterEnd`] if [`end`](Decoder::end) was already called.  A [`FormatError`] if the stream is corrupt; events queued before the error stay available and the decoder does not advance past the offending bytes.
    ///
    pub fn write(&mut self, chunk: &[u8]) -> Result<(), DecodeError> {
        if self.ended {
            return Err(StateError::WriteAfterEnd.into());
        }

        self.buffer.extend_from_slice(chunk);
        trace!(len = chunk.len(), buffered = self.buffer.len(), "decoder received chunk");

        loop {
            let progressed = match self.state {
                DecoderState::Tag => self.read_tag()?,
                DecoderState::Size => self.read_size()?,
                DecoderState::Content => self.read_content()?,
            };
            if !progressed {
                trace!(state = ?self.state, total = self.total, "waiting for more data");
                return Ok(());
            }
        }
    }

    ///
    /// Signals the end of input.
    ///
    /// Open unknown-sized masters are closed.  An element left incomplete by a truncated stream is dropped, and known-size masters it belonged to stay open.  Further calls to [`write`](Decoder::write) fail.
    ///
    pub fn end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        if self.state != DecoderState::Tag {
            if let Some(tag) = self.tag_stack.pop() {
                warn!(element = %tag.header.name, start = tag.header.start, "stream ended inside an element");
            }
            self.state = DecoderState::Tag;
        } else if self.buffer.len() > self.cursor {
            warn!(trailing = self.buffer.len() - self.cursor, "stream ended inside an element header");
        }

        while matches!(self.tag_stack.last(), Some(tag) if tag.header.is_unknown_size()) {
            if let Some(tag) = self.tag_stack.pop() {
                self.close(tag);
            }
        }

        if !self.tag_stack.is_empty() {
            warn!(open = self.tag_stack.len(), "stream ended with unfinished elements");
        }
        debug!(total = self.total, "decoder ended");
    }

    ///
    /// Removes and returns the oldest queued event.
    ///
    pub fn read_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.events.drain(..)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn read_tag(&mut self) -> Result<bool, DecodeError> {
        let vint = match read_vint(&self.buffer, self.cursor)? {
            Some(vint) => vint,
            None => return Ok(false),
        };

        let id = vint.as_id()?;
        let id_hex = hex_string(&self.buffer[self.cursor..(self.cursor + vint.length)]);
        let info = self.schema.id_to_info(id);
        if info.element_type.is_none() {
            debug!(id = %id_hex, offset = self.total, "element id not in schema");
        }

        self.close_finished();
        while matches!(self.tag_stack.last(), Some(open) if open.is_ended_by(&info)) {
            if let Some(open) = self.tag_stack.pop() {
                self.close(open);
            }
        }

        let start = self.total;
        self.cursor += vint.length;
        self.total += vint.length as u64;
        self.tag_stack.push(ProcessingTag::new(&info, id_hex, start, vint.length));
        self.state = DecoderState::Size;
        Ok(true)
    }

    fn read_size(&mut self) -> Result<bool, DecodeError> {
        let vint = match read_vint(&self.buffer, self.cursor)? {
            Some(vint) => vint,
            None => return Ok(false),
        };

        let data_start = self.total + vint.length as u64;
        let Some(tag) = self.tag_stack.last_mut() else {
            unreachable!("size state without an open element");
        };
        tag.set_size(vint.as_size(), data_start);

        self.cursor += vint.length;
        self.total = data_start;
        self.state = DecoderState::Content;
        Ok(true)
    }

    fn read_content(&mut self) -> Result<bool, DecodeError> {
        let Some(tag) = self.tag_stack.last() else {
            unreachable!("content state without an open element");
        };

        if tag.is_master() {
            let header = tag.header.clone();
            debug!(element = %header.name, start = header.start, end = ?header.end, "master element started");
            self.events.push_back(Event::Start(header));
            self.state = DecoderState::Tag;
            self.close_finished();
            return Ok(true);
        }

        let size = match tag.header.data_size {
            EBMLSize::Known(size) => size,
            EBMLSize::Unknown => {
                return Err(FormatError::UnknownSizedLeaf {
                    name: tag.header.name.clone(),
                    id_hex: tag.header.id_hex.clone(),
                }.into());
            },
        };

        let max = self.config.max_element_size.unwrap_or(usize::MAX as u64);
        if size > max {
            return Err(FormatError::ElementTooLarge {
                name: tag.header.name.clone(),
                size,
                max,
            }.into());
        }
        let size = size as usize;

        if self.buffer.len() - self.cursor < size {
            return Ok(false);
        }

        let Some(tag) = self.tag_stack.pop() else {
            unreachable!("content state without an open element");
        };

        self.buffer.advance(self.cursor);
        self.cursor = 0;
        let data = self.buffer.split_to(size).freeze();
        self.total += size as u64;
        self.state = DecoderState::Tag;

        let header = tag.into_inner();
        trace!(element = %header.name, start = header.start, len = size, "leaf element read");
        let (value, block) = values::interpret(&header.name, header.element_type, &data);
        self.events.push_back(Event::Tag(DecodedElement { header, data, value, block }));

        self.close_finished();
        Ok(true)
    }

    ///
    /// Closes the outermost element whose bytes have all been read, together with everything still open inside it.  Unknown-sized descendants have no end of their own and are closed by their ancestor's.
    ///
    fn close_finished(&mut self) {
        let total = self.total;
        let Some(index) = self.tag_stack.iter().position(|tag| tag.is_finished_at(total)) else {
            return;
        };
        while self.tag_stack.len() > index {
            if let Some(tag) = self.tag_stack.pop() {
                self.close(tag);
            }
        }
    }

    fn close(&mut self, tag: ProcessingTag) {
        let header = tag.into_inner();
        debug!(element = %header.name, start = header.start, end = ?header.end, "master element ended");
        self.events.push_back(Event::End(header));
    }
}
