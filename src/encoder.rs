use std::collections::VecDeque;

use bytes::{Bytes, BytesMut};
use tracing::{debug, trace, warn};

use crate::errors::{EncodeError, FormatError, SchemaError, StateError};
use crate::specs::Schema;
use crate::tags::Event;
use crate::tools::{Vint, UNKNOWN_SIZE};

struct PendingElement {
    id: u32,
    name: String,
    unknown_size: bool,
    body: BytesMut,
}

///
/// Incrementally turns [`Event`]s into EBML bytes.
///
/// Master elements are buffered from their `Start` until their `End`, since the size field precedes the children.  Once the outermost open element is ended its bytes are flushed to the output queue, unless the encoder is [corked](Encoder::cork).  Output is pulled with [`read_chunk`](Encoder::read_chunk) or [`drain_chunks`](Encoder::drain_chunks).
///
/// ```
/// use ebml_stream::{Encoder, Event};
/// use ebml_stream::matroska::Matroska;
///
/// let mut encoder = Encoder::new(Matroska);
/// encoder.write(&Event::start("EBML")).unwrap();
/// encoder.write(&Event::tag("EBMLVersion", vec![0x01])).unwrap();
/// encoder.write(&Event::end("EBML")).unwrap();
///
/// let bytes: Vec<u8> = encoder.drain_chunks().flatten().collect();
/// assert_eq!(vec![0x1a, 0x45, 0xdf, 0xa3, 0x84, 0x42, 0x86, 0x81, 0x01], bytes);
/// ```
///
pub struct Encoder<S: Schema> {
    schema: S,
    open_tags: Vec<PendingElement>,
    working_buffer: BytesMut,
    corked: bool,
    output: VecDeque<Bytes>,
    ended: bool,
}

impl<S: Schema> Encoder<S> {
    pub fn new(schema: S) -> Self {
        Encoder {
            schema,
            open_tags: Vec::new(),
            working_buffer: BytesMut::new(),
            corked: false,
            output: VecDeque::new(),
            ended: false,
        }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    ///
    /// Encodes one event.
    ///
    /// A `Start` whose header has no end offset (see [`Event::start_unknown`]) is written with the unknown size marker.  The name carried by an `End` is only used for diagnostics; it always closes the innermost open element.
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnknownElement`] if the event's name is not in the schema, [`StateError::WriteAfterEnd`] after [`end`](Encoder::end), and a [`FormatError`] if a size cannot be written as a vint.
    ///
    pub fn write(&mut self, event: &Event) -> Result<(), EncodeError> {
        match event {
            Event::Start(header) => self.start_tag(&header.name, header.is_unknown_size()),
            Event::Tag(element) => self.write_tag(&element.header.name, Some(&element.data[..])),
            Event::End(header) => self.end_tag(Some(&header.name)),
        }
    }

    ///
    /// Opens a master element.  Everything written until the matching [`end_tag`](Encoder::end_tag) becomes its content.
    ///
    pub fn start_tag(&mut self, name: &str, unknown_size: bool) -> Result<(), EncodeError> {
        self.check_open()?;
        let id = self.resolve(name)?;

        trace!(element = name, unknown_size, depth = self.open_tags.len(), "master element opened");
        self.open_tags.push(PendingElement {
            id,
            name: name.to_string(),
            unknown_size,
            body: BytesMut::new(),
        });
        Ok(())
    }

    ///
    /// Writes a complete leaf element.  `None` data writes nothing; empty data writes an element of size zero.
    ///
    pub fn write_tag(&mut self, name: &str, data: Option<&[u8]>) -> Result<(), EncodeError> {
        self.check_open()?;
        let id = self.resolve(name)?;

        let data = match data {
            Some(data) => data,
            None => {
                trace!(element = name, "leaf element without data skipped");
                return Ok(());
            },
        };

        let header = element_header(id, Some(data.len()))?;
        let target = self.target();
        target.extend_from_slice(&header);
        target.extend_from_slice(data);

        if self.open_tags.is_empty() {
            self.flush();
        }
        Ok(())
    }

    ///
    /// Closes the innermost open master element and serializes it into its parent, or into the output when it has no parent.
    ///
    /// An end without an open element is ignored.  If `name` is given and does not match the element being closed a warning is logged.
    ///
    pub fn end_tag(&mut self, name: Option<&str>) -> Result<(), EncodeError> {
        self.check_open()?;

        let element = match self.open_tags.pop() {
            Some(element) => element,
            None => {
                warn!(element = name.unwrap_or_default(), "end without a matching start ignored");
                return Ok(());
            },
        };

        if let Some(name) = name {
            if name != element.name {
                warn!(expected = %element.name, found = name, "end name does not match the open element");
            }
        }

        let size = if element.unknown_size { None } else { Some(element.body.len()) };
        let header = element_header(element.id, size)?;
        trace!(element = %element.name, len = element.body.len(), "master element closed");

        let target = self.target();
        target.extend_from_slice(&header);
        target.extend_from_slice(&element.body);

        if self.open_tags.is_empty() {
            self.flush();
        }
        Ok(())
    }

    ///
    /// Holds completed top-level elements back until [`uncork`](Encoder::uncork), so that several can be emitted as a single chunk.
    ///
    pub fn cork(&mut self) {
        self.corked = true;
    }

    pub fn uncork(&mut self) {
        self.corked = false;
        self.flush();
    }

    pub fn is_corked(&self) -> bool {
        self.corked
    }

    ///
    /// Number of master elements currently open.
    ///
    pub fn depth(&self) -> usize {
        self.open_tags.len()
    }

    ///
    /// Number of completed bytes held back and not yet queued as output.
    ///
    pub fn pending(&self) -> usize {
        self.working_buffer.len()
    }

    ///
    /// Finishes encoding.  Bytes held back by [`cork`](Encoder::cork) are released; elements still open are discarded.
    ///
    pub fn end(&mut self) {
        if self.ended {
            return;
        }
        if !self.open_tags.is_empty() {
            warn!(open = self.open_tags.len(), "encoder ended with open elements, discarding them");
            self.open_tags.clear();
        }
        self.corked = false;
        self.flush();
        self.ended = true;
        debug!("encoder ended");
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    ///
    /// Removes and returns the oldest chunk of encoded output.
    ///
    pub fn read_chunk(&mut self) -> Option<Bytes> {
        self.output.pop_front()
    }

    pub fn drain_chunks(&mut self) -> impl Iterator<Item = Bytes> + '_ {
        self.output.drain(..)
    }

    fn check_open(&self) -> Result<(), StateError> {
        if self.ended {
            Err(StateError::WriteAfterEnd)
        } else {
            Ok(())
        }
    }

    fn resolve(&self, name: &str) -> Result<u32, SchemaError> {
        self.schema.name_to_id(name).ok_or_else(|| SchemaError::UnknownElement(name.to_string()))
    }

    fn target(&mut self) -> &mut BytesMut {
        match self.open_tags.last_mut() {
            Some(parent) => &mut parent.body,
            None => &mut self.working_buffer,
        }
    }

    fn flush(&mut self) {
        if self.corked || self.working_buffer.is_empty() {
            return;
        }
        let chunk = self.working_buffer.split().freeze();
        debug!(len = chunk.len(), "encoded bytes flushed");
        self.output.push_back(chunk);
    }
}

///
/// The id followed by the size field.  Ids are written without leading zero bytes; a `None` size writes the unknown size marker.
///
fn element_header(id: u32, size: Option<usize>) -> Result<Vec<u8>, FormatError> {
    let mut header: Vec<u8> = id.to_be_bytes().iter().skip_while(|b| **b == 0u8).copied().collect();
    match size {
        Some(size) => header.extend_from_slice(&(size as u64).as_vint()?),
        None => header.extend_from_slice(&UNKNOWN_SIZE),
    }
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_schema::TestSchema;
    use crate::values::Value;

    fn output(encoder: &mut Encoder<TestSchema>) -> Vec<u8> {
        encoder.drain_chunks().flatten().collect()
    }

    #[test]
    fn writes_leaf() {
        let mut encoder = Encoder::new(TestSchema);
        encoder.write(&Event::tag("EBMLVersion", vec![0x01])).unwrap();
        assert_eq!(vec![0x42, 0x86, 0x81, 0x01], output(&mut encoder));
    }

    #[test]
    fn writes_master_with_child() {
        let mut encoder = Encoder::new(TestSchema);
        encoder.write(&Event::start("EBML")).unwrap();
        encoder.write(&Event::tag("EBMLVersion", vec![0x01])).unwrap();
        assert!(encoder.read_chunk().is_none());
        assert_eq!(1, encoder.depth());

        encoder.write(&Event::end("EBML")).unwrap();
        assert_eq!(vec![0x1a, 0x45, 0xdf, 0xa3, 0x84, 0x42, 0x86, 0x81, 0x01], output(&mut encoder));
    }

    #[test]
    fn writes_nested_masters() {
        let mut encoder = Encoder::new(TestSchema);
        encoder.write(&Event::start("Segment")).unwrap();
        encoder.write(&Event::start("Cluster")).unwrap();
        encoder.write(&Event::tag_value("Timecode", Value::Unsigned(5)).unwrap()).unwrap();
        encoder.write(&Event::end("Cluster")).unwrap();
        encoder.write(&Event::end("Segment")).unwrap();
        assert_eq!(
            vec![0x18, 0x53, 0x80, 0x67, 0x88, 0x1f, 0x43, 0xb6, 0x75, 0x83, 0xe7, 0x81, 0x05],
            output(&mut encoder)
        );
    }

    #[test]
    fn writes_unknown_size_marker() {
        let mut encoder = Encoder::new(TestSchema);
        encoder.write(&Event::start_unknown("Segment")).unwrap();
        encoder.write(&Event::tag("Timecode", vec![0x00])).unwrap();
        encoder.write(&Event::end("Segment")).unwrap();
        assert_eq!(
            vec![0x18, 0x53, 0x80, 0x67, 0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xe7, 0x81, 0x00],
            output(&mut encoder)
        );
    }

    #[test]
    fn empty_and_missing_data() {
        let mut encoder = Encoder::new(TestSchema);
        encoder.write_tag("EBMLVersion", None).unwrap();
        assert!(encoder.read_chunk().is_none());

        encoder.write_tag("EBMLVersion", Some(&[])).unwrap();
        assert_eq!(vec![0x42, 0x86, 0x80], output(&mut encoder));
    }

    #[test]
    fn unknown_name_is_schema_error() {
        let mut encoder = Encoder::new(TestSchema);
        let result = encoder.write(&Event::tag("NotAnElement", vec![0x01]));
        assert!(matches!(result, Err(EncodeError::Schema(SchemaError::UnknownElement(name))) if name == "NotAnElement"));
        assert_eq!(0, encoder.depth());
        assert!(encoder.read_chunk().is_none());
    }

    #[test]
    fn unbalanced_end_is_ignored() {
        let mut encoder = Encoder::new(TestSchema);
        encoder.write(&Event::end("EBML")).unwrap();
        assert!(encoder.read_chunk().is_none());
    }

    #[test]
    fn mismatched_end_closes_innermost() {
        let mut encoder = Encoder::new(TestSchema);
        encoder.write(&Event::start("EBML")).unwrap();
        encoder.write(&Event::end("Segment")).unwrap();
        assert_eq!(vec![0x1a, 0x45, 0xdf, 0xa3, 0x80], output(&mut encoder));
    }

    #[test]
    fn cork_batches_output() {
        let mut encoder = Encoder::new(TestSchema);
        encoder.cork();
        assert!(encoder.is_corked());
        encoder.write(&Event::tag("EBMLVersion", vec![0x01])).unwrap();
        encoder.write(&Event::tag("Timecode", vec![0x02])).unwrap();
        assert!(encoder.read_chunk().is_none());
        assert_eq!(7, encoder.pending());

        encoder.uncork();
        let chunks: Vec<Bytes> = encoder.drain_chunks().collect();
        assert_eq!(vec![Bytes::from_static(&[0x42, 0x86, 0x81, 0x01, 0xe7, 0x81, 0x02])], chunks);
        assert_eq!(0, encoder.pending());
    }

    #[test]
    fn end_releases_corked_bytes() {
        let mut encoder = Encoder::new(TestSchema);
        encoder.cork();
        encoder.write(&Event::tag("Timecode", vec![0x02])).unwrap();
        encoder.end();
        assert_eq!(vec![0xe7, 0x81, 0x02], output(&mut encoder));
    }

    #[test]
    fn write_after_end_fails() {
        let mut encoder = Encoder::new(TestSchema);
        encoder.end();
        let result = encoder.write(&Event::tag("Timecode", vec![0x02]));
        assert!(matches!(result, Err(EncodeError::State(StateError::WriteAfterEnd))));
    }

    #[test]
    fn header_skips_leading_zero_bytes() {
        assert_eq!(vec![0xec, 0x80], element_header(0xec, Some(0)).unwrap());
        assert_eq!(vec![0x42, 0x86, 0x40, 0x7f], element_header(0x4286, Some(127)).unwrap());
    }
}
