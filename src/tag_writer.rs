use std::io::Write;

use crate::encoder::Encoder;
use crate::errors::EncodeError;
use crate::specs::Schema;
use crate::tags::Event;

///
/// Provides a tool to write EBML files based on [`Event`]s.  Writes to a destination that implements [`std::io::Write`].
///
/// The schema is used to resolve element names to ids.  Encoded bytes are handed to the destination as soon as the [`Encoder`] releases them, i.e. whenever a top-level element is completed (and the writer is not corked).
///
/// ## Example
///
/// ```no_run
/// use std::fs::File;
/// use ebml_stream::{Event, TagWriter};
/// use ebml_stream::matroska::Matroska;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut file = File::create("my_ebml_file.ebml")?;
/// let mut my_writer = TagWriter::new(&mut file, Matroska);
/// my_writer.write(&Event::start("EBML"))?;
/// my_writer.write(&Event::tag("EBMLVersion", vec![0x01]))?;
/// my_writer.write(&Event::end("EBML"))?;
/// my_writer.finish()?;
/// # Ok(())
/// # }
/// ```
///
pub struct TagWriter<W: Write, S: Schema> {
    dest: W,
    encoder: Encoder<S>,
}

impl<W: Write, S: Schema> TagWriter<W, S> {
    pub fn new(dest: W, schema: S) -> Self {
        TagWriter {
            dest,
            encoder: Encoder::new(schema),
        }
    }

    ///
    /// Write an event to this instance's destination.
    ///
    /// # Errors
    ///
    /// Encoder errors are passed through unchanged; failures of the destination are returned as [`EncodeError::Write`].
    ///
    pub fn write(&mut self, event: &Event) -> Result<(), EncodeError> {
        self.encoder.write(event)?;
        self.write_out()
    }

    pub fn cork(&mut self) {
        self.encoder.cork();
    }

    pub fn uncork(&mut self) -> Result<(), EncodeError> {
        self.encoder.uncork();
        self.write_out()
    }

    ///
    /// Ends the encoder, writes out everything it released and returns the destination.
    ///
    pub fn finish(mut self) -> Result<W, EncodeError> {
        self.encoder.end();
        self.write_out()?;
        self.dest.flush()?;
        Ok(self.dest)
    }

    fn write_out(&mut self) -> Result<(), EncodeError> {
        while let Some(chunk) = self.encoder.read_chunk() {
            self.dest.write_all(&chunk)?;
        }
        Ok(())
    }
}
