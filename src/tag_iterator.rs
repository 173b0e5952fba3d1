use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::config::DecoderConfig;
use crate::decoder::Decoder;
use crate::errors::DecodeError;
use crate::specs::Schema;
use crate::tags::Event;

///
/// Provides an iterator over EBML events read from a source implementing the [`std::io::Read`] trait.
///
/// This is a thin pull-based wrapper around [`Decoder`]: it reads chunks from the source as the decoder runs out of events and signals [`Decoder::end`] once the source is exhausted.  Iteration stops after the first error, which is returned once every event decoded before it has been handed out.
///
/// ## Example
///
/// ```no_run
/// use std::fs::File;
/// use ebml_stream::{Event, TagIterator};
/// use ebml_stream::matroska::Matroska;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::open("my_ebml_file.webm")?;
/// for event in TagIterator::new(file, Matroska) {
///   if let Event::Start(header) = event? {
///     println!("{} at {}", header.name, header.start);
///   }
/// }
/// # Ok(())
/// # }
/// ```
///
pub struct TagIterator<R: Read, S: Schema> {
    source: R,
    decoder: Decoder<S>,
    chunk: Box<[u8]>,
    reached_eof: bool,
    pending_error: Option<DecodeError>,
    failed: bool,
}

impl<R: Read, S: Schema> TagIterator<R, S> {
    pub fn new(source: R, schema: S) -> Self {
        TagIterator::with_config(source, schema, DecoderConfig::default())
    }

    pub fn with_config(source: R, schema: S, config: DecoderConfig) -> Self {
        let chunk = vec![0; config.read_chunk_size.max(1)].into_boxed_slice();
        TagIterator {
            source,
            decoder: Decoder::with_config(schema, config),
            chunk,
            reached_eof: false,
            pending_error: None,
            failed: false,
        }
    }

    ///
    /// Absolute offset of the next byte the decoder will read.
    ///
    pub fn current_offset(&self) -> u64 {
        self.decoder.total()
    }

    pub fn decoder(&self) -> &Decoder<S> {
        &self.decoder
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    fn fill(&mut self) -> Result<(), DecodeError> {
        loop {
            match self.source.read(&mut self.chunk) {
                Ok(0) => {
                    debug!(total = self.decoder.total(), "source exhausted");
                    self.reached_eof = true;
                    self.decoder.end();
                    return Ok(());
                },
                Ok(read) => return self.decoder.write(&self.chunk[..read]),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl<R: Read, S: Schema> Iterator for TagIterator<R, S> {
    type Item = Result<Event, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.decoder.read_event() {
                return Some(Ok(event));
            }
            if let Some(err) = self.pending_error.take() {
                self.failed = true;
                return Some(Err(err));
            }
            if self.reached_eof || self.failed {
                return None;
            }
            if let Err(err) = self.fill() {
                // events decoded before the error are handed out first
                self.pending_error = Some(err);
            }
        }
    }
}
