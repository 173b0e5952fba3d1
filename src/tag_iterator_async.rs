use futures::{AsyncRead, AsyncReadExt, Stream};
use tracing::debug;

use crate::config::DecoderConfig;
use crate::decoder::Decoder;
use crate::errors::DecodeError;
use crate::specs::Schema;
use crate::tags::Event;

///
/// The [`futures::AsyncRead`] counterpart of [`TagIterator`](crate::TagIterator).
///
pub struct TagIteratorAsync<R: AsyncRead + Unpin, S: Schema> {
    read: R,
    decoder: Decoder<S>,
    buf: Vec<u8>,
    reached_eof: bool,
    pending_error: Option<DecodeError>,
    failed: bool,
}

impl<R: AsyncRead + Unpin, S: Schema> TagIteratorAsync<R, S> {
    pub fn new(read: R, schema: S) -> Self {
        Self::with_config(read, schema, DecoderConfig::default())
    }

    pub fn with_config(read: R, schema: S, config: DecoderConfig) -> Self {
        Self {
            read,
            buf: vec![0; config.read_chunk_size.max(1)],
            decoder: Decoder::with_config(schema, config),
            reached_eof: false,
            pending_error: None,
            failed: false,
        }
    }

    async fn fill(&mut self) -> Result<(), DecodeError> {
        let read = self.read.read(&mut self.buf).await?;
        if read == 0 {
            debug!(total = self.decoder.total(), "source exhausted");
            self.reached_eof = true;
            self.decoder.end();
            Ok(())
        } else {
            self.decoder.write(&self.buf[..read])
        }
    }

    pub async fn next(&mut self) -> Option<Result<Event, DecodeError>> {
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
            if let Err(err) = self.fill().await {
                // events decoded before the error are handed out first
                self.pending_error = Some(err);
            }
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<Event, DecodeError>> {
        futures::stream::unfold(self, |mut read| async move {
            let next = read.next().await;
            next.map(move |it| (it, read))
        })
    }
}
