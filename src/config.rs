use crate::tag_iterator_util::{DEFAULT_BUFFER_LEN, DEFAULT_READ_CHUNK_LEN};

/// Tuning for a [`Decoder`](crate::Decoder) and the readers built on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Capacity reserved for the decoder's working buffer. Default: 64 KiB.
    pub initial_capacity: usize,
    /// Bytes requested from the source per read by [`TagIterator`](crate::TagIterator). Default: 8 KiB.
    pub read_chunk_size: usize,
    /// Leaf payloads declaring more bytes than this are rejected instead of buffered. Default: no limit.
    pub max_element_size: Option<u64>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_BUFFER_LEN,
            read_chunk_size: DEFAULT_READ_CHUNK_LEN,
            max_element_size: None,
        }
    }
}
