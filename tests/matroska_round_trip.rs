#[cfg(feature = "derive-spec")]
pub mod matroska_round_trip {
    use ebml_stream::matroska::Matroska;
    use ebml_stream::values::Value;
    use ebml_stream::{Decoder, Encoder, Event};

    fn header_and_cluster() -> Vec<Event> {
        vec![
            Event::start("EBML"),
            Event::tag_value("EBMLVersion", Value::Unsigned(1)).unwrap(),
            Event::tag_value("DocType", Value::String(String::from("webm"))).unwrap(),
            Event::end("EBML"),
            Event::start_unknown("Segment"),
            Event::start("Info"),
            Event::tag_value("TimecodeScale", Value::Unsigned(1_000_000)).unwrap(),
            Event::tag_value("Duration", Value::Float(1500.0)).unwrap(),
            Event::tag_value("Title", Value::Utf8(String::from("caf\u{e9}"))).unwrap(),
            Event::end("Info"),
            Event::start_unknown("Cluster"),
            Event::tag_value("Timecode", Value::Unsigned(0)).unwrap(),
            Event::tag("SimpleBlock", vec![0x81, 0x00, 0x00, 0x80, 0xde, 0xad]),
            Event::tag("Void", vec![0x00; 4]),
            Event::end("Cluster"),
            Event::end("Segment"),
        ]
    }

    fn encode(events: &[Event]) -> Vec<u8> {
        let mut encoder = Encoder::new(Matroska);
        for event in events {
            encoder.write(event).expect("Test shouldn't error");
        }
        encoder.end();
        encoder.drain_chunks().flatten().collect()
    }

    fn decode(bytes: &[u8], chunk_size: usize) -> Vec<Event> {
        let mut decoder = Decoder::new(Matroska);
        let mut events = Vec::new();
        for chunk in bytes.chunks(chunk_size) {
            decoder.write(chunk).expect("Test shouldn't error");
            events.extend(decoder.drain_events());
        }
        decoder.end();
        events.extend(decoder.drain_events());
        events
    }

    #[test]
    pub fn header_bytes() {
        let bytes = encode(&header_and_cluster()[..4]);
        assert_eq!(
            vec![0x1a, 0x45, 0xdf, 0xa3, 0x8b, 0x42, 0x86, 0x81, 0x01, 0x42, 0x82, 0x84, b'w', b'e', b'b', b'm'],
            bytes
        );
    }

    #[test]
    pub fn events_survive_encode_and_decode() {
        let written = header_and_cluster();
        let read = decode(&encode(&written), 4096);

        let names = |events: &[Event]| events.iter().map(|e| e.name().to_string()).collect::<Vec<_>>();
        assert_eq!(names(&written[..]), names(&read[..]));

        for (written, read) in written.iter().zip(read.iter()) {
            match (written, read) {
                (Event::Tag(written), Event::Tag(read)) => {
                    assert_eq!(written.data, read.data, "{}", read.header.name);
                    if written.value != Value::None {
                        assert_eq!(written.value, read.value, "{}", read.header.name);
                    }
                },
                (Event::Start(written), Event::Start(read)) => {
                    assert_eq!(written.is_unknown_size(), read.is_unknown_size(), "{}", read.name);
                },
                (Event::End(_), Event::End(_)) => {},
                (written, read) => panic!("{:?} read back as {:?}", written, read),
            }
        }
    }

    #[test]
    pub fn chunk_size_does_not_change_events() {
        let bytes = encode(&header_and_cluster());
        let whole = decode(&bytes, bytes.len());
        for chunk_size in [1, 2, 3, 5, 7, 13] {
            assert_eq!(whole, decode(&bytes, chunk_size), "chunk size {}", chunk_size);
        }
    }

    #[test]
    pub fn decoded_events_encode_to_the_same_bytes() {
        let bytes = encode(&header_and_cluster());
        assert_eq!(bytes, encode(&decode(&bytes, 16)));
    }
}
