mod test_spec;

pub mod corrupt_data_tests {
    use ebml_stream::errors::{DecodeError, FormatError};
    use ebml_stream::specs::EmptySchema;
    use ebml_stream::values::Value;
    use ebml_stream::{Event, TagIterator, TagWriter};
    use std::io::Cursor;

    use super::test_spec::{outline, TestSpec};

    fn get_data_with_invalid_ids() -> Cursor<Vec<u8>> {
        let mut dest = Cursor::new(Vec::new());
        let mut writer = TagWriter::new(&mut dest, TestSpec);

        writer.write(&Event::start("Segment")).expect("Test shouldn't error");
        writer.write(&Event::tag_value("TrackType", Value::Unsigned(0x01)).unwrap()).expect("Test shouldn't error");
        writer.write(&Event::tag("Void", vec![0x00])).expect("Test shouldn't error");
        writer.write(&Event::end("Segment")).expect("Test shouldn't error");
        writer.finish().expect("Test shouldn't error");

        // Rewrite the Void id (0xec) into 0xf2, which the schema doesn't know
        let mut bytes = dest.into_inner();
        let position = bytes.iter().position(|b| *b == 0xec).expect("Void id should be present");
        bytes[position] = 0xf2;
        Cursor::new(bytes)
    }

    #[test]
    pub fn invalid_ids_are_read_as_opaque_tags() {
        let reader = TagIterator::new(get_data_with_invalid_ids(), TestSpec);
        let events: Vec<Event> = reader.map(|t| t.expect("unknown ids should not error")).collect();
        assert_eq!(vec!["+Segment", "TrackType", "unknown", "-Segment"], outline(&events));

        match &events[2] {
            Event::Tag(element) => {
                assert_eq!(0xf2, element.header.id);
                assert_eq!("f2", element.header.id_hex);
                assert_eq!(Value::None, element.value);
                assert_eq!(&[0x00][..], &element.data[..]);
            },
            other => panic!("expected a tag, got {:?}", other),
        }
    }

    #[test]
    pub fn nine_byte_vint_stops_iteration() {
        let mut src = Cursor::new(vec![0x18, 0x53, 0x80, 0x67, 0xff, 0x00, 0x00, 0x00]);
        let mut reader = TagIterator::new(&mut src, TestSpec);
        assert!(matches!(reader.next(), Some(Ok(Event::Start(_)))));
        assert!(matches!(reader.next(), Some(Err(DecodeError::Format(FormatError::UnrepresentableLength { .. })))));
        assert!(reader.next().is_none());
    }

    #[test]
    pub fn unknown_sized_leaf_is_an_error() {
        let mut src = Cursor::new(vec![0x83, 0xff, 0x01]);
        let mut reader = TagIterator::new(&mut src, TestSpec);
        assert!(matches!(reader.next(), Some(Err(DecodeError::Format(FormatError::UnknownSizedLeaf { .. })))));
        assert!(reader.next().is_none());
    }

    #[test]
    pub fn truncated_stream_ends_quietly() {
        // Segment of declared size 10 with a single complete child
        let mut src = Cursor::new(vec![0x18, 0x53, 0x80, 0x67, 0x8a, 0x83, 0x81, 0x01, 0x41, 0x00]);
        let reader = TagIterator::new(&mut src, TestSpec);
        let events: Vec<Event> = reader.map(|t| t.expect("truncation should not error")).collect();
        assert_eq!(vec!["+Segment", "TrackType"], outline(&events));
    }

    #[test]
    pub fn truncated_block_has_no_block_fields() {
        let mut src = Cursor::new(vec![0xa3, 0x82, 0x81, 0x00]);
        let mut reader = TagIterator::new(&mut src, TestSpec);
        match reader.next() {
            Some(Ok(Event::Tag(element))) => {
                assert_eq!("SimpleBlock", element.header.name);
                assert_eq!(None, element.block);
            },
            other => panic!("expected a tag, got {:?}", other),
        }
    }

    #[test]
    pub fn empty_schema_walks_top_level_elements() {
        let mut src = Cursor::new(vec![0x1a, 0x45, 0xdf, 0xa3, 0x84, 0x42, 0x86, 0x81, 0x00, 0xec, 0x80]);
        let reader = TagIterator::new(&mut src, EmptySchema);
        let events: Vec<Event> = reader.map(|t| t.expect("Test shouldn't error")).collect();
        assert_eq!(vec!["unknown", "unknown"], outline(&events));

        match &events[0] {
            Event::Tag(element) => {
                assert_eq!(0x1a45dfa3, element.header.id);
                assert_eq!(&[0x42, 0x86, 0x81, 0x00][..], &element.data[..]);
            },
            other => panic!("expected a tag, got {:?}", other),
        }
    }
}
