use crate::specs::{ElementInfo, ElementType, Schema};

#[derive(Debug, Clone, Copy, Default)]
pub struct TestSchema;

const fn element(id: u32, name: &'static str, element_type: ElementType, level: Option<u8>) -> ElementInfo {
    ElementInfo { id, name, element_type: Some(element_type), level }
}

const ELEMENTS: &[ElementInfo] = &[
    element(0x1a45dfa3, "EBML", ElementType::Master, Some(0)),
    element(0x4286, "EBMLVersion", ElementType::UnsignedInt, Some(1)),
    element(0x4282, "DocType", ElementType::String, Some(1)),
    element(0x18538067, "Segment", ElementType::Master, Some(0)),
    element(0x1549a966, "Info", ElementType::Master, Some(1)),
    element(0x7ba9, "Title", ElementType::Utf8, Some(2)),
    element(0x1f43b675, "Cluster", ElementType::Master, Some(1)),
    element(0xe7, "Timecode", ElementType::UnsignedInt, Some(2)),
    element(0xa3, "SimpleBlock", ElementType::Binary, Some(2)),
    element(0xa0, "BlockGroup", ElementType::Master, Some(2)),
    element(0xa1, "Block", ElementType::Binary, Some(3)),
    element(0xec, "Void", ElementType::Binary, None),
    element(0xbf, "CRC-32", ElementType::Binary, None),
    element(0x1b538667, "SignatureSlot", ElementType::Master, None),
];

impl Schema for TestSchema {
    fn get_element(&self, id: u32) -> Option<ElementInfo> {
        ELEMENTS.iter().find(|el| el.id == id).copied()
    }

    fn name_to_id(&self, name: &str) -> Option<u32> {
        ELEMENTS.iter().find(|el| el.name == name).map(|el| el.id)
    }
}
