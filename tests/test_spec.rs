// A hand-written schema, equivalent to:
//
// ebml_schema! {
//     pub struct TestSpec {
//         Root: Master = 0x81,
//         Root/Int: UnsignedInt = 0x4101,
//         Root/Name: Utf8 = 0x4102,
//         Root/Parent: Master = 0x4103,
//         Root/Parent/Child: UnsignedInt = 0x210301,
//
//         Ebml: Master = 0x1a45dfa3,
//         Segment: Master = 0x18538067,
//         Segment/Cluster: Master = 0x1f43b675,
//         Segment/Cluster/Count: UnsignedInt = 0x4100,
//         Segment/Cluster/SimpleBlock: Binary = 0xa3,
//         Segment/Cluster/BlockGroup: Master = 0xa0,
//         Segment/Cluster/BlockGroup/Block: Binary = 0xa1,
//         Segment/TrackType: UnsignedInt = 0x83,
//         #[global]
//         Void: Binary = 0xec,
//     }
// }

use ebml_stream::specs::{ElementInfo, ElementType, Schema};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestSpec;

const fn info(id: u32, name: &'static str, element_type: ElementType, level: Option<u8>) -> ElementInfo {
    ElementInfo { id, name, element_type: Some(element_type), level }
}

impl TestSpec {
    pub const ELEMENTS: &'static [ElementInfo] = &[
        info(0x81, "Root", ElementType::Master, Some(0)),
        info(0x4101, "Int", ElementType::UnsignedInt, Some(1)),
        info(0x4102, "Name", ElementType::Utf8, Some(1)),
        info(0x4103, "Parent", ElementType::Master, Some(1)),
        info(0x210301, "Child", ElementType::UnsignedInt, Some(2)),
        info(0x1a45dfa3, "Ebml", ElementType::Master, Some(0)),
        info(0x18538067, "Segment", ElementType::Master, Some(0)),
        info(0x1f43b675, "Cluster", ElementType::Master, Some(1)),
        info(0x4100, "Count", ElementType::UnsignedInt, Some(2)),
        info(0xa3, "SimpleBlock", ElementType::Binary, Some(2)),
        info(0xa0, "BlockGroup", ElementType::Master, Some(2)),
        info(0xa1, "Block", ElementType::Binary, Some(3)),
        info(0x83, "TrackType", ElementType::UnsignedInt, Some(1)),
        info(0xec, "Void", ElementType::Binary, None),
    ];
}

impl Schema for TestSpec {
    fn get_element(&self, id: u32) -> Option<ElementInfo> {
        match id {
            0x81 => Some(Self::ELEMENTS[0]),
            0x4101 => Some(Self::ELEMENTS[1]),
            0x4102 => Some(Self::ELEMENTS[2]),
            0x4103 => Some(Self::ELEMENTS[3]),
            0x210301 => Some(Self::ELEMENTS[4]),
            0x1a45dfa3 => Some(Self::ELEMENTS[5]),
            0x18538067 => Some(Self::ELEMENTS[6]),
            0x1f43b675 => Some(Self::ELEMENTS[7]),
            0x4100 => Some(Self::ELEMENTS[8]),
            0xa3 => Some(Self::ELEMENTS[9]),
            0xa0 => Some(Self::ELEMENTS[10]),
            0xa1 => Some(Self::ELEMENTS[11]),
            0x83 => Some(Self::ELEMENTS[12]),
            0xec => Some(Self::ELEMENTS[13]),
            _ => None,
        }
    }

    fn name_to_id(&self, name: &str) -> Option<u32> {
        match name {
            "Root" => Some(0x81),
            "Int" => Some(0x4101),
            "Name" => Some(0x4102),
            "Parent" => Some(0x4103),
            "Child" => Some(0x210301),
            "Ebml" => Some(0x1a45dfa3),
            "Segment" => Some(0x18538067),
            "Cluster" => Some(0x1f43b675),
            "Count" => Some(0x4100),
            "SimpleBlock" => Some(0xa3),
            "BlockGroup" => Some(0xa0),
            "Block" => Some(0xa1),
            "TrackType" => Some(0x83),
            "Void" => Some(0xec),
            _ => None,
        }
    }
}

#[allow(dead_code)]
pub fn outline(events: &[ebml_stream::Event]) -> Vec<String> {
    use ebml_stream::Event;

    events.iter().map(|event| match event {
        Event::Start(header) => format!("+{}", header.name),
        Event::Tag(element) => element.header.name.clone(),
        Event::End(header) => format!("-{}", header.name),
    }).collect()
}
