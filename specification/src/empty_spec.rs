use super::{ElementInfo, Schema};

///
/// A schema that contains no elements.
///
/// Every id resolves to the "unknown" sentinel, so a decoder using this schema walks the stream structurally and reports every element as opaque data.  Encoding with it always fails because no name can be resolved.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptySchema;

impl Schema for EmptySchema {
    fn get_element(&self, _id: u32) -> Option<ElementInfo> {
        None
    }

    fn name_to_id(&self, _name: &str) -> Option<u32> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::EmptySchema;
    use crate::Schema;

    #[test]
    fn resolves_everything_to_unknown() {
        let info = EmptySchema.id_to_info(0x1a45dfa3);
        assert_eq!(0x1a45dfa3, info.id);
        assert_eq!("unknown", info.name);
        assert_eq!(None, info.element_type);
        assert_eq!(None, EmptySchema.name_to_id("EBML"));
    }
}
