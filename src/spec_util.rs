///
/// Returns whether an element at `next_level` ends an open unknown-sized element at `open_level`.
///
/// An unknown-sized element runs until an element arrives that cannot be its descendant: a sibling, a parent, or a root element.  With schema levels that is any element whose level is not deeper than the open element's.  Elements without a level (global elements, unknown ids) can appear anywhere and never end an element.
///
/// There are a couple of other cases where an Unknown sized tag can end, but they rely on knowing the parent's size.  More details can be found in the [EBML RFC](https://www.rfc-editor.org/rfc/rfc8794.html#name-unknown-data-size).
///
pub fn is_ended_by(open_level: Option<u8>, next_level: Option<u8>) -> bool {
    match (open_level, next_level) {
        (Some(open), Some(next)) => next <= open,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn siblings_and_parents_end() {
        // Cluster (1) is ended by another Cluster and by a Segment
        assert!(is_ended_by(Some(1), Some(1)));
        assert!(is_ended_by(Some(1), Some(0)));
    }

    #[test]
    fn children_do_not_end() {
        assert!(!is_ended_by(Some(1), Some(2)));
    }

    #[test]
    fn levelless_elements_do_not_end() {
        assert!(!is_ended_by(Some(1), None));
        assert!(!is_ended_by(None, Some(0)));
    }
}
