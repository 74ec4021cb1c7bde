use serde::{Deserialize, Serialize};

/// Where to insert a node among its new siblings.
///
/// Siblings are kept bottom to top, so `Top` appends and `Bottom` prepends.
/// `Index(n)` counts from the bottom and is clamped to the number of siblings.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StackPosition {
    #[default]
    Top,
    Bottom,
    Index(usize),
}

impl StackPosition {
    pub(crate) fn slot(self, len: usize) -> usize {
        match self {
            StackPosition::Top => len,
            StackPosition::Bottom => 0,
            StackPosition::Index(i) => i.min(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_should_be_clamped_to_the_sibling_count() {
        assert_eq!(StackPosition::Top.slot(3), 3);
        assert_eq!(StackPosition::Bottom.slot(3), 0);
        assert_eq!(StackPosition::Index(1).slot(3), 1);
        assert_eq!(StackPosition::Index(9).slot(3), 3);
    }
}
