use std::collections::BTreeSet;

/// Codes currently checked in the viewer
///
/// Starts empty. The only mutation is [`SelectionState::toggle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    codes: BTreeSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `code`; returns whether it is selected afterwards
    pub fn toggle(&mut self, code: &str) -> bool {
        if self.codes.remove(code) {
            false
        } else {
            self.codes.insert(code.to_string());
            true
        }
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Selected codes in lexicographic order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}
