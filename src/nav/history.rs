//! Navigation history
//!
//! Back/forward stack of visited fragments, mirroring browser history
//! semantics: recorded navigations push; replays never do.

use super::Fragment;

#[derive(Debug, Clone, Default)]
pub struct NavHistory {
    entries: Vec<Fragment>,
    /// Index of the current entry, if anything has been recorded
    cursor: Option<usize>,
}

impl NavHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> Option<Fragment> {
        self.cursor.map(|c| self.entries[c])
    }

    /// Record a visited fragment. Any forward entries are discarded, as a
    /// browser would on a fresh navigation.
    pub fn push(&mut self, fragment: Fragment) {
        if let Some(c) = self.cursor {
            self.entries.truncate(c + 1);
        }
        self.entries.push(fragment);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step back, returning the entry to replay.
    pub fn back(&mut self) -> Option<Fragment> {
        let c = self.cursor?;
        if c == 0 {
            return None;
        }
        self.cursor = Some(c - 1);
        Some(self.entries[c - 1])
    }

    /// Step forward, returning the entry to replay.
    pub fn forward(&mut self) -> Option<Fragment> {
        let c = self.cursor?;
        if c + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(c + 1);
        Some(self.entries[c + 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let mut h = NavHistory::new();
        h.push(Fragment::Stats);
        h.push(Fragment::Map);
        assert_eq!(h.current(), Some(Fragment::Map));
        assert_eq!(h.back(), Some(Fragment::Stats));
        assert_eq!(h.back(), None);
    }

    #[test]
    fn test_forward_after_back() {
        let mut h = NavHistory::new();
        h.push(Fragment::Stats);
        h.push(Fragment::Inventory);
        h.back();
        assert_eq!(h.forward(), Some(Fragment::Inventory));
        assert_eq!(h.forward(), None);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut h = NavHistory::new();
        h.push(Fragment::Stats);
        h.push(Fragment::Inventory);
        h.back();
        h.push(Fragment::Missions);
        assert_eq!(h.len(), 2);
        assert_eq!(h.forward(), None);
        assert_eq!(h.back(), Some(Fragment::Stats));
    }

    #[test]
    fn test_empty_history() {
        let mut h = NavHistory::new();
        assert!(h.is_empty());
        assert_eq!(h.back(), None);
        assert_eq!(h.forward(), None);
        assert_eq!(h.current(), None);
    }
}
