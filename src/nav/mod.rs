//! Page router
//!
//! Fragment identifiers, navigation history, and the token-guarded router.

pub mod history;
pub mod router;

pub use history::NavHistory;
pub use router::{FetchTicket, NavOutcome, PageContent, Router, LOAD_ERROR_BODY};

/// The navigable tab fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    Stats,
    Inventory,
    Map,
    Missions,
}

impl Fragment {
    /// Fragment shown on startup and when a history event carries no state
    pub const DEFAULT: Fragment = Fragment::Stats;

    /// Identifier used to key the fragment source
    pub fn id(&self) -> &'static str {
        match self {
            Fragment::Stats => "stats",
            Fragment::Inventory => "inventory",
            Fragment::Map => "map",
            Fragment::Missions => "missions",
        }
    }

    /// Label on the navigation control
    pub fn title(&self) -> &'static str {
        match self {
            Fragment::Stats => "STATS",
            Fragment::Inventory => "INVENTORY",
            Fragment::Map => "MAP",
            Fragment::Missions => "MISSIONS",
        }
    }

    pub fn from_id(id: &str) -> Option<Fragment> {
        Fragment::all().iter().copied().find(|f| f.id() == id)
    }

    /// Navigation controls in display order
    pub fn all() -> &'static [Fragment] {
        &[
            Fragment::Stats,
            Fragment::Inventory,
            Fragment::Map,
            Fragment::Missions,
        ]
    }

    fn position(&self) -> usize {
        Fragment::all().iter().position(|f| f == self).unwrap_or(0)
    }

    /// Previous tab, clamped at the first
    pub fn prev(&self) -> Fragment {
        let pos = self.position();
        Fragment::all()[pos.saturating_sub(1)]
    }

    /// Next tab, clamped at the last
    pub fn next(&self) -> Fragment {
        let all = Fragment::all();
        all[(self.position() + 1).min(all.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for f in Fragment::all() {
            assert_eq!(Fragment::from_id(f.id()), Some(*f));
        }
        assert_eq!(Fragment::from_id("settings"), None);
    }

    #[test]
    fn test_tab_stepping_clamps() {
        assert_eq!(Fragment::Stats.prev(), Fragment::Stats);
        assert_eq!(Fragment::Stats.next(), Fragment::Inventory);
        assert_eq!(Fragment::Missions.next(), Fragment::Missions);
        assert_eq!(Fragment::Missions.prev(), Fragment::Map);
    }
}
