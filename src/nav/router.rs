//! Token-guarded navigation
//!
//! Fragment fetches are asynchronous, so navigation is split in two phases:
//! `begin_navigate` issues a ticket with a monotonically increasing token,
//! and `complete` applies the fetched result only if that token is still the
//! latest issued. A fetch superseded by a later navigation lands as `Stale`
//! and changes nothing, which keeps the displayed content consistent with
//! the highlighted navigation control under rapid tab switching.

use log::{error, info};

use crate::pages::FetchError;

use super::{Fragment, NavHistory};

/// Fixed body shown when a fragment cannot be fetched
pub const LOAD_ERROR_BODY: &str = "ERROR\n\nCould not load page.";

/// Handle for an in-flight fragment fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub fragment: Fragment,
}

/// What the content region currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// Nothing fetched yet
    Blank,
    /// A populated fragment body
    Body(String),
    /// The fixed load-error message
    Error,
}

/// Result of applying a fetch completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Content switched to the fetched fragment
    Applied,
    /// Fetch failed; the previous fragment stays current
    Failed,
    /// A newer navigation superseded this fetch; nothing changed
    Stale,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    token: u64,
    fragment: Fragment,
    record_history: bool,
}

/// Client-side page router
#[derive(Debug)]
pub struct Router {
    current: Fragment,
    content: PageContent,
    history: NavHistory,
    next_token: u64,
    pending: Option<Pending>,
}

impl Router {
    pub fn new(initial: Fragment) -> Self {
        Self {
            current: initial,
            content: PageContent::Blank,
            history: NavHistory::new(),
            next_token: 0,
            pending: None,
        }
    }

    /// The current logical fragment. Exactly one navigation control is
    /// active at any time, and this is it — the active mark is derived from
    /// this single field, never tracked separately.
    pub fn active(&self) -> Fragment {
        self.current
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    pub fn history(&self) -> &NavHistory {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a navigation. The returned ticket must be completed with the
    /// fetched (and populated) body. Issuing a new ticket invalidates any
    /// fetch still in flight.
    pub fn begin_navigate(&mut self, fragment: Fragment, record_history: bool) -> FetchTicket {
        self.next_token += 1;
        let token = self.next_token;
        self.pending = Some(Pending {
            token,
            fragment,
            record_history,
        });
        info!("navigating to '{}' (token {})", fragment.id(), token);
        FetchTicket { token, fragment }
    }

    /// Apply a fetch completion.
    pub fn complete(&mut self, token: u64, result: Result<String, FetchError>) -> NavOutcome {
        let Some(pending) = self.pending else {
            return NavOutcome::Stale;
        };
        if pending.token != token {
            info!("dropping stale fetch (token {}, latest {})", token, pending.token);
            return NavOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(body) => {
                self.current = pending.fragment;
                self.content = PageContent::Body(body);
                if pending.record_history {
                    self.history.push(pending.fragment);
                }
                NavOutcome::Applied
            }
            Err(e) => {
                error!("failed to load fragment '{}': {}", pending.fragment.id(), e);
                self.content = PageContent::Error;
                NavOutcome::Failed
            }
        }
    }

    /// Browser back: replay the previous history entry without recording.
    pub fn back(&mut self) -> Option<FetchTicket> {
        let fragment = self.history.back()?;
        Some(self.begin_navigate(fragment, false))
    }

    /// Browser forward: replay the next history entry without recording.
    pub fn forward(&mut self) -> Option<FetchTicket> {
        let fragment = self.history.forward()?;
        Some(self.begin_navigate(fragment, false))
    }

    /// Replay a history event whose state may be absent (e.g. the initial
    /// entry): fall back to the default fragment, never recording.
    pub fn replay(&mut self, fragment: Option<Fragment>) -> FetchTicket {
        self.begin_navigate(fragment.unwrap_or(Fragment::DEFAULT), false)
    }
}
