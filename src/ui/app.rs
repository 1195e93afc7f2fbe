//! Console application shell
//!
//! Owns the router, the lazily loaded catalog, the cosmetic timers, and all
//! input handling. Fragment and catalog fetches run on background threads
//! and deliver their results over a channel drained each frame; the router's
//! token guard decides whether a late fragment result still applies.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{error, info};
use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::data::{self, loader, OperatorProfile};
use crate::items::Catalog;
use crate::nav::{FetchTicket, Fragment, NavOutcome, PageContent, Router, LOAD_ERROR_BODY};
use crate::pages::{populate, FetchError, FragmentSource, FsFragmentSource};
use crate::ui::cooldown::Cooldown;
use crate::ui::widgets::InventoryWidget;

/// How long equip toggles are suppressed after an activation
const TOGGLE_COOLDOWN: Duration = Duration::from_millis(50);
/// Clock readout refresh interval
const CLOCK_TICK: Duration = Duration::from_secs(1);
/// Interval between flicker rolls on the status readouts
const FLICKER_INTERVAL: Duration = Duration::from_secs(5);
/// How long a flicker dims the readouts
const FLICKER_DURATION: Duration = Duration::from_millis(100);

/// Lifecycle of the lazily loaded item catalog
#[derive(Debug)]
pub enum CatalogSlot {
    /// Not requested yet; the first inventory view triggers the load
    Empty,
    /// Fetch in flight
    Pending,
    /// Loaded; owned for the rest of the session
    Ready(Catalog),
    /// Load failed; the inventory stays empty and is never retried
    Failed,
}

/// Results delivered back to the event loop by fetch threads
enum FetchEvent {
    Fragment {
        token: u64,
        result: Result<String, FetchError>,
    },
    Catalog(Result<Catalog, loader::LoadError>),
}

pub struct App {
    router: Router,
    catalog: CatalogSlot,
    profile: OperatorProfile,
    source: FsFragmentSource,
    catalog_path: PathBuf,
    events_tx: Sender<FetchEvent>,
    events_rx: Receiver<FetchEvent>,
    inventory_cursor: usize,
    toggle_cooldown: Cooldown,
    clock: String,
    clock_tick: Instant,
    flicker_roll: Instant,
    flicker_until: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        Self::with_paths("assets/pages", data::DEFAULT_CATALOG_PATH)
    }

    pub fn with_paths(pages_base: impl Into<PathBuf>, catalog_path: impl Into<PathBuf>) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let now = Instant::now();
        let mut app = Self {
            router: Router::new(Fragment::DEFAULT),
            catalog: CatalogSlot::Empty,
            profile: OperatorProfile::default(),
            source: FsFragmentSource::new(pages_base.into()),
            catalog_path: catalog_path.into(),
            events_tx,
            events_rx,
            inventory_cursor: 0,
            toggle_cooldown: Cooldown::new(TOGGLE_COOLDOWN),
            clock: Local::now().format("%H:%M:%S").to_string(),
            clock_tick: now,
            flicker_roll: now,
            flicker_until: None,
        };
        // Initial load of the default fragment, recorded like any user
        // navigation.
        app.navigate(Fragment::DEFAULT, true);
        app
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn catalog(&self) -> &CatalogSlot {
        &self.catalog
    }

    /// Start a navigation and dispatch its fetch.
    pub fn navigate(&mut self, fragment: Fragment, record_history: bool) {
        let ticket = self.router.begin_navigate(fragment, record_history);
        self.spawn_fragment_fetch(ticket);
    }

    fn spawn_fragment_fetch(&self, ticket: FetchTicket) {
        let source = self.source.clone();
        let tx = self.events_tx.clone();
        thread::spawn(move || {
            let result = source.fetch(ticket.fragment);
            // Receiver gone means the app is shutting down
            let _ = tx.send(FetchEvent::Fragment {
                token: ticket.token,
                result,
            });
        });
    }

    fn spawn_catalog_fetch(&mut self) {
        self.catalog = CatalogSlot::Pending;
        let path = self.catalog_path.clone();
        let tx = self.events_tx.clone();
        info!("loading item catalog from {}", path.display());
        thread::spawn(move || {
            let result = loader::load_catalog(&path);
            let _ = tx.send(FetchEvent::Catalog(result));
        });
    }

    /// Handle keyboard input; returns true when the app should quit.
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('q')
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Ok(true);
        }

        match key.code {
            KeyCode::Left => {
                let prev = self.router.active().prev();
                if prev != self.router.active() {
                    self.navigate(prev, true);
                }
            }
            KeyCode::Right => {
                let next = self.router.active().next();
                if next != self.router.active() {
                    self.navigate(next, true);
                }
            }
            KeyCode::Char('[') | KeyCode::Backspace => {
                if let Some(ticket) = self.router.back() {
                    self.spawn_fragment_fetch(ticket);
                }
            }
            KeyCode::Char(']') => {
                if let Some(ticket) = self.router.forward() {
                    self.spawn_fragment_fetch(ticket);
                }
            }
            KeyCode::Up => {
                self.inventory_cursor = self.inventory_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                let count = self.visible_count();
                if self.inventory_cursor + 1 < count {
                    self.inventory_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.router.active() == Fragment::Inventory {
                    self.toggle_selected();
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn visible_count(&self) -> usize {
        match &self.catalog {
            CatalogSlot::Ready(catalog) => catalog.visible_items().count(),
            _ => 0,
        }
    }

    /// Toggle the equip state of the highlighted entry. Activations inside
    /// the cooldown window are dropped entirely.
    fn toggle_selected(&mut self) {
        if !self.toggle_cooldown.try_fire(Instant::now()) {
            return;
        }
        let CatalogSlot::Ready(catalog) = &mut self.catalog else {
            return;
        };
        let Some(id) = catalog
            .visible_items()
            .nth(self.inventory_cursor)
            .map(|item| item.id.clone())
        else {
            return;
        };
        let outcome = catalog.toggle_equip(&id);
        info!("toggle '{}': {:?}", id, outcome);
        // No UI bookkeeping here: the next render re-derives every entry
        // from the catalog.
    }

    /// Drain fetch results and advance the cosmetic timers. Called once per
    /// frame.
    pub fn update(&mut self) {
        self.poll_events();

        let now = Instant::now();
        if now.duration_since(self.clock_tick) >= CLOCK_TICK {
            self.clock = Local::now().format("%H:%M:%S").to_string();
            self.clock_tick = now;
        }

        if now.duration_since(self.flicker_roll) >= FLICKER_INTERVAL {
            self.flicker_roll = now;
            if rand::thread_rng().gen::<f64>() > 0.8 {
                self.flicker_until = Some(now + FLICKER_DURATION);
            }
        }
        if let Some(until) = self.flicker_until {
            if now >= until {
                self.flicker_until = None;
            }
        }
    }

    /// Drain completed fetches into the router and the catalog slot.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                FetchEvent::Fragment { token, result } => {
                    let bindings = self.profile.bindings();
                    let populated = result.map(|body| populate(&body, &bindings));
                    let outcome = self.router.complete(token, populated);
                    if outcome == NavOutcome::Applied {
                        self.after_navigation();
                    }
                }
                FetchEvent::Catalog(Ok(catalog)) => {
                    info!("catalog loaded: {} items", catalog.len());
                    self.catalog = CatalogSlot::Ready(catalog);
                }
                FetchEvent::Catalog(Err(e)) => {
                    error!("error loading items: {}", e);
                    self.catalog = CatalogSlot::Failed;
                }
            }
        }
    }

    fn after_navigation(&mut self) {
        // First time the inventory view is shown, request the catalog. It is
        // kept across tab switches and never re-fetched.
        if self.router.active() == Fragment::Inventory {
            if matches!(self.catalog, CatalogSlot::Empty) {
                self.spawn_catalog_fetch();
            }
            let count = self.visible_count();
            if self.inventory_cursor >= count {
                self.inventory_cursor = count.saturating_sub(1);
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_tabs(frame, chunks[1]);
        self.render_content(frame, chunks[2]);
        self.render_footer(frame, chunks[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(47, 130, 170)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title = Paragraph::new(Line::from("SUITDECK // OPERATOR CONSOLE"))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(title, inner);

        // Flicker dims the status readouts for a moment
        let mut readout_style = Style::default().fg(Color::Rgb(47, 196, 255));
        if self.flicker_until.is_some() {
            readout_style = readout_style.add_modifier(Modifier::DIM);
        }
        let readout = format!(
            "SYS {}  PWR {}  {}  {}",
            self.profile.sys_status, self.profile.power_level, self.profile.unit_id, self.clock
        );
        let readout = Paragraph::new(Line::from(readout))
            .style(readout_style)
            .right_aligned();
        frame.render_widget(readout, inner);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles = Fragment::all().iter().map(|f| f.title());
        let selected = Fragment::all()
            .iter()
            .position(|f| *f == self.router.active())
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("│");
        frame.render_widget(tabs, area);
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        match self.router.content() {
            PageContent::Blank => {
                let hint = if self.router.is_loading() {
                    "ACCESSING..."
                } else {
                    ""
                };
                frame.render_widget(
                    Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
                    area,
                );
            }
            PageContent::Error => {
                frame.render_widget(
                    Paragraph::new(LOAD_ERROR_BODY)
                        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                    area,
                );
            }
            PageContent::Body(body) => {
                if self.router.active() == Fragment::Inventory {
                    let header_height = (body.lines().count() as u16 + 1).min(area.height);
                    let chunks = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Length(header_height), Constraint::Min(3)])
                        .split(area);
                    frame.render_widget(Paragraph::new(body.as_str()), chunks[0]);
                    self.render_manifest(frame, chunks[1]);
                } else {
                    frame.render_widget(Paragraph::new(body.as_str()), area);
                }
            }
        }
    }

    fn render_manifest(&self, frame: &mut Frame, area: Rect) {
        match &self.catalog {
            CatalogSlot::Ready(catalog) => {
                frame.render_widget(
                    InventoryWidget::new(catalog).cursor(self.inventory_cursor),
                    area,
                );
            }
            CatalogSlot::Pending | CatalogSlot::Empty => {
                frame.render_widget(
                    Paragraph::new("ACCESSING STORAGE MANIFEST...")
                        .style(Style::default().fg(Color::DarkGray)),
                    area,
                );
            }
            CatalogSlot::Failed => {
                frame.render_widget(
                    Paragraph::new("MANIFEST OFFLINE")
                        .style(Style::default().fg(Color::Red)),
                    area,
                );
            }
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let help = "←/→ tabs  [ back  ] forward  ↑/↓ select  ⏎ equip  q quit";
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Poll the app until the predicate holds or the attempts run out.
    fn settle(app: &mut App, mut pred: impl FnMut(&App) -> bool) {
        for _ in 0..400 {
            app.poll_events();
            if pred(app) {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("app never settled");
    }

    fn fixture() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("stats.page"), "VITALS {{health}}%").unwrap();
        fs::write(pages.join("inventory.page"), "STORAGE").unwrap();
        fs::write(pages.join("missions.page"), "{{mission1_name}}").unwrap();

        let items = dir.path().join("items.json");
        fs::write(
            &items,
            r#"{"items": [
                {"id": "varia", "name": "Varia Shell", "category": "suit", "equipped": true},
                {"id": "gravity", "name": "Gravity Shell", "category": "suit"}
            ]}"#,
        )
        .unwrap();

        let app = App::with_paths(pages, items);
        (dir, app)
    }

    #[test]
    fn test_initial_fragment_loads_and_populates() {
        let (_dir, mut app) = fixture();
        settle(&mut app, |a| {
            matches!(a.router().content(), PageContent::Body(_))
        });
        assert_eq!(app.router().content(), &PageContent::Body("VITALS 85%".to_string()));
        assert_eq!(app.router().history().len(), 1);
    }

    #[test]
    fn test_catalog_loads_on_first_inventory_view() {
        let (_dir, mut app) = fixture();
        settle(&mut app, |a| {
            matches!(a.router().content(), PageContent::Body(_))
        });
        assert!(matches!(app.catalog(), CatalogSlot::Empty));

        app.navigate(Fragment::Inventory, true);
        settle(&mut app, |a| matches!(a.catalog(), CatalogSlot::Ready(_)));

        let CatalogSlot::Ready(catalog) = app.catalog() else {
            unreachable!()
        };
        assert_eq!(catalog.len(), 2);
        assert_eq!(app.router().history().len(), 2);

        // Switching away and back never re-fetches
        app.navigate(Fragment::Stats, true);
        settle(&mut app, |a| a.router().active() == Fragment::Stats);
        app.navigate(Fragment::Inventory, true);
        settle(&mut app, |a| a.router().active() == Fragment::Inventory);
        assert!(matches!(app.catalog(), CatalogSlot::Ready(_)));
    }

    #[test]
    fn test_missing_catalog_surfaces_as_failed() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("stats.page"), "x").unwrap();
        fs::write(pages.join("inventory.page"), "y").unwrap();

        let mut app = App::with_paths(&pages, dir.path().join("absent.json"));
        app.navigate(Fragment::Inventory, true);
        settle(&mut app, |a| matches!(a.catalog(), CatalogSlot::Failed));
        // The app stays interactive on the inventory view
        assert_eq!(app.router().active(), Fragment::Inventory);
    }

    #[test]
    fn test_missing_fragment_keeps_previous_view() {
        let (_dir, mut app) = fixture();
        settle(&mut app, |a| {
            matches!(a.router().content(), PageContent::Body(_))
        });

        // map.page does not exist in the fixture
        app.navigate(Fragment::Map, true);
        settle(&mut app, |a| a.router().content() == &PageContent::Error);
        assert_eq!(app.router().active(), Fragment::Stats);
        assert_eq!(app.router().history().len(), 1);
    }
}
