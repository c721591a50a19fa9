//! Terminal browser using ratatui
//!
//! Layout, top to bottom:
//! - Header (title, language, filter, material totals)
//! - Ship list grouped by display group
//! - Footer (key help, the last status message and the disclaimer)
//!
//! Key handling lives in [`BrowserModel`] so it can be driven without a terminal.

mod components;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::path::PathBuf;

use crate::export::export_snapshot;
use crate::state::{AppState, Event};
use crate::store::{Flag, Storage};

use components::{FooterPanel, HeaderPanel, ShipListPanel};

/// Browser state without the terminal: session state plus cursor and status line
pub struct BrowserModel<S: Storage> {
    pub state: AppState<S>,
    selected: usize,
    status: String,
    export_path: PathBuf,
    should_quit: bool,
}

impl<S: Storage> BrowserModel<S> {
    pub fn new(state: AppState<S>, export_path: PathBuf) -> Self {
        let status = format!("{} ships loaded", state.catalog().len());
        Self {
            state,
            selected: 0,
            status,
            export_path,
            should_quit: false,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn visible_count(&self) -> usize {
        self.state.grouped().iter().map(|g| g.cards.len()).sum()
    }

    /// Index of the highlighted card, if any card is visible
    pub fn selected(&self) -> Option<usize> {
        let count = self.visible_count();
        if count == 0 {
            None
        } else {
            Some(self.selected.min(count - 1))
        }
    }

    /// Id of the highlighted ship
    pub fn selected_id(&self) -> Option<String> {
        let index = self.selected()?;
        self.state
            .grouped()
            .iter()
            .flat_map(|g| g.cards.iter())
            .nth(index)
            .map(|card| card.ship.id.clone())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected().map_or(0, |i| i.saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.visible_count();
                self.selected = self.selected().map_or(0, |i| (i + 1).min(count - 1));
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.visible_count().saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(Flag::RemodelDone),
            KeyCode::Char('o') => self.toggle_selected(Flag::NotOwned),
            KeyCode::Char('l') => self.toggle_selected(Flag::LevelingDone),
            KeyCode::Char('f') => {
                let id = self.selected_id();
                self.state.apply(Event::ToggleIncompleteFilter);
                self.reselect(id.as_deref());
            }
            KeyCode::Char('g') => {
                let next = self.state.language.next();
                self.state.apply(Event::SetLanguage(next));
                self.status = next.label().to_string();
            }
            KeyCode::Char('e') => self.export(),
            _ => {}
        }
    }

    fn toggle_selected(&mut self, flag: Flag) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.state.apply(Event::Toggle {
            id: id.clone(),
            flag,
        });
        let value = self.state.entry(&id).get(flag);
        self.status = format!("{}: {} = {}", id, flag.key(), value);
    }

    /// Keep the cursor on the same ship after the visible list changes
    fn reselect(&mut self, id: Option<&str>) {
        let Some(id) = id else {
            return;
        };
        if let Some(index) = self
            .state
            .grouped()
            .iter()
            .flat_map(|g| g.cards.iter())
            .position(|card| card.ship.id == id)
        {
            self.selected = index;
        }
    }

    fn export(&mut self) {
        self.status = match export_snapshot(&self.state, &self.export_path) {
            Ok(count) => format!(
                "{}: {} ships -> {}",
                self.state.text().export_image,
                count,
                self.export_path.display()
            ),
            Err(e) => format!("Export failed: {:#}", e),
        };
    }
}

/// Full-screen browser bound to the terminal
pub struct Browser<S: Storage> {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    model: BrowserModel<S>,
}

impl<S: Storage> Browser<S> {
    /// Enter raw mode and the alternate screen
    pub fn new(model: BrowserModel<S>) -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, model })
    }

    /// Run until the user quits
    pub fn run(mut self) -> Result<()> {
        while !self.model.should_quit() {
            self.draw()?;

            if let CrosstermEvent::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind == KeyEventKind::Press {
                    self.model.handle_key(code);
                }
            }
        }

        self.restore()
    }

    fn draw(&mut self) -> Result<()> {
        let model = &self.model;
        let state = &model.state;
        let groups = state.grouped();
        let text = state.text();

        let header = HeaderPanel {
            text,
            language: state.language,
            totals: state.totals(),
            show_incomplete_only: state.show_incomplete_only,
        };
        let list = ShipListPanel {
            groups: &groups,
            text,
            language: state.language,
            selected: model.selected(),
        };
        let footer = FooterPanel {
            text,
            status: model.status(),
        };

        self.terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(4), // Header
                    Constraint::Min(5),    // Ship list
                    Constraint::Length(6), // Footer
                ])
                .split(frame.area());

            header.render(frame, chunks[0]);
            list.render(frame, chunks[1]);
            footer.render(frame, chunks[2]);
        })?;

        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl<S: Storage> Drop for Browser<S> {
    fn drop(&mut self) {
        // Best effort cleanup
        terminal::disable_raw_mode().ok();
        self.terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .ok();
        self.terminal.show_cursor().ok();
    }
}
