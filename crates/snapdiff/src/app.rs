//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::debug;

use snapdiff_core::domain::{ColName, SnapshotDiff};
use snapdiff_core::layout::LayoutConfig;

use crate::event::{Event, EventHandler};
use crate::input::{KeyAction, handle_key};
use crate::render::render;
use crate::state::AppState;

/// Main TUI application.
pub struct App {
    state: AppState,
    /// Column owning the in-flight mouse drag, if any.
    drag_col: Option<ColName>,
    should_quit: bool,
}

impl App {
    pub fn new(diff: SnapshotDiff, config: LayoutConfig, expanded: bool) -> Self {
        Self {
            state: AppState::new(diff, config, expanded),
            drag_col: None,
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Create event handler
        let events = EventHandler::new(tick_rate);
        debug!(tables = self.state.diff.table_diffs.len(), "viewer started");

        if let Ok(size) = terminal.size() {
            self.state.terminal_width = size.width;
        }

        // Main loop
        loop {
            terminal.draw(|frame| render(frame, &mut self.state))?;

            match events.next() {
                Ok(Event::Tick) => {}
                Ok(Event::Key(key)) => {
                    // A keystroke mid-drag abandons the gesture.
                    self.cancel_drag();
                    match handle_key(&mut self.state, key) {
                        KeyAction::Quit => self.should_quit = true,
                        KeyAction::None => {}
                    }
                }
                Ok(Event::Mouse(mouse)) => self.handle_mouse(mouse),
                Ok(Event::Resize(width, _)) => {
                    self.state.terminal_width = width;
                    self.cancel_drag();
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Abandon any in-flight gesture before tearing the surface down.
        self.cancel_drag();

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        Ok(())
    }

    /// Column resize gesture: press on a column edge, drag, release.
    /// Every move applies its width immediately so the column tracks the
    /// pointer; release commits the final width (a no-op if nothing moved,
    /// since moves already applied).
    fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(edge) = self.state.edge_at(mouse.column) {
                    let (name, width, cap) = (edge.name.clone(), edge.rendered_width, edge.full_width);
                    self.state
                        .resize
                        .begin(&name, mouse.column as f64, width, cap);
                    self.drag_col = Some(name);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(col) = self.drag_col.clone()
                    && let Some(w) = self.state.resize.motion(&col, mouse.column as f64)
                {
                    self.state.current_state_mut().set_width_override(&col, w);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(col) = self.drag_col.take()
                    && let Some(w) = self.state.resize.release(&col)
                {
                    self.state.current_state_mut().set_width_override(&col, w);
                }
            }
            _ => {}
        }
    }

    fn cancel_drag(&mut self) {
        self.drag_col = None;
        self.state.resize.cancel_all();
    }
}
