//! Main TUI application state and logic

use crate::playback::{PlaybackController, Speed};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Explanation,
    State,
    Frames,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Explanation => FocusedPane::State,
            FocusedPane::State => FocusedPane::Frames,
            FocusedPane::Frames => FocusedPane::Explanation,
        }
    }
}

/// The main application state
pub struct App {
    /// Playback over the generated trace
    pub controller: PlaybackController,

    /// Algorithm name shown in the title
    pub algorithm_name: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub state_scroll: usize,
    pub frames_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app; `controller` must already have a trace loaded
    pub fn new(controller: PlaybackController, algorithm_name: String) -> Self {
        App {
            controller,
            algorithm_name,
            focused_pane: FocusedPane::Explanation,
            state_scroll: 0,
            frames_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Pump the auto-play timer when its deadline has passed
            let now = Instant::now();
            if let (Some(id), Some(deadline)) =
                (self.controller.active_timer(), self.controller.deadline())
            {
                if now >= deadline {
                    self.controller.on_tick(id, now);
                    if self.controller.is_playing() {
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Playback complete".to_string();
                    }
                }
            }

            // Poll with a timeout so the timer keeps being pumped; wake no
            // later than the timer deadline
            let timeout = match self.controller.deadline() {
                Some(deadline) => deadline
                    .saturating_duration_since(Instant::now())
                    .min(Duration::from_millis(50)),
                None => Duration::from_millis(50),
            };
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Explanation on top, state | frames below, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[1]);

        let snapshot = self.controller.current_snapshot();

        super::panes::render_explanation_pane(
            frame,
            main_chunks[0],
            &self.algorithm_name,
            snapshot,
            self.focused_pane == FocusedPane::Explanation,
        );

        super::panes::render_state_pane(
            frame,
            columns[0],
            snapshot,
            self.focused_pane == FocusedPane::State,
            &mut self.state_scroll,
        );

        super::panes::render_frames_pane(
            frame,
            columns[1],
            snapshot,
            self.focused_pane == FocusedPane::Frames,
            &mut self.frames_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.controller.current_index().unwrap_or(0),
            self.controller.trace_len(),
            self.controller.is_playing(),
            self.controller.speed(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.controller.pause();
                self.controller.step_backward();
                self.status_message = "Stepped backward".to_string();
            }
            KeyCode::Right => {
                self.controller.pause();
                self.controller.step_forward();
                self.status_message = "Stepped forward".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play (200ms debounce against key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.controller.toggle_play(Instant::now());
                    self.status_message = if self.controller.is_playing() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Char(c @ '1'..='4') => {
                let speed = match c {
                    '1' => Speed::Slow,
                    '2' => Speed::Medium,
                    '3' => Speed::Fast,
                    _ => Speed::VeryFast,
                };
                self.controller.set_speed(speed, Instant::now());
                self.status_message = format!("Speed: {}", speed.label());
            }
            KeyCode::Enter | KeyCode::End => {
                self.controller.pause();
                self.controller.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace | KeyCode::Home => {
                self.controller.pause();
                self.controller.jump_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_sub(1);
                }
                FocusedPane::Frames => {
                    self.frames_scroll = self.frames_scroll.saturating_sub(1);
                }
                FocusedPane::Explanation => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_add(1);
                }
                FocusedPane::Frames => {
                    self.frames_scroll = self.frames_scroll.saturating_add(1);
                }
                FocusedPane::Explanation => {}
            },
            _ => {}
        }
    }
}
