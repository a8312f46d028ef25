//! Main TUI application state and logic

use crate::config::LabConfig;
use crate::engine::{AutoRun, Simulation, StateView, StepError, StepEvent, Tween};
use crate::lab::{open_lab, LabKind, LabRequest};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    State,
    Trace,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::State => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::State,
        }
    }
}

/// The main application state
pub struct App {
    sim: Box<dyn Simulation>,
    kind: LabKind,
    request: LabRequest,
    config: LabConfig,

    pub focused_pane: FocusedPane,
    pub trace_scroll: usize,

    pub should_quit: bool,
    pub status_message: String,
    pub status_is_error: bool,

    /// Auto-run handle; idle while paused
    auto_run: AutoRun,
    /// Tween of the motion currently in flight
    tween: Option<Tween>,

    /// Text being typed in command input mode
    command_input: Option<String>,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app around an opened lab
    ///
    /// The simulation should be animated (see [`open_lab`]); the request is
    /// kept so that reset can rebuild the lab.
    pub fn new(
        sim: Box<dyn Simulation>,
        kind: LabKind,
        request: LabRequest,
        config: LabConfig,
    ) -> Self {
        let status_message = match kind.command_help() {
            Some(help) => format!("Press i to enter a command ({})", help),
            None => String::from("Ready!"),
        };
        App {
            sim,
            kind,
            request,
            auto_run: AutoRun::idle(config.run.interval()),
            config,
            focused_pane: FocusedPane::State,
            trace_scroll: 0,
            should_quit: false,
            status_message,
            status_is_error: false,
            tween: None,
            command_input: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let now = Instant::now();
            self.sync_tween(now);

            if let Some(result) = self.auto_run.tick(self.sim.as_mut(), now) {
                self.report(result);
                if !self.auto_run.is_active() && self.sim.is_terminal() {
                    self.status_message.push_str(" (run complete)");
                }
            }

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Short poll keeps tweens smooth
            if event::poll(Duration::from_millis(30))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Start a tween for a new motion, settle a finished one
    fn sync_tween(&mut self, now: Instant) {
        let in_flight = self.sim.in_flight().cloned();
        let done = self.tween.as_ref().map(|t| t.is_done(now));
        match (in_flight, done) {
            (Some(motion), None) => {
                self.tween = Some(Tween::new(motion, now, self.config.run.animation()));
            }
            (Some(_), Some(true)) => {
                self.sim.settle();
                self.tween = None;
            }
            (None, Some(_)) => self.tween = None,
            _ => {}
        }
    }

    /// Skip the rest of the current animation
    fn finish_motion(&mut self) {
        self.sim.settle();
        self.tween = None;
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        let view: StateView = self.sim.view();
        let now = Instant::now();
        super::panes::render_state_pane(
            frame,
            columns[0],
            super::panes::StateRenderData {
                view: &view,
                motion: self.tween.as_ref().map(|t| &t.motion),
                progress: self.tween.as_ref().map_or(1.0, |t| t.progress(now)),
            },
            self.focused_pane == FocusedPane::State,
        );

        let lines = self.sim.log_lines();
        super::panes::render_trace_pane(
            frame,
            columns[1],
            &lines,
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                steps_taken: self.sim.steps_taken(),
                is_error: self.status_is_error,
                is_playing: self.auto_run.is_active(),
                is_terminal: self.sim.is_terminal(),
                is_interactive: self.sim.is_interactive(),
                command_input: self.command_input.as_deref(),
            },
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.command_input.is_some() {
            self.handle_command_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.auto_run.cancel();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    self.finish_motion();
                    match self.sim.step() {
                        Ok(_) => stepped += 1,
                        Err(_) => break,
                    }
                }
                self.set_status(format!("Stepped forward {} step(s)", stepped), false);
            }
            KeyCode::Char('i') | KeyCode::Char(':') if self.sim.is_interactive() => {
                self.auto_run.cancel();
                self.command_input = Some(String::new());
            }
            KeyCode::Char('e') => self.export_log(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            // Single steps wait for the motion in flight
            KeyCode::Left => {
                self.auto_run.cancel();
                let result = self.sim.undo();
                self.report(result);
            }
            KeyCode::Right => {
                self.auto_run.cancel();
                let result = self.sim.step();
                self.report(result);
            }
            KeyCode::Up if self.focused_pane == FocusedPane::Trace => {
                self.trace_scroll = self.trace_scroll.saturating_sub(1);
            }
            KeyCode::Down if self.focused_pane == FocusedPane::Trace => {
                self.trace_scroll = self.trace_scroll.saturating_add(1);
            }
            KeyCode::Char(' ') => {
                // Toggle auto-run (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => self.run_to_end(),
            KeyCode::Backspace => self.reset(),
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        let Some(input) = self.command_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.command_input = None;
                self.set_status("Command cancelled".to_string(), false);
            }
            KeyCode::Enter => {
                let text = std::mem::take(input);
                self.command_input = None;
                if text.trim().is_empty() {
                    return;
                }
                let result = self.sim.command(&text);
                if matches!(&result, Err(e) if e.is_transient()) {
                    // Keep the typed command for a retry
                    self.command_input = Some(text);
                }
                self.report(result);
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => input.push(c),
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.auto_run.is_active() {
            self.auto_run.cancel();
            self.set_status("Paused".to_string(), false);
        } else if self.sim.is_interactive() {
            self.set_status(
                format!("{} is driven by commands; press i", self.sim.name()),
                true,
            );
        } else if self.sim.is_terminal() {
            self.set_status("Already finished; press ⌫ to reset".to_string(), true);
        } else {
            self.auto_run.resume();
            self.set_status("Playing...".to_string(), false);
        }
    }

    fn run_to_end(&mut self) {
        self.auto_run.cancel();
        if self.sim.is_interactive() {
            self.set_status(
                format!("{} is driven by commands; press i", self.sim.name()),
                true,
            );
            return;
        }
        let mut stepped = 0;
        let mut failure = None;
        while !self.sim.is_terminal() {
            self.finish_motion();
            if let Err(e) = self.sim.step() {
                failure = Some(e);
                break;
            }
            stepped += 1;
        }
        self.finish_motion();
        match failure {
            Some(e) => self.set_status(format!("Stopped: {}", e), true),
            None => self.set_status(format!("Finished after {} more step(s)", stepped), false),
        }
    }

    fn reset(&mut self) {
        self.auto_run.cancel();
        match open_lab(self.kind, &self.config, &self.request, true) {
            Ok(sim) => {
                self.sim = sim;
                self.tween = None;
                self.trace_scroll = 0;
                self.set_status("Reset".to_string(), false);
            }
            Err(e) => {
                warn!(error = %e, "reset failed");
                self.set_status(format!("Reset failed: {}", e), true);
            }
        }
    }

    fn export_log(&mut self) {
        let path = PathBuf::from(format!("dsa-lab-{}-trace.txt", self.kind));
        match std::fs::write(&path, self.sim.export_log()) {
            Ok(()) => {
                info!(path = %path.display(), "trace exported");
                self.set_status(format!("Exported log to {}", path.display()), false);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "trace export failed");
                self.set_status(format!("Export failed: {}", e), true);
            }
        }
    }

    fn report(&mut self, result: Result<StepEvent<StateView>, StepError>) {
        match result {
            Ok(event) => {
                self.set_status(event.message, false);
                // Follow the tail of the log
                self.trace_scroll = usize::MAX;
            }
            Err(e) if e.is_transient() => {
                self.set_status(format!("Wait: {}", e), false);
            }
            Err(e) => self.set_status(format!("Cannot step: {}", e), true),
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = message;
        self.status_is_error = is_error;
    }
}
