//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`state`]: the current [`StateView`](crate::engine::StateView) with
//!   marks, pointers, notes and the motion in flight
//! - [`trace`]: the numbered step log
//! - [`status`]: status bar with keybindings, run state and command input
//!
//! Each pane module exports a primary `render_*` function and takes its data
//! through a small borrowed struct.

pub mod state;
pub mod status;
pub mod trace;

pub use state::{render_state_pane, StateRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use trace::render_trace_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all bordered panes
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
