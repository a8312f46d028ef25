//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, auto-run and
//!   command input mode
//! - **[`panes`]**: stateless render functions for each visible pane (state,
//!   trace log, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The UI only ever talks to a `Box<dyn Simulation>`; it never sees a
//! concrete algorithm. Construct an [`App`] and call [`App::run`].
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
