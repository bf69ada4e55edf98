//! Plain-text presentation layer.
//!
//! Renders the session as a terminal month grid and drives it from line
//! commands. The calendar core never depends on anything in here.

pub mod app;
pub mod commands;
pub mod month_view;
pub mod snapshot;

pub use app::TextApp;
pub use commands::Command;
pub use month_view::MonthView;
