// Service module exports

pub mod calendar_grid;
pub mod clock;
pub mod event;
pub mod session;
pub mod settings;
