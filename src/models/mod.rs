// Module exports for models

pub mod calendar_day;
pub mod color_tag;
pub mod event;
pub mod settings;
