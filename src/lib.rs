// Month Calendar Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod ui_text; // Plain-text presentation layer
pub mod utils;
