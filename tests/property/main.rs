// Property-based tests for grid computation and the event store

mod grid_properties;
mod store_properties;
