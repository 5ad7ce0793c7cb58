//! Presentational components shared by every view of the school client.

pub mod components;

pub use components::*;
