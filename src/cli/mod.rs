//! CLI command handlers.
//!
//! Handlers are invoked by main.rs and kept here so they can be tested
//! without spawning the binary.

mod render;

pub use render::run_render;
