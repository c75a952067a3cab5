//! Runtime module - executes commands and feeds their results back as messages
//!
//! - `app` - the dispatch loop and command execution

pub mod app;

pub use app::App;
