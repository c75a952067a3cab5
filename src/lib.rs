//! findpad - literal find and replace across open documents
//!
//! This crate provides the search engine (query compilation, match location,
//! replacement, highlighting) and a tab registry, driven through the Elm
//! Architecture pattern: messages are applied to the model by `update`, and
//! side effects come back as commands executed by the runtime.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod io;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod search;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use error::SearchError;
pub use messages::Msg;
pub use model::AppModel;
