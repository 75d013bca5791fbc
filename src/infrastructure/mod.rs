//! Infrastructure layer - File persistence, configuration and terminal I/O

pub mod config;
pub mod prompt;
pub mod store;

pub use config::Config;
pub use prompt::{ask_to, PromptSession};
pub use store::{JsonStore, ReviewRepository};
