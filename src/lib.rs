//! review - Monthly self-review journal
//!
//! Asks a fixed set of questions once a month, keeps the answers in a flat
//! JSON file and tells you when the next review is due.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ReviewError;
