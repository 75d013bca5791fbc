//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_reviews;
pub mod run_review;

pub use list_reviews::list_reviews;
pub use run_review::{ReviewOutcome, ReviewService};
