//! Domain layer - Review model, date codec and scheduling rules

pub mod clock;
pub mod codec;
pub mod review;
pub mod schedule;

pub use clock::{Clock, FixedClock, SystemClock};
pub use review::{default_questions, latest, Question, Review, DEFAULT_QUESTIONS};
