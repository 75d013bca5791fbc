//! Run review use case

use crate::domain::{Clock, Review};
use crate::error::Result;
use crate::infrastructure::{PromptSession, ReviewRepository};
use chrono::NaiveDate;
use log::info;
use std::io::{BufRead, Write};

/// Greeting shown before the very first review
pub const FIRST_REVIEW_GREETING: &str = "You have not done a review yet! Let's get you started";

/// What happened when a review was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Answers were collected and saved
    Completed { next_due: NaiveDate },
    /// The session ended with no answers; nothing was saved
    Skipped,
    /// The latest review is still current
    NotDue {
        next_due: NaiveDate,
        created_today: bool,
    },
}

/// Service that checks the schedule and runs a review when one is due
pub struct ReviewService<S, C> {
    repository: S,
    clock: C,
    questions: Vec<String>,
}

impl<S: ReviewRepository, C: Clock> ReviewService<S, C> {
    /// Create a new review service asking `questions` on new reviews
    pub fn new(repository: S, clock: C, questions: Vec<String>) -> Self {
        ReviewService {
            repository,
            clock,
            questions,
        }
    }

    /// Prompt for a review if one is due and save the answers
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        session: &mut PromptSession<R, W>,
    ) -> Result<ReviewOutcome> {
        let (latest, found) = self
            .repository
            .get_latest(&self.clock, self.questions.as_slice());

        let mut review = if !found {
            info!("No reviews stored yet, starting the first one");
            session.say(FIRST_REVIEW_GREETING)?;
            latest
        } else if latest.due(&self.clock) {
            info!(
                "Review from {} was due on {}, starting a new one",
                latest.created_at(),
                latest.next_due_date()
            );
            Review::with_titles(self.clock.today(), self.questions.as_slice())
        } else {
            info!("Review not due until {}", latest.next_due_date());
            return Ok(ReviewOutcome::NotDue {
                next_due: latest.next_due_date(),
                created_today: latest.created_today(&self.clock),
            });
        };

        session.answer_all(&mut review)?;

        if !review.is_answered() {
            info!("No answers given, review not saved");
            return Ok(ReviewOutcome::Skipped);
        }

        let next_due = review.next_due_date();
        self.repository.save(review)?;
        info!("Review saved, next one due {}", next_due);

        Ok(ReviewOutcome::Completed { next_due })
    }

    pub fn repository(&self) -> &S {
        &self.repository
    }
}
