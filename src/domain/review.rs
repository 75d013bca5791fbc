//! Review records and the monthly due-date rules

use crate::domain::clock::Clock;
use crate::domain::schedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Questions asked when no custom set is configured
pub const DEFAULT_QUESTIONS: [&str; 3] = [
    "What were your biggest wins this month?",
    "What could you have done better last month?",
    "What will you focus on next month?",
];

/// Default question titles as owned strings
pub fn default_questions() -> Vec<String> {
    DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// A single question and the user's answer (empty when unanswered)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Question {
    pub title: String,
    #[serde(default)]
    pub answer: String,
}

impl Question {
    /// Create an unanswered question
    pub fn new(title: impl Into<String>) -> Self {
        Question {
            title: title.into(),
            answer: String::new(),
        }
    }

    pub fn is_answered(&self) -> bool {
        !self.answer.is_empty()
    }
}

/// One journaling session: a creation date plus ordered questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    created_at: NaiveDate,
    questions: Vec<Question>,
}

impl Review {
    pub fn new(created_at: NaiveDate, questions: Vec<Question>) -> Self {
        Review {
            created_at,
            questions,
        }
    }

    /// Create an unanswered review with one question per title
    pub fn with_titles<S: AsRef<str>>(created_at: NaiveDate, titles: &[S]) -> Self {
        let questions = titles.iter().map(|t| Question::new(t.as_ref())).collect();
        Review::new(created_at, questions)
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Mutable access to the questions for answering in place
    pub fn questions_mut(&mut self) -> &mut [Question] {
        &mut self.questions
    }

    /// True if at least one question has an answer
    pub fn is_answered(&self) -> bool {
        self.questions.iter().any(Question::is_answered)
    }

    /// True if there are questions and every one has an answer
    pub fn is_complete(&self) -> bool {
        !self.questions.is_empty() && self.questions.iter().all(Question::is_answered)
    }

    /// Date one calendar month after creation
    ///
    /// Saturates at the end of the supported date range.
    pub fn next_due_date(&self) -> NaiveDate {
        schedule::one_month_after(self.created_at).unwrap_or(NaiveDate::MAX)
    }

    /// True once the current time is strictly past the start of the next due date
    pub fn due(&self, clock: &dyn Clock) -> bool {
        self.next_due_date()
            .and_hms_opt(0, 0, 0)
            .map_or(false, |due_at| clock.now() > due_at)
    }

    pub fn created_today(&self, clock: &dyn Clock) -> bool {
        self.created_at == clock.today()
    }
}

/// Select the most recently created review.
///
/// Returns the review with the latest creation date and `true`, keeping the
/// first one seen on ties. For an empty slice returns a fresh review dated
/// today with `default_questions` and `false`.
pub fn latest<S: AsRef<str>>(
    reviews: &[Review],
    clock: &dyn Clock,
    default_questions: &[S],
) -> (Review, bool) {
    let newest = reviews.iter().reduce(|best, review| {
        if review.created_at > best.created_at {
            review
        } else {
            best
        }
    });

    match newest {
        Some(review) => (review.clone(), true),
        None => (Review::with_titles(clock.today(), default_questions), false),
    }
}
