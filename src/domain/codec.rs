//! JSON codec for the review store file
//!
//! The file is a JSON array of objects shaped like
//! `{"createdAt": "DD-MM-YYYY", "questions": [{"title": "...", "answer": "..."}]}`.
//! Dates go through [`encode_date`] and [`decode_date`] so the day-month-year
//! form stays byte-exact.

use crate::domain::review::{Question, Review};
use crate::error::{ReviewError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Day-month-year format with leading zeros
pub const DAY_MONTH_YEAR_FORMAT: &str = "%d-%m-%Y";

/// Format a date as DD-MM-YYYY
pub fn encode_date(date: NaiveDate) -> String {
    date.format(DAY_MONTH_YEAR_FORMAT).to_string()
}

/// Parse a DD-MM-YYYY date, rejecting anything that does not re-encode to the same text
pub fn decode_date(input: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input, DAY_MONTH_YEAR_FORMAT)
        .map_err(|e| ReviewError::DateParse(format!("'{}' ({})", input, e)))?;

    if encode_date(date) != input {
        return Err(ReviewError::DateParse(format!(
            "'{}' (expected zero-padded DD-MM-YYYY)",
            input
        )));
    }

    Ok(date)
}

/// On-disk shape of a review
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewRecord {
    created_at: String,
    #[serde(default)]
    questions: Vec<Question>,
}

impl From<&Review> for ReviewRecord {
    fn from(review: &Review) -> Self {
        ReviewRecord {
            created_at: encode_date(review.created_at()),
            questions: review.questions().to_vec(),
        }
    }
}

impl TryFrom<ReviewRecord> for Review {
    type Error = ReviewError;

    fn try_from(record: ReviewRecord) -> Result<Self> {
        let created_at = decode_date(&record.created_at)?;
        Ok(Review::new(created_at, record.questions))
    }
}

/// Serialize reviews to the store's pretty-printed JSON form
pub fn encode_reviews(reviews: &[Review]) -> Result<String> {
    let records: Vec<ReviewRecord> = reviews.iter().map(ReviewRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Parse the store's JSON form. Fails as a whole on the first bad record.
pub fn decode_reviews(input: &str) -> Result<Vec<Review>> {
    let records: Vec<ReviewRecord> = serde_json::from_str(input)?;
    records.into_iter().map(Review::try_from).collect()
}
