//! Output formatting utilities

use crate::application::ReviewOutcome;
use crate::domain::codec::encode_date;
use crate::domain::Review;

/// Format a list of reviews for display
pub fn format_review_list(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "No reviews found".to_string();
    }

    let mut output = String::new();
    for (idx, review) in reviews.iter().enumerate() {
        if idx > 0 {
            output.push('\n');
        }

        let state = if review.is_complete() {
            "complete"
        } else if review.is_answered() {
            "partial"
        } else {
            "unanswered"
        };
        output.push_str(&format!("{}  ({})\n", encode_date(review.created_at()), state));

        for question in review.questions() {
            output.push_str(&format!("  Q: {}\n", question.title));
            if question.is_answered() {
                output.push_str(&format!("  A: {}\n", question.answer));
            } else {
                output.push_str("  A: -\n");
            }
        }
    }
    output
}

/// Format the result of running a review
pub fn format_outcome(outcome: &ReviewOutcome) -> String {
    match outcome {
        ReviewOutcome::Completed { next_due } => format!(
            "Thanks for the review! See you on {} for the next one!",
            encode_date(*next_due)
        ),
        ReviewOutcome::Skipped => {
            "No answers given, so nothing was saved. Run 'review review' when you are ready."
                .to_string()
        }
        ReviewOutcome::NotDue {
            next_due,
            created_today,
        } => {
            let prefix = if *created_today {
                "You already did a review today. "
            } else {
                ""
            };
            format!(
                "{}Your review is not due until {}. See you then!",
                prefix,
                encode_date(*next_due)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Question;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_review_list(&[]);
        assert_eq!(output, "No reviews found");
    }

    #[test]
    fn test_format_review_list() {
        let reviews = vec![
            Review::new(
                date(2025, 7, 9),
                vec![
                    Question {
                        title: "How are you today?".to_string(),
                        answer: "Fantastic".to_string(),
                    },
                    Question::new("Biggest win?"),
                ],
            ),
            Review::new(date(2025, 8, 20), vec![]),
        ];

        let output = format_review_list(&reviews);
        assert_eq!(
            output,
            "09-07-2025  (partial)\n  Q: How are you today?\n  A: Fantastic\n  Q: Biggest win?\n  A: -\n\n20-08-2025  (unanswered)\n"
        );
    }

    #[test]
    fn test_format_complete_review() {
        let reviews = vec![Review::new(
            date(2025, 7, 9),
            vec![Question {
                title: "How are you today?".to_string(),
                answer: "Fantastic".to_string(),
            }],
        )];

        assert!(format_review_list(&reviews).starts_with("09-07-2025  (complete)\n"));
    }

    #[test]
    fn test_format_outcomes() {
        assert_eq!(
            format_outcome(&ReviewOutcome::Completed {
                next_due: date(2025, 11, 19)
            }),
            "Thanks for the review! See you on 19-11-2025 for the next one!"
        );
        assert_eq!(
            format_outcome(&ReviewOutcome::NotDue {
                next_due: date(2025, 11, 1),
                created_today: false
            }),
            "Your review is not due until 01-11-2025. See you then!"
        );
        assert!(format_outcome(&ReviewOutcome::NotDue {
            next_due: date(2025, 11, 19),
            created_today: true
        })
        .starts_with("You already did a review today."));
        assert!(format_outcome(&ReviewOutcome::Skipped).contains("nothing was saved"));
    }
}
