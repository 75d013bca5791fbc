//! List reviews use case

use crate::domain::Review;
use crate::infrastructure::ReviewRepository;

/// All stored reviews in stored order.
pub fn list_reviews<S: ReviewRepository>(repository: &S) -> &[Review] {
    repository.get_all()
}
