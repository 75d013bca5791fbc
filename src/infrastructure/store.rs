//! JSON file review store

use crate::domain::codec::{decode_reviews, encode_reviews};
use crate::domain::{latest, Clock, Review};
use crate::error::{ReviewError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract storage for review records
pub trait ReviewRepository {
    /// All reviews in stored order
    fn get_all(&self) -> &[Review];

    /// Most recent review, or a fresh default review and `false` when empty
    fn get_latest(&self, clock: &dyn Clock, default_questions: &[String]) -> (Review, bool) {
        latest(self.get_all(), clock, default_questions)
    }

    /// Append a review and persist it
    fn save(&mut self, review: Review) -> Result<()>;
}

/// Review store backed by a single JSON file.
///
/// The file is not locked. Two processes saving at once can lose a write
/// (the last rewrite wins).
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    reviews: Vec<Review>,
}

impl JsonStore {
    /// Load all reviews from an existing store file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let reviews = Self::read_reviews(&path)?;
        debug!("Loaded {} review(s) from {}", reviews.len(), path.display());

        Ok(JsonStore { path, reviews })
    }

    /// Create a new store file holding an empty array
    pub fn init(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if path.exists() {
            return Err(ReviewError::Config(format!(
                "Review store already exists: {}",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        Self::write_atomic(&path, &encode_reviews(&[])?)?;
        debug!("Created empty review store at {}", path.display());

        Ok(JsonStore {
            path,
            reviews: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_reviews(path: &Path) -> Result<Vec<Review>> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReviewError::StoreNotFound(path.to_path_buf())
            } else {
                ReviewError::Io(e)
            }
        })?;

        decode_reviews(&contents)
    }

    /// Write to a temp file in the same directory, then rename into place.
    fn write_atomic(path: &Path, contents: &str) -> Result<()> {
        let tmp_name = format!(
            "{}.review-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("reviews.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ReviewError::Io(e));
        }

        Ok(())
    }
}

impl ReviewRepository for JsonStore {
    fn get_all(&self) -> &[Review] {
        &self.reviews
    }

    /// Re-read the file, append `review` and rewrite the whole file.
    fn save(&mut self, review: Review) -> Result<()> {
        let mut reviews = Self::read_reviews(&self.path)?;
        reviews.push(review);

        Self::write_atomic(&self.path, &encode_reviews(&reviews)?)?;
        debug!(
            "Saved {} review(s) to {}",
            reviews.len(),
            self.path.display()
        );

        self.reviews = reviews;
        Ok(())
    }
}
