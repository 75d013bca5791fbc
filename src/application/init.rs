//! Initialize review store use case

use crate::error::Result;
use crate::infrastructure::JsonStore;
use log::info;
use std::path::Path;

/// Create an empty review store at the specified path.
pub fn init(path: &Path) -> Result<()> {
    JsonStore::init(path)?;
    info!("Initialized review store at {}", path.display());

    println!("Initialized review store at {}", path.display());
    println!("Run 'review review' to start your first review.");

    Ok(())
}
