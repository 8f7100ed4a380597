mod persistence;

pub use persistence::HabitPersistence;

use std::path::PathBuf;

use crate::error::PersistenceError;

/// Returns the application's private local-data directory, creating it if
/// needed (`~/.local/share/habitkit` on Linux).
///
/// # Errors
/// Returns an error if the platform data directory cannot be determined or
/// if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, PersistenceError> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| {
            PersistenceError::DataDir("could not determine local data directory".to_string())
        })?
        .join("habitkit");

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
