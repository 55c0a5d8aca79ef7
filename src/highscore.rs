use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub enum HighScoreError {
    IoError(std::io::Error),
    ParseError(std::num::ParseIntError),
}

impl std::fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighScoreError::IoError(e) => write!(f, "IO error: {}", e),
            HighScoreError::ParseError(e) => write!(f, "Corrupt high score value: {}", e),
        }
    }
}

impl std::error::Error for HighScoreError {}

impl From<std::io::Error> for HighScoreError {
    fn from(e: std::io::Error) -> Self {
        HighScoreError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for HighScoreError {
    fn from(e: std::num::ParseIntError) -> Self {
        HighScoreError::ParseError(e)
    }
}

/// Key-value persistence for the high score. An absent value reads as 0. A
/// failing store degrades the game to an in-memory high score, nothing more.
pub trait HighScoreStore: Send + Sync {
    fn get_high_score(&self) -> Result<u32, HighScoreError>;
    fn set_high_score(&self, value: u32) -> Result<(), HighScoreError>;
}

impl<T: HighScoreStore + ?Sized> HighScoreStore for Arc<T> {
    fn get_high_score(&self) -> Result<u32, HighScoreError> {
        (**self).get_high_score()
    }

    fn set_high_score(&self, value: u32) -> Result<(), HighScoreError> {
        (**self).set_high_score(value)
    }
}

/// Stores the high score as a decimal string in a plain file.
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn get_high_score(&self) -> Result<u32, HighScoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(err.into()),
        };
        Ok(content.trim().parse()?)
    }

    fn set_high_score(&self, value: u32) -> Result<(), HighScoreError> {
        std::fs::write(&self.path, value.to_string())?;
        Ok(())
    }
}

/// Process-local store for hosts without persistence, and for tests.
pub struct MemoryHighScoreStore {
    value: Mutex<u32>,
}

impl MemoryHighScoreStore {
    pub fn new(value: u32) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }
}

impl Default for MemoryHighScoreStore {
    fn default() -> Self {
        Self::new(0)
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn get_high_score(&self) -> Result<u32, HighScoreError> {
        Ok(*self.value.lock().unwrap())
    }

    fn set_high_score(&self, value: u32) -> Result<(), HighScoreError> {
        *self.value.lock().unwrap() = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_high_score_{}", random_number));
        path
    }

    #[test]
    fn test_absent_file_reads_as_zero() {
        let store = FileHighScoreStore::new("/nonexistent/snake_high_score");
        assert_eq!(store.get_high_score().unwrap(), 0);
    }

    #[test]
    fn test_file_round_trip() {
        let path = get_temp_file_path();
        let store = FileHighScoreStore::new(&path);

        store.set_high_score(120).unwrap();
        assert_eq!(store.get_high_score().unwrap(), 120);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = get_temp_file_path();
        std::fs::write(&path, "not a number").unwrap();

        let store = FileHighScoreStore::new(&path);
        assert!(matches!(
            store.get_high_score(),
            Err(HighScoreError::ParseError(_))
        ));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryHighScoreStore::default();
        assert_eq!(store.get_high_score().unwrap(), 0);
        store.set_high_score(40).unwrap();
        assert_eq!(store.get_high_score().unwrap(), 40);
    }
}
