//! Error type shared by the library
//!
//! Level and layout errors are configuration errors: they are reported once
//! at startup and never recovered.

use std::fmt;

use crate::sim::LevelNumber;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug)]
pub enum GameError {
    /// Level identifier outside the catalogue
    UnknownLevel(u8),
    /// Level exists in the catalogue but has no geometry
    MissingLayout(LevelNumber),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownLevel(n) => write!(f, "unknown level identifier {n}"),
            GameError::MissingLayout(level) => {
                write!(f, "level {} has no layout", level.index())
            }
            GameError::Io(e) => write!(f, "i/o error: {e}"),
            GameError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Json(e)
    }
}
