use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use homedeck_core::Board;

const QUALIFIER: &str = "org";
const ORG: &str = "homedeck";
const APP: &str = "dashboard";

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to read board {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse board {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("board {} lists app '{name}' more than once", path.display())]
    DuplicateName { path: PathBuf, name: String },
}

/// Read access to the board JSON file.
#[derive(Debug, Clone)]
pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `board.json` in the platform config directory.
    pub fn default_location() -> Result<Self, BoardError> {
        let dirs = ProjectDirs::from(QUALIFIER, ORG, APP).ok_or(BoardError::NoConfigDir)?;
        Ok(Self::at(dirs.config_dir().join(homedeck_config::BOARD_FILE_NAME)))
    }

    /// Explicit path when given, the default location otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, BoardError> {
        match explicit {
            Some(path) => Ok(Self::at(path)),
            None => Self::default_location(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty board.
    pub fn load(&self) -> Result<Board, BoardError> {
        if !self.path.exists() {
            tracing::debug!("no board at {}, starting empty", self.path.display());
            return Ok(Board::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| BoardError::Io {
            path: self.path.clone(),
            source,
        })?;
        let board: Board = serde_json::from_str(&content).map_err(|source| BoardError::Parse {
            path: self.path.clone(),
            source,
        })?;

        if let Some(name) = board.duplicate_name() {
            return Err(BoardError::DuplicateName {
                path: self.path.clone(),
                name: name.to_string(),
            });
        }
        Ok(board)
    }
}
