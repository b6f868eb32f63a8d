use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Orientation outside the fixed option set.
    #[error("unknown orientation: {0}°")]
    UnknownOrientation(i32),

    /// A second answer arrived before the previous feedback was consumed.
    #[error("an answer was already submitted for the current trial")]
    AnswerAlreadySubmitted,

    #[error("no answer is pending feedback")]
    NoPendingFeedback,
}

pub type GameResult<T> = Result<T, GameError>;
