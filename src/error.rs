use std::path::PathBuf;

/// Reasons a column selection or placement was not applied.
///
/// None of these mutate the game; every variant leaves board and turn as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cell ({row}, {column}) is already occupied")]
    CellOccupied { row: usize, column: usize },

    #[error("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::InvalidColumn { column: 9, width: 7 };
        assert_eq!(err.to_string(), "column 9 is outside the board (width 7)");
        assert_eq!(MoveError::ColumnFull { column: 2 }.to_string(), "column 2 is full");
        assert_eq!(MoveError::GameOver.to_string(), "game is over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.width must be in 1..=20".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.width must be in 1..=20"
        );
    }
}
