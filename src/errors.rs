use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("a figure needs at least 3 points, got {points}")]
    InvalidInput { points: usize },
    #[error("could not get a rotation angle: {0}")]
    InvalidAngleSource(String),
    #[error("could not read the scenario: {0}")]
    FileReaderError(String),
}

impl From<std::io::Error> for StrategyError {
    fn from(error: std::io::Error) -> Self {
        StrategyError::FileReaderError(error.to_string())
    }
}

impl From<serde_json::Error> for StrategyError {
    fn from(error: serde_json::Error) -> Self {
        StrategyError::FileReaderError(error.to_string())
    }
}
