use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Number of rows must be from 4 to 32")]
    InvalidRows,
    #[error("Number of columns must be from 4 to 32")]
    InvalidColumns,
    #[error("Number of mines must be lesser than the number of fields")]
    TooManyMines,
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
