#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("position ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    OutOfBounds(#[from] BoardError),

    #[error("cell ({x}, {y}) is already marked")]
    CellOccupied { x: isize, y: isize },

    #[error("game is already over")]
    GameOver,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
