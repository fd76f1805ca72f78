use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// Signed marker used for line sums: 0, +1 or -1.
    pub fn value(&self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerOne => 1,
            Cell::PlayerTwo => -1,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn to_cell(&self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerOneWon,
    PlayerTwoWon,
    Draw,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::PlayerOneWon => Some(Player::One),
            GameStatus::PlayerTwoWon => Some(Player::Two),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    MainDiagonal,
    AntiDiagonal,
    Row(usize),
    Column(usize),
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::MainDiagonal => write!(f, "main diagonal"),
            LineKind::AntiDiagonal => write!(f, "anti-diagonal"),
            LineKind::Row(y) => write!(f, "row {}", y),
            LineKind::Column(x) => write!(f, "column {}", x),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub kind: LineKind,
}

impl WinningLine {
    pub fn new(player: Player, kind: LineKind) -> Self {
        Self { player, kind }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    #[default]
    Numeric,
    Symbols,
}
