use std::fmt;

/// Discrete grid position expressed as `(row, col)` tile coordinates.
///
/// Rows grow downwards and columns grow to the right, matching the order in
/// which boards are laid out in data files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position `distance` cells away in `direction`.
    pub fn offset(self, direction: Direction, distance: i32) -> Self {
        let (d_row, d_col) = direction.delta();
        Self::new(self.row + d_row * distance, self.col + d_col * distance)
    }

    /// Returns the orthogonally adjacent position in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        self.offset(direction, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid axis a blast ray travels along.
///
/// `Row` rays stay within one row (left/right), `Column` rays stay within one
/// column (up/down).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[strum(serialize = "-")]
    Row,
    #[strum(serialize = "|")]
    Column,
}

/// One of the four axis directions, used both for facing and for blast rays.
///
/// The string forms are the arrow glyphs clients render (`^`, `v`, `<`, `>`).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[strum(serialize = "^")]
    Up,
    #[default]
    #[strum(serialize = "v")]
    Down,
    #[strum(serialize = "<")]
    Left,
    #[strum(serialize = ">")]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` unit step for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Row,
            Direction::Up | Direction::Down => Axis::Column,
        }
    }

    /// Sign of the step along [`Self::axis`].
    pub const fn step(self) -> i32 {
        match self {
            Direction::Up | Direction::Left => -1,
            Direction::Down | Direction::Right => 1,
        }
    }
}

/// Discrete simulation time, advanced once per tick action.
pub type Tick = u64;
