use std::fmt;

use super::Position;
use crate::state::StateError;

/// Static cell contents of the arena.
///
/// The string forms are the glyphs used by board data files and clients.
/// `Empty` also accepts a space when parsing.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    #[strum(to_string = ".", serialize = " ")]
    Empty,
    /// Breakable crate; a blast destroys it and stops there.
    #[strum(serialize = "□")]
    Crate,
    /// Outer or inner wall; blocks blasts entirely.
    #[strum(serialize = "▩")]
    Wall,
    /// Indestructible pillar; blocks blasts entirely.
    #[strum(serialize = "▣")]
    Block,
}

/// Tiles a blast destroys.
pub const DESTRUCTIBLE: &[Tile] = &[Tile::Crate];

/// Tiles a blast cannot enter.
pub const STURDY: &[Tile] = &[Tile::Wall, Tile::Block];

impl Tile {
    pub fn is_destructible(self) -> bool {
        DESTRUCTIBLE.contains(&self)
    }

    pub fn is_sturdy(self) -> bool {
        STURDY.contains(&self)
    }

    pub fn is_obstacle(self) -> bool {
        self.is_destructible() || self.is_sturdy()
    }

    /// Parses a single board glyph.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let mut buf = [0u8; 4];
        symbol.encode_utf8(&mut buf).parse().ok()
    }
}

/// Rectangular obstacle grid for one game.
///
/// Only [`Board::clear`] mutates cells after construction, and only to turn a
/// destructible tile into [`Tile::Empty`]. Deserialized boards go through
/// the same shape checks as [`Board::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")
)]
pub struct Board {
    cells: Vec<Vec<Tile>>,
}

impl Board {
    /// Builds a board from tile rows. Every row must have the same width.
    pub fn new(cells: Vec<Vec<Tile>>) -> Result<Self, StateError> {
        let expected = cells.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(StateError::EmptyBoard);
        }
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(StateError::RaggedBoard {
                row,
                expected,
                found,
            });
        }
        Ok(Self { cells })
    }

    /// An obstacle-free board of the given size.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![Tile::Empty; cols.max(1)]; rows.max(1)],
        }
    }

    /// Parses glyph rows such as `"▩..□▩"`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, StateError> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(col, symbol)| {
                        Tile::from_symbol(symbol).ok_or(StateError::UnknownTile {
                            row,
                            col,
                            symbol,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cells)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn contains(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    /// Tile at `position`, or `None` when it lies off the board.
    pub fn get(&self, position: Position) -> Option<Tile> {
        self.index(position).map(|(row, col)| self.cells[row][col])
    }

    /// Tile at `position`; reading off the board is a caller error.
    pub fn tile(&self, position: Position) -> Result<Tile, StateError> {
        self.get(position)
            .ok_or_else(|| self.out_of_bounds(position))
    }

    /// Turns a destructible tile into empty ground.
    ///
    /// Returns `true` when a tile was destroyed. Sturdy and empty tiles are
    /// left untouched.
    pub fn clear(&mut self, position: Position) -> Result<bool, StateError> {
        let (row, col) = self
            .index(position)
            .ok_or_else(|| self.out_of_bounds(position))?;
        let cell = &mut self.cells[row][col];
        if cell.is_destructible() {
            *cell = Tile::Empty;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn out_of_bounds(&self, position: Position) -> StateError {
        StateError::PositionOutOfBounds {
            position,
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    fn index(&self, position: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        (row < self.rows() && col < self.cols()).then_some((row, col))
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Board {
    type Error = StateError;

    fn try_from(cells: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::new(cells)
    }
}

impl From<Board> for Vec<Vec<Tile>> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obstacle_tables_classify_tiles() {
        assert!(Tile::Crate.is_destructible());
        assert!(!Tile::Crate.is_sturdy());
        assert!(Tile::Wall.is_sturdy());
        assert!(Tile::Block.is_sturdy());
        assert!(!Tile::Empty.is_obstacle());
        assert!(Tile::Block.is_obstacle());
    }

    #[test]
    fn from_rows_parses_glyphs() {
        let board = Board::from_rows(&["▩▩▩▩", "▩. □", "▩▣.▩"]).unwrap();
        assert_eq!(board.dimensions(), (3, 4));
        assert_eq!(board.tile(Position::new(1, 1)).unwrap(), Tile::Empty);
        assert_eq!(board.tile(Position::new(1, 2)).unwrap(), Tile::Empty);
        assert_eq!(board.tile(Position::new(1, 3)).unwrap(), Tile::Crate);
        assert_eq!(board.tile(Position::new(2, 1)).unwrap(), Tile::Block);
        assert_eq!(board.to_string(), "▩▩▩▩\n▩..□\n▩▣.▩");
    }

    #[test]
    fn raw_cells_are_shape_checked() {
        assert_eq!(
            Board::try_from(vec![vec![Tile::Empty, Tile::Empty], vec![Tile::Empty]]),
            Err(StateError::RaggedBoard {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(Board::try_from(Vec::new()), Err(StateError::EmptyBoard));
        assert_eq!(
            Board::try_from(vec![Vec::new()]),
            Err(StateError::EmptyBoard)
        );

        let board = Board::empty(2, 3);
        let cells: Vec<Vec<Tile>> = board.clone().into();
        assert_eq!(Board::try_from(cells), Ok(board));
    }

    #[test]
    fn from_rows_rejects_unknown_and_ragged_input() {
        assert_eq!(
            Board::from_rows(&["..", ".x"]),
            Err(StateError::UnknownTile {
                row: 1,
                col: 1,
                symbol: 'x'
            })
        );
        assert_eq!(
            Board::from_rows(&["...", ".."]),
            Err(StateError::RaggedBoard {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(Board::from_rows::<&str>(&[]), Err(StateError::EmptyBoard));
    }

    #[test]
    fn tile_reports_out_of_bounds() {
        let board = Board::empty(2, 3);
        assert!(board.get(Position::new(-1, 0)).is_none());
        assert_eq!(
            board.tile(Position::new(2, 0)),
            Err(StateError::PositionOutOfBounds {
                position: Position::new(2, 0),
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn clear_only_destroys_crates() {
        let mut board = Board::from_rows(&["□▩."]).unwrap();
        assert_eq!(board.clear(Position::new(0, 0)), Ok(true));
        assert_eq!(board.clear(Position::new(0, 0)), Ok(false));
        assert_eq!(board.clear(Position::new(0, 1)), Ok(false));
        assert_eq!(board.get(Position::new(0, 1)), Some(Tile::Wall));
        assert!(board.clear(Position::new(0, 3)).is_err());
    }
}
