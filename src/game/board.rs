use std::fmt;

use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of cells in a window; also the run length that wins the game.
pub const WINDOW_LENGTH: usize = 4;

/// Column whose pieces take part in the most possible lines.
pub const CENTER_COL: usize = COLS / 2;

/// Row/column steps for horizontal, vertical, `/` and `\` lines.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'O',
            Cell::Computer => 'X',
        }
    }
}

/// Four consecutive cells along a row, column or diagonal.
pub type Window = [Cell; WINDOW_LENGTH];

/// The 6x7 grid. Row 0 is the bottom row; pieces settle on the lowest empty
/// cell of their column, so a cell above an empty cell is always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row 5 is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column still accepts a piece when its top cell is empty.
    pub fn is_valid(&self, col: usize) -> bool {
        col < COLS && self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Lowest empty row in `col`, or `None` when the column is full.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Place `cell` at (row, col) without any checks.
    ///
    /// Callers pass a row obtained from [`Board::next_open_row`] on a column
    /// that [`Board::is_valid`] accepted; anything else can break gravity.
    pub fn drop_piece(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Checked drop for real moves. Returns the row where the piece landed.
    pub fn play(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self.next_open_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.drop_piece(row, col, cell);
        Ok(row)
    }

    /// Columns currently accepting a piece, ascending.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid(col))
    }

    /// Cells of `col`, bottom to top.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().map(move |row| row[col])
    }

    /// Every window on the board: horizontals, verticals, then both diagonals.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        DIRECTIONS.iter().flat_map(move |&(d_row, d_col)| {
            (0..ROWS).flat_map(move |row| {
                (0..COLS).filter_map(move |col| self.window(row, col, d_row, d_col))
            })
        })
    }

    fn window(&self, row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Window> {
        let mut window = [Cell::Empty; WINDOW_LENGTH];
        for (i, slot) in window.iter_mut().enumerate() {
            let r = row.checked_add_signed(d_row * i as isize)?;
            let c = col.checked_add_signed(d_col * i as isize)?;
            if r >= ROWS || c >= COLS {
                return None;
            }
            *slot = self.cells[r][c];
        }
        Some(window)
    }

    /// Build a board from a diagram, top row first: `.` empty, `O` human,
    /// `X` computer.
    #[cfg(test)]
    pub(crate) fn from_diagram(rows: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for (i, line) in rows.iter().enumerate() {
            let row = ROWS - 1 - i;
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'O' => Cell::Human,
                    'X' => Cell::Computer,
                    _ => Cell::Empty,
                };
                board.drop_piece(row, col, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Top row first, the way the board looks when standing up.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    /// Replay column choices (taken modulo COLS, skipping full columns),
    /// alternating pieces.
    fn board_from_moves(moves: &[u8]) -> Board {
        let mut board = Board::new();
        let mut cell = Cell::Human;
        for &m in moves {
            let col = m as usize % COLS;
            if let Some(row) = board.next_open_row(col) {
                board.drop_piece(row, col, cell);
                cell = if cell == Cell::Human { Cell::Computer } else { Cell::Human };
            }
        }
        board
    }

    fn gravity_holds(board: &Board) -> bool {
        (0..COLS).all(|col| {
            (1..ROWS).all(|row| board.get(row - 1, col) != Cell::Empty || board.get(row, col) == Cell::Empty)
        })
    }

    quickcheck! {
        fn is_valid_matches_valid_columns(moves: Vec<u8>) -> bool {
            let board = board_from_moves(&moves);
            let valid = board.valid_columns();
            (0..COLS).all(|col| board.is_valid(col) == valid.contains(&col))
        }
    }

    quickcheck! {
        fn drop_keeps_gravity(moves: Vec<u8>, col: u8) -> bool {
            let mut board = board_from_moves(&moves);
            let col = col as usize % COLS;
            let Some(row) = board.next_open_row(col) else {
                return !board.is_valid(col);
            };
            board.drop_piece(row, col, Cell::Computer);
            board.get(row, col) == Cell::Computer
                && (row == 0 || board.get(row - 1, col) != Cell::Empty)
                && gravity_holds(&board)
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.valid_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_next_open_row_stacks_from_bottom() {
        let mut board = Board::new();
        assert_eq!(board.next_open_row(3), Some(0));
        board.drop_piece(0, 3, Cell::Human);
        assert_eq!(board.next_open_row(3), Some(1));
        board.drop_piece(1, 3, Cell::Computer);
        assert_eq!(board.get(0, 3), Cell::Human);
        assert_eq!(board.get(1, 3), Cell::Computer);
        assert_eq!(board.next_open_row(3), Some(2));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.play(0, Cell::Human).unwrap();
        }

        assert!(!board.is_valid(0));
        assert_eq!(board.next_open_row(0), None);
        assert_eq!(board.valid_columns(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(board.play(0, Cell::Computer), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert!(!board.is_valid(COLS));
        assert_eq!(board.play(7, Cell::Human), Err(MoveError::InvalidColumn(7)));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.play(col, Cell::Human).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.valid_columns().is_empty());
    }

    #[test]
    fn test_window_count() {
        let board = Board::new();
        // 24 horizontal + 21 vertical + 12 + 12 diagonal
        assert_eq!(board.windows().count(), 69);
    }

    #[test]
    fn test_windows_follow_lines() {
        let mut board = Board::new();
        board.drop_piece(0, 0, Cell::Human);
        board.drop_piece(1, 1, Cell::Human);
        board.drop_piece(2, 2, Cell::Human);
        board.drop_piece(3, 3, Cell::Human);
        let full = board
            .windows()
            .filter(|w| w.iter().all(|&c| c == Cell::Human))
            .count();
        assert_eq!(full, 1);
    }

    #[test]
    fn test_center_column() {
        let mut board = Board::new();
        board.play(CENTER_COL, Cell::Computer).unwrap();
        board.play(CENTER_COL, Cell::Human).unwrap();
        let cells: Vec<Cell> = board.column(CENTER_COL).collect();
        assert_eq!(cells.len(), ROWS);
        assert_eq!(cells[0], Cell::Computer);
        assert_eq!(cells[1], Cell::Human);
        assert_eq!(cells[2], Cell::Empty);
    }

    #[test]
    fn test_display_prints_top_row_first() {
        let mut board = Board::new();
        board.play(0, Cell::Human).unwrap();
        board.play(0, Cell::Computer).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[ROWS - 1], "O......");
        assert_eq!(lines[ROWS - 2], "X......");
        assert_eq!(lines[0], ".......");
    }

    #[test]
    fn test_from_diagram_matches_display() {
        let board = Board::from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            "...X...",
            "..OXO..",
        ]);
        assert_eq!(board.get(0, 2), Cell::Human);
        assert_eq!(board.get(1, 3), Cell::Computer);
        assert_eq!(
            board.to_string(),
            ".......\n.......\n.......\n.......\n...X...\n..OXO..\n"
        );
    }
}
