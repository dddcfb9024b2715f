use std::fmt;

use minefield_core::{Board, CellView};

fn symbol(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Mine => '*',
    }
}

/// Player-visible grid with row and column indices.
pub(crate) struct BoardText<'a>(pub &'a Board);

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;

        f.write_str("   ")?;
        for col in 0..board.cols() {
            write!(f, "{col:>4}")?;
        }

        for ((row, col), view) in board.iter_views() {
            if col == 0 {
                write!(f, "\n{row:>3}")?;
            }
            write!(f, "{:>4}", symbol(view))?;
        }

        writeln!(
            f,
            "\nmines left: {}  revealed: {}/{}",
            board.mines_left(),
            board.revealed_count(),
            board.total_cells()
        )
    }
}

pub(crate) fn render(board: &Board) -> String {
    BoardText(board).to_string()
}
