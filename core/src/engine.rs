use serde::{Deserialize, Serialize};

use crate::*;

/// Name excluded by `AnyUniformRow`; a row of blanks never pays out.
const BLANK_NAME: &str = " ";

/// Win conditions a board can be checked against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinRule {
    /// Any uniform row (top to bottom), then any uniform column (left to
    /// right); the first hit decides the winning symbol.
    RowOrColumn,
    /// The main diagonal, then the anti-diagonal. On boards with more rows
    /// than columns the anti-diagonal leaves the grid and cannot win.
    Diagonals,
    /// Any uniform row whose symbol is not the blank `" "`.
    AnyUniformRow,
}

impl Board {
    /// Applies `rule` to the board.
    ///
    /// Total and pure: every board and rule combination produces an outcome,
    /// and the same inputs always produce the same one. Cells match on the
    /// symbol name, so catalog entries sharing a name count as equal.
    pub fn evaluate(&self, rule: WinRule) -> WinOutcome {
        use WinRule::*;

        let winner = match rule {
            RowOrColumn => self.row_then_column_win(),
            Diagonals => self.diagonal_win(),
            AnyUniformRow => self.non_blank_row_win(),
        };

        match winner {
            Some(symbol) => WinOutcome::Win(symbol.clone()),
            None => WinOutcome::Lose,
        }
    }

    fn row_then_column_win(&self) -> Option<&Symbol> {
        let (rows, columns) = self.grid.dim();

        (0..rows)
            .find_map(|row| self.uniform_line((0..columns).map(move |column| (row, column))))
            .or_else(|| {
                (0..columns)
                    .find_map(|column| self.uniform_line((0..rows).map(move |row| (row, column))))
            })
    }

    fn diagonal_win(&self) -> Option<&Symbol> {
        let (rows, columns) = self.grid.dim();
        let steps = rows.min(columns);

        self.uniform_line((0..steps).map(|i| (i, i))).or_else(|| {
            // when rows > columns this column index leaves the board; such a
            // line counts as non-uniform rather than panicking
            self.uniform_line((0..steps).map(|i| (i, rows - 1 - i)))
        })
    }

    fn non_blank_row_win(&self) -> Option<&Symbol> {
        let (rows, columns) = self.grid.dim();

        (0..rows).find_map(|row| {
            self.uniform_line((0..columns).map(move |column| (row, column)))
                .filter(|symbol| symbol.name != BLANK_NAME)
        })
    }

    /// Shared symbol of a line: every listed cell exists and every name
    /// equals the first cell's name.
    fn uniform_line(&self, mut cells: impl Iterator<Item = (usize, usize)>) -> Option<&Symbol> {
        let first = self.symbol_in(cells.next()?)?;
        for cell in cells {
            if self.symbol_in(cell)?.name != first.name {
                return None;
            }
        }
        Some(first)
    }

    fn symbol_in(&self, cell: (usize, usize)) -> Option<&Symbol> {
        let id = *self.grid.get(cell)?;
        self.catalog.get(id)
    }
}
