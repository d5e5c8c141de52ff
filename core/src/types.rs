use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Single grid axis length, used for row and column counts.
pub type Extent = u8;

/// Count type used for total-cell counts.
pub type CellCount = u16;

/// Relative repeat count of one symbol inside the weighted pool.
pub type Weight = u16;

/// Index of a symbol inside its catalog.
pub type SymbolId = u8;

pub const fn cell_count(rows: Extent, columns: Extent) -> CellCount {
    let rows = rows as CellCount;
    let columns = columns as CellCount;
    rows.saturating_mul(columns)
}

/// Board shape, `rows x columns`, both sides nonzero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    rows: Extent,
    columns: Extent,
}

impl Dimension {
    pub const fn new_unchecked(rows: Extent, columns: Extent) -> Self {
        Self { rows, columns }
    }

    pub fn new(rows: Extent, columns: Extent) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::InvalidDimension);
        }
        Ok(Self::new_unchecked(rows, columns))
    }

    pub const fn rows(self) -> Extent {
        self.rows
    }

    pub const fn columns(self) -> Extent {
        self.columns
    }

    pub const fn total_cells(self) -> CellCount {
        cell_count(self.rows, self.columns)
    }

    pub const fn grid_shape(self) -> (usize, usize) {
        (self.rows as usize, self.columns as usize)
    }
}

impl FromStr for Dimension {
    type Err = GameError;

    /// Parses `"RxC"`: exactly two integer tokens split on a lowercase `x`,
    /// whitespace around either token ignored, zero on either side rejected.
    fn from_str(text: &str) -> Result<Self> {
        let mut tokens = text.split('x');
        let (Some(rows), Some(columns), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(GameError::InvalidDimension);
        };

        let rows = rows
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidDimension)?;
        let columns = columns
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidDimension)?;
        Self::new(rows, columns)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_dimensions() {
        let dimension: Dimension = "3x4".parse().unwrap();

        assert_eq!(dimension.rows(), 3);
        assert_eq!(dimension.columns(), 4);
        assert_eq!(dimension.total_cells(), 12);
    }

    #[test]
    fn parse_trims_whitespace_around_tokens() {
        let dimension: Dimension = " 3 x 4 ".parse().unwrap();

        assert_eq!(dimension, Dimension::new(3, 4).unwrap());
    }

    #[test]
    fn parse_rejects_malformed_text() {
        for text in ["3,4", "3x4x5", "ax4", "3x", "x4", "", "3X4"] {
            assert_eq!(
                text.parse::<Dimension>(),
                Err(GameError::InvalidDimension),
                "{text:?} should not parse",
            );
        }
    }

    #[test]
    fn parse_rejects_zero_sides() {
        assert_eq!("0x4".parse::<Dimension>(), Err(GameError::InvalidDimension));
        assert_eq!("4x0".parse::<Dimension>(), Err(GameError::InvalidDimension));
    }

    #[test]
    fn parse_rejects_out_of_range_sides() {
        assert_eq!(
            "256x4".parse::<Dimension>(),
            Err(GameError::InvalidDimension)
        );
    }

    #[test]
    fn display_round_trips() {
        let dimension = Dimension::new(12, 7).unwrap();

        assert_eq!(alloc::format!("{dimension}"), "12x7");
    }

    #[test]
    fn total_cells_covers_the_full_axis_range() {
        assert_eq!(Dimension::new_unchecked(255, 255).total_cells(), 65025);
    }
}
