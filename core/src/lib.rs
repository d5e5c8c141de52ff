#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use symbol::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod symbol;
mod types;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub dimension: Dimension,
    pub catalog: SymbolCatalog,
}

impl GameConfig {
    pub fn new(dimension: Dimension, catalog: SymbolCatalog) -> Self {
        Self { dimension, catalog }
    }

    pub const fn total_cells(&self) -> CellCount {
        self.dimension.total_cells()
    }
}

/// One generated round: a rows x columns grid of catalog ids.
///
/// Boards are never edited after construction; a new round means a new
/// board. Every stored id indexes the catalog and the grid shape always
/// matches the reported dimension.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    catalog: SymbolCatalog,
    grid: Array2<SymbolId>,
}

impl Board {
    pub fn from_grid(catalog: SymbolCatalog, grid: Array2<SymbolId>) -> Result<Self> {
        let (rows, columns) = grid.dim();
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyBoard);
        }
        if rows > usize::from(Extent::MAX) || columns > usize::from(Extent::MAX) {
            return Err(GameError::InvalidDimension);
        }

        for &id in grid.iter() {
            catalog.validate_id(id)?;
        }

        Ok(Self { catalog, grid })
    }

    pub fn dimension(&self) -> Dimension {
        let (rows, columns) = self.grid.dim();
        Dimension::new_unchecked(rows.try_into().unwrap(), columns.try_into().unwrap())
    }

    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    pub fn total_cells(&self) -> CellCount {
        self.dimension().total_cells()
    }

    pub fn symbol_at(&self, row: Extent, column: Extent) -> &Symbol {
        &self.catalog[self[(row, column)]]
    }

    /// Symbol names of one row, left to right.
    pub fn row_names(&self, row: Extent) -> impl Iterator<Item = &str> {
        self.grid
            .row(usize::from(row))
            .into_iter()
            .map(|&id| self.catalog[id].name.as_str())
    }
}

impl Index<(Extent, Extent)> for Board {
    type Output = SymbolId;

    fn index(&self, (row, column): (Extent, Extent)) -> &Self::Output {
        &self.grid[(usize::from(row), usize::from(column))]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WinOutcome {
    Win(Symbol),
    Lose,
}

impl WinOutcome {
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win(_))
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Win(symbol) => Some(symbol),
            Self::Lose => None,
        }
    }
}
