use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result, SymbolId, Weight};

/// One reel symbol. `name` is the display glyph and the only key used when
/// lines are compared for uniformity; `chance` is how many pool slots the
/// symbol occupies; `value` multiplies the bet on a win.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub chance: Weight,
    pub value: u32,
}

impl Symbol {
    pub fn new(name: &str, chance: Weight, value: u32) -> Self {
        Self {
            name: String::from(name),
            chance,
            value,
        }
    }
}

/// Ordered, immutable symbol table shared by configs and boards.
///
/// Construction validates the table once, so every catalog in circulation
/// can be sampled. Cloning only bumps a reference count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SymbolCatalog {
    symbols: Arc<[Symbol]>,
}

impl SymbolCatalog {
    /// Upper bound on catalog entries, fixed by the `SymbolId` width.
    pub const MAX_SYMBOLS: usize = SymbolId::MAX as usize + 1;

    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        if symbols.len() > Self::MAX_SYMBOLS {
            return Err(GameError::CatalogTooLarge);
        }
        if symbols.iter().all(|symbol| symbol.chance == 0) {
            return Err(GameError::ZeroTotalWeight);
        }

        for symbol in &symbols {
            if symbol.chance == 0 {
                log::warn!(
                    "Symbol {:?} has zero chance and can never be drawn",
                    symbol.name
                );
            }
        }

        Ok(Self {
            symbols: symbols.into(),
        })
    }

    /// The original five-symbol table.
    ///
    /// The `chance` column ascends as if the entries were cumulative
    /// thresholds, but each one is an independent repeat count: `7` fills
    /// 101 of the pool's 325 slots and dominates every board.
    pub fn classic() -> Self {
        let symbols = vec![
            Symbol::new("*", 19, 5),
            Symbol::new("X", 43, 2),
            Symbol::new("$", 68, 3),
            Symbol::new("@", 94, 2),
            Symbol::new("7", 101, 100),
        ];
        Self::new(symbols).expect("classic table is a valid catalog")
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(usize::from(id))
    }

    pub fn validate_id(&self, id: SymbolId) -> Result<SymbolId> {
        if usize::from(id) < self.symbols.len() {
            Ok(id)
        } else {
            Err(GameError::UnknownSymbol(id))
        }
    }

    /// Pool slot total, the denominator of every symbol's effective
    /// probability. Nonzero for any constructed catalog.
    pub fn total_weight(&self) -> u32 {
        self.symbols
            .iter()
            .map(|symbol| u32::from(symbol.chance))
            .sum()
    }
}

impl Index<SymbolId> for SymbolCatalog {
    type Output = Symbol;

    fn index(&self, id: SymbolId) -> &Self::Output {
        &self.symbols[usize::from(id)]
    }
}

impl TryFrom<Vec<Symbol>> for SymbolCatalog {
    type Error = GameError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<SymbolCatalog> for Vec<Symbol> {
    fn from(catalog: SymbolCatalog) -> Self {
        catalog.symbols.to_vec()
    }
}
