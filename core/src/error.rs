use thiserror::Error;

use crate::SymbolId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid dimensions, expected nonzero ROWSxCOLS")]
    InvalidDimension,
    #[error("Symbol catalog is empty")]
    EmptyCatalog,
    #[error("Symbol catalog holds more symbols than ids exist")]
    CatalogTooLarge,
    #[error("Symbol weights sum to zero")]
    ZeroTotalWeight,
    #[error("Board has no cells")]
    EmptyBoard,
    #[error("Symbol id {0} is not in the catalog")]
    UnknownSymbol(SymbolId),
}

pub type Result<T> = core::result::Result<T, GameError>;
