//! Crate-level error type.

use thiserror::Error;

use crate::decode::LoadError;
use crate::grid::GridError;

/// Any failure of a load-then-encode conversion.
#[derive(Debug, Error)]
pub enum Error {
    /// The source image could not be turned into a pixel grid.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The pixel grid does not match its declared dimensions.
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl Error {
    /// Bad user input: zero dimensions or an unreadable source.
    ///
    /// The caller can report these and retry with corrected input.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Load(_) | Error::Grid(GridError::InvalidDimensions { .. })
        )
    }

    /// A grid whose length disagrees with its dimensions; a wiring bug rather than bad input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Error::Grid(GridError::InvalidGrid { .. }))
    }
}

/// Result type alias for imgasm operations.
pub type Result<T> = std::result::Result<T, Error>;
