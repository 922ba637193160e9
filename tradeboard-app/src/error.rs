use crate::ListingError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("No item is selected")]
    NoItemSelected,
    #[error("No item named {0:?} in the catalog")]
    UnknownItem(String),
    #[error(transparent)]
    Listing(#[from] ListingError),
}

pub type AppResult<T> = Result<T, AppError>;
