use std::io;

use data_error::DataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    DataError(#[from] DataError),
}
