//! Errors for grid construction from raw bytes
#[cfg(doc)]
use crate::Grid;

/// Error for [`Grid::from_bytes`]. Some byte was above 9.
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries above 9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Grid::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// The slice held more or fewer than 81 bytes
    #[error("byte slice has length {0}, expected 81")]
    WrongLength(usize),
    /// The slice was the right length but some byte was above 9
    #[error(transparent)]
    FromBytesError(#[from] FromBytesError),
}
