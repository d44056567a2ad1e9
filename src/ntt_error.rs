use thiserror::Error;

use crate::ntt_params::{BRAM_DEPTH, N};

/// Errors raised at the crate's data-construction boundary.
///
/// The transform itself is total (every `BankedRam`/`Mode`/`Mapping` value
/// accepted by `fwdntt`/`invntt`/`mul` produces a defined result, per the
/// hardware model it reimplements); these only guard callers building a
/// `Poly`/`BankedRam` from a slice of the wrong length.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NttError {
    #[error("polynomial slice has {got} coefficients, expected {N}")]
    WrongPolyLen { got: usize },

    #[error("banked RAM slice has {got} rows, expected {BRAM_DEPTH}")]
    WrongRowCount { got: usize },
}
