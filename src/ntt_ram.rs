// Banked RAM (4 lanes x BRAM_DEPTH) and the row-address permutations that
// encode which layout (natural, post-NTT, pre-INVNTT) the RAM currently
// holds.
//
// Grounded on `examples/original_source/dilithium-256/hardware_code/ram_util.cpp`
// (`read_ram`/`write_ram`/`reshape`) and `address_encoder_decoder.cpp`
// (`resolve_address`). The teacher's `Poly`/`PolyVec` (`src/dilithium_poly.rs`)
// supplies the struct-with-plain-array, `Default`/`Debug`-by-hand style.

use core::fmt;

use crate::ntt_error::NttError;
use crate::ntt_params::{BRAM_DEPTH, N};

/// A length-N polynomial over Z_q, coefficients in `[0, Q)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Poly {
    pub coeffs: [u32; N],
}

impl Default for Poly {
    fn default() -> Self {
        Self { coeffs: [0u32; N] }
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poly")
            .field("coeffs[0..8]", &&self.coeffs[0..8])
            .finish()
    }
}

impl Poly {
    pub fn from_slice(s: &[u32]) -> Result<Self, NttError> {
        if s.len() != N {
            return Err(NttError::WrongPolyLen { got: s.len() });
        }
        let mut coeffs = [0u32; N];
        coeffs.copy_from_slice(s);
        Ok(Self { coeffs })
    }
}

/// Row-address permutation selecting which layout a `BankedRam` holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mapping {
    Natural,
    AfterNtt,
    AfterInvNtt,
}

impl Mapping {
    /// Resolve a row address under this mapping.
    ///
    /// `f = N / 16`. Branch-table over the three cases, constant-time in
    /// the sense that it never depends on the row's contents.
    #[inline]
    pub fn resolve(self, addr: usize) -> usize {
        let f = N / 16;
        match self {
            Mapping::AfterInvNtt => (addr % f) * 4 + addr / f,
            Mapping::AfterNtt => (addr % 4) * f + addr / 4,
            Mapping::Natural => addr,
        }
    }
}

/// A "4 lanes x BRAM_DEPTH" memory: one row holds the 4 coefficients that
/// flow through a radix-4 butterfly group together.
#[derive(Clone, Copy)]
pub struct BankedRam {
    rows: [[u32; 4]; BRAM_DEPTH],
}

impl Default for BankedRam {
    fn default() -> Self {
        Self {
            rows: [[0u32; 4]; BRAM_DEPTH],
        }
    }
}

impl fmt::Debug for BankedRam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BankedRam")
            .field("rows[0]", &self.rows[0])
            .finish()
    }
}

impl BankedRam {
    /// Build a `BankedRam` from `BRAM_DEPTH` explicit rows.
    pub fn from_rows(rows: &[[u32; 4]]) -> Result<Self, NttError> {
        if rows.len() != BRAM_DEPTH {
            return Err(NttError::WrongRowCount { got: rows.len() });
        }
        let mut out = Self::default();
        out.rows.copy_from_slice(rows);
        Ok(out)
    }

    #[inline]
    pub fn read_row(&self, r: usize) -> [u32; 4] {
        self.rows[r]
    }

    #[inline]
    pub fn write_row(&mut self, r: usize, v: [u32; 4]) {
        self.rows[r] = v;
    }

    /// Place `poly[4*r + j]` at `ram[r][j]`.
    pub fn reshape(poly: &Poly) -> Self {
        let mut ram = Self::default();
        for r in 0..BRAM_DEPTH {
            let mut row = [0u32; 4];
            row.copy_from_slice(&poly.coeffs[4 * r..4 * r + 4]);
            ram.write_row(r, row);
        }
        ram
    }

    /// Inverse of `reshape`.
    pub fn flatten(&self) -> Poly {
        let mut poly = Poly::default();
        for r in 0..BRAM_DEPTH {
            let row = self.read_row(r);
            poly.coeffs[4 * r..4 * r + 4].copy_from_slice(&row);
        }
        poly
    }

    /// Oracle check: true iff `self` read under `mapping` equals `poly`
    /// coefficient-wise modulo Q.
    pub fn compare(&self, poly: &Poly, mapping: Mapping) -> bool {
        for i in (0..N).step_by(4) {
            let addr = mapping.resolve(i / 4);
            let row = self.read_row(addr);
            for j in 0..4 {
                if row[j] % crate::ntt_params::Q != poly.coeffs[i + j] % crate::ntt_params::Q {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reshape_flatten_roundtrip() {
        let mut poly = Poly::default();
        for (i, c) in poly.coeffs.iter_mut().enumerate() {
            *c = i as u32;
        }
        let ram = BankedRam::reshape(&poly);
        assert_eq!(ram.read_row(0), [0, 1, 2, 3]);
        assert_eq!(ram.read_row(1), [4, 5, 6, 7]);
        assert_eq!(ram.flatten(), poly);
    }

    #[test]
    fn from_rows_matches_reshape() {
        let mut poly = Poly::default();
        for (i, c) in poly.coeffs.iter_mut().enumerate() {
            *c = i as u32;
        }
        let rows: Vec<[u32; 4]> = (0..BRAM_DEPTH)
            .map(|r| poly.coeffs[4 * r..4 * r + 4].try_into().unwrap())
            .collect();
        let ram = BankedRam::from_rows(&rows).unwrap();
        assert_eq!(ram.flatten(), poly);
    }

    #[test]
    fn from_rows_rejects_wrong_length() {
        let rows = vec![[0u32; 4]; BRAM_DEPTH - 1];
        assert_eq!(
            BankedRam::from_rows(&rows).unwrap_err(),
            NttError::WrongRowCount { got: BRAM_DEPTH - 1 }
        );
    }

    #[test]
    fn address_map_composition() {
        // resolve(AFTER_NTT, resolve(AFTER_INVNTT, x)) == x
        for x in 0..BRAM_DEPTH {
            let y = Mapping::AfterInvNtt.resolve(x);
            assert_eq!(Mapping::AfterNtt.resolve(y), x);
        }
    }

    #[test]
    fn address_map_concrete_scenarios() {
        assert_eq!(Mapping::AfterInvNtt.resolve(1), 4);
        assert_eq!(Mapping::AfterNtt.resolve(4), 1);
        assert_eq!(Mapping::Natural.resolve(37), 37);
    }
}
