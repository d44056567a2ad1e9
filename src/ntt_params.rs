// Fixed parameters for the Dilithium ring R_q = Z_q[x] / (x^N + 1).
//
// These are the only sizes this core supports (spec Non-goal: no other
// N / q). Grounded on `examples/original_source/dilithium-256/params.h`-style
// constants referenced throughout `hardware_code/*.cpp`.

/// Ring degree.
pub const N: usize = 256;

/// Prime modulus.
pub const Q: u32 = 8_380_417;

/// log2(N).
pub const LOGN: u32 = 8;

/// Rows in the banked RAM: N / 4 lanes.
pub const BRAM_DEPTH: usize = 64;

/// N^-1 mod Q == 256^-1 mod 8_380_417.
pub const N_INV: u32 = 8_347_681;

/// Primitive 512th root of unity mod Q used to generate the zeta table.
pub(crate) const ZETA: u64 = 1753;

/// Number of distinct rows needed in the hardware twiddle ROM.
///
/// Derived from `bar(level) + (1 << level)` at `level = LOGN - 2 = 6`,
/// the largest group of radix-4 passes (see `ntt_twiddle::bar`).
pub const TWIDDLE_ROWS: usize = 85;

// FIFO depths. Fixed by the hardware design; do not change without
// re-deriving the writeback alignment in `ntt_engine`.
pub(crate) const DEPTH_I: usize = 3; // inverse-path index FIFO
pub(crate) const DEPTH_W: usize = 4; // forward-path index FIFO / twiddle PIPO
pub(crate) const DEPTH_A: usize = 4;
pub(crate) const DEPTH_B: usize = 6;
pub(crate) const DEPTH_C: usize = 5;
pub(crate) const DEPTH_D: usize = 7;
