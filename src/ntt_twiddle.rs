// Twiddle ROM: precomputed zetas plus the mode-aware indexer that feeds
// the radix-4 butterfly.
//
// Grounded on:
//  - `examples/original_source/dilithium-256/hardware_code/ram_util.cpp`
//    (`scale_twiddle` == `bar`, `get_twiddle_factors`), which is the
//    function actually wired into `ntt2x2_fwdntt`/`ntt2x2_invntt` (the
//    sibling `resolve_twiddle` in `address_encoder_decoder.cpp` is dead
//    code per spec Design Notes and is not ported).
//  - `examples/original_source/dilithium-256/reference_code/ref_ntt.cpp`,
//    which fixes the flat zeta ordering (`zetas_barrett[k]` consumed in
//    ascending `k` as the scalar NTT descends layer by layer).
//  - `examples/other_examples/8e03a313_RustCrypto-signatures__ml-dsa-src-ntt.rs.rs`
//    for the const-fn bit-reversal technique used to generate the flat
//    table at compile time instead of hand-transcribing 255 constants.

use crate::ntt_butterfly::Mode;
use crate::ntt_params::{BRAM_DEPTH, LOGN, Q, TWIDDLE_ROWS, ZETA};

const fn bitrev8(x: usize) -> usize {
    (x as u8).reverse_bits() as usize
}

/// `zetas_barrett[k]`, `k = 1..=255`, in the natural NTT order the scalar
/// reference algorithm consumes (`zetas_barrett[0]` is unused padding).
const ZETAS_BARRETT: [u32; 256] = {
    // Ascending powers of zeta mod Q.
    let mut pow = [0u32; 256];
    pow[0] = 1;
    let mut i = 1;
    let mut curr: u64 = 1;
    while i < 256 {
        curr = (curr * ZETA) % (Q as u64);
        pow[i] = curr as u32;
        i += 1;
    }

    // Permute by bitrev8; slot 0 stays 0 (never indexed: k starts at 1).
    let mut out = [0u32; 256];
    let mut i = 1;
    while i < 256 {
        out[i] = pow[bitrev8(i)];
        i += 1;
    }
    out
};

#[inline]
const fn zeta_at(layer: u32, j: usize) -> u32 {
    ZETAS_BARRETT[(1usize << layer) + j]
}

/// `zetas_barrett[k]`, exposed for the scalar reference oracle
/// (`ntt_oracle`), which consumes the same flat table the hardware ROM is
/// built from but walks it directly rather than through `bar`/`mask`.
pub(crate) fn zetas_barrett(k: usize) -> u32 {
    ZETAS_BARRETT[k]
}

/// `bar(L) = sum_{k=0}^{L/2-1} 4^k`, tabulated for the even `L` this core
/// ever calls it with (0, 2, 4, 6): `{0, 1, 5, 21}`.
#[inline]
const fn bar(level: u32) -> usize {
    const TABLE: [usize; 4] = [0, 1, 5, 21];
    TABLE[(level >> 1) as usize]
}

#[inline]
const fn mask(level: u32) -> usize {
    (1usize << level) - 1
}

/// The hardware twiddle ROM: one row per radix-4 group spanning two
/// adjacent NTT layers (`level`, `level + 1`).
///
/// `row[idx] = [ zeta(level, b), zeta(level+1, 2b), zeta(level+1, 2b+1), 0 ]`
/// for `idx = bar(level) + b`, `b in [0, 1 << level)`. Slot 3 is unused
/// padding so the ROM stays a plain rectangular array (see SPEC_FULL.md §3
/// for the derivation and the worked example that ties this to
/// `get_twiddle_factors`'s index selection below).
const ZETAS_BARRETT_HW: [[u32; 4]; TWIDDLE_ROWS] = {
    let mut rows = [[0u32; 4]; TWIDDLE_ROWS];
    let mut level = 0u32;
    while level < LOGN {
        let base = bar(level);
        let count = 1usize << level;
        let mut b = 0usize;
        while b < count {
            rows[base + b] = [
                zeta_at(level, b),
                zeta_at(level + 1, 2 * b),
                zeta_at(level + 1, 2 * b + 1),
                0,
            ];
            b += 1;
        }
        level += 2;
    }
    rows
};

/// `get_twiddle_factors(i, level, mode) -> (w1, w2, w3, w4)`.
///
/// FORWARD: stage-1 butterflies share one zeta (the coarser layer),
/// stage-2 butterflies each get their own (the finer layer).
/// INVERSE: the mirror image — stage-1 gets two distinct (finer-layer)
/// zetas, stage-2 shares one (coarser-layer).
///
/// Note there is no sign flip here: the original hardware source stores
/// (and this ROM reproduces) the *same* positive zetas for both
/// directions. The scalar reference oracle (`ntt_oracle.rs`) negates its
/// zeta explicitly for INVNTT (`zeta = -zetas_barrett[--k]`), but the
/// hardware butterfly instead swaps the stage-1 subtraction order
/// (`y - x` instead of `x - y`, see `ntt_butterfly.rs`), which cancels the
/// sign difference without ever negating the table. Both are valid
/// encodings of the same math; this port follows the hardware one since
/// that's the circuit this module's doc models.
pub fn get_twiddle_factors(i: usize, level: u32, mode: Mode) -> [u32; 4] {
    match mode {
        Mode::Forward => {
            let m = mask(level);
            let idx = bar(level) + (i & m);
            let row = ZETAS_BARRETT_HW[idx];
            [row[0], row[0], row[1], row[2]]
        }
        Mode::Inverse => {
            let lp = LOGN - 2 - level;
            let m = mask(lp);
            let idx = bar(lp) + ((BRAM_DEPTH - 1 - i) & m);
            let row = ZETAS_BARRETT_HW[idx];
            [row[2], row[1], row[0], row[0]]
        }
        Mode::Mul => {
            debug_assert!(false, "get_twiddle_factors is undefined for MUL_MODE");
            [0, 0, 0, 0]
        }
    }
}
