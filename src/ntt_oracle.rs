// Scalar reference transform: the textbook Cooley-Tukey / Gentleman-Sande
// NTT over the same flat zeta table the hardware ROM is built from. Used
// only as a test oracle; the engine never calls into this module.
//
// Grounded on `examples/original_source/dilithium-256/reference_code/ref_ntt.cpp`
// (`ntt`, `invntt`, `pointwise_barrett`).

use crate::ntt_arith as arith;
use crate::ntt_params::{N, N_INV, Q};
use crate::ntt_twiddle::zetas_barrett;

/// In-place forward NTT, natural order in, bit-reversed order out.
pub fn ntt(a: &mut [u32; N]) {
    let mut k = 0usize;
    let mut len = N / 2;
    while len > 0 {
        let mut start = 0usize;
        while start < N {
            k += 1;
            let zeta = zetas_barrett(k);
            let mut j = start;
            while j < start + len {
                let t = arith::mul(zeta, a[j + len]);
                a[j + len] = arith::sub(a[j], t);
                a[j] = arith::add(a[j], t);
                j += 1;
            }
            start = j;
        }
        len >>= 1;
    }
}

/// In-place inverse NTT, scaled by `N^-1 mod Q`.
pub fn invntt(a: &mut [u32; N]) {
    let mut k = N;
    let mut len = 1usize;
    while len < N {
        let mut start = 0usize;
        while start < N {
            k -= 1;
            let zeta = arith::sub(0, zetas_barrett(k));
            let mut j = start;
            while j < start + len {
                let t = a[j];
                a[j] = arith::add(t, a[j + len]);
                let w = arith::sub(t, a[j + len]);
                a[j + len] = arith::mul(zeta, w);
                j += 1;
            }
            start = j;
        }
        len <<= 1;
    }

    for x in a.iter_mut() {
        *x = arith::mul(N_INV, *x);
    }
}

/// Coefficient-wise product modulo `Q`.
pub fn pointwise_barrett(c: &mut [u32; N], a: &[u32; N], b: &[u32; N]) {
    for i in 0..N {
        c[i] = arith::mul(a[i], b[i]);
    }
}
