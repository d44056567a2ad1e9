// The radix-4 "circuit": two scalar butterflies, a cross-lane remap,
// then two more scalar butterflies.
//
// Grounded on
// `examples/original_source/dilithium-256/hardware_code/butterfly_unit.h`
// (`butterfly<T2,T>` and `buttefly_circuit<T2,T>`), ported field-for-field
// rather than re-derived from the spec prose, since the MUL-mode lane
// wiring there is subtler than it first looks (see the
// `mul_mode_wiring_matches_traced_circuit` test below: the bare circuit
// is a lane-shuffled product, not a pointwise one — `ntt_engine::mul`
// pre-permutes its twiddle row to cancel the shuffle).

use crate::ntt_arith as arith;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Forward,
    Inverse,
    Mul,
}

/// One scalar butterfly: `(aj, ajlen) -> (bj, bjlen)` under `mode` with
/// twiddle `zeta`.
#[inline]
fn butterfly(mode: Mode, zeta: u32, aj: u32, ajlen: u32) -> (u32, u32) {
    let (aj2, ajlen2) = match mode {
        Mode::Inverse => (arith::add(aj, ajlen), arith::sub(ajlen, aj)),
        Mode::Forward | Mode::Mul => (aj, ajlen),
    };

    let ajlen3 = arith::mul(zeta, ajlen2);
    let aj3 = aj2;

    let (aj4, ajlen4) = match mode {
        Mode::Forward => (arith::add(aj3, ajlen3), arith::sub(aj3, ajlen3)),
        Mode::Inverse | Mode::Mul => (aj3, ajlen3),
    };

    match mode {
        Mode::Inverse => (arith::halve(aj4), arith::halve(ajlen4)),
        Mode::Forward | Mode::Mul => (aj4, ajlen4),
    }
}

/// `in[4]`, `w[4]`, `mode` -> `out[4]`.
///
/// Two scalar butterflies, a cross-lane remap into "outer/inner pair"
/// form, then two more scalar butterflies. The remap and final lane
/// assembly both depend on `mode`: NTT/INVNTT pass the second pair of
/// stage-1 outputs straight through to stage 2; MUL instead duplicates
/// lane `a1` (resp. `c1`) into the second pair and stashes the originals
/// (`save_b`, `save_d`) to reinsert at the end, multiplying each input by
/// a twiddle lane rather than accumulating a butterfly sum — but the
/// lane each input lands on is shuffled (`out = [w[2]·in[0], w[0]·in[1],
/// w[3]·in[2], w[1]·in[3]]`), not the identity pairing `in[k]·w[k]`.
/// `ntt_engine::mul` pre-permutes its twiddle row to straighten this out
/// into a true pointwise product.
pub fn butterfly2x2(input: [u32; 4], w: [u32; 4], mode: Mode) -> [u32; 4] {
    let [a0, b0, c0, d0] = input;
    let [w1, w2, w3, w4] = w;

    let (a1, b1) = butterfly(mode, w1, a0, b0);
    let (c1, d1) = butterfly(mode, w2, c0, d0);

    let save_b = b1;
    let save_d = d1;

    let a2 = a1;
    let c2 = b1;
    let (b2, d2) = match mode {
        Mode::Mul => (a1, c1),
        Mode::Forward | Mode::Inverse => (c1, d1),
    };

    let (a3, b3) = butterfly(mode, w3, a2, b2);
    let (c3, d3) = butterfly(mode, w4, c2, d2);

    match mode {
        Mode::Mul => [b3, save_b, d3, save_d],
        Mode::Forward | Mode::Inverse => [a3, b3, c3, d3],
    }
}
