// The three public transforms: forward NTT, inverse NTT, and pointwise
// multiplication, each a tick-by-tick walk over a `BankedRam` rather than
// a pipelined hardware loop.
//
// Grounded on `examples/original_source/dilithium-256/hardware_code/ntt2x2_fwdntt.cpp`,
// `ntt2x2_invntt.cpp`, and `ntt2x2_mul.cpp`. Both transform drivers in the
// original carry a `mode` parameter and an `if (mode == FORWARD_NTT_MODE)
// ... else ...` branch left over from sharing one dispatcher; each file is
// only ever invoked with the mode its name promises, so only the live
// branch is ported here (see SPEC_FULL.md §9 and DESIGN.md).

use crate::ntt_butterfly::{butterfly2x2, Mode};
use crate::ntt_fifo::{CoeffFifoBank, Fifo, Pipo};
use crate::ntt_params::{BRAM_DEPTH, DEPTH_I, DEPTH_W, LOGN};
use crate::ntt_ram::{BankedRam, Mapping};
use crate::ntt_twiddle::get_twiddle_factors;

/// Step pattern for `k` as the forward pass walks two NTT layers per
/// outer iteration: `fw_ntt_pattern[l >> 1]` in the original, indexed by
/// `l in {0, 2, 4, 6}`.
const FW_NTT_PATTERN: [u32; 4] = [4, 2, 0, 4];

/// In-place forward NTT (natural order in, bit-reversed-ish layout out,
/// per `mapping`). Four layers of radix-4 groups (8 radix-2 layers total).
#[tracing::instrument(level = "debug", skip(ram))]
pub fn fwdntt(ram: &mut BankedRam, mapping: Mapping) {
    let mut fifo_i: Fifo<DEPTH_W> = Fifo::default();
    let mut fifo_w: Pipo<DEPTH_W> = Pipo::default();
    let mut coeff_fifo = CoeffFifoBank::default();

    let mut count: u32 = 0;
    let mut write_en = false;

    let mut l = 0u32;
    while l < LOGN {
        let mut k: u32 = 0;
        let mut j: u32 = 0;
        for i in 0..BRAM_DEPTH as u32 {
            if i == 0 {
                k = 0;
                j = 0;
            }

            let addr = (k + j) as usize;
            let ram_i = mapping.resolve(addr);
            let data_in = ram.read_row(ram_i);

            let data_fifo = coeff_fifo.read_write(Mode::Forward, data_in, [0; 4], count);
            count = (count + 1) & 3;

            let w_in = get_twiddle_factors(i as usize, l, Mode::Forward);

            let fi = fifo_i.push(ram_i as u32) as usize;
            let w_out = fifo_w.push(w_in);

            let data_out = butterfly2x2(data_fifo, w_out, Mode::Forward);

            if count == 0 && i != 0 {
                write_en = true;
            }
            if write_en {
                ram.write_row(fi, data_out);
            }

            let s = FW_NTT_PATTERN[(l >> 1) as usize];
            if k + (1 << s) < BRAM_DEPTH as u32 {
                k += 1 << s;
            } else {
                k = 0;
                j += 1;
            }
        }
        l += 2;
    }

    for _ in 0..DEPTH_W {
        let data_in = coeff_fifo.read_write(Mode::Forward, [0; 4], [0; 4], count);
        let fi = fifo_i.push(0) as usize;
        let w_out = fifo_w.push([0; 4]);
        let data_out = butterfly2x2(data_in, w_out, Mode::Forward);
        ram.write_row(fi, data_out);
    }
}

/// In-place inverse NTT. Layers walked coarse-to-fine (`l` doubles as the
/// radix-2 layer step directly, no pattern table — the forward pattern
/// branch in the original driver is unreachable when `mode` is fixed to
/// inverse, see module doc). `mapping` governs how input rows are read;
/// the result is always left in NATURAL layout.
#[tracing::instrument(level = "debug", skip(ram))]
pub fn invntt(ram: &mut BankedRam, mapping: Mapping) {
    let mut fifo_i: Fifo<DEPTH_I> = Fifo::default();
    let mut coeff_fifo = CoeffFifoBank::default();

    let mut count: u32 = 0;
    let mut write_en = false;

    let mut l = 0u32;
    while l < LOGN {
        let mut k: u32 = 0;
        let mut j: u32 = 0;
        for i in 0..BRAM_DEPTH as u32 {
            if i == 0 {
                k = 0;
                j = 0;
            }

            let addr = (k + j) as usize;
            let ram_i = mapping.resolve(addr);
            let data_in = ram.read_row(ram_i);

            let w_in = get_twiddle_factors(i as usize, l, Mode::Inverse);
            let data_out = butterfly2x2(data_in, w_in, Mode::Inverse);

            let fi = fifo_i.push(ram_i as u32) as usize;

            count = (count + 1) & 3;
            let data_fifo = coeff_fifo.read_write(Mode::Inverse, [0; 4], data_out, count);

            if count == 0 && i != 0 {
                write_en = true;
            }
            if write_en {
                ram.write_row(fi, data_fifo);
            }

            let s = l;
            if k + (1 << s) < BRAM_DEPTH as u32 {
                k += 1 << s;
            } else {
                k = 0;
                j += 1;
            }
        }
        l += 2;
    }

    for _ in 0..DEPTH_I {
        let fi = fifo_i.push(0) as usize;
        count = (count + 1) & 3;
        let data_fifo = coeff_fifo.read_write(Mode::Inverse, [0; 4], [0; 4], count);
        ram.write_row(fi, data_fifo);
    }
}

/// In-place pointwise product `ram *= mul_ram` (both read under
/// `mapping`; `mul_ram` is additionally lane-rotated to line up with the
/// butterfly circuit's MUL-mode wiring).
#[tracing::instrument(level = "debug", skip(ram, mul_ram))]
pub fn mul(ram: &mut BankedRam, mul_ram: &BankedRam, mapping: Mapping) {
    for l in 0..BRAM_DEPTH {
        let ram_i = mapping.resolve(l);
        let data_in = ram.read_row(ram_i);
        let w_in = mul_ram.read_row(l);
        let w_out = [w_in[1], w_in[3], w_in[0], w_in[2]];

        let data_out = butterfly2x2(data_in, w_out, Mode::Mul);
        ram.write_row(ram_i, data_out);
    }
}
