// Cross-module property and stress tests, kept in their own file the way
// the dilithium_test module held the signature scheme's end-to-end tests.
//
// Grounded on `examples/original_source/dilithium-256/hardware_code/ntt2x2_test.cpp`
// (`srand`/`TESTS` loop, scenario S5) for the stress test, and spec.md §8's
// remaining concrete scenarios S2-S4 not already covered next to the
// component they exercise.

#[cfg(test)]
mod tests {
    use crate::ntt_engine::{fwdntt, invntt};
    use crate::ntt_oracle;
    use crate::ntt_params::{N, Q};
    use crate::ntt_ram::{BankedRam, Mapping, Poly};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn poly_strategy() -> impl Strategy<Value = Poly> {
        proptest::collection::vec(0..Q, N).prop_map(|v| Poly::from_slice(&v).unwrap())
    }

    proptest! {
        #[test]
        fn round_trip_holds_for_arbitrary_polynomials(poly in poly_strategy()) {
            let mut ram = BankedRam::reshape(&poly);
            fwdntt(&mut ram, Mapping::Natural);
            invntt(&mut ram, Mapping::AfterNtt);
            prop_assert!(ram.compare(&poly, Mapping::Natural));
        }

        #[test]
        fn forward_matches_scalar_oracle_for_arbitrary_polynomials(poly in poly_strategy()) {
            let mut ram = BankedRam::reshape(&poly);
            fwdntt(&mut ram, Mapping::Natural);

            let mut scalar = poly;
            ntt_oracle::ntt(&mut scalar.coeffs);
            prop_assert!(ram.compare(&scalar, Mapping::AfterNtt));
        }
    }

    #[test]
    fn scenario_s2_ntt_of_x_round_trips() {
        let mut poly = Poly::default();
        poly.coeffs[1] = 1;
        let mut ram = BankedRam::reshape(&poly);
        fwdntt(&mut ram, Mapping::Natural);
        invntt(&mut ram, Mapping::AfterNtt);
        assert!(ram.compare(&poly, Mapping::Natural));
    }

    #[test]
    fn scenario_s3_convolution_with_scaled_self() {
        let mut a = Poly::default();
        for (i, c) in a.coeffs.iter_mut().enumerate() {
            *c = (i as u32 * 7 + 11) % Q;
        }
        let mut b = a;
        for c in b.coeffs.iter_mut() {
            *c = (*c as u64 * 31 % Q as u64) as u32;
        }

        let mut ram_a = BankedRam::reshape(&a);
        fwdntt(&mut ram_a, Mapping::Natural);
        let mut ram_b = BankedRam::reshape(&b);
        fwdntt(&mut ram_b, Mapping::Natural);
        crate::ntt_engine::mul(&mut ram_a, &ram_b, Mapping::Natural);
        invntt(&mut ram_a, Mapping::AfterNtt);

        let mut expected_a = a;
        ntt_oracle::ntt(&mut expected_a.coeffs);
        let mut expected_b = b;
        ntt_oracle::ntt(&mut expected_b.coeffs);
        let mut product = Poly::default();
        ntt_oracle::pointwise_barrett(&mut product.coeffs, &expected_a.coeffs, &expected_b.coeffs);
        ntt_oracle::invntt(&mut product.coeffs);

        assert!(ram_a.compare(&product, Mapping::Natural));
    }

    #[test]
    fn scenario_s4_round_trip_at_q_minus_one() {
        let poly = Poly::from_slice(&[Q - 1; N]).unwrap();
        let mut ram = BankedRam::reshape(&poly);
        fwdntt(&mut ram, Mapping::Natural);
        invntt(&mut ram, Mapping::AfterNtt);
        assert!(ram.compare(&poly, Mapping::Natural));
    }

    #[test]
    fn scenario_s5_seeded_stress_against_scalar_oracle() {
        let mut rng = StdRng::seed_from_u64(0xD111_7410);
        for _ in 0..1000 {
            let mut coeffs = [0u32; N];
            for c in coeffs.iter_mut() {
                *c = rng.gen_range(0..Q);
            }
            let poly = Poly { coeffs };

            let mut ram = BankedRam::reshape(&poly);
            fwdntt(&mut ram, Mapping::Natural);
            let mut scalar_fwd = poly;
            ntt_oracle::ntt(&mut scalar_fwd.coeffs);
            assert!(ram.compare(&scalar_fwd, Mapping::AfterNtt));

            let mut ram_inv = BankedRam::reshape(&poly);
            invntt(&mut ram_inv, Mapping::Natural);
            let mut scalar_inv = poly;
            ntt_oracle::invntt(&mut scalar_inv.coeffs);
            assert!(ram_inv.compare(&scalar_inv, Mapping::Natural));
        }
    }
}
