//! Nickerson(2016) MDF 식과 역산식 회귀 테스트.
use std::f64::consts::PI;

use flux_chamber_toolbox::chamber::{
    compute_mdf, compute_minimal_ratio, mdf_nickerson2016, mdf_nickerson2016_minimal_height,
    MdfError, MdfInput, MinimalRatioInput,
};
use proptest::prelude::*;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(f64::MIN_POSITIVE);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {rel_tol})"
    );
}

#[test]
fn reference_chamber_20cm() {
    // d = 0.2 m, h = 0.2 m, 바닥 원면적 기준, 101325 Pa, 298.15 K
    let v = PI * 0.2_f64.powi(2) / 4.0 * 0.2;
    let a = PI * 0.2_f64.powi(2) / 4.0;
    let mdf = mdf_nickerson2016(30_000.0, 120.0, 1.0, v, a, 101_325.0, 298.15);
    assert_close("mdf", mdf, 186.574_016_027_803_25, 1e-9);
}

#[test]
fn minimal_ratio_reference_scenario() {
    // 목표 MDF 250 (= 500 × 50 %), 100 kPa, 280 K
    let ratio = mdf_nickerson2016_minimal_height(250.0, 30_000.0, 120.0, 1.0, 100_000.0, 280.0, 0.25);
    assert_close("V/A", ratio, 0.255_010_859_213_485_26, 1e-9);
}

#[test]
fn zero_closure_time_is_infinite() {
    let mdf = mdf_nickerson2016(30_000.0, 0.0, 1.0, 0.006, 0.03, 101_325.0, 298.15);
    assert!(mdf.is_infinite() && mdf > 0.0, "got {mdf}");
}

#[test]
fn zero_denominators_propagate_non_finite_values() {
    let zero_freq = mdf_nickerson2016(30_000.0, 120.0, 0.0, 0.006, 0.03, 101_325.0, 298.15);
    let zero_area = mdf_nickerson2016(30_000.0, 120.0, 1.0, 0.006, 0.0, 101_325.0, 298.15);
    let zero_temp = mdf_nickerson2016(30_000.0, 120.0, 1.0, 0.006, 0.03, 101_325.0, 0.0);
    assert!(zero_freq.is_infinite());
    assert!(zero_area.is_infinite());
    assert!(zero_temp.is_infinite());
    // 0/0
    let nan = mdf_nickerson2016(0.0, 0.0, 1.0, 0.006, 0.03, 101_325.0, 298.15);
    assert!(nan.is_nan());
    let ratio = mdf_nickerson2016_minimal_height(250.0, 30_000.0, 120.0, 1.0, 0.0, 280.0, 0.25);
    assert!(ratio.is_infinite());
}

#[test]
fn validated_mdf_rejects_zero_closure_time() {
    let err = compute_mdf(MdfInput {
        accuracy_ppb: 30_000.0,
        closure_time_s: 0.0,
        frequency_hz: 1.0,
        volume_m3: 0.006,
        area_m2: 0.03,
        pressure_pa: 101_325.0,
        temperature_k: 298.15,
    })
    .unwrap_err();
    assert!(matches!(err, MdfError::InvalidInput(_)));
}

#[test]
fn validated_ratio_matches_raw_formula() {
    let ratio = compute_minimal_ratio(MinimalRatioInput {
        target_mdf: 250.0,
        accuracy_ppb: 30_000.0,
        closure_time_s: 120.0,
        frequency_hz: 1.0,
        pressure_pa: 100_000.0,
        temperature_k: 280.0,
    })
    .expect("valid input");
    let raw = mdf_nickerson2016_minimal_height(250.0, 30_000.0, 120.0, 1.0, 100_000.0, 280.0, 0.0);
    assert_eq!(ratio, raw);
    assert!(compute_minimal_ratio(MinimalRatioInput {
        target_mdf: -1.0,
        accuracy_ppb: 30_000.0,
        closure_time_s: 120.0,
        frequency_hz: 1.0,
        pressure_pa: 100_000.0,
        temperature_k: 280.0,
    })
    .is_err());
}

fn positive(lo: f64, hi: f64) -> impl Strategy<Value = f64> {
    lo..hi
}

proptest! {
    #[test]
    fn mdf_is_positive_finite_and_scales(
        aa in positive(1.0, 1e5),
        tc in positive(1.0, 3600.0),
        freq in positive(0.01, 20.0),
        v in positive(1e-4, 1.0),
        a in positive(1e-3, 1.0),
        p in positive(5e4, 1.2e5),
        t in positive(230.0, 330.0),
    ) {
        let base = mdf_nickerson2016(aa, tc, freq, v, a, p, t);
        prop_assert!(base.is_finite() && base > 0.0);
        approx::assert_relative_eq!(mdf_nickerson2016(2.0 * aa, tc, freq, v, a, p, t), 2.0 * base, max_relative = 1e-12);
        approx::assert_relative_eq!(mdf_nickerson2016(aa, tc, freq, 3.0 * v, a, p, t), 3.0 * base, max_relative = 1e-12);
        approx::assert_relative_eq!(mdf_nickerson2016(aa, tc, freq, v, 2.0 * a, p, t), base / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn inverse_recovers_mdf(
        m in positive(1.0, 1e4),
        aa in positive(1.0, 1e5),
        tc in positive(1.0, 3600.0),
        freq in positive(0.01, 20.0),
        p in positive(5e4, 1.2e5),
        t in positive(230.0, 330.0),
        area in positive(1e-3, 10.0),
    ) {
        let v_a = mdf_nickerson2016_minimal_height(m, aa, tc, freq, p, t, 0.25);
        let back = mdf_nickerson2016(aa, tc, freq, v_a * area, area, p, t);
        approx::assert_relative_eq!(back, m, max_relative = 1e-9);
    }
}
