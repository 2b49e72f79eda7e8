//! 예제 시나리오 기반 챔버 설계 테스트.
use approx::assert_relative_eq;
use flux_chamber_toolbox::chamber::{
    mdf_nickerson2016_minimal_height, ChamberDesign, ChamberGeometry, DesignError, SensorSpec,
};

fn example() -> ChamberDesign {
    ChamberDesign::new((500.0, 8000.0), (280.0, 300.0), (100_000.0, 110_000.0))
}

#[test]
fn defaults_follow_reference_sensor() {
    let design = example();
    assert_eq!(design.sensors().frequency_hz, 1.0);
    assert_eq!(design.sensors().accuracy_ppb, 30_000.0);
    assert_eq!(design.measurement_time_s(), 120.0);
    assert_eq!(design.tolerance_flux_pct(), 50.0);
    assert!(design.validate().is_ok());
}

#[test]
fn recommendation_uses_minimum_pressure_and_temperature() {
    let rec = example().recommend(0.25);
    assert_eq!(rec.target_mdf, 250.0);
    let expected = mdf_nickerson2016_minimal_height(250.0, 30_000.0, 120.0, 1.0, 100_000.0, 280.0, 0.25);
    assert_eq!(rec.volume_area_ratio_m, expected);
    assert_eq!(rec.ratio_area_perimeter_cm, 6.25);
    assert!(rec.volume_area_ratio_m.is_finite());
}

#[test]
fn ratio_grows_with_lower_pressure_and_shrinks_with_lower_temperature() {
    let rec = example().recommend(0.25);
    let ratio = |p: f64, t: f64| {
        mdf_nickerson2016_minimal_height(250.0, 30_000.0, 120.0, 1.0, p, t, 0.25)
    };
    // 최저 압력: 같은 온도에서 최고 압력보다 V/A가 크다
    assert!(rec.volume_area_ratio_m > ratio(110_000.0, 280.0));
    // 최저 온도: 같은 압력에서 최고 온도보다 V/A가 작다
    assert!(rec.volume_area_ratio_m < ratio(100_000.0, 300.0));
    assert_relative_eq!(
        ratio(100_000.0, 300.0) / rec.volume_area_ratio_m,
        300.0 / 280.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        rec.volume_area_ratio_m / ratio(110_000.0, 280.0),
        110_000.0 / 100_000.0,
        max_relative = 1e-12
    );
}

#[test]
fn report_text_has_fixed_phrasing() {
    let rec = example().recommend(0.25);
    assert_eq!(
        rec.to_string(),
        "Minimal height of the chamber:\nheight <= 0.26 m\nratio:\t6.25 cm"
    );
}

#[test]
fn custom_sensor_changes_target_ratio() {
    let precise = example().with_sensors(SensorSpec {
        frequency_hz: 1.0,
        accuracy_ppb: 15_000.0,
    });
    let base = example().recommend(0.25).volume_area_ratio_m;
    assert_relative_eq!(precise.recommend(0.25).volume_area_ratio_m, 2.0 * base, max_relative = 1e-12);
}

#[test]
fn invalid_scenarios_are_reported_not_hidden() {
    let err = ChamberDesign::try_new((500.0, 8000.0), (0.0, 300.0), (1e5, 1.1e5)).unwrap_err();
    assert_eq!(err, DesignError::NonPositive("temperature"));
    let err = example().with_measurement_time(0.0).validate().unwrap_err();
    assert_eq!(err, DesignError::NonPositive("measurement time"));

    // 검증하지 않는 경로는 값을 그대로 계산한다
    let raw = ChamberDesign::new((0.0, 8000.0), (280.0, 300.0), (1e5, 1.1e5)).recommend(0.25);
    assert_eq!(raw.volume_area_ratio_m, 0.0);
}

#[test]
fn catalog_is_evaluated_on_inner_diameter() {
    let design = example();
    let results = design.evaluate_catalog();
    assert_eq!(results.len(), 12);
    for (opt, rec) in &results {
        assert_eq!(rec.diameter_m, opt.inner_m);
        assert_relative_eq!(rec.ratio_area_perimeter_cm, opt.inner_m * 25.0, max_relative = 1e-12);
    }
    // V/A 는 직경과 무관하다
    let first = results[0].1.volume_area_ratio_m;
    assert!(results.iter().all(|(_, r)| r.volume_area_ratio_m == first));
}

#[test]
fn worst_case_detectable_flux_uses_maximum_pressure() {
    let design = example();
    let v_a = design.recommend(0.25).volume_area_ratio_m;

    // 최저 압력 기준 높이를 그대로 쓰면 최고 압력에서 목표를 넘는다
    let tall = ChamberGeometry::new(0.25, v_a).unwrap();
    assert_relative_eq!(design.detectable_flux(&tall), 250.0 * 1.1, max_relative = 1e-9);
    assert!(!design.is_adequate(&tall));

    let short = ChamberGeometry::new(0.25, 0.99 * v_a * 100_000.0 / 110_000.0).unwrap();
    assert!(design.is_adequate(&short));
}
