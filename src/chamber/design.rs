use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::catalog::{self, DiameterOption};
use super::geometry::{self, ChamberGeometry};
use super::mdf::{mdf_nickerson2016, mdf_nickerson2016_minimal_height};

/// 기본 센서 주파수 [Hz]
pub const DEFAULT_SENSORS_FREQUENCY_HZ: f64 = 1.0;
/// 기본 센서 정확도 [ppb]
pub const DEFAULT_SENSORS_ACCURACY_PPB: f64 = 30.0 * 1000.0;
/// 기본 측정(폐쇄) 시간 [s]
pub const DEFAULT_MEASUREMENT_TIME_S: f64 = 120.0;
/// 기대 최소 플럭스에서 빼는 여유율 [%]
pub const DEFAULT_TOLERANCE_FLUX_PCT: f64 = 50.0;

/// 챔버 설계 설정 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignError {
    /// min > max 이거나 값이 유한하지 않은 범위
    InvalidRange {
        quantity: &'static str,
        min: f64,
        max: f64,
    },
    /// 0 이하 값
    NonPositive(&'static str),
    /// 여유율은 0 이상 100 미만이어야 한다
    InvalidTolerance(f64),
}

impl std::fmt::Display for DesignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignError::InvalidRange { quantity, min, max } => {
                write!(f, "{quantity} 범위가 잘못되었습니다: ({min}, {max})")
            }
            DesignError::NonPositive(name) => write!(f, "{name} 값은 0보다 커야 합니다."),
            DesignError::InvalidTolerance(v) => {
                write!(f, "여유율은 0 이상 100 미만이어야 합니다: {v}")
            }
        }
    }
}

impl std::error::Error for DesignError {}

/// (최소, 최대) 값 범위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn check_positive(&self, quantity: &'static str) -> Result<(), DesignError> {
        let finite = self.min.is_finite() && self.max.is_finite();
        if !finite || self.min > self.max {
            return Err(DesignError::InvalidRange {
                quantity,
                min: self.min,
                max: self.max,
            });
        }
        if self.min <= 0.0 {
            return Err(DesignError::NonPositive(quantity));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for ValueRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl From<ValueRange> for (f64, f64) {
    fn from(r: ValueRange) -> Self {
        (r.min, r.max)
    }
}

/// 가스 센서 특성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSpec {
    /// 측정 주파수 [Hz]
    pub frequency_hz: f64,
    /// 분석 정확도 [ppb]
    pub accuracy_ppb: f64,
}

impl Default for SensorSpec {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_SENSORS_FREQUENCY_HZ,
            accuracy_ppb: DEFAULT_SENSORS_ACCURACY_PPB,
        }
    }
}

/// 특정 직경에 대한 설계 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamberRecommendation {
    pub diameter_m: f64,
    /// 여유율을 적용한 목표 MDF [nmol m-2 s-1]
    pub target_mdf: f64,
    /// 목표 MDF를 만족하는 V/A [m]. 바닥 원면적 기준이면 최대 높이와 같다.
    pub volume_area_ratio_m: f64,
    /// 면적/둘레 비 [cm]
    pub ratio_area_perimeter_cm: f64,
}

impl std::fmt::Display for ChamberRecommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Minimal height of the chamber:")?;
        writeln!(f, "height <= {:.2} m", self.volume_area_ratio_m)?;
        write!(f, "ratio:\t{} cm", self.ratio_area_perimeter_cm)
    }
}

/// 기대 플럭스/환경 범위와 센서 특성으로 챔버 치수를 산정한다.
///
/// 생성 후에는 값을 바꾸지 않는다. 형상은 호출마다 직경으로 전달한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ChamberDesign {
    expected_flux: ValueRange,
    temperature: ValueRange,
    pressure: ValueRange,
    sensors: SensorSpec,
    measurement_time_s: f64,
    tolerance_flux_pct: f64,
}

impl ChamberDesign {
    /// 기대 플럭스 [nmol m-2 s-1], 온도 [K], 압력 [Pa] 범위(최소, 최대)로 설계를 만든다.
    /// 센서/측정 시간은 기본값(1 Hz, 30000 ppb, 120 s)을 쓴다. 값 검증은 하지 않는다.
    pub fn new(
        expected_flux_range: impl Into<ValueRange>,
        temperature_range: impl Into<ValueRange>,
        pressure_range: impl Into<ValueRange>,
    ) -> Self {
        Self {
            expected_flux: expected_flux_range.into(),
            temperature: temperature_range.into(),
            pressure: pressure_range.into(),
            sensors: SensorSpec::default(),
            measurement_time_s: DEFAULT_MEASUREMENT_TIME_S,
            tolerance_flux_pct: DEFAULT_TOLERANCE_FLUX_PCT,
        }
    }

    /// [`ChamberDesign::new`] 후 [`ChamberDesign::validate`]를 수행한다.
    pub fn try_new(
        expected_flux_range: impl Into<ValueRange>,
        temperature_range: impl Into<ValueRange>,
        pressure_range: impl Into<ValueRange>,
    ) -> Result<Self, DesignError> {
        let design = Self::new(expected_flux_range, temperature_range, pressure_range);
        design.validate()?;
        Ok(design)
    }

    pub fn with_sensors(mut self, sensors: SensorSpec) -> Self {
        self.sensors = sensors;
        self
    }

    pub fn with_measurement_time(mut self, measurement_time_s: f64) -> Self {
        self.measurement_time_s = measurement_time_s;
        self
    }

    pub fn with_tolerance_flux(mut self, tolerance_flux_pct: f64) -> Self {
        self.tolerance_flux_pct = tolerance_flux_pct;
        self
    }

    pub fn expected_flux(&self) -> ValueRange {
        self.expected_flux
    }

    pub fn temperature(&self) -> ValueRange {
        self.temperature
    }

    pub fn pressure(&self) -> ValueRange {
        self.pressure
    }

    pub fn sensors(&self) -> SensorSpec {
        self.sensors
    }

    pub fn measurement_time_s(&self) -> f64 {
        self.measurement_time_s
    }

    pub fn tolerance_flux_pct(&self) -> f64 {
        self.tolerance_flux_pct
    }

    /// 모든 범위와 값이 물리적으로 유효한지 검사한다.
    pub fn validate(&self) -> Result<(), DesignError> {
        self.expected_flux.check_positive("expected flux")?;
        self.temperature.check_positive("temperature")?;
        self.pressure.check_positive("pressure")?;
        if !(self.sensors.frequency_hz.is_finite() && self.sensors.frequency_hz > 0.0) {
            return Err(DesignError::NonPositive("sensors frequency"));
        }
        if !(self.sensors.accuracy_ppb.is_finite() && self.sensors.accuracy_ppb > 0.0) {
            return Err(DesignError::NonPositive("sensors accuracy"));
        }
        if !(self.measurement_time_s.is_finite() && self.measurement_time_s > 0.0) {
            return Err(DesignError::NonPositive("measurement time"));
        }
        if !(0.0..100.0).contains(&self.tolerance_flux_pct) {
            return Err(DesignError::InvalidTolerance(self.tolerance_flux_pct));
        }
        Ok(())
    }

    /// 기대 최소 플럭스에서 여유율을 뺀 목표 MDF.
    pub fn target_mdf(&self) -> f64 {
        self.expected_flux.min * (1.0 - self.tolerance_flux_pct / 100.0)
    }

    /// 직경에 대한 설계 결과를 계산한다.
    ///
    /// 최저 압력·최저 온도를 쓴다. V/A ∝ T/P 이므로 최저 압력은 V/A를 키우지만
    /// 최저 온도는 V/A를 줄인다. 두 값이 같은 방향의 극값이 아니므로 최저 온도는
    /// 최대 V/A 기준의 보수적 선택이 아니다(최고 온도가 더 큰 V/A를 준다).
    /// 설정이 유효하지 않아도 계산은 그대로 수행하고 경고만 남긴다.
    pub fn recommend(&self, diameter: f64) -> ChamberRecommendation {
        if let Err(err) = self.validate() {
            warn!(%err, "evaluating chamber design with invalid configuration");
        }
        let target_mdf = self.target_mdf();
        let volume_area_ratio_m = mdf_nickerson2016_minimal_height(
            target_mdf,
            self.sensors.accuracy_ppb,
            self.measurement_time_s,
            self.sensors.frequency_hz,
            self.pressure.min,
            self.temperature.min,
            diameter,
        );
        let rec = ChamberRecommendation {
            diameter_m: diameter,
            target_mdf,
            volume_area_ratio_m,
            ratio_area_perimeter_cm: self.ratio_area_perimeter(diameter),
        };
        debug!(?rec, "chamber recommendation");
        rec
    }

    /// 최소 높이 결과를 표준 출력에 쓴다.
    pub fn minimal_height(&self, diameter: f64) {
        println!("{}", self.recommend(diameter));
    }

    /// 최소 높이 결과를 주어진 writer에 쓴다.
    pub fn write_report<W: Write>(&self, diameter: f64, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.recommend(diameter))
    }

    /// 직경[m]의 면적/둘레 비[cm].
    pub fn ratio_area_perimeter(&self, diameter: f64) -> f64 {
        geometry::ratio_area_perimeter(diameter)
    }

    pub fn diameter_options(&self) -> Vec<DiameterOption> {
        catalog::diameter_options()
    }

    /// 규격 직경마다 내경 기준으로 설계 결과를 계산한다.
    pub fn evaluate_catalog(&self) -> Vec<(DiameterOption, ChamberRecommendation)> {
        self.diameter_options()
            .into_iter()
            .map(|opt| (opt, self.recommend(opt.inner_m)))
            .collect()
    }

    /// 주어진 챔버의 최악 조건 MDF [nmol m-2 s-1].
    ///
    /// MDF ∝ P/T 이므로 최고 압력·최저 온도를 쓴다. 면적은 바닥 원면적 기준.
    pub fn detectable_flux(&self, geometry: &ChamberGeometry) -> f64 {
        let mdf = mdf_nickerson2016(
            self.sensors.accuracy_ppb,
            self.measurement_time_s,
            self.sensors.frequency_hz,
            geometry.volume_m3(),
            geometry.footprint_area_m2(),
            self.pressure.max,
            self.temperature.min,
        );
        debug!(mdf, ?geometry, "worst-case detectable flux");
        mdf
    }

    /// 최악 조건 MDF가 목표 MDF 이하이면 true.
    pub fn is_adequate(&self, geometry: &ChamberGeometry) -> bool {
        self.detectable_flux(geometry) <= self.target_mdf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> ChamberDesign {
        ChamberDesign::new((500.0, 8000.0), (280.0, 300.0), (100_000.0, 110_000.0))
    }

    #[test]
    fn report_uses_fixed_phrasing() {
        let mut buf = Vec::new();
        example().write_report(0.25, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Minimal height of the chamber:\nheight <= 0.26 m\nratio:\t6.25 cm\n"
        );
    }

    #[test]
    fn tolerance_outside_range_is_rejected() {
        let err = example().with_tolerance_flux(100.0).validate().unwrap_err();
        assert_eq!(err, DesignError::InvalidTolerance(100.0));
    }

    #[test]
    fn swapped_range_is_rejected() {
        let err = ChamberDesign::try_new((8000.0, 500.0), (280.0, 300.0), (1e5, 1.1e5))
            .unwrap_err();
        assert!(matches!(
            err,
            DesignError::InvalidRange {
                quantity: "expected flux",
                ..
            }
        ));
    }
}
