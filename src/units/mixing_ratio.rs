use serde::{Deserialize, Serialize};

/// 몰 혼합비(센서 정확도) 단위. 내부 기준은 ppb 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixingRatioUnit {
    Ppb,
    Ppm,
    Percent,
}

fn ppb_per_unit(unit: MixingRatioUnit) -> f64 {
    match unit {
        MixingRatioUnit::Ppb => 1.0,
        MixingRatioUnit::Ppm => 1e3,
        MixingRatioUnit::Percent => 1e7,
    }
}

/// 혼합비를 변환한다.
pub fn convert_mixing_ratio(value: f64, from: MixingRatioUnit, to: MixingRatioUnit) -> f64 {
    value * ppb_per_unit(from) / ppb_per_unit(to)
}
