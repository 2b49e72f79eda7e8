use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    Milliliter,
}

fn cubic_meter_per_unit(unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => 1.0,
        VolumeUnit::Liter => 1e-3,
        VolumeUnit::Milliliter => 1e-6,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    value * cubic_meter_per_unit(from) / cubic_meter_per_unit(to)
}
