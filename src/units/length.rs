use serde::{Deserialize, Serialize};

/// 길이 단위. 챔버 치수의 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Inch,
    Foot,
}

fn unit_per_meter(unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => 1.0,
        LengthUnit::Centimeter => 100.0,
        LengthUnit::Millimeter => 1000.0,
        LengthUnit::Inch => 1.0 / 0.0254,
        LengthUnit::Foot => 1.0 / 0.3048,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value / unit_per_meter(from) * unit_per_meter(to)
}
