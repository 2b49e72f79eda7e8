use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareCentimeter,
    SquareFoot,
}

fn square_meter_per_unit(unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => 1.0,
        AreaUnit::SquareCentimeter => 1e-4,
        AreaUnit::SquareFoot => 0.092903,
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    value * square_meter_per_unit(from) / square_meter_per_unit(to)
}
