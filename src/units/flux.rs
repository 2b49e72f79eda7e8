use serde::{Deserialize, Serialize};

/// 몰 플럭스 단위. 내부 기준은 nmol m-2 s-1 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluxUnit {
    NanomolPerSquareMeterSecond,
    MicromolPerSquareMeterSecond,
    MillimolPerSquareMeterSecond,
    /// 일 단위 보고용 (mmol m-2 d-1)
    MillimolPerSquareMeterDay,
}

fn nmol_m2_s_per_unit(unit: FluxUnit) -> f64 {
    match unit {
        FluxUnit::NanomolPerSquareMeterSecond => 1.0,
        FluxUnit::MicromolPerSquareMeterSecond => 1e3,
        FluxUnit::MillimolPerSquareMeterSecond => 1e6,
        FluxUnit::MillimolPerSquareMeterDay => 1e6 / 86_400.0,
    }
}

/// 플럭스를 변환한다.
pub fn convert_flux(value: f64, from: FluxUnit, to: FluxUnit) -> f64 {
    value * nmol_m2_s_per_unit(from) / nmol_m2_s_per_unit(to)
}
