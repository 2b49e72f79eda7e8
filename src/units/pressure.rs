use serde::{Deserialize, Serialize};

/// 압력 단위. 챔버 계산에는 절대압만 쓰므로 내부 기준은 Pa(abs)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    HectoPascal,
    KiloPascal,
    Bar,
    MilliBar,
    Atm,
    MmHg,
    Psi,
}

const PA_PER_ATM: f64 = 101_325.0;

fn pascal_per_unit(unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => 1.0,
        PressureUnit::HectoPascal | PressureUnit::MilliBar => 100.0,
        PressureUnit::KiloPascal => 1000.0,
        PressureUnit::Bar => 100_000.0,
        PressureUnit::Atm => PA_PER_ATM,
        // 760 mmHg = 1 atm
        PressureUnit::MmHg => PA_PER_ATM / 760.0,
        PressureUnit::Psi => 6_894.757,
    }
}

/// 주어진 절대압을 Pa 로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    value * pascal_per_unit(unit)
}

/// 절대압을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    to_pascal(value, from) / pascal_per_unit(to)
}
