use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    UnsupportedQuantity(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnsupportedQuantity(q) => write!(f, "지원하지 않는 물리량: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 물리량 이름 문자열을 해석한다.
pub fn parse_quantity(s: &str) -> Result<QuantityKind, ConversionError> {
    QuantityKind::parse(s).ok_or_else(|| ConversionError::UnsupportedQuantity(s.to_string()))
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `K`, `Pa`, `hPa`, `cm`, `L`, `umol/m2/s`, `ppm` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Flux => {
            let from = parse_flux_unit(from_unit_str)?;
            let to = parse_flux_unit(to_unit_str)?;
            Ok(convert_flux(value, from, to))
        }
        QuantityKind::MixingRatio => {
            let from = parse_mixing_ratio_unit(from_unit_str)?;
            let to = parse_mixing_ratio_unit(to_unit_str)?;
            Ok(convert_mixing_ratio(value, from, to))
        }
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "hpa" | "hectopascal" => Ok(PressureUnit::HectoPascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "bar" => Ok(PressureUnit::Bar),
        "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
        "atm" => Ok(PressureUnit::Atm),
        "mmhg" | "torr" => Ok(PressureUnit::MmHg),
        "psi" | "psia" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "cm" => Ok(LengthUnit::Centimeter),
        "mm" => Ok(LengthUnit::Millimeter),
        "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "cm2" | "cm^2" => Ok(AreaUnit::SquareCentimeter),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ml" | "milliliter" => Ok(VolumeUnit::Milliliter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_flux_unit(s: &str) -> Result<FluxUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "nmol/m2/s" | "nmol m-2 s-1" => Ok(FluxUnit::NanomolPerSquareMeterSecond),
        "umol/m2/s" | "µmol/m2/s" | "umol m-2 s-1" => {
            Ok(FluxUnit::MicromolPerSquareMeterSecond)
        }
        "mmol/m2/s" | "mmol m-2 s-1" => Ok(FluxUnit::MillimolPerSquareMeterSecond),
        "mmol/m2/d" | "mmol m-2 d-1" => Ok(FluxUnit::MillimolPerSquareMeterDay),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_mixing_ratio_unit(s: &str) -> Result<MixingRatioUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "ppb" => Ok(MixingRatioUnit::Ppb),
        "ppm" => Ok(MixingRatioUnit::Ppm),
        "%" | "percent" => Ok(MixingRatioUnit::Percent),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
