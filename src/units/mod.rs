//! 챔버 설계에 쓰는 단위 정의 및 변환 모듈 모음.

pub mod area;
pub mod flux;
pub mod length;
pub mod mixing_ratio;
pub mod pressure;
pub mod temperature;
pub mod volume;

pub use area::{convert_area, AreaUnit};
pub use flux::{convert_flux, FluxUnit};
pub use length::{convert_length, LengthUnit};
pub use mixing_ratio::{convert_mixing_ratio, MixingRatioUnit};
pub use pressure::{convert_pressure, to_pascal, PressureUnit};
pub use temperature::{convert_temperature, to_kelvin, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit};
