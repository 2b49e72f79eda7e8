use std::f64::consts::PI;

use crate::units::{convert_length, LengthUnit};

use super::mdf::MdfError;

/// 원통형 챔버의 체적[m3]과 면적[m2]을 계산한다.
///
/// 면적은 측면적(π·d·h)으로 계산한다. 플럭스 계산에서 통상 쓰는
/// 바닥 원면적(π·d²/4)은 [`ChamberGeometry::footprint_area_m2`]로 따로 제공한다.
pub fn chamber_properties(diameter: f64, height: f64) -> (f64, f64) {
    let volume = PI * diameter.powi(2) / 4.0 * height;
    let area = PI * diameter * height;
    (volume, area)
}

/// 원의 면적/둘레 비를 cm 단위로 반환한다. 입력 직경은 m 단위.
pub fn ratio_area_perimeter(diameter: f64) -> f64 {
    let diameter_cm = convert_length(diameter, LengthUnit::Meter, LengthUnit::Centimeter);
    let area = PI * diameter_cm.powi(2) / 4.0;
    let perimeter = PI * diameter_cm;
    area / perimeter
}

/// 원통형 챔버 형상.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChamberGeometry {
    diameter_m: f64,
    height_m: f64,
}

impl ChamberGeometry {
    /// 직경과 높이[m]로 형상을 만든다. 둘 다 0보다 커야 한다.
    pub fn new(diameter_m: f64, height_m: f64) -> Result<Self, MdfError> {
        if !(diameter_m.is_finite() && diameter_m > 0.0) {
            return Err(MdfError::InvalidInput("챔버 직경은 0보다 커야 합니다."));
        }
        if !(height_m.is_finite() && height_m > 0.0) {
            return Err(MdfError::InvalidInput("챔버 높이는 0보다 커야 합니다."));
        }
        Ok(Self {
            diameter_m,
            height_m,
        })
    }

    pub fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn volume_m3(&self) -> f64 {
        chamber_properties(self.diameter_m, self.height_m).0
    }

    /// [`chamber_properties`]와 같은 측면적.
    pub fn area_m2(&self) -> f64 {
        chamber_properties(self.diameter_m, self.height_m).1
    }

    /// 토양과 맞닿는 바닥 원면적.
    pub fn footprint_area_m2(&self) -> f64 {
        PI * self.diameter_m.powi(2) / 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(ChamberGeometry::new(0.0, 0.2).is_err());
        assert!(ChamberGeometry::new(0.2, -0.1).is_err());
        assert!(ChamberGeometry::new(f64::NAN, 0.2).is_err());
    }

    #[test]
    fn footprint_volume_ratio_is_height() {
        let g = ChamberGeometry::new(0.3, 0.15).unwrap();
        assert!((g.volume_m3() / g.footprint_area_m2() - 0.15).abs() < 1e-12);
    }
}
