/// 단위 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    Pressure,
    Length,
    Area,
    Volume,
    Flux,
    MixingRatio,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 7] = [
        QuantityKind::Temperature,
        QuantityKind::Pressure,
        QuantityKind::Length,
        QuantityKind::Area,
        QuantityKind::Volume,
        QuantityKind::Flux,
        QuantityKind::MixingRatio,
    ];

    /// CLI 인자 문자열(`temperature`, `pressure`, `ppb` 등)을 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temp" | "t" => Some(QuantityKind::Temperature),
            "pressure" | "p" => Some(QuantityKind::Pressure),
            "length" | "diameter" | "height" => Some(QuantityKind::Length),
            "area" => Some(QuantityKind::Area),
            "volume" => Some(QuantityKind::Volume),
            "flux" => Some(QuantityKind::Flux),
            "mixing-ratio" | "mixing_ratio" | "accuracy" | "concentration" => {
                Some(QuantityKind::MixingRatio)
            }
            _ => None,
        }
    }
}
