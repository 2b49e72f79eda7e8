//! Nickerson(2016) 최소 검출 플럭스(MDF) 계산 모듈.
//!
//! 원식은 검증 없이 그대로 계산하며(0 분모는 inf/NaN 으로 전파),
//! `compute_*` 계열은 입력을 검사한 뒤 같은 식을 호출한다.

use tracing::debug;

/// 기체상수 R [m3 Pa K-1 mol-1]
pub const GAS_CONSTANT_R: f64 = 8.314;

/// MDF 계산 입력 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum MdfError {
    /// 입력값 오류
    InvalidInput(&'static str),
}

impl std::fmt::Display for MdfError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MdfError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for MdfError {}

/// 최소 검출 플럭스 [nmol m-2 s-1]를 계산한다.
///
/// - `aa`: 분석 정확도 [ppb]
/// - `tc`: 챔버 폐쇄 시간 [s]
/// - `freq`: 측정 주파수 [Hz]
/// - `v`: 챔버 체적 [m3], `a`: 챔버 면적 [m2]
/// - `p`: 대기압 [Pa], `t`: 기온 [K]
///
/// MDF = (Aa / (tc·√(tc·f))) · (V·P / (A·R·T))
pub fn mdf_nickerson2016(aa: f64, tc: f64, freq: f64, v: f64, a: f64, p: f64, t: f64) -> f64 {
    (aa / (tc * (tc * freq).sqrt())) * (v * p / (a * GAS_CONSTANT_R * t))
}

/// 목표 MDF를 만족하는 V/A 값[m]을 계산한다.
///
/// 이름은 "최소 높이"이지만 실제 반환값은 체적/면적 비(V/A)이다.
/// 면적을 바닥 원면적으로 두면 높이와 같아지지만 [`chamber_properties`]의
/// 측면적 정의와는 일치하지 않는다. `_diameter`는 받기만 하고 쓰지 않는다.
///
/// [`chamber_properties`]: super::geometry::chamber_properties
pub fn mdf_nickerson2016_minimal_height(
    mdf: f64,
    aa: f64,
    tc: f64,
    freq: f64,
    p: f64,
    t: f64,
    _diameter: f64,
) -> f64 {
    mdf * GAS_CONSTANT_R * t * tc * (tc * freq).sqrt() / (aa * p)
}

/// MDF 계산 입력.
#[derive(Debug, Clone)]
pub struct MdfInput {
    /// 분석 정확도 [ppb]
    pub accuracy_ppb: f64,
    /// 폐쇄 시간 [s]
    pub closure_time_s: f64,
    /// 측정 주파수 [Hz]
    pub frequency_hz: f64,
    /// 챔버 체적 [m3]
    pub volume_m3: f64,
    /// 챔버 면적 [m2]
    pub area_m2: f64,
    /// 대기압 [Pa]
    pub pressure_pa: f64,
    /// 기온 [K]
    pub temperature_k: f64,
}

/// 최소 V/A 계산 입력.
#[derive(Debug, Clone)]
pub struct MinimalRatioInput {
    /// 목표 MDF [nmol m-2 s-1]
    pub target_mdf: f64,
    pub accuracy_ppb: f64,
    pub closure_time_s: f64,
    pub frequency_hz: f64,
    pub pressure_pa: f64,
    pub temperature_k: f64,
}

fn require_positive(value: f64, msg: &'static str) -> Result<(), MdfError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MdfError::InvalidInput(msg))
    }
}

/// 입력을 검사한 뒤 MDF를 계산한다.
pub fn compute_mdf(input: MdfInput) -> Result<f64, MdfError> {
    require_positive(input.accuracy_ppb, "분석 정확도는 0보다 커야 합니다.")?;
    require_positive(input.closure_time_s, "폐쇄 시간은 0보다 커야 합니다.")?;
    require_positive(input.frequency_hz, "측정 주파수는 0보다 커야 합니다.")?;
    require_positive(input.volume_m3, "챔버 체적은 0보다 커야 합니다.")?;
    require_positive(input.area_m2, "챔버 면적은 0보다 커야 합니다.")?;
    require_positive(input.pressure_pa, "압력은 0보다 커야 합니다.")?;
    require_positive(input.temperature_k, "절대온도는 0보다 커야 합니다.")?;
    let mdf = mdf_nickerson2016(
        input.accuracy_ppb,
        input.closure_time_s,
        input.frequency_hz,
        input.volume_m3,
        input.area_m2,
        input.pressure_pa,
        input.temperature_k,
    );
    debug!(mdf, ?input, "minimum detectable flux");
    Ok(mdf)
}

/// 입력을 검사한 뒤 목표 MDF에 필요한 V/A 값을 계산한다.
pub fn compute_minimal_ratio(input: MinimalRatioInput) -> Result<f64, MdfError> {
    require_positive(input.target_mdf, "목표 MDF는 0보다 커야 합니다.")?;
    require_positive(input.accuracy_ppb, "분석 정확도는 0보다 커야 합니다.")?;
    require_positive(input.closure_time_s, "폐쇄 시간은 0보다 커야 합니다.")?;
    require_positive(input.frequency_hz, "측정 주파수는 0보다 커야 합니다.")?;
    require_positive(input.pressure_pa, "압력은 0보다 커야 합니다.")?;
    require_positive(input.temperature_k, "절대온도는 0보다 커야 합니다.")?;
    let ratio = mdf_nickerson2016_minimal_height(
        input.target_mdf,
        input.accuracy_ppb,
        input.closure_time_s,
        input.frequency_hz,
        input.pressure_pa,
        input.temperature_k,
        0.0,
    );
    debug!(ratio, ?input, "minimal volume/area ratio");
    Ok(ratio)
}
