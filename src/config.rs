use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::chamber::design::{
    ChamberDesign, SensorSpec, ValueRange, DEFAULT_MEASUREMENT_TIME_S,
    DEFAULT_SENSORS_ACCURACY_PPB, DEFAULT_SENSORS_FREQUENCY_HZ, DEFAULT_TOLERANCE_FLUX_PCT,
};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 설계 시나리오. 기본값은 예제 시나리오(플럭스 500~8000, 280~300 K, 100~110 kPa, 직경 0.25 m)이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// 기대 플럭스 (최소, 최대) [nmol m-2 s-1]
    pub expected_flux_range: ValueRange,
    /// 기온 (최소, 최대) [K]
    pub temperature_range: ValueRange,
    /// 대기압 (최소, 최대) [Pa]
    pub pressure_range: ValueRange,
    /// [Hz]
    pub sensors_frequency: f64,
    /// [ppb]
    pub sensors_accuracy: f64,
    /// [s]
    pub measurement_time: f64,
    /// [%]
    pub tolerance_flux: f64,
    /// 챔버 직경 [m]
    pub diameter: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            expected_flux_range: ValueRange::new(0.5 * 1000.0, 8.0 * 1000.0),
            temperature_range: ValueRange::new(280.0, 300.0),
            pressure_range: ValueRange::new(100_000.0, 110_000.0),
            sensors_frequency: DEFAULT_SENSORS_FREQUENCY_HZ,
            sensors_accuracy: DEFAULT_SENSORS_ACCURACY_PPB,
            measurement_time: DEFAULT_MEASUREMENT_TIME_S,
            tolerance_flux: DEFAULT_TOLERANCE_FLUX_PCT,
            diameter: 0.25,
        }
    }
}

impl ScenarioConfig {
    /// 시나리오 값으로 챔버 설계 객체를 만든다.
    pub fn to_design(&self) -> ChamberDesign {
        ChamberDesign::new(
            self.expected_flux_range,
            self.temperature_range,
            self.pressure_range,
        )
        .with_sensors(SensorSpec {
            frequency_hz: self.sensors_frequency,
            accuracy_ppb: self.sensors_accuracy,
        })
        .with_measurement_time(self.measurement_time)
        .with_tolerance_flux(self.tolerance_flux)
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어 (auto/ko/en)
    pub language: String,
    pub scenario: ScenarioConfig,
    #[serde(skip)]
    path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            scenario: ScenarioConfig::default(),
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.path = path.to_path_buf();
        info!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    } else {
        let cfg = Config {
            path: path.to_path_buf(),
            ..Config::default()
        };
        cfg.save()?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정이 저장되는 경로.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 설정을 로드한 경로에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&self.path, content)?;
        info!(path = %self.path.display(), "saved configuration");
        Ok(())
    }
}
