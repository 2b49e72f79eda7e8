use std::io::Write;

use tracing::debug;

use crate::chamber::{self, ChamberDesign, ChamberGeometry, MdfInput};
use crate::cli::{Cli, Command};
use crate::config::{self, Config};
use crate::conversion;
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// MDF/형상 입력 오류
    Mdf(chamber::MdfError),
    /// 설계 시나리오 오류
    Design(chamber::DesignError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Mdf(e) => write!(f, "MDF 계산 오류: {e}"),
            AppError::Design(e) => write!(f, "챔버 설계 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(value: config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<chamber::MdfError> for AppError {
    fn from(value: chamber::MdfError) -> Self {
        AppError::Mdf(value)
    }
}

impl From<chamber::DesignError> for AppError {
    fn from(value: chamber::DesignError) -> Self {
        AppError::Design(value)
    }
}

/// 설정 파일을 읽고 언어를 결정한 뒤 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, None);
    debug!(%lang, command = ?cli.command, "starting");
    let command = cli.command.unwrap_or(Command::Scenario);
    if command == Command::Menu {
        return run_menu(&mut cfg, &tr);
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(&command, &cfg, &tr, cli.strict, &mut out)
}

/// 비대화형 명령을 실행하고 결과를 `out`에 쓴다.
pub fn run_command<W: Write>(
    command: &Command,
    cfg: &Config,
    tr: &Translator,
    strict: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let design = cfg.scenario.to_design();
    if strict {
        design.validate()?;
    }
    match command {
        Command::Scenario | Command::Menu => {
            if strict {
                check_diameter(cfg.scenario.diameter)?;
            }
            design.write_report(cfg.scenario.diameter, out)?;
        }
        Command::Height { diameter } => {
            if strict {
                check_diameter(*diameter)?;
            }
            design.write_report(*diameter, out)?;
        }
        Command::Mdf {
            diameter,
            height,
            pressure,
            temperature,
        } => {
            let geometry = ChamberGeometry::new(*diameter, *height)?;
            write_chamber_check(&design, &geometry, *pressure, *temperature, tr, out)?;
        }
        Command::Catalog => write_catalog(&design, tr, out)?,
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let kind = conversion::parse_quantity(kind)?;
            let result = conversion::convert(kind, *value, from, to)?;
            writeln!(out, "{} {result} {}", tr.t(i18n::keys::UNIT_CONVERSION_RESULT), to.trim())?;
        }
    }
    Ok(())
}

fn check_diameter(diameter: f64) -> Result<(), chamber::MdfError> {
    if diameter.is_finite() && diameter > 0.0 {
        Ok(())
    } else {
        Err(chamber::MdfError::InvalidInput("챔버 직경은 0보다 커야 합니다."))
    }
}

/// 챔버의 MDF를 계산해 목표 MDF와 비교한다.
/// 압력/온도가 주어지지 않으면 시나리오의 최악 조건(최고 압력, 최저 온도)을 쓴다.
pub fn write_chamber_check<W: Write>(
    design: &ChamberDesign,
    geometry: &ChamberGeometry,
    pressure_pa: Option<f64>,
    temperature_k: Option<f64>,
    tr: &Translator,
    out: &mut W,
) -> Result<(), AppError> {
    let mdf = match (pressure_pa, temperature_k) {
        (None, None) => design.detectable_flux(geometry),
        (p, t) => chamber::compute_mdf(MdfInput {
            accuracy_ppb: design.sensors().accuracy_ppb,
            closure_time_s: design.measurement_time_s(),
            frequency_hz: design.sensors().frequency_hz,
            volume_m3: geometry.volume_m3(),
            area_m2: geometry.footprint_area_m2(),
            pressure_pa: p.unwrap_or(design.pressure().max),
            temperature_k: t.unwrap_or(design.temperature().min),
        })?,
    };
    let target = design.target_mdf();
    writeln!(out, "{} {mdf:.2}", tr.t(i18n::keys::RESULT_DETECTABLE_FLUX))?;
    writeln!(out, "{} {target:.2}", tr.t(i18n::keys::RESULT_TARGET_MDF))?;
    let verdict = if mdf <= target {
        i18n::keys::RESULT_ADEQUATE
    } else {
        i18n::keys::RESULT_INADEQUATE
    };
    writeln!(out, "{}", tr.t(verdict))?;
    Ok(())
}

/// 규격 직경별 설계 결과 표를 쓴다.
pub fn write_catalog<W: Write>(
    design: &ChamberDesign,
    tr: &Translator,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "{}", tr.t(i18n::keys::CATALOG_COLUMNS))?;
    for (opt, rec) in design.evaluate_catalog() {
        writeln!(
            out,
            "{:.3}\t{:.3}\t{:.2}\t{:.2}",
            opt.outer_m, opt.inner_m, rec.volume_area_ratio_m, rec.ratio_area_perimeter_cm
        )?;
    }
    Ok(())
}

/// 대화형 메뉴의 메인 루프를 실행한다.
pub fn run_menu(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::MinimalHeight => ui_cli::handle_minimal_height(tr, config)?,
            MenuChoice::ChamberCheck => ui_cli::handle_chamber_check(tr, config)?,
            MenuChoice::Catalog => ui_cli::handle_catalog(tr, config)?,
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
