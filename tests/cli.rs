use clap::Parser;
use flux_chamber_toolbox::app::{run_command, AppError};
use flux_chamber_toolbox::cli::{Cli, Command};
use flux_chamber_toolbox::config::Config;
use flux_chamber_toolbox::i18n::Translator;

fn run(command: Command, strict: bool) -> Result<String, AppError> {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let mut out = Vec::new();
    run_command(&command, &cfg, &tr, strict, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn no_subcommand_runs_scenario() {
    let cli = Cli::try_parse_from(["flux_chamber_toolbox"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.lang, "auto");
    assert!(!cli.strict);
}

#[test]
fn height_subcommand_prints_report() {
    let cli = Cli::try_parse_from(["flux_chamber_toolbox", "height", "--diameter", "0.25"]).unwrap();
    let command = cli.command.unwrap();
    assert_eq!(command, Command::Height { diameter: 0.25 });
    let text = run(command, false).unwrap();
    assert_eq!(text, "Minimal height of the chamber:\nheight <= 0.26 m\nratio:\t6.25 cm\n");
}

#[test]
fn scenario_matches_height_at_configured_diameter() {
    assert_eq!(
        run(Command::Scenario, true).unwrap(),
        run(Command::Height { diameter: 0.25 }, true).unwrap()
    );
}

#[test]
fn mdf_subcommand_reports_verdict() {
    let text = run(
        Command::Mdf {
            diameter: 0.25,
            height: 0.1,
            pressure: None,
            temperature: None,
        },
        false,
    )
    .unwrap();
    assert!(text.contains("Target MDF [nmol m-2 s-1]: 250.00"), "{text}");
    assert!(text.contains("Target satisfied."), "{text}");
}

#[test]
fn mdf_subcommand_rejects_zero_height() {
    let err = run(
        Command::Mdf {
            diameter: 0.25,
            height: 0.0,
            pressure: None,
            temperature: None,
        },
        false,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Mdf(_)));
}

#[test]
fn catalog_lists_every_stock_diameter() {
    let text = run(Command::Catalog, false).unwrap();
    assert_eq!(text.lines().count(), 13);
    assert!(text.lines().any(|l| l.starts_with("0.250\t0.240\t0.26\t6.00")), "{text}");
}

#[test]
fn convert_subcommand_parses_negative_values() {
    let cli = Cli::try_parse_from(["flux_chamber_toolbox", "convert", "temperature", "-10", "C", "K"])
        .unwrap();
    let text = run(cli.command.unwrap(), false).unwrap();
    assert!(text.starts_with("Result: 263.15"), "{text}");
}

#[test]
fn strict_rejects_non_positive_diameter() {
    for diameter in [0.0, -0.25, f64::NAN] {
        let err = run(Command::Height { diameter }, true).unwrap_err();
        assert!(matches!(err, AppError::Mdf(_)), "diameter={diameter}: {err}");
    }
    let cli = Cli::try_parse_from([
        "flux_chamber_toolbox",
        "height",
        "--diameter",
        "0",
        "--strict",
    ])
    .unwrap();
    assert!(cli.strict);
    assert!(run(cli.command.unwrap(), cli.strict).is_err());
}

#[test]
fn lenient_mode_still_evaluates_zero_diameter() {
    let text = run(Command::Height { diameter: 0.0 }, false).unwrap();
    assert!(text.ends_with("ratio:\tNaN cm\n"), "{text}");
}
