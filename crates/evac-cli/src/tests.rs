//! Tests for evac-cli.

use std::path::Path;

const BUILDING: &str = r#"{
    "name": "office",
    "zones": [
        { "key": "out",    "name": "Outside", "sign": "outside" },
        { "key": "hall",   "name": "Hall",    "sign": "room", "area": 40.0, "people": 10 },
        { "key": "office", "name": "Office",  "sign": "room", "area": 20.0, "people": 5 }
    ],
    "transits": [
        { "key": "exit", "name": "Exit", "sign": "door_way_out", "width": 1.2, "zones": ["hall", "out"] },
        { "key": "d1",   "name": "D1",   "sign": "door_way_int", "width": 0.9, "zones": ["office", "hall"] }
    ]
}"#;

/// Write `office.json` and a scenario referring to it into `dir`.
fn write_inputs(dir: &Path, scenario: &str) -> std::path::PathBuf {
    std::fs::write(dir.join("office.json"), BUILDING).unwrap();
    let path = dir.join("scenario.json");
    std::fs::write(&path, scenario).unwrap();
    path
}

#[cfg(test)]
mod args_tests {
    use clap::Parser;

    use crate::CliArgs;
    use evac_sim::ScenarioConfig;

    #[test]
    fn parses_every_flag() {
        let args = CliArgs::try_parse_from([
            "evac", "s.json", "--out", "res", "--format", "sqlite", "--seconds", "--max-ticks", "42", "-v",
        ])
        .unwrap();
        assert_eq!(args.scenario.as_deref(), Some(std::path::Path::new("s.json")));
        assert_eq!(args.format.as_deref(), Some("sqlite"));
        assert!(args.seconds);
        assert_eq!(args.max_ticks, Some(42));
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn scenario_required_unless_printing_config() {
        assert!(CliArgs::try_parse_from(["evac"]).is_err());
        let args = CliArgs::try_parse_from(["evac", "--print-config"]).unwrap();
        assert!(args.print_config);
        assert!(args.scenario.is_none());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(CliArgs::try_parse_from(["evac", "s.json", "-v", "-q"]).is_err());
        let quiet = CliArgs::try_parse_from(["evac", "s.json", "-q"]).unwrap();
        assert_eq!(quiet.log_level(), "warn");
    }

    #[test]
    fn overrides_only_what_was_given() {
        let mut scenario = ScenarioConfig::default();
        scenario.output.format = "parquet".to_owned();
        scenario.stop.max_ticks = Some(7);

        let args = CliArgs { seconds: true, ..CliArgs::default() };
        args.override_scenario(&mut scenario);
        assert_eq!(scenario.output.format, "parquet");
        assert_eq!(scenario.stop.max_ticks, Some(7));
        assert!(scenario.output.seconds);

        let args = CliArgs { max_ticks: Some(9), format: Some("csv".into()), ..CliArgs::default() };
        args.override_scenario(&mut scenario);
        assert_eq!(scenario.stop.max_ticks, Some(9));
        assert_eq!(scenario.output.format, "csv");
    }
}

#[cfg(test)]
mod run_tests {
    use evac_sim::{ScenarioConfig, StopReason};

    use super::write_inputs;
    use crate::{CliArgs, effective_scenario, run_scenario};

    #[test]
    fn writes_csv_next_to_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_inputs(dir.path(), r#"{ "bimFiles": ["office.json"] }"#);

        let args = CliArgs { scenario: Some(path.clone()), ..CliArgs::default() };
        let scenario = effective_scenario(&args).unwrap();
        let summaries = run_scenario(&scenario, Some(&path)).unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].building, "office");
        assert_eq!(summaries[0].stop_reason, StopReason::Evacuated);
        assert!((summaries[0].evacuated - 15.0).abs() < 1e-9);
        assert!(dir.path().join("office_detailed.csv").exists());
        assert!(dir.path().join("office_short.csv").exists());
    }

    #[test]
    fn scenario_settings_reach_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_inputs(
            dir.path(),
            r#"{
                "bimFiles": ["office.json"],
                "distribution": { "type": "uniform", "density": 1.0 },
                "output": { "dir": "out" }
            }"#,
        );
        let args = CliArgs { scenario: Some(path.clone()), max_ticks: Some(3), ..CliArgs::default() };
        let scenario = effective_scenario(&args).unwrap();
        assert_eq!(scenario.output.dir, Some(dir.path().join("out")));

        let summaries = run_scenario(&scenario, Some(&path)).unwrap();
        assert_eq!(summaries[0].stop_reason, StopReason::TickBudget);
        assert_eq!(summaries[0].ticks, 3);
        assert!((summaries[0].people_in_building + summaries[0].evacuated - 60.0).abs() < 1e-9);
        assert!(dir.path().join("out").join("office_short.csv").exists());
    }

    #[test]
    fn empty_scenario_is_an_error() {
        let err = run_scenario(&ScenarioConfig::default(), None).unwrap_err();
        assert!(err.to_string().contains("no building files"));
    }

    #[test]
    fn unknown_format_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_inputs(dir.path(), r#"{ "bimFiles": ["office.json"] }"#);
        let args = CliArgs { scenario: Some(path.clone()), format: Some("xlsx".into()), ..CliArgs::default() };
        let scenario = effective_scenario(&args).unwrap();
        assert!(run_scenario(&scenario, Some(&path)).is_err());
    }

    #[test]
    fn non_positive_width_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_inputs(
            dir.path(),
            r#"{
                "bimFiles": ["office.json"],
                "transitionParameters": { "special": [ { "keys": ["exit"], "width": 0.0 } ] }
            }"#,
        );
        let args = CliArgs { scenario: Some(path.clone()), ..CliArgs::default() };
        let scenario = effective_scenario(&args).unwrap();
        let err = run_scenario(&scenario, Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("must be positive"));
        assert!(!dir.path().join("office_detailed.csv").exists());
    }

    #[test]
    fn missing_building_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_inputs(dir.path(), r#"{ "bimFiles": ["missing.json"] }"#);
        let args = CliArgs { scenario: Some(path.clone()), ..CliArgs::default() };
        let scenario = effective_scenario(&args).unwrap();
        let err = run_scenario(&scenario, Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }
}
