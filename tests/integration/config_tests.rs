//! Configuration loading integration tests
//!
//! Config files on disk, defaults flowing into the calculator and the
//! command line layer on top.

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use true_cost::cli::Cli;
    use true_cost::config::{InputDefaults, OutputFormat, Validate};
    use true_cost::{AppError, Config, CostInputs, Location, Sector, calculate_costs};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_file_defaults_drive_calculation() {
        let file = write_config(
            r#"
defaults:
  annual_salary: 28000
  number_of_hires: 16
  sector: finance
  location: north
"#,
        );
        let config = Config::from_file(file.path()).unwrap();
        let inputs = CostInputs::from(&config.defaults);

        assert_eq!(inputs.sector, Sector::Finance);
        assert_eq!(inputs.location, Location::North);
        let costs = calculate_costs(&inputs).unwrap();
        assert_eq!(costs.team_lead_yearly, 2.0 * 30.0 * 2080.0);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let file = write_config("defaults: [not, a, map");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let err = Config::from_yaml("defaults:\n  currency: JPY\n").unwrap_err();
        assert!(err.to_string().contains("JPY"));
    }

    #[test]
    fn test_defaults_validation() {
        let defaults = InputDefaults {
            annual_salary: f64::NAN,
            ..Default::default()
        };
        assert!(defaults.validate().is_err());
        assert!(InputDefaults::default().validate().is_ok());
    }

    #[test]
    fn test_cli_reads_config_file() {
        let file = write_config("defaults:\n  number_of_hires: 12\noutput:\n  format: json\n");
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from(["true-cost", "--config", &path, "calculate"]).unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);

        let out = cli.execute(&config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["inputs"]["number_of_hires"], 12);
    }

    #[test]
    fn test_cli_flags_beat_config_file() {
        let file = write_config("defaults:\n  number_of_hires: 12\noutput:\n  format: json\n");
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "true-cost",
            "calculate",
            "--config",
            &path,
            "--hires",
            "2",
            "--format",
            "yaml",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        let out = cli.execute(&config).unwrap();

        assert!(out.contains("number_of_hires: 2"));
    }
}
