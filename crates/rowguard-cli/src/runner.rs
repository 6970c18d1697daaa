use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rowguard_core::{CsvSheet, ValidationRun, Worksheet};
use rowguard_reports::{JsonFormatter, Reporter, StdOutFormatter};

use crate::constructor::construct_validation;
use crate::parser::parse_config;
use crate::{Args, OutputFormat};

pub fn run(args: Args) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION").to_string();
    match args.output {
        OutputFormat::Stdout => {
            let mut formatter = StdOutFormatter::new(version);
            execute(&args, &mut formatter)
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version);
            execute(&args, &mut formatter)?;
            println!("{}", formatter.to_json()?);
            Ok(())
        }
    }
}

fn execute(args: &Args, reporter: &mut dyn Reporter) -> Result<()> {
    reporter.on_start();
    reporter.on_loading();

    let config_path = Path::new(&args.config);
    let doc = parse_config(config_path)?;
    let validation = construct_validation(doc).with_context(|| {
        format!(
            "Invalid validation configuration: {}",
            config_path.display()
        )
    })?;

    let mut sheet = CsvSheet::open(Path::new(&args.file))
        .with_context(|| format!("Failed to open input file: {}", args.file))?;

    reporter.on_validation_start();
    let result = ValidationRun::new(&validation).execute(sheet.name(), sheet.rows())?;

    let column = validation.error_column().index();
    for annotation in result.annotations() {
        sheet.set_cell(annotation.row, column, &annotation.message);
    }

    // Save failures are reported, the summary still prints
    let output_path = output_file_name(&args.file, result.error_rows());
    if let Err(err) = sheet.save_as(&output_path) {
        log::error!(
            "Failed to save annotated copy '{}': {}",
            output_path.display(),
            err
        );
    }

    reporter.on_sheet_result(&result);
    reporter.on_complete(result.error_rows());
    Ok(())
}

/// Output name: the input name plus a literal error-count suffix.
fn output_file_name(input: &str, error_rows: usize) -> PathBuf {
    PathBuf::from(format!("{}validation_result_{}.csv", input, error_rows))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    const CONFIG: &str = r#"{
        "dictionaries": { "colors": ["RED", "BLUE"] },
        "fields": [
            {
                "fieldID": 1,
                "type": "string",
                "storage": "single",
                "separator": null,
                "rules": [ { "type": "NON_NULL", "errorMessage": "is mandatory" } ]
            },
            {
                "fieldID": 2,
                "type": "string",
                "storage": "multi",
                "separator": ";",
                "rules": [
                    { "type": "IN_DICTIONARY", "dictionary": "colors", "errorMessage": "has invalid colors" }
                ]
            }
        ],
        "keyField": 0,
        "errorMessageColumn": "H",
        "skipHeader": true
    }"#;

    #[test]
    fn test_output_file_name_carries_error_count() {
        let path = output_file_name("data/input.csv", 3);
        assert_eq!(
            path,
            PathBuf::from("data/input.csvvalidation_result_3.csv")
        );
    }

    #[test]
    fn test_run_annotates_failing_rows_and_writes_copy() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".validate.json");
        let input_path = dir.path().join("input.csv");
        fs::write(&config_path, CONFIG).unwrap();
        fs::write(&input_path, "Id,Name,Colors\n1,Widget,RED\n2,,green\n").unwrap();

        let args = Args {
            file: input_path.to_str().unwrap().to_string(),
            config: config_path.to_str().unwrap().to_string(),
            output: OutputFormat::Stdout,
            debug: false,
        };
        run(args).unwrap();

        let output_path = dir
            .path()
            .join(format!("{}validation_result_1.csv", "input.csv"));
        let copy = CsvSheet::open(&output_path).unwrap();

        // Clean row untouched
        assert_eq!(copy.rows()[1], vec!["1", "Widget", "RED"]);
        // Failing row annotated in column H (index 7)
        assert_eq!(
            copy.rows()[2][7],
            "Id: 2. Field Name is mandatory Field Colors has invalid colors, \
             values not in dictionary: green;\n"
        );
    }

    #[test]
    fn test_run_with_zero_errors_still_writes_copy() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".validate.json");
        let input_path = dir.path().join("input.csv");
        fs::write(&config_path, CONFIG).unwrap();
        fs::write(&input_path, "Id,Name,Colors\n1,Widget,RED\n").unwrap();

        let args = Args {
            file: input_path.to_str().unwrap().to_string(),
            config: config_path.to_str().unwrap().to_string(),
            output: OutputFormat::Stdout,
            debug: false,
        };
        run(args).unwrap();

        let output_path = dir
            .path()
            .join(format!("{}validation_result_0.csv", "input.csv"));
        let copy = CsvSheet::open(&output_path).unwrap();
        assert_eq!(copy.rows().len(), 2);
        assert_eq!(copy.rows()[1], vec!["1", "Widget", "RED"]);
    }

    #[test]
    fn test_run_missing_config_is_fatal() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("input.csv");
        fs::write(&input_path, "Id\n1\n").unwrap();

        let args = Args {
            file: input_path.to_str().unwrap().to_string(),
            config: dir.path().join("absent.json").to_str().unwrap().to_string(),
            output: OutputFormat::Stdout,
            debug: false,
        };

        assert!(run(args).is_err());
        // Fatal before any output: no annotated copy on disk
        assert!(
            !dir.path()
                .join(format!("{}validation_result_0.csv", "input.csv"))
                .exists()
        );
    }

    #[test]
    fn test_run_missing_input_is_fatal() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".validate.json");
        fs::write(&config_path, CONFIG).unwrap();

        let args = Args {
            file: dir.path().join("absent.csv").to_str().unwrap().to_string(),
            config: config_path.to_str().unwrap().to_string(),
            output: OutputFormat::Stdout,
            debug: false,
        };

        assert!(run(args).is_err());
    }
}
