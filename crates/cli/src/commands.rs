//! Non-interactive subcommands.

use color_eyre::eyre::{Result, WrapErr};
use color_eyre::Section;
use colored::Colorize;
use serde_json::{json, Value};
use sf_core::init::{generate_config_dir, InitError, InitOptions};
use sf_core::record::{build_record, draft_from_json};
use sf_core::{FormSchema, RecordError};
use sf_protocol::{Field, FieldError, Record, Step};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

const LABEL_WIDTH: usize = 22;

/// Validate a JSON draft read from `input` (a path, or `-` for stdin).
///
/// Exits with status 1 when any field is invalid.
pub fn check(input: &str, json: bool) -> Result<ExitCode> {
    let text = read_input(input)?;
    let value: Value =
        serde_json::from_str(&text).wrap_err_with(|| format!("{input} is not valid JSON"))?;
    let draft = draft_from_json(&value)?;
    debug!(?draft, "read draft");

    match build_record(&FormSchema::standard(), &draft) {
        Ok(record) => {
            if json {
                println!("{}", json!({ "valid": true, "record": record }));
            } else {
                print_record(&record);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(RecordError::Invalid { errors }) => {
            if json {
                println!("{}", json!({ "valid": false, "errors": errors }));
            } else {
                print_errors(&errors);
            }
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .wrap_err("cannot read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(input).wrap_err_with(|| format!("cannot read {input}"))
    }
}

fn print_record(record: &Record) {
    println!("{} Record is valid", "✓".green().bold());
    for field in Field::ALL {
        println!(
            "  {:<LABEL_WIDTH$} {}",
            field.label().cyan(),
            record.display_value(field)
        );
    }
}

fn print_errors(errors: &[FieldError]) {
    println!("{} {} invalid field(s)", "✗".red().bold(), errors.len());
    for error in errors {
        println!(
            "  {:<LABEL_WIDTH$} {}",
            error.field.label().yellow(),
            error.message.red()
        );
    }
}

/// Print the field rules, grouped by step.
pub fn schema(json: bool) -> Result<ExitCode> {
    let schema = FormSchema::standard();

    if json {
        let fields: Vec<Value> = Field::ALL
            .iter()
            .map(|field| {
                let rules: Vec<Value> = schema
                    .spec(*field)
                    .map(|spec| spec.rules.as_slice())
                    .unwrap_or_default()
                    .iter()
                    .map(|rule| json!({ "rule": rule.to_string(), "message": rule.message() }))
                    .collect();
                json!({
                    "field": field,
                    "step": field.step(),
                    "label": field.label(),
                    "rules": rules,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(ExitCode::SUCCESS);
    }

    for step in Step::ALL {
        println!(
            "{}",
            format!("Step {}: {}", step.number(), step.title()).bold()
        );
        for field in step.fields() {
            let rules = schema
                .spec(*field)
                .map(|spec| {
                    spec.rules
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .filter(|rules| !rules.is_empty());

            match rules {
                Some(rules) => println!(
                    "  {:<10} {:<LABEL_WIDTH$} {rules}",
                    field.key(),
                    field.label()
                ),
                None => println!(
                    "  {:<10} {:<LABEL_WIDTH$} {}",
                    field.key(),
                    field.label(),
                    "no rules".dimmed()
                ),
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Scaffold `.stepform/config.toml` in `dir` or the current directory.
pub fn init(dir: Option<PathBuf>, force: bool) -> Result<ExitCode> {
    let target_dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().wrap_err("cannot read current directory")?,
    };

    match generate_config_dir(&InitOptions { target_dir, force }) {
        Ok(path) => {
            println!("{} Created {}", "✓".green().bold(), path.display());
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ InitError::AlreadyExists(_)) => {
            Err(err).suggestion("run `stepform init --force` to replace it with the defaults")
        }
        Err(err) => Err(err.into()),
    }
}
