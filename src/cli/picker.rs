//! Interactive prompts for `pipesel pick`.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the picker provides the "run `pipesel` and answer prompts" UX
//!
//! Both prompts accept `q` to quit; EOF on stdin counts as quitting too.

use std::io::{self, Write};

use crate::error::AppError;
use crate::length::LengthUnit;

/// Prompt the user to select a catalog from the given list.
///
/// Behavior:
/// - list catalogs with numbers
/// - accept either a number (from the list) or a catalog identifier
/// - `q` (or EOF) cancels → `Ok(None)`
pub fn prompt_for_catalog(catalogs: &[String]) -> Result<Option<String>, AppError> {
    println!("Found {} catalog(s):", catalogs.len());
    for (idx, id) in catalogs.iter().enumerate() {
        println!("{:>3}) {id}", idx + 1);
    }

    loop {
        let Some(input) = prompt(&format!(
            "Select a catalog by number (1-{}) or name (q to quit): ",
            catalogs.len()
        ))?
        else {
            return Ok(None);
        };

        if let Ok(choice) = input.parse::<usize>() {
            if (1..=catalogs.len()).contains(&choice) {
                return Ok(Some(catalogs[choice - 1].clone()));
            }
            println!(
                "Invalid choice: {choice}. Enter a number between 1 and {}.",
                catalogs.len()
            );
            continue;
        }

        if catalogs.iter().any(|id| id == &input) {
            return Ok(Some(input));
        }
        println!("Unknown catalog '{input}'.");
    }
}

/// Prompt for a length text and unit.
///
/// The length stays raw text; tolerant parsing happens in the pipeline so the
/// interactive path behaves exactly like `pipesel select -l`.
pub fn prompt_for_length(default_unit: LengthUnit) -> Result<Option<(String, LengthUnit)>, AppError> {
    let Some(length_text) = prompt("Length (e.g. 80,034; q to quit): ")? else {
        return Ok(None);
    };

    let unit = loop {
        let Some(input) = prompt(&format!(
            "Unit m/cm (default {}; q to quit): ",
            default_unit.label()
        ))?
        else {
            return Ok(None);
        };

        match input.to_ascii_lowercase().as_str() {
            "" => break default_unit,
            "m" => break LengthUnit::Meter,
            "cm" => break LengthUnit::Centimeter,
            other => println!("Unknown unit '{other}'. Enter 'm' or 'cm'."),
        }
    };

    Ok(Some((length_text, unit)))
}

/// Print a prompt and read one trimmed line.
///
/// `Ok(None)` means the user quit (`q`) or stdin reached EOF.
fn prompt(text: &str) -> Result<Option<String>, AppError> {
    print!("{text}");
    io::stdout()
        .flush()
        .map_err(|e| AppError::input(format!("Failed to write prompt: {e}")))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| AppError::input(format!("Failed to read input: {e}")))?;

    if bytes == 0 {
        return Ok(None);
    }

    let input = input.trim();
    if input.eq_ignore_ascii_case("q") {
        return Ok(None);
    }
    Ok(Some(input.to_string()))
}
