//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the selection pipeline
//! - prints reports (text or JSON)
//! - drives the interactive picker

use clap::Parser;

use crate::cli::{Command, DbArgs, SelectArgs, picker};
use crate::domain::SelectRequest;
use crate::error::AppError;
use crate::length::LengthUnit;

pub mod pipeline;

/// Entry point for the `pipesel` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `pipesel` (and `pipesel --db-dir x`) to behave like
    // `pipesel pick ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Select(args) => handle_select(args),
        Command::List(args) => handle_list(args),
        Command::Pick(args) => handle_pick(args),
    }
}

fn handle_select(args: SelectArgs) -> Result<(), AppError> {
    let request = SelectRequest {
        catalog_id: args.catalog.clone(),
        length_text: args.length.clone(),
        unit: args.unit,
    };
    let run = pipeline::run_select(&args.db_dir, &request)?;

    // Row-level diagnostics go to stderr so `--json` output stays parseable.
    eprint!("{}", crate::report::format_load_warnings(&run.load));

    if args.json {
        println!("{}", crate::report::to_json(&run.result)?);
    } else {
        print!(
            "{}",
            crate::report::format_selection(&run.load, run.length_m, args.unit, &run.result)
        );
    }

    Ok(())
}

fn handle_list(args: DbArgs) -> Result<(), AppError> {
    let catalogs = crate::io::catalog::list_catalogs(&args.db_dir);
    if catalogs.is_empty() {
        println!("No catalogs found in '{}'.", args.db_dir.display());
        return Ok(());
    }
    for id in catalogs {
        println!("{id}");
    }
    Ok(())
}

fn handle_pick(args: DbArgs) -> Result<(), AppError> {
    let catalogs = crate::io::catalog::list_catalogs(&args.db_dir);
    if catalogs.is_empty() {
        return Err(AppError::config(format!(
            "No catalogs found in '{}'. Add CSV files or pass --db-dir.",
            args.db_dir.display()
        )));
    }

    let Some(catalog_id) = picker::prompt_for_catalog(&catalogs)? else {
        return Ok(());
    };

    // Repeat length prompts against the chosen catalog until the user quits.
    // The catalog is reloaded per request (see pipeline), so edits to the CSV
    // take effect between prompts.
    loop {
        let Some((length_text, unit)) = picker::prompt_for_length(LengthUnit::Meter)? else {
            return Ok(());
        };

        let request = SelectRequest {
            catalog_id: catalog_id.clone(),
            length_text,
            unit,
        };

        match pipeline::run_select(&args.db_dir, &request) {
            Ok(run) => {
                eprint!("{}", crate::report::format_load_warnings(&run.load));
                print!(
                    "{}",
                    crate::report::format_selection(&run.load, run.length_m, unit, &run.result)
                );
                println!();
            }
            // Invalid input should re-prompt, not kill the session.
            Err(err) => println!("{err}"),
        }
    }
}

/// Rewrite argv so `pipesel` defaults to `pipesel pick`.
///
/// Rules:
/// - `pipesel`                      -> `pipesel pick`
/// - `pipesel --db-dir x`           -> `pipesel pick --db-dir x`
/// - `pipesel --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("pick".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "select" | "list" | "pick");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "pick flags".
    if arg1.starts_with('-') {
        argv.insert(1, "pick".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_becomes_pick() {
        assert_eq!(rewrite_args(args(&["pipesel"])), args(&["pipesel", "pick"]));
    }

    #[test]
    fn leading_flag_becomes_pick_flags() {
        assert_eq!(
            rewrite_args(args(&["pipesel", "--db-dir", "x"])),
            args(&["pipesel", "pick", "--db-dir", "x"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["pipesel", "select", "-c", "a", "-l", "1"])),
            args(&["pipesel", "select", "-c", "a", "-l", "1"])
        );
        assert_eq!(rewrite_args(args(&["pipesel", "--help"])), args(&["pipesel", "--help"]));
    }
}
